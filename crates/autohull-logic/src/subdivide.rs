//! Grid subdivision (stage 2).
//!
//! Seeds one cell covering the bounding box of all cut points, then sweeps
//! every point across every cell: a horizontal line through its Y and a
//! vertical line through its X. Afterwards the cells form the product grid
//! of the cut coordinates.

use crate::rect::{Point, Rect};

/// Smallest rectangle containing every point, or `None` for no points.
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let (&(x0, y0), rest) = points.split_first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);
    for &(x, y) in rest {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Split every cell that `y` passes strictly through into an upper and lower part.
pub fn split_horizontal(cells: &[Rect], y: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity(cells.len() * 2);
    for cell in cells {
        if y > cell.y && y < cell.bottom() {
            let upper = Rect::new(cell.x, cell.y, cell.width, y - cell.y);
            out.push(upper);
            out.push(Rect::new(cell.x, y, cell.width, cell.height - upper.height));
        } else {
            out.push(*cell);
        }
    }
    out
}

/// Split every cell that `x` passes strictly through into a left and right part.
pub fn split_vertical(cells: &[Rect], x: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity(cells.len() * 2);
    for cell in cells {
        if x > cell.x && x < cell.right() {
            let left = Rect::new(cell.x, cell.y, x - cell.x, cell.height);
            out.push(left);
            out.push(Rect::new(x, cell.y, cell.width - left.width, cell.height));
        } else {
            out.push(*cell);
        }
    }
    out
}

/// Build the candidate cell grid over `points`, dropping zero-area cells.
pub fn subdivide(points: &[Point]) -> Vec<Rect> {
    let Some(bounds) = bounding_box(points) else {
        return Vec::new();
    };

    let mut cells = vec![bounds];
    for &(x, y) in points {
        cells = split_horizontal(&cells, y);
        cells = split_vertical(&cells, x);
    }

    let before = cells.len();
    cells.retain(|c| !c.is_degenerate());
    if cells.len() < before {
        log::debug!("Dropped {} degenerate cells", before - cells.len());
    }
    cells
}
