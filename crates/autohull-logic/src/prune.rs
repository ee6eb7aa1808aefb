//! Containment pruning and merging (stage 3).
//!
//! Every test here asks whether a thin band of the plane is solid, that is
//! whether the union of the solid obstacles covers it. Cut lines run along
//! wall centerlines, so a real wall covers a band straddling the seam it
//! sits on. A seam whose band has any free point is a grid artifact and the
//! cells on either side merge.
//!
//! Each step consumes its input list and builds a new one.

use crate::rect::Rect;

/// Sort top-to-bottom, then left-to-right.
pub fn sort_rows(cells: &mut [Rect]) {
    cells.sort_by_key(|c| (c.y, c.x, c.height, c.width));
}

/// Sort left-to-right, then top-to-bottom.
pub fn sort_columns(cells: &mut [Rect]) {
    cells.sort_by_key(|c| (c.x, c.y, c.width, c.height));
}

/// Whether every point of `area` lies inside some solid.
///
/// `area` is cut along each solid edge that crosses it. Within one piece
/// every solid either contains all points or none, so testing the piece's
/// top-left corner is exact. A degenerate area has no points and counts as
/// covered.
pub fn is_covered(area: &Rect, solids: &[Rect]) -> bool {
    if area.is_degenerate() {
        return true;
    }
    let touching: Vec<&Rect> = solids.iter().filter(|s| s.intersects(area)).collect();

    let mut xs = vec![area.x, area.right()];
    let mut ys = vec![area.y, area.bottom()];
    for s in &touching {
        xs.extend(
            [s.x, s.right()]
                .into_iter()
                .filter(|&x| x > area.x && x < area.right()),
        );
        ys.extend(
            [s.y, s.bottom()]
                .into_iter()
                .filter(|&y| y > area.y && y < area.bottom()),
        );
    }
    xs.sort_unstable();
    xs.dedup();
    ys.sort_unstable();
    ys.dedup();

    ys.windows(2).all(|row| {
        xs.windows(2).all(|col| {
            let corner = (col[0], row[0]);
            touching.iter().any(|s| s.contains_point(corner))
        })
    })
}

/// Whether a solid runs along the seam between `left` and the cell to its right.
///
/// The band reaches `inset` into each cell, or the whole cell when it is narrower.
pub fn row_separated(left: &Rect, right: &Rect, solids: &[Rect], inset: i32) -> bool {
    let near = inset.min(left.width);
    let far = inset.min(right.width);
    let band = Rect::new(left.right() - near, left.y, near + far, left.height);
    is_covered(&band, solids)
}

/// Whether a solid runs along the seam between `upper` and the cell below it.
pub fn column_separated(upper: &Rect, lower: &Rect, solids: &[Rect], inset: i32) -> bool {
    let near = inset.min(upper.height);
    let far = inset.min(lower.height);
    let band = Rect::new(upper.x, upper.bottom() - near, upper.width, near + far);
    is_covered(&band, solids)
}

/// Merge horizontally adjacent cells of the same row that no obstacle separates.
pub fn merge_rows(mut cells: Vec<Rect>, solids: &[Rect], inset: i32) -> Vec<Rect> {
    sort_rows(&mut cells);
    let mut merged: Vec<Rect> = Vec::with_capacity(cells.len());
    for cell in cells {
        if let Some(last) = merged.last_mut() {
            let same_row = last.y == cell.y && last.height == cell.height;
            if same_row && last.right() == cell.x && !row_separated(last, &cell, solids, inset) {
                last.width += cell.width;
                continue;
            }
        }
        merged.push(cell);
    }
    merged
}

/// Drop cells with no free point: they sit wholly inside solid material.
pub fn discard_wall_artifacts(cells: Vec<Rect>, solids: &[Rect]) -> Vec<Rect> {
    cells
        .into_iter()
        .filter(|cell| !is_covered(cell, solids))
        .collect()
}

fn left_bounded(cell: &Rect, solids: &[Rect], inset: i32) -> bool {
    let band = Rect::new(cell.x, cell.y, inset.min(cell.width), cell.height);
    is_covered(&band, solids)
}

fn right_bounded(cell: &Rect, solids: &[Rect], inset: i32) -> bool {
    let width = inset.min(cell.width);
    let band = Rect::new(cell.right() - width, cell.y, width, cell.height);
    is_covered(&band, solids)
}

/// Per row, drop cells from the left until one is bounded by an obstacle.
pub fn prune_left_unbounded(mut cells: Vec<Rect>, solids: &[Rect], inset: i32) -> Vec<Rect> {
    sort_rows(&mut cells);
    let mut kept = Vec::with_capacity(cells.len());
    for row in cells.chunk_by(|a, b| a.y == b.y) {
        match row.iter().position(|c| left_bounded(c, solids, inset)) {
            Some(i) => kept.extend_from_slice(&row[i..]),
            None => log::debug!("Row at y={} is open on the left", row[0].y),
        }
    }
    kept
}

/// Per row, drop cells from the right until one is bounded by an obstacle.
pub fn prune_right_unbounded(mut cells: Vec<Rect>, solids: &[Rect], inset: i32) -> Vec<Rect> {
    sort_rows(&mut cells);
    let mut kept = Vec::with_capacity(cells.len());
    for row in cells.chunk_by(|a, b| a.y == b.y) {
        match row.iter().rposition(|c| right_bounded(c, solids, inset)) {
            Some(i) => kept.extend_from_slice(&row[..=i]),
            None => log::debug!("Row at y={} is open on the right", row[0].y),
        }
    }
    kept
}

/// Merge vertically adjacent cells of equal span that no obstacle separates.
pub fn merge_columns(mut cells: Vec<Rect>, solids: &[Rect], inset: i32) -> Vec<Rect> {
    sort_columns(&mut cells);
    let mut merged: Vec<Rect> = Vec::with_capacity(cells.len());
    for cell in cells {
        if let Some(last) = merged.last_mut() {
            let same_column = last.x == cell.x && last.width == cell.width;
            if same_column
                && last.bottom() == cell.y
                && !column_separated(last, &cell, solids, inset)
            {
                last.height += cell.height;
                continue;
            }
        }
        merged.push(cell);
    }
    merged
}
