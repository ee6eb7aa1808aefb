//! Integer axis-aligned rectangles and the world/layout transform.
//!
//! Inside the generator every rectangle lives in *layout space*: `y` is the
//! top edge and the rectangle extends downward to `y + height`. Callers work
//! in *world space*, where Y grows upward and `y` is still the top edge, so
//! the rectangle covers `y - height ..= y`. [`flip_y`] is the only place the
//! two meet.
//!
//! Arithmetic is plain `i32`. Inputs are held to
//! ±[`crate::constants::MAX_COORDINATE`] by
//! [`crate::obstacle::extract`], which leaves room for every edge, padding
//! and band sum the pipeline forms.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in integer editor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A point in layout space.
pub type Point = (i32, i32);

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge in layout space.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Zero or negative extent on either axis.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open point test: left/top edges are inside, right/bottom are not.
    pub fn contains_point(&self, (px, py): Point) -> bool {
        self.x <= px && px < self.right() && self.y <= py && py < self.bottom()
    }

    /// Closed containment: `other` lies entirely within `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }

    /// Overlap extent on each axis, or `None` when the rectangles don't intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Some(Rect::new(
            x,
            y,
            self.right().min(other.right()) - x,
            self.bottom().min(other.bottom()) - y,
        ))
    }

    /// Length of the edge the two rectangles share without overlapping.
    ///
    /// Zero when they overlap, are apart, or only meet at a corner.
    pub fn shared_edge(&self, other: &Rect) -> i32 {
        let overlap_x = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_y = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if (self.right() == other.x || other.right() == self.x) && overlap_y > 0 {
            overlap_y
        } else if (self.bottom() == other.y || other.bottom() == self.y) && overlap_x > 0 {
            overlap_x
        } else {
            0
        }
    }

    /// Grow the rectangle by `amount` above and below.
    pub fn pad_vertical(&self, amount: i32) -> Rect {
        Rect::new(self.x, self.y - amount, self.width, self.height + 2 * amount)
    }
}

/// Convert between world space and layout space.
///
/// Negating `y` is its own inverse, so the same function is applied on the
/// way into the generator and on the way out.
pub fn flip_y(rect: Rect) -> Rect {
    Rect { y: -rect.y, ..rect }
}
