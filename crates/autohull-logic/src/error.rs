//! Errors surfaced by [`crate::autohull::generate_regions`].

use crate::constants::MAX_COORDINATE;

/// The obstacle list cannot produce a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// No obstacle survived filtering (empty list, or only bodiless walls).
    NoObstacles,
    /// Too few cut points to span a two-dimensional bounding box.
    NotEnoughCutPoints { found: usize, required: usize },
    /// An obstacle with a negative width or height.
    NegativeSize {
        index: usize,
        width: i32,
        height: i32,
    },
    /// An obstacle coordinate or extent beyond [`crate::constants::MAX_COORDINATE`].
    OutOfRange { index: usize },
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::NoObstacles => write!(f, "No obstacles to generate rooms from"),
            InvalidInput::NotEnoughCutPoints { found, required } => write!(
                f,
                "Not enough wall structures: {} cut points, need at least {}",
                found, required
            ),
            InvalidInput::NegativeSize {
                index,
                width,
                height,
            } => write!(
                f,
                "Obstacle #{} has negative size {}×{}",
                index, width, height
            ),
            InvalidInput::OutOfRange { index } => write!(
                f,
                "Obstacle #{} lies outside ±{} units",
                index, MAX_COORDINATE
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}
