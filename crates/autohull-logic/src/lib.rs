//! Automatic room generation for vehicle interiors.
//!
//! Given the solid obstacles that make up an interior (walls, doors,
//! platforms), this crate computes disjoint rectangular room regions
//! covering the free space, plus one connector region per platform.
//! Functions take plain data and return results; there is no engine,
//! entity system or I/O behind them.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`autohull`] | The pipeline: obstacles in, rooms and connectors out |
//! | [`config`] | Tuning values and their validation |
//! | [`constants`] | Default tolerances (band insets, padding, input bound) |
//! | [`emit`] | Padding, overlap clipping, platform connectors |
//! | [`error`] | Input errors |
//! | [`geometry`] | Layout validation (overlap, coverage, connectivity) |
//! | [`links`] | Which rooms each connector joins |
//! | [`obstacle`] | Obstacle model and cut-point extraction |
//! | [`prune`] | Row/column merging and containment pruning |
//! | [`rect`] | Integer rectangles and the world/layout flip |
//! | [`subdivide`] | Sweep-line grid subdivision |

pub mod autohull;
pub mod config;
pub mod constants;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod links;
pub mod obstacle;
pub mod prune;
pub mod rect;
pub mod subdivide;
