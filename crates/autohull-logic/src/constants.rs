//! Tuning constants for room generation, in editor units.
//!
//! These are the defaults behind [`crate::config::AutoHullConfig`]. The
//! pipeline reads the config, never these, except for the input bound and
//! the coverage sample step used by [`crate::geometry::validate_all`].

/// Half-width of the band either side of a seam that must be solid for the
/// seam to separate two cells.
///
/// Cut lines run along wall centerlines, so the band fits inside any wall
/// at least twice as thick.
pub const MERGE_PROBE_INSET: i32 = 8;

/// Width of the band inside a cell's left/right edge that must be solid for
/// the cell to count as enclosed on that side.
pub const EDGE_PROBE_INSET: i32 = 2;

/// Vertical padding added above and below every room.
pub const ROOM_PADDING: i32 = 16;

/// Height of the connector emitted for each platform.
pub const CONNECTOR_HEIGHT: i32 = 16;

/// Fewest cut points that can span a two-dimensional bounding box.
pub const MIN_CUT_POINTS: usize = 4;

/// Sample spacing used by the coverage check in [`crate::geometry`].
pub const COVERAGE_SAMPLE_STEP: i32 = 8;

/// Largest coordinate magnitude, width or height accepted on input.
///
/// Keeps every sum the pipeline forms (edges, padding, bands) inside `i32`.
pub const MAX_COORDINATE: i32 = 1 << 28;
