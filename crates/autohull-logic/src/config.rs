//! Generator tuning.
//!
//! Every tolerance the pipeline uses is a field here rather than a literal,
//! so a caller (or a test) can see and change the geometry of the output
//! without touching the algorithm.
//!
//! ```
//! use autohull_logic::config::{validate_config, AutoHullConfig};
//!
//! let mut config = AutoHullConfig::default();
//! config.room_padding = 24;
//! assert!(validate_config(&config).is_empty());
//! ```

use crate::constants::{
    CONNECTOR_HEIGHT, EDGE_PROBE_INSET, MAX_COORDINATE, MERGE_PROBE_INSET, MIN_CUT_POINTS,
    ROOM_PADDING,
};
use serde::{Deserialize, Serialize};

/// Generator tuning values, all in editor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoHullConfig {
    /// Half-width of the solid band that keeps two cells from merging.
    pub merge_probe_inset: i32,
    /// Width of the solid band that marks a cell as enclosed on the left/right.
    pub edge_probe_inset: i32,
    /// Padding added above and below every room.
    pub room_padding: i32,
    /// Height of platform connectors.
    pub connector_height: i32,
    /// Whether doors count as solid in coverage tests.
    ///
    /// Doors always contribute a cut point. When solid they also bound the
    /// row they sit in, which keeps a door in a side wall from opening the
    /// room to the outside.
    pub doors_are_solid: bool,
    /// Fewest cut points accepted before giving up.
    pub min_cut_points: usize,
}

impl Default for AutoHullConfig {
    fn default() -> Self {
        Self {
            merge_probe_inset: MERGE_PROBE_INSET,
            edge_probe_inset: EDGE_PROBE_INSET,
            room_padding: ROOM_PADDING,
            connector_height: CONNECTOR_HEIGHT,
            doors_are_solid: true,
            min_cut_points: MIN_CUT_POINTS,
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Merge inset must be positive.
    NonPositiveMergeInset(i32),
    /// Edge inset must not be negative.
    NegativeEdgeInset(i32),
    /// Room padding must not be negative.
    NegativePadding(i32),
    /// Connectors need some height.
    NonPositiveConnectorHeight(i32),
    /// Fewer than two points can't span a box.
    MinCutPointsTooSmall(usize),
    /// A length beyond the coordinate bound.
    TooLarge { field: &'static str, value: i32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveMergeInset(v) => {
                write!(f, "merge_probe_inset must be > 0, got {}", v)
            }
            ConfigError::NegativeEdgeInset(v) => {
                write!(f, "edge_probe_inset must be >= 0, got {}", v)
            }
            ConfigError::NegativePadding(v) => write!(f, "room_padding must be >= 0, got {}", v),
            ConfigError::NonPositiveConnectorHeight(v) => {
                write!(f, "connector_height must be > 0, got {}", v)
            }
            ConfigError::MinCutPointsTooSmall(v) => {
                write!(f, "min_cut_points must be >= 2, got {}", v)
            }
            ConfigError::TooLarge { field, value } => {
                write!(f, "{} must be <= {}, got {}", field, MAX_COORDINATE, value)
            }
        }
    }
}

/// Validate a generator configuration, returning all errors found.
pub fn validate_config(config: &AutoHullConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.merge_probe_inset <= 0 {
        errors.push(ConfigError::NonPositiveMergeInset(config.merge_probe_inset));
    }
    if config.edge_probe_inset < 0 {
        errors.push(ConfigError::NegativeEdgeInset(config.edge_probe_inset));
    }
    if config.room_padding < 0 {
        errors.push(ConfigError::NegativePadding(config.room_padding));
    }
    if config.connector_height <= 0 {
        errors.push(ConfigError::NonPositiveConnectorHeight(
            config.connector_height,
        ));
    }
    if config.min_cut_points < 2 {
        errors.push(ConfigError::MinCutPointsTooSmall(config.min_cut_points));
    }
    for (field, value) in [
        ("merge_probe_inset", config.merge_probe_inset),
        ("edge_probe_inset", config.edge_probe_inset),
        ("room_padding", config.room_padding),
        ("connector_height", config.connector_height),
    ] {
        if value > MAX_COORDINATE {
            errors.push(ConfigError::TooLarge { field, value });
        }
    }

    errors
}
