//! The room generator pipeline.
//!
//! 1. Extract cut points and solids from the obstacles ([`crate::obstacle`])
//! 2. Subdivide their bounding box into a grid ([`crate::subdivide`])
//! 3. Merge seams no obstacle explains, drop cells inside walls or open to
//!    the outside ([`crate::prune`])
//! 4. Pad, clip and emit rooms and platform connectors ([`crate::emit`])
//!
//! ```
//! use autohull_logic::autohull::generate;
//! use autohull_logic::obstacle::Obstacle;
//! use autohull_logic::rect::Rect;
//!
//! let walls = [
//!     Obstacle::wall(Rect::new(0, 0, 400, 16)),
//!     Obstacle::wall(Rect::new(0, -200, 400, 16)),
//!     Obstacle::wall(Rect::new(0, 0, 16, 216)),
//!     Obstacle::wall(Rect::new(384, 0, 16, 216)),
//! ];
//! let layout = generate(&walls).unwrap();
//! assert_eq!(layout.rooms.len(), 1);
//! assert!(layout.connectors.is_empty());
//! ```

use crate::config::AutoHullConfig;
use crate::emit::{clip_overlaps, connector_for, discard_buried, pad_rooms};
use crate::error::InvalidInput;
use crate::links::{link_connectors, ConnectorLink};
use crate::obstacle::{extract, Obstacle};
use crate::prune::{
    discard_wall_artifacts, merge_columns, merge_rows, prune_left_unbounded,
    prune_right_unbounded,
};
use crate::rect::{flip_y, Rect};
use crate::subdivide::subdivide;
use serde::{Deserialize, Serialize};

/// Cell counts after each step, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    pub cut_points: usize,
    pub grid_cells: usize,
    pub after_row_merge: usize,
    pub after_wall_artifacts: usize,
    pub after_left_prune: usize,
    pub after_right_prune: usize,
    pub after_column_merge: usize,
    pub rooms: usize,
    pub connectors: usize,
}

/// Generated regions, in the caller's world space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullLayout {
    /// Room regions, ordered top to bottom, then left to right.
    pub rooms: Vec<Rect>,
    /// One connector per platform, in input order.
    pub connectors: Vec<Rect>,
    /// Rooms each connector joins.
    pub links: Vec<ConnectorLink>,
    pub stats: LayoutStats,
}

/// Generate rooms with the default tuning.
pub fn generate(obstacles: &[Obstacle]) -> Result<HullLayout, InvalidInput> {
    generate_regions(obstacles, &AutoHullConfig::default())
}

/// Generate room and connector regions for a set of obstacles.
///
/// Pure: the obstacles are read once and nothing else is touched.
pub fn generate_regions(
    obstacles: &[Obstacle],
    config: &AutoHullConfig,
) -> Result<HullLayout, InvalidInput> {
    let extraction = extract(obstacles, config).inspect_err(|e| {
        log::warn!("Room generation failed: {}", e);
    })?;
    let solids = &extraction.solids;
    let mut stats = LayoutStats {
        cut_points: extraction.cut_points.len(),
        ..Default::default()
    };

    let cells = subdivide(&extraction.cut_points);
    stats.grid_cells = cells.len();

    let cells = merge_rows(cells, solids, config.merge_probe_inset);
    stats.after_row_merge = cells.len();

    let cells = discard_wall_artifacts(cells, solids);
    stats.after_wall_artifacts = cells.len();

    let cells = prune_left_unbounded(cells, solids, config.edge_probe_inset);
    stats.after_left_prune = cells.len();

    let cells = prune_right_unbounded(cells, solids, config.edge_probe_inset);
    stats.after_right_prune = cells.len();

    let cells = merge_columns(cells, solids, config.merge_probe_inset);
    stats.after_column_merge = cells.len();
    log::debug!("Cell counts: {:?}", stats);

    let rooms = clip_overlaps(pad_rooms(&cells, config.room_padding));
    let rooms = discard_buried(rooms, solids);
    let connectors: Vec<Rect> = extraction
        .platforms
        .iter()
        .map(|p| connector_for(p, config.connector_height))
        .collect();
    let links = link_connectors(&rooms, &connectors, config.room_padding);

    stats.rooms = rooms.len();
    stats.connectors = connectors.len();
    log::info!(
        "Generated {} rooms and {} connectors from {} obstacles",
        stats.rooms,
        stats.connectors,
        obstacles.len()
    );

    Ok(HullLayout {
        rooms: rooms.into_iter().map(flip_y).collect(),
        connectors: connectors.into_iter().map(flip_y).collect(),
        links,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 400×216 box, 16-unit walls, in world space (top wall at y=0).
    fn box_walls() -> Vec<Obstacle> {
        vec![
            Obstacle::wall(Rect::new(0, 0, 400, 16)),
            Obstacle::wall(Rect::new(0, -200, 400, 16)),
            Obstacle::wall(Rect::new(0, 0, 16, 216)),
            Obstacle::wall(Rect::new(384, 0, 16, 216)),
        ]
    }

    #[test]
    fn empty_box_is_one_room() {
        let layout = generate(&box_walls()).expect("valid box");
        assert_eq!(layout.rooms, vec![Rect::new(8, 8, 384, 232)]);
        assert!(layout.connectors.is_empty());
        assert!(layout.links.is_empty());
    }

    #[test]
    fn stats_track_every_stage() {
        let layout = generate(&box_walls()).expect("valid box");
        let s = layout.stats;
        assert_eq!(s.cut_points, 8);
        assert_eq!(s.grid_cells, 9);
        assert_eq!(s.after_row_merge, 9);
        assert_eq!(s.after_wall_artifacts, 1);
        assert_eq!(s.after_left_prune, 1);
        assert_eq!(s.after_right_prune, 1);
        assert_eq!(s.after_column_merge, 1);
        assert_eq!(s.rooms, 1);
        assert_eq!(s.connectors, 0);
    }

    #[test]
    fn padding_comes_from_config() {
        let config = AutoHullConfig {
            room_padding: 0,
            ..Default::default()
        };
        let layout = generate_regions(&box_walls(), &config).expect("valid box");
        assert_eq!(layout.rooms, vec![Rect::new(8, -8, 384, 200)]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(generate(&[]), Err(InvalidInput::NoObstacles));
    }

    #[test]
    fn layout_serializes() {
        let layout = generate(&box_walls()).expect("valid box");
        let json = serde_json::to_string(&layout).expect("serializable");
        let back: HullLayout = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, layout);
    }
}
