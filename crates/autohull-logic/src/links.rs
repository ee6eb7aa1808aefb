//! Which rooms each platform connector joins.
//!
//! Clipping leaves the room above a platform stopping short of it, so a
//! connector reaches `reach` units up and down when looking for rooms.

use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// Rooms joined by one connector, upper rooms first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorLink {
    /// Index into `HullLayout::connectors`.
    pub connector: usize,
    /// Indices into `HullLayout::rooms`.
    pub rooms: Vec<usize>,
}

/// Link every connector to the rooms it touches.
///
/// Works in layout space; `rooms` must already be sorted top-to-bottom,
/// which is how the generator emits them.
pub fn link_connectors(rooms: &[Rect], connectors: &[Rect], reach: i32) -> Vec<ConnectorLink> {
    connectors
        .iter()
        .enumerate()
        .map(|(connector, c)| {
            let grown = c.pad_vertical(reach);
            let rooms = rooms
                .iter()
                .enumerate()
                .filter(|(_, room)| room.intersects(&grown))
                .map(|(i, _)| i)
                .collect();
            ConnectorLink { connector, rooms }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_between_stacked_rooms_links_both() {
        let rooms = [Rect::new(0, -8, 392, 100), Rect::new(0, 92, 392, 132)];
        let connectors = [Rect::new(16, 100, 368, 16)];
        let links = link_connectors(&rooms, &connectors, 16);
        assert_eq!(
            links,
            vec![ConnectorLink {
                connector: 0,
                rooms: vec![0, 1]
            }]
        );
    }

    #[test]
    fn connector_far_from_rooms_links_nothing() {
        let rooms = [Rect::new(0, 0, 100, 100)];
        let connectors = [Rect::new(0, 400, 100, 16)];
        let links = link_connectors(&rooms, &connectors, 16);
        assert!(links[0].rooms.is_empty());
    }
}
