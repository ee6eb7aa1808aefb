//! Padding, clipping and connector emission (stage 4).

use crate::prune::{is_covered, sort_rows};
use crate::rect::Rect;

/// Grow every room by `padding` above and below so neighbours overlap.
pub fn pad_rooms(cells: &[Rect], padding: i32) -> Vec<Rect> {
    cells.iter().map(|c| c.pad_vertical(padding)).collect()
}

/// Trim each room so it stops at the top of the first room below that it
/// overlaps and that spans its full width.
///
/// A room below that covers only part of the width is left overlapping:
/// clipping against it would uncover the rest of the band. Rooms come back
/// sorted top-to-bottom, left-to-right. Each clip is decided against the
/// padded neighbours, never against already clipped ones.
pub fn clip_overlaps(mut rooms: Vec<Rect>) -> Vec<Rect> {
    sort_rows(&mut rooms);
    let mut clipped = Vec::with_capacity(rooms.len());
    for (i, room) in rooms.iter().enumerate() {
        let below = rooms[i + 1..].iter().find(|other| {
            other.y > room.y
                && other.intersects(room)
                && other.x <= room.x
                && room.right() <= other.right()
        });
        match below {
            Some(other) => clipped.push(Rect {
                height: other.y - room.y,
                ..*room
            }),
            None => clipped.push(*room),
        }
    }
    clipped
}

/// Drop rooms that clipping left wholly inside solid material.
pub fn discard_buried(rooms: Vec<Rect>, solids: &[Rect]) -> Vec<Rect> {
    rooms
        .into_iter()
        .filter(|room| !is_covered(room, solids))
        .collect()
}

/// Connector for one platform: same X span, `height` tall, centered on the
/// platform's vertical center.
pub fn connector_for(platform: &Rect, height: i32) -> Rect {
    let center_y = platform.y + platform.height / 2;
    Rect::new(platform.x, center_y - height / 2, platform.width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_extends_both_edges() {
        let padded = pad_rooms(&[Rect::new(0, 16, 200, 184)], 16);
        assert_eq!(padded, vec![Rect::new(0, 0, 200, 216)]);
    }

    #[test]
    fn stacked_rooms_are_clipped_to_touch() {
        let padded = pad_rooms(&[Rect::new(0, 108, 392, 100), Rect::new(0, 8, 392, 100)], 16);
        let clipped = clip_overlaps(padded);
        assert_eq!(
            clipped,
            vec![Rect::new(0, -8, 392, 100), Rect::new(0, 92, 392, 132)]
        );
        assert!(!clipped[0].intersects(&clipped[1]));
    }

    #[test]
    fn side_by_side_rooms_are_untouched() {
        let padded = pad_rooms(&[Rect::new(0, 16, 200, 184), Rect::new(200, 16, 192, 184)], 16);
        let clipped = clip_overlaps(padded.clone());
        assert_eq!(clipped, padded);
    }

    #[test]
    fn partial_rooms_below_do_not_clip() {
        let rooms = vec![
            Rect::new(0, 0, 300, 200),
            Rect::new(150, 120, 150, 100),
            Rect::new(0, 80, 150, 100),
        ];
        let clipped = clip_overlaps(rooms);
        assert_eq!(clipped[0], Rect::new(0, 0, 300, 200));
        assert_eq!(clipped[1], Rect::new(0, 80, 150, 100));
        assert_eq!(clipped[2], Rect::new(150, 120, 150, 100));
    }

    #[test]
    fn clip_stops_at_the_first_spanning_room_below() {
        let rooms = vec![
            Rect::new(0, 0, 300, 200),
            Rect::new(150, 120, 150, 100),
            Rect::new(0, 80, 150, 100),
            Rect::new(0, 150, 300, 100),
        ];
        let clipped = clip_overlaps(rooms);
        assert_eq!(
            clipped,
            vec![
                Rect::new(0, 0, 300, 150),
                Rect::new(0, 80, 150, 70),
                Rect::new(150, 120, 150, 30),
                Rect::new(0, 150, 300, 100),
            ]
        );
    }

    #[test]
    fn offset_room_below_leaves_the_band_covered() {
        // Left bay room above a lower room that reaches 8 units further left.
        let rooms = vec![Rect::new(8, 0, 144, 104), Rect::new(0, 72, 280, 40)];
        let clipped = clip_overlaps(rooms);
        assert_eq!(clipped[0], Rect::new(8, 0, 144, 72));

        let rooms = vec![Rect::new(8, 0, 144, 104), Rect::new(144, 40, 136, 64)];
        let clipped = clip_overlaps(rooms);
        assert_eq!(clipped[0], Rect::new(8, 0, 144, 104));
    }

    #[test]
    fn buried_rooms_are_dropped() {
        let solids = [Rect::new(0, 0, 400, 16), Rect::new(0, 16, 16, 200)];
        let rooms = vec![
            Rect::new(0, 0, 200, 16),
            Rect::new(0, 8, 16, 100),
            Rect::new(8, 8, 100, 100),
        ];
        assert_eq!(discard_buried(rooms, &solids), vec![Rect::new(8, 8, 100, 100)]);
    }

    #[test]
    fn connector_is_centered_on_the_platform() {
        let thin = connector_for(&Rect::new(16, 100, 368, 16), 16);
        assert_eq!(thin, Rect::new(16, 100, 368, 16));
        let thick = connector_for(&Rect::new(16, 96, 368, 24), 16);
        assert_eq!(thick, Rect::new(16, 100, 368, 16));
    }
}
