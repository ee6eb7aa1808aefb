//! Obstacles and cut-point extraction (stage 1).
//!
//! Each obstacle contributes the points that place sweep lines:
//! - door: midpoint of its bottom edge
//! - horizontal wall or platform (`width >= height`): midpoints of the left
//!   and right edges
//! - vertical wall or platform: midpoints of the top and bottom edges
//!
//! Obstacles come in world space; [`extract`] flips them into layout space
//! once and everything downstream works there.

use crate::config::AutoHullConfig;
use crate::constants::MAX_COORDINATE;
use crate::error::InvalidInput;
use crate::rect::{flip_y, Point, Rect};
use serde::{Deserialize, Serialize};

/// What an obstacle is, as far as room generation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    Wall,
    Door,
    Platform,
}

/// Aspect-ratio class of a wall-like obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `width >= height`
    Horizontal,
    /// `height > width`
    Vertical,
}

impl Orientation {
    pub fn of(rect: &Rect) -> Self {
        if rect.width >= rect.height {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A snapshot of one obstacle, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// World-space bounds (`y` is the top edge, Y grows upward).
    pub rect: Rect,
    pub kind: ObstacleKind,
    /// Walls and platforms without a body don't collide and are ignored.
    #[serde(default = "default_has_body")]
    pub has_body: bool,
}

fn default_has_body() -> bool {
    true
}

impl Obstacle {
    pub fn wall(rect: Rect) -> Self {
        Self {
            rect,
            kind: ObstacleKind::Wall,
            has_body: true,
        }
    }

    pub fn door(rect: Rect) -> Self {
        Self {
            rect,
            kind: ObstacleKind::Door,
            has_body: true,
        }
    }

    pub fn platform(rect: Rect) -> Self {
        Self {
            rect,
            kind: ObstacleKind::Platform,
            has_body: true,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(&self.rect)
    }

    /// Whether the obstacle takes part in generation at all.
    pub fn participates(&self) -> bool {
        self.kind == ObstacleKind::Door || self.has_body
    }

    /// Cut points of an obstacle whose `rect` is already in layout space.
    pub fn cut_points(&self) -> Vec<Point> {
        let r = &self.rect;
        match (self.kind, self.orientation()) {
            (ObstacleKind::Door, _) => vec![(r.x + r.width / 2, r.bottom())],
            (_, Orientation::Horizontal) => {
                let mid_y = r.y + r.height / 2;
                vec![(r.x, mid_y), (r.right(), mid_y)]
            }
            (_, Orientation::Vertical) => {
                let mid_x = r.x + r.width / 2;
                vec![(mid_x, r.y), (mid_x, r.bottom())]
            }
        }
    }
}

/// Layout-space view of the obstacle list, ready for the later stages.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Sweep-line seeds, in obstacle order.
    pub cut_points: Vec<Point>,
    /// Rectangles that bound cells and bury rooms.
    pub solids: Vec<Rect>,
    /// Platform bounds, one connector each.
    pub platforms: Vec<Rect>,
}

/// Filter the obstacle list, flip it into layout space and collect cut points.
pub fn extract(
    obstacles: &[Obstacle],
    config: &AutoHullConfig,
) -> Result<Extraction, InvalidInput> {
    for (index, o) in obstacles.iter().enumerate() {
        let r = &o.rect;
        if r.width < 0 || r.height < 0 {
            return Err(InvalidInput::NegativeSize {
                index,
                width: r.width,
                height: r.height,
            });
        }
        let limit = MAX_COORDINATE.unsigned_abs();
        if [r.x, r.y, r.width, r.height]
            .iter()
            .any(|v| v.unsigned_abs() > limit)
        {
            return Err(InvalidInput::OutOfRange { index });
        }
    }

    let mut out = Extraction::default();
    let mut used = 0;
    for (index, o) in obstacles.iter().enumerate() {
        if !o.participates() {
            log::debug!("Skipping bodiless {:?} #{}", o.kind, index);
            continue;
        }
        used += 1;

        let layout = Obstacle {
            rect: flip_y(o.rect),
            ..*o
        };
        out.cut_points.extend(layout.cut_points());

        match o.kind {
            ObstacleKind::Wall => out.solids.push(layout.rect),
            ObstacleKind::Platform => {
                out.solids.push(layout.rect);
                out.platforms.push(layout.rect);
            }
            ObstacleKind::Door => {
                if config.doors_are_solid {
                    out.solids.push(layout.rect);
                }
            }
        }
    }

    if used == 0 {
        return Err(InvalidInput::NoObstacles);
    }
    if out.cut_points.len() < config.min_cut_points {
        return Err(InvalidInput::NotEnoughCutPoints {
            found: out.cut_points.len(),
            required: config.min_cut_points,
        });
    }

    log::debug!(
        "Extracted {} cut points from {} obstacles ({} solid, {} platforms)",
        out.cut_points.len(),
        used,
        out.solids.len(),
        out.platforms.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(kind: ObstacleKind, x: i32, y: i32, w: i32, h: i32) -> Obstacle {
        Obstacle {
            rect: Rect::new(x, y, w, h),
            kind,
            has_body: true,
        }
    }

    #[test]
    fn door_contributes_bottom_midpoint() {
        let door = layout(ObstacleKind::Door, 0, 60, 16, 48);
        assert_eq!(door.cut_points(), vec![(8, 108)]);
    }

    #[test]
    fn horizontal_wall_contributes_side_midpoints() {
        let wall = layout(ObstacleKind::Wall, 0, 200, 400, 16);
        assert_eq!(wall.cut_points(), vec![(0, 208), (400, 208)]);
    }

    #[test]
    fn vertical_wall_contributes_end_midpoints() {
        let wall = layout(ObstacleKind::Wall, 384, 0, 16, 216);
        assert_eq!(wall.cut_points(), vec![(392, 0), (392, 216)]);
    }

    #[test]
    fn square_wall_counts_as_horizontal() {
        let wall = layout(ObstacleKind::Wall, 0, 0, 16, 16);
        assert_eq!(wall.orientation(), Orientation::Horizontal);
        assert_eq!(wall.cut_points(), vec![(0, 8), (16, 8)]);
    }

    #[test]
    fn platform_follows_aspect_ratio() {
        let flat = layout(ObstacleKind::Platform, 16, 100, 368, 16);
        assert_eq!(flat.cut_points(), vec![(16, 108), (384, 108)]);
        let tall = layout(ObstacleKind::Platform, 100, 0, 16, 64);
        assert_eq!(tall.cut_points(), vec![(108, 0), (108, 64)]);
    }

    #[test]
    fn extract_flips_into_layout_space() {
        let walls = [
            Obstacle::wall(Rect::new(0, 0, 400, 16)),
            Obstacle::wall(Rect::new(0, -200, 400, 16)),
        ];
        let ex = extract(&walls, &AutoHullConfig::default()).expect("four cut points");
        assert_eq!(ex.solids[1], Rect::new(0, 200, 400, 16));
        assert_eq!(ex.cut_points, vec![(0, 8), (400, 8), (0, 208), (400, 208)]);
    }

    #[test]
    fn extract_rejects_empty_input() {
        let err = extract(&[], &AutoHullConfig::default()).unwrap_err();
        assert_eq!(err, InvalidInput::NoObstacles);
    }

    #[test]
    fn extract_skips_bodiless_walls() {
        let mut ghost = Obstacle::wall(Rect::new(0, 0, 400, 16));
        ghost.has_body = false;
        let err = extract(&[ghost], &AutoHullConfig::default()).unwrap_err();
        assert_eq!(err, InvalidInput::NoObstacles);
    }

    #[test]
    fn extract_needs_enough_cut_points() {
        let walls = [Obstacle::wall(Rect::new(0, 0, 400, 16))];
        let err = extract(&walls, &AutoHullConfig::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::NotEnoughCutPoints {
                found: 2,
                required: 4
            }
        );
    }

    #[test]
    fn extract_rejects_negative_size() {
        let walls = [
            Obstacle::wall(Rect::new(0, 0, 400, 16)),
            Obstacle::wall(Rect::new(0, 0, -5, 16)),
        ];
        let err = extract(&walls, &AutoHullConfig::default()).unwrap_err();
        assert!(matches!(err, InvalidInput::NegativeSize { index: 1, .. }));
    }

    #[test]
    fn extract_rejects_coordinates_past_the_bound() {
        let walls = [
            Obstacle::wall(Rect::new(0, 0, 400, 16)),
            Obstacle::wall(Rect::new(i32::MAX - 10, 0, 16, 216)),
        ];
        let err = extract(&walls, &AutoHullConfig::default()).unwrap_err();
        assert_eq!(err, InvalidInput::OutOfRange { index: 1 });

        let edge = [
            Obstacle::wall(Rect::new(0, 0, MAX_COORDINATE, 16)),
            Obstacle::wall(Rect::new(-MAX_COORDINATE, -MAX_COORDINATE, 16, 16)),
        ];
        assert!(extract(&edge, &AutoHullConfig::default()).is_ok());
    }

    #[test]
    fn doors_solid_only_when_configured() {
        let obstacles = [
            Obstacle::wall(Rect::new(0, 0, 400, 16)),
            Obstacle::door(Rect::new(0, -60, 16, 48)),
            Obstacle::platform(Rect::new(16, -100, 368, 16)),
        ];
        let solid = extract(&obstacles, &AutoHullConfig::default()).expect("valid");
        assert_eq!(solid.solids.len(), 3);
        assert_eq!(solid.platforms.len(), 1);

        let config = AutoHullConfig {
            doors_are_solid: false,
            ..Default::default()
        };
        let passable = extract(&obstacles, &config).expect("valid");
        assert_eq!(passable.solids.len(), 2);
        assert_eq!(passable.cut_points.len(), 5);
    }
}
