//! Validation for generated room layouts.
//!
//! Pure functions that take rooms, connectors and obstacles (world space)
//! and return validation errors. Nothing here changes a layout.

use crate::autohull::HullLayout;
use crate::config::AutoHullConfig;
use crate::constants::COVERAGE_SAMPLE_STEP;
use crate::obstacle::Obstacle;
use crate::rect::{flip_y, Point, Rect};
use crate::subdivide::bounding_box;
use std::collections::{HashMap, HashSet, VecDeque};

/// A layout validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Error severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

fn to_layout(rects: &[Rect]) -> Vec<Rect> {
    rects.iter().copied().map(flip_y).collect()
}

fn contains_closed(r: &Rect, (px, py): Point) -> bool {
    r.x <= px && px <= r.right() && r.y <= py && py <= r.bottom()
}

// ── A. Room geometry (per-room) ─────────────────────────────────────────

/// Check that no room has zero or negative dimensions.
pub fn check_room_dimensions(rooms: &[Rect]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, r) in rooms.iter().enumerate() {
        if r.is_degenerate() {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!(
                    "Room #{} has non-positive dimensions: {}×{}",
                    i, r.width, r.height
                ),
            });
        }
    }
    errors
}

/// Check that no room lies entirely inside an obstacle.
pub fn check_rooms_outside_obstacles(
    rooms: &[Rect],
    obstacles: &[Obstacle],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let solids: Vec<Rect> = obstacles
        .iter()
        .filter(|o| o.participates())
        .map(|o| flip_y(o.rect))
        .collect();

    for (i, room) in to_layout(rooms).iter().enumerate() {
        if let Some(j) = solids.iter().position(|s| s.contains_rect(room)) {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!("Room #{} lies inside obstacle #{}", i, j),
            });
        }
    }
    errors
}

// ── B. Room-to-room (pairwise) ──────────────────────────────────────────

/// Check that no two rooms overlap by more than the passage margin.
///
/// Padding lets neighbours overlap in a band up to `2 × padding` deep
/// along their shared edge; anything thicker is a real overlap.
pub fn check_room_overlaps(rooms: &[Rect], padding: i32) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let layout = to_layout(rooms);

    for i in 0..layout.len() {
        for j in (i + 1)..layout.len() {
            let Some(overlap) = layout[i].intersection(&layout[j]) else {
                continue;
            };
            let depth = overlap.width.min(overlap.height);
            if depth > 2 * padding {
                errors.push(ValidationError {
                    category: "room_overlap",
                    severity: Severity::Error,
                    message: format!(
                        "Rooms #{} and #{} overlap by {}×{} (limit {} deep)",
                        i,
                        j,
                        overlap.width,
                        overlap.height,
                        2 * padding
                    ),
                });
            }
        }
    }
    errors
}

// ── C. Coverage ─────────────────────────────────────────────────────────

/// Check that every free point of the interior is inside some room.
///
/// Samples the bounding box of the obstacles' cut points on a grid of
/// `step` units, offset by half a step so samples avoid grid-aligned edges.
pub fn check_coverage(rooms: &[Rect], obstacles: &[Obstacle], step: i32) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let step = step.max(1);

    let used: Vec<Obstacle> = obstacles
        .iter()
        .filter(|o| o.participates())
        .map(|o| Obstacle {
            rect: flip_y(o.rect),
            ..*o
        })
        .collect();
    let points: Vec<Point> = used.iter().flat_map(|o| o.cut_points()).collect();
    let Some(interior) = bounding_box(&points) else {
        return errors;
    };
    let rooms = to_layout(rooms);

    let mut uncovered = 0usize;
    let mut example = None;
    let mut y = interior.y + step / 2;
    while y < interior.bottom() {
        let mut x = interior.x + step / 2;
        while x < interior.right() {
            let p = (x, y);
            let blocked = used.iter().any(|o| contains_closed(&o.rect, p));
            if !blocked && !rooms.iter().any(|r| contains_closed(r, p)) {
                uncovered += 1;
                example.get_or_insert(p);
            }
            x += step;
        }
        y += step;
    }

    if let Some((x, y)) = example {
        errors.push(ValidationError {
            category: "coverage",
            severity: Severity::Error,
            message: format!(
                "{} free sample points outside every room (e.g. world ({}, {}))",
                uncovered, x, -y
            ),
        });
    }
    errors
}

// ── D. Connectivity (graph-level) ───────────────────────────────────────

/// Check that every connector joins at least two rooms.
pub fn check_connector_links(layout: &HullLayout) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for link in &layout.links {
        if link.rooms.len() < 2 {
            errors.push(ValidationError {
                category: "connector",
                severity: Severity::Warning,
                message: format!(
                    "Connector #{} joins {} room(s)",
                    link.connector,
                    link.rooms.len()
                ),
            });
        }
    }
    errors
}

/// Check that all rooms are reachable from the first via overlaps, shared
/// edges or connectors.
pub fn check_room_connectivity(layout: &HullLayout) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let rooms = to_layout(&layout.rooms);
    if rooms.is_empty() {
        return errors;
    }

    // Build adjacency from contact and connectors
    let mut adj: HashMap<usize, Vec<usize>> = HashMap::new();
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            if rooms[i].intersects(&rooms[j]) || rooms[i].shared_edge(&rooms[j]) > 0 {
                adj.entry(i).or_default().push(j);
                adj.entry(j).or_default().push(i);
            }
        }
    }
    for link in &layout.links {
        for pair in link.rooms.windows(2) {
            adj.entry(pair[0]).or_default().push(pair[1]);
            adj.entry(pair[1]).or_default().push(pair[0]);
        }
    }

    // BFS from first room
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(0);
    queue.push_back(0);

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = adj.get(&current) {
            for &next in neighbors {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    let unreached: Vec<usize> = (0..rooms.len()).filter(|i| !visited.contains(i)).collect();
    if !unreached.is_empty() {
        errors.push(ValidationError {
            category: "connectivity",
            severity: Severity::Warning,
            message: format!(
                "{} of {} rooms unreachable (e.g. room #{})",
                unreached.len(),
                rooms.len(),
                unreached[0]
            ),
        });
    }
    errors
}

// ── Master validation ───────────────────────────────────────────────────

/// Run all layout validations and return combined results.
pub fn validate_all(
    layout: &HullLayout,
    obstacles: &[Obstacle],
    config: &AutoHullConfig,
) -> Vec<ValidationError> {
    let mut all = Vec::new();
    all.extend(check_room_dimensions(&layout.rooms));
    all.extend(check_rooms_outside_obstacles(&layout.rooms, obstacles));
    all.extend(check_room_overlaps(&layout.rooms, config.room_padding));
    all.extend(check_coverage(&layout.rooms, obstacles, COVERAGE_SAMPLE_STEP));
    all.extend(check_connector_links(layout));
    all.extend(check_room_connectivity(layout));
    all
}
