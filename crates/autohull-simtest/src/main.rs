//! AutoHull Headless Harness
//!
//! Runs the room generator over the bundled sample layouts and a sweep of
//! seeded random layouts, and checks every result against the layout
//! validators. No editor, no rendering.
//!
//! Usage:
//!   cargo run -p autohull-simtest
//!   cargo run -p autohull-simtest -- --verbose --seeds 500

use autohull_logic::autohull::{generate_regions, HullLayout};
use autohull_logic::config::{validate_config, AutoHullConfig};
use autohull_logic::error::InvalidInput;
use autohull_logic::geometry::{validate_all, Severity};
use autohull_logic::obstacle::{Obstacle, ObstacleKind};
use autohull_logic::rect::Rect;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

// ── Sample layouts (world space) ────────────────────────────────────────
const SAMPLES_JSON: &str = include_str!("../../../data/sample_layouts.json");

#[derive(Debug, Deserialize)]
struct SampleLayout {
    name: String,
    obstacles: Vec<Obstacle>,
    #[serde(default)]
    expected_rooms: Option<usize>,
    #[serde(default)]
    expected_connectors: Option<usize>,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let seeds = args
        .iter()
        .position(|a| a == "--seeds")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(100);
    println!("=== AutoHull Harness ===\n");

    let config = AutoHullConfig::default();
    let mut results = Vec::new();

    // 1. Configuration sanity
    results.extend(validate_configuration(&config, verbose));

    // 2. Input errors
    results.extend(validate_input_errors(&config, verbose));

    // 3. Bundled sample layouts
    results.extend(validate_samples(&config, verbose));

    // 4. Seeded random layouts
    results.extend(validate_random_layouts(&config, seeds, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Configuration ────────────────────────────────────────────────────

fn validate_configuration(config: &AutoHullConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Configuration ---");
    let errors = validate_config(config);
    if verbose {
        println!("  {:?}", config);
    }
    vec![TestResult {
        name: "default_config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            "ok".into()
        } else {
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        },
    }]
}

// ── 2. Input errors ─────────────────────────────────────────────────────

fn validate_input_errors(config: &AutoHullConfig, _verbose: bool) -> Vec<TestResult> {
    println!("--- Input Errors ---");
    let mut results = Vec::new();

    let empty = generate_regions(&[], config);
    results.push(TestResult {
        name: "empty_input_rejected".into(),
        passed: empty == Err(InvalidInput::NoObstacles),
        detail: format!("{:?}", empty.err()),
    });

    let lone = generate_regions(&[Obstacle::wall(Rect::new(0, 0, 400, 16))], config);
    results.push(TestResult {
        name: "lone_wall_rejected".into(),
        passed: matches!(lone, Err(InvalidInput::NotEnoughCutPoints { .. })),
        detail: format!("{:?}", lone.err()),
    });

    results
}

// ── 3. Sample layouts ───────────────────────────────────────────────────

fn validate_samples(config: &AutoHullConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Sample Layouts ---");
    let mut results = Vec::new();

    let samples: Vec<SampleLayout> = match serde_json::from_str(SAMPLES_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "samples_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    for sample in &samples {
        let name = format!("sample_{}", sample.name);
        let layout = match generate_regions(&sample.obstacles, config) {
            Ok(l) => l,
            Err(e) => {
                results.push(TestResult {
                    name,
                    passed: false,
                    detail: e.to_string(),
                });
                continue;
            }
        };
        if verbose {
            println!("  {}: {:?}", sample.name, layout.rooms);
        }

        let mut problems = layout_problems(&layout, &sample.obstacles, config);
        if let Some(n) = sample.expected_rooms {
            if layout.rooms.len() != n {
                problems.push(format!("expected {} rooms, got {}", n, layout.rooms.len()));
            }
        }
        if let Some(n) = sample.expected_connectors {
            if layout.connectors.len() != n {
                problems.push(format!(
                    "expected {} connectors, got {}",
                    n,
                    layout.connectors.len()
                ));
            }
        }

        results.push(TestResult {
            name,
            passed: problems.is_empty(),
            detail: if problems.is_empty() {
                format!(
                    "{} rooms, {} connectors",
                    layout.rooms.len(),
                    layout.connectors.len()
                )
            } else {
                problems.join("; ")
            },
        });
    }

    results
}

// ── 4. Random layouts ───────────────────────────────────────────────────

/// Screen-space rectangle (y down) converted to world space.
fn world(x: i32, y: i32, w: i32, h: i32) -> Rect {
    Rect::new(x, -y, w, h)
}

/// Vertical wall from `top` to `bottom`: whole, split in two at a random
/// height, or split around a 48-unit door.
fn side_wall(rng: &mut StdRng, x: i32, top: i32, bottom: i32, out: &mut Vec<Obstacle>) {
    let variant = if bottom - top < 120 { 0 } else { rng.gen_range(0..3) };
    match variant {
        0 => out.push(Obstacle::wall(world(x, top, 16, bottom - top))),
        1 => {
            let split = rng.gen_range(top + 24..=bottom - 24);
            out.push(Obstacle::wall(world(x, top, 16, split - top)));
            out.push(Obstacle::wall(world(x, split, 16, bottom - split)));
        }
        _ => {
            let y = rng.gen_range(top + 16..=bottom - 64);
            out.push(Obstacle::wall(world(x, top, 16, y - top)));
            out.push(Obstacle::door(world(x, y, 16, 48)));
            out.push(Obstacle::wall(world(x, y + 48, 16, bottom - y - 48)));
        }
    }
}

/// A closed hull with up to three dividers. Inside each bay go floors,
/// platforms or half-width shelves at arbitrary heights and thicknesses.
/// Side walls and dividers may be split or hold a door. Walls are 16 thick.
fn random_layout(rng: &mut StdRng) -> Vec<Obstacle> {
    let w = rng.gen_range(256..=640);
    let h = rng.gen_range(160..=384);

    let mut obstacles = vec![
        Obstacle::wall(world(0, 0, w, 16)),
        Obstacle::wall(world(0, h - 16, w, 16)),
        Obstacle::wall(world(w - 16, 0, 16, h)),
    ];
    side_wall(rng, 0, 0, h, &mut obstacles);

    // Bay faces: [left face, right face) pairs between dividers.
    let mut faces = vec![16];
    let mut x = 16;
    for _ in 0..3 {
        x += rng.gen_range(64..=200);
        if x + 80 > w {
            break;
        }
        side_wall(rng, x, 16, h - 16, &mut obstacles);
        faces.push(x);
        faces.push(x + 16);
    }
    faces.push(w - 16);

    for bay in faces.chunks(2) {
        let (left, right) = (bay[0], bay[1]);
        let mut y = 16;
        loop {
            y += rng.gen_range(24..=100);
            let thickness = rng.gen_range(16..=24);
            if y + thickness + 24 > h - 16 {
                break;
            }
            let (x, width) = if right - left >= 64 && rng.gen_bool(0.25) {
                let half = (right - left) / 2;
                if rng.gen_bool(0.5) {
                    (left, half)
                } else {
                    (right - half, half)
                }
            } else {
                (left, right - left)
            };
            let rect = world(x, y, width, thickness);
            if rng.gen_bool(0.3) {
                obstacles.push(Obstacle::platform(rect));
            } else {
                obstacles.push(Obstacle::wall(rect));
            }
            y += thickness;
        }
    }

    obstacles
}

fn validate_random_layouts(config: &AutoHullConfig, seeds: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Random Layouts ({} seeds) ---", seeds);
    let mut results = Vec::new();
    let mut failures = Vec::new();
    let mut total_rooms = 0;

    for seed in 0..seeds {
        let mut rng = StdRng::seed_from_u64(seed);
        let obstacles = random_layout(&mut rng);
        let platforms = obstacles
            .iter()
            .filter(|o| o.kind == ObstacleKind::Platform)
            .count();

        let layout = match generate_regions(&obstacles, config) {
            Ok(l) => l,
            Err(e) => {
                failures.push(format!("seed {}: {}", seed, e));
                continue;
            }
        };
        total_rooms += layout.rooms.len();

        let mut problems = layout_problems(&layout, &obstacles, config);
        if layout.connectors.len() != platforms {
            problems.push(format!(
                "{} connectors for {} platforms",
                layout.connectors.len(),
                platforms
            ));
        }

        let mut shuffled = obstacles.clone();
        shuffled.shuffle(&mut rng);
        match generate_regions(&shuffled, config) {
            Ok(other) if other.rooms == layout.rooms => {}
            Ok(_) => problems.push("rooms depend on obstacle order".into()),
            Err(e) => problems.push(format!("shuffled input failed: {}", e)),
        }

        if verbose {
            println!(
                "  seed {}: {} obstacles → {} rooms",
                seed,
                obstacles.len(),
                layout.rooms.len()
            );
        }
        if !problems.is_empty() {
            failures.push(format!("seed {}: {}", seed, problems.join(", ")));
        }
    }

    results.push(TestResult {
        name: "random_layouts_valid".into(),
        passed: failures.is_empty(),
        detail: if failures.is_empty() {
            format!("{} layouts, {} rooms total", seeds, total_rooms)
        } else {
            format!(
                "{} of {} failed (first: {})",
                failures.len(),
                seeds,
                failures[0]
            )
        },
    });

    results
}

// ── Shared checks ───────────────────────────────────────────────────────

/// Validation errors (not warnings) for one generated layout.
fn layout_problems(
    layout: &HullLayout,
    obstacles: &[Obstacle],
    config: &AutoHullConfig,
) -> Vec<String> {
    validate_all(layout, obstacles, config)
        .into_iter()
        .filter(|e| e.severity == Severity::Error)
        .map(|e| format!("[{}] {}", e.category, e.message))
        .collect()
}
