//! HiveQuest Headless Validation Harness
//!
//! Validates the pure game logic without a renderer, input capture, or
//! assets. Runs entirely in-process: scripted walkthroughs, geometry
//! sweeps, and the shipped data layout.
//!
//! Usage:
//!   cargo run -p hivequest-simtest
//!   cargo run -p hivequest-simtest -- --verbose

use glam::{Vec2, Vec3};
use hivequest_logic::config::HiveConfig;
use hivequest_logic::geometry;
use hivequest_logic::movement::{MoveIntent, PlayerKinematics};
use hivequest_logic::session::HiveSession;

// ── Shipped layout (same JSON a host would load) ────────────────────────
const LAYOUT_JSON: &str = include_str!("../../../data/hive_layout.json");

const DT: f32 = 1.0 / 60.0;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== HiveQuest Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Shipped layout file
    results.extend(validate_layout_file(verbose));

    // 2. Geometry invariants
    results.extend(validate_geometry(verbose));

    // 3. Gate walkthrough
    results.extend(validate_gate_walkthrough(verbose));

    // 4. Containment sweep
    results.extend(validate_containment(verbose));

    // 5. Goal discovery
    results.extend(validate_goal_discovery(verbose));

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

// ── 1. Shipped layout ───────────────────────────────────────────────────

fn validate_layout_file(_verbose: bool) -> Vec<TestResult> {
    println!("--- Shipped Layout ---");
    let mut results = Vec::new();

    let layout: HiveConfig = match serde_json::from_str(LAYOUT_JSON) {
        Ok(l) => l,
        Err(e) => {
            results.push(TestResult {
                name: "layout_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    let errors = layout.validate();
    results.push(TestResult {
        name: "layout_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            "no validation errors".into()
        } else {
            format!("{} errors, first: {}", errors.len(), errors[0].message)
        },
    });

    let reference = HiveConfig::default();
    let same_topology = layout.expansion == reference.expansion
        && layout.goal_room == reference.goal_room
        && layout.gate_wall_index == reference.gate_wall_index;
    results.push(TestResult {
        name: "layout_matches_reference".into(),
        passed: same_topology,
        detail: format!(
            "{} rules, goal room {}, gate wall {}",
            layout.expansion.len(),
            layout.goal_room,
            layout.gate_wall_index
        ),
    });

    results
}

// ── 2. Geometry invariants ──────────────────────────────────────────────

fn validate_geometry(_verbose: bool) -> Vec<TestResult> {
    println!("--- Geometry ---");
    let mut results = Vec::new();

    // Six walls, equally spaced, at the apothem.
    let config = HiveConfig::default();
    let r = config.apothem();
    let mut spacing_ok = true;
    let mut distance_ok = true;
    for i in 0..6u8 {
        let w = geometry::wall_placement(
            Vec2::ZERO,
            i,
            config.side_length,
            config.wall_height,
            config.floor_y,
        );
        let planar = Vec2::new(w.position.x, w.position.z);
        if (planar.distance(Vec2::ZERO) - r).abs() > 1e-3 {
            distance_ok = false;
        }
        if (w.rotation_y - geometry::wall_angle(i)).abs() > 1e-5 {
            spacing_ok = false;
        }
    }
    results.push(TestResult {
        name: "walls_at_apothem".into(),
        passed: distance_ok,
        detail: format!("apothem {:.4}", r),
    });
    results.push(TestResult {
        name: "walls_face_inward".into(),
        passed: spacing_ok,
        detail: "rotation equals placement angle".into(),
    });

    // Normalization across several turns of the circle.
    let mut normalize_ok = true;
    let mut theta = -30.0f32;
    while theta < 30.0 {
        let n = geometry::normalize_angle(theta);
        if !(-std::f32::consts::PI..=std::f32::consts::PI).contains(&n) {
            normalize_ok = false;
        }
        let k = (theta - n) / (2.0 * std::f32::consts::PI);
        if (k - k.round()).abs() > 1e-3 {
            normalize_ok = false;
        }
        theta += 0.37;
    }
    results.push(TestResult {
        name: "angle_normalization".into(),
        passed: normalize_ok,
        detail: "range and mod-2π preserved over [-30, 30] rad".into(),
    });

    results
}

// ── 3. Gate walkthrough ─────────────────────────────────────────────────

fn validate_gate_walkthrough(verbose: bool) -> Vec<TestResult> {
    println!("--- Gate Walkthrough ---");
    let mut results = Vec::new();

    let mut session = HiveSession::new(HiveConfig::default());
    let mut kinematics = PlayerKinematics::new();
    let config = session.config().clone();
    let intent = MoveIntent { forward: true, ..Default::default() };

    // Hold W facing the gate until something happens.
    let mut position = Vec3::new(0.0, 1.6, 0.0);
    let mut crossed_at_tick = None;
    for tick in 0..600 {
        let step = kinematics.step(intent, 0.0, config.move_speed, config.damping, DT);
        position += Vec3::new(step.x, 0.0, step.y);
        let report = session.tick(position, DT);
        position = report.corrected_position;
        if report.gate_just_crossed {
            crossed_at_tick = Some(tick);
            if verbose {
                println!("  gate crossed at tick {} ({:.2} m out)", tick, position.z);
            }
            break;
        }
    }

    results.push(TestResult {
        name: "gate_crossed_by_walking".into(),
        passed: crossed_at_tick.is_some(),
        detail: match crossed_at_tick {
            Some(t) => format!("crossed at tick {}", t),
            None => "never crossed in 600 ticks".into(),
        },
    });

    results.push(TestResult {
        name: "expansion_room_count".into(),
        passed: session.rooms().len() == 4,
        detail: format!("{} rooms after expansion", session.rooms().len()),
    });

    let expected = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 17.320509),
        Vec2::new(15.0, 8.660254),
        Vec2::new(-15.0, 8.660254),
    ];
    let centers_ok = session
        .rooms()
        .rooms()
        .iter()
        .zip(expected)
        .all(|(room, want)| room.center.distance(want) < 1e-3);
    results.push(TestResult {
        name: "expansion_centers".into(),
        passed: centers_ok && session.rooms().len() == expected.len(),
        detail: "root, child and both grandchildren at predicted centers".into(),
    });

    // Loiter in the breach zone: nothing else may fire.
    let rooms_before = session.rooms().len();
    let mut refired = false;
    for _ in 0..100 {
        let report = session.tick(Vec3::new(0.0, 1.6, 9.1), DT);
        refired |= report.gate_just_crossed || !report.new_rooms.is_empty();
    }
    results.push(TestResult {
        name: "gate_single_fire".into(),
        passed: !refired && session.rooms().len() == rooms_before,
        detail: "100 loitering ticks, no re-expansion".into(),
    });

    results
}

// ── 4. Containment ──────────────────────────────────────────────────────

fn validate_containment(_verbose: bool) -> Vec<TestResult> {
    println!("--- Containment ---");
    let mut results = Vec::new();

    let config = HiveConfig::default();
    let mut session = HiveSession::new(config.clone());

    // Inside: untouched.
    let inside = Vec3::new(2.0, 1.6, -3.0);
    let report = session.tick(inside, DT);
    results.push(TestResult {
        name: "inside_untouched".into(),
        passed: report.corrected_position == inside,
        detail: format!("{:?}", report.corrected_position),
    });

    // Far outside: pulled to exactly the containment radius.
    let report = session.tick(Vec3::new(50.0, 1.6, 50.0), DT);
    let planar = Vec2::new(report.corrected_position.x, report.corrected_position.z);
    let dist = planar.distance(Vec2::ZERO);
    results.push(TestResult {
        name: "outside_pulled_to_boundary".into(),
        passed: (dist - config.containment_radius).abs() < 1e-3,
        detail: format!("{:.4} from root center", dist),
    });

    // Height clamp, both ends.
    let low = session.tick(Vec3::new(0.0, -3.0, 0.0), DT).corrected_position.y;
    let high = session.tick(Vec3::new(0.0, 99.0, 0.0), DT).corrected_position.y;
    results.push(TestResult {
        name: "height_clamp".into(),
        passed: (low - config.min_height).abs() < 1e-5
            && (high - config.max_height).abs() < 1e-5,
        detail: format!("clamped to [{}, {}]", low, high),
    });

    // Ring sweep around the root: every resolved point ends in bounds.
    let mut sweep_ok = true;
    let mut worst: f32 = 0.0;
    for i in 0..72 {
        let theta = i as f32 * 5.0_f32.to_radians();
        let probe = geometry::planar_dir(theta) * 40.0;
        let report = session.tick(Vec3::new(probe.x, 1.6, probe.y), DT);
        let planar = Vec2::new(report.corrected_position.x, report.corrected_position.z);
        let (_, dist) = session.rooms().nearest(planar);
        worst = worst.max(dist);
        if dist > config.containment_radius + 1e-3 {
            sweep_ok = false;
        }
    }
    results.push(TestResult {
        name: "ring_sweep_contained".into(),
        passed: sweep_ok,
        detail: format!("worst resolved distance {:.4}", worst),
    });

    results
}

// ── 5. Goal discovery ───────────────────────────────────────────────────

fn validate_goal_discovery(_verbose: bool) -> Vec<TestResult> {
    println!("--- Goal Discovery ---");
    let mut results = Vec::new();

    let mut session = HiveSession::new(HiveConfig::default());

    // Before the gate: no goal, nothing to find.
    let report = session.tick(Vec3::new(15.0, 1.6, 8.66), DT);
    results.push(TestResult {
        name: "no_goal_before_expansion".into(),
        passed: !report.goal_just_found && session.goal().is_none(),
        detail: "goal absent until its room exists".into(),
    });

    // Cross the gate, then approach.
    session.tick(Vec3::new(0.0, 1.6, 9.1), DT);
    let spawned = session.goal().copied();
    results.push(TestResult {
        name: "goal_spawned_with_expansion".into(),
        passed: spawned.is_some(),
        detail: match spawned {
            Some(g) => format!(
                "at ({:.2}, {:.2}, {:.2}), facing {:.1}°",
                g.position.x,
                g.position.y,
                g.position.z,
                g.facing_y.to_degrees()
            ),
            None => "missing".into(),
        },
    });

    let report = session.tick(Vec3::new(15.0, 1.6, 8.66), DT);
    let found_once = report.goal_just_found;
    let mut refired = false;
    for _ in 0..10 {
        refired |= session.tick(Vec3::new(15.0, 1.6, 8.66), DT).goal_just_found;
    }
    results.push(TestResult {
        name: "goal_single_fire".into(),
        passed: found_once && !refired && session.finished(),
        detail: "fired once, then terminal".into(),
    });

    let frozen = session.tick(Vec3::new(300.0, 50.0, 300.0), DT);
    results.push(TestResult {
        name: "finished_session_frozen".into(),
        passed: frozen.corrected_position == Vec3::new(300.0, 50.0, 300.0)
            && !frozen.gate_just_crossed
            && !frozen.goal_just_found,
        detail: "post-goal ticks are no-ops".into(),
    });

    results
}
