//! Integration tests for a full hive playthrough.
//!
//! Exercises: HiveConfig → HiveSession → gate breach → expansion →
//! containment → goal discovery, the way a host drives it frame by frame.
//!
//! All tests are pure logic: no renderer, no input capture, no assets.

use glam::{Vec2, Vec3};
use hivequest_logic::config::{ExpansionRule, HiveConfig};
use hivequest_logic::movement::{MoveIntent, PlayerKinematics};
use hivequest_logic::session::{HiveSession, TickReport};

const DT: f32 = 1.0 / 60.0;

// ── Helpers ────────────────────────────────────────────────────────────

fn planar(position: Vec3) -> Vec2 {
    Vec2::new(position.x, position.z)
}

/// Drive the session along a straight line from `from` to `to` in steps of
/// at most half a meter, feeding each corrected position into the next
/// tick the way a host's frame loop would. Returns the final position and
/// every report that carried an event.
fn walk(session: &mut HiveSession, from: Vec3, to: Vec3) -> (Vec3, Vec<TickReport>) {
    let mut events = Vec::new();
    let mut position = from;
    let steps = ((to - from).length() / 0.5).ceil().max(1.0) as usize;
    for i in 1..=steps {
        let target = from.lerp(to, i as f32 / steps as f32);
        let report = session.tick(Vec3::new(target.x, position.y, target.z), DT);
        position = report.corrected_position;
        if report.gate_just_crossed || report.goal_just_found || !report.new_rooms.is_empty() {
            events.push(report);
        }
    }
    (position, events)
}

fn spawn() -> Vec3 {
    Vec3::new(0.0, 1.6, 0.0)
}

// ── Full playthrough ───────────────────────────────────────────────────

#[test]
fn playthrough_reaches_the_goal() {
    let mut session = HiveSession::new(HiveConfig::default());

    // Walk straight through the gate into the child room.
    let (position, events) = walk(&mut session, spawn(), Vec3::new(0.0, 1.6, 17.32));
    assert_eq!(events.len(), 1, "exactly one eventful tick on the way in");
    assert!(events[0].gate_just_crossed);
    assert_eq!(events[0].new_rooms.len(), 3);
    assert_eq!(session.rooms().len(), 4);

    let goal = session.goal().copied().expect("goal spawned with the expansion");
    assert!((goal.position.x - 15.0).abs() < 1e-2);
    assert!((goal.position.y + 1.0).abs() < 1e-5);
    assert!((goal.position.z - 8.66).abs() < 1e-2);

    // Turn into the first grandchild room and approach the goal.
    let goal_eye = Vec3::new(goal.position.x, 1.6, goal.position.z);
    let (_, events) = walk(&mut session, position, goal_eye);
    assert_eq!(events.len(), 1, "exactly one eventful tick on the approach");
    assert!(events[0].goal_just_found);
    assert!(session.finished());
}

#[test]
fn the_walk_never_leaves_the_known_rooms() {
    let mut session = HiveSession::new(HiveConfig::default());

    // Wander a rectangle that pokes well outside the hive.
    let corners = [
        Vec3::new(0.0, 1.6, 7.0),
        Vec3::new(20.0, 1.6, 7.0),
        Vec3::new(20.0, 1.6, -20.0),
        Vec3::new(-20.0, 1.6, -20.0),
        Vec3::new(0.0, 1.6, 0.0),
    ];
    let mut position = spawn();
    for corner in corners {
        let (end, _) = walk(&mut session, position, corner);
        position = end;
    }

    // Gate never crossed (the rectangle dodges the gate sector past the
    // margin), so the root circle bounded the whole walk.
    assert!(!session.state().gate_crossed);
    assert_eq!(session.rooms().len(), 1);
    let (_, dist) = session.rooms().nearest(planar(position));
    assert!(dist <= session.config().containment_radius + 1e-3);
}

#[test]
fn rooms_land_exactly_where_the_rules_say() {
    let mut session = HiveSession::new(HiveConfig::default());
    let report = session.tick(Vec3::new(0.0, 1.6, 9.1), DT);
    assert!(report.gate_just_crossed);

    let centers: Vec<Vec2> = session.rooms().rooms().iter().map(|r| r.center).collect();
    let expected = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 17.320509),
        Vec2::new(15.0, 8.660254),
        Vec2::new(-15.0, 8.660254),
    ];
    assert_eq!(centers.len(), expected.len());
    for (center, expected) in centers.iter().zip(expected) {
        assert!(
            center.distance(expected) < 1e-3,
            "room at {center:?}, expected {expected:?}"
        );
    }
}

#[test]
fn kinematics_walk_through_the_gate() {
    // Drive the session with the damped kinematics instead of scripted
    // positions: hold W facing the gate until the graph expands.
    let mut session = HiveSession::new(HiveConfig::default());
    let mut kinematics = PlayerKinematics::new();
    let config = session.config().clone();
    let intent = MoveIntent { forward: true, ..Default::default() };

    let mut position = spawn();
    let mut crossed = false;
    for _ in 0..600 {
        let step = kinematics.step(intent, 0.0, config.move_speed, config.damping, DT);
        position += Vec3::new(step.x, 0.0, step.y);
        let report = session.tick(position, DT);
        position = report.corrected_position;
        if report.gate_just_crossed {
            crossed = true;
            break;
        }
    }
    assert!(crossed, "ten simulated seconds of walking should breach the gate");
    assert_eq!(session.rooms().len(), 4);
}

// ── One-shot semantics ─────────────────────────────────────────────────

#[test]
fn loitering_in_the_breach_zone_expands_once() {
    let mut session = HiveSession::new(HiveConfig::default());
    for _ in 0..100 {
        session.tick(Vec3::new(0.0, 1.6, 9.1), DT);
    }
    assert_eq!(session.rooms().len(), 4);
}

#[test]
fn finished_session_ignores_further_movement() {
    let mut session = HiveSession::new(HiveConfig::default());
    session.tick(Vec3::new(0.0, 1.6, 9.1), DT);
    let report = session.tick(Vec3::new(15.0, 1.6, 8.66), DT);
    assert!(report.goal_just_found);

    // Movement processing is frozen: even a far-out position comes back
    // untouched, with no flags and no corrections.
    let wild = Vec3::new(500.0, 99.0, -500.0);
    let report = session.tick(wild, DT);
    assert_eq!(report.corrected_position, wild);
    assert!(!report.gate_just_crossed);
    assert!(!report.goal_just_found);
}

// ── Custom layouts ─────────────────────────────────────────────────────

#[test]
fn a_custom_topology_plays_through() {
    // Gate on wall 3 (straight -Z), goal two rooms deep.
    let config = HiveConfig {
        gate_wall_index: 3,
        expansion: vec![
            ExpansionRule { parent: 0, wall: 3 },
            ExpansionRule { parent: 1, wall: 3 },
        ],
        goal_room: 2,
        ..HiveConfig::default()
    };
    let mut session = HiveSession::new(config);

    let report = session.tick(Vec3::new(0.0, 1.6, -9.1), DT);
    assert!(report.gate_just_crossed);
    assert_eq!(session.rooms().len(), 3);

    let goal = session.goal().copied().unwrap();
    assert!((goal.position.z + 2.0 * 17.320509).abs() < 1e-2);
    assert!((goal.position.x).abs() < 1e-2);

    let report = session.tick(Vec3::new(0.0, 1.6, goal.position.z + 1.0), DT);
    assert!(report.goal_just_found);
}
