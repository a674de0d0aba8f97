//! Reference tuning values for the shipped hive.
//!
//! These are plain numbers with no behavior. [`crate::config::HiveConfig::default`]
//! assembles them into the reference configuration; hosts that want a
//! different hive build their own config instead of editing these.

/// Hexagon side length in meters. One wall panel is this wide.
pub const SIDE_LENGTH: f32 = 10.0;

/// Wall panel height in meters.
pub const WALL_HEIGHT: f32 = 20.0;

/// Floor plane height. Rooms stand on this; the goal sits here too.
pub const FLOOR_Y: f32 = -1.0;

/// Playable circle radius inside a room, just under the hex apothem
/// (side 10 gives apothem ≈ 8.66).
pub const CONTAINMENT_RADIUS: f32 = 8.5;

/// Which root wall is the gate.
pub const GATE_WALL_INDEX: u8 = 0;

/// Distance past the containment radius before a gate crossing counts.
/// Keeps boundary jitter from firing the crossing.
pub const GATE_MARGIN: f32 = 0.5;

/// Vertical clamp on the player's eye height.
pub const MIN_HEIGHT: f32 = 1.0;
pub const MAX_HEIGHT: f32 = 18.5;

/// Eye height at spawn.
pub const EYE_HEIGHT: f32 = 1.6;

/// 3D distance at which the goal counts as found.
pub const GOAL_THRESHOLD: f32 = 4.5;

/// The goal's fixed yaw, degrees. Hand-tuned to face the room entrance.
pub const GOAL_FACING_DEG: f32 = 210.0;

/// Walking speed in m/s.
pub const MOVE_SPEED: f32 = 5.0;

/// Planar velocity damping per second.
pub const DAMPING: f32 = 10.0;
