//! Host-facing hive configuration and its validation.
//!
//! The host hands a [`HiveConfig`] to [`crate::session::HiveSession::new`]
//! once at startup. A malformed config (an expansion rule referencing a room
//! that does not exist yet, a goal room outside the expansion, a containment
//! circle wider than the room) is a programmer error: [`HiveConfig::validate`]
//! reports every problem and session construction asserts the list is empty,
//! so a bad layout fails at setup instead of misbehaving mid-session.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::geometry;

/// One step of the gate expansion: grow a new room off `parent`'s wall.
///
/// `parent` is a creation-order index: 0 is the root room and rule `k`
/// creates room `k + 1`, so a rule may only reference a room created
/// before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionRule {
    pub parent: usize,
    /// Wall index on the parent (0..6).
    pub wall: u8,
}

/// Full configuration for a hive session.
///
/// Serializable so hosts can keep layouts in data files rather than code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiveConfig {
    /// Hexagon side length in meters.
    pub side_length: f32,
    /// Wall panel height in meters.
    pub wall_height: f32,
    /// Floor plane height.
    pub floor_y: f32,
    /// Playable circle radius. Must not exceed the hex apothem.
    pub containment_radius: f32,
    /// Root wall acting as the gate (0..6).
    pub gate_wall_index: u8,
    /// Distance past the containment radius before a crossing counts.
    pub gate_margin: f32,
    /// Vertical clamp applied to the player every tick.
    pub min_height: f32,
    pub max_height: f32,
    /// Rooms created when the gate is crossed, in declared order.
    pub expansion: Vec<ExpansionRule>,
    /// Creation-order index of the room that holds the goal. Must name a
    /// room the expansion creates (1..=expansion.len()), never the root.
    pub goal_room: usize,
    /// 3D distance at which the goal counts as found.
    pub goal_threshold: f32,
    /// The goal's fixed yaw in radians.
    pub goal_facing_y: f32,
    /// Walking speed in m/s.
    pub move_speed: f32,
    /// Planar velocity damping per second.
    pub damping: f32,
}

impl Default for HiveConfig {
    /// The reference hive: one child room through the root gate, two
    /// grandchildren branching off the child's walls 2 and 4, goal in the
    /// first grandchild.
    fn default() -> Self {
        Self {
            side_length: constants::SIDE_LENGTH,
            wall_height: constants::WALL_HEIGHT,
            floor_y: constants::FLOOR_Y,
            containment_radius: constants::CONTAINMENT_RADIUS,
            gate_wall_index: constants::GATE_WALL_INDEX,
            gate_margin: constants::GATE_MARGIN,
            min_height: constants::MIN_HEIGHT,
            max_height: constants::MAX_HEIGHT,
            expansion: vec![
                ExpansionRule { parent: 0, wall: constants::GATE_WALL_INDEX },
                ExpansionRule { parent: 1, wall: 2 },
                ExpansionRule { parent: 1, wall: 4 },
            ],
            goal_room: 2,
            goal_threshold: constants::GOAL_THRESHOLD,
            goal_facing_y: constants::GOAL_FACING_DEG.to_radians(),
            move_speed: constants::MOVE_SPEED,
            damping: constants::DAMPING,
        }
    }
}

/// A configuration problem found by [`HiveConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub category: &'static str,
    pub message: String,
}

impl HiveConfig {
    /// Apothem of a room: center-to-wall distance.
    pub fn apothem(&self) -> f32 {
        geometry::apothem(self.side_length)
    }

    /// Total rooms once the gate expansion has run (root included).
    pub fn room_count_after_expansion(&self) -> usize {
        1 + self.expansion.len()
    }

    /// Validate the configuration. An empty result means safe to run.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut err = |category: &'static str, message: String| {
            errors.push(ConfigError { category, message });
        };

        if self.side_length <= 0.0 {
            err("dimensions", format!("side_length {} must be positive", self.side_length));
        }
        if self.wall_height <= 0.0 {
            err("dimensions", format!("wall_height {} must be positive", self.wall_height));
        }
        if self.containment_radius <= 0.0 {
            err(
                "containment",
                format!("containment_radius {} must be positive", self.containment_radius),
            );
        } else if self.side_length > 0.0 && self.containment_radius > self.apothem() {
            err(
                "containment",
                format!(
                    "containment_radius {} exceeds the apothem {:.3}: the playable circle would poke through the walls",
                    self.containment_radius,
                    self.apothem()
                ),
            );
        }
        if self.gate_margin < 0.0 {
            err("gate", format!("gate_margin {} must not be negative", self.gate_margin));
        }
        if self.gate_wall_index as usize >= geometry::WALLS_PER_ROOM {
            err(
                "gate",
                format!("gate_wall_index {} out of range (walls are 0..6)", self.gate_wall_index),
            );
        }
        if self.min_height >= self.max_height {
            err(
                "heights",
                format!(
                    "min_height {} must be below max_height {}",
                    self.min_height, self.max_height
                ),
            );
        }

        for (k, rule) in self.expansion.iter().enumerate() {
            if rule.wall as usize >= geometry::WALLS_PER_ROOM {
                err(
                    "expansion",
                    format!("rule {k}: wall index {} out of range (walls are 0..6)", rule.wall),
                );
            }
            // Rule k creates room k + 1, so parents 0..=k exist by then.
            if rule.parent > k {
                err(
                    "expansion",
                    format!(
                        "rule {k}: parent {} is not created yet (rooms 0..={} exist at that point)",
                        rule.parent, k
                    ),
                );
            }
        }

        if self.goal_room == 0 || self.goal_room >= self.room_count_after_expansion() {
            err(
                "goal",
                format!(
                    "goal_room {} must name a room the expansion creates (1..={})",
                    self.goal_room,
                    self.expansion.len()
                ),
            );
        }
        if self.goal_threshold <= 0.0 {
            err("goal", format!("goal_threshold {} must be positive", self.goal_threshold));
        }
        if self.move_speed < 0.0 {
            err("movement", format!("move_speed {} must not be negative", self.move_speed));
        }
        if self.damping < 0.0 {
            err("movement", format!("damping {} must not be negative", self.damping));
        }

        errors
    }
}
