//! Rule-driven room-graph growth.
//!
//! Crossing the root gate triggers exactly one expansion: every room the
//! config's rule list defines is created synchronously, in declared order,
//! within the triggering call. The host receives the new rooms' wall
//! placements (to instantiate meshes) and the goal spawn transform (to load
//! the goal model) in the same tick report, so nothing renders a frame late.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::HiveConfig;
use crate::geometry::{WallPlacement, WALLS_PER_ROOM};
use crate::rooms::{RoomArena, RoomId};

/// A room created by the expansion, with everything the host needs to
/// realize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub id: RoomId,
    /// Center on the ground plane (`.y` is world Z).
    pub center: Vec2,
    pub walls: [WallPlacement; WALLS_PER_ROOM],
}

/// Spawn transform for the goal entity: the center of its room at floor
/// height, with a fixed facing. Emitted once, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSpawn {
    pub position: Vec3,
    /// Yaw in radians.
    pub facing_y: f32,
}

/// Create every room the expansion rules define and the goal spawn for the
/// designated room.
///
/// The config must have passed [`HiveConfig::validate`]; rule parents and
/// the goal room index are trusted here. The caller guards against
/// re-invocation (the arena would happily grow duplicate rooms).
pub fn run_expansion(arena: &mut RoomArena, config: &HiveConfig) -> (Vec<NewRoom>, GoalSpawn) {
    let mut created = Vec::with_capacity(config.expansion.len());
    for rule in &config.expansion {
        let id = arena.grow(rule.parent as RoomId, rule.wall);
        created.push(NewRoom {
            id,
            center: arena.rooms()[id as usize].center,
            walls: arena.walls(id),
        });
    }

    let goal_center = arena.rooms()[config.goal_room].center;
    let spawn = GoalSpawn {
        position: Vec3::new(goal_center.x, config.floor_y, goal_center.y),
        facing_y: config.goal_facing_y,
    };

    (created, spawn)
}
