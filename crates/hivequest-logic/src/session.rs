//! The hive session: tick orchestration and one-shot progression flags.
//!
//! A [`HiveSession`] owns all mutable game state (the room arena, the goal,
//! the progression flags) and is driven by one synchronous [`tick`] per
//! rendered frame. The tick pipeline is ordered so that a gate crossing and
//! the rooms it creates are visible to the containment resolver in the same
//! tick; otherwise the player could walk one frame into a room whose walls
//! the host has not been told about yet.
//!
//! [`tick`]: HiveSession::tick

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::HiveConfig;
use crate::containment;
use crate::expansion::{self, GoalSpawn, NewRoom};
use crate::geometry;
use crate::rooms::RoomArena;

/// Monotonic progression flags. Each transitions false→true at most once
/// per session and never resets; there is no replay within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The player has left the root room through its gate sector.
    pub gate_crossed: bool,
    /// The player has come within the goal threshold. Terminal.
    pub goal_found: bool,
}

/// What one tick produced, for the host to realize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Input position after boundary resolution and height clamp.
    pub corrected_position: Vec3,
    /// Rooms created this tick. Empty on almost every tick; the full
    /// expansion on the tick the gate is crossed.
    pub new_rooms: Vec<NewRoom>,
    /// Set on the same tick the goal's room is created.
    pub goal_spawn: Option<GoalSpawn>,
    pub gate_just_crossed: bool,
    pub goal_just_found: bool,
}

impl TickReport {
    fn quiet(position: Vec3) -> Self {
        Self {
            corrected_position: position,
            new_rooms: Vec::new(),
            goal_spawn: None,
            gate_just_crossed: false,
            goal_just_found: false,
        }
    }
}

/// One playthrough: root room at the origin, a gate to cross, a goal to
/// find.
#[derive(Debug, Clone)]
pub struct HiveSession {
    config: HiveConfig,
    arena: RoomArena,
    state: SessionState,
    goal: Option<GoalSpawn>,
    elapsed: f32,
}

impl HiveSession {
    /// Build a session from a validated config.
    ///
    /// Panics if [`HiveConfig::validate`] reports errors: a malformed
    /// layout is a setup-time programmer error, not a runtime condition.
    pub fn new(config: HiveConfig) -> Self {
        let errors = config.validate();
        assert!(errors.is_empty(), "invalid hive config: {errors:?}");
        let arena = RoomArena::new(config.side_length, config.wall_height, config.floor_y);
        Self {
            config,
            arena,
            state: SessionState::default(),
            goal: None,
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &HiveConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// All rooms created so far.
    pub fn rooms(&self) -> &RoomArena {
        &self.arena
    }

    /// The goal spawn, once its room exists.
    pub fn goal(&self) -> Option<&GoalSpawn> {
        self.goal.as_ref()
    }

    /// True once the goal has been found; every later tick is a no-op.
    pub fn finished(&self) -> bool {
        self.state.goal_found
    }

    /// Session time in seconds. Stops advancing when the session finishes.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance one tick with the player at `position`.
    ///
    /// Pipeline order matters: the gate check (which may expand the graph)
    /// runs before boundary resolution so the resolver sees rooms created
    /// this very tick, and the goal check uses the raw input position, the
    /// same one the gate check saw.
    pub fn tick(&mut self, position: Vec3, dt: f32) -> TickReport {
        if self.state.goal_found {
            return TickReport::quiet(position);
        }
        self.elapsed += dt;

        let mut report = TickReport::quiet(position);

        if !self.state.gate_crossed && self.in_gate_breach(position) {
            self.state.gate_crossed = true;
            let (rooms, spawn) = expansion::run_expansion(&mut self.arena, &self.config);
            self.goal = Some(spawn);
            report.new_rooms = rooms;
            report.goal_spawn = Some(spawn);
            report.gate_just_crossed = true;
        }

        let resolution = containment::resolve(position, &self.arena, &self.config);
        report.corrected_position = resolution.position;

        if let Some(goal) = &self.goal {
            if position.distance(goal.position) < self.config.goal_threshold {
                self.state.goal_found = true;
                report.goal_just_found = true;
            }
        }

        report
    }

    /// Whether `position` is beyond the root boundary inside the gate
    /// sector. Only called while the gate is uncrossed, so none of this
    /// angular math runs for the rest of the session.
    fn in_gate_breach(&self, position: Vec3) -> bool {
        let planar = Vec2::new(position.x, position.z);
        let root = self.arena.root().center;
        let dist = planar.distance(root);
        if dist <= self.config.containment_radius + self.config.gate_margin {
            return false;
        }
        let gate_angle = geometry::wall_angle(self.config.gate_wall_index);
        let diff = geometry::normalize_angle(geometry::bearing(root, planar) - gate_angle);
        diff.abs() < geometry::HALF_ARC
    }
}
