//! Player kinematics: damped planar velocity from a move intent.
//!
//! The host captures raw input and the camera yaw; this module turns them
//! into the displacement to apply before calling the session tick. Velocity
//! lives in the camera frame (strafe, forward) and is damped every tick, so
//! releasing the keys coasts the player to a stop instead of halting dead.
//!
//! Yaw follows the same convention as wall angles: yaw 0 faces +Z, and the
//! forward axis is `(sin yaw, cos yaw)`. Hosts should stop stepping once the
//! session reports the goal found; [`PlayerKinematics::halt`] drops any
//! residual coasting.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry;

/// Which way the player is trying to move this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Normalized (strafe, forward) direction. Zero when idle or when
    /// opposite keys cancel out.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(
            (self.right as i32 - self.left as i32) as f32,
            (self.forward as i32 - self.backward as i32) as f32,
        )
        .normalize_or_zero()
    }
}

/// Damped planar velocity state, in the camera frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerKinematics {
    /// (strafe, forward) velocity in m/s.
    velocity: Vec2,
}

impl PlayerKinematics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current camera-frame velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Drop all velocity (e.g. when the session finishes).
    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Advance one tick: damp, accelerate along the intent, and return the
    /// world-space ground-plane displacement for a camera at `yaw`
    /// (`.y` is world Z).
    pub fn step(
        &mut self,
        intent: MoveIntent,
        yaw: f32,
        speed: f32,
        damping: f32,
        dt: f32,
    ) -> Vec2 {
        // At very low frame rates damping * dt can exceed 1; decay stops at
        // zero rather than flipping the velocity sign.
        let decay = (1.0 - damping * dt).max(0.0);
        self.velocity *= decay;

        let dir = intent.direction();
        if dir.x != 0.0 {
            self.velocity.x += dir.x * (speed + 5.0 * dt);
        }
        if dir.y != 0.0 {
            self.velocity.y += dir.y * (speed + 5.0 * dt);
        }

        let forward = geometry::planar_dir(yaw);
        let right = Vec2::new(forward.y, -forward.x);
        (right * self.velocity.x + forward * self.velocity.y) * dt
    }
}
