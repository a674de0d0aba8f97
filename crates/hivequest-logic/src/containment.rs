//! Nearest-room containment and boundary resolution.
//!
//! Each room is approximated by a circle of `containment_radius` around its
//! center. A position inside any circle is left alone; a position outside
//! every circle is projected radially back onto the boundary of whichever
//! room is nearest. Connected rooms sit two apothems apart, so their circles
//! meet at the shared wall and the "nearest room" handoff happens at the
//! gate. The boundary is continuous but not smooth where the nearest room
//! changes; the radial push-back slides the player along it rather than
//! trapping them.
//!
//! Height is clamped independently of room membership.

use glam::{Vec2, Vec3};

use crate::config::HiveConfig;
use crate::rooms::{RoomArena, RoomId};

/// Outcome of resolving a position against the known rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Position after push-back and height clamp.
    pub position: Vec3,
    /// Whether anything changed.
    pub corrected: bool,
    /// Room whose center was closest to the input position.
    pub nearest_room: RoomId,
}

/// Resolve `position` against every room in the arena.
///
/// Runs every tick regardless of gate or goal state. X and Z are pushed
/// back onto the nearest room's containment circle when the position lies
/// outside all of them; Y is clamped into the configured height band
/// unconditionally.
pub fn resolve(position: Vec3, arena: &RoomArena, config: &HiveConfig) -> Resolution {
    let planar = Vec2::new(position.x, position.z);
    let (nearest, dist) = arena.nearest(planar);

    let mut out = position;
    out.y = position.y.clamp(config.min_height, config.max_height);

    // Never divide by a near-zero distance; a point that close to a center
    // is inside the room anyway.
    if dist > config.containment_radius && dist > f32::EPSILON {
        let factor = 1.0 - config.containment_radius / dist;
        out.x -= (planar.x - nearest.center.x) * factor;
        out.z -= (planar.y - nearest.center.y) * factor;
    }

    Resolution {
        position: out,
        corrected: out != position,
        nearest_room: nearest.id,
    }
}
