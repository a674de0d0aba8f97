//! Hex room geometry: wall placement, neighbor offsets, bearings.
//!
//! Rooms are regular hexagons with six wall panels indexed 0..6. Wall `i`
//! sits at angle `i * 60°` from the room center, at apothem distance
//! `R = side * √3 / 2`, with its yaw equal to the placement angle so the
//! panel faces back toward the center.
//!
//! Ground-plane points are `glam::Vec2` where `.x` is world X and `.y` is
//! world Z. Angles use the `(sin θ, cos θ)` convention throughout: angle 0
//! points down +Z, and a bearing is `atan2(dx, dz)`, not the mathematical
//! `atan2(y, x)`. Wall placement and bearing must stay inverses of each
//! other or the gate-sector test stops lining up with the walls.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Walls per hex room.
pub const WALLS_PER_ROOM: usize = 6;

/// Angular span of one wall sector (60°).
pub const WALL_ARC: f32 = PI / 3.0;

/// Half a wall sector (30°): the wedge a wall owns on either side of its
/// center angle.
pub const HALF_ARC: f32 = PI / 6.0;

/// Apothem (center-to-wall distance) of a regular hexagon with the given
/// side length.
pub fn apothem(side_length: f32) -> f32 {
    side_length * 3.0_f32.sqrt() / 2.0
}

/// Center angle of wall `index` as seen from the room center.
pub fn wall_angle(index: u8) -> f32 {
    index as f32 * WALL_ARC
}

/// Normalize an angle into `[-π, π]`.
///
/// `atan2(sin θ, cos θ)` has no discontinuity at the ±π wrap; every angular
/// comparison in the crate goes through this first.
pub fn normalize_angle(theta: f32) -> f32 {
    theta.sin().atan2(theta.cos())
}

/// Unit direction on the ground plane for an angle: `(sin θ, cos θ)`.
pub fn planar_dir(theta: f32) -> Vec2 {
    Vec2::new(theta.sin(), theta.cos())
}

/// Bearing of `point` from `origin` on the ground plane.
///
/// X first: the inverse of [`planar_dir`].
pub fn bearing(origin: Vec2, point: Vec2) -> f32 {
    let d = point - origin;
    d.x.atan2(d.y)
}

/// A renderable wall panel: where it stands and how it is turned.
///
/// Opaque to the core once created; the host instantiates a mesh here and
/// never hears about the wall again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallPlacement {
    pub position: Vec3,
    /// Yaw in radians. Equals the placement angle, so the panel faces inward.
    pub rotation_y: f32,
}

/// Placement of wall `index` for a room centered at `center`.
///
/// The panel's vertical center sits at `floor_y + wall_height / 2`.
pub fn wall_placement(
    center: Vec2,
    index: u8,
    side_length: f32,
    wall_height: f32,
    floor_y: f32,
) -> WallPlacement {
    let angle = wall_angle(index);
    let offset = planar_dir(angle) * apothem(side_length);
    WallPlacement {
        position: Vec3::new(
            center.x + offset.x,
            floor_y + wall_height / 2.0,
            center.y + offset.y,
        ),
        rotation_y: angle,
    }
}

/// Center of the room on the far side of wall `index`: offset `2R` along
/// the wall's outward normal, so the two rooms share that wall.
pub fn neighbor_center(center: Vec2, index: u8, side_length: f32) -> Vec2 {
    center + planar_dir(wall_angle(index)) * (2.0 * apothem(side_length))
}
