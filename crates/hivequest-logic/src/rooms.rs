//! Hex rooms and the append-only room arena.
//!
//! The arena starts with the root room at the origin and only ever grows.
//! Rooms are never deleted or reordered, so a [`RoomId`] stays valid for the
//! whole session and a room's walls never move once created.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::{self, WallPlacement, WALLS_PER_ROOM};

/// Stable handle to a room in the arena.
pub type RoomId = u32;

/// A hexagonal room, identified by its center on the ground plane.
///
/// Wall placements are derived from the center on demand; the room itself
/// carries no wall state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexRoom {
    pub id: RoomId,
    /// Center on the ground plane (`.y` is world Z).
    pub center: Vec2,
}

/// Append-only collection of rooms sharing one set of dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomArena {
    side_length: f32,
    wall_height: f32,
    floor_y: f32,
    rooms: Vec<HexRoom>,
}

impl RoomArena {
    /// New arena holding only the root room, centered at the origin.
    pub fn new(side_length: f32, wall_height: f32, floor_y: f32) -> Self {
        Self {
            side_length,
            wall_height,
            floor_y,
            rooms: vec![HexRoom { id: 0, center: Vec2::ZERO }],
        }
    }

    /// Center-to-wall distance shared by every room.
    pub fn apothem(&self) -> f32 {
        geometry::apothem(self.side_length)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false: the root room exists from construction on.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> &[HexRoom] {
        &self.rooms
    }

    pub fn get(&self, id: RoomId) -> Option<&HexRoom> {
        self.rooms.get(id as usize)
    }

    pub fn root(&self) -> &HexRoom {
        &self.rooms[0]
    }

    /// Append a new room grown off `parent`'s wall `wall`, sharing that
    /// wall: the new center is two apothems out along the wall's normal.
    /// Returns the new room's id.
    pub fn grow(&mut self, parent: RoomId, wall: u8) -> RoomId {
        let parent_center = self.rooms[parent as usize].center;
        let center = geometry::neighbor_center(parent_center, wall, self.side_length);
        let id = self.rooms.len() as RoomId;
        self.rooms.push(HexRoom { id, center });
        id
    }

    /// The six wall placements of room `id`.
    pub fn walls(&self, id: RoomId) -> [WallPlacement; WALLS_PER_ROOM] {
        let center = self.rooms[id as usize].center;
        std::array::from_fn(|i| {
            geometry::wall_placement(
                center,
                i as u8,
                self.side_length,
                self.wall_height,
                self.floor_y,
            )
        })
    }

    /// Room whose center is closest to `pos`, with that distance.
    pub fn nearest(&self, pos: Vec2) -> (&HexRoom, f32) {
        let mut best = &self.rooms[0];
        let mut best_dist = pos.distance(best.center);
        for room in &self.rooms[1..] {
            let dist = pos.distance(room.center);
            if dist < best_dist {
                best = room;
                best_dist = dist;
            }
        }
        (best, best_dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> RoomArena {
        RoomArena::new(10.0, 20.0, -1.0)
    }

    #[test]
    fn starts_with_root_at_origin() {
        let arena = arena();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.root().id, 0);
        assert_eq!(arena.root().center, Vec2::ZERO);
        assert!(!arena.is_empty());
    }

    #[test]
    fn grow_assigns_sequential_ids() {
        let mut arena = arena();
        let a = arena.grow(0, 0);
        let b = arena.grow(a, 2);
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn grown_room_is_two_apothems_from_parent() {
        let mut arena = arena();
        let id = arena.grow(0, 0);
        let child = arena.get(id).unwrap();
        assert!((child.center.distance(Vec2::ZERO) - 2.0 * arena.apothem()).abs() < 1e-4);
        // Wall 0 points down +Z.
        assert!((child.center.x).abs() < 1e-5);
        assert!((child.center.y - 17.320509).abs() < 1e-4);
    }

    #[test]
    fn existing_rooms_never_move_as_the_arena_grows() {
        let mut arena = arena();
        let root_center = arena.root().center;
        let child = arena.grow(0, 0);
        let child_center = arena.get(child).unwrap().center;
        arena.grow(child, 2);
        arena.grow(child, 4);
        assert_eq!(arena.root().center, root_center);
        assert_eq!(arena.get(child).unwrap().center, child_center);
    }

    #[test]
    fn walls_form_the_room_hexagon() {
        let mut arena = arena();
        let id = arena.grow(0, 3);
        let center = arena.get(id).unwrap().center;
        let walls = arena.walls(id);
        assert_eq!(walls.len(), 6);
        for (i, wall) in walls.iter().enumerate() {
            let planar = Vec2::new(wall.position.x, wall.position.z);
            assert!((planar.distance(center) - arena.apothem()).abs() < 1e-4);
            assert!((wall.rotation_y - geometry::wall_angle(i as u8)).abs() < 1e-5);
        }
    }

    #[test]
    fn nearest_picks_the_closest_center() {
        let mut arena = arena();
        arena.grow(0, 0); // (0, 17.32)
        let (room, dist) = arena.nearest(Vec2::new(0.0, 12.0));
        assert_eq!(room.id, 1);
        assert!((dist - 5.320509).abs() < 1e-4);

        let (room, dist) = arena.nearest(Vec2::new(0.0, 2.0));
        assert_eq!(room.id, 0);
        assert!((dist - 2.0).abs() < 1e-5);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let arena = arena();
        assert!(arena.get(5).is_none());
    }
}
