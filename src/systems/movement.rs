//! Grid-locked movement rules shared by the player and protesters.
//!
//! Entities move continuously, but every validity check samples the corners of a
//! footprint against the tile grid. Tile occupancy always floors.

use bevy_ecs::component::Component;
use glam::Vec2;

use crate::constants::mechanics::{INTERSECTION_TOLERANCE, PLAYER_INSET};
use crate::constants::progression::{DIFFICULTY_RAMP, DIFFICULTY_SCORE_STEP};
use crate::constants::{HALF_TILE, TILE_SIZE};
use crate::map::builder::Map;
use crate::map::direction::Direction;

/// A world-space position. The player's is its center; a protester's is its top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// A world-space velocity. At most one axis is ever nonzero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub const ZERO: Velocity = Velocity(Vec2::ZERO);

    /// A velocity of `speed` along `direction`.
    pub fn toward(direction: Direction, speed: f32) -> Self {
        Self(direction.as_vec2() * speed)
    }

    /// The direction of travel, or `None` when stopped.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_velocity(self.0)
    }

    /// Whether at most one axis is nonzero.
    pub fn is_axis_aligned(&self) -> bool {
        self.0.x == 0.0 || self.0.y == 0.0
    }
}

/// Speed scale for a given score: `1 + (score / 1000) * 0.05`.
pub fn difficulty_multiplier(score: u32) -> f32 {
    1.0 + (score as f32 / DIFFICULTY_SCORE_STEP) * DIFFICULTY_RAMP
}

/// Whether the player, centered at `center`, fits without any corner of its inset box touching a wall.
pub fn player_can_move_to(map: &Map, center: Vec2, radius: f32) -> bool {
    let reach = radius - PLAYER_INSET;
    let corners = [
        Vec2::new(center.x - reach, center.y - reach),
        Vec2::new(center.x + reach, center.y - reach),
        Vec2::new(center.x - reach, center.y + reach),
        Vec2::new(center.x + reach, center.y + reach),
    ];
    corners.into_iter().all(|corner| !map.is_wall_at(corner))
}

/// Whether a protester whose top-left corner is at `origin` would overlap a wall.
pub fn protester_blocked(map: &Map, origin: Vec2) -> bool {
    let max = TILE_SIZE - 1.0;
    let corners = [
        origin,
        Vec2::new(origin.x + max, origin.y),
        Vec2::new(origin.x, origin.y + max),
        Vec2::new(origin.x + max, origin.y + max),
    ];
    corners.into_iter().any(|corner| map.is_wall_at(corner))
}

/// The center of the tile nearest to `position` (rounding).
pub fn nearest_tile_center(position: Vec2) -> Vec2 {
    ((position - HALF_TILE) / TILE_SIZE).round() * TILE_SIZE + HALF_TILE
}

/// The center of the tile containing `position` (flooring).
pub fn containing_tile_center(position: Vec2) -> Vec2 {
    (position / TILE_SIZE).floor() * TILE_SIZE + HALF_TILE
}

/// The nearest tile corner to `position` (rounding).
pub fn nearest_tile_origin(position: Vec2) -> Vec2 {
    (position / TILE_SIZE).round() * TILE_SIZE
}

fn near_boundary(value: f32) -> bool {
    let offset = value % TILE_SIZE;
    offset.abs() < INTERSECTION_TOLERANCE || (offset - TILE_SIZE).abs() < INTERSECTION_TOLERANCE
}

/// Whether a protester's top-left corner sits within [`INTERSECTION_TOLERANCE`] of a tile corner on both axes.
pub fn is_at_intersection(origin: Vec2) -> bool {
    near_boundary(origin.x) && near_boundary(origin.y)
}
