//! Map construction and tile queries.

use bevy_ecs::resource::Resource;
use glam::{IVec2, UVec2, Vec2};
use tracing::{debug, trace};

use crate::constants::{Tile, HALF_TILE, TILE_SIZE};
use crate::error::GameResult;
use crate::map::parser::MapTileParser;

/// The game board: a fixed-size, row-major grid of tiles.
///
/// Dimensions never change after construction. The only mutation is
/// [`Map::consume`], which turns a collectible into open floor.
#[derive(Resource, Debug, Clone)]
pub struct Map {
    tiles: Vec<Tile>,
    /// Board size in tiles (columns, rows).
    size: UVec2,
    /// The player's starting tile (column, row).
    pub player_start: UVec2,
    /// Every non-wall tile (column, row), in row-major order.
    open_tiles: Vec<UVec2>,
    remaining_collectibles: u32,
}

impl Map {
    /// Creates a new `Map` from a raw board layout.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MapParse` if the layout is malformed.
    pub fn new(raw_board: &[&str]) -> GameResult<Map> {
        let parsed = MapTileParser::parse_board(raw_board)?;

        let remaining_collectibles = parsed.tiles.iter().filter(|tile| **tile == Tile::Collectible).count() as u32;
        let open_tiles = parsed
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile != Tile::Wall)
            .map(|(index, _)| UVec2::new(index as u32 % parsed.size.x, index as u32 / parsed.size.x))
            .collect::<Vec<_>>();

        debug!(
            columns = parsed.size.x,
            rows = parsed.size.y,
            collectibles = remaining_collectibles,
            open_tiles = open_tiles.len(),
            "Map built"
        );

        Ok(Map {
            tiles: parsed.tiles,
            size: parsed.size,
            player_start: parsed.player_start,
            open_tiles,
            remaining_collectibles,
        })
    }

    /// Board size in tiles (columns, rows).
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// All tiles, row-major.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.size.y as i32 || col >= self.size.x as i32 {
            return None;
        }
        Some(row as usize * self.size.x as usize + col as usize)
    }

    /// Returns the tile at the given grid coordinates.
    ///
    /// Anything outside the board is a wall.
    pub fn tile_at(&self, row: i32, col: i32) -> Tile {
        self.index(row, col).map(|i| self.tiles[i]).unwrap_or(Tile::Wall)
    }

    /// Converts a world position into grid coordinates (column, row), flooring both axes.
    pub fn tile_of(position: Vec2) -> IVec2 {
        (position / TILE_SIZE).floor().as_ivec2()
    }

    /// The world position of a tile's center.
    pub fn tile_center(tile: UVec2) -> Vec2 {
        tile.as_vec2() * TILE_SIZE + Vec2::splat(HALF_TILE)
    }

    /// The world position of a tile's top-left corner.
    pub fn tile_origin(tile: UVec2) -> Vec2 {
        tile.as_vec2() * TILE_SIZE
    }

    /// Whether the tile containing this world position is a wall (or off the board).
    pub fn is_wall_at(&self, position: Vec2) -> bool {
        let tile = Self::tile_of(position);
        self.tile_at(tile.y, tile.x) == Tile::Wall
    }

    /// Picks up the collectible at the given grid coordinates, if any.
    ///
    /// Returns `true` only when a collectible was actually removed; every other
    /// tile (and any off-board coordinate) is left untouched.
    pub fn consume(&mut self, row: i32, col: i32) -> bool {
        let Some(index) = self.index(row, col) else {
            return false;
        };
        if self.tiles[index] != Tile::Collectible {
            return false;
        }

        self.tiles[index] = Tile::Open;
        self.remaining_collectibles -= 1;
        trace!(row, col, remaining = self.remaining_collectibles, "Collectible consumed");
        true
    }

    /// The number of collectibles still on the board.
    pub fn remaining_collectibles(&self) -> u32 {
        self.remaining_collectibles
    }

    /// Every non-wall tile (column, row).
    pub fn open_tiles(&self) -> &[UVec2] {
        &self.open_tiles
    }
}
