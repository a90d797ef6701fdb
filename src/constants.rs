//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

use crate::map::direction::Direction;
use crate::systems::components::Category;

/// The size of each tile, in world units.
pub const TILE_SIZE: f32 = 40.0;
/// Half a tile; the offset from a tile's corner to its center.
pub const HALF_TILE: f32 = TILE_SIZE / 2.0;
/// The size of the game board, in tiles (columns, rows).
pub const BOARD_TILE_SIZE: UVec2 = UVec2::new(19, 13);
/// The size of the game board, in world units.
pub const BOARD_WORLD_SIZE: UVec2 = UVec2::new(BOARD_TILE_SIZE.x * TILE_SIZE as u32, BOARD_TILE_SIZE.y * TILE_SIZE as u32);

/// The default frame pacing for the headless host.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Movement and collision tuning.
pub mod mechanics {
    /// Player base speed, in world units per second.
    pub const PLAYER_SPEED: f32 = 140.0;
    /// Protester base speed, in world units per second.
    pub const PROTESTER_SPEED: f32 = 120.0;
    /// Half-width of the player's hitbox.
    pub const PLAYER_RADIUS: f32 = 12.0;
    /// How far the player's corner samples are pulled in from the hitbox edge.
    pub const PLAYER_INSET: f32 = 2.0;
    /// Added to the player radius to get the protester contact distance.
    pub const CONTACT_MARGIN: f32 = 13.0;
    /// How close (per axis) a protester must be to a tile boundary to count as at an intersection.
    pub const INTERSECTION_TOLERANCE: f32 = 4.0;
    /// Chance per qualifying tick that a protester at an intersection turns.
    pub const TURN_PROBABILITY: f64 = 0.3;
    /// The player's turn look-ahead, in multiples of the frame delta.
    pub const LOOK_AHEAD_FRAMES: f32 = 2.0;
    /// Upper bound on a single frame's delta, in seconds.
    pub const MAX_FRAME_DELTA: f32 = 0.1;
}

/// Scoring and difficulty progression.
pub mod progression {
    /// Score awarded per collectible.
    pub const COLLECTIBLE_REWARD: u32 = 100;
    /// Speed increase per [`DIFFICULTY_SCORE_STEP`] points, as a fraction of base speed.
    pub const DIFFICULTY_RAMP: f32 = 0.05;
    /// The score span over which [`DIFFICULTY_RAMP`] is applied once.
    pub const DIFFICULTY_SCORE_STEP: f32 = 1000.0;
    /// Score gained since the last spawn checkpoint that triggers a new protester.
    pub const SPAWN_SCORE_INTERVAL: u32 = 2000;
}

/// Host-facing timings and input thresholds.
pub mod host {
    use std::time::Duration;

    /// Delay between game over and the host resetting the game.
    pub const RESTART_DELAY: Duration = Duration::from_secs(3);
    /// Minimum swipe length along the dominant axis to register a direction.
    pub const SWIPE_DEAD_ZONE: f32 = 20.0;
}

/// Purely visual protester attributes. None of these feed into gameplay.
pub mod cosmetics {
    pub const COLORS: [&str; 6] = ["#3498db", "#e74c3c", "#2ecc71", "#f1c40f", "#9b59b6", "#e67e22"];
    pub const POSTER_TEXTS: [&str; 4] = ["ДОЛУ!", "КОГАТО ПА", "ОСТАВКА", "ПЪТЕКИТЕ"];
    pub const PROTEST_PHRASES: [&str; 6] = [
        "ОСТАВКА!",
        "КОГАТО ПА...",
        "МАФИЯ!",
        "САРАФОВ, ПЪТЕКИТЕ!",
        "ДОЛУ КОРУПЦИЯТА!",
        "ОСТАВКА И ЗАТВОР",
    ];
}

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Impassable for every entity.
    Wall,
    /// Walkable, nothing to pick up.
    Open,
    /// Walkable, worth [`progression::COLLECTIBLE_REWARD`] the first time the player occupies it.
    Collectible,
}

/// The raw layout of the game board, as a 2D array of characters.
///
/// `#` is a wall, `.` a collectible, a space is open floor and `P` the player's start (open floor).
pub const RAW_BOARD: [&str; BOARD_TILE_SIZE.y as usize] = [
    "###################",
    "#........#........#",
    "#.##.###.#.###.##.#",
    "#.................#",
    "#.##.#.#####.#.##.#",
    "#....#...#...#....#",
    "####.### # ###.####",
    "#....#   P   #....#",
    "####.# ## ## #.####",
    "#..... #   # .....#",
    "####.# ##### #.####",
    "#.................#",
    "###################",
];

/// Where a protester enters the board at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtesterStart {
    /// Tile coordinates (column, row) of the protester's top-left corner.
    pub tile: UVec2,
    pub direction: Direction,
    pub category: Category,
    /// Index into [`cosmetics::COLORS`].
    pub color: usize,
}

/// The protesters present when the game starts.
pub const PROTESTER_STARTS: [ProtesterStart; 3] = [
    ProtesterStart {
        tile: UVec2::new(1, 1),
        direction: Direction::Right,
        category: Category::Poster,
        color: 0,
    },
    ProtesterStart {
        tile: UVec2::new(BOARD_TILE_SIZE.x - 2, 1),
        direction: Direction::Left,
        category: Category::Hands,
        color: 1,
    },
    ProtesterStart {
        tile: UVec2::new(1, BOARD_TILE_SIZE.y - 2),
        direction: Direction::Right,
        category: Category::Poster,
        color: 2,
    },
];
