//! The read-only view handed to presentation.
//!
//! Nothing here mutates the game. A presenter receives an owned [`RenderFrame`] per
//! frame, the score text on every collection, and the share links once the game ends.

use glam::{UVec2, Vec2};

use crate::constants::Tile;
use crate::share::ShareLinks;
use crate::systems::components::{Category, Cosmetics};
use crate::systems::state::{GameOverReason, GameStage};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    /// Center of the player.
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtesterView {
    /// Top-left corner of the protester's tile-sized box.
    pub position: Vec2,
    pub velocity: Vec2,
    pub category: Category,
    pub cosmetics: Cosmetics,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Row-major tiles.
    pub tiles: Vec<Tile>,
    /// Board size in tiles (columns, rows).
    pub size: UVec2,
    pub player: Option<PlayerView>,
    pub protesters: Vec<ProtesterView>,
    pub score: u32,
    pub stage: GameStage,
    /// The host timestamp of the frame, in milliseconds.
    pub timestamp_ms: f64,
}

impl RenderFrame {
    pub fn tile(&self, row: u32, col: u32) -> Option<Tile> {
        if row >= self.size.y || col >= self.size.x {
            return None;
        }
        self.tiles.get((row * self.size.x + col) as usize).copied()
    }
}

/// The text shown in the score display.
pub fn score_text(score: u32) -> String {
    format!("{score} €")
}

/// A sink for everything the game shows.
pub trait Presenter {
    fn present(&mut self, frame: &RenderFrame);

    /// Receives [`score_text`] after every collection.
    fn show_score(&mut self, text: &str);

    fn show_game_over(&mut self, score: u32, reason: GameOverReason, links: &ShareLinks);
}
