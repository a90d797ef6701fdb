use bevy_ecs::{event::EventWriter, resource::Resource};
use strum_macros::AsRefStr;
use tracing::info;

use crate::events::GameEvent;

/// A resource to track the overall stage of the game from a high-level perspective.
#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy, AsRefStr)]
pub enum GameStage {
    /// Waiting for the first input. The board is drawn but protesters stand still.
    #[default]
    NotStarted,
    /// The main gameplay loop is active.
    Running,
    /// The game has ended. Terminal until the host resets.
    Over,
}

impl GameStage {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStage::Running)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStage::Over)
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum GameOverReason {
    /// Every collectible was taken.
    Cleared,
    /// A protester reached the player.
    Caught,
}

/// Moves the game into [`GameStage::Over`] and announces it.
///
/// Idempotent: returns `false` and does nothing if the game already ended.
pub fn end_game(stage: &mut GameStage, score: u32, reason: GameOverReason, events: &mut EventWriter<GameEvent>) -> bool {
    if stage.is_over() {
        return false;
    }

    *stage = GameStage::Over;
    info!(score, reason = reason.as_ref(), "Game over");
    events.write(GameEvent::GameOver { score, reason });
    true
}
