use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::map::direction::Direction;
use crate::systems::state::GameOverReason;

/// Input delivered by the host. Read by the first system of each tick; the last one wins.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum GameCommand {
    /// Starts the game without requesting a direction (a tap, a non-arrow key).
    Start,
    MovePlayer(Direction),
    /// A raw swipe displacement, translated along its dominant axis.
    Swipe(Vec2),
}

impl GameCommand {
    /// Translates a keyboard key name. Every key starts the game; arrow keys also steer.
    pub fn from_key(key: &str) -> GameCommand {
        Direction::from_key(key).map_or(GameCommand::Start, GameCommand::MovePlayer)
    }

    /// The direction this command requests, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameCommand::Start => None,
            GameCommand::MovePlayer(direction) => Some(*direction),
            GameCommand::Swipe(delta) => Direction::from_swipe(*delta),
        }
    }
}

/// Notifications for the host, drained once per frame.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    /// The new score after a collection.
    ScoreChanged(u32),
    ProtesterSpawned(Entity),
    GameOver { score: u32, reason: GameOverReason },
}
