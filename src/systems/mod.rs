//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod components;
pub mod item;
pub mod movement;
pub mod player;
pub mod progression;
pub mod protester;
pub mod state;

pub use self::components::*;
pub use self::item::collect_system;
pub use self::movement::{Position, Velocity};
pub use self::player::{player_control_system, player_movement_system};
pub use self::progression::{spawn_protester_observer, SpawnCheckpoint, SpawnProtesterTrigger};
pub use self::protester::protester_movement_system;
pub use self::state::{GameOverReason, GameStage};
