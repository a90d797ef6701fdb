//! Score-driven growth of the protester crowd.

use bevy_ecs::{
    event::{Event, EventWriter},
    observer::Trigger,
    resource::Resource,
    system::{Commands, Res, ResMut},
};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::{
    constants::{mechanics::PROTESTER_SPEED, progression::SPAWN_SCORE_INTERVAL},
    events::GameEvent,
    map::{builder::Map, direction::Direction},
    systems::{
        components::{Category, CosmeticRng, Cosmetics, GameplayRng, Protester, ProtesterBundle, ScoreResource},
        movement::{difficulty_multiplier, Position, Velocity},
    },
};

/// The score at which the last protester was added.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnCheckpoint(pub u32);

impl SpawnCheckpoint {
    /// Moves the checkpoint to `score` if at least [`SPAWN_SCORE_INTERVAL`] points were
    /// gained since the last one. Returns whether it moved.
    ///
    /// Crossing several intervals at once still counts once.
    pub fn advance(&mut self, score: u32) -> bool {
        if score.saturating_sub(self.0) < SPAWN_SCORE_INTERVAL {
            return false;
        }
        self.0 = score;
        true
    }
}

/// Trigger to add one protester at a random open tile.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnProtesterTrigger;

/// Places a protester on a uniformly random open tile, heading left or right.
pub fn spawn_protester_observer(
    _: Trigger<SpawnProtesterTrigger>,
    mut commands: Commands,
    map: Res<Map>,
    score: Res<ScoreResource>,
    mut rng: ResMut<GameplayRng>,
    mut cosmetic_rng: ResMut<CosmeticRng>,
    mut events: EventWriter<GameEvent>,
) {
    let Some(&tile) = map.open_tiles().choose(&mut rng.0) else {
        warn!("No open tiles to spawn a protester on");
        return;
    };

    let direction = if rng.0.random_bool(0.5) { Direction::Right } else { Direction::Left };
    let category = if rng.0.random_bool(0.5) { Category::Poster } else { Category::Hands };
    let speed = PROTESTER_SPEED * difficulty_multiplier(score.0);

    let entity = commands
        .spawn(ProtesterBundle {
            protester: Protester {
                base_speed: PROTESTER_SPEED,
            },
            position: Position(Map::tile_origin(tile)),
            velocity: Velocity::toward(direction, speed),
            category,
            cosmetics: Cosmetics::roll(&mut cosmetic_rng.0, None),
        })
        .id();

    debug!(?entity, col = tile.x, row = tile.y, direction = direction.as_ref(), category = category.as_ref(), "Protester spawned");
    events.write(GameEvent::ProtesterSpawned(entity));
}
