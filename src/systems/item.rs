use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Commands, Query, ResMut},
};
use tracing::{debug, trace};

use crate::{
    constants::progression::COLLECTIBLE_REWARD,
    events::GameEvent,
    map::builder::Map,
    systems::{
        components::{Player, ScoreResource},
        movement::Position,
        progression::{SpawnCheckpoint, SpawnProtesterTrigger},
        state::{end_game, GameOverReason, GameStage},
    },
};

/// Picks up the collectible under the player's center, if any.
///
/// Awards the reward, may trigger a protester spawn, and ends the game once the board
/// is empty. Does nothing unless the game is running.
pub fn collect_system(
    mut commands: Commands,
    mut map: ResMut<Map>,
    mut score: ResMut<ScoreResource>,
    mut checkpoint: ResMut<SpawnCheckpoint>,
    mut stage: ResMut<GameStage>,
    mut events: EventWriter<GameEvent>,
    players: Query<&Position, With<Player>>,
) {
    if !stage.is_running() {
        return;
    }

    let Ok(position) = players.single() else {
        return;
    };

    let tile = Map::tile_of(position.0);
    if !map.consume(tile.y, tile.x) {
        return;
    }

    score.0 += COLLECTIBLE_REWARD;
    trace!(row = tile.y, col = tile.x, score = score.0, "Collectible picked up");
    events.write(GameEvent::ScoreChanged(score.0));

    if checkpoint.advance(score.0) {
        debug!(score = score.0, "Spawn threshold crossed");
        commands.trigger(SpawnProtesterTrigger);
    }

    if map.remaining_collectibles() == 0 {
        end_game(&mut stage, score.0, GameOverReason::Cleared, &mut events);
    }
}
