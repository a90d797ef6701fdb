use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::With,
    system::{Query, Res, ResMut},
};
use tracing::{debug, info, trace, warn};

use crate::{
    constants::mechanics::LOOK_AHEAD_FRAMES,
    events::{GameCommand, GameEvent},
    map::builder::Map,
    systems::{
        components::{DeltaTime, PendingIntent, Player, ScoreResource},
        movement::{containing_tile_center, difficulty_multiplier, nearest_tile_center, player_can_move_to, Position, Velocity},
        state::GameStage,
    },
};

/// Processes host commands: starts the game on the first one and buffers the requested direction.
///
/// Only the latest direction survives; intents are not queued. Commands that arrive
/// after the game ended are discarded.
pub fn player_control_system(
    mut commands: EventReader<GameCommand>,
    mut stage: ResMut<GameStage>,
    mut events: EventWriter<GameEvent>,
    mut players: Query<&mut PendingIntent, With<Player>>,
) {
    let mut intent = match players.single_mut() {
        Ok(intent) => intent,
        Err(e) => {
            warn!(error = %e, "No/multiple entities queried for player control");
            commands.clear();
            return;
        }
    };

    for command in commands.read() {
        if stage.is_over() {
            trace!(?command, "Ignoring command after game over");
            continue;
        }

        if *stage == GameStage::NotStarted {
            *stage = GameStage::Running;
            info!("Game started");
            events.write(GameEvent::Started);
        }

        if let Some(direction) = command.direction() {
            debug!(direction = direction.as_ref(), "Player intent updated");
            intent.0 = Some(direction);
        }
    }
}

/// Executes frame-by-frame movement for the player.
///
/// A pending intent is tried first with a short look-ahead; if it fits, it becomes the
/// velocity and the cross axis is centered on the current tile. The (possibly new)
/// velocity is then applied. A blocked advance stops the player on the nearest tile center.
pub fn player_movement_system(
    map: Res<Map>,
    delta_time: Res<DeltaTime>,
    score: Res<ScoreResource>,
    mut players: Query<(&Player, &PendingIntent, &mut Position, &mut Velocity)>,
) {
    let dt = delta_time.seconds;
    let multiplier = difficulty_multiplier(score.0);

    for (player, intent, mut position, mut velocity) in players.iter_mut() {
        let speed = player.base_speed * multiplier;

        if let Some(direction) = intent.0 {
            let candidate = Velocity::toward(direction, speed);
            let look_ahead = position.0 + candidate.0 * dt * LOOK_AHEAD_FRAMES;

            if player_can_move_to(&map, look_ahead, player.radius) {
                let center = containing_tile_center(position.0);
                if direction.is_horizontal() {
                    position.0.y = center.y;
                } else {
                    position.0.x = center.x;
                }
                *velocity = candidate;
            }
        }

        let next = position.0 + velocity.0 * dt;
        if player_can_move_to(&map, next, player.radius) {
            position.0 = next;
        } else {
            if *velocity != Velocity::ZERO {
                trace!(position = ?position.0, "Player blocked");
            }
            *velocity = Velocity::ZERO;
            position.0 = nearest_tile_center(position.0);
        }
    }
}
