use bevy_ecs::{
    event::EventWriter,
    query::Without,
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    constants::{
        mechanics::{CONTACT_MARGIN, TURN_PROBABILITY},
        HALF_TILE, TILE_SIZE,
    },
    events::GameEvent,
    map::{builder::Map, direction::Direction},
    systems::{
        components::{DeltaTime, GameplayRng, Player, Protester, ScoreResource},
        movement::{difficulty_multiplier, is_at_intersection, nearest_tile_origin, protester_blocked, Position, Velocity},
        state::{end_game, GameOverReason, GameStage},
    },
};

/// Directions a protester at `origin` may turn into: the neighbouring tile is not a wall,
/// and the direction is not an exact reversal of `current`.
pub fn turn_options(map: &Map, origin: Vec2, current: Option<Direction>) -> SmallVec<[Direction; 4]> {
    Direction::DIRECTIONS
        .into_iter()
        .filter(|&direction| Some(direction.opposite()) != current)
        .filter(|&direction| !map.is_wall_at(origin + direction.as_vec2() * TILE_SIZE))
        .collect()
}

/// Whether a protester at `origin` is touching a player centered at `player_center`.
pub fn is_touching(origin: Vec2, player_center: Vec2, player_radius: f32) -> bool {
    (origin + Vec2::splat(HALF_TILE)).distance(player_center) < player_radius + CONTACT_MARGIN
}

/// Moves every protester, then checks it against the player.
///
/// Speeds are re-derived from the score each tick, keeping the sign of travel. At an
/// intersection a protester may turn into an eligible direction. If its straight move is
/// blocked it is snapped to the grid and sent in a uniformly random direction, which may
/// itself be blocked; the next tick retries.
pub fn protester_movement_system(
    map: Res<Map>,
    delta_time: Res<DeltaTime>,
    score: Res<ScoreResource>,
    mut stage: ResMut<GameStage>,
    mut rng: ResMut<GameplayRng>,
    mut events: EventWriter<GameEvent>,
    players: Query<(&Player, &Position), Without<Protester>>,
    mut protesters: Query<(&Protester, &mut Position, &mut Velocity), Without<Player>>,
) {
    if !stage.is_running() {
        return;
    }

    let Ok((player, player_position)) = players.single() else {
        return;
    };

    let dt = delta_time.seconds;
    let multiplier = difficulty_multiplier(score.0);

    for (protester, mut position, mut velocity) in protesters.iter_mut() {
        let speed = protester.base_speed * multiplier;
        let rescale = |component: f32| match component {
            c if c > 0.0 => speed,
            c if c < 0.0 => -speed,
            _ => 0.0,
        };
        velocity.0 = Vec2::new(rescale(velocity.0.x), rescale(velocity.0.y));

        if is_at_intersection(position.0) {
            let options = turn_options(&map, position.0, velocity.direction());
            if !options.is_empty() && rng.0.random_bool(TURN_PROBABILITY) {
                if let Some(&direction) = options.choose(&mut rng.0) {
                    position.0 = nearest_tile_origin(position.0);
                    *velocity = Velocity::toward(direction, speed);
                    trace!(direction = direction.as_ref(), options = options.len(), "Protester turned");
                }
            }
        }

        let next = position.0 + velocity.0 * dt;
        if !protester_blocked(&map, next) {
            position.0 = next;
        } else {
            let forced = Direction::DIRECTIONS[rng.0.random_range(0..Direction::DIRECTIONS.len())];
            position.0 = nearest_tile_origin(position.0);
            *velocity = Velocity::toward(forced, speed);
            trace!(direction = forced.as_ref(), "Protester redirected");
        }

        if is_touching(position.0, player_position.0, player.radius) {
            debug!(protester = ?position.0, player = ?player_position.0, "Protester reached the player");
            end_game(&mut stage, score.0, GameOverReason::Caught, &mut events);
        }
    }
}
