#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, world::World};
use glam::{UVec2, Vec2};
use prasman::{
    constants::mechanics::{PLAYER_RADIUS, PLAYER_SPEED, PROTESTER_SPEED},
    events::{GameCommand, GameEvent},
    map::{builder::Map, direction::Direction},
    systems::{
        spawn_protester_observer, Category, CosmeticRng, Cosmetics, DeltaTime, GameStage, GameplayRng, PendingIntent, Player,
        PlayerBundle, Position, Protester, ProtesterBundle, ScoreResource, SpawnCheckpoint, Velocity,
    },
};

/// A small board: an open top corridor, a row of pillars, and the player's corridor.
///
/// ```text
///   col 0 1 2 3 4 5 6 7 8
/// row 0 # # # # # # # # #
/// row 1 # . . . . . . . #
/// row 2 # . # . # . # . #
/// row 3 # . . . P . . . #
/// row 4 # # # # # # # # #
/// ```
pub const TEST_BOARD: [&str; 5] = ["#########", "#.......#", "#.#.#.#.#", "#...P...#", "#########"];

/// The player's start tile on [`TEST_BOARD`].
pub const TEST_PLAYER_TILE: UVec2 = UVec2::new(4, 3);

/// A corridor with a single collectible at (col 1, row 1), left of the player.
pub const SINGLE_COLLECTIBLE_BOARD: [&str; 3] = ["#####", "#. P#", "#####"];

pub fn create_test_world() -> World {
    create_world_with_board(&TEST_BOARD)
}

pub fn create_world_with_board(board: &[&str]) -> World {
    let mut world = World::new();

    world.init_resource::<Events<GameCommand>>();
    world.init_resource::<Events<GameEvent>>();
    world.add_observer(spawn_protester_observer);

    world.insert_resource(Map::new(board).expect("test board should parse"));
    world.insert_resource(GameStage::NotStarted);
    world.insert_resource(ScoreResource(0));
    world.insert_resource(SpawnCheckpoint::default());
    world.insert_resource(DeltaTime { seconds: 1.0 / 60.0 });
    world.insert_resource(GameplayRng::seeded(7));
    world.insert_resource(CosmeticRng::seeded(7));

    world
}

pub fn spawn_test_player(world: &mut World, position: Vec2) -> Entity {
    world
        .spawn(PlayerBundle {
            player: Player {
                radius: PLAYER_RADIUS,
                base_speed: PLAYER_SPEED,
            },
            position: Position(position),
            velocity: Velocity::ZERO,
            intent: PendingIntent::default(),
        })
        .id()
}

pub fn spawn_test_protester(world: &mut World, origin: Vec2, direction: Direction) -> Entity {
    world
        .spawn(ProtesterBundle {
            protester: Protester {
                base_speed: PROTESTER_SPEED,
            },
            position: Position(origin),
            velocity: Velocity::toward(direction, PROTESTER_SPEED),
            category: Category::Poster,
            cosmetics: Cosmetics {
                seed: 0.5,
                color: 0,
                poster_text: 0,
            },
        })
        .id()
}

pub fn start(world: &mut World) {
    world.insert_resource(GameStage::Running);
}

pub fn send_command(world: &mut World, command: GameCommand) {
    world.send_event(command);
}

pub fn set_delta(world: &mut World, seconds: f32) {
    world.insert_resource(DeltaTime { seconds });
}

pub fn drain_events(world: &mut World) -> Vec<GameEvent> {
    world.resource_mut::<Events<GameEvent>>().drain().collect()
}

pub fn protester_count(world: &mut World) -> usize {
    world.query::<&Protester>().iter(world).count()
}
