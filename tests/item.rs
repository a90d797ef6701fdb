use bevy_ecs::system::RunSystemOnce;
use glam::{UVec2, Vec2};
use prasman::{
    constants::Tile,
    events::GameEvent,
    map::builder::Map,
    systems::{collect_system, GameOverReason, GameStage, ScoreResource, SpawnCheckpoint},
};
use speculoos::prelude::*;

mod common;

fn run_collect(world: &mut bevy_ecs::world::World) {
    world.run_system_once(collect_system).expect("System should run successfully");
}

#[test]
fn test_collects_tile_under_player_center() {
    let mut world = common::create_test_world();
    // (col 3, row 3) holds a collectible; the center is floored into it
    common::spawn_test_player(&mut world, Vec2::new(159.0, 121.0));
    common::start(&mut world);
    let before = world.resource::<Map>().remaining_collectibles();

    run_collect(&mut world);

    let map = world.resource::<Map>();
    assert_that(&map.tile_at(3, 3)).is_equal_to(Tile::Open);
    assert_that(&map.remaining_collectibles()).is_equal_to(before - 1);
    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(100);
    assert_that(&common::drain_events(&mut world)).contains(GameEvent::ScoreChanged(100));
}

#[test]
fn test_collection_counts_once() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Map::tile_center(UVec2::new(1, 1)));
    common::start(&mut world);

    run_collect(&mut world);
    run_collect(&mut world);

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(100);
}

#[test]
fn test_no_collection_before_start() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Map::tile_center(UVec2::new(1, 1)));

    run_collect(&mut world);

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(0);
    assert_that(&world.resource::<Map>().tile_at(1, 1)).is_equal_to(Tile::Collectible);
}

#[test]
fn test_open_tile_yields_nothing() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Map::tile_center(common::TEST_PLAYER_TILE));
    common::start(&mut world);

    run_collect(&mut world);

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(0);
    assert_that(&common::drain_events(&mut world)).is_empty();
}

#[test]
fn test_last_collectible_ends_game() {
    let mut world = common::create_world_with_board(&common::SINGLE_COLLECTIBLE_BOARD);
    common::spawn_test_player(&mut world, Map::tile_center(UVec2::new(1, 1)));
    common::start(&mut world);

    run_collect(&mut world);

    assert_that(&world.resource::<Map>().remaining_collectibles()).is_equal_to(0);
    assert_that(world.resource::<GameStage>()).is_equal_to(GameStage::Over);
    assert_that(&common::drain_events(&mut world)).contains(GameEvent::GameOver {
        score: 100,
        reason: GameOverReason::Cleared,
    });
}

#[test]
fn test_crossing_spawn_threshold_adds_protester() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Map::tile_center(UVec2::new(1, 1)));
    world.insert_resource(ScoreResource(1900));
    common::start(&mut world);

    run_collect(&mut world);

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(2000);
    assert_that(world.resource::<SpawnCheckpoint>()).is_equal_to(SpawnCheckpoint(2000));
    assert_that(&common::protester_count(&mut world)).is_equal_to(1);

    let spawned = common::drain_events(&mut world)
        .into_iter()
        .filter(|event| matches!(event, GameEvent::ProtesterSpawned(_)))
        .count();
    assert_that(&spawned).is_equal_to(1);
}

#[test]
fn test_below_threshold_spawns_nothing() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Map::tile_center(UVec2::new(1, 1)));
    world.insert_resource(ScoreResource(1800));
    common::start(&mut world);

    run_collect(&mut world);

    assert_that(world.resource::<SpawnCheckpoint>()).is_equal_to(SpawnCheckpoint(0));
    assert_that(&common::protester_count(&mut world)).is_equal_to(0);
}

#[test]
fn test_multiple_thresholds_in_one_collection_spawn_once() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Map::tile_center(UVec2::new(1, 1)));
    world.insert_resource(ScoreResource(3900));
    world.insert_resource(SpawnCheckpoint(1500));
    common::start(&mut world);

    run_collect(&mut world);

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(4000);
    assert_that(world.resource::<SpawnCheckpoint>()).is_equal_to(SpawnCheckpoint(4000));
    assert_that(&common::protester_count(&mut world)).is_equal_to(1);

    let spawned = common::drain_events(&mut world)
        .into_iter()
        .filter(|event| matches!(event, GameEvent::ProtesterSpawned(_)))
        .count();
    assert_that(&spawned).is_equal_to(1);
}
