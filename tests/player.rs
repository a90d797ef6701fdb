use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use prasman::{
    events::{GameCommand, GameEvent},
    map::{builder::Map, direction::Direction},
    systems::{
        player_control_system, player_movement_system, GameStage, PendingIntent, Position, ScoreResource, Velocity,
    },
};
use speculoos::prelude::*;

mod common;

fn run_control(world: &mut bevy_ecs::world::World) {
    world
        .run_system_once(player_control_system)
        .expect("System should run successfully");
}

fn run_movement(world: &mut bevy_ecs::world::World) {
    world
        .run_system_once(player_movement_system)
        .expect("System should run successfully");
}

#[test]
fn test_first_command_starts_game_and_sets_intent() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Map::tile_center(common::TEST_PLAYER_TILE));

    common::send_command(&mut world, GameCommand::MovePlayer(Direction::Left));
    run_control(&mut world);

    assert_that(world.resource::<GameStage>()).is_equal_to(GameStage::Running);
    assert_that(world.get::<PendingIntent>(player).unwrap()).is_equal_to(PendingIntent(Some(Direction::Left)));
    assert_that(&common::drain_events(&mut world)).contains(GameEvent::Started);
}

#[test]
fn test_bare_start_sets_no_intent() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Map::tile_center(common::TEST_PLAYER_TILE));

    common::send_command(&mut world, GameCommand::Start);
    common::send_command(&mut world, GameCommand::Swipe(Vec2::new(5.0, -3.0)));
    run_control(&mut world);

    assert_that(world.resource::<GameStage>()).is_equal_to(GameStage::Running);
    assert_that(world.get::<PendingIntent>(player).unwrap()).is_equal_to(PendingIntent(None));
}

#[test]
fn test_latest_intent_wins() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Map::tile_center(common::TEST_PLAYER_TILE));

    common::send_command(&mut world, GameCommand::MovePlayer(Direction::Left));
    common::send_command(&mut world, GameCommand::Swipe(Vec2::new(3.0, 45.0)));
    run_control(&mut world);

    assert_that(world.get::<PendingIntent>(player).unwrap()).is_equal_to(PendingIntent(Some(Direction::Down)));
}

#[test]
fn test_commands_ignored_after_game_over() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Map::tile_center(common::TEST_PLAYER_TILE));
    world.insert_resource(GameStage::Over);

    common::send_command(&mut world, GameCommand::MovePlayer(Direction::Right));
    run_control(&mut world);

    assert_that(world.resource::<GameStage>()).is_equal_to(GameStage::Over);
    assert_that(world.get::<PendingIntent>(player).unwrap()).is_equal_to(PendingIntent(None));
}

#[test]
fn test_player_moves_along_open_corridor() {
    let mut world = common::create_test_world();
    let start = Map::tile_center(common::TEST_PLAYER_TILE);
    let player = common::spawn_test_player(&mut world, start);
    world.get_mut::<PendingIntent>(player).unwrap().0 = Some(Direction::Right);
    common::set_delta(&mut world, 0.1);

    run_movement(&mut world);

    assert_that(&world.get::<Velocity>(player).unwrap().0).is_equal_to(Vec2::new(140.0, 0.0));
    assert_that(&world.get::<Position>(player).unwrap().0).is_equal_to(start + Vec2::new(14.0, 0.0));
}

#[test]
fn test_player_speed_scales_with_score() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Map::tile_center(common::TEST_PLAYER_TILE));
    world.get_mut::<PendingIntent>(player).unwrap().0 = Some(Direction::Left);
    world.insert_resource(ScoreResource(3000));
    common::set_delta(&mut world, 0.01);

    run_movement(&mut world);

    let velocity = world.get::<Velocity>(player).unwrap().0;
    assert!((velocity.x + 161.0).abs() < 1e-3, "velocity was {velocity:?}");
    assert_that(&velocity.y).is_equal_to(0.0);
}

#[test]
fn test_blocked_intent_is_retained() {
    let mut world = common::create_test_world();
    let start = Map::tile_center(common::TEST_PLAYER_TILE);
    let player = common::spawn_test_player(&mut world, start);
    // A pillar sits directly above the start tile
    world.get_mut::<PendingIntent>(player).unwrap().0 = Some(Direction::Up);
    common::set_delta(&mut world, 0.1);

    run_movement(&mut world);
    run_movement(&mut world);

    assert_that(&world.get::<Velocity>(player).unwrap().0).is_equal_to(Vec2::ZERO);
    assert_that(&world.get::<Position>(player).unwrap().0).is_equal_to(start);
    assert_that(world.get::<PendingIntent>(player).unwrap()).is_equal_to(PendingIntent(Some(Direction::Up)));
}

#[test]
fn test_turn_snaps_cross_axis_to_tile_center() {
    let mut world = common::create_test_world();
    // Slightly right of the center of (col 3, row 3); (col 3, row 2) above is open
    let player = common::spawn_test_player(&mut world, Vec2::new(143.0, 140.0));
    world.get_mut::<Velocity>(player).unwrap().0 = Vec2::new(-140.0, 0.0);
    world.get_mut::<PendingIntent>(player).unwrap().0 = Some(Direction::Up);
    common::set_delta(&mut world, 0.1);

    run_movement(&mut world);

    assert_that(&world.get::<Velocity>(player).unwrap().0).is_equal_to(Vec2::new(0.0, -140.0));
    assert_that(&world.get::<Position>(player).unwrap().0).is_equal_to(Vec2::new(140.0, 126.0));
}

#[test]
fn test_blocked_advance_stops_on_nearest_center() {
    let mut world = common::create_test_world();
    // Heading left into the border wall from just right of the (col 1, row 3) center
    let player = common::spawn_test_player(&mut world, Vec2::new(55.0, 140.0));
    world.get_mut::<Velocity>(player).unwrap().0 = Vec2::new(-140.0, 0.0);
    common::set_delta(&mut world, 0.1);

    run_movement(&mut world);

    assert_that(&world.get::<Velocity>(player).unwrap().0).is_equal_to(Vec2::ZERO);
    assert_that(&world.get::<Position>(player).unwrap().0).is_equal_to(Vec2::new(60.0, 140.0));
}

#[test]
fn test_velocity_never_diagonal() {
    let mut world = common::create_test_world();
    let player = common::spawn_test_player(&mut world, Map::tile_center(common::TEST_PLAYER_TILE));
    common::set_delta(&mut world, 1.0 / 60.0);

    let intents = [Direction::Left, Direction::Up, Direction::Right, Direction::Down, Direction::Up];
    for (i, direction) in intents.iter().cycle().take(300).enumerate() {
        if i % 23 == 0 {
            world.get_mut::<PendingIntent>(player).unwrap().0 = Some(*direction);
        }
        run_movement(&mut world);

        let velocity = world.get::<Velocity>(player).unwrap();
        assert_that(&velocity.is_axis_aligned()).is_true();
    }
}
