//! This module contains the main game logic and state.

use bevy_ecs::event::Events;
use bevy_ecs::query::{With, Without};
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use tracing::{debug, info, trace};

use crate::constants::mechanics::{MAX_FRAME_DELTA, PLAYER_RADIUS, PLAYER_SPEED, PROTESTER_SPEED};
use crate::constants::{ProtesterStart, PROTESTER_STARTS, RAW_BOARD};
use crate::error::GameResult;
use crate::events::{GameCommand, GameEvent};
use crate::map::builder::Map;
use crate::render::{PlayerView, ProtesterView, RenderFrame};
use crate::systems::{
    self, Category, CosmeticRng, Cosmetics, DeltaTime, GameStage, GameplayRng, PendingIntent, Player, PlayerBundle, Position,
    Protester, ProtesterBundle, ScoreResource, SpawnCheckpoint, Velocity,
};

/// The layout a game is built from, kept so the game can be reset in place.
#[derive(Debug, Clone)]
struct Level {
    board: Vec<String>,
    protesters: Vec<ProtesterStart>,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// Owns the `World` holding the board, entities and resources, and the `Schedule`
/// that advances them. The host drives it one frame at a time through [`Game::frame`]
/// and feeds input through [`Game::send`].
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
    level: Level,
    last_timestamp: Option<f64>,
    scheduled: bool,
}

impl Game {
    /// Builds the standard board with its three starting protesters.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MapParse` if the built-in board is malformed.
    pub fn new(seed: u64) -> GameResult<Game> {
        Self::with_level(&RAW_BOARD, &PROTESTER_STARTS, seed)
    }

    /// Builds a game on a custom board.
    ///
    /// All gameplay randomness derives from `seed`; two games built from the same
    /// level and seed and fed the same inputs evolve identically.
    pub fn with_level(board: &[&str], protesters: &[ProtesterStart], seed: u64) -> GameResult<Game> {
        let level = Level {
            board: board.iter().map(|row| row.to_string()).collect(),
            protesters: protesters.to_vec(),
        };
        let (world, schedule) = Self::build(&level, seed)?;

        Ok(Game {
            world,
            schedule,
            level,
            last_timestamp: None,
            scheduled: true,
        })
    }

    fn build(level: &Level, seed: u64) -> GameResult<(World, Schedule)> {
        info!(seed, "Starting game initialization");

        let rows = level.board.iter().map(String::as_str).collect::<Vec<_>>();
        let map = Map::new(&rows)?;

        let mut world = World::default();
        let mut schedule = Schedule::default();

        world.init_resource::<Events<GameCommand>>();
        world.init_resource::<Events<GameEvent>>();
        world.add_observer(systems::spawn_protester_observer);

        let player_start = Map::tile_center(map.player_start);
        world.insert_resource(map);
        world.insert_resource(GameStage::default());
        world.insert_resource(ScoreResource::default());
        world.insert_resource(SpawnCheckpoint::default());
        world.insert_resource(DeltaTime::default());
        world.insert_resource(GameplayRng::seeded(seed));
        world.insert_resource(CosmeticRng::seeded(seed));

        Self::configure_schedule(&mut schedule);

        debug!(position = ?player_start, "Spawning player entity");
        world.spawn(PlayerBundle {
            player: Player {
                radius: PLAYER_RADIUS,
                base_speed: PLAYER_SPEED,
            },
            position: Position(player_start),
            velocity: Velocity::ZERO,
            intent: PendingIntent::default(),
        });

        Self::spawn_protesters(&mut world, &level.protesters);

        info!("Game initialization completed successfully");
        Ok((world, schedule))
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems(
            (
                systems::player_control_system,
                systems::player_movement_system.run_if(|stage: Res<GameStage>| !stage.is_over()),
                systems::collect_system,
                systems::protester_movement_system,
            )
                .chain(),
        );
    }

    fn spawn_protesters(world: &mut World, starts: &[ProtesterStart]) {
        for start in starts {
            let cosmetics = {
                let mut rng = world.resource_mut::<CosmeticRng>();
                Cosmetics::roll(&mut rng.0, Some(start.color))
            };
            let entity = world
                .spawn(ProtesterBundle {
                    protester: Protester {
                        base_speed: PROTESTER_SPEED,
                    },
                    position: Position(Map::tile_origin(start.tile)),
                    velocity: Velocity::toward(start.direction, PROTESTER_SPEED),
                    category: start.category,
                    cosmetics,
                })
                .id();
            trace!(?entity, col = start.tile.x, row = start.tile.y, "Protester placed");
        }
    }

    /// Queues an input for the next tick.
    pub fn send(&mut self, command: GameCommand) {
        self.world.send_event(command);
    }

    /// Runs one host frame at `timestamp_ms`.
    ///
    /// The first frame has a zero delta; later deltas are clamped to [`MAX_FRAME_DELTA`].
    /// Returns whether another frame should be scheduled. A suspended or finished game
    /// does not advance.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.scheduled {
            return false;
        }

        let elapsed = self
            .last_timestamp
            .map_or(0.0, |last| ((timestamp_ms - last) / 1000.0) as f32);
        self.last_timestamp = Some(timestamp_ms);

        self.tick(elapsed.clamp(0.0, MAX_FRAME_DELTA));

        if self.stage().is_over() {
            debug!("Game over, frame loop stopped");
            self.scheduled = false;
        }
        self.scheduled
    }

    /// Advances the simulation by `dt` seconds, ignoring scheduling.
    pub fn tick(&mut self, dt: f32) {
        self.world.insert_resource(DeltaTime { seconds: dt });
        self.schedule.run(&mut self.world);
        self.world.resource_mut::<Events<GameCommand>>().update();
    }

    /// Cancels the scheduled frame, as when the page is hidden.
    pub fn suspend(&mut self) {
        if self.scheduled {
            debug!("Frame loop suspended");
        }
        self.scheduled = false;
    }

    /// Reschedules frames unless the game is over. Returns whether the loop is running.
    pub fn resume(&mut self) -> bool {
        if !self.stage().is_over() && !self.scheduled {
            debug!("Frame loop resumed");
            self.scheduled = true;
        }
        self.scheduled
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Replaces the game with a fresh one on the same level.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MapParse` if the level cannot be rebuilt.
    pub fn reset(&mut self, seed: u64) -> GameResult<()> {
        let (world, schedule) = Self::build(&self.level, seed)?;
        self.world = world;
        self.schedule = schedule;
        self.last_timestamp = None;
        self.scheduled = true;
        Ok(())
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<ScoreResource>().0
    }

    pub fn map(&self) -> &Map {
        self.world.resource::<Map>()
    }

    /// Takes every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.world.resource_mut::<Events<GameEvent>>().drain().collect()
    }

    /// Copies out everything a presenter needs for this frame.
    pub fn snapshot(&mut self) -> RenderFrame {
        let player = self
            .world
            .query_filtered::<(&Player, &Position, &Velocity), Without<Protester>>()
            .iter(&self.world)
            .next()
            .map(|(player, position, velocity)| PlayerView {
                position: position.0,
                velocity: velocity.0,
                radius: player.radius,
            });

        let protesters = self
            .world
            .query_filtered::<(&Position, &Velocity, &Category, &Cosmetics), With<Protester>>()
            .iter(&self.world)
            .map(|(position, velocity, category, cosmetics)| ProtesterView {
                position: position.0,
                velocity: velocity.0,
                category: *category,
                cosmetics: *cosmetics,
            })
            .collect();

        let map = self.map();
        RenderFrame {
            tiles: map.tiles().to_vec(),
            size: map.size(),
            player,
            protesters,
            score: self.score(),
            stage: self.stage(),
            timestamp_ms: self.last_timestamp.unwrap_or_default(),
        }
    }
}
