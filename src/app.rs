use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::error::GameResult;
use crate::events::{GameCommand, GameEvent};
use crate::game::Game;
use crate::map::direction::Direction;
use crate::platform;
use crate::render::{score_text, Presenter, RenderFrame};
use crate::share::ShareLinks;
use crate::systems::GameOverReason;

/// A scripted input source standing in for a person at the keyboard.
///
/// Every `period` frames it presses a random arrow key.
#[derive(Debug)]
pub struct Autopilot {
    rng: StdRng,
    period: u32,
    frame: u32,
}

impl Autopilot {
    pub fn new(seed: u64, period: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            period: period.max(1),
            frame: 0,
        }
    }

    /// The command for this frame, if any. Fires on the very first frame.
    pub fn next_command(&mut self) -> Option<GameCommand> {
        let fire = self.frame % self.period == 0;
        self.frame = self.frame.wrapping_add(1);
        if !fire {
            return None;
        }

        let direction = Direction::DIRECTIONS[self.rng.random_range(0..Direction::DIRECTIONS.len())];
        Some(GameCommand::MovePlayer(direction))
    }
}

/// A presenter that writes everything to the log.
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        if let Some(player) = frame.player {
            trace!(
                frame = self.frames,
                timestamp = frame.timestamp_ms,
                stage = frame.stage.as_ref(),
                player = ?player.position,
                protesters = frame.protesters.len(),
                "Frame"
            );
        }
    }

    fn show_score(&mut self, text: &str) {
        debug!(score = text, "Score");
    }

    fn show_game_over(&mut self, score: u32, reason: GameOverReason, links: &ShareLinks) {
        info!(score = %score_text(score), reason = reason.as_ref(), "Game over");
        for (platform, link) in &links.links {
            info!(platform = platform.as_ref(), link = %link, "Share");
        }
        info!(text = %links.clipboard, "Clipboard");
    }
}

/// Headless host: paces frames, feeds input, forwards output, and restarts finished games.
pub struct App {
    pub game: Game,
    config: Config,
    presenter: Box<dyn Presenter>,
    autopilot: Autopilot,
    base_seed: u64,
    started: Instant,
    games_played: u32,
    frames_this_game: u64,
    restart_at: Option<Instant>,
    focused: bool,
}

impl App {
    /// Builds the first game.
    ///
    /// # Errors
    ///
    /// Propagates errors from `Game::new()`.
    pub fn new(config: Config, presenter: Box<dyn Presenter>) -> GameResult<Self> {
        let base_seed = config.seed.unwrap_or_else(platform::entropy_seed);
        info!(seed = base_seed, games = config.games, "Initializing application");

        let game = Game::new(base_seed)?;
        let autopilot = Autopilot::new(base_seed.rotate_left(17), config.autopilot_period);

        Ok(App {
            game,
            config,
            presenter,
            autopilot,
            base_seed,
            started: Instant::now(),
            games_played: 0,
            frames_this_game: 0,
            restart_at: None,
            focused: true,
        })
    }

    /// Mirrors page visibility: hiding suspends the frame loop, showing resumes it.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.game.resume();
        } else {
            self.game.suspend();
        }
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Executes a single frame of the host loop, sleeping out the rest of the frame budget.
    ///
    /// # Returns
    ///
    /// `Ok(true)` while there is more to play, `Ok(false)` once the configured number of
    /// games has finished.
    pub fn run(&mut self) -> GameResult<bool> {
        let start = Instant::now();

        if let Some(restart_at) = self.restart_at {
            if self.games_played >= self.config.games {
                info!(games = self.games_played, "All games played");
                return Ok(false);
            }
            if start >= restart_at {
                self.restart()?;
            }
        } else if self.game.is_scheduled() {
            self.step(start);
        }

        let frame_time = self.config.frame_time();
        let elapsed = start.elapsed();
        if elapsed < frame_time {
            platform::sleep(frame_time - elapsed, self.focused);
        } else {
            warn!(behind = ?(elapsed - frame_time), "Frame loop behind schedule");
        }

        Ok(true)
    }

    fn step(&mut self, now: Instant) {
        if let Some(command) = self.autopilot.next_command() {
            self.game.send(command);
        }

        let timestamp_ms = now.duration_since(self.started).as_secs_f64() * 1000.0;
        self.game.frame(timestamp_ms);
        self.frames_this_game += 1;

        for event in self.game.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => self.presenter.show_score(&score_text(score)),
                GameEvent::GameOver { score, reason } => {
                    let links = ShareLinks::new(score, &self.config.share_url);
                    self.presenter.show_game_over(score, reason, &links);
                    self.finish_game(now);
                }
                GameEvent::Started => debug!("First input received"),
                GameEvent::ProtesterSpawned(entity) => trace!(?entity, "Protester joined"),
            }
        }

        let frame = self.game.snapshot();
        self.presenter.present(&frame);

        if let Some(max_frames) = self.config.max_frames {
            if self.restart_at.is_none() && self.frames_this_game >= max_frames {
                warn!(frames = max_frames, score = self.game.score(), "Frame cap reached, abandoning game");
                self.game.suspend();
                self.finish_game(now);
            }
        }
    }

    fn finish_game(&mut self, now: Instant) {
        self.games_played += 1;
        self.restart_at = Some(now + self.config.restart_delay);
        debug!(played = self.games_played, delay = ?self.config.restart_delay, "Restart scheduled");
    }

    fn restart(&mut self) -> GameResult<()> {
        let seed = self.base_seed.wrapping_add(self.games_played as u64);
        info!(seed, game = self.games_played + 1, "Restarting");

        self.game.reset(seed)?;
        if !self.focused {
            self.game.suspend();
        }
        self.frames_this_game = 0;
        self.restart_at = None;
        Ok(())
    }
}
