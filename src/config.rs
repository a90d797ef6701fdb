//! Host configuration, loaded from `PRASMAN_`-prefixed environment variables.

use std::time::Duration;

use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::host::RESTART_DELAY;
use crate::error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seed for gameplay randomness; drawn from the OS when unset
    pub seed: Option<u64>,
    /// Page URL embedded in share links
    pub share_url: String,
    /// Delay between game over and the next game
    pub restart_delay: Duration,
    /// Target frames per second for the frame loop
    pub frame_rate: u32,
    /// Number of games to play before exiting
    pub games: u32,
    /// Frames between autopilot direction changes
    pub autopilot_period: u32,
    /// Hard cap on frames per game, if any
    pub max_frames: Option<u64>,
}

impl Config {
    /// Time budget for one frame.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            share_url: default_share_url(),
            restart_delay: RESTART_DELAY,
            frame_rate: default_frame_rate(),
            games: default_games(),
            autopilot_period: default_autopilot_period(),
            max_frames: None,
        }
    }
}

/// Raw configuration loaded directly from environment variables
/// This is an intermediate representation that gets validated and converted to Config
#[derive(Debug, Deserialize)]
struct RawConfig {
    seed: Option<u64>,
    #[serde(default = "default_share_url")]
    share_url: String,
    #[serde(default = "default_restart_delay_ms")]
    restart_delay_ms: u64,
    #[serde(default = "default_frame_rate")]
    frame_rate: u32,
    #[serde(default = "default_games")]
    games: u32,
    #[serde(default = "default_autopilot_period")]
    autopilot_period: u32,
    max_frames: Option<u64>,
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        if raw.share_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "share_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(1..=1000).contains(&raw.frame_rate) {
            return Err(ConfigError::InvalidValue {
                field: "frame_rate",
                reason: format!("{} is outside 1..=1000", raw.frame_rate),
            });
        }
        if raw.games == 0 {
            return Err(ConfigError::InvalidValue {
                field: "games",
                reason: "at least one game must be played".to_string(),
            });
        }
        if raw.autopilot_period == 0 {
            return Err(ConfigError::InvalidValue {
                field: "autopilot_period",
                reason: "must be at least one frame".to_string(),
            });
        }
        if raw.max_frames == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_frames",
                reason: "must be at least one frame when set".to_string(),
            });
        }

        Ok(Config {
            seed: raw.seed,
            share_url: raw.share_url,
            restart_delay: Duration::from_millis(raw.restart_delay_ms),
            frame_rate: raw.frame_rate,
            games: raw.games,
            autopilot_period: raw.autopilot_period,
            max_frames: raw.max_frames,
        })
    }
}

fn default_share_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_restart_delay_ms() -> u64 {
    RESTART_DELAY.as_millis() as u64
}

fn default_frame_rate() -> u32 {
    60
}

fn default_games() -> u32 {
    1
}

fn default_autopilot_period() -> u32 {
    45
}

/// Extracts and validates a configuration from any figment.
///
/// # Errors
///
/// Returns `ConfigError::Extract` for missing or mistyped values, and
/// `ConfigError::InvalidValue` for values that parse but make no sense.
pub fn from_figment(figment: Figment) -> Result<Config, ConfigError> {
    let raw: RawConfig = figment.extract()?;
    Config::try_from(raw)
}

/// Loads the configuration from the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    from_figment(Figment::new().merge(Env::prefixed("PRASMAN_")))
}
