#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Context;
use tracing::info;

use prasman::app::{App, LogPresenter};
use prasman::config::load_config;
use prasman::platform;

/// The main entry point of the application.
///
/// Loads configuration from the environment, then plays the configured number of
/// games headlessly, logging scores and share links.
fn main() -> anyhow::Result<()> {
    platform::init_logging().context("Could not initialize logging")?;

    let config = load_config().context("Could not load configuration")?;
    let frame_time = config.frame_time();

    let mut app = App::new(config, Box::new(LogPresenter::default())).context("Could not create app")?;

    info!(loop_time = ?frame_time, "Starting game loop");
    while app.run()? {}

    info!(games = app.games_played(), "Exiting");
    Ok(())
}
