//! Headless arcade shooter session
//!
//! Runs the simulation at a fixed tick rate with scripted input and timed
//! enemy waves, logging events and the final score.
//!
//! Usage: `shooter [settings.toml|settings.ron]`

mod config;
mod pilot;
mod scoreboard;
mod spawner;

use shooter_core::config::Config;
use shooter_core::foundation::logging;
use shooter_core::prelude::*;

use config::GameConfig;
use pilot::AutoPilot;
use scoreboard::Scoreboard;
use spawner::WaveSpawner;

fn load_config() -> Result<GameConfig, Box<dyn std::error::Error>> {
    let Some(path) = std::env::args().nth(1) else {
        log::info!("no settings file given, using defaults");
        return Ok(GameConfig::default());
    };

    log::info!("loading settings from {path}");
    let config = GameConfig::load_from_file(&path)?;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");
    log::info!("Starting shooter session");

    let config = load_config()?;
    let session = config.session.clone();
    let dt = session.dt();
    let seed = session.seed.unwrap_or_else(rand::random);
    log::info!("wave seed {seed}");

    let mut state = SimulationState::new(config.simulation)?;
    let mut spawner = WaveSpawner::new(
        seed,
        session.wave_interval_secs,
        session.wave_size,
        session.wave_growth,
    );
    let mut pilot = AutoPilot::new(12);
    let mut scoreboard = Scoreboard::new(session.starting_lives);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ticks = (session.duration_secs / dt).ceil() as u64;

    for _ in 0..ticks {
        spawner.update(&mut state, dt)?;
        let input = pilot.input(&state);
        state.step(&input, dt)?;

        state.events_mut().dispatch(&mut [&mut scoreboard]);
        scoreboard.tick(dt);

        if state.frame_count() % u64::from(session.tick_rate * 10) == 0 {
            log::info!(
                "t={:.1}s enemies={} bullets={} score={}",
                state.elapsed(),
                state.enemies().len(),
                state.bullets().len(),
                scoreboard.score()
            );
        }
    }

    log::info!(
        "session over after {:.1}s: score {}, {} kills, {} hits taken, {} waves",
        state.elapsed(),
        scoreboard.score(),
        scoreboard.kills(),
        scoreboard.hits_taken(),
        spawner.waves()
    );
    if scoreboard.is_out() {
        log::warn!("all {} lives were lost during the session", session.starting_lives);
    }

    Ok(())
}
