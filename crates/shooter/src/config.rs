//! Session configuration
//!
//! Wraps the core [`SimulationConfig`] with the knobs only the headless
//! session needs: how long to run, the tick rate and wave pacing.

use serde::{Deserialize, Serialize};
use shooter_core::config::{Config, ConfigError, SimulationConfig};

/// Top-level settings file for the `shooter` binary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Core simulation tuning
    pub simulation: SimulationConfig,
    /// Session pacing
    pub session: SessionConfig,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Validate both halves
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.session.validate()
    }
}

/// Session pacing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated seconds before the session ends
    pub duration_secs: f64,
    /// Fixed steps per simulated second
    pub tick_rate: u32,
    /// Lives before the score is reported as final
    pub starting_lives: u32,
    /// Seconds between enemy waves
    pub wave_interval_secs: f64,
    /// Enemies in the first wave
    pub wave_size: u32,
    /// Extra enemies per subsequent wave
    pub wave_growth: u32,
    /// Seed for wave placement; `None` picks one from entropy
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: 60.0,
            tick_rate: 60,
            starting_lives: 3,
            wave_interval_secs: 5.0,
            wave_size: 3,
            wave_growth: 1,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Fixed step length in seconds
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate.max(1))
    }

    /// Reject values that would stall or flood the session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "session.duration_secs must be positive, got {}",
                self.duration_secs
            )));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("session.tick_rate must be non-zero".into()));
        }
        if !(self.wave_interval_secs.is_finite() && self.wave_interval_secs > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "session.wave_interval_secs must be positive, got {}",
                self.wave_interval_secs
            )));
        }
        Ok(())
    }
}
