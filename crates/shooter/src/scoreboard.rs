//! Score keeping from simulation events

use shooter_core::events::EventHandler;
use shooter_core::prelude::*;

/// Points for each enemy shot down
pub const KILL_POINTS: u64 = 50;

/// Seconds survived per survival point
pub const SURVIVAL_INTERVAL: f64 = 0.5;

/// Running score, lives and kill tally
#[derive(Debug, Clone)]
pub struct Scoreboard {
    score: u64,
    kills: u32,
    lives: u32,
    hits_taken: u32,
    survival_timer: f64,
}

impl Scoreboard {
    /// Fresh scoreboard with the given lives
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            kills: 0,
            lives,
            hits_taken: 0,
            survival_timer: 0.0,
        }
    }

    /// Award survival points for `dt` seconds alive
    pub fn tick(&mut self, dt: f64) {
        if self.is_out() {
            return;
        }
        self.survival_timer += dt.max(0.0);
        while self.survival_timer >= SURVIVAL_INTERVAL {
            self.survival_timer -= SURVIVAL_INTERVAL;
            self.score += 1;
        }
    }

    /// Current score
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Enemies shot down
    pub fn kills(&self) -> u32 {
        self.kills
    }

    /// Lives left
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Times the player was hit
    pub fn hits_taken(&self) -> u32 {
        self.hits_taken
    }

    /// Whether every life is spent
    pub fn is_out(&self) -> bool {
        self.lives == 0
    }
}

impl EventHandler for Scoreboard {
    fn on_event(&mut self, event: &GameEvent) -> bool {
        match *event {
            GameEvent::EnemyKilled { kind, .. } => {
                self.kills += 1;
                self.score += KILL_POINTS;
                log::debug!("{kind:?} down, score {}", self.score);
            }
            GameEvent::PlayerHit { kind, .. } => {
                self.hits_taken += 1;
                self.lives = self.lives.saturating_sub(1);
                log::info!("hit by {kind:?}, {} lives left", self.lives);
            }
        }
        false
    }
}
