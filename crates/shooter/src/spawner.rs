//! Timed enemy waves
//!
//! Enemies enter just inside a random arena edge so they never overlap the
//! player on arrival.

use rand::{rngs::StdRng, Rng, SeedableRng};
use shooter_core::config::ArenaConfig;
use shooter_core::prelude::*;

const ENEMY_KINDS: [EntityKind; 3] = [
    EntityKind::Seeker,
    EntityKind::Wanderer,
    EntityKind::Bouncer,
];

/// Spawns growing waves on a fixed interval
#[derive(Debug)]
pub struct WaveSpawner {
    rng: StdRng,
    interval: f64,
    timer: f64,
    next_size: u32,
    growth: u32,
    waves: u32,
}

impl WaveSpawner {
    /// Create a spawner; the first wave is released on the first update
    pub fn new(seed: u64, interval: f64, first_size: u32, growth: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            interval,
            timer: interval,
            next_size: first_size,
            growth,
            waves: 0,
        }
    }

    /// Waves released so far
    pub fn waves(&self) -> u32 {
        self.waves
    }

    /// Advance the wave timer and spawn when it elapses
    ///
    /// Returns how many enemies were spawned.
    pub fn update(&mut self, state: &mut SimulationState, dt: f64) -> Result<u32, SimulationError> {
        self.timer += dt.max(0.0);
        if self.timer < self.interval {
            return Ok(0);
        }
        self.timer -= self.interval;

        let arena = state.config().arena.clone();
        let margin = state.config().enemy.half_extent * 2.0;
        for _ in 0..self.next_size {
            let kind = ENEMY_KINDS[self.rng.gen_range(0..ENEMY_KINDS.len())];
            let position = self.edge_position(&arena, margin);
            state.spawn_enemy(kind, position)?;
        }

        let spawned = self.next_size;
        self.waves += 1;
        self.next_size += self.growth;
        log::info!("wave {} released: {spawned} enemies", self.waves);
        Ok(spawned)
    }

    fn edge_position(&mut self, arena: &ArenaConfig, margin: f32) -> Vec3 {
        let x_limit = (arena.half_width - margin).max(0.0);
        let y_limit = (arena.half_height - margin).max(0.0);
        let along_x = self.rng.gen_range(-1.0_f32..=1.0) * x_limit;
        let along_y = self.rng.gen_range(-1.0_f32..=1.0) * y_limit;

        match self.rng.gen_range(0..4) {
            0 => Vec3::new(-x_limit, along_y, 0.0),
            1 => Vec3::new(x_limit, along_y, 0.0),
            2 => Vec3::new(along_x, -y_limit, 0.0),
            _ => Vec3::new(along_x, y_limit, 0.0),
        }
    }
}
