//! Scripted player input for headless sessions

use shooter_core::foundation::math::utils;
use shooter_core::prelude::*;

/// Distance at which the pilot backs away from an enemy
const DANGER_RADIUS: f32 = 8.0;

/// Aims at the nearest enemy, taps fire and keeps its distance
#[derive(Debug, Clone)]
pub struct AutoPilot {
    fire_period: u32,
    tick: u32,
}

impl AutoPilot {
    /// Pilot that presses fire once every `fire_period` ticks
    pub fn new(fire_period: u32) -> Self {
        Self {
            fire_period: fire_period.max(2),
            tick: 0,
        }
    }

    /// Input for the next tick
    pub fn input(&mut self, state: &SimulationState) -> TickInput {
        self.tick = self.tick.wrapping_add(1);
        let me = state.player().position_2d();

        let nearest = state
            .enemies()
            .iter()
            .map(|(_, enemy)| enemy.position_2d() - me)
            .min_by(|a, b| a.norm_squared().total_cmp(&b.norm_squared()));

        let Some(offset) = nearest else {
            // drift back to the middle while the arena is empty
            return TickInput {
                acceleration: -me * 0.1,
                ..TickInput::default()
            };
        };

        let acceleration = if offset.norm() < DANGER_RADIUS {
            -offset.normalize()
        } else {
            Vec2::zeros()
        };

        TickInput {
            acceleration,
            aim_angle: Some(utils::direction_to_angle(offset)),
            // held for half the period so each period yields one press edge
            fire: self.tick % self.fire_period < self.fire_period / 2,
        }
    }
}
