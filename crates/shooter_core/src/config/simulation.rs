//! # Simulation Configuration
//!
//! Tuning for the arena, the player, bullets, enemies and the collision
//! pipeline. `SimulationConfig` is the top-level structure callers load.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::physics::collision::MixedPairPolicy;

/// # Arena Configuration
///
/// Playfield centered on the origin. Walls are built just outside these
/// bounds; the player is clamped inside them and bullets leaving them are
/// despawned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    /// Half the playfield width in world units
    pub half_width: f32,
    /// Half the playfield height in world units
    pub half_height: f32,
    /// Half thickness of the boundary walls
    pub wall_half_thickness: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_width: 40.0,
            half_height: 22.0,
            wall_half_thickness: 1.0,
        }
    }
}

impl ArenaConfig {
    /// Whether a point lies inside the playfield (edges included)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x.abs() <= self.half_width && y.abs() <= self.half_height
    }
}

/// # Player Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Acceleration applied per unit of input
    pub speed: f32,
    /// Per-tick velocity damping in (0, 1]
    pub drag: f32,
    /// Half extent of the player's square collider
    pub half_extent: f32,
    /// Sprite handed to the renderer
    pub sprite: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 70.0,
            drag: 0.9,
            half_extent: 1.0,
            sprite: 1,
        }
    }
}

/// # Bullet Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BulletConfig {
    /// Launch speed along the player's heading
    pub speed: f32,
    /// Half extent of the bullet's square collider
    pub half_extent: f32,
    /// Sprite handed to the renderer
    pub sprite: u32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 60.0,
            half_extent: 0.25,
            sprite: 2,
        }
    }
}

/// # Enemy Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnemyConfig {
    /// Seeker acceleration toward the player
    pub seeker_speed: f32,
    /// Wanderer acceleration along its heading
    pub wanderer_speed: f32,
    /// Bouncer launch speed
    pub bouncer_speed: f32,
    /// Wanderer heading oscillation in radians per second
    pub wander_frequency: f32,
    /// Wanderer heading swing in degrees
    pub wander_amplitude: f32,
    /// Per-tick velocity damping in (0, 1]
    pub drag: f32,
    /// Half extent of the enemy collider
    pub half_extent: f32,
    /// Sprite handed to the renderer
    pub sprite: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            seeker_speed: 20.0,
            wanderer_speed: 15.0,
            bouncer_speed: 12.0,
            wander_frequency: 2.0,
            wander_amplitude: 90.0,
            drag: 0.95,
            half_extent: 1.0,
            sprite: 3,
        }
    }
}

/// Broad phase used for the enemy-vs-bullet scan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BroadPhaseKind {
    /// Every enemy against every bullet
    #[default]
    BruteForce,
    /// Uniform hash grid keyed by `grid_cell_size`
    UniformGrid,
}

/// # Collision Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollisionConfig {
    /// How rectangle/circle pairs are handled
    pub mixed_pairs: MixedPairPolicy,
    /// Pair generation strategy for enemy-vs-bullet
    pub broad_phase: BroadPhaseKind,
    /// Cell size when `broad_phase` is `UniformGrid`
    pub grid_cell_size: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            mixed_pairs: MixedPairPolicy::Reject,
            broad_phase: BroadPhaseKind::BruteForce,
            grid_cell_size: 4.0,
        }
    }
}

/// # Complete Simulation Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Playfield bounds
    pub arena: ArenaConfig,
    /// Player tuning
    pub player: PlayerConfig,
    /// Bullet tuning
    pub bullet: BulletConfig,
    /// Enemy tuning
    pub enemy: EnemyConfig,
    /// Collision pipeline settings
    pub collision: CollisionConfig,
    /// Initial registry reservation (a hint, not a limit)
    pub registry_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            player: PlayerConfig::default(),
            bullet: BulletConfig::default(),
            enemy: EnemyConfig::default(),
            collision: CollisionConfig::default(),
            registry_capacity: 64,
        }
    }
}

impl SimulationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena.half_width", self.arena.half_width),
            ("arena.half_height", self.arena.half_height),
            ("arena.wall_half_thickness", self.arena.wall_half_thickness),
            ("player.half_extent", self.player.half_extent),
            ("bullet.half_extent", self.bullet.half_extent),
            ("enemy.half_extent", self.enemy.half_extent),
            ("collision.grid_cell_size", self.collision.grid_cell_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let finite = [
            ("player.speed", self.player.speed),
            ("bullet.speed", self.bullet.speed),
            ("enemy.seeker_speed", self.enemy.seeker_speed),
            ("enemy.wanderer_speed", self.enemy.wanderer_speed),
            ("enemy.bouncer_speed", self.enemy.bouncer_speed),
            ("enemy.wander_frequency", self.enemy.wander_frequency),
            ("enemy.wander_amplitude", self.enemy.wander_amplitude),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")));
            }
        }

        for (name, drag) in [("player.drag", self.player.drag), ("enemy.drag", self.enemy.drag)] {
            if !(drag > 0.0 && drag <= 1.0) {
                return Err(ConfigError::Invalid(format!("{name} must be in (0, 1], got {drag}")));
            }
        }

        Ok(())
    }
}

impl Config for SimulationConfig {}
