//! Per-kind movement strategies
//!
//! Behaviors only write acceleration, angle and (for bouncers) velocity.
//! Integration and collision run afterwards in the simulation step.

use crate::config::{ArenaConfig, EnemyConfig};
use crate::entity::{Entity, EntityKind};
use crate::foundation::math::{utils, Vec2};
use crate::registry::EntityId;

/// Golden angle in radians, spreads wander phases between handles
const PHASE_STEP: f32 = 2.399_963;

/// World state a behavior may read
#[derive(Debug, Clone, Copy)]
pub struct BehaviorContext<'a> {
    /// Player position on the simulation plane
    pub player_position: Vec2,
    /// Seconds since the simulation started
    pub elapsed: f64,
    /// Step length in seconds
    pub dt: f64,
    /// Playfield bounds
    pub arena: &'a ArenaConfig,
}

/// Movement strategy selected by [`EntityKind`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// Accelerate toward the player and face the chase direction
    Seek,
    /// Oscillating heading with constant thrust
    Wander {
        /// Oscillation rate in radians per second
        frequency: f32,
        /// Heading swing in degrees
        amplitude: f32,
    },
    /// Constant velocity reflected at arena edges
    Bounce,
    /// Thrust along the current heading
    Projectile,
    /// No self-driven motion
    Idle,
}

impl Behavior {
    /// Behavior for a kind with default tuning
    pub fn for_kind(kind: EntityKind) -> Self {
        Self::for_kind_tuned(kind, &EnemyConfig::default())
    }

    /// Behavior for a kind using the given enemy tuning
    pub fn for_kind_tuned(kind: EntityKind, tuning: &EnemyConfig) -> Self {
        match kind {
            EntityKind::Seeker => Self::Seek,
            EntityKind::Wanderer => Self::Wander {
                frequency: tuning.wander_frequency,
                amplitude: tuning.wander_amplitude,
            },
            EntityKind::Bouncer => Self::Bounce,
            EntityKind::Bullet => Self::Projectile,
            EntityKind::Player | EntityKind::Wall | EntityKind::Pickup | EntityKind::None => {
                Self::Idle
            }
        }
    }

    /// Run the behavior for one entity
    pub fn apply(&self, id: EntityId, entity: &mut Entity, ctx: &BehaviorContext<'_>) {
        match *self {
            Self::Seek => {
                let to_player = ctx.player_position - entity.position_2d();
                let distance = to_player.norm();
                if distance > f32::EPSILON {
                    let direction = to_player / distance;
                    entity.add_acceleration(direction * entity.speed);
                    entity.set_angle(utils::direction_to_angle(direction));
                }
            }
            Self::Wander {
                frequency,
                amplitude,
            } => {
                #[allow(clippy::cast_possible_truncation)]
                let t = ctx.elapsed as f32;
                let heading = (t * frequency + phase_of(id)).sin() * amplitude;
                entity.set_angle(heading);
                let thrust = entity.heading() * entity.speed;
                entity.add_acceleration(thrust);
            }
            Self::Bounce => bounce_off_edges(entity, ctx.arena),
            Self::Projectile => {
                let thrust = entity.heading() * entity.speed;
                entity.add_acceleration(thrust);
            }
            Self::Idle => {}
        }
    }
}

/// Deterministic per-entity phase offset
#[allow(clippy::cast_precision_loss)]
fn phase_of(id: EntityId) -> f32 {
    use slotmap::Key;
    // low 32 bits of the ffi form are the slot index
    let index = (id.data().as_ffi() & 0xFFFF_FFFF) as f32;
    (index * PHASE_STEP) % std::f32::consts::TAU
}

/// Reflect the velocity component heading out through an arena edge
fn bounce_off_edges(entity: &mut Entity, arena: &ArenaConfig) {
    let limit_x = (arena.half_width - entity.scale.x).max(0.0);
    let limit_y = (arena.half_height - entity.scale.y).max(0.0);

    if entity.position.x.abs() >= limit_x && entity.position.x * entity.velocity.x > 0.0 {
        entity.velocity.x = -entity.velocity.x;
    }
    if entity.position.y.abs() >= limit_y && entity.position.y * entity.velocity.y > 0.0 {
        entity.velocity.y = -entity.velocity.y;
    }

    let moving = utils::xy(&entity.velocity);
    if moving.norm_squared() > 0.0 {
        entity.set_angle(utils::direction_to_angle(moving));
    }
}
