//! # Shooter Core
//!
//! Simulation core for a small real-time arcade shooter.
//!
//! ## Features
//!
//! - **Entity Registry**: ordered, generation-checked storage with removal during traversal
//! - **Physics**: semi-implicit Euler integration with multiplicative drag
//! - **Collision**: SAT for oriented rectangles, AABB fast path, circle-circle, MTV resolution
//! - **Broad Phase**: pluggable full scan or uniform grid
//! - **Behaviors**: closed per-kind strategy table (seekers, wanderers, bouncers, bullets)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shooter_core::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut state = SimulationState::new(SimulationConfig::default())?;
//!     state.spawn_enemy(EntityKind::Seeker, Vec3::new(10.0, 5.0, 0.0))?;
//!
//!     let input = TickInput { fire: true, ..TickInput::default() };
//!     state.step(&input, 1.0 / 60.0)?;
//!
//!     for event in state.drain_events() {
//!         println!("{event:?}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod entity;
pub mod registry;
pub mod physics;
pub mod spatial;
pub mod behavior;
pub mod events;
pub mod simulation;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        behavior::{Behavior, BehaviorContext},
        config::{Config, ConfigError, SimulationConfig},
        entity::{ColliderShape, Entity, EntityBuilder, EntityKind, SpriteHandle},
        events::{EventQueue, GameEvent},
        foundation::{
            math::{Vec2, Vec3},
            time::Clock,
        },
        physics::{
            collision::{test_collision, world_collider, Contact, WorldCollider},
            integrator::integrate,
            PhysicsError,
        },
        registry::{EntityId, EntityRegistry, Retain},
        simulation::{RenderSink, RenderSnapshot, SimulationError, SimulationState, TickInput},
        spatial::{BroadPhase, BruteForce, UniformGrid},
    };
}
