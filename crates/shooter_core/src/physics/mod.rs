//! Physics module for integration and collision
//!
//! Motion is a semi-implicit Euler step with multiplicative drag. Collision
//! works on world-space colliders derived from each entity's transform on
//! every test; nothing geometric is cached between ticks.

pub mod collision;
pub mod collision_layers;
pub mod integrator;

pub use collision::{
    resolve, test_collision, test_collision_with, world_collider, Contact, MixedPairPolicy,
    WorldCollider,
};
pub use collision_layers::CollisionLayers;
pub use integrator::{integrate, integrate_all};

use crate::entity::ColliderShape;

/// Physics errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Collider geometry would make SAT meaningless
    #[error("Degenerate collider: {reason}")]
    DegenerateCollider {
        /// What was wrong with the geometry
        reason: String,
    },

    /// Drag outside (0, 1]
    #[error("Invalid drag {0}: must be in (0, 1]")]
    InvalidDrag(f32),

    /// No narrow phase exists for this shape combination
    #[error("Unsupported collider pair: {first:?} vs {second:?}")]
    UnsupportedColliderPair {
        /// Shape of the first entity
        first: ColliderShape,
        /// Shape of the second entity
        second: ColliderShape,
    },
}
