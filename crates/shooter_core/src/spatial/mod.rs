//! Broad phase pair generation
//!
//! A broad phase narrows two registries down to candidate pairs for the
//! narrow phase. Implementations may return extra pairs but never miss a
//! pair that [`crate::physics::test_collision`] would report.

mod brute_force;
mod uniform_grid;

pub use brute_force::BruteForce;
pub use uniform_grid::UniformGrid;

use crate::config::{BroadPhaseKind, CollisionConfig};
use crate::registry::{EntityId, EntityRegistry};

/// Candidate pair generator between two registries
pub trait BroadPhase {
    /// Pairs `(a, b)` with `a` from `first` and `b` from `second`
    ///
    /// Dead entities are skipped on both sides.
    fn candidate_pairs(
        &mut self,
        first: &EntityRegistry,
        second: &EntityRegistry,
    ) -> Vec<(EntityId, EntityId)>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Build the broad phase selected in the collision settings
pub fn from_config(config: &CollisionConfig) -> Box<dyn BroadPhase> {
    match config.broad_phase {
        BroadPhaseKind::BruteForce => Box::new(BruteForce),
        BroadPhaseKind::UniformGrid => Box::new(UniformGrid::new(config.grid_cell_size)),
    }
}
