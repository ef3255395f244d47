use super::BroadPhase;
use crate::registry::{EntityId, EntityRegistry};

/// Every live entity of the first registry against every live entity of the second
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl BroadPhase for BruteForce {
    fn candidate_pairs(
        &mut self,
        first: &EntityRegistry,
        second: &EntityRegistry,
    ) -> Vec<(EntityId, EntityId)> {
        let mut pairs = Vec::new();
        for (a, entity_a) in first {
            if !entity_a.alive {
                continue;
            }
            pairs.extend(
                second
                    .iter()
                    .filter(|(_, entity_b)| entity_b.alive)
                    .map(|(b, _)| (a, b)),
            );
        }
        pairs
    }

    fn name(&self) -> &'static str {
        "brute-force"
    }
}
