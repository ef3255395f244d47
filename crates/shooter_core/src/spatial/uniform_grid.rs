use std::collections::HashMap;

use super::BroadPhase;
use crate::entity::Entity;
use crate::registry::{EntityId, EntityRegistry};

/// Hash grid over the second registry's entity centers
///
/// Each query covers the cells within `radius(a) + max radius(b)` of an
/// entity's center, which contains every center that could be in contact.
#[derive(Debug, Clone)]
pub struct UniformGrid {
    cell_size: f32,
    buckets: HashMap<(i32, i32), Vec<EntityId>>,
    max_radius: f32,
}

impl UniformGrid {
    /// Create a grid; non-positive cell sizes fall back to one unit
    pub fn new(cell_size: f32) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            log::warn!("invalid grid cell size {cell_size}, using 1.0");
            1.0
        };
        Self {
            cell_size,
            buckets: HashMap::new(),
            max_radius: 0.0,
        }
    }

    /// Edge length of a cell
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell(&self, coordinate: f32) -> i32 {
        (coordinate / self.cell_size).floor() as i32
    }

    fn key(&self, entity: &Entity) -> (i32, i32) {
        (self.cell(entity.position.x), self.cell(entity.position.y))
    }

    fn rebuild(&mut self, registry: &EntityRegistry) {
        self.buckets.clear();
        self.max_radius = 0.0;
        for (id, entity) in registry {
            if !entity.alive {
                continue;
            }
            self.max_radius = self.max_radius.max(entity.bounding_radius());
            let key = self.key(entity);
            self.buckets.entry(key).or_default().push(id);
        }
    }

    fn query(&self, entity: &Entity, out: &mut Vec<EntityId>) {
        let reach = entity.bounding_radius() + self.max_radius;
        let (x0, x1) = (self.cell(entity.position.x - reach), self.cell(entity.position.x + reach));
        let (y0, y1) = (self.cell(entity.position.y - reach), self.cell(entity.position.y + reach));

        let span = (i64::from(x1) - i64::from(x0) + 1) * (i64::from(y1) - i64::from(y0) + 1);
        if span > self.buckets.len() as i64 {
            // cheaper to scan occupied cells than the covered range
            let mut hits: Vec<_> = self
                .buckets
                .iter()
                .filter(|((cx, cy), _)| (x0..=x1).contains(cx) && (y0..=y1).contains(cy))
                .collect();
            hits.sort_unstable_by_key(|(key, _)| **key);
            for (_, ids) in hits {
                out.extend_from_slice(ids);
            }
            return;
        }

        for cx in x0..=x1 {
            for cy in y0..=y1 {
                if let Some(ids) = self.buckets.get(&(cx, cy)) {
                    out.extend_from_slice(ids);
                }
            }
        }
    }
}

impl Default for UniformGrid {
    fn default() -> Self {
        Self::new(4.0)
    }
}

impl BroadPhase for UniformGrid {
    fn candidate_pairs(
        &mut self,
        first: &EntityRegistry,
        second: &EntityRegistry,
    ) -> Vec<(EntityId, EntityId)> {
        self.rebuild(second);

        let mut pairs = Vec::new();
        let mut nearby = Vec::new();
        for (a, entity) in first {
            if !entity.alive {
                continue;
            }
            if !(entity.position.x.is_finite() && entity.position.y.is_finite()) {
                // let the narrow phase report the bad transform
                pairs.extend(second.ids().map(|b| (a, b)));
                continue;
            }
            nearby.clear();
            self.query(entity, &mut nearby);
            pairs.extend(nearby.iter().map(|&b| (a, b)));
        }
        pairs
    }

    fn name(&self) -> &'static str {
        "uniform-grid"
    }
}
