//! Fixed-step motion integration

use crate::entity::Entity;
use crate::foundation::math::Vec3;
use crate::registry::EntityRegistry;

/// Advance one entity by `dt` seconds
///
/// Semi-implicit Euler: velocity is updated first and the new velocity moves
/// the position. Drag scales velocity once per call regardless of `dt`.
/// Acceleration is consumed. A non-positive `dt` leaves the entity untouched,
/// acceleration included.
pub fn integrate(entity: &mut Entity, dt: f64) {
    if dt <= 0.0 {
        return;
    }
    #[allow(clippy::cast_possible_truncation)]
    let dt = dt as f32;

    entity.velocity = (entity.velocity + entity.acceleration * dt) * entity.drag;
    entity.position += entity.velocity * dt;
    entity.acceleration = Vec3::zeros();
}

/// Integrate every live entity of a registry in traversal order
pub fn integrate_all(registry: &mut EntityRegistry, dt: f64) {
    registry.for_each_mut(|_, entity| {
        if entity.alive {
            integrate(entity, dt);
        }
    });
}
