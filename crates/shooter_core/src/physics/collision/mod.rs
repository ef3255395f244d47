//! Collision detection and resolution
//!
//! # Architecture
//!
//! - **Derived colliders**: geometry comes from position/scale/angle via
//!   [`world_collider`] on every test and is never cached
//! - **Fast path**: two axis-aligned rectangles use an AABB test that agrees
//!   with full SAT
//! - **Oriented contacts**: [`Contact::axis`] points from the first entity
//!   toward the second, so the first is pushed out with
//!   `position -= axis * depth`
//!
//! # Module Organization
//!
//! - [`primitives`] - oriented rectangles, circles and boxes
//! - [`sat`] - overlap tests between primitives
//! - [`shape`] - entity to collider mapping

pub mod primitives;
pub mod sat;
pub mod shape;

pub use primitives::{Aabb, Circle, OrientedRect};
pub use shape::{world_collider, WorldCollider};

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::foundation::math::Vec2;
use crate::physics::PhysicsError;

/// Minimum translation for an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit axis from the first entity toward the second
    pub axis: Vec2,
    /// Penetration along `axis`, always positive
    pub depth: f32,
}

impl Contact {
    /// Displacement that separates the first entity
    pub fn separation(&self) -> Vec2 {
        -self.axis * self.depth
    }

    /// Same contact seen from the second entity
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            axis: -self.axis,
            depth: self.depth,
        }
    }
}

/// Handling of rectangle/circle pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MixedPairPolicy {
    /// Fail with `UnsupportedColliderPair`
    #[default]
    Reject,
    /// Treat the rectangle as its bounding circle
    BoundingCircle,
}

/// Test two entities with the default mixed pair policy
///
/// # Errors
///
/// Propagates degenerate geometry and rejects rectangle/circle pairs.
pub fn test_collision(a: &Entity, b: &Entity) -> Result<Option<Contact>, PhysicsError> {
    test_collision_with(a, b, MixedPairPolicy::Reject)
}

/// Test two entities
///
/// # Errors
///
/// `DegenerateCollider` for invalid geometry on either side, and
/// `UnsupportedColliderPair` for mixed shapes under [`MixedPairPolicy::Reject`].
pub fn test_collision_with(
    a: &Entity,
    b: &Entity,
    policy: MixedPairPolicy,
) -> Result<Option<Contact>, PhysicsError> {
    let first = world_collider(a)?;
    let second = world_collider(b)?;

    let contact = match (first, second) {
        (WorldCollider::Rectangle(ra), WorldCollider::Rectangle(rb)) => {
            if ra.is_axis_aligned() && rb.is_axis_aligned() {
                sat::aabb_overlap(&ra.aabb(), &rb.aabb())
            } else {
                sat::sat_overlap(&ra, &rb)
            }
        }
        (WorldCollider::Circle(ca), WorldCollider::Circle(cb)) => sat::circle_overlap(&ca, &cb),
        (first, second) => match policy {
            MixedPairPolicy::Reject => {
                return Err(PhysicsError::UnsupportedColliderPair {
                    first: first.shape(),
                    second: second.shape(),
                })
            }
            MixedPairPolicy::BoundingCircle => {
                sat::circle_overlap(&first.bounding_circle(), &second.bounding_circle())
            }
        },
    };

    if let Some(contact) = &contact {
        log::trace!(
            "{:?} vs {:?}: depth {:.4} along ({:.3}, {:.3})",
            a.kind,
            b.kind,
            contact.depth,
            contact.axis.x,
            contact.axis.y
        );
    }
    Ok(contact)
}

/// Push an entity out of a contact in which it was the first body
pub fn resolve(entity: &mut Entity, contact: &Contact) {
    let offset = contact.separation();
    entity.position.x += offset.x;
    entity.position.y += offset.y;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{ColliderShape, EntityKind};
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn body(x: f32, y: f32, shape: ColliderShape) -> Entity {
        Entity {
            position: Vec3::new(x, y, 0.0),
            collider_shape: shape,
            kind: EntityKind::Seeker,
            ..Entity::default()
        }
    }

    fn rect(x: f32, y: f32) -> Entity {
        body(x, y, ColliderShape::Rectangle)
    }

    #[test]
    fn test_rectangles_overlapping() {
        let contact = test_collision(&rect(0.0, 0.0), &rect(1.5, 0.0)).unwrap().unwrap();
        assert_relative_eq!(contact.depth, 0.5);
        assert_relative_eq!(contact.axis.x.abs(), 1.0);
        assert_relative_eq!(contact.axis.y, 0.0);
    }

    #[test]
    fn test_rectangles_apart_or_touching() {
        assert_eq!(test_collision(&rect(0.0, 0.0), &rect(3.0, 0.0)).unwrap(), None);
        assert_eq!(test_collision(&rect(0.0, 0.0), &rect(2.0, 0.0)).unwrap(), None);
    }

    #[test]
    fn test_circles_overlapping() {
        let a = body(0.0, 0.0, ColliderShape::Circle);
        let b = body(1.0, 0.0, ColliderShape::Circle);
        let contact = test_collision(&a, &b).unwrap().unwrap();
        assert_relative_eq!(contact.depth, 1.0);
        assert_relative_eq!(contact.axis, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_symmetric_contact() {
        let mut a = rect(0.0, 0.0);
        a.set_angle(20.0);
        let b = rect(1.2, 0.7);

        let ab = test_collision(&a, &b).unwrap().unwrap();
        let ba = test_collision(&b, &a).unwrap().unwrap();
        assert_relative_eq!(ab.depth, ba.depth, epsilon = 1e-5);
        assert_relative_eq!(ab.axis, ba.reversed().axis, epsilon = 1e-5);
    }

    #[test]
    fn test_rotated_half_turn_takes_fast_path() {
        let mut a = rect(0.0, 0.0);
        a.set_angle(180.0);
        let contact = test_collision(&a, &rect(0.0, 1.75)).unwrap().unwrap();
        assert_relative_eq!(contact.depth, 0.25, epsilon = 1e-5);
        assert_relative_eq!(contact.axis, Vec2::new(0.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_mixed_pair_rejected_by_default() {
        let result = test_collision(&rect(0.0, 0.0), &body(0.5, 0.0, ColliderShape::Circle));
        assert_eq!(
            result,
            Err(PhysicsError::UnsupportedColliderPair {
                first: ColliderShape::Rectangle,
                second: ColliderShape::Circle,
            })
        );
    }

    #[test]
    fn test_mixed_pair_bounding_circle() {
        let a = rect(0.0, 0.0);
        let b = body(2.0, 0.0, ColliderShape::Circle);
        let contact = test_collision_with(&a, &b, MixedPairPolicy::BoundingCircle)
            .unwrap()
            .unwrap();
        // sqrt(2) + 1 reach at distance 2
        assert_relative_eq!(contact.depth, 2.0_f32.sqrt() - 1.0, epsilon = 1e-5);
        assert_relative_eq!(contact.axis, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_degenerate_collider_propagates() {
        let mut a = rect(0.0, 0.0);
        a.scale.x = 0.0;
        assert!(matches!(
            test_collision(&a, &rect(0.5, 0.0)),
            Err(PhysicsError::DegenerateCollider { .. })
        ));
    }

    #[test]
    fn test_resolve_separates_pair() {
        let mut a = rect(0.0, 0.0);
        let b = rect(1.5, 0.2);
        let contact = test_collision(&a, &b).unwrap().unwrap();

        resolve(&mut a, &contact);
        assert_relative_eq!(a.position.x, -0.5, epsilon = 1e-5);
        assert_eq!(a.position.z, 0.0);
        assert_eq!(test_collision(&a, &b).unwrap(), None);
    }
}
