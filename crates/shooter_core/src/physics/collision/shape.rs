//! Entity to collider mapping
//!
//! The only place that knows how an entity's transform turns into collision
//! geometry. Shapes are derived on demand and never stored on the entity.

use super::primitives::{Circle, OrientedRect};
use crate::entity::{ColliderShape, Entity};
use crate::physics::PhysicsError;

/// Collider in world space, derived for a single test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldCollider {
    /// Oriented rectangle with half extents `(scale.x, scale.y)`
    Rectangle(OrientedRect),
    /// Circle of radius `max(scale.x, scale.y)`
    Circle(Circle),
}

impl WorldCollider {
    /// Circle enclosing the collider
    pub fn bounding_circle(&self) -> Circle {
        match self {
            Self::Rectangle(rect) => rect.bounding_circle(),
            Self::Circle(circle) => *circle,
        }
    }

    /// Shape tag this collider was built from
    pub fn shape(&self) -> ColliderShape {
        match self {
            Self::Rectangle(_) => ColliderShape::Rectangle,
            Self::Circle(_) => ColliderShape::Circle,
        }
    }
}

/// Derive an entity's world-space collider
///
/// # Errors
///
/// `DegenerateCollider` when the extents are not positive and finite, or the
/// position or angle is not finite.
pub fn world_collider(entity: &Entity) -> Result<WorldCollider, PhysicsError> {
    let half_extents = entity.scale.xy();
    if !(half_extents.x.is_finite() && half_extents.y.is_finite())
        || half_extents.x <= 0.0
        || half_extents.y <= 0.0
    {
        return Err(PhysicsError::DegenerateCollider {
            reason: format!(
                "extents ({}, {}) of {:?} must be positive",
                half_extents.x, half_extents.y, entity.kind
            ),
        });
    }

    let center = entity.position_2d();
    if !(center.x.is_finite() && center.y.is_finite() && entity.angle.is_finite()) {
        return Err(PhysicsError::DegenerateCollider {
            reason: format!(
                "{:?} has non-finite transform ({}, {}) @ {}°",
                entity.kind, center.x, center.y, entity.angle
            ),
        });
    }

    Ok(match entity.collider_shape {
        ColliderShape::Rectangle => {
            WorldCollider::Rectangle(OrientedRect::new(center, half_extents, entity.angle))
        }
        ColliderShape::Circle => {
            WorldCollider::Circle(Circle::new(center, half_extents.x.max(half_extents.y)))
        }
    })
}
