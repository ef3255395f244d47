//! Validated entity construction

use super::{ColliderShape, Entity, EntityKind, SpriteHandle};
use crate::foundation::math::{Vec2, Vec3};
use crate::physics::PhysicsError;

/// Builder that rejects degenerate geometry before it can reach collision
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    /// Create a builder with default state for `kind`
    pub fn new(kind: EntityKind) -> Self {
        Self {
            entity: Entity {
                kind,
                ..Entity::default()
            },
        }
    }

    /// Set world position
    pub fn position(mut self, position: Vec3) -> Self {
        self.entity.position = position;
        self
    }

    /// Set initial velocity
    pub fn velocity(mut self, velocity: Vec3) -> Self {
        self.entity.velocity = velocity;
        self
    }

    /// Set scale (rectangle half extents in x/y)
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.entity.scale = scale;
        self
    }

    /// Square half extent in x/y, unit z
    pub fn half_extent(self, half_extent: f32) -> Self {
        self.scale(Vec3::new(half_extent, half_extent, 1.0))
    }

    /// Rectangle half extents
    pub fn half_extents(self, half_extents: Vec2) -> Self {
        self.scale(Vec3::new(half_extents.x, half_extents.y, 1.0))
    }

    /// Set rotation in degrees
    pub fn angle(mut self, degrees: f32) -> Self {
        self.entity.set_angle(degrees);
        self
    }

    /// Set behavior speed
    pub fn speed(mut self, speed: f32) -> Self {
        self.entity.speed = speed;
        self
    }

    /// Set per-tick drag
    pub fn drag(mut self, drag: f32) -> Self {
        self.entity.drag = drag;
        self
    }

    /// Select collider geometry
    pub fn collider(mut self, shape: ColliderShape) -> Self {
        self.entity.collider_shape = shape;
        self
    }

    /// Set sprite handle
    pub fn sprite(mut self, sprite: SpriteHandle) -> Self {
        self.entity.sprite = sprite;
        self
    }

    /// Validate and produce the entity
    pub fn build(self) -> Result<Entity, PhysicsError> {
        let entity = self.entity;

        if !(entity.scale.x.is_finite() && entity.scale.y.is_finite())
            || entity.scale.x <= 0.0
            || entity.scale.y <= 0.0
        {
            return Err(PhysicsError::DegenerateCollider {
                reason: format!(
                    "non-positive extents ({}, {}) for {:?}",
                    entity.scale.x, entity.scale.y, entity.kind
                ),
            });
        }

        if !entity.position.iter().all(|c| c.is_finite()) {
            return Err(PhysicsError::DegenerateCollider {
                reason: format!("non-finite position {:?} for {:?}", entity.position, entity.kind),
            });
        }

        if !entity.angle.is_finite() {
            return Err(PhysicsError::DegenerateCollider {
                reason: format!("non-finite angle {} for {:?}", entity.angle, entity.kind),
            });
        }

        if !(entity.drag > 0.0 && entity.drag <= 1.0) {
            return Err(PhysicsError::InvalidDrag(entity.drag));
        }

        Ok(entity)
    }
}
