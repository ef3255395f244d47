//! Simulated game objects
//!
//! An [`Entity`] carries its transform, physics state, collider shape and a
//! kind tag. Collider geometry is never stored; it is derived from
//! position/scale/angle by [`crate::physics::collision::world_collider`].

mod builder;

pub use builder::EntityBuilder;

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Vec2, Vec3};

/// Gameplay role of an entity
///
/// Drives behavior selection and collision layers, never collider geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityKind {
    /// Untyped object (backgrounds, debug markers)
    #[default]
    None,
    /// The player ship
    Player,
    /// Static arena boundary
    Wall,
    /// Enemy drifting along an oscillating heading
    Wanderer,
    /// Enemy homing in on the player
    Seeker,
    /// Projectile fired by the player
    Bullet,
    /// Collectible
    Pickup,
    /// Enemy ricocheting off the arena edges
    Bouncer,
}

impl EntityKind {
    /// Whether this kind belongs in the enemy registry
    pub fn is_enemy(self) -> bool {
        matches!(self, Self::Wanderer | Self::Seeker | Self::Bouncer)
    }

    /// Whether this kind never moves under collision resolution
    pub fn is_static(self) -> bool {
        matches!(self, Self::Wall)
    }
}

/// Collider geometry selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Oriented rectangle with half extents `(scale.x, scale.y)`
    #[default]
    Rectangle,
    /// Circle with radius `max(scale.x, scale.y)`
    Circle,
}

/// Opaque texture/sprite reference handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// A single simulated object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// World position; z is a render layer hint and is never simulated
    pub position: Vec3,
    /// Velocity in units per second
    pub velocity: Vec3,
    /// Acceleration accumulated for the current tick, cleared by integration
    pub acceleration: Vec3,
    /// Half extents in x/y for rectangle colliders
    pub scale: Vec3,
    /// Rotation in degrees
    pub angle: f32,
    /// Behavior-specific acceleration magnitude
    pub speed: f32,
    /// Multiplicative velocity damping applied every tick
    pub drag: f32,
    /// Gameplay role
    pub kind: EntityKind,
    /// Collider geometry
    pub collider_shape: ColliderShape,
    /// Sprite used by the renderer
    pub sprite: SpriteHandle,
    /// Cleared on despawn; the registry frees the slot on its removal pass
    pub alive: bool,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            angle: 0.0,
            speed: 0.0,
            drag: 1.0,
            kind: EntityKind::None,
            collider_shape: ColliderShape::Rectangle,
            sprite: SpriteHandle::default(),
            alive: true,
        }
    }
}

impl Entity {
    /// Start building an entity of the given kind
    pub fn builder(kind: EntityKind) -> EntityBuilder {
        EntityBuilder::new(kind)
    }

    /// Set the rotation, wrapped into `[0, 360)`
    pub fn set_angle(&mut self, degrees: f32) {
        self.angle = utils::normalize_degrees(degrees);
    }

    /// Rotate by a delta in degrees
    pub fn rotate(&mut self, delta_degrees: f32) {
        self.set_angle(self.angle + delta_degrees);
    }

    /// Unit vector the entity is facing
    pub fn heading(&self) -> Vec2 {
        utils::angle_to_direction(self.angle)
    }

    /// Position projected onto the simulation plane
    pub fn position_2d(&self) -> Vec2 {
        utils::xy(&self.position)
    }

    /// Add a force for this tick only
    pub fn add_acceleration(&mut self, delta: Vec2) {
        self.acceleration.x += delta.x;
        self.acceleration.y += delta.y;
    }

    /// Radius of a circle enclosing the collider
    pub fn bounding_radius(&self) -> f32 {
        match self.collider_shape {
            ColliderShape::Rectangle => self.scale.x.hypot(self.scale.y),
            ColliderShape::Circle => self.scale.x.max(self.scale.y),
        }
    }

    /// Mark the entity as despawned; returns whether it was alive before
    pub fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}
