//! Render boundary
//!
//! The simulation never draws. It hands one [`RenderSnapshot`] per visible
//! entity to whatever [`RenderSink`] the host provides.

use crate::entity::{Entity, EntityKind, SpriteHandle};
use crate::foundation::math::Vec3;

/// Everything a renderer needs to draw one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    /// World position (z is the layer hint)
    pub position: Vec3,
    /// Half extents
    pub scale: Vec3,
    /// Rotation in degrees
    pub angle: f32,
    /// Sprite to draw
    pub sprite: SpriteHandle,
    /// Kind, for renderers that tint or sort by role
    pub kind: EntityKind,
}

impl From<&Entity> for RenderSnapshot {
    fn from(entity: &Entity) -> Self {
        Self {
            position: entity.position,
            scale: entity.scale,
            angle: entity.angle,
            sprite: entity.sprite,
            kind: entity.kind,
        }
    }
}

/// Consumer of per-frame snapshots
pub trait RenderSink {
    /// Draw a single entity
    fn draw(&mut self, snapshot: &RenderSnapshot);
}

impl RenderSink for Vec<RenderSnapshot> {
    fn draw(&mut self, snapshot: &RenderSnapshot) {
        self.push(*snapshot);
    }
}
