//! Collision layer filtering
//!
//! Each kind sits on one layer and carries a mask of the layers it reacts
//! to. A pair is tested only if each side's layer is in the other's mask.

use bitflags::bitflags;

use crate::entity::EntityKind;

bitflags! {
    /// Collision layer membership and masks
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionLayers: u32 {
        /// Player ship
        const PLAYER = 1 << 0;
        /// Seekers, wanderers and bouncers
        const ENEMY = 1 << 1;
        /// Bullets
        const PROJECTILE = 1 << 2;
        /// Arena walls
        const ENVIRONMENT = 1 << 3;
        /// Collectibles
        const PICKUP = 1 << 4;
    }
}

impl CollisionLayers {
    /// Layer a kind lives on
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => Self::PLAYER,
            EntityKind::Wanderer | EntityKind::Seeker | EntityKind::Bouncer => Self::ENEMY,
            EntityKind::Bullet => Self::PROJECTILE,
            EntityKind::Wall => Self::ENVIRONMENT,
            EntityKind::Pickup => Self::PICKUP,
            EntityKind::None => Self::empty(),
        }
    }

    /// Layers a kind reacts to
    pub fn mask_for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => Self::ENEMY | Self::ENVIRONMENT | Self::PICKUP,
            EntityKind::Wanderer | EntityKind::Seeker | EntityKind::Bouncer => {
                Self::PLAYER | Self::PROJECTILE | Self::ENVIRONMENT
            }
            // bullets leave through the arena bounds check, not the walls
            EntityKind::Bullet => Self::ENEMY,
            EntityKind::Wall => Self::PLAYER | Self::ENEMY,
            EntityKind::Pickup => Self::PLAYER,
            EntityKind::None => Self::empty(),
        }
    }

    /// Whether two kinds should be narrow-phase tested at all
    pub fn should_collide(a: EntityKind, b: EntityKind) -> bool {
        Self::mask_for_kind(b).intersects(Self::for_kind(a))
            && Self::mask_for_kind(a).intersects(Self::for_kind(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(EntityKind::Player, EntityKind::Seeker));
        assert!(CollisionLayers::should_collide(EntityKind::Bullet, EntityKind::Wanderer));
        assert!(CollisionLayers::should_collide(EntityKind::Bouncer, EntityKind::Wall));
    }

    #[test]
    fn test_should_not_collide() {
        assert!(!CollisionLayers::should_collide(EntityKind::Player, EntityKind::Bullet));
        assert!(!CollisionLayers::should_collide(EntityKind::Bullet, EntityKind::Wall));
        assert!(!CollisionLayers::should_collide(EntityKind::Seeker, EntityKind::Seeker));
        assert!(!CollisionLayers::should_collide(EntityKind::None, EntityKind::Player));
    }

    #[test]
    fn test_symmetric_for_every_kind() {
        let kinds = [
            EntityKind::None,
            EntityKind::Player,
            EntityKind::Wall,
            EntityKind::Wanderer,
            EntityKind::Seeker,
            EntityKind::Bullet,
            EntityKind::Pickup,
            EntityKind::Bouncer,
        ];
        for a in kinds {
            for b in kinds {
                assert_eq!(
                    CollisionLayers::should_collide(a, b),
                    CollisionLayers::should_collide(b, a),
                    "{a:?} vs {b:?}"
                );
            }
        }
    }
}
