//! Gameplay events
//!
//! The simulation pushes events while it steps; the orchestrator drains them
//! once per frame, either directly or through [`EventHandler`]s.
//! Handlers return `true` to consume an event and stop forwarding.

use crate::entity::EntityKind;
use crate::registry::EntityId;

/// Something the score or UI layer cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A bullet destroyed an enemy; both are gone after this tick
    EnemyKilled {
        /// Handle of the destroyed enemy (now stale)
        enemy: EntityId,
        /// Handle of the spent bullet (now stale)
        bullet: EntityId,
        /// Kind of the destroyed enemy
        kind: EntityKind,
    },
    /// An enemy touched the player and was consumed
    PlayerHit {
        /// Handle of the consumed enemy (now stale)
        enemy: EntityId,
        /// Kind of the consumed enemy
        kind: EntityKind,
    },
}

/// Event handler trait
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &GameEvent) -> bool;
}

/// FIFO of events raised during simulation steps
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event
    pub fn push(&mut self, event: GameEvent) {
        log::debug!("event {event:?}");
        self.events.push(event);
    }

    /// Take every queued event in the order it was raised
    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Deliver queued events to handlers in order until one consumes each
    ///
    /// The queue is empty afterwards.
    pub fn dispatch(&mut self, handlers: &mut [&mut dyn EventHandler]) {
        for event in self.events.drain(..) {
            for handler in handlers.iter_mut() {
                if handler.on_event(&event) {
                    break;
                }
            }
        }
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are queued
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all queued events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::registry::EntityRegistry;

    fn ids() -> (EntityId, EntityId) {
        let mut registry = EntityRegistry::new();
        (registry.insert(Entity::default()), registry.insert(Entity::default()))
    }

    struct Counter {
        seen: usize,
        consume: bool,
    }

    impl EventHandler for Counter {
        fn on_event(&mut self, _event: &GameEvent) -> bool {
            self.seen += 1;
            self.consume
        }
    }

    #[test]
    fn test_drain_preserves_order() {
        let (enemy, bullet) = ids();
        let mut queue = EventQueue::new();
        queue.push(GameEvent::PlayerHit {
            enemy,
            kind: EntityKind::Seeker,
        });
        queue.push(GameEvent::EnemyKilled {
            enemy,
            bullet,
            kind: EntityKind::Wanderer,
        });
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert!(matches!(drained[0], GameEvent::PlayerHit { .. }));
        assert!(matches!(drained[1], GameEvent::EnemyKilled { .. }));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_consumed_event_stops_forwarding() {
        let (enemy, _) = ids();
        let mut queue = EventQueue::new();
        queue.push(GameEvent::PlayerHit {
            enemy,
            kind: EntityKind::Bouncer,
        });

        let mut first = Counter { seen: 0, consume: true };
        let mut second = Counter { seen: 0, consume: false };
        queue.dispatch(&mut [&mut first, &mut second]);

        assert_eq!(first.seen, 1);
        assert_eq!(second.seen, 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let (enemy, _) = ids();
        let mut queue = EventQueue::new();
        queue.push(GameEvent::PlayerHit {
            enemy,
            kind: EntityKind::Seeker,
        });
        queue.clear();
        assert_eq!(queue.len(), 0);
    }
}
