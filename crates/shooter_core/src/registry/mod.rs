//! Ordered entity storage
//!
//! Entities live in a [`SlotMap`] so handles stay valid across unrelated
//! insertions and removals and go stale (rather than aliasing) once their
//! slot is reused. Insertion order is kept by an intrusive doubly linked
//! list threaded through the slots, which gives O(1) append, O(1) unlink
//! and safe removal of the current element while walking the sequence.

use slotmap::SlotMap;

use crate::entity::Entity;

slotmap::new_key_type! {
    /// Generation-checked handle to an entity in an [`EntityRegistry`]
    pub struct EntityId;
}

/// Verdict returned by a [`EntityRegistry::for_each_removable`] visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retain {
    /// Leave the entity in place
    Keep,
    /// Unlink and drop the entity
    Remove,
}

#[derive(Debug, Clone)]
struct Node {
    entity: Entity,
    prev: Option<EntityId>,
    next: Option<EntityId>,
}

/// Insertion-ordered collection of live entities
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    slots: SlotMap<EntityId, Node>,
    head: Option<EntityId>,
    tail: Option<EntityId>,
}

impl EntityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with room for `capacity` entities
    ///
    /// The capacity is a hint; inserting past it grows the storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
            head: None,
            tail: None,
        }
    }

    /// Append an entity at the end of the traversal order
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let prev = self.tail;
        let id = self.slots.insert(Node {
            entity,
            prev,
            next: None,
        });

        match prev.and_then(|p| self.slots.get_mut(p)) {
            Some(prev_node) => prev_node.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Unlink and return an entity; `None` if the handle is stale
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let node = self.slots.remove(id)?;

        match node.prev.and_then(|p| self.slots.get_mut(p)) {
            Some(prev_node) => prev_node.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.slots.get_mut(n)) {
            Some(next_node) => next_node.prev = node.prev,
            None => self.tail = node.prev,
        }

        Some(node.entity)
    }

    /// Mark an entity dead without unlinking it
    ///
    /// Returns whether this call changed the entity from alive to dead.
    /// Repeated calls and stale handles are no-ops.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        self.get_mut(id).is_some_and(Entity::kill)
    }

    /// Unlink every entity whose `alive` flag is cleared
    ///
    /// Returns the number of entities removed.
    pub fn remove_dead(&mut self) -> usize {
        let mut removed = 0;
        self.for_each_removable(|_, entity| {
            if entity.alive {
                Retain::Keep
            } else {
                removed += 1;
                Retain::Remove
            }
        });
        removed
    }

    /// Visit every entity in order, removing those the visitor rejects
    ///
    /// The successor is captured before the visitor runs, so removing the
    /// current element never skips or revisits another one.
    pub fn for_each_removable<F>(&mut self, mut visit: F)
    where
        F: FnMut(EntityId, &mut Entity) -> Retain,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let Some(node) = self.slots.get_mut(id) else {
                break;
            };
            cursor = node.next;
            if visit(id, &mut node.entity) == Retain::Remove {
                self.remove(id);
            }
        }
    }

    /// Visit every entity mutably in order
    pub fn for_each_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(EntityId, &mut Entity),
    {
        self.for_each_removable(|id, entity| {
            visit(id, entity);
            Retain::Keep
        });
    }

    /// Borrow an entity
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id).map(|node| &node.entity)
    }

    /// Mutably borrow an entity
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(id).map(|node| &mut node.entity)
    }

    /// Whether the handle still refers to a stored entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(id)
    }

    /// Number of stored entities, dead-but-unremoved included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry holds no entities
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// First entity in traversal order
    pub fn first(&self) -> Option<EntityId> {
        self.head
    }

    /// Successor of `id` in traversal order
    pub fn next_of(&self, id: EntityId) -> Option<EntityId> {
        self.slots.get(id).and_then(|node| node.next)
    }

    /// Iterate entities in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            registry: self,
            cursor: self.head,
        }
    }

    /// Handles in insertion order
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Drop every entity; outstanding handles become stale
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }
}

/// Ordered iterator over an [`EntityRegistry`]
pub struct Iter<'a> {
    registry: &'a EntityRegistry,
    cursor: Option<EntityId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (EntityId, &'a Entity);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.registry.slots.get(id)?;
        self.cursor = node.next;
        Some((id, &node.entity))
    }
}

impl<'a> IntoIterator for &'a EntityRegistry {
    type Item = (EntityId, &'a Entity);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
