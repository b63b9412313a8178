// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener bookkeeping: FIFO registration with exact removal by id.

use alloc::vec::Vec;

use crate::pointer::PointerKind;

/// Scope a listener is attached to: a specific node or the global window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target<K> {
    /// The global window (document-level) scope.
    Window,
    /// A specific node, addressed by the application's key type.
    Node(K),
}

/// Handle for a registered listener.
///
/// Ids are allocated from a monotonically increasing counter and are never
/// reused, so a stale id can never alias a later registration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone, Debug)]
struct Registration<K> {
    id: ListenerId,
    target: Target<K>,
    kind: PointerKind,
}

/// Registry of `(target, kind)` listener subscriptions.
///
/// The table preserves registration order (FIFO) for iteration and removes
/// entries exactly by [`ListenerId`], so releasing one binding's listeners
/// never affects registrations made by other bindings, including other
/// listeners on the same target and kind.
#[derive(Clone, Debug)]
pub struct ListenerTable<K> {
    entries: Vec<Registration<K>>,
    next_id: u64,
}

impl<K> Default for ListenerTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K> ListenerTable<K> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Copy + PartialEq> ListenerTable<K> {
    /// Registers a listener for `kind` events on `target`.
    ///
    /// Duplicate `(target, kind)` registrations are allowed and stay
    /// distinct; each gets its own id.
    pub fn subscribe(&mut self, target: Target<K>, kind: PointerKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Registration { id, target, kind });
        id
    }

    /// Removes the registration with the given id.
    ///
    /// Returns `false` (and changes nothing) when the id is stale.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() != before
    }

    /// Returns `true` if the id refers to a live registration.
    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    /// Number of live registrations for an exact `(target, kind)` pair.
    #[must_use]
    pub fn count_for(&self, target: Target<K>, kind: PointerKind) -> usize {
        self.entries
            .iter()
            .filter(|r| r.target == target && r.kind == kind)
            .count()
    }

    /// Returns `true` if at least one listener is registered for the exact
    /// `(target, kind)` pair.
    #[must_use]
    pub fn is_subscribed(&self, target: Target<K>, kind: PointerKind) -> bool {
        self.count_for(target, kind) > 0
    }

    /// Iterates live registrations in FIFO (registration) order.
    pub fn iter(&self) -> impl Iterator<Item = (ListenerId, Target<K>, PointerKind)> + '_ {
        self.entries.iter().map(|r| (r.id, r.target, r.kind))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn subscribe_and_count() {
        let mut table: ListenerTable<u32> = ListenerTable::new();
        table.subscribe(Target::Node(1), PointerKind::MouseDown);
        table.subscribe(Target::Node(1), PointerKind::TouchStart);
        table.subscribe(Target::Window, PointerKind::MouseMove);

        assert_eq!(table.len(), 3);
        assert_eq!(table.count_for(Target::Node(1), PointerKind::MouseDown), 1);
        assert_eq!(table.count_for(Target::Node(2), PointerKind::MouseDown), 0);
        assert!(table.is_subscribed(Target::Window, PointerKind::MouseMove));
        assert!(!table.is_subscribed(Target::Window, PointerKind::MouseUp));
    }

    #[test]
    fn unsubscribe_is_exact() {
        let mut table: ListenerTable<u32> = ListenerTable::new();
        let a = table.subscribe(Target::Node(1), PointerKind::MouseDown);
        let b = table.subscribe(Target::Node(1), PointerKind::MouseDown);

        assert!(table.unsubscribe(a));
        // The duplicate registration with its own id survives.
        assert!(table.contains(b));
        assert_eq!(table.count_for(Target::Node(1), PointerKind::MouseDown), 1);

        assert!(!table.unsubscribe(a));
        assert!(table.unsubscribe(b));
        assert!(table.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut table: ListenerTable<u32> = ListenerTable::new();
        let a = table.subscribe(Target::Window, PointerKind::MouseUp);
        table.unsubscribe(a);
        let b = table.subscribe(Target::Window, PointerKind::MouseUp);
        assert_ne!(a, b);
        assert!(!table.contains(a));
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut table: ListenerTable<u32> = ListenerTable::new();
        let a = table.subscribe(Target::Node(1), PointerKind::MouseDown);
        let b = table.subscribe(Target::Window, PointerKind::MouseMove);
        let c = table.subscribe(Target::Node(2), PointerKind::TouchStart);
        table.unsubscribe(b);
        let d = table.subscribe(Target::Window, PointerKind::MouseUp);

        let order: Vec<ListenerId> = table.iter().map(|(id, _, _)| id).collect();
        assert_eq!(order, [a, c, d]);
    }
}
