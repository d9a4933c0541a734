//! Validation listeners
//!
//! Listeners are registered by handle and removed by identity. Notification
//! iterates over a snapshot of the list, so a listener may add or remove
//! listeners (itself included) while being notified.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::foundation::SharedRule;
use crate::rule_set::{insert_unique, remove_by_identity};

/// Which message slot a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// User-supplied rules, shown under the field.
    Left,
    /// Host-internal checks (such as a character limit), shown beside the
    /// left slot.
    Right,
}

/// Observer of a subject's validation outcome.
pub trait ValidationListener<V: ?Sized>: Send + Sync {
    /// Called once per `validate` call when both channels pass.
    fn on_success(&self, subject: &str);

    /// Called for every failing rule of either channel, in order (left
    /// channel first).
    fn on_failure(&self, subject: &str, channel: Channel, rule: &SharedRule<V>);
}

/// A listener shared by reference. Identity is the allocation.
pub type SharedListener<V> = Arc<dyn ValidationListener<V>>;

/// Ordered, identity-deduplicated listener list.
pub struct ListenerRegistry<V: ?Sized> {
    listeners: RwLock<Vec<SharedListener<V>>>,
}

impl<V: ?Sized> ListenerRegistry<V> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Registers a listener. Returns `false` if it is already registered.
    pub fn add(&self, listener: SharedListener<V>) -> bool {
        insert_unique(&mut *self.listeners.write(), listener)
    }

    /// Unregisters a listener by identity. Returns `false` if absent.
    pub fn remove(&self, listener: &SharedListener<V>) -> bool {
        remove_by_identity(&mut *self.listeners.write(), listener)
    }

    /// Unregisters every listener.
    pub fn clear(&self) {
        self.listeners.write().clear();
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    /// `true` if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    /// The listeners at this moment, in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SharedListener<V>> {
        self.listeners.read().clone()
    }

    pub(crate) fn notify_failure(&self, subject: &str, channel: Channel, rule: &SharedRule<V>) {
        for listener in &self.snapshot() {
            listener.on_failure(subject, channel, rule);
        }
    }

    pub(crate) fn notify_success(&self, subject: &str) {
        for listener in &self.snapshot() {
            listener.on_success(subject);
        }
    }
}

impl<V: ?Sized> Default for ListenerRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> Clone for ListenerRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            listeners: RwLock::new(self.snapshot()),
        }
    }
}

impl<V: ?Sized> fmt::Debug for ListenerRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}
