//! The `RegistrationStore` trait and its in-memory implementation.

use std::collections::BTreeSet;

use async_trait::async_trait;
use fr_core::{EventId, UserId};
use parking_lot::Mutex;

use crate::{RegistrationError, RegistrationResult};

/// Persistent `(user, event)` registrations.
///
/// Implementations must be safe to call concurrently: the coordinator issues
/// every registration of a selection at once.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Register `user` for `event`.
    ///
    /// Fails with [`RegistrationError::AlreadyRegistered`] if the pair is
    /// already present.
    async fn register(&self, user: UserId, event: EventId) -> RegistrationResult<()>;

    /// Remove a registration.  Returns `false` if there was none.
    async fn cancel(&self, user: UserId, event: EventId) -> RegistrationResult<bool>;

    /// Events `user` is registered for, ascending by id.
    async fn registrations_for(&self, user: UserId) -> RegistrationResult<Vec<EventId>>;

    /// Drop every registration for `event` (the event was deleted).
    /// Returns the number removed.
    async fn cancel_event(&self, event: EventId) -> RegistrationResult<usize>;

    /// Total registrations across all users.
    async fn count(&self) -> RegistrationResult<usize>;
}

// ── MemoryRegistrationStore ───────────────────────────────────────────────────

/// Registrations held in a `BTreeSet` behind a mutex.
///
/// Optionally restricted to a fixed set of event ids, in which case
/// registering for anything else fails with
/// [`RegistrationError::UnknownEvent`].
#[derive(Debug, Default)]
pub struct MemoryRegistrationStore {
    entries: Mutex<BTreeSet<(UserId, EventId)>>,
    known:   Option<BTreeSet<EventId>>,
}

impl MemoryRegistrationStore {
    /// An empty store accepting any event id.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store that only accepts the given event ids.
    pub fn with_known_events<I: IntoIterator<Item = EventId>>(events: I) -> Self {
        Self {
            entries: Mutex::new(BTreeSet::new()),
            known:   Some(events.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn contains(&self, user: UserId, event: EventId) -> bool {
        self.entries.lock().contains(&(user, event))
    }
}

#[async_trait]
impl RegistrationStore for MemoryRegistrationStore {
    async fn register(&self, user: UserId, event: EventId) -> RegistrationResult<()> {
        if let Some(known) = &self.known {
            if !known.contains(&event) {
                return Err(RegistrationError::UnknownEvent(event));
            }
        }
        if self.entries.lock().insert((user, event)) {
            Ok(())
        } else {
            Err(RegistrationError::AlreadyRegistered { user, event })
        }
    }

    async fn cancel(&self, user: UserId, event: EventId) -> RegistrationResult<bool> {
        Ok(self.entries.lock().remove(&(user, event)))
    }

    async fn registrations_for(&self, user: UserId) -> RegistrationResult<Vec<EventId>> {
        let entries = self.entries.lock();
        Ok(entries
            .range((user, EventId(u32::MIN))..=(user, EventId(u32::MAX)))
            .map(|&(_, event)| event)
            .collect())
    }

    async fn cancel_event(&self, event: EventId) -> RegistrationResult<usize> {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|&(_, e)| e != event);
        Ok(before - entries.len())
    }

    async fn count(&self) -> RegistrationResult<usize> {
        Ok(self.len())
    }
}
