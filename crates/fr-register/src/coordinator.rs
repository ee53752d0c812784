//! Registration Side-Effect Coordinator.
//!
//! Issues one `register(user, event)` call per id of a selection, all at
//! once, and records what happened to each.  The selection is taken as
//! given: duplicates are registered twice (the second call reports
//! [`RegistrationOutcome::AlreadyRegistered`]) and no id is skipped because
//! it did not make it into a route.  Calls are neither retried nor
//! cancelled.

use std::fmt;

use fr_core::{EventId, UserId};
use futures::future::join_all;
use tracing::{debug, warn};

use crate::{RegistrationError, RegistrationResult, RegistrationStore};

// ── RegistrationOutcome ───────────────────────────────────────────────────────

/// Result of one registration call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    AlreadyRegistered,
    /// The store rejected the call; the message is the store's error.
    Failed(String),
}

impl RegistrationOutcome {
    /// `true` unless the call failed.  An existing registration counts as
    /// success: the user ends up registered either way.
    pub fn is_ok(&self) -> bool {
        !matches!(self, RegistrationOutcome::Failed(_))
    }
}

impl From<RegistrationResult<()>> for RegistrationOutcome {
    fn from(result: RegistrationResult<()>) -> Self {
        match result {
            Ok(()) => RegistrationOutcome::Registered,
            Err(RegistrationError::AlreadyRegistered { .. }) => RegistrationOutcome::AlreadyRegistered,
            Err(e) => RegistrationOutcome::Failed(e.to_string()),
        }
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationOutcome::Registered => f.write_str("registered"),
            RegistrationOutcome::AlreadyRegistered => f.write_str("already registered"),
            RegistrationOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ── RegistrationReport ────────────────────────────────────────────────────────

/// Outcomes of one coordinator run, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    pub outcomes: Vec<(EventId, RegistrationOutcome)>,
}

impl RegistrationReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn registered(&self) -> usize {
        self.count(|o| *o == RegistrationOutcome::Registered)
    }

    pub fn already_registered(&self) -> usize {
        self.count(|o| *o == RegistrationOutcome::AlreadyRegistered)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| !o.is_ok())
    }

    /// The failed calls and their reasons.
    pub fn failures(&self) -> impl Iterator<Item = (EventId, &str)> {
        self.outcomes.iter().filter_map(|(id, o)| match o {
            RegistrationOutcome::Failed(reason) => Some((*id, reason.as_str())),
            _ => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(EventId, RegistrationOutcome)> {
        self.outcomes.iter()
    }

    fn count(&self, pred: impl Fn(&RegistrationOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

// ── RegistrationCoordinator ───────────────────────────────────────────────────

/// Fires registrations against a borrowed [`RegistrationStore`].
pub struct RegistrationCoordinator<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RegistrationStore + ?Sized> RegistrationCoordinator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register `user` for every id in `selection`, concurrently.
    ///
    /// Never fails as a whole: each call's result is captured in the report
    /// and failures are logged.
    pub async fn register_all(&self, user: UserId, selection: &[EventId]) -> RegistrationReport {
        let calls = selection.iter().map(|&event| async move {
            let outcome = RegistrationOutcome::from(self.store.register(user, event).await);
            if let RegistrationOutcome::Failed(reason) = &outcome {
                warn!(%user, %event, %reason, "registration failed");
            }
            (event, outcome)
        });

        let report = RegistrationReport { outcomes: join_all(calls).await };
        debug!(
            %user,
            registered = report.registered(),
            already = report.already_registered(),
            failed = report.failed(),
            "registrations issued"
        );
        report
    }
}
