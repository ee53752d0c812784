//! Error types for fr-register.

use fr_core::{EventId, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{user} is already registered for {event}")]
    AlreadyRegistered { user: UserId, event: EventId },

    #[error("unknown event {0}")]
    UnknownEvent(EventId),

    #[error("registration store error: {0}")]
    Store(String),

    #[error("blocking task failed: {0}")]
    Join(String),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, RegistrationError>`.
pub type RegistrationResult<T> = Result<T, RegistrationError>;
