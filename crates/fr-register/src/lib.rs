//! `fr-register` — event registrations for festival_routes.
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`store`]       | [`RegistrationStore`] trait, [`MemoryRegistrationStore`]    |
//! | [`sqlite`]      | [`SqliteRegistrationStore`] (feature `sqlite`)              |
//! | [`coordinator`] | [`RegistrationCoordinator`], per-event outcomes and report  |
//! | [`error`]       | [`RegistrationError`], [`RegistrationResult`]               |
//!
//! A store holds at most one registration per `(user, event)` pair; a second
//! `register` call for the same pair fails with
//! [`RegistrationError::AlreadyRegistered`].  The coordinator fires one call
//! per selected event concurrently and records every outcome without letting
//! a failure stop the others.

pub mod coordinator;
pub mod error;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use coordinator::{RegistrationCoordinator, RegistrationOutcome, RegistrationReport};
pub use error::{RegistrationError, RegistrationResult};
pub use store::{MemoryRegistrationStore, RegistrationStore};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRegistrationStore;
