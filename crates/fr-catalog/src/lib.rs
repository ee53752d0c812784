//! `fr-catalog` — the set of events a user can choose from.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`catalog`] | `EventCatalog`, `InvalidEventPolicy`, `CatalogStats`       |
//! | [`filter`]  | `EventFilter` (text search + category)                     |
//! | [`loader`]  | `load_records_csv`, `load_records_reader`, `load_records_json` |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                         |
//!
//! The catalogue is the boundary between the external event store and the
//! route generator: loaders produce raw `EventRecord`s, the catalogue
//! validates them into `Event`s, and `EventCatalog::resolve` turns a user's
//! selection of ids into the event list handed to `fr-route`.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;


pub use catalog::{CatalogStats, EventCatalog, InvalidEventPolicy};
pub use error::{CatalogError, CatalogResult};
pub use filter::EventFilter;
pub use loader::{load_records_csv, load_records_json, load_records_reader};
