//! `fr-core` — foundational types for the `festival_routes` planner.
//!
//! This crate is a dependency of every other `fr-*` crate.  It has no `fr-*`
//! dependencies and only a handful of external ones (`chrono`, `serde`,
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `EventId`, `UserId`                                       |
//! | [`time`]    | `ClockTime` (minutes since midnight), `Interval`          |
//! | [`event`]   | `EventRecord` (wire shape), `Event` (validated)           |
//! | [`error`]   | `ParseError`, `ParseResult`                               |
//!
//! # Wire shape
//!
//! `Event` serialises through `EventRecord`, so JSON produced by this crate
//! is exactly what the CRUD API returns:
//!
//! ```json
//! {"id": 7, "name": "Opening", "type": "concert", "location": "Main stage",
//!  "date": "2025-07-12", "start_time": "18:30", "duration": 90}
//! ```

pub mod error;
pub mod event;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ParseError, ParseResult};
pub use event::{Event, EventRecord, MAX_DURATION_MIN};
pub use ids::{EventId, UserId};
pub use time::{ClockTime, Interval};
