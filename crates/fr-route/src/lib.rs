//! `fr-route` — the conflict-free itinerary generator.
//!
//! # Pipeline
//!
//! ```text
//! selected events
//!   ① group      — bucket by calendar date          (BTreeMap, ascending)
//!   ② sort       — each day by (start, id)
//!   ③ enumerate  — every non-empty conflict-free subset, per day
//!                  (parallel across days with the `parallel` feature)
//!   ④ score      — 100 per event + 10 per 15–60 min gap
//!   ⑤ rank       — bounded top-K per day, merged in date order
//! ```
//!
//! Everything here is pure: no I/O, no shared state, no state kept between
//! calls.  [`generate_routes`] is the single entry point; the stage modules
//! are public for callers that want one stage on its own.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`group`]     | `group_by_date`, `sort_day`, `DayBuckets`                |
//! | [`enumerate`] | `CombinationEnumerator`, `Enumeration`                   |
//! | [`score`]     | `score_route`                                            |
//! | [`rank`]      | `Candidate`, `TopK`                                      |
//! | [`route`]     | `Route`, `RankedResult`, `DaySummary`, `RoutePlan`       |
//! | [`config`]    | `PlannerConfig`, `ScoreWeights`, `SearchLimits`, `OverflowPolicy` |
//! | [`generate`]  | `generate_routes`                                        |
//! | [`error`]     | `RouteError`, `SearchLimit`, `RouteResult<T>`            |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                           |
//! |------------|--------------------------------------------------|
//! | `parallel` | Searches days on Rayon's thread pool.            |

pub mod config;
pub mod enumerate;
pub mod error;
pub mod generate;
pub mod group;
pub mod rank;
pub mod route;
pub mod score;

#[cfg(test)]
mod tests;

pub use config::{OverflowPolicy, PlannerConfig, ScoreWeights, SearchLimits};
pub use enumerate::{CombinationEnumerator, Enumeration, MAX_DAY_EVENTS};
pub use error::{RouteError, RouteResult, SearchLimit};
pub use generate::generate_routes;
pub use group::{group_by_date, sort_day, DayBuckets};
pub use rank::{Candidate, TopK};
pub use route::{DaySummary, RankedResult, Route, RoutePlan, Score};
pub use score::score_route;
