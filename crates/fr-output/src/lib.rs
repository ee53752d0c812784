//! `fr-output` — writers for ranked route results.
//!
//! | Writer              | File          | Format                                        |
//! |---------------------|---------------|-----------------------------------------------|
//! | [`JsonRouteWriter`] | `routes.json` | One JSON array of routes per line             |
//! | [`CsvRouteWriter`]  | `routes.csv`  | One row per route stop (see [`RouteStopRow`]) |
//!
//! Both implement [`RouteWriter`] and can be driven by
//! [`PlanOutputObserver`], which implements `fr_planner::PlanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fr_output::{CsvRouteWriter, PlanOutputObserver};
//!
//! let mut obs = PlanOutputObserver::new(CsvRouteWriter::new(Path::new("./output"))?);
//! planner.plan(user, &selection, &mut obs).await?;
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvRouteWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonRouteWriter;
pub use observer::PlanOutputObserver;
pub use row::RouteStopRow;
pub use writer::RouteWriter;
