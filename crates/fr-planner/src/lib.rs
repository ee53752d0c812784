//! `fr-planner` — ties the catalogue, route generator and registration
//! store together.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`builder`]  | `PlannerBuilder` fluent constructor                    |
//! | [`planner`]  | `RoutePlanner`, `PlanOutcome`, `PlannerStats`          |
//! | [`observer`] | `PlanObserver` trait, `NoopObserver`                   |
//! | [`error`]    | `PlannerError`, `PlannerResult<T>`                     |
//!
//! # One planning request
//!
//! ```text
//! selection ──► EventCatalog::resolve ──┬──► spawn_blocking(generate_routes) ──► routes
//!                                       └──► RegistrationCoordinator        ──► registrations
//! ```
//!
//! The two branches run concurrently and neither can hide the other's
//! result: a search-space error still comes back with the registration
//! outcomes, and failed registrations never suppress the routes.
//!
//! # Example
//!
//! ```rust,ignore
//! let planner = PlannerBuilder::new(catalog, MemoryRegistrationStore::new())
//!     .config(config)
//!     .build()?;
//! let outcome = planner.plan(UserId(1), &selection, &mut NoopObserver).await?;
//! for route in outcome.routes? { ... }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;


pub use builder::PlannerBuilder;
pub use error::{PlannerError, PlannerResult};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{PlanOutcome, PlannerStats, RoutePlanner};
