//! Error types for fr-planner.

use fr_catalog::CatalogError;
use fr_register::RegistrationError;
use fr_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("catalogue error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),
}

/// Alias for `Result<T, PlannerError>`.
pub type PlannerResult<T> = Result<T, PlannerError>;
