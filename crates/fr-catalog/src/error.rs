use fr_core::{EventId, ParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalogue parse error: {0}")]
    Parse(String),

    #[error("invalid event: {0}")]
    Invalid(#[from] ParseError),

    #[error("{0} not found in catalogue")]
    UnknownEvent(EventId),

    #[error("{0} already present in catalogue")]
    DuplicateEvent(EventId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
