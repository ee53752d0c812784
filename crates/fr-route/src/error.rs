use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Which search bound a day ran into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchLimit {
    /// The day holds more events than `max_events_per_day`.
    Events { count: usize, max: usize },
    /// The day yields more conflict-free subsets than `max_candidates`.
    Candidates { max: usize },
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchLimit::Events { count, max } => {
                write!(f, "{count} events exceed the limit of {max} per day")
            }
            SearchLimit::Candidates { max } => {
                write!(f, "more than {max} candidate routes")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("search space too large on {date}: {limit}")]
    SearchSpaceExceeded { date: NaiveDate, limit: SearchLimit },

    #[error("planner configuration error: {0}")]
    Config(String),

    /// The search did not run to completion (for example its task panicked).
    #[error("route search failed: {0}")]
    SearchFailed(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
