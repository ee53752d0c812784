//! Event validation errors.
//!
//! Every variant carries the id of the offending event so a caller loading a
//! batch can decide per event whether to drop it or abort the whole batch.

use thiserror::Error;

use crate::EventId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{id}: invalid start time {value:?}, expected HH:MM")]
    StartTime { id: EventId, value: String },

    #[error("{id}: invalid date {value:?}, expected YYYY-MM-DD")]
    Date { id: EventId, value: String },

    #[error("{id}: duration must be between 1 and {max} minutes, got {minutes}", max = crate::event::MAX_DURATION_MIN)]
    Duration { id: EventId, minutes: i64 },

    #[error("{id}: required field `{field}` is empty")]
    MissingField { id: EventId, field: &'static str },
}

impl ParseError {
    /// The event the error is scoped to.
    pub fn event_id(&self) -> EventId {
        match self {
            ParseError::StartTime { id, .. }
            | ParseError::Date { id, .. }
            | ParseError::Duration { id, .. }
            | ParseError::MissingField { id, .. } => *id,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
