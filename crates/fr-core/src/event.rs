//! Event records: the raw wire shape and its validated form.
//!
//! `EventRecord` mirrors one row of the external event store exactly
//! (`start_time` as an `"HH:MM"` string, `duration` as a signed integer).
//! `Event` is what the route generator works with: the date and start time
//! are parsed and the duration is known to be positive.
//!
//! Conversion is `Event::try_from(record)`; serde goes through the same
//! path, so deserialising an `Event` validates it and serialising one yields
//! the wire shape again.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ClockTime, EventId, Interval, ParseError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest accepted event, in minutes (one week).
pub const MAX_DURATION_MIN: u32 = 7 * 24 * 60;

// ── EventRecord ───────────────────────────────────────────────────────────────

/// One event as supplied by the event store or the CRUD API.
///
/// Unknown fields (`created_by`, `created_at`, …) are ignored on input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id:          EventId,
    pub name:        String,
    /// Category tag, `type` on the wire.
    #[serde(rename = "type")]
    pub kind:        String,
    pub location:    String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date:        String,
    /// Start time, `HH:MM`.
    pub start_time:  String,
    /// Duration in minutes.
    pub duration:    i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// A validated, immutable event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct Event {
    pub id:           EventId,
    pub name:         String,
    pub kind:         String,
    pub location:     String,
    pub date:         NaiveDate,
    pub start:        ClockTime,
    /// Always in `1..=MAX_DURATION_MIN`.
    pub duration_min: u32,
    pub description:  Option<String>,
}

impl Event {
    /// Half-open `[start, start + duration)` span of the event.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.duration_min)
    }

    /// Minutes since midnight at which the event ends.
    #[inline]
    pub fn end_minutes(&self) -> u32 {
        self.interval().end
    }

    /// `true` if the two events overlap in time.  Events on different dates
    /// never conflict.
    pub fn conflicts_with(&self, other: &Event) -> bool {
        self.date == other.date && self.interval().conflicts_with(&other.interval())
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = ParseError;

    fn try_from(r: EventRecord) -> Result<Event, ParseError> {
        let id = r.id;

        let date = NaiveDate::parse_from_str(r.date.trim(), DATE_FORMAT)
            .map_err(|_| ParseError::Date { id, value: r.date.clone() })?;

        let start = r
            .start_time
            .parse::<ClockTime>()
            .map_err(|_| ParseError::StartTime { id, value: r.start_time.clone() })?;

        let duration_min = u32::try_from(r.duration)
            .ok()
            .filter(|&d| d > 0 && d <= MAX_DURATION_MIN)
            .ok_or(ParseError::Duration { id, minutes: r.duration })?;

        Ok(Event {
            id,
            name: r.name,
            kind: r.kind,
            location: r.location,
            date,
            start,
            duration_min,
            description: r.description,
        })
    }
}

impl From<Event> for EventRecord {
    fn from(e: Event) -> EventRecord {
        EventRecord {
            id:          e.id,
            name:        e.name,
            kind:        e.kind,
            location:    e.location,
            date:        e.date.format(DATE_FORMAT).to_string(),
            start_time:  e.start.to_string(),
            duration:    e.duration_min as i64,
            description: e.description,
        }
    }
}
