//! Time-of-day model.
//!
//! # Design
//!
//! All schedule arithmetic happens on integer minutes since midnight:
//!
//!   start = hours * 60 + minutes
//!   end   = start + duration
//!
//! `end` may run past 1440 for events that finish after midnight; the event
//! still belongs to the calendar date it starts on.  Integer minutes keep
//! conflict tests and gap computations exact.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A wall-clock start time with minute resolution, stored as minutes since
/// midnight (`0..1440`).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from hour and minute.  Returns `None` outside `00:00..=23:59`.
    pub fn from_hm(hour: u32, minute: u32) -> Option<ClockTime> {
        if hour < 24 && minute < 60 {
            Some(ClockTime((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl FromStr for ClockTime {
    type Err = chrono::ParseError;

    /// Parse an `HH:MM` string.
    fn from_str(s: &str) -> Result<ClockTime, Self::Err> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")?;
        Ok(ClockTime((t.hour() * 60 + t.minute()) as u16))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// ── Interval ──────────────────────────────────────────────────────────────────

/// Half-open `[start, end)` span in minutes since midnight.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Interval {
    pub start: u32,
    pub end:   u32,
}

impl Interval {
    /// Interval beginning at `start` and lasting `duration_min` minutes.
    /// The end saturates at `u32::MAX`, so it never precedes the start.
    #[inline]
    pub fn new(start: ClockTime, duration_min: u32) -> Interval {
        let start = start.minutes();
        Interval { start, end: start.saturating_add(duration_min) }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// `true` if the two spans overlap.  Touching endpoints
    /// (`a.end == b.start`) do not conflict.
    #[inline]
    pub fn conflicts_with(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Idle minutes between the end of `self` and the start of `next`.
    /// Negative when the two overlap.
    #[inline]
    pub fn gap_to(&self, next: &Interval) -> i64 {
        next.start as i64 - self.end as i64
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
