//! Route and result types.

use chrono::NaiveDate;
use fr_core::Event;
use serde::{Deserialize, Serialize};

/// Route desirability.  Higher is better.
pub type Score = i64;

// ── Route ─────────────────────────────────────────────────────────────────────

/// One day's itinerary: a non-empty, pairwise conflict-free set of events
/// in ascending start order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub date:   NaiveDate,
    pub events: Vec<Event>,
    pub score:  Score,
}

impl Route {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// `true` if no two events of the route overlap.
    pub fn is_conflict_free(&self) -> bool {
        self.events.iter().enumerate().all(|(i, a)| {
            self.events[i + 1..].iter().all(|b| !a.conflicts_with(b))
        })
    }
}

// ── RankedResult ──────────────────────────────────────────────────────────────

/// The best routes across all days, by descending score.
///
/// Serialises as a bare JSON array of routes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult {
    routes: Vec<Route>,
}

impl RankedResult {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn best(&self) -> Option<&Route> {
        self.routes.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

// ── Per-day reporting ─────────────────────────────────────────────────────────

/// What the search found on one day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DaySummary {
    pub date:       NaiveDate,
    /// Events on the day (before any truncation).
    pub events:     usize,
    /// Conflict-free subsets enumerated.
    pub candidates: usize,
    /// `true` if a search limit cut the day short under
    /// `OverflowPolicy::Truncate`.
    pub truncated:  bool,
    pub best_score: Option<Score>,
}

/// Output of [`generate_routes`][crate::generate_routes].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutePlan {
    pub ranked: RankedResult,
    /// One entry per day in the selection, ascending by date.
    pub days:   Vec<DaySummary>,
}

impl RoutePlan {
    pub fn total_candidates(&self) -> usize {
        self.days.iter().map(|d| d.candidates).sum()
    }

    pub fn is_truncated(&self) -> bool {
        self.days.iter().any(|d| d.truncated)
    }
}
