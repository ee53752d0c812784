//! Planner observer trait for progress reporting and data collection.

use fr_core::EventId;
use fr_register::RegistrationOutcome;
use fr_route::{DaySummary, RankedResult};

/// Callbacks invoked by [`RoutePlanner::plan`][crate::RoutePlanner::plan]
/// once both branches of a request have finished.
///
/// All methods have default no-op implementations.  Day callbacks arrive in
/// ascending date order even when days were searched in parallel.
pub trait PlanObserver {
    /// Called once per day of the selection after its search completed.
    fn on_day_searched(&mut self, _day: &DaySummary) {}

    /// Called with the final ranking.  Not called if route generation failed.
    fn on_ranked(&mut self, _result: &RankedResult) {}

    /// Called once per registration call, in selection order.
    fn on_registration(&mut self, _event: EventId, _outcome: &RegistrationOutcome) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
