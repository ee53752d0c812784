//! `RoutePlanner` — one planning request from selection to outcome.

use fr_catalog::EventCatalog;
use fr_core::{Event, EventId, EventRecord, UserId};
use fr_register::{RegistrationCoordinator, RegistrationReport, RegistrationStore};
use fr_route::{
    generate_routes, DaySummary, PlannerConfig, RankedResult, RouteError, RoutePlan, RouteResult,
};
use tokio::task::{self, JoinError};
use tracing::{info, warn};

use crate::{PlanObserver, PlannerResult};

// ── PlanOutcome ───────────────────────────────────────────────────────────────

/// Everything one [`RoutePlanner::plan`] call produced.
#[derive(Debug)]
pub struct PlanOutcome {
    /// The ranked routes, or the route generator's error.  A search task
    /// that panicked shows up here as `RouteError::SearchFailed`.
    pub routes:        RouteResult<RankedResult>,
    /// One outcome per id of the selection, in selection order.
    pub registrations: RegistrationReport,
    /// Per-day search summaries, ascending by date.  Empty if route
    /// generation failed.
    pub days:          Vec<DaySummary>,
}

impl PlanOutcome {
    fn empty() -> Self {
        Self {
            routes:        Ok(RankedResult::default()),
            registrations: RegistrationReport::default(),
            days:          Vec::new(),
        }
    }
}

/// Admin statistics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlannerStats {
    pub events:        usize,
    pub days:          usize,
    pub registrations: usize,
}

/// Split a finished search task into the ranking and its day summaries.
/// A task that did not complete becomes [`RouteError::SearchFailed`].
pub(crate) fn settle_search(
    search: Result<RouteResult<RoutePlan>, JoinError>,
) -> (RouteResult<RankedResult>, Vec<DaySummary>) {
    match search {
        Ok(Ok(plan)) => (Ok(plan.ranked), plan.days),
        Ok(Err(e)) => (Err(e), Vec::new()),
        Err(e) => (Err(RouteError::SearchFailed(e.to_string())), Vec::new()),
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Owns the event catalogue and a registration store.  Build with
/// [`PlannerBuilder`][crate::PlannerBuilder].
pub struct RoutePlanner<S: RegistrationStore> {
    pub(crate) catalog: EventCatalog,
    pub(crate) store:   S,
    pub(crate) config:  PlannerConfig,
}

impl<S: RegistrationStore> RoutePlanner<S> {
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan routes for `user` over `selection` and register the user for
    /// every selected event.
    ///
    /// An empty selection returns an empty outcome without touching the
    /// store.  Every id must be in the catalogue; otherwise the call fails
    /// with [`PlannerError::Catalog`][crate::PlannerError::Catalog] before any registration is issued.
    /// Duplicate ids count once for routing but are each registered.
    pub async fn plan<O>(
        &self,
        user:      UserId,
        selection: &[EventId],
        observer:  &mut O,
    ) -> PlannerResult<PlanOutcome>
    where
        O: PlanObserver + ?Sized,
    {
        if selection.is_empty() {
            info!(%user, "empty selection, nothing to plan");
            observer.on_ranked(&RankedResult::default());
            return Ok(PlanOutcome::empty());
        }

        let events = self.catalog.resolve(selection)?;
        let config = self.config;

        let search = task::spawn_blocking(move || generate_routes(&events, &config));
        let coordinator = RegistrationCoordinator::new(&self.store);
        let (search, registrations) =
            tokio::join!(search, coordinator.register_all(user, selection));

        let (routes, days) = settle_search(search);
        if let Err(e) = &routes {
            warn!(%user, error = %e, "route generation failed");
        }

        for day in &days {
            observer.on_day_searched(day);
        }
        if let Ok(ranked) = &routes {
            observer.on_ranked(ranked);
        }
        for (event, outcome) in registrations.iter() {
            observer.on_registration(*event, outcome);
        }

        info!(
            %user,
            selected = selection.len(),
            days = days.len(),
            routes = routes.as_ref().map_or(0, RankedResult::len),
            best_score = ?routes.as_ref().ok().and_then(|r| r.best()).map(|r| r.score),
            registered = registrations.registered(),
            failed_registrations = registrations.failed(),
            "plan complete"
        );

        Ok(PlanOutcome { routes, registrations, days })
    }

    /// Events `user` is registered for, in date and start order.  Ids no
    /// longer in the catalogue are skipped.
    pub async fn registrations_for(&self, user: UserId) -> PlannerResult<Vec<&Event>> {
        let ids = self.store.registrations_for(user).await?;
        let mut events: Vec<&Event> = ids.into_iter().filter_map(|id| self.catalog.get(id)).collect();
        events.sort_by_key(|e| (e.date, e.start, e.id));
        Ok(events)
    }

    /// Cancel one registration.  Returns `false` if there was none.
    pub async fn cancel(&self, user: UserId, event: EventId) -> PlannerResult<bool> {
        Ok(self.store.cancel(user, event).await?)
    }

    /// Add an event to the catalogue.
    pub fn add_event(&mut self, record: EventRecord) -> PlannerResult<&Event> {
        Ok(self.catalog.insert(record)?)
    }

    /// Delete an event and every registration for it.
    pub async fn remove_event(&mut self, id: EventId) -> PlannerResult<Event> {
        let event = self.catalog.remove(id)?;
        let dropped = self.store.cancel_event(id).await?;
        info!(event = %id, registrations = dropped, "event removed");
        Ok(event)
    }

    pub async fn stats(&self) -> PlannerResult<PlannerStats> {
        let catalog = self.catalog.stats();
        Ok(PlannerStats {
            events:        catalog.events,
            days:          catalog.days,
            registrations: self.store.count().await?,
        })
    }
}
