//! `generate_routes` — the full pipeline over one selection.

use chrono::NaiveDate;
use fr_core::{Event, Interval};
use tracing::{debug, warn};

use crate::{
    group_by_date, sort_day, CombinationEnumerator, DaySummary, OverflowPolicy, PlannerConfig,
    RankedResult, Route, RouteError, RoutePlan, RouteResult, SearchLimit, TopK, score_route,
};

/// Result of searching one day: its summary and its best `top_k` candidates.
struct DaySearch {
    summary: DaySummary,
    top:     TopK,
}

/// Group, enumerate, score and rank `events` (already deduplicated by id).
///
/// Returns the `config.top_k` best routes across all days plus a per-day
/// summary.  An empty selection gives an empty plan.  If any day exceeds a
/// search limit under [`OverflowPolicy::Reject`], the earliest such day's
/// [`RouteError::SearchSpaceExceeded`] is returned.
pub fn generate_routes(events: &[Event], config: &PlannerConfig) -> RouteResult<RoutePlan> {
    config.validate()?;

    let mut days = group_by_date(events);
    for day in days.values_mut() {
        sort_day(day);
    }

    let searched = search_days(&days, config);

    // Merge in date order so the result is independent of search scheduling.
    let mut top = TopK::new(config.top_k);
    let mut summaries = Vec::with_capacity(searched.len());
    for result in searched {
        let day = result?;
        summaries.push(day.summary);
        top.merge(day.top);
    }

    let routes: Vec<Route> = top
        .into_vec()
        .into_iter()
        .map(|c| {
            let day = &days[&c.date];
            Route {
                date:   c.date,
                events: c.members.iter().map(|&i| day[i].clone()).collect(),
                score:  c.score,
            }
        })
        .collect();

    debug_assert!(routes.iter().all(Route::is_conflict_free));

    Ok(RoutePlan { ranked: RankedResult::new(routes), days: summaries })
}

#[cfg(not(feature = "parallel"))]
fn search_days(
    days:   &crate::DayBuckets<'_>,
    config: &PlannerConfig,
) -> Vec<RouteResult<DaySearch>> {
    days.iter()
        .map(|(&date, day)| search_day(date, day, config))
        .collect()
}

#[cfg(feature = "parallel")]
fn search_days(
    days:   &crate::DayBuckets<'_>,
    config: &PlannerConfig,
) -> Vec<RouteResult<DaySearch>> {
    use rayon::prelude::*;

    let ordered: Vec<_> = days.iter().collect();
    ordered
        .par_iter()
        .map(|&(&date, day)| search_day(date, day, config))
        .collect()
}

/// Enumerate and rank one sorted day.
fn search_day(date: NaiveDate, day: &[&Event], config: &PlannerConfig) -> RouteResult<DaySearch> {
    let limits = &config.limits;
    let total = day.len();
    let mut truncated = false;

    let mut day = day;
    if day.len() > limits.max_events_per_day {
        let limit = SearchLimit::Events { count: day.len(), max: limits.max_events_per_day };
        match limits.on_overflow {
            OverflowPolicy::Reject => return Err(RouteError::SearchSpaceExceeded { date, limit }),
            OverflowPolicy::Truncate => {
                warn!(%date, %limit, "searching only the earliest events of the day");
                day = &day[..limits.max_events_per_day];
                truncated = true;
            }
        }
    }

    let intervals: Vec<Interval> = day.iter().map(|e| e.interval()).collect();
    let enumerator = CombinationEnumerator::new(&intervals);

    let mut top = TopK::new(config.top_k);
    let walk = enumerator.for_each(limits.max_candidates, |ordinal, subset| {
        let score = score_route(&config.weights, subset.iter().map(|&i| intervals[i]));
        top.offer(date, ordinal, score, subset);
    });

    if !walk.exhausted {
        let limit = SearchLimit::Candidates { max: limits.max_candidates };
        match limits.on_overflow {
            OverflowPolicy::Reject => return Err(RouteError::SearchSpaceExceeded { date, limit }),
            OverflowPolicy::Truncate => {
                warn!(%date, %limit, "candidate search stopped early");
                truncated = true;
            }
        }
    }

    let best_score = top.as_slice().first().map(|c| c.score);
    debug!(%date, events = day.len(), candidates = walk.emitted, ?best_score, "day searched");

    Ok(DaySearch {
        summary: DaySummary {
            date,
            events: total,
            candidates: walk.emitted,
            truncated,
            best_score,
        },
        top,
    })
}
