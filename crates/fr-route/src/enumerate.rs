//! Combination Enumerator — every non-empty conflict-free subset of a day.
//!
//! # Algorithm
//!
//! Backtracking over index positions of the day's events (sorted by start
//! time, ties by id):
//!
//! ```text
//! extend(cursor, partial):
//!   if partial is non-empty: emit partial
//!   for j in cursor..n:
//!     if event j conflicts with nothing in partial:
//!       push j; extend(j + 1, partial); pop
//! ```
//!
//! Indices only ever increase along a branch, so each subset is produced
//! exactly once and always in start order.  Every subset is emitted before
//! its extensions, so non-maximal subsets are included.
//!
//! # Conflict masks
//!
//! Pairwise conflicts are precomputed into one `u64` per event (bit `k` set
//! iff the event overlaps event `k`).  The partial route is mirrored as a
//! bitmask, which turns "conflicts with anything in the partial route" into
//! a single AND.  This caps a day at [`MAX_DAY_EVENTS`] events; far below
//! that the `2^n` output is the binding constraint anyway.

use std::ops::ControlFlow;

use fr_core::{Event, Interval};

/// Largest day the enumerator accepts (one bit per event in a `u64`).
pub const MAX_DAY_EVENTS: usize = 64;

/// Outcome of one enumeration pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    /// Number of subsets passed to the visitor.
    pub emitted:   usize,
    /// `false` if the pass stopped at the candidate limit with subsets left.
    pub exhausted: bool,
}

/// Enumerates the conflict-free subsets of one day.
#[derive(Clone, Debug)]
pub struct CombinationEnumerator {
    /// `conflicts[j]` has bit `k` set iff events `j` and `k` overlap.
    conflicts: Vec<u64>,
}

impl CombinationEnumerator {
    /// Build from a day's intervals, already in start order.
    ///
    /// # Panics
    ///
    /// Panics if there are more than [`MAX_DAY_EVENTS`] intervals.  Callers
    /// enforce `SearchLimits::max_events_per_day` before getting here.
    pub fn new(intervals: &[Interval]) -> Self {
        assert!(
            intervals.len() <= MAX_DAY_EVENTS,
            "{} events exceed the enumerator's {MAX_DAY_EVENTS}-event capacity",
            intervals.len()
        );
        let conflicts = intervals
            .iter()
            .map(|a| {
                intervals
                    .iter()
                    .enumerate()
                    .filter(|(_, b)| a.conflicts_with(b))
                    .fold(0u64, |mask, (k, _)| mask | (1u64 << k))
            })
            .collect();
        Self { conflicts }
    }

    /// Build from a day's events, already sorted with [`sort_day`][crate::sort_day].
    pub fn from_events(day: &[&Event]) -> Self {
        let intervals: Vec<Interval> = day.iter().map(|e| e.interval()).collect();
        Self::new(&intervals)
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Call `visit(ordinal, subset)` for each conflict-free subset, stopping
    /// after `limit` subsets.
    ///
    /// `subset` holds indices into the day's event list in ascending order;
    /// `ordinal` counts emitted subsets from 0 and is the deterministic
    /// emission order used to break score ties.
    pub fn for_each<F>(&self, limit: usize, visit: F) -> Enumeration
    where
        F: FnMut(usize, &[usize]),
    {
        let mut walk = Walk { limit, emitted: 0, visit };
        let mut partial = Vec::with_capacity(self.len());
        let flow = self.extend(0, 0, &mut partial, &mut walk);
        Enumeration { emitted: walk.emitted, exhausted: flow.is_continue() }
    }

    /// Every conflict-free subset, in emission order.
    pub fn collect(&self) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        self.for_each(usize::MAX, |_, subset| out.push(subset.to_vec()));
        out
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn extend<F>(
        &self,
        cursor:  usize,
        taken:   u64,
        partial: &mut Vec<usize>,
        walk:    &mut Walk<F>,
    ) -> ControlFlow<()>
    where
        F: FnMut(usize, &[usize]),
    {
        if !partial.is_empty() {
            if walk.emitted == walk.limit {
                return ControlFlow::Break(());
            }
            (walk.visit)(walk.emitted, partial.as_slice());
            walk.emitted += 1;
        }

        for j in cursor..self.conflicts.len() {
            if self.conflicts[j] & taken != 0 {
                continue;
            }
            partial.push(j);
            let flow = self.extend(j + 1, taken | (1u64 << j), partial, walk);
            partial.pop();
            if flow.is_break() {
                return flow;
            }
        }
        ControlFlow::Continue(())
    }
}

/// Mutable state threaded through one enumeration pass.
struct Walk<F> {
    limit:   usize,
    emitted: usize,
    visit:   F,
}
