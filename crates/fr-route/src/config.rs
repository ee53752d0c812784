//! Planner configuration.
//!
//! Typically deserialised from a JSON file by the application and handed to
//! [`generate_routes`][crate::generate_routes] or the `fr-planner` builder.
//! Every field has a default, so a partial (or empty) JSON object is a valid
//! configuration:
//!
//! ```json
//! { "top_k": 5, "limits": { "max_events_per_day": 24, "on_overflow": "truncate" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::{RouteError, RouteResult, Score, MAX_DAY_EVENTS};

// ── ScoreWeights ──────────────────────────────────────────────────────────────

/// Constants of the scoring function.
///
/// `score = per_event * len + gap_bonus * (#consecutive gaps in [gap_min, gap_max])`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub per_event: Score,
    pub gap_bonus: Score,
    /// Shortest gap (minutes, inclusive) that earns the bonus.
    pub gap_min:   u32,
    /// Longest gap (minutes, inclusive) that earns the bonus.
    pub gap_max:   u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { per_event: 100, gap_bonus: 10, gap_min: 15, gap_max: 60 }
    }
}

// ── SearchLimits ──────────────────────────────────────────────────────────────

/// What to do when a day exceeds a [`SearchLimits`] bound.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with `RouteError::SearchSpaceExceeded`.
    #[default]
    Reject,
    /// Search only up to the bound and flag the day as truncated.
    Truncate,
}

/// Bounds on the per-day search.  The number of conflict-free subsets of a
/// day with `n` mutually compatible events is `2^n - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Largest day searched.  Never more than [`MAX_DAY_EVENTS`].
    pub max_events_per_day: usize,
    /// Most candidate routes emitted for a single day.
    pub max_candidates:     usize,
    pub on_overflow:        OverflowPolicy,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_events_per_day: 20,
            max_candidates:     1 << 20,
            on_overflow:        OverflowPolicy::Reject,
        }
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Number of routes returned across all days.
    pub top_k:   usize,
    pub weights: ScoreWeights,
    pub limits:  SearchLimits,
}

impl ScoreWeights {
    /// Largest `per_event` or `gap_bonus` accepted by
    /// [`PlannerConfig::validate`].  A full day of [`MAX_DAY_EVENTS`] events
    /// with every gap rewarded stays below `Score::MAX`.
    pub const MAX_WEIGHT: Score = Score::MAX / (2 * MAX_DAY_EVENTS as Score);
}

impl PlannerConfig {
    pub const DEFAULT_TOP_K: usize = 3;

    /// Reject configurations the generator cannot honour.
    pub fn validate(&self) -> RouteResult<()> {
        if self.top_k == 0 {
            return Err(RouteError::Config("top_k must be at least 1".into()));
        }
        let weights = [("per_event", self.weights.per_event), ("gap_bonus", self.weights.gap_bonus)];
        for (name, weight) in weights {
            if !(0..=ScoreWeights::MAX_WEIGHT).contains(&weight) {
                return Err(RouteError::Config(format!(
                    "{name} must be in 0..={}, got {weight}",
                    ScoreWeights::MAX_WEIGHT
                )));
            }
        }
        if self.weights.gap_min > self.weights.gap_max {
            return Err(RouteError::Config(format!(
                "gap_min ({}) is greater than gap_max ({})",
                self.weights.gap_min, self.weights.gap_max
            )));
        }
        if self.limits.max_events_per_day == 0 || self.limits.max_events_per_day > MAX_DAY_EVENTS {
            return Err(RouteError::Config(format!(
                "max_events_per_day must be in 1..={MAX_DAY_EVENTS}, got {}",
                self.limits.max_events_per_day
            )));
        }
        if self.limits.max_candidates == 0 {
            return Err(RouteError::Config("max_candidates must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            top_k:   Self::DEFAULT_TOP_K,
            weights: ScoreWeights::default(),
            limits:  SearchLimits::default(),
        }
    }
}
