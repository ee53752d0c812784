//! Scorer.

use fr_core::Interval;

use crate::{Score, ScoreWeights};

/// Score a conflict-free route given its intervals in start order.
///
/// Each event is worth `per_event`; each consecutive pair whose idle gap
/// lies in `[gap_min, gap_max]` adds `gap_bonus`.  An empty route scores 0.
/// The sum saturates rather than overflowing.
pub fn score_route<I>(weights: &ScoreWeights, route: I) -> Score
where
    I: IntoIterator<Item = Interval>,
{
    let mut score: Score = 0;
    let mut prev: Option<Interval> = None;

    for iv in route {
        score = score.saturating_add(weights.per_event);
        if let Some(p) = prev {
            let gap = p.gap_to(&iv);
            if gap >= weights.gap_min as i64 && gap <= weights.gap_max as i64 {
                score = score.saturating_add(weights.gap_bonus);
            }
        }
        prev = Some(iv);
    }
    score
}
