//! Ranker / Selector.
//!
//! Candidates are ordered by
//!
//! ```text
//! (score descending, date ascending, emission ordinal ascending)
//! ```
//!
//! `(date, ordinal)` is unique per candidate, so the order is total and ties
//! are never broken arbitrarily.  [`TopK`] keeps only the best `k` seen so
//! far; since the global top-K is contained in the union of the per-day
//! top-Ks, each day can be ranked on its own and the buffers merged.

use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::Score;

// ── Candidate ─────────────────────────────────────────────────────────────────

/// A scored subset of one day's events, by index into the sorted day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub date:    NaiveDate,
    /// Position in the enumerator's emission order for `date`.
    pub ordinal: usize,
    pub score:   Score,
    pub members: Vec<usize>,
}

impl Candidate {
    /// Smaller is better.
    #[inline]
    fn rank_key(&self) -> (Reverse<Score>, NaiveDate, usize) {
        (Reverse(self.score), self.date, self.ordinal)
    }
}

// ── TopK ──────────────────────────────────────────────────────────────────────

/// Bounded buffer of the `k` best candidates, best first.
#[derive(Clone, Debug)]
pub struct TopK {
    k:     usize,
    items: Vec<Candidate>,
}

impl TopK {
    pub fn new(k: usize) -> Self {
        Self { k, items: Vec::with_capacity(k) }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lowest score currently retained, once the buffer is full.
    pub fn threshold(&self) -> Option<Score> {
        if self.items.len() < self.k {
            None
        } else {
            self.items.last().map(|c| c.score)
        }
    }

    /// Consider one candidate.  `members` is only copied if it makes the cut.
    pub fn offer(&mut self, date: NaiveDate, ordinal: usize, score: Score, members: &[usize]) {
        if let Some(pos) = self.slot((Reverse(score), date, ordinal)) {
            let candidate = Candidate { date, ordinal, score, members: members.to_vec() };
            self.admit(pos, candidate);
        }
    }

    /// Consider an owned candidate.
    pub fn push(&mut self, candidate: Candidate) {
        if let Some(pos) = self.slot(candidate.rank_key()) {
            self.admit(pos, candidate);
        }
    }

    /// Fold another buffer into this one.
    pub fn merge(&mut self, other: TopK) {
        for candidate in other.items {
            self.push(candidate);
        }
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }

    /// The retained candidates, best first.
    pub fn into_vec(self) -> Vec<Candidate> {
        self.items
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Insertion index for `key`, or `None` if it would fall off the end.
    fn slot(&self, key: (Reverse<Score>, NaiveDate, usize)) -> Option<usize> {
        let pos = self.items.partition_point(|c| c.rank_key() < key);
        (pos < self.k).then_some(pos)
    }

    fn admit(&mut self, pos: usize, candidate: Candidate) {
        self.items.insert(pos, candidate);
        self.items.truncate(self.k);
    }
}

impl Extend<Candidate> for TopK {
    fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        for candidate in iter {
            self.push(candidate);
        }
    }
}
