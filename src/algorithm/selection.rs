use std::cmp::Ordering;

use crate::spatial::position::Position;
use crate::tiles::orientation::Orientation;

/// One scored placement option for the patch at the head of the queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Frontier position being considered
    pub position: Position,
    /// Orientation the patch was scored with
    pub orientation: Orientation,
    /// Matcher cost, lower is better
    pub cost: f64,
}

/// Total order used to pick a winner: cost first, then position
///
/// A NaN cost, whatever its sign, ranks as infinite and so never beats a
/// real cost.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    ranking_cost(a.cost)
        .total_cmp(&ranking_cost(b.cost))
        .then_with(|| a.position.cmp(&b.position))
}

const fn ranking_cost(cost: f64) -> f64 {
    if cost.is_nan() { f64::INFINITY } else { cost }
}

/// Lowest-cost candidate, ties broken by lexicographic position
///
/// Candidates equal under [`compare_candidates`] (same cost and position,
/// differing only in orientation) resolve to the earliest in the slice.
pub fn select_best(candidates: &[Candidate]) -> Option<Candidate> {
    candidates.iter().copied().min_by(compare_candidates)
}
