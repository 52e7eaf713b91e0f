//! Core search value types: transitions, frontier keys, state status.

use serde::{Deserialize, Serialize};

/// A weighted transition produced on demand by a successor generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition<S> {
    /// The successor state.
    pub state: S,
    /// Non-negative edge cost of reaching `state`.
    pub cost: f64,
}

impl<S> Transition<S> {
    #[must_use]
    pub fn new(state: S, cost: f64) -> Self {
        Self { state, cost }
    }
}

impl<S> From<(S, f64)> for Transition<S> {
    fn from((state, cost): (S, f64)) -> Self {
        Self { state, cost }
    }
}

/// The frontier ordering key: `(f_score, seq)`.
///
/// Lower `f_score` first, then older `seq` (earlier insertion wins).
/// `f_score` is compared with [`f64::total_cmp`], so the order is total even
/// for values that violate the finite-cost precondition.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f_score: f64,
    pub seq: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Per-state classification, derived from the search tables.
///
/// - `Unseen`: never discovered.
/// - `Open`: discovered, not finalized; may have several pending frontier entries.
/// - `Closed`: popped once as the live minimum and accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateStatus {
    Unseen,
    Open,
    Closed,
}
