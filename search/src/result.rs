//! Search result, statistics, and pop trace types.

use serde::{Deserialize, Serialize};

use crate::digest::{canonical_hash, ContentHash, DOMAIN_SEARCH_RESULT};

/// Result of a search execution.
///
/// Check [`SearchResult::found`] (or `termination`) to determine the outcome.
/// When no goal was reached, `path` is `None`: there is never a partial path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<S> {
    /// Why the search stopped.
    pub termination: TerminationReason,
    /// The path to the goal (if found).
    pub path: Option<FoundPath<S>>,
    /// Counters collected during the search.
    pub stats: SearchStats,
    /// Per-pop trace, present only when the policy asked for it.
    pub trace: Option<Vec<PopEvent<S>>>,
}

impl<S> SearchResult<S> {
    /// Returns `true` if a goal state was reached.
    #[must_use]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Forward-ordered states from start to goal inclusive.
    #[must_use]
    pub fn path(&self) -> Option<&[S]> {
        self.path.as_ref().map(|p| p.states.as_slice())
    }

    /// Total path cost (g-score of the goal).
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.path.as_ref().map(|p| p.cost)
    }

    /// The goal state that terminated the search.
    #[must_use]
    pub fn goal(&self) -> Option<&S> {
        self.path.as_ref().and_then(|p| p.states.last())
    }
}

impl<S: Serialize> SearchResult<S> {
    /// Serialize the result to JSON bytes.
    ///
    /// Field order is fixed by the type definitions, so equal results always
    /// produce equal bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a state fails to serialize.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Content hash of [`SearchResult::to_canonical_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a state fails to serialize.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_RESULT, &bytes))
    }
}

/// A path from start to goal and its total cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundPath<S> {
    /// States from start to goal, inclusive.
    pub states: Vec<S>,
    /// `g(goal)` at termination.
    pub cost: f64,
}

impl<S> FoundPath<S> {
    /// Number of transitions on the path.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// A popped, non-stale state satisfied the goal predicate.
    GoalReached,
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
    /// The `max_expansions` budget ran out before a goal was popped.
    ExpansionBudgetExceeded,
}

/// Aggregate counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Frontier entries removed, stale ones included.
    pub pops: u64,
    /// Pops discarded as stale.
    pub stale_pops: u64,
    /// States closed and handed to the successor generator.
    pub expansions: u64,
    /// Successful relaxations (tentative cost beat the recorded g-score).
    pub relaxations: u64,
    /// Closed states reopened under `ReopenPolicy::ReopenOnImprovement`.
    pub reopened: u64,
    /// Total frontier insertions.
    pub frontier_inserts: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// One frontier pop, recorded when `record_trace` is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopEvent<S> {
    /// Total order of frontier pops, starting at 0.
    pub order: u64,
    /// The popped state.
    pub state: S,
    /// The f-score stored in the popped entry.
    pub f_score: f64,
    /// The g-score live at pop time.
    pub g_score: f64,
    /// Sequence number of the popped entry.
    pub seq: u64,
    /// What the engine did with it.
    pub disposition: PopDisposition,
}

/// What happened to a popped frontier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PopDisposition {
    /// Entry referred to a closed state or an outdated f-score.
    Stale,
    /// State satisfied the goal predicate; search stopped.
    Goal,
    /// State was closed and its successors processed.
    Expanded {
        /// Successors whose score improved and were pushed.
        relaxed: u64,
        /// Successors skipped because they were closed.
        skipped_closed: u64,
    },
    /// Expansion budget was exhausted; search stopped.
    BudgetExceeded,
}
