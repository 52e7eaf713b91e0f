//! Harness world contract trait and world construction errors.

use lodestar_search::contract::SearchProblem;
use thiserror::Error;

/// A search problem the runner can drive end to end.
///
/// Extends [`SearchProblem`] with a stable identifier (bound into every run
/// report) and the start state the world is defined with.
pub trait HarnessWorld: SearchProblem {
    /// Unique world identifier.
    fn world_id(&self) -> &str;

    /// The state every run of this world starts from.
    fn start_state(&self) -> Self::State;
}

/// Error constructing a world from caller data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// Grid rows have different lengths, or the grid is empty.
    #[error("grid is not rectangular: {detail}")]
    NotRectangular { detail: String },

    /// A grid cell holds something other than free/blocked.
    #[error("invalid grid cell {value:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, value: String },

    /// A start or goal marker is missing, repeated, off the grid, or blocked.
    #[error("invalid {role} position: {detail}")]
    InvalidEndpoint { role: &'static str, detail: String },

    /// A graph edge carries a negative or non-finite cost.
    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidEdgeCost { from: String, to: String, cost: String },

    /// World JSON failed to parse.
    #[error("world JSON parse error: {detail}")]
    Parse { detail: String },
}
