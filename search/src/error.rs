//! Typed search errors.
//!
//! `SearchError` covers pre-flight policy failures and precondition
//! violations detected under [`crate::policy::ValidationMode::Strict`].
//! "No path found" and budget exhaustion are not errors; they are expressed
//! via [`crate::result::TerminationReason`].

use thiserror::Error;

/// Typed failure for a search call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A successor transition carried a negative cost.
    #[error("negative edge cost {cost} (edge costs must be non-negative)")]
    NegativeEdgeCost { cost: f64 },

    /// A successor transition carried a NaN or infinite cost.
    #[error("non-finite edge cost {cost}")]
    NonFiniteEdgeCost { cost: f64 },

    /// The heuristic returned a negative estimate.
    #[error("negative heuristic value {value} (estimates must be non-negative)")]
    NegativeHeuristic { value: f64 },

    /// The heuristic returned NaN or an infinite estimate.
    #[error("non-finite heuristic value {value}")]
    NonFiniteHeuristic { value: f64 },

    /// The policy is not usable as given.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}

impl SearchError {
    /// Check an edge cost against the non-negative, finite precondition.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NonFiniteEdgeCost`] or
    /// [`SearchError::NegativeEdgeCost`] on violation.
    pub fn check_edge_cost(cost: f64) -> Result<(), SearchError> {
        if !cost.is_finite() {
            return Err(Self::NonFiniteEdgeCost { cost });
        }
        if cost < 0.0 {
            return Err(Self::NegativeEdgeCost { cost });
        }
        Ok(())
    }

    /// Check a heuristic estimate against the non-negative, finite precondition.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NonFiniteHeuristic`] or
    /// [`SearchError::NegativeHeuristic`] on violation.
    pub fn check_heuristic(value: f64) -> Result<(), SearchError> {
        if !value.is_finite() {
            return Err(Self::NonFiniteHeuristic { value });
        }
        if value < 0.0 {
            return Err(Self::NegativeHeuristic { value });
        }
        Ok(())
    }
}
