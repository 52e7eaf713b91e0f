//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::digest::{canonical_hash, ContentHash, DOMAIN_SEARCH_POLICY};
use crate::error::SearchError;

/// Search budget, reopening, and validation configuration.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means unbounded; the search then
    /// only stops on a goal or an exhausted frontier.
    pub max_expansions: Option<u64>,
    /// What to do when a cheaper path reaches a closed state.
    pub reopen: ReopenPolicy,
    /// Whether edge costs and heuristic values are checked.
    pub validation: ValidationMode,
    /// Record one [`crate::result::PopEvent`] per frontier pop.
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Validate the policy before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero, or
    /// if reopening is combined with unchecked validation (a negative cycle
    /// would then reopen states forever).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        if self.reopen == ReopenPolicy::ReopenOnImprovement
            && self.validation == ValidationMode::Unchecked
        {
            return Err(SearchError::InvalidPolicy {
                detail: "reopen_on_improvement requires strict validation".into(),
            });
        }
        Ok(())
    }

    /// Set the expansion budget.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Set the reopen policy.
    #[must_use]
    pub fn with_reopen(mut self, reopen: ReopenPolicy) -> Self {
        self.reopen = reopen;
        self
    }

    /// Set the validation mode.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Enable or disable per-pop trace recording.
    #[must_use]
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Content hash of the policy's JSON form.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            reopen: ReopenPolicy::NeverReopen,
            validation: ValidationMode::Strict,
            record_trace: false,
        }
    }
}

/// Policy for closed states that later receive a cheaper tentative cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReopenPolicy {
    /// Closed states are final. Optimal only under a consistent heuristic.
    #[default]
    NeverReopen,
    /// A closed state reached more cheaply is reopened and expanded again.
    /// Optimal under any admissible heuristic, at the cost of re-expansions.
    ReopenOnImprovement,
}

/// Precondition checking for caller-supplied costs and estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Fail fast with a [`SearchError`] on a negative or non-finite edge cost
    /// or heuristic value.
    #[default]
    Strict,
    /// No checks. Behavior under violated preconditions is unspecified, but
    /// the search still terminates on a finite state space.
    Unchecked,
}
