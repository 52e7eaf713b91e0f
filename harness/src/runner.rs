//! Harness runner: drives one world through the engine and binds the outcome
//! into a [`RunReport`].
//!
//! # Pipeline
//!
//! ```text
//! config.validate() → policy.digest()
//!   → search(world.start_state(), world, policy)
//!   → result.digest() → RunReport
//! ```
//!
//! The runner adds no search logic of its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lodestar_search::digest::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};
use lodestar_search::error::SearchError;
use lodestar_search::policy::SearchPolicy;
use lodestar_search::result::SearchResult;
use lodestar_search::search::search;

use crate::config::RunConfig;
use crate::contract::HarnessWorld;

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The engine rejected the policy or the problem data.
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// The result or policy could not be serialized for hashing.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of one run, bound to the world and policy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport<S> {
    pub world_id: String,
    pub policy: SearchPolicy,
    pub policy_digest: ContentHash,
    pub result: SearchResult<S>,
    pub result_digest: ContentHash,
}

impl<S: Serialize> RunReport<S> {
    /// Serialize the report to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a state fails to serialize.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Content hash over [`RunReport::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a state fails to serialize.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = self.to_json_bytes()?;
        Ok(canonical_hash(DOMAIN_RUN_REPORT, &bytes))
    }
}

/// Run `world` from its start state under `config`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy is invalid or strict
/// validation finds a bad cost or heuristic value, and
/// [`RunError::Serialize`] if hashing the outcome fails.
pub fn run_search<W>(world: &W, config: &RunConfig) -> Result<RunReport<W::State>, RunError>
where
    W: HarnessWorld,
    W::State: Serialize,
{
    let policy = config.policy.clone();
    let policy_digest = policy.digest()?;

    tracing::info!(
        world_id = world.world_id(),
        policy_digest = %policy_digest,
        "run started"
    );

    let result = search(world.start_state(), world, &policy)?;
    let result_digest = result.digest()?;

    tracing::info!(
        world_id = world.world_id(),
        termination = ?result.termination,
        cost = ?result.cost(),
        expansions = result.stats.expansions,
        result_digest = %result_digest,
        "run finished"
    );

    Ok(RunReport {
        world_id: world.world_id().to_string(),
        policy,
        policy_digest,
        result,
        result_digest,
    })
}
