//! Expansion budget locks.

use lock_tests::fixtures::demo_grid;
use lodestar_harness::config::RunConfig;
use lodestar_harness::runner::{run_search, RunError, RunReport};
use lodestar_harness::worlds::grid::Cell;
use lodestar_search::error::SearchError;
use lodestar_search::policy::SearchPolicy;
use lodestar_search::result::{PopDisposition, TerminationReason};

fn run_with_budget(max: u64) -> Result<RunReport<Cell>, RunError> {
    let policy = SearchPolicy::default()
        .with_max_expansions(max)
        .with_trace(true);
    run_search(&demo_grid(), &RunConfig::new(policy))
}

#[test]
fn budget_exhaustion_is_reported_without_path() {
    let result = run_with_budget(5).unwrap().result;

    assert_eq!(result.termination, TerminationReason::ExpansionBudgetExceeded);
    assert!(result.path.is_none());
    assert_eq!(result.stats.expansions, 5);

    let last = result.trace.as_ref().and_then(|t| t.last()).unwrap();
    assert_eq!(last.disposition, PopDisposition::BudgetExceeded);
}

#[test]
fn goal_popped_at_the_boundary_is_still_found() {
    // The demo grid needs exactly 20 expansions before the goal is popped.
    let exact = run_with_budget(20).unwrap().result;
    assert_eq!(exact.termination, TerminationReason::GoalReached);
    assert_eq!(exact.cost(), Some(8.0));

    let short = run_with_budget(19).unwrap().result;
    assert_eq!(short.termination, TerminationReason::ExpansionBudgetExceeded);
}

#[test]
fn zero_budget_is_rejected() {
    let err = run_with_budget(0).unwrap_err();
    assert!(matches!(
        err,
        RunError::Search(SearchError::InvalidPolicy { .. })
    ));
}
