//! Reopen policy locks on a graph with an admissible, inconsistent heuristic.

use lock_tests::fixtures::reopen_trap;
use lodestar_harness::config::{ConfigError, RunConfig};
use lodestar_harness::runner::{run_search, RunError};
use lodestar_search::error::SearchError;
use lodestar_search::policy::{ReopenPolicy, SearchPolicy, ValidationMode};
use lodestar_search::result::PopDisposition;

fn names(path: &[String]) -> Vec<&str> {
    path.iter().map(String::as_str).collect()
}

#[test]
fn never_reopen_keeps_first_closing_path() {
    let config = RunConfig::new(SearchPolicy::default().with_trace(true));
    let result = run_search(&reopen_trap(), &config).unwrap().result;

    assert_eq!(result.cost(), Some(10.0));
    assert_eq!(names(result.path().unwrap()), ["S", "A", "C", "G"]);
    assert_eq!(result.stats.reopened, 0);

    // Expanding B finds the cheaper route into C but C is already closed.
    let trace = result.trace.unwrap();
    let b = trace.iter().find(|e| e.state == "B").unwrap();
    assert_eq!(
        b.disposition,
        PopDisposition::Expanded {
            relaxed: 0,
            skipped_closed: 1
        }
    );
}

#[test]
fn reopen_on_improvement_recovers_optimum() {
    let config = RunConfig::new(
        SearchPolicy::default()
            .with_reopen(ReopenPolicy::ReopenOnImprovement)
            .with_trace(true),
    );
    let result = run_search(&reopen_trap(), &config).unwrap().result;

    assert_eq!(result.cost(), Some(7.0));
    assert_eq!(names(result.path().unwrap()), ["S", "B", "C", "G"]);
    assert_eq!(result.stats.reopened, 1);

    let trace = result.trace.unwrap();
    let c_expansions = trace
        .iter()
        .filter(|e| e.state == "C" && matches!(e.disposition, PopDisposition::Expanded { .. }))
        .count();
    assert_eq!(c_expansions, 2);
}

#[test]
fn reopen_requires_strict_validation() {
    let policy = SearchPolicy::default()
        .with_reopen(ReopenPolicy::ReopenOnImprovement)
        .with_validation(ValidationMode::Unchecked);
    let err = run_search(&reopen_trap(), &RunConfig::new(policy)).unwrap_err();
    assert!(matches!(
        err,
        RunError::Search(SearchError::InvalidPolicy { .. })
    ));

    let err = RunConfig::from_json_str(
        r#"{"policy": {"reopen": "reopen_on_improvement", "validation": "unchecked"}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
