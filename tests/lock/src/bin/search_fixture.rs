//! Binary that runs the lock-test worlds through the harness and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines (see source for format).

use lock_tests::fixtures::{demo_grid, reopen_trap, WeightedGrid};
use lodestar_harness::config::RunConfig;
use lodestar_harness::runner::run_search;
use lodestar_search::policy::{ReopenPolicy, SearchPolicy};
use lodestar_search::search::search;

fn main() {
    lodestar_harness::telemetry::init();

    let traced = RunConfig::new(SearchPolicy::default().with_trace(true));

    let grid = run_search(&demo_grid(), &traced).expect("grid run failed");
    println!("grid_report_digest={}", grid.digest().expect("grid digest"));
    println!("grid_result_digest={}", grid.result_digest);
    println!("grid_cost={:?}", grid.result.cost());
    println!("grid_expansions={}", grid.result.stats.expansions);

    let reopen = RunConfig::new(
        SearchPolicy::default()
            .with_trace(true)
            .with_reopen(ReopenPolicy::ReopenOnImprovement),
    );
    let trap = run_search(&reopen_trap(), &reopen).expect("trap run failed");
    println!("trap_report_digest={}", trap.digest().expect("trap digest"));
    println!("trap_cost={:?}", trap.result.cost());
    println!("trap_reopened={}", trap.result.stats.reopened);

    let weighted = WeightedGrid::random(7, 24, 24, 200);
    let result = search(weighted.start(), &weighted, &traced.policy).expect("weighted run failed");
    println!(
        "weighted_result_digest={}",
        result.digest().expect("weighted digest")
    );
    println!("weighted_termination={:?}", result.termination);
    println!("policy_digest={}", traced.policy.digest().expect("policy digest"));
}
