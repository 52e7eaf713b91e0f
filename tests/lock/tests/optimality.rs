//! Optimality locks on seeded random worlds, checked against an independent
//! Bellman-Ford reference.

use std::collections::{BTreeMap, HashSet};

use lock_tests::fixtures::{random_graph, WeightedGrid};
use lodestar_harness::worlds::graph::WeightedGraph;
use lodestar_search::policy::{ReopenPolicy, SearchPolicy};
use lodestar_search::result::{PopDisposition, TerminationReason};
use lodestar_search::search::search;

const SEEDS: std::ops::Range<u64> = 0..24;

fn graph_reference_cost(graph: &WeightedGraph, nodes: usize) -> Option<f64> {
    let names: Vec<String> = (0..nodes).map(|i| format!("n{i}")).collect();
    let mut dist: BTreeMap<&str, f64> = BTreeMap::new();
    dist.insert(names[0].as_str(), 0.0);
    for _ in 0..nodes {
        let mut changed = false;
        for name in &names {
            let Some(&here) = dist.get(name.as_str()) else {
                continue;
            };
            for edge in graph.out_edges(name) {
                let candidate = here + edge.cost;
                let slot = dist.entry(edge.to.as_str()).or_insert(f64::INFINITY);
                if candidate < *slot {
                    *slot = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist.get(graph.goal()).copied()
}

#[test]
fn weighted_grids_match_reference_cost() {
    for seed in SEEDS {
        let world = WeightedGrid::random(seed, 16, 16, 250);
        let expected = world.reference_cost();

        let informed = search(world.start(), &world, &SearchPolicy::default()).unwrap();
        assert_eq!(informed.cost(), expected, "seed {seed}: informed");
        assert_eq!(informed.found(), expected.is_some());

        let blind = world.clone().with_heuristic_scale(0.0);
        let uniform = search(blind.start(), &blind, &SearchPolicy::default()).unwrap();
        assert_eq!(uniform.cost(), expected, "seed {seed}: zero heuristic");

        assert!(
            informed.stats.expansions <= uniform.stats.expansions,
            "seed {seed}: informed search expanded more than uniform-cost search"
        );
    }
}

#[test]
fn random_graphs_match_reference_cost() {
    for seed in SEEDS {
        let graph = random_graph(seed, 60, 3);
        let expected = graph_reference_cost(&graph, 60);
        let result = search("n0".to_string(), &graph, &SearchPolicy::default()).unwrap();

        assert_eq!(result.cost(), expected, "seed {seed}");
        if expected.is_none() {
            assert_eq!(result.termination, TerminationReason::FrontierExhausted);
        }
    }
}

#[test]
fn found_path_cost_equals_sum_of_edges() {
    for seed in SEEDS {
        let graph = random_graph(seed, 60, 3);
        let result = search("n0".to_string(), &graph, &SearchPolicy::default()).unwrap();
        let Some(path) = result.path() else {
            continue;
        };
        assert_eq!(path.first().map(String::as_str), Some("n0"));

        let mut total = 0.0;
        for pair in path.windows(2) {
            let cheapest = graph
                .out_edges(&pair[0])
                .iter()
                .filter(|e| e.to == pair[1])
                .map(|e| e.cost)
                .fold(f64::INFINITY, f64::min);
            total += cheapest;
        }
        assert_eq!(result.cost(), Some(total), "seed {seed}");
    }
}

#[test]
fn consistent_heuristic_never_reopens_or_reexpands() {
    let policy = SearchPolicy::default()
        .with_reopen(ReopenPolicy::ReopenOnImprovement)
        .with_trace(true);

    for seed in SEEDS {
        let world = WeightedGrid::random(seed, 16, 16, 250);
        let result = search(world.start(), &world, &policy).unwrap();
        assert_eq!(result.stats.reopened, 0, "seed {seed}");
        assert_eq!(result.cost(), world.reference_cost(), "seed {seed}");

        let trace = result.trace.as_ref().unwrap();
        let mut expanded = HashSet::new();
        let mut last_f = f64::NEG_INFINITY;
        for event in trace {
            if event.disposition == PopDisposition::Stale {
                continue;
            }
            assert!(
                event.f_score >= last_f,
                "seed {seed}: f decreased at pop {}",
                event.order
            );
            last_f = event.f_score;
            if matches!(event.disposition, PopDisposition::Expanded { .. }) {
                assert!(
                    expanded.insert(event.state),
                    "seed {seed}: {:?} expanded twice",
                    event.state
                );
            }
        }
        assert_eq!(expanded.len() as u64, result.stats.expansions);
    }
}

#[test]
fn pop_trace_accounts_for_every_pop() {
    let world = WeightedGrid::random(5, 20, 20, 200);
    let result = search(
        world.start(),
        &world,
        &SearchPolicy::default().with_trace(true),
    )
    .unwrap();
    let trace = result.trace.as_ref().unwrap();

    assert_eq!(trace.len() as u64, result.stats.pops);
    let stale = trace
        .iter()
        .filter(|e| e.disposition == PopDisposition::Stale)
        .count() as u64;
    assert_eq!(stale, result.stats.stale_pops);
    for (i, event) in trace.iter().enumerate() {
        assert_eq!(event.order, i as u64);
    }
}
