//! Reference scenarios: exact paths and costs on small fixed worlds.

use lock_tests::fixtures::demo_grid;
use lodestar_harness::config::RunConfig;
use lodestar_harness::runner::run_search;
use lodestar_harness::worlds::graph::WeightedGraph;
use lodestar_harness::worlds::grid::Cell;
use lodestar_search::contract::SearchProblem;
use lodestar_search::policy::SearchPolicy;
use lodestar_search::result::TerminationReason;
use lodestar_search::search::{astar, search};

#[test]
fn demo_grid_shortest_path_around_obstacles() {
    let report = run_search(&demo_grid(), &RunConfig::default()).unwrap();
    let result = &report.result;

    assert!(result.found());
    assert_eq!(result.termination, TerminationReason::GoalReached);
    assert_eq!(result.cost(), Some(8.0));

    let expected: Vec<Cell> = [
        (0, 0),
        (1, 0),
        (2, 0),
        (3, 0),
        (4, 0),
        (4, 1),
        (4, 2),
        (4, 3),
        (4, 4),
    ]
    .into_iter()
    .map(|(r, c)| Cell::new(r, c))
    .collect();
    assert_eq!(result.path(), Some(expected.as_slice()));
    assert_eq!(result.path.as_ref().map(|p| p.steps()), Some(8));
}

#[test]
fn demo_grid_counters() {
    let report = run_search(&demo_grid(), &RunConfig::default()).unwrap();
    let stats = report.result.stats;
    assert_eq!(stats.pops, 21);
    assert_eq!(stats.expansions, 20);
    assert_eq!(stats.stale_pops, 0);
    assert_eq!(stats.reopened, 0);
    assert_eq!(stats.frontier_inserts, stats.relaxations + 1);
}

#[test]
fn demo_grid_zero_heuristic_matches_cost() {
    let world = demo_grid();
    let result = astar(
        world.start(),
        |c| world.is_goal(c),
        |c| {
            world
                .successors(c)
                .into_iter()
                .map(|t| (t.state, t.cost))
                .collect::<Vec<_>>()
        },
        |_| 0.0,
    )
    .unwrap();
    assert_eq!(result.cost(), Some(8.0));
    assert_eq!(result.path().map(<[Cell]>::len), Some(9));
}

#[test]
fn single_edge_graph() {
    let result = astar(
        'A',
        |s| *s == 'B',
        |s| if *s == 'A' { vec![('B', 5.0)] } else { vec![] },
        |_| 0.0,
    )
    .unwrap();
    assert_eq!(result.cost(), Some(5.0));
    assert_eq!(result.path(), Some(&['A', 'B'][..]));
}

#[test]
fn isolated_goal_is_not_found() {
    let graph = WeightedGraph::new("A", "Z")
        .undirected_edge("A", "B", 1.0)
        .undirected_edge("B", "C", 2.0)
        .edge("Z", "A", 1.0);
    let report = run_search(&graph, &RunConfig::default()).unwrap();
    let result = report.result;

    assert!(!result.found());
    assert_eq!(result.termination, TerminationReason::FrontierExhausted);
    assert!(result.path().is_none());
    assert!(result.cost().is_none());
    assert_eq!(result.stats.expansions, 3);
}

#[test]
fn start_is_goal() {
    let graph = WeightedGraph::new("A", "A").edge("A", "B", 1.0);
    let result = search("A".to_string(), &graph, &SearchPolicy::default()).unwrap();
    assert_eq!(result.cost(), Some(0.0));
    assert_eq!(result.path(), Some(&["A".to_string()][..]));
    assert_eq!(result.stats.expansions, 0);
}

#[test]
fn json_world_runs_end_to_end() {
    let graph = WeightedGraph::from_json_str(
        r#"{
            "start": "home",
            "goal": "work",
            "edges": {
                "home": [{"to": "cafe", "cost": 2.0}, {"to": "work", "cost": 10.0}],
                "cafe": [{"to": "work", "cost": 3.0}]
            },
            "heuristic": {"home": 4.0, "cafe": 3.0}
        }"#,
    )
    .unwrap();
    let report = run_search(&graph, &RunConfig::default()).unwrap();
    assert_eq!(report.world_id, "weighted_graph");
    assert_eq!(report.result.cost(), Some(5.0));
    assert_eq!(
        report.result.path(),
        Some(&["home".to_string(), "cafe".to_string(), "work".to_string()][..])
    );
}
