//! Lodestar Search: deterministic A* over implicit state graphs.
//!
//! The engine finds a minimum-cost path from a start state to any state
//! satisfying a goal predicate, given a successor generator and a heuristic.
//! It has no I/O and no knowledge of concrete worlds; those live in
//! `lodestar_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! lodestar_search  ←  lodestar_harness
//! (frontier, tables)   (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`search::search`] / [`search::astar`]: the entry points
//! - [`contract::SearchProblem`]: trait for problems (pure oracles)
//! - [`frontier::Frontier`]: min-heap open set with lazy invalidation
//! - [`tables::ScoreTable`] / [`tables::CameFrom`]: per-call lookup tables
//! - [`policy::SearchPolicy`]: budget, reopen, and validation configuration
//! - [`result::SearchResult`]: outcome, path, stats, optional pop trace
//!
//! # Example
//!
//! ```
//! use lodestar_search::search::astar;
//!
//! let edges = [("A", "B", 5.0)];
//! let result = astar(
//!     "A",
//!     |s| *s == "B",
//!     |s| edges.iter().filter(|e| e.0 == *s).map(|e| (e.1, e.2)).collect::<Vec<_>>(),
//!     |_| 0.0,
//! )
//! .unwrap();
//! assert_eq!(result.path(), Some(&["A", "B"][..]));
//! assert_eq!(result.cost(), Some(5.0));
//! ```

#![forbid(unsafe_code)]

pub mod contract;
pub mod digest;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod result;
pub mod search;
pub mod tables;
