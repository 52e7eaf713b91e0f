//! Shared world builders for lodestar benchmark suites.

use lodestar_harness::worlds::grid::{Cell, GridWorld};
use lodestar_search::policy::SearchPolicy;

/// A named benchmark regime: a world plus the policy to run it under.
pub struct Regime {
    pub name: &'static str,
    pub world: GridWorld,
    pub policy: SearchPolicy,
}

/// `n × n` grid with no obstacles, corner to corner.
///
/// # Panics
///
/// Panics if `n < 2`. Benchmark setup failures are fatal.
#[must_use]
pub fn open_grid(n: usize) -> GridWorld {
    GridWorld::from_rows(&vec![vec![0; n]; n], Cell::new(0, 0), Cell::new(n - 1, n - 1))
        .expect("open grid is valid")
}

/// `n × n` serpentine maze: every other row is a wall with one gap,
/// alternating between the right and left ends. The heuristic is badly
/// misled, so the search explores most of the grid.
///
/// # Panics
///
/// Panics if `n < 3`.
#[must_use]
pub fn serpentine_grid(n: usize) -> GridWorld {
    let mut rows = vec![vec![0u8; n]; n];
    for (i, r) in (1..n).step_by(2).enumerate() {
        let gap = if i % 2 == 0 { n - 1 } else { 0 };
        for (c, cell) in rows[r].iter_mut().enumerate() {
            *cell = u8::from(c != gap);
        }
    }
    let goal_row = if n % 2 == 1 { n - 1 } else { n - 2 };
    GridWorld::from_rows(&rows, Cell::new(0, 0), Cell::new(goal_row, 0))
        .expect("serpentine grid is valid")
}

/// Open grid whose goal is walled off: the search exhausts the frontier.
///
/// # Panics
///
/// Panics if `n < 3`.
#[must_use]
pub fn sealed_goal_grid(n: usize) -> GridWorld {
    let mut rows = vec![vec![0u8; n]; n];
    rows[n - 2][n - 1] = 1;
    rows[n - 1][n - 2] = 1;
    rows[n - 2][n - 2] = 1;
    GridWorld::from_rows(&rows, Cell::new(0, 0), Cell::new(n - 1, n - 1))
        .expect("sealed grid is valid")
}

/// The regimes timed by `macro_regimes`.
#[must_use]
pub fn regimes(n: usize) -> Vec<Regime> {
    vec![
        Regime {
            name: "open",
            world: open_grid(n),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "serpentine",
            world: serpentine_grid(n),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "exhaustive_dead_end",
            world: sealed_goal_grid(n),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "budget_limited",
            world: serpentine_grid(n),
            policy: SearchPolicy::default().with_max_expansions(n as u64),
        },
        Regime {
            name: "traced",
            world: serpentine_grid(n),
            policy: SearchPolicy::default().with_trace(true),
        },
    ]
}
