//! `GridWorld`: 4-connected grid with blocked cells and unit move cost.
//!
//! Moves are generated in a fixed order: west `(0, -1)`, south `(+1, 0)`,
//! east `(0, +1)`, north `(-1, 0)` as `(row, col)` deltas. Tie-breaking in
//! the engine follows that order, so paths are reproducible.
//!
//! The heuristic is the Manhattan distance to the goal, which is admissible
//! and consistent for unit-cost 4-connected moves.

use serde::{Deserialize, Serialize};

use lodestar_search::contract::SearchProblem;
use lodestar_search::node::Transition;

use crate::contract::{HarnessWorld, WorldError};

/// A grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Move order as `(row, col)` deltas.
const MOVES: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Rectangular grid world with a single start and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    rows: usize,
    cols: usize,
    /// Row-major; `true` = blocked.
    blocked: Vec<bool>,
    start: Cell,
    goal: Cell,
}

impl GridWorld {
    /// Build from rows of `0` (free) / `1` (blocked) cells.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the grid is empty or ragged, holds a value
    /// other than 0/1, or `start`/`goal` is off the grid or blocked.
    pub fn from_rows(rows: &[Vec<u8>], start: Cell, goal: Cell) -> Result<Self, WorldError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(WorldError::NotRectangular {
                detail: "grid has no cells".into(),
            });
        }

        let mut blocked = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(WorldError::NotRectangular {
                    detail: format!("row {r} has {} cells, expected {cols}", row.len()),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => blocked.push(false),
                    1 => blocked.push(true),
                    other => {
                        return Err(WorldError::InvalidCell {
                            row: r,
                            col: c,
                            value: other.to_string(),
                        })
                    }
                }
            }
        }

        let world = Self {
            rows: rows.len(),
            cols,
            blocked,
            start,
            goal,
        };
        world.check_endpoint("start", start)?;
        world.check_endpoint("goal", goal)?;
        Ok(world)
    }

    /// Parse a text grid: `.` free, `#` blocked, `S` start, `G` goal.
    ///
    /// Blank lines and surrounding whitespace on each line are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] on ragged rows, unknown characters, or a
    /// missing or repeated `S`/`G` marker.
    pub fn parse(text: &str) -> Result<Self, WorldError> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (r, line) in text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    '.' => row.push(0),
                    '#' => row.push(1),
                    'S' => {
                        set_marker(&mut start, "start", Cell::new(r, c))?;
                        row.push(0);
                    }
                    'G' => {
                        set_marker(&mut goal, "goal", Cell::new(r, c))?;
                        row.push(0);
                    }
                    other => {
                        return Err(WorldError::InvalidCell {
                            row: r,
                            col: c,
                            value: other.to_string(),
                        })
                    }
                }
            }
            rows.push(row);
        }

        let start = start.ok_or_else(|| WorldError::InvalidEndpoint {
            role: "start",
            detail: "no 'S' marker".into(),
        })?;
        let goal = goal.ok_or_else(|| WorldError::InvalidEndpoint {
            role: "goal",
            detail: "no 'G' marker".into(),
        })?;
        Self::from_rows(&rows, start, goal)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether `cell` is on the grid and not blocked.
    #[must_use]
    pub fn is_free(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols && !self.blocked[cell.row * self.cols + cell.col]
    }

    /// Free 4-neighbors of `cell`, in move order.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        MOVES
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = cell.row.checked_add_signed(dr)?;
                let col = cell.col.checked_add_signed(dc)?;
                Some(Cell::new(row, col))
            })
            .filter(|&n| self.is_free(n))
            .collect()
    }

    fn check_endpoint(&self, role: &'static str, cell: Cell) -> Result<(), WorldError> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return Err(WorldError::InvalidEndpoint {
                role,
                detail: format!(
                    "({}, {}) is outside the {}x{} grid",
                    cell.row, cell.col, self.rows, self.cols
                ),
            });
        }
        if !self.is_free(cell) {
            return Err(WorldError::InvalidEndpoint {
                role,
                detail: format!("({}, {}) is blocked", cell.row, cell.col),
            });
        }
        Ok(())
    }
}

fn set_marker(slot: &mut Option<Cell>, role: &'static str, cell: Cell) -> Result<(), WorldError> {
    if let Some(existing) = slot {
        return Err(WorldError::InvalidEndpoint {
            role,
            detail: format!(
                "repeated marker at ({}, {}) and ({}, {})",
                existing.row, existing.col, cell.row, cell.col
            ),
        });
    }
    *slot = Some(cell);
    Ok(())
}

impl SearchProblem for GridWorld {
    type State = Cell;

    fn successors(&self, state: &Cell) -> Vec<Transition<Cell>> {
        self.neighbors(*state)
            .into_iter()
            .map(|n| Transition::new(n, 1.0))
            .collect()
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.goal
    }

    #[allow(clippy::cast_precision_loss)]
    fn heuristic(&self, state: &Cell) -> f64 {
        state.manhattan(self.goal) as f64
    }
}

impl HarnessWorld for GridWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid"
    }

    fn start_state(&self) -> Cell {
        self.start
    }
}
