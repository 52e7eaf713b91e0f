//! Per-search lookup tables: best-known scores and back-pointers.
//!
//! Both tables are total: a missing g-score reads as `+inf` and a missing
//! predecessor reads as `None`. They are created per search call and dropped
//! with it.

use std::collections::HashMap;
use std::hash::Hash;

/// Scores recorded for one discovered state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scores {
    g: f64,
    f: f64,
}

/// Mapping from state to best-known path cost from start (g) and its
/// derived f-score.
///
/// `f` is only ever written together with a fresh `g`, via [`ScoreTable::record`].
#[derive(Debug)]
pub struct ScoreTable<S> {
    scores: HashMap<S, Scores>,
}

impl<S: Eq + Hash> ScoreTable<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }

    /// Best-known g-score, or `+inf` if the state was never discovered.
    #[must_use]
    pub fn g(&self, state: &S) -> f64 {
        self.scores.get(state).map_or(f64::INFINITY, |s| s.g)
    }

    /// Live f-score, or `+inf` if the state was never discovered.
    #[must_use]
    pub fn f(&self, state: &S) -> f64 {
        self.scores.get(state).map_or(f64::INFINITY, |s| s.f)
    }

    /// Record a new g-score and its heuristic; stores `f = g + h`.
    ///
    /// Returns the stored f-score.
    pub fn record(&mut self, state: S, g: f64, h: f64) -> f64 {
        let f = g + h;
        self.scores.insert(state, Scores { g, f });
        f
    }

    /// Whether the state has ever been discovered.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.scores.contains_key(state)
    }

    /// Number of discovered states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: Eq + Hash> Default for ScoreTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mapping from state to its predecessor on the best known path.
///
/// The start state never has an entry.
#[derive(Debug)]
pub struct CameFrom<S> {
    parents: HashMap<S, S>,
}

impl<S: Eq + Hash> CameFrom<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Predecessor of `state`, or `None` for the start and unknown states.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<&S> {
        self.parents.get(state)
    }

    /// Point `state` at `predecessor`, replacing any earlier back-pointer.
    pub fn set(&mut self, state: S, predecessor: S) {
        self.parents.insert(state, predecessor);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<S: Eq + Hash> Default for CameFrom<S> {
    fn default() -> Self {
        Self::new()
    }
}
