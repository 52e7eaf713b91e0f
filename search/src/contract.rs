//! Search problem contract trait.

use std::hash::Hash;

use crate::node::Transition;

/// Trait for problems that support A* search.
///
/// # Contract
///
/// - All three methods are pure oracles: same input, same output, and no
///   side effects the engine could observe. The engine may call each of them
///   any number of times, including several times for the same state.
/// - `successors` must return a finite sequence. Edge costs must be
///   non-negative and finite.
/// - `heuristic` must be non-negative and finite. For an optimal result it
///   must also be admissible; for the default never-reopen policy to stay
///   optimal it must be consistent.
/// - Enumeration order is part of the input: tie-breaking follows insertion
///   order, so a deterministic `successors` gives deterministic results.
pub trait SearchProblem {
    /// State type. Identity is by value.
    type State: Clone + Eq + Hash;

    /// Weighted transitions out of `state`. An empty result is a dead end.
    fn successors(&self, state: &Self::State) -> Vec<Transition<Self::State>>;

    /// Test whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimate of the remaining cost from `state` to a goal.
    fn heuristic(&self, state: &Self::State) -> f64;
}

/// Adapter turning three closures into a [`SearchProblem`].
pub struct FnProblem<S, G, N, H> {
    is_goal: G,
    successors: N,
    heuristic: H,
    _state: std::marker::PhantomData<fn(&S)>,
}

impl<S, G, N, H, I> FnProblem<S, G, N, H>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = (S, f64)>,
    H: Fn(&S) -> f64,
{
    #[must_use]
    pub fn new(is_goal: G, successors: N, heuristic: H) -> Self {
        Self {
            is_goal,
            successors,
            heuristic,
            _state: std::marker::PhantomData,
        }
    }
}

impl<S, G, N, H, I> SearchProblem for FnProblem<S, G, N, H>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = (S, f64)>,
    H: Fn(&S) -> f64,
{
    type State = S;

    fn successors(&self, state: &S) -> Vec<Transition<S>> {
        (self.successors)(state)
            .into_iter()
            .map(Transition::from)
            .collect()
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }

    fn heuristic(&self, state: &S) -> f64 {
        (self.heuristic)(state)
    }
}
