//! Search entry points and the A* main loop.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::contract::{FnProblem, SearchProblem};
use crate::error::SearchError;
use crate::frontier::{Frontier, FrontierPop};
use crate::node::{StateStatus, Transition};
use crate::policy::{ReopenPolicy, SearchPolicy, ValidationMode};
use crate::result::{
    FoundPath, PopDisposition, PopEvent, SearchResult, SearchStats, TerminationReason,
};
use crate::tables::{CameFrom, ScoreTable};

/// Score tables and closed set owned by one search call.
struct SearchTables<S> {
    scores: ScoreTable<S>,
    came_from: CameFrom<S>,
    closed: HashSet<S>,
}

impl<S: Clone + Eq + Hash> SearchTables<S> {
    fn new() -> Self {
        Self {
            scores: ScoreTable::new(),
            came_from: CameFrom::new(),
            closed: HashSet::new(),
        }
    }

    fn status(&self, state: &S) -> StateStatus {
        if self.closed.contains(state) {
            StateStatus::Closed
        } else if self.scores.contains(state) {
            StateStatus::Open
        } else {
            StateStatus::Unseen
        }
    }

    /// A popped entry is stale if its state is closed or the live f-score
    /// has since dropped below the one it was pushed with.
    fn is_stale(&self, pop: &FrontierPop<S>) -> bool {
        self.status(&pop.state) == StateStatus::Closed || pop.f_score > self.scores.f(&pop.state)
    }
}

/// Run A* from `start` over `problem`.
///
/// Returns `Ok` for every outcome of a search that ran: goal reached,
/// frontier exhausted (no path), or expansion budget exceeded. Inspect
/// [`SearchResult::termination`] to tell them apart.
///
/// The engine does not bound the state space. On an infinite space with no
/// reachable goal it runs until `policy.max_expansions` (if set) is spent,
/// and otherwise does not return.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails [`SearchPolicy::validate`].
/// - Under [`ValidationMode::Strict`], [`SearchError::NegativeEdgeCost`],
///   [`SearchError::NonFiniteEdgeCost`], [`SearchError::NegativeHeuristic`],
///   or [`SearchError::NonFiniteHeuristic`] as soon as a callback returns a
///   value violating the non-negative, finite precondition.
pub fn search<P: SearchProblem>(
    start: P::State,
    problem: &P,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::State>, SearchError> {
    policy.validate()?;
    let strict = policy.validation == ValidationMode::Strict;

    let mut frontier = Frontier::new();
    let mut tables = SearchTables::new();
    let mut stats = SearchStats::default();
    let mut events: Option<Vec<PopEvent<P::State>>> = policy.record_trace.then(Vec::new);

    let start_h = problem.heuristic(&start);
    if strict {
        SearchError::check_heuristic(start_h)?;
    }
    let start_f = tables.scores.record(start.clone(), 0.0, start_h);
    frontier.insert(start, start_f);

    debug!(
        max_expansions = ?policy.max_expansions,
        reopen = ?policy.reopen,
        start_f,
        "search started"
    );

    let mut found = None;

    let termination = loop {
        let Some(pop) = frontier.extract_min() else {
            break TerminationReason::FrontierExhausted;
        };
        let order = stats.pops;
        stats.pops += 1;
        let g_current = tables.scores.g(&pop.state);

        if tables.is_stale(&pop) {
            stats.stale_pops += 1;
            trace!(seq = pop.seq, f_score = pop.f_score, "discarded stale entry");
            record_event(&mut events, order, &pop, g_current, PopDisposition::Stale);
            continue;
        }

        if problem.is_goal(&pop.state) {
            record_event(&mut events, order, &pop, g_current, PopDisposition::Goal);
            found = Some(FoundPath {
                states: reconstruct_path(&tables.came_from, pop.state),
                cost: g_current,
            });
            break TerminationReason::GoalReached;
        }

        if policy
            .max_expansions
            .is_some_and(|max| stats.expansions >= max)
        {
            record_event(
                &mut events,
                order,
                &pop,
                g_current,
                PopDisposition::BudgetExceeded,
            );
            break TerminationReason::ExpansionBudgetExceeded;
        }

        stats.expansions += 1;
        tables.closed.insert(pop.state.clone());

        let mut relaxed = 0u64;
        let mut skipped_closed = 0u64;

        for Transition { state: successor, cost } in problem.successors(&pop.state) {
            if strict {
                SearchError::check_edge_cost(cost)?;
            }

            let status = tables.status(&successor);
            if status == StateStatus::Closed && policy.reopen == ReopenPolicy::NeverReopen {
                skipped_closed += 1;
                continue;
            }

            let tentative = g_current + cost;
            if tentative < tables.scores.g(&successor) {
                if status == StateStatus::Closed {
                    tables.closed.remove(&successor);
                    stats.reopened += 1;
                }
                let h = problem.heuristic(&successor);
                if strict {
                    SearchError::check_heuristic(h)?;
                }
                tables.came_from.set(successor.clone(), pop.state.clone());
                let f = tables.scores.record(successor.clone(), tentative, h);
                let seq = frontier.insert(successor, f);
                trace!(seq, g_score = tentative, f_score = f, ?status, "relaxed successor");
                stats.relaxations += 1;
                relaxed += 1;
            } else if status == StateStatus::Closed {
                skipped_closed += 1;
            }
        }

        record_event(
            &mut events,
            order,
            &pop,
            g_current,
            PopDisposition::Expanded {
                relaxed,
                skipped_closed,
            },
        );
    };

    stats.frontier_inserts = frontier.inserted();
    stats.frontier_high_water = frontier.high_water();

    debug!(
        ?termination,
        cost = ?found.as_ref().map(|p: &FoundPath<P::State>| p.cost),
        expansions = stats.expansions,
        stale_pops = stats.stale_pops,
        relaxations = stats.relaxations,
        reopened = stats.reopened,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );

    Ok(SearchResult {
        termination,
        path: found,
        stats,
        trace: events,
    })
}

/// Run A* with closures and the default policy.
///
/// `successors` may return any iterable of `(state, cost)` pairs. All three
/// callbacks must be pure; see [`SearchProblem`].
///
/// # Errors
///
/// See [`search`].
pub fn astar<S, G, N, H, I>(
    start: S,
    is_goal: G,
    successors: N,
    heuristic: H,
) -> Result<SearchResult<S>, SearchError>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = (S, f64)>,
    H: Fn(&S) -> f64,
{
    astar_with_policy(start, is_goal, successors, heuristic, &SearchPolicy::default())
}

/// Run A* with closures and an explicit policy.
///
/// # Errors
///
/// See [`search`].
pub fn astar_with_policy<S, G, N, H, I>(
    start: S,
    is_goal: G,
    successors: N,
    heuristic: H,
    policy: &SearchPolicy,
) -> Result<SearchResult<S>, SearchError>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = (S, f64)>,
    H: Fn(&S) -> f64,
{
    let problem = FnProblem::new(is_goal, successors, heuristic);
    search(start, &problem, policy)
}

/// Reconstruct the forward path from the start to `goal`.
///
/// Walks back-pointers until a state with no predecessor (the start), then
/// reverses. The walk takes at most `came_from.len() + 1` steps.
#[must_use]
pub fn reconstruct_path<S: Clone + Eq + Hash>(came_from: &CameFrom<S>, goal: S) -> Vec<S> {
    let limit = came_from.len() + 1;
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(state) = current {
        if path.len() == limit {
            break;
        }
        current = came_from.get(&state).cloned();
        path.push(state);
    }

    path.reverse();
    path
}

fn record_event<S: Clone>(
    events: &mut Option<Vec<PopEvent<S>>>,
    order: u64,
    pop: &FrontierPop<S>,
    g_score: f64,
    disposition: PopDisposition,
) {
    if let Some(events) = events {
        events.push(PopEvent {
            order,
            state: pop.state.clone(),
            f_score: pop.f_score,
            g_score,
            seq: pop.seq,
            disposition,
        });
    }
}
