//! `WeightedGraph`: explicit directed graph over named nodes.
//!
//! Edges are stored per source node in insertion order, which is also the
//! successor enumeration order. Nodes without a heuristic entry estimate 0,
//! so an empty heuristic table turns A* into uniform-cost search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lodestar_search::contract::SearchProblem;
use lodestar_search::node::Transition;

use crate::contract::{HarnessWorld, WorldError};

/// A directed, weighted edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: String,
    pub cost: f64,
}

/// Directed weighted graph with one start and one goal.
///
/// Deserializes from JSON of the form
/// `{"start": "A", "goal": "B", "edges": {"A": [{"to": "B", "cost": 5.0}]}, "heuristic": {}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightedGraph {
    start: String,
    goal: String,
    #[serde(default)]
    edges: BTreeMap<String, Vec<Edge>>,
    #[serde(default)]
    heuristic: BTreeMap<String, f64>,
}

impl WeightedGraph {
    /// Create a graph with no edges.
    #[must_use]
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            edges: BTreeMap::new(),
            heuristic: BTreeMap::new(),
        }
    }

    /// Add a directed edge.
    #[must_use]
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, cost: f64) -> Self {
        self.edges.entry(from.into()).or_default().push(Edge {
            to: to.into(),
            cost,
        });
        self
    }

    /// Add an edge in both directions with the same cost.
    #[must_use]
    pub fn undirected_edge(self, a: impl Into<String>, b: impl Into<String>, cost: f64) -> Self {
        let (a, b) = (a.into(), b.into());
        self.edge(a.clone(), b.clone(), cost).edge(b, a, cost)
    }

    /// Set the heuristic estimate for a node.
    #[must_use]
    pub fn estimate(mut self, node: impl Into<String>, value: f64) -> Self {
        self.heuristic.insert(node.into(), value);
        self
    }

    /// Replace the goal node.
    #[must_use]
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    /// Parse and validate a graph from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Parse`] on malformed JSON and
    /// [`WorldError::InvalidEdgeCost`] on a negative or non-finite cost.
    pub fn from_json_str(json: &str) -> Result<Self, WorldError> {
        let graph: Self = serde_json::from_str(json).map_err(|e| WorldError::Parse {
            detail: e.to_string(),
        })?;
        graph.validate()?;
        Ok(graph)
    }

    /// Check every edge cost is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidEdgeCost`] for the first offending edge.
    pub fn validate(&self) -> Result<(), WorldError> {
        for (from, edges) in &self.edges {
            if let Some(bad) = edges.iter().find(|e| !e.cost.is_finite() || e.cost < 0.0) {
                return Err(WorldError::InvalidEdgeCost {
                    from: from.clone(),
                    to: bad.to.clone(),
                    cost: bad.cost.to_string(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Outgoing edges of `node`, in insertion order.
    #[must_use]
    pub fn out_edges(&self, node: &str) -> &[Edge] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl SearchProblem for WeightedGraph {
    type State = String;

    fn successors(&self, state: &String) -> Vec<Transition<String>> {
        self.out_edges(state)
            .iter()
            .map(|e| Transition::new(e.to.clone(), e.cost))
            .collect()
    }

    fn is_goal(&self, state: &String) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &String) -> f64 {
        self.heuristic.get(state).copied().unwrap_or(0.0)
    }
}

impl HarnessWorld for WeightedGraph {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "weighted_graph"
    }

    fn start_state(&self) -> String {
        self.start.clone()
    }
}
