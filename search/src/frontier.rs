//! Priority open set with lazy invalidation.
//!
//! The frontier never deduplicates: an improved score is expressed as a fresh
//! insertion, and the engine discards stale entries when they surface. No
//! `contains` or `decrease-key` is exposed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::FrontierKey;

/// A frontier entry wrapping a state with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_score` first).
#[derive(Debug)]
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// An entry removed from the frontier by [`Frontier::extract_min`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierPop<S> {
    pub state: S,
    /// The f-score recorded when this entry was inserted.
    pub f_score: f64,
    /// Insertion sequence number of this entry.
    pub seq: u64,
}

/// Min-ordered frontier keyed by `(f_score, seq)`.
///
/// Sequence numbers are assigned by the frontier itself, starting at 0, so
/// ties on `f_score` resolve to the earliest insertion.
#[derive(Debug)]
pub struct Frontier<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    next_seq: u64,
    high_water: u64,
}

impl<S> Frontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Insert a state with its f-score. Always succeeds; duplicates coexist.
    ///
    /// Returns the sequence number assigned to the entry.
    pub fn insert(&mut self, state: S, f_score: f64) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey { f_score, seq }),
            state,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        seq
    }

    /// Remove and return the entry with the smallest `(f_score, seq)`.
    #[must_use]
    pub fn extract_min(&mut self) -> Option<FrontierPop<S>> {
        self.heap.pop().map(|e| FrontierPop {
            state: e.state,
            f_score: e.key.0.f_score,
            seq: e.key.0.seq,
        })
    }

    /// Current number of pending entries (stale ones included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Total number of insertions so far.
    #[must_use]
    pub fn inserted(&self) -> u64 {
        self.next_seq
    }
}

impl<S> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
