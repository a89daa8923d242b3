//! Open set: nodes discovered but not yet expanded.
//!
//! Entries are kept in a `BTreeSet` ordered by `(f_cost, insertion sequence)`
//! so that popping the minimum and removing an arbitrary node are both
//! O(log n), and equal priorities pop in insertion order. A side index maps
//! each queued node to its current key.

use crate::node::NodeId;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy)]
struct FrontierKey {
    f_cost: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            // Tie-breaker: older entries first
            .then_with(|| self.seq.cmp(&other.seq))
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Min-priority queue over node ids
#[derive(Debug, Default)]
pub struct Frontier {
    entries: BTreeSet<FrontierKey>,
    index: HashMap<NodeId, FrontierKey>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node` with priority `f_cost`.
    ///
    /// A node that is already queued is moved to the new priority and counts
    /// as the newest entry for tie-breaking.
    pub fn insert(&mut self, node: NodeId, f_cost: f64) {
        self.remove(node);
        let key = FrontierKey {
            f_cost,
            seq: self.next_seq,
            node,
        };
        self.next_seq += 1;
        self.entries.insert(key);
        self.index.insert(node, key);
        self.high_water = self.high_water.max(self.entries.len());
    }

    /// Remove and return the lowest-priority node
    pub fn pop_min(&mut self) -> Option<NodeId> {
        let key = self.entries.pop_first()?;
        self.index.remove(&key.node);
        Some(key.node)
    }

    /// Remove `node` wherever it sits in the queue. Returns false if absent.
    pub fn remove(&mut self, node: NodeId) -> bool {
        match self.index.remove(&node) {
            Some(key) => {
                self.entries.remove(&key);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest size the frontier has reached
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
