//! Closed set: nodes already expanded.

use crate::node::NodeId;

/// Membership set over node ids, backed by a bitmap sized to the node arena
#[derive(Debug, Clone)]
pub struct VisitedSet {
    members: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    pub fn with_capacity(node_count: usize) -> Self {
        VisitedSet {
            members: vec![false; node_count],
            count: 0,
        }
    }

    /// Returns false if the node was already present
    pub fn add(&mut self, node: NodeId) -> bool {
        if self.members[node] {
            return false;
        }
        self.members[node] = true;
        self.count += 1;
        true
    }

    /// Reopen a node. Returns false if it was not present.
    pub fn remove(&mut self, node: NodeId) -> bool {
        if !self.members[node] {
            return false;
        }
        self.members[node] = false;
        self.count -= 1;
        true
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.get(node).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_contains() {
        let mut visited = VisitedSet::with_capacity(4);
        assert!(visited.is_empty());

        assert!(visited.add(2));
        assert!(!visited.add(2));
        assert!(visited.contains(2));
        assert!(!visited.contains(3));
        assert!(!visited.contains(99));
        assert_eq!(visited.len(), 1);

        assert!(visited.remove(2));
        assert!(!visited.remove(2));
        assert!(!visited.contains(2));
        assert!(visited.is_empty());
    }
}
