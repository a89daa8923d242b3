//! Per-search node bookkeeping.
//!
//! Nodes live in a dense arena indexed like the grid's cells. Parent links are
//! arena indices, and the whole table is dropped when the search returns, so
//! no search state survives from one invocation to the next.

use crate::grid::{Coord, Grid};

/// Index of a node in its [`NodeTable`]. Equal to the grid's row-major cell index.
pub type NodeId = usize;

/// A* bookkeeping for one cell
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub coord: Coord,
    /// Cost of the best known path from the start (infinite until discovered)
    pub g_cost: f64,
    /// Heuristic estimate to the goal
    pub h_cost: f64,
    /// Predecessor on the best known path
    pub parent: Option<NodeId>,
    /// Number of steps from the start along the parent chain
    pub depth: u32,
}

impl SearchNode {
    fn undiscovered(coord: Coord) -> Self {
        SearchNode {
            coord,
            g_cost: f64::INFINITY,
            h_cost: 0.0,
            parent: None,
            depth: 0,
        }
    }

    /// Frontier priority `g + h`
    pub fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }
}

/// Arena holding one [`SearchNode`] per grid cell
#[derive(Debug, Clone)]
pub struct NodeTable {
    nodes: Vec<SearchNode>,
}

impl NodeTable {
    pub fn new(grid: &Grid) -> Self {
        let nodes = (0..grid.cell_count())
            .map(|index| SearchNode::undiscovered(grid.coord_of(index)))
            .collect();
        NodeTable { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id]
    }

    /// Record `parent` as the predecessor of `id` and return the new depth
    pub fn set_parent(&mut self, id: NodeId, parent: NodeId) -> u32 {
        let depth = self.nodes[parent].depth + 1;
        let node = &mut self.nodes[id];
        node.parent = Some(parent);
        node.depth = depth;
        depth
    }

    /// Follow parent links from `id` back to the root.
    ///
    /// The result runs from `id` to the root (goal first, start last).
    /// Parent links always point at a node with strictly lower `g_cost`,
    /// so the walk terminates.
    pub fn trace_back(&self, id: NodeId) -> Vec<Coord> {
        let mut cells = vec![self.nodes[id].coord];
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            cells.push(self.nodes[parent].coord);
            current = parent;
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_nodes_are_undiscovered() {
        let grid = Grid::new(2, 3).unwrap();
        let table = NodeTable::new(&grid);
        assert_eq!(table.len(), 6);
        for id in 0..table.len() {
            let node = table.get(id);
            assert_eq!(node.coord, grid.coord_of(id));
            assert!(node.g_cost.is_infinite());
            assert_eq!(node.parent, None);
        }
    }

    #[test]
    fn trace_back_runs_goal_to_root() {
        let grid = Grid::new(3, 3).unwrap();
        let mut table = NodeTable::new(&grid);
        let start = grid.index_of(Coord::new(0, 0)).unwrap();
        let mid = grid.index_of(Coord::new(1, 1)).unwrap();
        let goal = grid.index_of(Coord::new(2, 2)).unwrap();

        assert_eq!(table.set_parent(mid, start), 1);
        assert_eq!(table.set_parent(goal, mid), 2);

        assert_eq!(
            table.trace_back(goal),
            vec![Coord::new(2, 2), Coord::new(1, 1), Coord::new(0, 0)]
        );
        assert_eq!(table.trace_back(start), vec![Coord::new(0, 0)]);
    }
}
