//! Neighbor exploration: direct neighbors, transitive closure and BFS trees.
//!
//! Every traversal runs on an explicit queue with a visited set, so cyclic
//! input terminates and deep ontologies never touch the call stack.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::{IndexMap, IndexSet};
use petgraph::graph::NodeIndex;

use crate::error::Result;
use crate::graph::{Direction, Graph, NodeKey};

/// Breadth-first search tree rooted at one node.
///
/// Only reached nodes appear; unreachable nodes have no distance.
#[derive(Debug, Clone)]
pub struct BfsTree<'g, N> {
    start: &'g N,
    distance: IndexMap<&'g N, usize>,
    predecessor: HashMap<&'g N, &'g N>,
}

impl<'g, N: NodeKey> BfsTree<'g, N> {
    /// The node the search started from.
    pub fn start(&self) -> &'g N {
        self.start
    }

    /// Hop count from the start node, or `None` if unreachable.
    pub fn distance(&self, node: &N) -> Option<usize> {
        self.distance.get(node).copied()
    }

    /// The node `node` was discovered from. `None` for the start node and
    /// for unreachable nodes.
    pub fn predecessor(&self, node: &N) -> Option<&'g N> {
        self.predecessor.get(node).copied()
    }

    /// Reached nodes in discovery order, start node first.
    pub fn reached(&self) -> impl Iterator<Item = (&'g N, usize)> + '_ {
        self.distance.iter().map(|(n, d)| (*n, *d))
    }

    /// Walk predecessor links back to the start node.
    pub fn path_to(&self, node: &N) -> Option<Vec<&'g N>> {
        let (&found, _) = self.distance.get_key_value(node)?;
        let mut path = vec![found];
        let mut current = found;
        while let Some(&parent) = self.predecessor.get(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

impl<N: NodeKey> Graph<N> {
    /// Nodes exactly one edge away from `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownNode`] if `id` was never registered.
    pub fn direct(&self, id: &N, direction: Direction) -> Result<Vec<&N>> {
        self.neighbors(id, direction)
    }

    /// Every node reachable from `id` by repeatedly following `direction`.
    ///
    /// Results are in discovery (breadth-first) order. `id` itself is only
    /// included when `include_start` is set, even if a cycle leads back to it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownNode`] if `id` was never registered.
    pub fn transitive(
        &self,
        id: &N,
        direction: Direction,
        include_start: bool,
    ) -> Result<IndexSet<&N>> {
        let start = self.index_of(id)?;
        let reached = self.reachable_from(start, direction);

        let mut result = IndexSet::with_capacity(reached.len() + 1);
        if include_start {
            result.insert(self.id_at(start));
        }
        result.extend(reached.into_iter().map(|ix| self.id_at(ix)));
        Ok(result)
    }

    /// Indices reachable from `start`, excluding `start`, in BFS order.
    fn reachable_from(&self, start: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut reached = Vec::new();

        while let Some(current) = queue.pop_front() {
            for next in self.adjacent(current, direction) {
                if visited.insert(next) {
                    reached.push(next);
                    queue.push_back(next);
                }
            }
        }

        reached
    }

    /// Breadth-first search from `start`, recording distances and
    /// predecessors.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownNode`] if `start` was never registered.
    pub fn bfs(&self, start: &N, direction: Direction) -> Result<BfsTree<'_, N>> {
        let start_ix = self.index_of(start)?;
        let start = self.id_at(start_ix);

        let mut distance = IndexMap::from([(start, 0)]);
        let mut predecessor = HashMap::new();
        let mut queue = VecDeque::from([(start_ix, 0_usize)]);

        while let Some((current, depth)) = queue.pop_front() {
            let current_id = self.id_at(current);
            for next in self.adjacent(current, direction) {
                let next_id = self.id_at(next);
                if !distance.contains_key(next_id) {
                    distance.insert(next_id, depth + 1);
                    predecessor.insert(next_id, current_id);
                    queue.push_back((next, depth + 1));
                }
            }
        }

        Ok(BfsTree {
            start,
            distance,
            predecessor,
        })
    }

    /// Fewest-hop path `from -> .. -> to` along outgoing edges.
    ///
    /// Returns `Ok(None)` when `to` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownNode`] if either endpoint was never
    /// registered.
    pub fn shortest_path(&self, from: &N, to: &N) -> Result<Option<Vec<&N>>> {
        self.index_of(to)?;
        let tree = self.bfs(from, Direction::Outgoing)?;
        Ok(tree.path_to(to))
    }
}
