//! Longest-path depth on acyclic graphs.
//!
//! depth(v) is 0 for a node without outgoing edges and otherwise one more
//! than the deepest out-neighbor. Each node's depth is computed once with an
//! explicit post-order stack and reused by every ancestor.

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;

use crate::error::{Error, Result};
use crate::graph::{Direction, Graph, NodeKey};

impl<N: NodeKey> Graph<N> {
    /// Length in edges of the longest path starting at `root`.
    ///
    /// Without a root, the maximum over every node with no incoming edge is
    /// returned: the diameter of the graph. An empty graph has depth 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `root` was never registered and
    /// [`Error::Cycle`] if the graph is cyclic.
    pub fn max_depth(&self, root: Option<&N>) -> Result<usize> {
        let root = root.map(|id| self.index_of(id)).transpose()?;
        self.ensure_acyclic()?;

        let depth = match root {
            Some(ix) => self.depth_table([ix])[ix.index()].unwrap_or(0),
            None => {
                let roots: Vec<NodeIndex> = self.root_indices().collect();
                let table = self.depth_table(roots.iter().copied());
                roots
                    .iter()
                    .filter_map(|ix| table[ix.index()])
                    .max()
                    .unwrap_or(0)
            }
        };

        tracing::debug!(depth, "computed max depth");
        Ok(depth)
    }

    /// Depth of every node, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cycle`] if the graph is cyclic.
    pub fn depths(&self) -> Result<IndexMap<&N, usize>> {
        self.ensure_acyclic()?;
        let table = self.depth_table(self.node_indices());
        Ok(self
            .node_indices()
            .map(|ix| (self.id_at(ix), table[ix.index()].unwrap_or(0)))
            .collect())
    }

    fn ensure_acyclic(&self) -> Result<()> {
        match self.search_cycle() {
            Some(cycle) => Err(Error::cycle(cycle.into_iter().map(|ix| self.id_at(ix)))),
            None => Ok(()),
        }
    }

    /// Memoized depths for everything reachable from `starts`.
    ///
    /// Must only be called on an acyclic graph.
    fn depth_table(&self, starts: impl IntoIterator<Item = NodeIndex>) -> Vec<Option<usize>> {
        let mut depth: Vec<Option<usize>> = vec![None; self.node_count()];
        // (node, children already pushed)
        let mut stack: Vec<(NodeIndex, bool)> = Vec::new();

        for start in starts {
            if depth[start.index()].is_some() {
                continue;
            }
            stack.push((start, false));

            while let Some((node, expanded)) = stack.pop() {
                if depth[node.index()].is_some() {
                    continue;
                }
                let children = self.adjacent(node, Direction::Outgoing);

                if expanded {
                    let deepest = children
                        .iter()
                        .filter_map(|child| depth[child.index()])
                        .max();
                    depth[node.index()] = Some(deepest.map_or(0, |d| d + 1));
                } else {
                    stack.push((node, true));
                    stack.extend(
                        children
                            .into_iter()
                            .filter(|child| depth[child.index()].is_none())
                            .map(|child| (child, false)),
                    );
                }
            }
        }

        depth
    }
}
