//! Topological ordering (Kahn's algorithm).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::{Direction, Graph, NodeKey};

impl<N: NodeKey> Graph<N> {
    /// Order all nodes so every edge points forward.
    ///
    /// When several nodes are eligible at once, the one registered first is
    /// emitted first, so the result depends only on the build sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cycle`] with the offending cycle if the graph is not
    /// acyclic.
    pub fn topological_order(&self) -> Result<Vec<&N>> {
        if let Some(cycle) = self.search_cycle() {
            return Err(Error::cycle(cycle.into_iter().map(|ix| self.id_at(ix))));
        }

        let mut remaining: Vec<usize> = self
            .node_indices()
            .map(|ix| self.edge_refs(ix, Direction::Incoming).len())
            .collect();
        let mut eligible: BinaryHeap<_> = self
            .node_indices()
            .filter(|ix| remaining[ix.index()] == 0)
            .map(Reverse)
            .collect();

        let mut order = Vec::with_capacity(self.node_count());
        while let Some(Reverse(ix)) = eligible.pop() {
            order.push(self.id_at(ix));
            for next in self.adjacent(ix, Direction::Outgoing) {
                let in_degree = &mut remaining[next.index()];
                *in_degree -= 1;
                if *in_degree == 0 {
                    eligible.push(Reverse(next));
                }
            }
        }

        if order.len() != self.node_count() {
            let stuck = self
                .node_indices()
                .filter(|ix| remaining[ix.index()] > 0)
                .map(|ix| self.id_at(ix));
            return Err(Error::cycle(stuck));
        }

        tracing::debug!(nodes = order.len(), "computed topological order");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_empty_order() {
        let g: Graph<String> = Graph::new();
        assert!(g.topological_order().unwrap().is_empty());
    }

    #[test]
    fn ties_break_by_registration_order() {
        let mut g = Graph::new();
        g.add_node("Z");
        g.add_node("Y");
        g.add_edge("X", "Y", None);

        // Z and X start eligible; Z was registered first
        assert_eq!(g.topological_order().unwrap(), vec![&"Z", &"X", &"Y"]);
    }

    #[test]
    fn parallel_labeled_edges_are_counted_per_edge() {
        let mut g = Graph::new();
        g.add_edge("A", "B", Some("is_a"));
        g.add_edge("A", "B", Some("part_of"));
        g.add_edge("B", "C", None);

        assert_eq!(g.topological_order().unwrap(), vec![&"A", &"B", &"C"]);
    }

    #[test]
    fn later_registered_source_still_precedes_target() {
        let mut g = Graph::new();
        g.add_node("leaf");
        g.add_edge("root", "leaf", None);

        assert_eq!(g.topological_order().unwrap(), vec![&"root", &"leaf"]);
    }

    #[test]
    fn cyclic_graph_reports_the_cycle() {
        let mut g = Graph::new();
        g.add_edge("A", "B", None);
        g.add_edge("B", "A", None);

        let err = g.topological_order().unwrap_err();
        assert_eq!(
            err,
            Error::Cycle {
                path: vec!["A".to_string(), "B".to_string()]
            }
        );
    }
}
