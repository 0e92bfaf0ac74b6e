//! Cycle detection and depth-first edge classification.
//!
//! Both entry points run the same iterative depth-first search over every
//! node in insertion order, restarting from each unvisited node so
//! disconnected components are covered. A node is unvisited, in progress
//! (on the current DFS path) or finished. Reaching an in-progress node is a
//! back edge, which is exactly the signature of a directed cycle.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::graph::{Direction, EdgeView, Graph, NodeKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Finished,
}

/// One DFS stack frame: a node and a cursor into its successors.
struct Frame {
    node: NodeIndex,
    children: Vec<NodeIndex>,
    next: usize,
}

impl Frame {
    fn new<N: NodeKey>(graph: &Graph<N>, node: NodeIndex) -> Self {
        Self {
            node,
            children: graph.adjacent(node, Direction::Outgoing),
            next: 0,
        }
    }
}

/// Classification of an edge relative to a depth-first forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// The edge discovered its target.
    Tree,
    /// The target was still on the DFS path; the edge closes a cycle.
    Back,
    /// The target is an already finished descendant of the source.
    Forward,
    /// The target was finished in an earlier branch or tree.
    Cross,
}

/// An edge together with its DFS classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedEdge<'g, N> {
    /// The classified edge.
    pub edge: EdgeView<'g, N>,
    /// How the DFS met this edge.
    pub kind: EdgeKind,
}

/// Result of a full depth-first search with timestamps.
///
/// Times come from one shared counter that ticks on every discovery and
/// every finish, so `discovery(v) < finish(v)` and intervals nest.
#[derive(Debug, Clone)]
pub struct DfsForest<'g, N> {
    discovery: HashMap<&'g N, usize>,
    finish: HashMap<&'g N, usize>,
    predecessor: HashMap<&'g N, &'g N>,
    edges: Vec<ClassifiedEdge<'g, N>>,
}

impl<'g, N: NodeKey> DfsForest<'g, N> {
    /// Time at which `node` was first reached.
    pub fn discovery(&self, node: &N) -> Option<usize> {
        self.discovery.get(node).copied()
    }

    /// Time at which all of `node`'s descendants were done.
    pub fn finish(&self, node: &N) -> Option<usize> {
        self.finish.get(node).copied()
    }

    /// Tree parent of `node`; `None` for the root of each DFS tree.
    pub fn predecessor(&self, node: &N) -> Option<&'g N> {
        self.predecessor.get(node).copied()
    }

    /// Every edge, in the order the search examined them.
    pub fn edges(&self) -> &[ClassifiedEdge<'g, N>] {
        &self.edges
    }

    /// Kind assigned to the first edge `source -> target`.
    pub fn kind_of(&self, source: &N, target: &N) -> Option<EdgeKind> {
        self.edges
            .iter()
            .find(|c| c.edge.source == source && c.edge.target == target)
            .map(|c| c.kind)
    }

    /// Number of edges of the given kind.
    pub fn count(&self, kind: EdgeKind) -> usize {
        self.edges.iter().filter(|c| c.kind == kind).count()
    }

    /// Whether any back edge was found.
    pub fn has_back_edge(&self) -> bool {
        self.count(EdgeKind::Back) > 0
    }
}

impl<N: NodeKey> Graph<N> {
    /// Whether the graph contains no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        self.search_cycle().is_none()
    }

    /// A directed cycle, if one exists.
    ///
    /// The path runs from the node the back edge points to, along the DFS
    /// path, to the node the back edge leaves from. A self-loop yields a
    /// single-node path.
    pub fn find_cycle(&self) -> Option<Vec<&N>> {
        let cycle = self.search_cycle()?;
        Some(cycle.into_iter().map(|ix| self.id_at(ix)).collect())
    }

    pub(crate) fn search_cycle(&self) -> Option<Vec<NodeIndex>> {
        let mut state = vec![VisitState::Unvisited; self.node_count()];

        for root in self.node_indices() {
            if state[root.index()] != VisitState::Unvisited {
                continue;
            }

            state[root.index()] = VisitState::InProgress;
            let mut stack = vec![Frame::new(self, root)];

            while let Some(frame) = stack.last_mut() {
                let Some(&child) = frame.children.get(frame.next) else {
                    state[frame.node.index()] = VisitState::Finished;
                    stack.pop();
                    continue;
                };
                frame.next += 1;

                match state[child.index()] {
                    VisitState::Unvisited => {
                        state[child.index()] = VisitState::InProgress;
                        stack.push(Frame::new(self, child));
                    }
                    VisitState::InProgress => {
                        let from = stack.iter().position(|f| f.node == child).unwrap_or(0);
                        let cycle: Vec<NodeIndex> = stack[from..].iter().map(|f| f.node).collect();
                        tracing::debug!(
                            length = cycle.len(),
                            entry = %self.id_at(child),
                            "cycle detected"
                        );
                        return Some(cycle);
                    }
                    VisitState::Finished => {}
                }
            }
        }

        None
    }

    /// Run a full depth-first search and classify every edge.
    pub fn classify_edges(&self) -> DfsForest<'_, N> {
        let mut state = vec![VisitState::Unvisited; self.node_count()];
        let mut discovered = vec![0_usize; self.node_count()];
        let mut forest = DfsForest {
            discovery: HashMap::with_capacity(self.node_count()),
            finish: HashMap::with_capacity(self.node_count()),
            predecessor: HashMap::new(),
            edges: Vec::with_capacity(self.edge_count()),
        };
        let mut time = 0_usize;

        for root in self.node_indices() {
            if state[root.index()] != VisitState::Unvisited {
                continue;
            }

            time += 1;
            state[root.index()] = VisitState::InProgress;
            discovered[root.index()] = time;
            forest.discovery.insert(self.id_at(root), time);

            let mut stack = vec![(root, self.edge_refs(root, Direction::Outgoing), 0_usize)];

            while let Some((node, edges, next)) = stack.last_mut() {
                let node = *node;
                let Some(&edge) = edges.get(*next) else {
                    time += 1;
                    state[node.index()] = VisitState::Finished;
                    forest.finish.insert(self.id_at(node), time);
                    stack.pop();
                    continue;
                };
                *next += 1;

                let target = edge.target();
                let kind = match state[target.index()] {
                    VisitState::Unvisited => EdgeKind::Tree,
                    VisitState::InProgress => EdgeKind::Back,
                    VisitState::Finished if discovered[node.index()] < discovered[target.index()] => {
                        EdgeKind::Forward
                    }
                    VisitState::Finished => EdgeKind::Cross,
                };
                forest.edges.push(ClassifiedEdge {
                    edge: self.view(edge),
                    kind,
                });

                if kind == EdgeKind::Tree {
                    time += 1;
                    state[target.index()] = VisitState::InProgress;
                    discovered[target.index()] = time;
                    forest.discovery.insert(self.id_at(target), time);
                    forest
                        .predecessor
                        .insert(self.id_at(target), self.id_at(node));
                    stack.push((target, self.edge_refs(target, Direction::Outgoing), 0));
                }
            }
        }

        forest
    }
}
