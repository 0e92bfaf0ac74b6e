//! Graph storage: nodes, labeled edges and both adjacency directions.
//!
//! The graph is an arena (`petgraph::DiGraph`) paired with a
//! `HashMap<N, NodeIndex>` lookup table. Node indices are handed out in
//! insertion order, so the index order doubles as graph-construction order
//! for every deterministic tie-break in the algorithms.
//!
//! ## Edge Direction Convention
//!
//! Edges are stored exactly as given: `add_edge(a, b, ..)` records `a -> b`.
//! Loaders decide what that means for their domain (ontology edges point from
//! child term to parent term, annotation edges from gene product to term).

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Requirements for a node identifier.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Display` type, so
/// `String`, `&str` and the integer types all work out of the box.
pub trait NodeKey: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> NodeKey for T {}

/// Which adjacency list a query follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow edges from source to target (successors).
    Outgoing,
    /// Follow edges from target back to source (predecessors).
    Incoming,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Outgoing => Self::Incoming,
            Self::Incoming => Self::Outgoing,
        }
    }

    fn as_petgraph(self) -> petgraph::Direction {
        match self {
            Self::Outgoing => petgraph::Direction::Outgoing,
            Self::Incoming => petgraph::Direction::Incoming,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outgoing => write!(f, "out"),
            Self::Incoming => write!(f, "in"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "out" | "outgoing" => Ok(Self::Outgoing),
            "in" | "incoming" => Ok(Self::Incoming),
            other => Err(Error::InvalidArgument(format!(
                "unsupported direction '{other}' (expected 'out' or 'in')"
            ))),
        }
    }
}

/// Node payload stored in the arena.
#[derive(Debug, Clone)]
struct NodeData<N> {
    id: N,
    label: Option<String>,
}

/// A borrowed view of one stored edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeView<'g, N> {
    /// Edge source.
    pub source: &'g N,
    /// Edge target.
    pub target: &'g N,
    /// Relation label, if the edge has one.
    pub label: Option<&'g str>,
}

/// Append-only directed graph with optional node and edge labels.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    graph: DiGraph<NodeData<N>, Option<String>>,
    index: HashMap<N, NodeIndex>,
    edge_keys: HashSet<(NodeIndex, NodeIndex, Option<String>)>,
}

impl<N: NodeKey> Graph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            edge_keys: HashSet::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    #[must_use]
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(node_count, edge_count),
            index: HashMap::with_capacity(node_count),
            edge_keys: HashSet::with_capacity(edge_count),
        }
    }

    /// Register a node. Returns `false` if it already existed.
    pub fn add_node(&mut self, id: N) -> bool {
        let before = self.graph.node_count();
        self.ensure_node(id, None);
        self.graph.node_count() > before
    }

    /// Register a node with a display label.
    ///
    /// The label is only recorded when the node is new; an existing node
    /// keeps whatever label it already had.
    pub fn add_labeled_node(&mut self, id: N, label: impl Into<String>) -> bool {
        let before = self.graph.node_count();
        self.ensure_node(id, Some(label.into()));
        self.graph.node_count() > before
    }

    /// Replace the label of an existing node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` has not been registered.
    pub fn set_label(&mut self, id: &N, label: impl Into<String>) -> Result<()> {
        let ix = self.index_of(id)?;
        self.graph[ix].label = Some(label.into());
        Ok(())
    }

    /// Add a directed edge `source -> target`, creating missing endpoints.
    ///
    /// Returns `false` when an identical `(source, target, label)` edge is
    /// already present; the graph is left unchanged in that case.
    pub fn add_edge(&mut self, source: N, target: N, label: Option<&str>) -> bool {
        let from = self.ensure_node(source, None);
        let to = self.ensure_node(target, None);
        let label = label.map(str::to_string);

        if !self.edge_keys.insert((from, to, label.clone())) {
            tracing::trace!(
                source = %self.graph[from].id,
                target = %self.graph[to].id,
                "duplicate edge ignored"
            );
            return false;
        }

        self.graph.add_edge(from, to, label);
        true
    }

    fn ensure_node(&mut self, id: N, label: Option<String>) -> NodeIndex {
        if let Some(&ix) = self.index.get(&id) {
            return ix;
        }
        let ix = self.graph.add_node(NodeData {
            id: id.clone(),
            label,
        });
        self.index.insert(id, ix);
        ix
    }

    /// Whether `id` has been registered.
    pub fn contains(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    /// The label recorded for `id`, if any.
    pub fn label(&self, id: &N) -> Option<&str> {
        let ix = self.index.get(id)?;
        self.graph[*ix].label.as_deref()
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct `(source, target, label)` edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Distinct nodes one edge away from `id`, in first-insertion order.
    ///
    /// Parallel edges with different labels contribute their endpoint once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` was never registered.
    pub fn neighbors(&self, id: &N, direction: Direction) -> Result<Vec<&N>> {
        let ix = self.index_of(id)?;
        let mut seen = HashSet::new();
        Ok(self
            .adjacent(ix, direction)
            .into_iter()
            .filter(|n| seen.insert(*n))
            .map(|n| self.id_at(n))
            .collect())
    }

    /// The edges touching `id` in `direction`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` was never registered.
    pub fn edges_of(&self, id: &N, direction: Direction) -> Result<Vec<EdgeView<'_, N>>> {
        let ix = self.index_of(id)?;
        Ok(self
            .edge_refs(ix, direction)
            .into_iter()
            .map(|e| self.view(e))
            .collect())
    }

    /// Number of edges pointing at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` was never registered.
    pub fn in_degree(&self, id: &N) -> Result<usize> {
        let ix = self.index_of(id)?;
        Ok(self
            .graph
            .edges_directed(ix, petgraph::Direction::Incoming)
            .count())
    }

    /// Number of edges leaving `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` was never registered.
    pub fn out_degree(&self, id: &N) -> Result<usize> {
        let ix = self.index_of(id)?;
        Ok(self.graph.edges(ix).count())
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.graph.node_weights().map(|data| &data.id)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_, N>> {
        self.graph.edge_references().map(|e| self.view(e))
    }

    /// Nodes without incoming edges, in insertion order.
    pub fn roots(&self) -> Vec<&N> {
        self.root_indices().map(|ix| self.id_at(ix)).collect()
    }

    /// Nodes without outgoing edges, in insertion order.
    pub fn leaves(&self) -> Vec<&N> {
        self.graph
            .node_indices()
            .filter(|&ix| self.graph.edges(ix).next().is_none())
            .map(|ix| self.id_at(ix))
            .collect()
    }

    pub(crate) fn root_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices().filter(|&ix| {
            self.graph
                .edges_directed(ix, petgraph::Direction::Incoming)
                .next()
                .is_none()
        })
    }

    pub(crate) fn index_of(&self, id: &N) -> Result<NodeIndex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    pub(crate) fn id_at(&self, ix: NodeIndex) -> &N {
        &self.graph[ix].id
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Edges touching `ix`, in insertion order.
    ///
    /// petgraph links new edges at the head of each adjacency list, so its
    /// iteration order is newest-first and has to be reversed here.
    pub(crate) fn edge_refs(
        &self,
        ix: NodeIndex,
        direction: Direction,
    ) -> Vec<EdgeReference<'_, Option<String>>> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(ix, direction.as_petgraph())
            .collect();
        edges.reverse();
        edges
    }

    /// Endpoints one edge away from `ix`, one entry per edge, insertion order.
    pub(crate) fn adjacent(&self, ix: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        self.edge_refs(ix, direction)
            .into_iter()
            .map(|e| match direction {
                Direction::Outgoing => e.target(),
                Direction::Incoming => e.source(),
            })
            .collect()
    }

    pub(crate) fn view(&self, edge: EdgeReference<'_, Option<String>>) -> EdgeView<'_, N> {
        EdgeView {
            source: self.id_at(edge.source()),
            target: self.id_at(edge.target()),
            label: self.graph[edge.id()].as_deref(),
        }
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}
