//! graphmaster: an in-memory directed graph for ontology-style data.
//!
//! The crate builds a graph incrementally from node and labeled-edge records
//! and answers structural queries over it:
//!
//! - direct and transitive neighbors in either direction
//! - acyclicity checks, cycle extraction and DFS edge classification
//! - deterministic topological ordering
//! - longest-path depth and diameter
//!
//! Graphs may be cyclic, disconnected or arbitrarily deep. All traversals use
//! explicit stacks or queues with visited sets, so they terminate on cycles
//! and never recurse on the call stack.
//!
//! # Example
//!
//! ```
//! use graphmaster::{Direction, Graph};
//!
//! let mut go = Graph::new();
//! go.add_edge("GO:0006915", "GO:0008219", Some("is_a"));
//! go.add_edge("GO:0008219", "GO:0009987", Some("is_a"));
//!
//! let ancestors = go.transitive(&"GO:0006915", Direction::Outgoing, false)?;
//! assert_eq!(ancestors.len(), 2);
//! assert_eq!(go.max_depth(None)?, 2);
//! # Ok::<(), graphmaster::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod cycle;
pub mod depth;
pub mod error;
pub mod graph;
pub mod topo;
pub mod traversal;

pub use cycle::{ClassifiedEdge, DfsForest, EdgeKind};
pub use error::{Error, Result};
pub use graph::{Direction, EdgeView, Graph, NodeKey};
pub use traversal::BfsTree;
