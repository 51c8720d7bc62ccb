//! Value types shared by the graph store and its query engines.

use std::fmt;
use std::hash::Hash;

/// Non-negative edge cost.
pub type Cost = u64;

/// Identifier usable as a graph node.
///
/// Nodes carry no data beyond identity. Anything cloneable, hashable and
/// printable qualifies: `&str`, `String`, integer ids.
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Insertion semantics of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Unidirectional, cycle-checked insertion. The graph is always a DAG.
    Directed,
    /// Bidirectional insertion, cycles allowed.
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// A weighted edge between two nodes.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::Edge;
///
/// let edge = Edge::new("a", "b", 3);
/// assert_eq!(edge.source, "a");
/// assert_eq!(edge.target, "b");
/// assert_eq!(edge.cost, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<N> {
    /// Node the edge leaves.
    pub source: N,
    /// Node the edge enters.
    pub target: N,
    /// Cost of traversing the edge.
    pub cost: Cost,
}

impl<N> Edge<N> {
    /// Creates a new edge.
    #[must_use]
    pub fn new(source: N, target: N, cost: Cost) -> Self {
        Self {
            source,
            target,
            cost,
        }
    }
}

/// A node labeled with a depth.
///
/// Produced by depth-first traversal (hops from the descent root) and by
/// topological sorting (longest chain of predecessors).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeAndDepth<N> {
    /// The node.
    pub node: N,
    /// Its depth.
    pub depth: usize,
}

impl<N> NodeAndDepth<N> {
    /// Creates a new node/depth pair.
    #[must_use]
    pub fn new(node: N, depth: usize) -> Self {
        Self { node, depth }
    }
}

impl<N: fmt::Display> fmt::Display for NodeAndDepth<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.node, self.depth)
    }
}
