//! Adjacency store and mutation primitives.
//!
//! Nodes are interned into an insertion-ordered set; each node index owns an
//! ordered list of outgoing `(target, cost)` entries. Nothing is ever removed,
//! so node indices stay stable for the lifetime of the graph and the query
//! engines work on indices instead of hashing keys on every step.

use std::fmt;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::config::GraphConfig;
use crate::error::{Error, Result};

use super::types::{Cost, Edge, GraphKind, NodeKey};

/// One outgoing adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Adjacent {
    pub(crate) target: usize,
    pub(crate) cost: Cost,
}

/// In-memory weighted graph.
///
/// The directed variant re-validates acyclicity on every insertion, so it is
/// a DAG between successful calls. The undirected variant stores each edge as
/// two directed entries and permits cycles.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::{Edge, Graph};
///
/// let mut graph = Graph::new_undirected();
/// graph.add_with_cost_both(Edge::new("a", "b", 3)).unwrap();
/// graph.add_with_cost_both(Edge::new("b", "c", 5)).unwrap();
///
/// assert_eq!(graph.order(), 3);
/// assert_eq!(graph.size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N> {
    kind: GraphKind,
    config: GraphConfig,
    /// Node identities in discovery order; the position is the node index.
    nodes: IndexSet<N, FxBuildHasher>,
    /// Outgoing entries, parallel to `nodes`.
    adjacency: Vec<Vec<Adjacent>>,
}

impl<N: NodeKey> Graph<N> {
    /// Creates an empty directed (acyclic) graph.
    #[must_use]
    pub fn new_directed() -> Self {
        Self::with_config(GraphKind::Directed, GraphConfig::default())
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn new_undirected() -> Self {
        Self::with_config(GraphKind::Undirected, GraphConfig::default())
    }

    /// Creates an empty graph of the given kind with explicit configuration.
    #[must_use]
    pub fn with_config(kind: GraphKind, config: GraphConfig) -> Self {
        let capacity = config.initial_capacity;
        Self {
            kind,
            config,
            nodes: IndexSet::with_capacity_and_hasher(capacity, FxBuildHasher),
            adjacency: Vec::with_capacity(capacity),
        }
    }

    /// Returns the insertion semantics of this graph.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns true for the directed (acyclic) variant.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Returns the configuration this graph was built with.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Inserts one directed adjacency entry `source -> target`.
    ///
    /// On the directed variant the insertion is refused if `target` can
    /// already reach `source`, since the new edge would close a cycle. The
    /// check runs before anything is written. On the undirected variant the
    /// entry is added as-is with no cycle check.
    ///
    /// # Errors
    ///
    /// Returns `Error::LoopInDag` if the directed graph would become cyclic.
    pub fn add_with_cost(&mut self, edge: Edge<N>) -> Result<()> {
        if self.is_directed() && self.would_close_cycle(&edge.source, &edge.target) {
            tracing::debug!(
                from = %edge.source,
                to = %edge.target,
                "rejected edge: would create a loop in the DAG"
            );
            return Err(Error::LoopInDag {
                from: edge.source.to_string(),
                to: edge.target.to_string(),
            });
        }
        self.push_entry(edge.source, edge.target, edge.cost);
        Ok(())
    }

    /// Inserts `source -> target` and `target -> source` with the same cost.
    ///
    /// This is the normal insertion for undirected graphs and always
    /// succeeds there. A directed graph cannot hold both directions without
    /// a cycle, so the call is refused on that variant.
    ///
    /// # Errors
    ///
    /// Returns `Error::LoopInDag` on the directed variant.
    pub fn add_with_cost_both(&mut self, edge: Edge<N>) -> Result<()> {
        if self.is_directed() {
            tracing::debug!(
                from = %edge.source,
                to = %edge.target,
                "rejected bidirectional edge on a DAG"
            );
            return Err(Error::LoopInDag {
                from: edge.source.to_string(),
                to: edge.target.to_string(),
            });
        }
        let Edge {
            source,
            target,
            cost,
        } = edge;
        self.push_entry(source.clone(), target.clone(), cost);
        self.push_entry(target, source, cost);
        Ok(())
    }

    fn would_close_cycle(&self, source: &N, target: &N) -> bool {
        if source == target {
            return true;
        }
        match (self.index_of(source), self.index_of(target)) {
            (Some(s), Some(t)) => self.reaches(t, s),
            // A fresh endpoint has no edges yet, so nothing can loop back.
            _ => false,
        }
    }

    fn push_entry(&mut self, source: N, target: N, cost: Cost) {
        let s = self.intern(source);
        let t = self.intern(target);
        tracing::trace!(source = s, target = t, cost, "adjacency entry added");
        self.adjacency[s].push(Adjacent { target: t, cost });
    }

    fn intern(&mut self, node: N) -> usize {
        let (idx, inserted) = self.nodes.insert_full(node);
        if inserted {
            self.adjacency.push(Vec::new());
        }
        idx
    }

    // ── Introspection ──────────────────────────────────────────────────

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of directed adjacency entries.
    ///
    /// An undirected edge counts twice.
    #[must_use]
    pub fn size(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns true if the node appears as an endpoint of any edge.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Iterates over all nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Iterates over every adjacency entry as an owned [`Edge`], grouped by
    /// source node in discovery order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<N>> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(s, list)| {
            list.iter().map(move |adj| {
                Edge::new(
                    self.node(s).clone(),
                    self.node(adj.target).clone(),
                    adj.cost,
                )
            })
        })
    }

    /// Returns the number of outgoing entries of a node (0 if absent).
    #[must_use]
    pub fn out_degree(&self, node: &N) -> usize {
        self.index_of(node).map_or(0, |i| self.adjacency[i].len())
    }

    /// Returns the number of entries pointing at a node (0 if absent).
    #[must_use]
    pub fn in_degree(&self, node: &N) -> usize {
        match self.index_of(node) {
            Some(idx) => self
                .adjacency
                .iter()
                .flatten()
                .filter(|adj| adj.target == idx)
                .count(),
            None => 0,
        }
    }

    /// Calls `f(neighbor, cost)` for each outgoing entry of `node` in
    /// insertion order. Returning `true` from `f` stops the iteration.
    ///
    /// An unknown node is visited zero times.
    pub fn visit<F>(&self, node: &N, mut f: F)
    where
        F: FnMut(&N, Cost) -> bool,
    {
        let Some(idx) = self.index_of(node) else {
            return;
        };
        for adj in &self.adjacency[idx] {
            if f(self.node(adj.target), adj.cost) {
                break;
            }
        }
    }

    // ── Index helpers for the query engines ────────────────────────────

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    pub(crate) fn require(&self, node: &N) -> Result<usize> {
        self.index_of(node)
            .ok_or_else(|| Error::NodeNotFound(node.to_string()))
    }

    pub(crate) fn node(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub(crate) fn entries(&self, idx: usize) -> &[Adjacent] {
        &self.adjacency[idx]
    }

    pub(crate) fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.order()];
        for adj in self.adjacency.iter().flatten() {
            degrees[adj.target] += 1;
        }
        degrees
    }
}

impl<N: NodeKey> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} graph: order={} size={}",
            self.kind,
            self.order(),
            self.size()
        )?;
        for (idx, node) in self.nodes.iter().enumerate() {
            write!(f, "  {node} ->")?;
            for adj in &self.adjacency[idx] {
                write!(f, " {}({})", self.node(adj.target), adj.cost)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
