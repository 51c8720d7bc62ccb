//! Reachability, cycle guarding and topological ordering.
//!
//! The directed variant calls `Graph::reaches` before every insertion:
//! an edge `s -> t` closes a cycle exactly when `t` already reaches `s`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};

use super::store::Graph;
use super::types::{NodeAndDepth, NodeKey};

impl<N: NodeKey> Graph<N> {
    /// Returns true if `to` can be reached from `from` along directed edges.
    ///
    /// Every node reaches itself.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if either node is absent.
    pub fn can_reach(&self, from: &N, to: &N) -> Result<bool> {
        let from = self.require(from)?;
        let to = self.require(to)?;
        Ok(self.reaches(from, to))
    }

    /// Iterative depth-first reachability search between node indices.
    pub(crate) fn reaches(&self, from: usize, to: usize) -> bool {
        if from == to {
            return true;
        }
        let mut seen = vec![false; self.order()];
        let mut stack = vec![from];
        seen[from] = true;

        while let Some(node) = stack.pop() {
            for adj in self.entries(node) {
                if adj.target == to {
                    return true;
                }
                if !seen[adj.target] {
                    seen[adj.target] = true;
                    stack.push(adj.target);
                }
            }
        }
        false
    }

    /// Orders the nodes so every node follows all of its predecessors.
    ///
    /// Each node is labeled with its topological depth: 0 without incoming
    /// edges, otherwise one more than the deepest direct predecessor. Nodes
    /// are emitted Kahn-style as their last predecessor is processed.
    ///
    /// Any order that respects the edges is valid; the order among nodes
    /// that become eligible together is a fixed convention of this crate
    /// rather than something the graph determines. The shallowest goes
    /// first, then the one with fewer outgoing edges, then the one
    /// discovered earlier.
    ///
    /// # Errors
    ///
    /// Returns `Error::CycleDetected` if the graph has a cycle. An
    /// undirected graph with at least one edge always does.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk_core::graph::{Edge, Graph, NodeAndDepth};
    ///
    /// let mut dag = Graph::new_directed();
    /// dag.add_with_cost(Edge::new("shirt", "tie", 1)).unwrap();
    /// dag.add_with_cost(Edge::new("tie", "jacket", 1)).unwrap();
    /// dag.add_with_cost(Edge::new("shirt", "jacket", 1)).unwrap();
    ///
    /// let order = dag.topological_sort().unwrap();
    /// assert_eq!(
    ///     order,
    ///     vec![
    ///         NodeAndDepth::new("shirt", 0),
    ///         NodeAndDepth::new("tie", 1),
    ///         NodeAndDepth::new("jacket", 2),
    ///     ]
    /// );
    /// ```
    pub fn topological_sort(&self) -> Result<Vec<NodeAndDepth<N>>> {
        let n = self.order();
        let mut remaining = self.in_degrees();
        let mut depth = vec![0usize; n];
        let mut out = Vec::with_capacity(n);

        // (depth, out-degree, discovery index)
        let mut eligible: BinaryHeap<Reverse<(usize, usize, usize)>> = (0..n)
            .filter(|&i| remaining[i] == 0)
            .map(|i| Reverse((0, self.entries(i).len(), i)))
            .collect();

        while let Some(Reverse((d, _, node))) = eligible.pop() {
            out.push(NodeAndDepth::new(self.node(node).clone(), d));
            for adj in self.entries(node) {
                let target = adj.target;
                depth[target] = depth[target].max(d + 1);
                remaining[target] -= 1;
                if remaining[target] == 0 {
                    let out_degree = self.entries(target).len();
                    eligible.push(Reverse((depth[target], out_degree, target)));
                }
            }
        }

        if out.len() < n {
            tracing::debug!(
                emitted = out.len(),
                order = n,
                "topological sort stopped: cycle detected"
            );
            return Err(Error::CycleDetected);
        }
        Ok(out)
    }
}
