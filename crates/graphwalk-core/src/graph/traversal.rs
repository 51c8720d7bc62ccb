//! Breadth-first and depth-first traversal.
//!
//! Both walks read the adjacency store only through its per-node entry
//! lists, in insertion order, and never mutate it.

use std::collections::VecDeque;

use crate::error::Result;

use super::store::Graph;
use super::types::{Cost, GraphKind, NodeAndDepth, NodeKey};

/// One open descent level of the depth-first walk.
struct Frame {
    node: usize,
    depth: usize,
    cursor: usize,
}

impl<N: NodeKey> Graph<N> {
    /// Breadth-first traversal from `start`.
    ///
    /// `f(current, neighbor, cost)` is called for every edge examined while
    /// expanding a node. Returning `true` keeps that neighbor out of the
    /// queue; the rest of the search carries on. Each reachable node is
    /// dequeued once and the returned list is in dequeue order.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if `start` is not in the graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk_core::graph::{Edge, Graph};
    ///
    /// let mut graph = Graph::new_directed();
    /// graph.add_with_cost(Edge::new(1, 2, 1)).unwrap();
    /// graph.add_with_cost(Edge::new(1, 3, 1)).unwrap();
    /// graph.add_with_cost(Edge::new(3, 4, 1)).unwrap();
    ///
    /// // Prune everything behind node 3.
    /// let order = graph.bfs(&1, |_, next, _| *next == 3).unwrap();
    /// assert_eq!(order, vec![1, 2]);
    /// ```
    pub fn bfs<F>(&self, start: &N, mut f: F) -> Result<Vec<N>>
    where
        F: FnMut(&N, &N, Cost) -> bool,
    {
        let start = self.require(start)?;
        let mut visited = vec![false; self.order()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(self.node(current).clone());
            for adj in self.entries(current) {
                if f(self.node(current), self.node(adj.target), adj.cost) {
                    continue;
                }
                if !visited[adj.target] {
                    visited[adj.target] = true;
                    queue.push_back(adj.target);
                }
            }
        }

        tracing::trace!(visited = order.len(), "bfs complete");
        Ok(order)
    }

    /// Whole-graph depth-first traversal with per-descent depth labels.
    ///
    /// On a directed graph a descent starts from every node without incoming
    /// edges, in discovery order. On an undirected graph every node that is
    /// still undiscovered starts a descent, in discovery order. Each descent
    /// labels its root 0 and each newly reached node one more than its
    /// parent. A node reached by an earlier descent is never revisited.
    #[must_use]
    pub fn dfs(&self) -> Vec<NodeAndDepth<N>> {
        let n = self.order();
        let mut visited = vec![false; n];
        let mut out = Vec::with_capacity(n);

        let roots: Vec<usize> = match self.kind() {
            GraphKind::Directed => {
                let in_degrees = self.in_degrees();
                let mut roots: Vec<usize> = (0..n).filter(|&i| in_degrees[i] == 0).collect();
                // Only reachable through a cycle, which the DAG guard forbids.
                roots.extend((0..n).filter(|&i| in_degrees[i] != 0));
                roots
            }
            GraphKind::Undirected => (0..n).collect(),
        };

        let mut stack: Vec<Frame> = Vec::new();
        for root in roots {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            out.push(NodeAndDepth::new(self.node(root).clone(), 0));
            stack.push(Frame {
                node: root,
                depth: 0,
                cursor: 0,
            });

            while let Some(frame) = stack.last_mut() {
                let next = self.entries(frame.node).get(frame.cursor).map(|a| a.target);
                frame.cursor += 1;
                let depth = frame.depth + 1;
                match next {
                    Some(target) if !visited[target] => {
                        visited[target] = true;
                        out.push(NodeAndDepth::new(self.node(target).clone(), depth));
                        stack.push(Frame {
                            node: target,
                            depth,
                            cursor: 0,
                        });
                    }
                    Some(_) => {}
                    None => {
                        stack.pop();
                    }
                }
            }
        }

        out
    }
}
