//! Minimum-cost path queries.
//!
//! Both queries run a best-first (Dijkstra) expansion over non-negative
//! costs. The frontier is a min-heap of `(tentative cost, node index)`;
//! stale heap entries are skipped once their node is settled.
//!
//! [`Graph::shortest_path_and_cost`] keeps one predecessor per node and
//! replaces it only on strict improvement. [`Graph::find_all_shortest_paths_and_cost`]
//! keeps every predecessor that ties the best cost and then backtracks from
//! the target through those sets with an explicit stack of partial paths.
//! The number of tied paths can grow exponentially with the number of
//! equal-cost diamonds in the graph, so the enumeration is capped by
//! `GraphConfig::max_tied_paths`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};

use super::store::Graph;
use super::types::{Cost, NodeKey};

/// Tentative cost of an unreached node.
const UNREACHED: Cost = Cost::MAX;

impl<N: NodeKey> Graph<N> {
    /// Finds one minimum-cost path from `from` to `to`.
    ///
    /// Returns the nodes of the path, both endpoints included, and its
    /// total cost. When several paths tie, the one whose predecessors were
    /// settled first wins.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if either endpoint is absent.
    /// - `Error::NoPath` if `to` cannot be reached from `from`.
    pub fn shortest_path_and_cost(&self, from: &N, to: &N) -> Result<(Vec<N>, Cost)> {
        let src = self.require(from)?;
        let dst = self.require(to)?;

        let n = self.order();
        let mut dist = vec![UNREACHED; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut frontier: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();

        dist[src] = 0;
        frontier.push(Reverse((0, src)));

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if settled[node] {
                continue;
            }
            settled[node] = true;
            if node == dst {
                break;
            }
            for adj in self.entries(node) {
                let candidate = cost.saturating_add(adj.cost);
                if candidate < dist[adj.target] {
                    dist[adj.target] = candidate;
                    pred[adj.target] = Some(node);
                    frontier.push(Reverse((candidate, adj.target)));
                }
            }
        }

        if !settled[dst] {
            return Err(no_path(from, to));
        }

        let mut path = vec![self.node(dst).clone()];
        let mut cursor = dst;
        while let Some(prev) = pred[cursor] {
            path.push(self.node(prev).clone());
            cursor = prev;
        }
        path.reverse();

        tracing::debug!(%from, %to, cost = dist[dst], hops = path.len() - 1, "shortest path");
        Ok((path, dist[dst]))
    }

    /// Finds every path from `from` to `to` whose total cost equals the
    /// minimum.
    ///
    /// Returns the tied paths (no duplicates, each a node sequence from
    /// `from` to `to`) and their shared cost. Paths never repeat a node.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if either endpoint is absent.
    /// - `Error::NoPath` if `to` cannot be reached from `from`.
    /// - `Error::PathLimitExceeded` if more tied paths exist than the
    ///   configured `max_tied_paths`.
    pub fn find_all_shortest_paths_and_cost(
        &self,
        from: &N,
        to: &N,
    ) -> Result<(Vec<Vec<N>>, Cost)> {
        let src = self.require(from)?;
        let dst = self.require(to)?;

        let preds = self.tied_predecessors(src, dst);
        let Some((preds, best)) = preds else {
            return Err(no_path(from, to));
        };

        let limit = self.config().tied_path_limit();
        let mut paths: Vec<Vec<N>> = Vec::new();
        // Partial paths run backwards from `dst`.
        let mut stack: Vec<Vec<usize>> = vec![vec![dst]];

        while let Some(partial) = stack.pop() {
            let head = partial[partial.len() - 1];
            if head == src {
                if let Some(max) = limit.filter(|&max| paths.len() >= max) {
                    tracing::warn!(%from, %to, max, "tied shortest path enumeration hit its cap");
                    return Err(Error::PathLimitExceeded(max));
                }
                let path = partial
                    .iter()
                    .rev()
                    .map(|&i| self.node(i).clone())
                    .collect();
                paths.push(path);
                continue;
            }
            // Reverse push so the first recorded predecessor is expanded first.
            for &prev in preds[head].iter().rev() {
                if partial.contains(&prev) {
                    continue;
                }
                let mut next = Vec::with_capacity(partial.len() + 1);
                next.extend_from_slice(&partial);
                next.push(prev);
                stack.push(next);
            }
        }

        tracing::debug!(%from, %to, cost = best, paths = paths.len(), "all shortest paths");
        Ok((paths, best))
    }

    /// Runs the tie-aware relaxation and returns the predecessor sets plus
    /// the best cost to `dst`, or `None` if `dst` is unreachable.
    ///
    /// Expansion continues past settling `dst` until the frontier cost
    /// exceeds its distance, so zero-cost ties settled later still register.
    fn tied_predecessors(&self, src: usize, dst: usize) -> Option<(Vec<Vec<usize>>, Cost)> {
        let n = self.order();
        let mut dist = vec![UNREACHED; n];
        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut settled = vec![false; n];
        let mut frontier: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();

        dist[src] = 0;
        frontier.push(Reverse((0, src)));

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if settled[node] {
                continue;
            }
            if settled[dst] && cost > dist[dst] {
                break;
            }
            settled[node] = true;
            for adj in self.entries(node) {
                let target = adj.target;
                if target == src {
                    continue;
                }
                let candidate = cost.saturating_add(adj.cost);
                if candidate < dist[target] {
                    dist[target] = candidate;
                    preds[target].clear();
                    preds[target].push(node);
                    frontier.push(Reverse((candidate, target)));
                } else if candidate == dist[target]
                    && candidate != UNREACHED
                    && !preds[target].contains(&node)
                {
                    preds[target].push(node);
                }
            }
        }

        settled[dst].then(|| (preds, dist[dst]))
    }
}

fn no_path<N: NodeKey>(from: &N, to: &N) -> Error {
    Error::NoPath {
        from: from.to_string(),
        to: to.to_string(),
    }
}
