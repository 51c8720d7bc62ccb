//! # GraphWalk Core
//!
//! Small in-memory graph engine for directed and undirected weighted graphs.
//!
//! ## Features
//!
//! - **Two variants**: directed graphs that stay acyclic on every insertion,
//!   and undirected graphs stored as paired directed entries
//! - **Traversal**: breadth-first walk with search pruning, whole-graph
//!   depth-first walk with depth labels
//! - **Shortest paths**: one minimum-cost path, or every path tied at the
//!   minimum cost
//! - **Topological order**: Kahn-style ordering labeled with longest
//!   predecessor depth
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk_core::{Edge, Graph, Result};
//!
//! fn main() -> Result<()> {
//!     let mut graph = Graph::new_undirected();
//!     graph.add_with_cost_both(Edge::new("a", "b", 3))?;
//!     graph.add_with_cost_both(Edge::new("a", "d", 1))?;
//!     graph.add_with_cost_both(Edge::new("d", "e", 10))?;
//!     graph.add_with_cost_both(Edge::new("b", "e", 8))?;
//!
//!     let (path, cost) = graph.shortest_path_and_cost(&"a", &"e")?;
//!     assert_eq!(path, vec!["a", "d", "e"]);
//!     assert_eq!(cost, 11);
//!
//!     let (paths, cost) = graph.find_all_shortest_paths_and_cost(&"a", &"e")?;
//!     assert_eq!(paths.len(), 2);
//!     assert_eq!(cost, 11);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! A graph is a plain owned value with no internal locking. Mutation takes
//! `&mut self` and every query takes `&self`, so the borrow checker already
//! rules out a query racing an insertion; share across threads behind the
//! caller's own lock if needed.

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::single_match_else
    )
)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;

pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Cost, Edge, Graph, GraphKind, NodeAndDepth, NodeKey};
