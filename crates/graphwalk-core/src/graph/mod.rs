//! In-memory weighted graph and its query engines.
//!
//! A [`Graph`] is either directed (kept acyclic on every insertion) or
//! undirected (each edge stored in both directions). Queries borrow the
//! graph immutably and never change it.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::{Edge, Graph};
//!
//! let mut dag = Graph::new_directed();
//! dag.add_with_cost(Edge::new("5", "11", 3)).unwrap();
//! dag.add_with_cost(Edge::new("11", "2", 5)).unwrap();
//!
//! // Closing the loop is refused and leaves the graph as it was.
//! let err = dag.add_with_cost(Edge::new("2", "5", 1)).unwrap_err();
//! assert!(err.is_loop_in_dag());
//! assert_eq!(dag.size(), 2);
//!
//! let (path, cost) = dag.shortest_path_and_cost(&"5", &"2").unwrap();
//! assert_eq!(path, vec!["5", "11", "2"]);
//! assert_eq!(cost, 8);
//! ```

mod shortest_path;
mod store;
mod topology;
mod traversal;
mod types;

#[cfg(test)]
mod test_fixtures;
#[cfg(test)]
mod types_tests;

pub use store::Graph;
pub use types::{Cost, Edge, GraphKind, NodeAndDepth, NodeKey};
