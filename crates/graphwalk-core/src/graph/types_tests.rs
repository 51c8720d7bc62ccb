//! Tests for graph value types.

use super::types::{Edge, GraphKind, NodeAndDepth};

#[test]
fn test_edge_new() {
    let edge = Edge::new("a".to_string(), "b".to_string(), 42);
    assert_eq!(edge.source, "a");
    assert_eq!(edge.target, "b");
    assert_eq!(edge.cost, 42);
}

#[test]
fn test_node_and_depth_display() {
    let nd = NodeAndDepth::new("11", 2);
    assert_eq!(nd.to_string(), "(11, 2)");
}

#[test]
fn test_graph_kind_display() {
    assert_eq!(GraphKind::Directed.to_string(), "directed");
    assert_eq!(GraphKind::Undirected.to_string(), "undirected");
}
