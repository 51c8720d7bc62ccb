//! Shared graph fixtures for the unit tests.

use super::store::Graph;
use super::types::Edge;

/// Seven-edge undirected road map: a–b(3) b–c(5) a–c(8) a–d(1) d–e(10) e–c(4) c–d(6).
pub(super) fn build_undirected_graph() -> Graph<&'static str> {
    let mut graph = Graph::new_undirected();
    for (s, t, c) in [
        ("a", "b", 3),
        ("b", "c", 5),
        ("a", "c", 8),
        ("a", "d", 1),
        ("d", "e", 10),
        ("e", "c", 4),
        ("c", "d", 6),
    ] {
        graph.add_with_cost_both(Edge::new(s, t, c)).unwrap();
    }
    graph
}

/// Eleven-edge DAG rooted at 5 and 3.
pub(super) fn build_dag() -> Graph<&'static str> {
    let mut dag = Graph::new_directed();
    for (s, t, c) in [
        ("5", "11", 3),
        ("5", "7", 4),
        ("11", "2", 5),
        ("11", "9", 7),
        ("11", "10", 10),
        ("7", "11", 1),
        ("7", "8", 2),
        ("8", "9", 4),
        ("3", "8", 6),
        ("3", "10", 2),
        ("9", "13", 3),
    ] {
        dag.add_with_cost(Edge::new(s, t, c)).unwrap();
    }
    dag
}
