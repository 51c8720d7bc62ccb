//! End-to-end scenarios over the public API.
//!
//! **Scenario 1**: undirected road map, order/size and tied shortest paths.
//! **Scenario 2**: breadth-first walk over the same map.
//! **Scenario 3**: eleven-edge DAG, topological depths and path queries.
//! **Scenario 4**: loop rejection on a fresh DAG.

use graphwalk_core::{Edge, Error, Graph, NodeAndDepth};

fn road_map() -> Graph<&'static str> {
    let mut graph = Graph::new_undirected();
    graph.add_with_cost_both(Edge::new("a", "b", 3)).unwrap();
    graph.add_with_cost_both(Edge::new("b", "c", 5)).unwrap();
    graph.add_with_cost_both(Edge::new("a", "c", 8)).unwrap();
    graph.add_with_cost_both(Edge::new("a", "d", 1)).unwrap();
    graph.add_with_cost_both(Edge::new("d", "e", 10)).unwrap();
    graph.add_with_cost_both(Edge::new("e", "c", 4)).unwrap();
    graph.add_with_cost_both(Edge::new("c", "d", 6)).unwrap();
    graph
}

fn build_dag() -> Graph<&'static str> {
    let mut dag = Graph::new_directed();
    dag.add_with_cost(Edge::new("5", "11", 3)).unwrap();
    dag.add_with_cost(Edge::new("5", "7", 4)).unwrap();
    dag.add_with_cost(Edge::new("11", "2", 5)).unwrap();
    dag.add_with_cost(Edge::new("11", "9", 7)).unwrap();
    dag.add_with_cost(Edge::new("11", "10", 10)).unwrap();
    dag.add_with_cost(Edge::new("7", "11", 1)).unwrap();
    dag.add_with_cost(Edge::new("7", "8", 2)).unwrap();
    dag.add_with_cost(Edge::new("8", "9", 4)).unwrap();
    dag.add_with_cost(Edge::new("3", "8", 6)).unwrap();
    dag.add_with_cost(Edge::new("3", "10", 2)).unwrap();
    dag.add_with_cost(Edge::new("9", "13", 3)).unwrap();
    dag
}

fn joined(mut paths: Vec<Vec<&str>>) -> Vec<String> {
    paths.sort();
    paths.into_iter().map(|p| p.join("->")).collect()
}

// ============================================================================
// Scenario 1
// ============================================================================

#[test]
fn scenario_undirected_order_size_and_paths() {
    let graph = road_map();

    assert_eq!(graph.order(), 5);
    assert_eq!(graph.size(), 14);

    let (path, cost) = graph.shortest_path_and_cost(&"a", &"e").unwrap();
    assert_eq!(path.join("->"), "a->d->e");
    assert_eq!(cost, 11);

    let (paths, cost) = graph.find_all_shortest_paths_and_cost(&"a", &"e").unwrap();
    assert_eq!(joined(paths), vec!["a->d->c->e", "a->d->e"]);
    assert_eq!(cost, 11);
}

// ============================================================================
// Scenario 2
// ============================================================================

#[test]
fn scenario_bfs_walk() {
    let graph = road_map();
    let mut examined = 0;
    let nodes = graph
        .bfs(&"a", |_, _, _| {
            examined += 1;
            false
        })
        .unwrap();
    assert_eq!(nodes, vec!["a", "b", "c", "d", "e"]);
    // Every node is expanded once, so every adjacency entry is examined once.
    assert_eq!(examined, graph.size());
}

// ============================================================================
// Scenario 3
// ============================================================================

#[test]
fn scenario_dag_topological_sort() {
    let dag = build_dag();
    let expected: Vec<NodeAndDepth<&str>> = [
        ("5", 0),
        ("3", 0),
        ("7", 1),
        ("8", 2),
        ("11", 2),
        ("2", 3),
        ("10", 3),
        ("9", 3),
        ("13", 4),
    ]
    .into_iter()
    .map(|(n, d)| NodeAndDepth::new(n, d))
    .collect();
    assert_eq!(dag.topological_sort().unwrap(), expected);
}

#[test]
fn scenario_dag_paths() {
    let dag = build_dag();

    let (path, cost) = dag.shortest_path_and_cost(&"5", &"9").unwrap();
    assert_eq!(path.join("->"), "5->11->9");
    assert_eq!(cost, 10);

    let (paths, cost) = dag.find_all_shortest_paths_and_cost(&"5", &"13").unwrap();
    assert_eq!(joined(paths), vec!["5->11->9->13", "5->7->8->9->13"]);
    assert_eq!(cost, 13);
}

#[test]
fn scenario_dag_visit() {
    let dag = build_dag();
    let mut out = Vec::new();
    dag.visit(&"11", |w, cost| {
        out.push(format!("11->{w}:{cost}"));
        false
    });
    assert_eq!(out, vec!["11->2:5", "11->9:7", "11->10:10"]);
}

// ============================================================================
// Scenario 4
// ============================================================================

#[test]
fn scenario_loop_rejection() {
    let mut dag = Graph::new_directed();
    dag.add_with_cost(Edge::new("5", "11", 3)).unwrap();
    dag.add_with_cost(Edge::new("5", "7", 4)).unwrap();
    dag.add_with_cost(Edge::new("11", "2", 5)).unwrap();

    let (order, size) = (dag.order(), dag.size());
    let err = dag.add_with_cost(Edge::new("2", "5", 5)).unwrap_err();

    assert!(matches!(err, Error::LoopInDag { .. }));
    assert_eq!(dag.order(), order);
    assert_eq!(dag.size(), size);
}
