//! Contract suite shared by every engine
//!
//! Each function takes a constructor so the same assertions run against the
//! adjacency list and the adjacency matrix.

#![allow(dead_code)]

use graphcore::{Graph, GraphError};
use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;

/// Route library logs to the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Order-independent snapshot of every edge, with both halves for undirected
/// stores
pub fn edge_snapshot<G>(graph: &G) -> BTreeSet<(G::Vertex, G::Vertex, String)>
where
    G: Graph,
    G::Vertex: Ord,
{
    let mut snapshot = BTreeSet::new();
    for (u, v, w) in graph.edges() {
        let w = format!("{:?}", w);
        if !graph.is_directed() {
            snapshot.insert((v.clone(), u.clone(), w.clone()));
        }
        snapshot.insert((u, v, w));
    }
    snapshot
}

pub fn test_construction<G, F>(make: F)
where
    G: Graph<Vertex = i32> + Debug,
    F: Fn(bool, Vec<i32>) -> Result<G, GraphError<i32>>,
{
    let graph = make(true, vec![]).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_directed());

    let graph = make(false, vec![-1, 0, 7]).unwrap();
    assert!(!graph.is_directed());
    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.has_vertex(&-1));
    assert!(!graph.has_vertex(&1));
    assert!(graph.edges().is_empty());

    assert_eq!(
        make(true, vec![1, 2, 2]).unwrap_err(),
        GraphError::DuplicateVertex(2)
    );
}

pub fn test_vertices<G, F>(make: F)
where
    G: Graph<Vertex = i32, Weight = i32>,
    F: Fn(bool, Vec<i32>) -> Result<G, GraphError<i32>>,
{
    for directed in [true, false] {
        let mut graph = make(directed, vec![1, 2]).unwrap();

        graph.add_vertex(3).unwrap();
        assert!(graph.has_vertex(&3));
        assert_eq!(graph.add_vertex(3), Err(GraphError::DuplicateVertex(3)));

        // all-or-nothing batch insert
        assert_eq!(
            graph.add_vertices(vec![4, 5, 1]),
            Err(GraphError::DuplicateVertex(1))
        );
        assert!(!graph.has_vertex(&4));
        assert!(!graph.has_vertex(&5));
        graph.add_vertices(vec![4, 5]).unwrap();
        assert_eq!(graph.vertex_count(), 5);

        // removal strips incident edges
        graph.set_edge_weight(&1, &4, 10).unwrap();
        graph.set_edge_weight(&4, &2, 20).unwrap();
        graph.set_edge_weight(&2, &3, 30).unwrap();
        graph.remove_vertex(&4).unwrap();
        assert!(!graph.has_vertex(&4));
        assert!(!graph.has_edge(&1, &4));
        assert!(!graph.has_edge(&4, &2));
        assert!(graph.edges().iter().all(|(u, v, _)| *u != 4 && *v != 4));
        assert_eq!(graph.get_edge_weight(&2, &3), Ok(30));
        assert_eq!(graph.remove_vertex(&4), Err(GraphError::VertexNotFound(4)));

        // batch removal validates first
        assert_eq!(
            graph.remove_vertices(vec![1, 99]),
            Err(GraphError::VertexNotFound(99))
        );
        assert!(graph.has_vertex(&1));
        graph.remove_vertices(vec![1, 5]).unwrap();
        assert_eq!(graph.vertex_count(), 2);

        // round trip
        graph.add_vertex(42).unwrap();
        graph.set_edge_weight(&42, &2, 1).unwrap();
        graph.remove_vertex(&42).unwrap();
        assert!(!graph.has_vertex(&42));
        assert!(graph.get_parents(&2).unwrap().iter().all(|p| *p != 42));
        assert!(graph.get_children(&2).unwrap().iter().all(|c| *c != 42));
    }
}

pub fn test_directed_edges<G, F>(make: F)
where
    G: Graph<Vertex = i32, Weight = i32>,
    F: Fn(bool, Vec<i32>) -> Result<G, GraphError<i32>>,
{
    let mut graph = make(true, vec![-1, 0, 1, 7]).unwrap();

    graph.set_edge_weight(&-1, &0, 1).unwrap();
    graph.set_edge_weight(&-1, &7, -1).unwrap();
    graph.set_edge_weight(&0, &-1, 0).unwrap();
    assert!(graph.has_edge(&-1, &0));
    assert!(graph.has_edge(&-1, &7));
    assert!(graph.has_edge(&0, &-1));
    assert_eq!(graph.get_edge_weight(&-1, &0), Ok(1));
    assert_eq!(graph.get_edge_weight(&-1, &7), Ok(-1));
    // only one direction is set
    assert_eq!(
        graph.get_edge_weight(&7, &-1),
        Err(GraphError::EdgeNotFound(7, -1))
    );
    assert_eq!(graph.get_edge_weight(&0, &-1), Ok(0));
    assert_eq!(graph.edge_count(), 3);

    assert_eq!(graph.remove_edge(&-1, &0), Ok(1));
    assert!(!graph.has_edge(&-1, &0));
    assert!(graph.has_edge(&0, &-1));
    assert_eq!(
        graph.remove_edge(&-1, &0),
        Err(GraphError::EdgeNotFound(-1, 0))
    );

    // missing vertices
    assert!(!graph.has_edge(&100, &0));
    assert!(!graph.has_edge(&0, &100));
    assert_eq!(
        graph.get_edge_weight(&100, &0),
        Err(GraphError::VertexNotFound(100))
    );
    assert_eq!(
        graph.set_edge_weight(&0, &100, 1),
        Err(GraphError::VertexNotFound(100))
    );
    assert_eq!(
        graph.remove_edge(&0, &100),
        Err(GraphError::VertexNotFound(100))
    );
    assert_eq!(graph.edge_count(), 2);
}

pub fn test_undirected_edges<G, F>(make: F)
where
    G: Graph<Vertex = i32, Weight = i32>,
    F: Fn(bool, Vec<i32>) -> Result<G, GraphError<i32>>,
{
    let mut graph = make(false, vec![-1, 0, 1, 7]).unwrap();

    graph.set_edge_weight(&-1, &0, 1).unwrap();
    graph.set_edge_weight(&-1, &7, 0).unwrap();
    assert!(graph.has_edge(&0, &-1));
    assert!(graph.has_edge(&7, &-1));
    assert_eq!(graph.get_edge_weight(&0, &-1), Ok(1));
    assert_eq!(graph.get_edge_weight(&7, &-1), Ok(0));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edges().len(), 2);

    // overwriting through the mirror updates both halves
    graph.set_edge_weight(&0, &-1, 3).unwrap();
    assert_eq!(graph.get_edge_weight(&-1, &0), Ok(3));
    assert_eq!(graph.edge_count(), 2);

    assert_eq!(graph.remove_edge(&0, &-1), Ok(3));
    assert!(!graph.has_edge(&-1, &0));
    assert!(!graph.has_edge(&0, &-1));
    assert_eq!(
        graph.get_edge_weight(&-1, &0),
        Err(GraphError::EdgeNotFound(-1, 0))
    );

    // self-loops
    graph.set_edge_weight(&1, &1, 5).unwrap();
    assert!(graph.has_edge(&1, &1));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_children(&1).unwrap(), HashSet::from([1]));
    assert_eq!(graph.remove_edge(&1, &1), Ok(5));
    assert!(!graph.has_edge(&1, &1));
}

pub fn test_add_edge<G, F>(make: F)
where
    G: Graph<Vertex = i32, Weight = i32>,
    F: Fn(bool, Vec<i32>) -> Result<G, GraphError<i32>>,
{
    for directed in [true, false] {
        let mut graph = make(directed, vec![1, 2, 3]).unwrap();
        graph.add_edge(&1, &2, 4).unwrap();
        assert_eq!(
            graph.add_edge(&1, &2, 5),
            Err(GraphError::EdgeAlreadyExists(1, 2))
        );
        assert_eq!(graph.get_edge_weight(&1, &2), Ok(4));
        assert_eq!(
            graph.add_edge(&1, &9, 5),
            Err(GraphError::VertexNotFound(9))
        );

        if directed {
            graph.add_edge(&2, &1, 6).unwrap();
        } else {
            assert_eq!(
                graph.add_edge(&2, &1, 6),
                Err(GraphError::EdgeAlreadyExists(2, 1))
            );
        }

        // batch add rolls back on a repeated edge
        let before = graph.edges().len();
        assert_eq!(
            graph.add_edges(vec![(2, 3, 1), (3, 1, 1), (1, 2, 1)]),
            Err(GraphError::EdgeAlreadyExists(1, 2))
        );
        assert!(!graph.has_edge(&2, &3));
        assert!(!graph.has_edge(&3, &1));
        assert_eq!(graph.get_edge_weight(&1, &2), Ok(4));
        assert_eq!(graph.edges().len(), before);

        graph.add_edges(vec![(2, 3, 1), (3, 1, 1)]).unwrap();
        assert!(graph.has_edge(&2, &3));
        assert!(graph.has_edge(&3, &1));
    }
}

pub fn test_family<G, F>(make: F)
where
    G: Graph<Vertex = i32, Weight = i32>,
    F: Fn(bool, Vec<i32>) -> Result<G, GraphError<i32>>,
{
    let mut graph = make(true, vec![-1, 0, 1, 7]).unwrap();
    graph.set_edge_weight(&-1, &0, 1).unwrap();
    graph.set_edge_weight(&-1, &1, 1).unwrap();
    graph.set_edge_weight(&-1, &7, 1).unwrap();
    graph.set_edge_weight(&7, &0, 1).unwrap();

    assert_eq!(graph.get_children(&-1).unwrap(), HashSet::from([0, 1, 7]));
    assert_eq!(graph.get_children(&7).unwrap(), HashSet::from([0]));
    assert!(graph.get_children(&0).unwrap().is_empty());
    assert_eq!(graph.get_parents(&0).unwrap(), HashSet::from([-1, 7]));
    assert!(graph.get_parents(&-1).unwrap().is_empty());
    assert_eq!(graph.get_children(&3), Err(GraphError::VertexNotFound(3)));
    assert_eq!(graph.get_parents(&3), Err(GraphError::VertexNotFound(3)));

    let mut graph = make(false, vec![-1, 0, 1, 7]).unwrap();
    graph.set_edge_weight(&-1, &0, 1).unwrap();
    graph.set_edge_weight(&-1, &1, 1).unwrap();
    graph.set_edge_weight(&7, &0, 1).unwrap();

    for v in [-1, 0, 1, 7] {
        assert_eq!(graph.get_children(&v), graph.get_parents(&v));
    }
    assert_eq!(graph.get_children(&0).unwrap(), HashSet::from([-1, 7]));
}

pub fn test_set_edge_weights_rollback<G, F>(make: F)
where
    G: Graph<Vertex = i32, Weight = i32>,
    F: Fn(bool, Vec<i32>) -> Result<G, GraphError<i32>>,
{
    for directed in [true, false] {
        let mut graph = make(directed, vec![0, 1, 2]).unwrap();
        graph.set_edge_weight(&0, &2, 9).unwrap();
        let before = edge_snapshot(&graph);

        // edge (1, 2) is written twice so rollback must unwind in order
        let batch = vec![(0, 1, 0), (0, 2, -1), (1, 2, 5), (2, 1, 6), (100, 0, -1)];
        assert_eq!(
            graph.set_edge_weights(batch),
            Err(GraphError::VertexNotFound(100))
        );
        assert_eq!(edge_snapshot(&graph), before);
        assert!(!graph.has_edge(&0, &1));
        assert!(!graph.has_edge(&1, &2));
        assert_eq!(graph.get_edge_weight(&0, &2), Ok(9));

        graph
            .set_edge_weights(vec![(0, 1, 0), (0, 2, -1), (1, 0, 1)])
            .unwrap();
        assert_eq!(graph.get_edge_weight(&0, &2), Ok(-1));
        assert!(graph.has_edge(&1, &0));
        if directed {
            assert_eq!(graph.get_edge_weight(&0, &1), Ok(0));
            assert!(!graph.has_edge(&2, &0));
        } else {
            assert_eq!(graph.get_edge_weight(&0, &1), Ok(1));
            assert_eq!(graph.get_edge_weight(&2, &0), Ok(-1));
        }
    }
}

pub fn test_remove_edges_rollback<G, F>(make: F)
where
    G: Graph<Vertex = i32, Weight = i32>,
    F: Fn(bool, Vec<i32>) -> Result<G, GraphError<i32>>,
{
    for directed in [true, false] {
        let mut graph = make(directed, vec![1, 2, 3]).unwrap();
        graph.set_edge_weight(&1, &2, 12).unwrap();
        graph.set_edge_weight(&2, &3, 23).unwrap();
        let before = edge_snapshot(&graph);

        assert_eq!(
            graph.remove_edges(vec![(1, 2), (2, 3), (1, 3)]),
            Err(GraphError::EdgeNotFound(1, 3))
        );
        assert_eq!(edge_snapshot(&graph), before);
        assert_eq!(graph.get_edge_weight(&1, &2), Ok(12));
        assert_eq!(graph.get_edge_weight(&2, &3), Ok(23));

        assert_eq!(
            graph.remove_edges(vec![(1, 2), (1, 77)]),
            Err(GraphError::VertexNotFound(77))
        );
        assert_eq!(edge_snapshot(&graph), before);

        graph.remove_edges(vec![(1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    // removing both halves of an undirected edge in one batch fails on the
    // second half and restores the first
    let mut graph = make(false, vec![1, 2]).unwrap();
    graph.set_edge_weight(&1, &2, 4).unwrap();
    assert_eq!(
        graph.remove_edges(vec![(1, 2), (2, 1)]),
        Err(GraphError::EdgeNotFound(2, 1))
    );
    assert_eq!(graph.get_edge_weight(&2, &1), Ok(4));
}

pub fn test_unweighted<G, F>(make: F)
where
    G: Graph<Vertex = &'static str, Weight = bool>,
    F: Fn(bool, Vec<&'static str>) -> Result<G, GraphError<&'static str>>,
{
    let mut graph = make(false, vec!["a", "b", "c"]).unwrap();

    graph.add_edge(&"a", &"b", true).unwrap();
    assert_eq!(graph.get_children(&"a").unwrap(), HashSet::from(["b"]));
    assert_eq!(graph.get_children(&"b").unwrap(), HashSet::from(["a"]));
    assert_eq!(graph.get_edge_weight(&"b", &"a"), Ok(true));

    // false means "ensure absent" and never fails on a missing edge
    graph.set_edge_weight(&"a", &"c", false).unwrap();
    assert!(!graph.has_edge(&"a", &"c"));
    graph.set_edge_weight(&"b", &"a", false).unwrap();
    assert!(!graph.has_edge(&"a", &"b"));
    assert_eq!(
        graph.set_edge_weight(&"a", &"zz", false),
        Err(GraphError::VertexNotFound("zz"))
    );

    // a batch mixing removals and additions still rolls back completely
    graph.set_edge_weight(&"a", &"b", true).unwrap();
    assert_eq!(
        graph.set_edge_weights(vec![("a", "b", false), ("b", "c", true), ("c", "x", true)]),
        Err(GraphError::VertexNotFound("x"))
    );
    assert!(graph.has_edge(&"a", &"b"));
    assert!(!graph.has_edge(&"b", &"c"));

    let mut graph = make(true, vec!["", "Mumbai", "New York", "Tokyo"]).unwrap();
    graph.set_edge_weight(&"New York", &"Tokyo", true).unwrap();
    graph.set_edge_weight(&"Mumbai", &"", true).unwrap();
    graph.set_edge_weight(&"", &"Mumbai", false).unwrap();
    assert!(graph.has_edge(&"Mumbai", &""));
    assert!(!graph.has_edge(&"", &"Mumbai"));
    assert!(!graph.has_edge(&"Tokyo", &"New York"));
    assert_eq!(graph.edge_count(), 2);
}
