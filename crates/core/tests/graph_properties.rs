mod common;

use common::assert_symmetric;
use dyngraph_core::error::Error;
use dyngraph_core::{WUGraph, INFINITE_COST};

#[test]
fn add_edge_is_visible_from_both_endpoints() {
    let mut g = graph! { [A, B, C] };
    g.add_edge("A", "C", 7).unwrap();
    assert_eq!(g.edge_weight(&"A", &"C"), Some(7));
    assert_eq!(g.edge_weight(&"C", &"A"), Some(7));
    assert_eq!(g.edge_weight(&"A", &"B"), None);
    assert_symmetric(&g);
}

#[test]
fn remove_vertex_leaves_no_dangling_entries() {
    let mut g = graph! {
        [A, B, C, D],
        A - B : 1,
        A - C : 2,
        B - C : 3,
        C - D : 4,
    };
    g.remove_vertex(&"C").unwrap();
    assert!(g
        .vertices()
        .all(|v| v.edges.iter().all(|e| e.target != "C")));
    assert_eq!(g.edge_count(), 1);
    assert_symmetric(&g);
}

#[test]
fn self_loop_always_rejected() {
    let mut empty: WUGraph<&str> = WUGraph::default();
    assert_eq!(empty.add_edge("A", "A", 1), Err(Error::SelfLoop("A")));

    let mut g = graph! { [A, B], A - B : 1 };
    assert_eq!(g.add_edge("A", "A", 0), Err(Error::SelfLoop("A")));
    assert_eq!(g.add_edge("B", "B", 9), Err(Error::SelfLoop("B")));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn path_to_self_is_trivial() {
    let g = graph! { [A, B], A - B : 5 };
    for label in ["A", "B"] {
        let found = g.shortest_path(&label, &label).unwrap();
        assert_eq!(found.cost, 0);
        assert_eq!(found.path, [label]);
    }
}

#[test]
fn remove_edge_twice_reports_not_found() {
    let mut g = graph! { [A, B], A - B : 5 };
    assert_eq!(g.remove_edge(&"A", &"B"), Ok(5));
    assert_eq!(g.remove_edge(&"A", &"B"), Err(Error::EdgeNotFound("A", "B")));
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn cheaper_detour_beats_direct_edge() {
    let g = graph! {
        [A, B, C],
        A - B : 1,
        B - C : 2,
        A - C : 10,
    };
    let found = g.shortest_path(&"A", &"C").unwrap();
    assert_eq!(found.cost, 3);
    assert_eq!(found.path, ["A", "B", "C"]);
}

#[test]
fn disconnected_pair_has_no_path() {
    let g = graph! { [A, B] };
    assert_eq!(
        g.shortest_path(&"A", &"B"),
        Err(Error::NoPath {
            start: "A",
            end: "B"
        })
    );
    assert_eq!(g.distance(&"A", &"B"), INFINITE_COST);
}

#[test]
fn duplicate_vertex_keeps_single_copy() {
    let mut g: WUGraph<&str> = WUGraph::default();
    g.add_vertex("A").unwrap();
    assert_eq!(g.add_vertex("A"), Err(Error::VertexExists("A")));
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.vertices().filter(|v| v.label == "A").count(), 1);
}

#[test]
fn removing_vertex_shrinks_each_neighbor_by_one() {
    let mut g = graph! {
        [A, B, C],
        A - B : 1,
        A - C : 2,
        B - C : 3,
    };
    let before_b = g.neighbors(&"B").unwrap().len();
    let before_c = g.neighbors(&"C").unwrap().len();

    let detached = g.remove_vertex(&"A").unwrap();
    assert_eq!(detached.len(), 2);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.neighbors(&"B").unwrap().len(), before_b - 1);
    assert_eq!(g.neighbors(&"C").unwrap().len(), before_c - 1);
}

#[test]
fn equal_cost_paths_are_all_acceptable() {
    let g = graph! {
        [S, X, Y, T],
        S - X : 2,
        S - Y : 1,
        X - T : 1,
        Y - T : 2,
    };
    let found = g.shortest_path(&"S", &"T").unwrap();
    assert_eq!(found.cost, 3);
    assert!(found.path == ["S", "X", "T"] || found.path == ["S", "Y", "T"]);
}

#[test]
fn failed_mutations_leave_graph_unchanged() {
    let mut g = graph! { [A, B, C], A - B : 1 };
    let before: Vec<_> = g.vertices().cloned().collect();

    assert!(g.add_vertex("B").is_err());
    assert!(g.add_edge("A", "B", 99).is_err());
    assert!(g.add_edge("A", "Z", 1).is_err());
    assert!(g.remove_edge(&"A", &"C").is_err());
    assert!(g.remove_edge(&"Z", &"A").is_err());
    assert!(g.remove_vertex(&"Z").is_err());

    let after: Vec<_> = g.vertices().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn listing_follows_insertion_order() {
    let mut g = graph! {
        [D, B, A, C],
        D - A : 4,
        B - C : 1,
    };
    let labels: Vec<_> = g.vertices().map(|v| v.label).collect();
    assert_eq!(labels, ["D", "B", "A", "C"]);

    g.remove_vertex(&"B").unwrap();
    g.add_vertex("B").unwrap();
    let labels: Vec<_> = g.vertices().map(|v| v.label).collect();
    assert_eq!(labels, ["D", "A", "C", "B"]);
}

#[test]
fn path_updates_after_mutation() {
    let mut g = graph! {
        [A, B, C],
        A - B : 1,
        B - C : 2,
        A - C : 10,
    };
    g.remove_vertex(&"B").unwrap();
    let found = g.shortest_path(&"A", &"C").unwrap();
    assert_eq!(found.cost, 10);
    assert_eq!(found.path, ["A", "C"]);

    g.remove_edge(&"C", &"A").unwrap();
    assert!(matches!(
        g.shortest_path(&"A", &"C"),
        Err(Error::NoPath { .. })
    ));
}

#[test]
fn out_parameter_form_reports_sentinel() {
    let g = graph! { [A, B, C], A - B : 3 };
    let mut path = Vec::new();
    assert_eq!(g.shortest_path_into(&"A", &"C", &mut path), INFINITE_COST);
    assert!(path.is_empty());
    assert_eq!(g.shortest_path_into(&"A", &"Z", &mut path), INFINITE_COST);
    assert!(path.is_empty());
    assert_eq!(g.shortest_path_into(&"A", &"B", &mut path), 3);
    assert_eq!(path, ["A", "B"]);
}
