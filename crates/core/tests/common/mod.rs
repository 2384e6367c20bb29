/// DSL macro for building test graphs.
///
/// Produces `WUGraph<&'static str>`.
///
/// # Syntax
///
/// ```ignore
/// graph! {
///     [A, B, C],          // vertices, in insertion order
///     A - B : 1,          // undirected edge with weight 1
///     B - C : 2,
/// }
/// ```
///
/// Every vertex and edge is expected to be accepted; the macro panics if the
/// graph rejects one.
#[macro_export]
macro_rules! graph {
    ([$($v:ident),* $(,)?] $(, $a:ident - $b:ident : $w:expr)* $(,)?) => {{
        let mut graph = dyngraph_core::WUGraph::<&'static str>::default();
        $(
            graph
                .add_vertex(stringify!($v))
                .expect(concat!("vertex ", stringify!($v)));
        )*
        $(
            graph
                .add_edge(stringify!($a), stringify!($b), $w)
                .expect(concat!("edge ", stringify!($a), "-", stringify!($b)));
        )*
        graph
    }};
}

/// Assert that every adjacency entry has a mirror entry with the same weight
/// and that no vertex lists itself or the same neighbor twice.
pub fn assert_symmetric(graph: &dyngraph_core::WUGraph<&'static str>) {
    for vertex in graph.vertices() {
        for (i, edge) in vertex.edges.iter().enumerate() {
            assert_ne!(edge.target, vertex.label, "self-loop on {}", vertex.label);
            assert!(
                vertex.edges[..i].iter().all(|e| e.target != edge.target),
                "parallel edge {} - {}",
                vertex.label,
                edge.target,
            );
            assert_eq!(
                graph.edge_weight(&edge.target, &vertex.label),
                Some(edge.weight),
                "asymmetric edge {} - {}",
                vertex.label,
                edge.target,
            );
        }
    }
}
