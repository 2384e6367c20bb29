//! Single-pair shortest path using Dijkstra's algorithm.
//!
//! All weights are non-negative, so a vertex's distance is final once it is
//! the closest unsettled vertex.
//!
//! # Algorithm
//!
//! 1. Every vertex starts unreached except `start`, which is at 0.
//! 2. Scan all unsettled vertices for the smallest reached distance. The scan
//!    runs in insertion order and only moves on a strictly smaller distance,
//!    so ties go to the vertex that was added first.
//! 3. Settle it. If it is `end`, stop.
//! 4. Relax every incident edge leading to an unsettled neighbor, recording
//!    the settled vertex as predecessor on strict improvement.
//! 5. If no unsettled vertex has been reached, `end` is unreachable.
//!
//! The linear scan makes this O(V^2 + E). Sums that would overflow
//! [`Weight`] are never recorded as improvements. A real distance of
//! `Weight::MAX` is still a distance; only [`distance`](WUGraph::distance)
//! and [`shortest_path_into`](WUGraph::shortest_path_into) fold failure into
//! [`INFINITE_COST`].
//!
//! The path is rebuilt by walking predecessors back from `end` and reversing.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::error::Error;
use crate::graph::wugraph::WUGraph;
use crate::{Weight, INFINITE_COST};

/// A minimum-weight path and its total cost.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<T> {
    pub cost: Weight,
    /// Labels from start to end, both inclusive.
    pub path: Vec<T>,
}

impl<T> WUGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Computes a minimum-weight path from `start` to `end`.
    ///
    /// When `start == end` the result is cost 0 with the single-vertex path.
    /// Among several minimum-weight paths, the one found first under the
    /// insertion-order tie-break is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if `start` or `end` is absent.
    /// - [`Error::NoPath`] if `end` is not reachable from `start`.
    pub fn shortest_path(&self, start: &T, end: &T) -> Result<ShortestPath<T>, Error<T>> {
        let source = self
            .slot(start)
            .ok_or_else(|| Error::VertexNotFound(start.clone()))?;
        let target = self
            .slot(end)
            .ok_or_else(|| Error::VertexNotFound(end.clone()))?;

        let n = self.vertices.len();
        let mut dist: Vec<Option<Weight>> = vec![None; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        dist[source] = Some(0);

        while let Some((u, dist_u)) = closest_unsettled(&dist, &settled) {
            settled[u] = true;
            tracing::trace!(label = ?self.vertices[u].label, dist = dist_u, "settled");
            if u == target {
                break;
            }
            for edge in &self.vertices[u].edges {
                let Some(v) = self.slot(&edge.target) else {
                    continue;
                };
                if settled[v] {
                    continue;
                }
                if let Some(candidate) = dist_u.checked_add(edge.weight) {
                    if dist[v].is_none_or(|current| candidate < current) {
                        dist[v] = Some(candidate);
                        prev[v] = Some(u);
                    }
                }
            }
        }

        let Some(cost) = dist[target].filter(|_| settled[target]) else {
            tracing::debug!(?start, ?end, "shortest path: unreachable");
            return Err(Error::NoPath {
                start: start.clone(),
                end: end.clone(),
            });
        };

        let mut path = Vec::new();
        let mut at = Some(target);
        while let Some(slot) = at {
            path.push(self.vertices[slot].label.clone());
            at = prev[slot];
        }
        path.reverse();

        tracing::debug!(
            ?start,
            ?end,
            cost,
            hops = path.len() - 1,
            "shortest path"
        );
        Ok(ShortestPath { cost, path })
    }

    /// Out-parameter form of [`shortest_path`](Self::shortest_path).
    ///
    /// On success `path` is cleared and filled with the labels from `start`
    /// to `end`, and the cost is returned. On any failure `path` is left
    /// untouched and [`INFINITE_COST`] is returned.
    pub fn shortest_path_into(&self, start: &T, end: &T, path: &mut Vec<T>) -> Weight {
        match self.shortest_path(start, end) {
            Ok(found) => {
                path.clear();
                path.extend(found.path);
                found.cost
            }
            Err(_) => INFINITE_COST,
        }
    }

    /// Cost of the shortest path, or [`INFINITE_COST`] if there is none.
    pub fn distance(&self, start: &T, end: &T) -> Weight {
        self.shortest_path(start, end)
            .map_or(INFINITE_COST, |found| found.cost)
    }
}

/// Unsettled reached slot with the smallest distance, earliest slot on ties.
fn closest_unsettled(dist: &[Option<Weight>], settled: &[bool]) -> Option<(usize, Weight)> {
    let mut best: Option<(usize, Weight)> = None;
    for (slot, (&d, &done)) in dist.iter().zip(settled).enumerate() {
        let Some(d) = d else {
            continue;
        };
        if done {
            continue;
        }
        if best.is_none_or(|(_, b)| d < b) {
            best = Some((slot, d));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(
        vertices: &[&'static str],
        edges: &[(&'static str, &'static str, Weight)],
    ) -> WUGraph<&'static str> {
        let mut graph = WUGraph::default();
        for &label in vertices {
            graph.add_vertex(label).unwrap();
        }
        for &(a, b, w) in edges {
            graph.add_edge(a, b, w).unwrap();
        }
        graph
    }

    #[test]
    fn test_detour_is_cheaper() {
        let graph = graph_from(
            &["A", "B", "C"],
            &[("A", "B", 1), ("B", "C", 2), ("A", "C", 10)],
        );
        let found = graph.shortest_path(&"A", &"C").unwrap();
        assert_eq!(found.cost, 3);
        assert_eq!(found.path, ["A", "B", "C"]);

        let back = graph.shortest_path(&"C", &"A").unwrap();
        assert_eq!(back.cost, 3);
        assert_eq!(back.path, ["C", "B", "A"]);
    }

    #[test]
    fn test_same_vertex() {
        let graph = graph_from(&["A"], &[]);
        let found = graph.shortest_path(&"A", &"A").unwrap();
        assert_eq!(found.cost, 0);
        assert_eq!(found.path, ["A"]);
    }

    #[test]
    fn test_unreachable() {
        let graph = graph_from(&["A", "B", "C"], &[("A", "C", 4)]);
        assert_eq!(
            graph.shortest_path(&"A", &"B"),
            Err(Error::NoPath { start: "A", end: "B" })
        );
        assert_eq!(graph.distance(&"A", &"B"), INFINITE_COST);
    }

    #[test]
    fn test_missing_endpoint() {
        let graph = graph_from(&["A"], &[]);
        assert_eq!(
            graph.shortest_path(&"A", &"Z"),
            Err(Error::VertexNotFound("Z"))
        );
        assert_eq!(
            graph.shortest_path(&"Y", &"Z"),
            Err(Error::VertexNotFound("Y"))
        );
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = graph_from(&["A", "B", "C"], &[("A", "B", 0), ("B", "C", 0)]);
        let found = graph.shortest_path(&"A", &"C").unwrap();
        assert_eq!(found.cost, 0);
        assert_eq!(found.path, ["A", "B", "C"]);
    }

    #[test]
    fn test_tie_prefers_earlier_vertex() {
        // A-B-D and A-C-D both cost 2; B was added before C.
        let graph = graph_from(
            &["A", "B", "C", "D"],
            &[("A", "C", 1), ("A", "B", 1), ("C", "D", 1), ("B", "D", 1)],
        );
        let found = graph.shortest_path(&"A", &"D").unwrap();
        assert_eq!(found.cost, 2);
        assert_eq!(found.path, ["A", "B", "D"]);
    }

    #[test]
    fn test_overflowing_sum_is_unreachable() {
        let graph = graph_from(
            &["A", "B", "C"],
            &[("A", "B", Weight::MAX - 1), ("B", "C", 5)],
        );
        assert_eq!(graph.distance(&"A", &"B"), Weight::MAX - 1);
        assert!(matches!(
            graph.shortest_path(&"A", &"C"),
            Err(Error::NoPath { .. })
        ));
    }

    #[test]
    fn test_max_weight_edge_is_reachable() {
        let graph = graph_from(&["A", "B"], &[("A", "B", Weight::MAX)]);
        let found = graph.shortest_path(&"A", &"B").unwrap();
        assert_eq!(found.cost, Weight::MAX);
        assert_eq!(found.path, ["A", "B"]);

        // the sentinel forms cannot tell this apart from unreachable
        assert_eq!(graph.distance(&"B", &"A"), INFINITE_COST);
        let mut path = Vec::new();
        assert_eq!(graph.shortest_path_into(&"A", &"B", &mut path), Weight::MAX);
        assert_eq!(path, ["A", "B"]);
    }

    #[test]
    fn test_zero_edge_after_max_distance() {
        let graph = graph_from(
            &["A", "B", "C"],
            &[("A", "B", Weight::MAX), ("B", "C", 0)],
        );
        let found = graph.shortest_path(&"A", &"C").unwrap();
        assert_eq!(found.cost, Weight::MAX);
        assert_eq!(found.path, ["A", "B", "C"]);
    }

    #[test]
    fn test_into_leaves_buffer_on_failure() {
        let graph = graph_from(&["A", "B", "C"], &[("A", "B", 2)]);
        let mut path = vec!["stale"];
        assert_eq!(graph.shortest_path_into(&"A", &"C", &mut path), INFINITE_COST);
        assert_eq!(path, ["stale"]);
        assert_eq!(graph.shortest_path_into(&"A", &"Q", &mut path), INFINITE_COST);
        assert_eq!(path, ["stale"]);

        assert_eq!(graph.shortest_path_into(&"B", &"A", &mut path), 2);
        assert_eq!(path, ["B", "A"]);
    }
}
