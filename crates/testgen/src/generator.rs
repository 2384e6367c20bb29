use std::collections::HashSet;

use dyngraph_core::error::Error;
use dyngraph_core::{WUGraph, Weight};
use rand::RngExt;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct GraphParams {
    pub n_vertex: u64,
    pub n_edge: u64,
    #[builder(default = 100)]
    pub max_weight: Weight,
}

impl GraphParams {
    /// Largest edge count a simple undirected graph on `n_vertex` vertices
    /// can hold.
    #[must_use]
    pub const fn max_edges(&self) -> u64 {
        self.n_vertex.saturating_mul(self.n_vertex.saturating_sub(1)) / 2
    }
}

/// A random graph as plain data: vertex labels and undirected edges.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct GeneratedGraph {
    params: GraphParams,
    vertices: Vec<String>,
    edges: Vec<(String, String, Weight)>,
}

impl GeneratedGraph {
    #[must_use]
    pub const fn get_params(&self) -> &GraphParams {
        &self.params
    }

    #[must_use]
    pub fn get_vertices(&self) -> &[String] {
        &self.vertices
    }

    #[must_use]
    pub fn get_edges(&self) -> &[(String, String, Weight)] {
        &self.edges
    }

    /// Load the vertices and edges into a fresh [`WUGraph`].
    ///
    /// # Errors
    ///
    /// Returns the first rejection from the graph: a repeated label, a
    /// self-loop, a duplicate pair or an unknown endpoint. Graphs from
    /// [`generate_single_graph`] never fail; hand-edited ones may.
    pub fn to_graph(&self) -> Result<WUGraph<String>, Error<String>> {
        let mut graph = WUGraph::default();
        for label in &self.vertices {
            graph.add_vertex(label.clone())?;
        }
        for (a, b, weight) in &self.edges {
            graph.add_edge(a.clone(), b.clone(), *weight)?;
        }
        Ok(graph)
    }
}

/// Label of the `i`-th generated vertex.
#[must_use]
pub fn vertex_label(i: u64) -> String {
    format!("v{i}")
}

/// Generate `min(n_edge, max_edges)` distinct undirected edges over
/// `n_vertex` vertices, with weights uniform in `0..=max_weight`.
///
/// No self-loops and no pair is drawn twice. Endpoints keep the order they
/// were drawn in, so both orientations appear.
#[must_use]
pub fn generate_edges_with<R>(params: &GraphParams, rng: &mut R) -> Vec<(u64, u64, Weight)>
where
    R: RngExt + ?Sized,
{
    let target = params.n_edge.min(params.max_edges());
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut edges = Vec::new();

    while (edges.len() as u64) < target {
        let a = rng.random_range(0..params.n_vertex);
        let b = rng.random_range(0..params.n_vertex);
        if a == b || !seen.insert((a.min(b), a.max(b))) {
            continue;
        }
        let weight = rng.random_range(0..=params.max_weight);
        edges.push((a, b, weight));
    }

    edges
}

/// Generate a single random graph described by `params`.
#[must_use]
pub fn generate_single_graph(params: &GraphParams) -> GeneratedGraph {
    let mut random_generator = rand::rng();
    let edges = generate_edges_with(params, &mut random_generator)
        .into_iter()
        .map(|(a, b, weight)| (vertex_label(a), vertex_label(b), weight))
        .collect();

    GeneratedGraph {
        params: params.clone(),
        vertices: (0..params.n_vertex).map(vertex_label).collect(),
        edges,
    }
}

#[must_use]
pub fn generate_mult_graphs(n_graph: u64, params: &GraphParams) -> Vec<GeneratedGraph> {
    (0..n_graph)
        .into_par_iter()
        .map(|_| generate_single_graph(params))
        .collect()
}
