use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::error::Error;
use crate::Weight;

/// One directed adjacency entry: the neighbor and the weight of the edge.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    pub target: T,
    pub weight: Weight,
}

/// A labelled vertex and its incident edges, in insertion order.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    pub label: T,
    pub edges: Vec<Edge<T>>,
}

impl<T> Vertex<T>
where
    T: Eq,
{
    const fn new(label: T) -> Self {
        Self {
            label,
            edges: Vec::new(),
        }
    }

    fn edge_to(&self, target: &T) -> Option<&Edge<T>> {
        self.edges.iter().find(|edge| &edge.target == target)
    }

    fn detach(&mut self, target: &T) -> Option<Edge<T>> {
        let position = self.edges.iter().position(|edge| &edge.target == target)?;
        Some(self.edges.remove(position))
    }
}

/// Undirected weighted graph backed by insertion-ordered adjacency lists.
///
/// Vertices live in a `Vec` in the order they were added; a label index maps
/// each label to its slot. Every undirected edge `{a, b}` is stored twice, as
/// `a -> b` in `a`'s list and `b -> a` in `b`'s list, always with the same
/// weight. The graph never contains self-loops or parallel edges.
#[derive(Debug, Clone)]
pub struct WUGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    pub(crate) vertices: Vec<Vertex<T>>,
    index: HashMap<T, usize>,
}

impl<T> Default for WUGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> WUGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Adds a vertex with an empty adjacency list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexExists`] if the label is already taken.
    pub fn add_vertex(&mut self, label: T) -> Result<(), Error<T>> {
        if self.index.contains_key(&label) {
            tracing::debug!(?label, "add vertex: already exists");
            return Err(Error::VertexExists(label));
        }
        tracing::debug!(?label, "add vertex");
        self.index.insert(label.clone(), self.vertices.len());
        self.vertices.push(Vertex::new(label));
        Ok(())
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// Returns the removed vertex's adjacency list; each entry names a former
    /// neighbor whose own list has lost exactly one entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if no vertex has this label.
    pub fn remove_vertex(&mut self, label: &T) -> Result<Vec<Edge<T>>, Error<T>> {
        let Some(slot) = self.index.remove(label) else {
            return Err(Error::VertexNotFound(label.clone()));
        };
        let vertex = self.vertices.remove(slot);
        for (shifted, moved) in self.vertices.iter().enumerate().skip(slot) {
            self.index.insert(moved.label.clone(), shifted);
        }
        for edge in &vertex.edges {
            if let Some(neighbor) = self.slot(&edge.target) {
                self.vertices[neighbor].detach(label);
            }
        }
        tracing::debug!(?label, edges = vertex.edges.len(), "remove vertex");
        Ok(vertex.edges)
    }

    /// Joins `a` and `b` with an undirected edge of the given weight.
    ///
    /// This never updates the weight of an existing edge.
    ///
    /// # Errors
    ///
    /// - [`Error::SelfLoop`] if `a == b`, whether or not the vertex exists.
    /// - [`Error::VertexNotFound`] for the first endpoint that is absent.
    /// - [`Error::EdgeExists`] if `a` and `b` are already adjacent.
    pub fn add_edge(&mut self, a: T, b: T, weight: Weight) -> Result<(), Error<T>> {
        if a == b {
            return Err(Error::SelfLoop(a));
        }
        let (slot_a, slot_b) = self.endpoints(&a, &b)?;
        if self.vertices[slot_a].edge_to(&b).is_some() {
            return Err(Error::EdgeExists(a, b));
        }
        tracing::debug!(?a, ?b, weight, "add edge");
        self.vertices[slot_a].edges.push(Edge {
            target: b.clone(),
            weight,
        });
        self.vertices[slot_b].edges.push(Edge { target: a, weight });
        Ok(())
    }

    /// Removes the edge between `a` and `b`, returning its weight.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] for the first endpoint that is absent.
    /// - [`Error::EdgeNotFound`] if the vertices are not adjacent.
    pub fn remove_edge(&mut self, a: &T, b: &T) -> Result<Weight, Error<T>> {
        let (slot_a, slot_b) = self.endpoints(a, b)?;
        let Some(edge) = self.vertices[slot_a].detach(b) else {
            return Err(Error::EdgeNotFound(a.clone(), b.clone()));
        };
        self.vertices[slot_b].detach(a);
        tracing::debug!(?a, ?b, weight = edge.weight, "remove edge");
        Ok(edge.weight)
    }

    fn endpoints(&self, a: &T, b: &T) -> Result<(usize, usize), Error<T>> {
        let slot_a = self.slot(a).ok_or_else(|| Error::VertexNotFound(a.clone()))?;
        let slot_b = self.slot(b).ok_or_else(|| Error::VertexNotFound(b.clone()))?;
        Ok((slot_a, slot_b))
    }

    pub(crate) fn slot(&self, label: &T) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Iterates over every vertex in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter()
    }

    /// Returns `true` if a vertex with this label exists.
    pub fn contains_vertex(&self, label: &T) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the adjacency list of `label`, or `None` if it is absent.
    pub fn neighbors(&self, label: &T) -> Option<&[Edge<T>]> {
        self.slot(label)
            .map(|slot| self.vertices[slot].edges.as_slice())
    }

    /// Returns the weight of the edge from `a` to `b`, if one exists.
    pub fn edge_weight(&self, a: &T, b: &T) -> Option<Weight> {
        let slot = self.slot(a)?;
        self.vertices[slot].edge_to(b).map(|edge| edge.weight)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|vertex| vertex.edges.len())
            .sum::<usize>()
            / 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
