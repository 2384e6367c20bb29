//! Dynamic undirected weighted graph with shortest-path queries.
//!
//! `dyngraph_core` provides [`WUGraph`], a mutable undirected graph whose
//! vertices are identified by labels and whose edges carry non-negative
//! integer weights. It supports:
//!
//! 1. **Vertex mutation** -- adding a vertex, and removing a vertex together
//!    with every edge incident to it.
//! 2. **Edge mutation** -- adding and removing an undirected edge. Self-loops
//!    and parallel edges are rejected.
//! 3. **Shortest path** -- single-pair shortest path via Dijkstra's algorithm
//!    with a linear minimum-distance scan.
//! 4. **Listing** -- a lazy, insertion-ordered walk over every vertex and its
//!    adjacency list.
//!
//! Every operation returns a structured result. Failures are values of
//! [`Error`](error::Error); a failed mutation never changes the graph.
//! Rendering for humans lives in [`display`].
//!
//! ```rust
//! use dyngraph_core::WUGraph;
//!
//! let mut graph = WUGraph::default();
//! for label in ["A", "B", "C"] {
//!     graph.add_vertex(label).unwrap();
//! }
//! graph.add_edge("A", "B", 1).unwrap();
//! graph.add_edge("B", "C", 2).unwrap();
//! graph.add_edge("A", "C", 10).unwrap();
//!
//! let found = graph.shortest_path(&"A", &"C").unwrap();
//! assert_eq!(found.cost, 3);
//! assert_eq!(found.path, ["A", "B", "C"]);
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on
//!   [`Vertex`], [`Edge`], [`ShortestPath`] and [`Error`](error::Error).
//!
//! This crate is `no_std` compatible (requires `alloc`). The graph is not
//! internally synchronized; a multi-threaded host must guard it with a single
//! lock.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod display;
pub mod error;
pub mod graph;

pub use graph::dijkstra::ShortestPath;
pub use graph::wugraph::{Edge, Vertex, WUGraph};

/// Edge weight and path cost.
pub type Weight = u64;

/// Sentinel cost meaning "unreachable".
pub const INFINITE_COST: Weight = Weight::MAX;
