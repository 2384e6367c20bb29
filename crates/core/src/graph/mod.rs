pub mod dijkstra;
pub mod wugraph;
