//! Weighted undirected graph and shortest-path search
//!
//! One vertex per floor location; edge weights are walking distances.
//! Vertices keep registration order and each adjacency list keeps edge
//! insertion order, which pins Dijkstra's tie-breaking.

use serde::{Deserialize, Serialize};

mod dijkstra;
mod graph;

pub use graph::{Edge, Graph};

/// A shortest path and its total weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Vertex ids from start to end, inclusive
    pub path: Vec<String>,
    /// Sum of edge weights along `path`
    pub distance: f64,
}
