use std::fmt;

use ahash::AHashMap;

use crate::types::GraphError;
use crate::{log_debug, log_trace};

/// One half of an undirected edge, stored in the adjacency list of its source
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Neighbour vertex id
    pub to: String,
    /// Non-negative, finite weight
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub(super) struct Vertex {
    pub(super) id: String,
    pub(super) edges: Vec<Edge>,
}

/// Adjacency-list graph with symmetric weights
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(super) vertices: Vec<Vertex>,
    pub(super) index: AHashMap<String, usize>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex. Returns false if it already existed.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.vertices.len());
        self.vertices.push(Vertex { id, edges: Vec::new() });
        true
    }

    /// Set the weight between `from` and `to` in both directions.
    ///
    /// Missing vertices are created. An existing edge keeps its position in
    /// the adjacency list and takes the new weight.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        self.add_vertex(from);
        self.add_vertex(to);
        self.set_half(from, to, weight);
        if from != to {
            self.set_half(to, from, weight);
        }
        log_trace!("edge {} <-> {} ({:.2})", from, to, weight);
        Ok(())
    }

    fn set_half(&mut self, from: &str, to: &str, weight: f64) {
        let Some(&slot) = self.index.get(from) else {
            return;
        };
        let edges = &mut self.vertices[slot].edges;
        match edges.iter_mut().find(|e| e.to == to) {
            Some(edge) => edge.weight = weight,
            None => edges.push(Edge { to: to.to_string(), weight }),
        }
    }

    fn drop_half(&mut self, from: &str, to: &str) -> bool {
        let Some(&slot) = self.index.get(from) else {
            return false;
        };
        let edges = &mut self.vertices[slot].edges;
        let before = edges.len();
        edges.retain(|e| e.to != to);
        edges.len() != before
    }

    /// Remove the edge between `from` and `to`. Returns whether it existed.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let removed = self.drop_half(from, to);
        self.drop_half(to, from);
        removed
    }

    /// Remove a vertex and every edge that references it
    pub fn remove_vertex(&mut self, id: &str) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        // reverse halves go while the index still matches `vertices`
        let neighbours: Vec<String> =
            self.vertices[slot].edges.iter().map(|e| e.to.clone()).collect();
        for to in &neighbours {
            if to != id {
                self.drop_half(to, id);
            }
        }
        self.index.remove(id);
        let vertex = self.vertices.remove(slot);
        // positions after the removed slot shifted down by one
        for (i, v) in self.vertices.iter().enumerate().skip(slot) {
            self.index.insert(v.id.clone(), i);
        }
        log_debug!("removed vertex {} ({} edges)", id, vertex.edges.len());
        true
    }

    /// Returns true if `id` is a vertex
    #[inline]
    pub fn has_vertex(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Vertex ids in registration order
    pub fn get_vertices(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.id.as_str()).collect()
    }

    /// Adjacency list of `id`, in edge insertion order
    pub fn get_edges(&self, id: &str) -> Option<&[Edge]> {
        self.index.get(id).map(|&slot| self.vertices[slot].edges.as_slice())
    }

    /// Weight of the edge between `from` and `to`
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.get_edges(from)?.iter().find(|e| e.to == to).map(|e| e.weight)
    }

    /// Every edge between distinct vertices once, as `(u, v, weight)` with `u < v`
    pub fn get_all_edges(&self) -> Vec<(&str, &str, f64)> {
        self.vertices
            .iter()
            .flat_map(|v| {
                v.edges
                    .iter()
                    .filter(move |e| v.id < e.to)
                    .map(move |e| (v.id.as_str(), e.to.as_str(), e.weight))
            })
            .collect()
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges between distinct vertices
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|v| v.edges.iter().filter(|e| v.id < e.to).count())
            .sum()
    }

    /// Multi-line listing of every vertex and its neighbours
    pub fn debug_dump(&self) -> String {
        self.to_string()
    }

    pub(super) fn slot(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph: {} vertices, {} edges",
            self.vertex_count(),
            self.edge_count()
        )?;
        for vertex in &self.vertices {
            write!(f, "  {} -> [", vertex.id)?;
            for (i, edge) in vertex.edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}({:.2}m)", edge.to, edge.weight)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
