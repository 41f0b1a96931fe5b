//! Dijkstra over the adjacency lists.
//!
//! Selection is a linear scan for the unvisited vertex with the smallest
//! tentative distance, O(V² + E). The scan uses strict `<`, so among equal
//! distances the vertex registered first wins. Relaxation also uses strict
//! `<`: the first predecessor to reach a distance keeps it.

use super::{Graph, PathResult};
use crate::{log_debug, log_search};

impl Graph {
    /// Shortest path from `start` to `end`.
    ///
    /// `None` if either endpoint is unknown or `end` is unreachable. A path
    /// from a vertex to itself is `[start]` with distance 0.
    pub fn dijkstra(&self, start: &str, end: &str) -> Option<PathResult> {
        let source = self.slot(start)?;
        let target = self.slot(end)?;

        let n = self.vertices.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        dist[source] = 0.0;

        loop {
            let mut best: Option<usize> = None;
            for i in 0..n {
                if visited[i] || !dist[i].is_finite() {
                    continue;
                }
                if best.map_or(true, |b| dist[i] < dist[b]) {
                    best = Some(i);
                }
            }
            let Some(current) = best else {
                break;
            };
            log_search!("select {} at {:.2}", self.vertices[current].id, dist[current]);
            if current == target {
                break;
            }
            visited[current] = true;

            for edge in &self.vertices[current].edges {
                let Some(next) = self.slot(&edge.to) else {
                    continue;
                };
                if visited[next] {
                    continue;
                }
                let candidate = dist[current] + edge.weight;
                if candidate < dist[next] {
                    log_search!("relax {} -> {} = {:.2}", self.vertices[current].id, edge.to, candidate);
                    dist[next] = candidate;
                    prev[next] = Some(current);
                }
            }
        }

        if !dist[target].is_finite() {
            log_debug!("no path {} -> {}", start, end);
            return None;
        }

        let mut path = vec![self.vertices[target].id.clone()];
        let mut cursor = target;
        while let Some(p) = prev[cursor] {
            path.push(self.vertices[p].id.clone());
            cursor = p;
        }
        if cursor != source {
            return None;
        }
        path.reverse();

        log_debug!("path {} -> {}: {} hops, {:.2}", start, end, path.len() - 1, dist[target]);
        Some(PathResult { path, distance: dist[target] })
    }
}
