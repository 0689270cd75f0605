//! Border loops: nearest-vertex lookup and arc extraction.
//!
//! A border is stored as an open list of vertices in traversal order and
//! interpreted as a closed loop (the last vertex connects back to the
//! first). Two user clicks snap to their nearest vertices, and the segment
//! drawn between them is the shorter of the two arcs around the loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::LatLng;

/// A closed boundary, stored as vertices in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderLoop {
    vertices: Vec<LatLng>,
}

/// Invalid input to a border operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BorderError {
    #[error("border loop has no vertices")]
    EmptyLoop,
    #[error("vertex index {index} out of range for loop of {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

impl BorderLoop {
    pub fn new(vertices: Vec<LatLng>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Finds the vertex nearest to `query` by planar distance.
    ///
    /// The scan is stable: among equidistant vertices the first in
    /// traversal order wins. The query need not lie on the loop.
    pub fn nearest_vertex(&self, query: LatLng) -> Result<usize, BorderError> {
        if self.vertices.is_empty() {
            return Err(BorderError::EmptyLoop);
        }

        let mut nearest = 0;
        let mut min_dist = f64::INFINITY;
        for (index, vertex) in self.vertices.iter().enumerate() {
            let dist = vertex.planar_distance(query);
            if dist < min_dist {
                min_dist = dist;
                nearest = index;
            }
        }

        Ok(nearest)
    }

    /// Extracts the shorter arc between two vertices, endpoints inclusive.
    ///
    /// Both directions around the loop are candidates: a forward walk
    /// (increasing index, wrapping past the end) and a backward walk
    /// (decreasing index, wrapping past zero), each traversing from `from`
    /// to `to`. The walk visiting fewer vertices wins; on a tie the
    /// forward walk is returned. Vertex count stands in for arc length,
    /// which is accurate for roughly uniformly sampled boundaries.
    pub fn extract_arc(&self, from: usize, to: usize) -> Result<Vec<LatLng>, BorderError> {
        let len = self.vertices.len();
        if len == 0 {
            return Err(BorderError::EmptyLoop);
        }
        for index in [from, to] {
            if index >= len {
                return Err(BorderError::IndexOutOfRange { index, len });
            }
        }

        if from == to {
            return Ok(vec![self.vertices[from]]);
        }

        // Vertices visited walking from -> to in each direction, endpoints
        // included. The two counts total len + 2 because both endpoints
        // appear in both walks.
        let forward_len = (to + len - from) % len + 1;
        let backward_len = (from + len - to) % len + 1;

        let arc = if forward_len <= backward_len {
            self.walk(from, forward_len, |i| (i + 1) % len)
        } else {
            self.walk(from, backward_len, |i| (i + len - 1) % len)
        };

        Ok(arc)
    }

    /// Collects `count` vertices starting at `start`, stepping with `next`.
    fn walk(&self, start: usize, count: usize, next: impl Fn(usize) -> usize) -> Vec<LatLng> {
        let mut arc = Vec::with_capacity(count);
        let mut index = start;
        for _ in 0..count {
            arc.push(self.vertices[index]);
            index = next(index);
        }
        arc
    }
}
