//! Edge mutation and adjacency queries for Maze.
//!
//! Both mutations validate everything before touching adjacency, so an
//! error always leaves the maze unchanged.

use crate::error::{GraphError, GraphResult};

use super::core::Maze;
use super::vertex::VertexId;

impl Maze {
    /// Add the undirected edge `u -- v`.
    ///
    /// # Errors
    /// * `GraphError::VertexNotFound` - either endpoint is not in the maze
    /// * `GraphError::SelfLoop` - `u == v`
    /// * `GraphError::DuplicateEdge` - the edge already exists
    pub fn fix_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        let su = self.slot(u)?;
        let sv = self.slot(v)?;
        if su == sv {
            return Err(GraphError::SelfLoop(u));
        }
        if self.adjacency[su].contains(&sv) {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        self.adjacency[su].insert(sv);
        self.adjacency[sv].insert(su);
        log::trace!("FIX edge {} -- {}", self.vertices[su], self.vertices[sv]);
        Ok(())
    }

    /// Remove the undirected edge `u -- v`.
    ///
    /// # Errors
    /// * `GraphError::VertexNotFound` - either endpoint is not in the maze
    /// * `GraphError::SelfLoop` - `u == v`
    /// * `GraphError::EdgeNotFound` - no edge in either direction
    pub fn block_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        let su = self.slot(u)?;
        let sv = self.slot(v)?;
        if su == sv {
            return Err(GraphError::SelfLoop(u));
        }
        if !self.adjacency[su].contains(&sv) && !self.adjacency[sv].contains(&su) {
            return Err(GraphError::EdgeNotFound(u, v));
        }

        self.adjacency[su].remove(&sv);
        self.adjacency[sv].remove(&su);
        log::trace!("BLOCK edge {} -- {}", self.vertices[su], self.vertices[sv]);
        Ok(())
    }

    /// Whether `u -- v` is an edge. Unknown vertices have no edges.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        match (self.slots.get(&u), self.slots.get(&v)) {
            (Some(&su), Some(&sv)) => self.adjacency[su].contains(&sv),
            _ => false,
        }
    }

    /// Neighbors of `id` in insertion order of the neighbor vertices.
    pub fn neighbors(&self, id: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        let slot = self.slot(id)?;
        Ok(self.neighbor_slots(slot).map(move |n| self.id_at(n)))
    }

    pub fn degree(&self, id: VertexId) -> GraphResult<usize> {
        Ok(self.adjacency[self.slot(id)?].len())
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Every undirected edge exactly once, as `(earlier, later)` by insertion order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors.range(u + 1..) {
                edges.push((self.id_at(u), self.id_at(v)));
            }
        }
        edges
    }
}
