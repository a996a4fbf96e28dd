//! Route returned by the food search, with independent verification.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::maze::{Maze, VertexId};

/// A simple route through the maze plus the vertices where extra food is
/// placed to keep every gap within budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRoute {
    /// Route vertices, start first, target last.
    pub vertices: Vec<VertexId>,

    /// Vertices on the route that receive extra food, in route order.
    pub extra_food: Vec<VertexId>,
}

impl FoodRoute {
    /// Number of edges walked.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    #[must_use]
    pub fn start(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    #[must_use]
    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Number of extra food stops used.
    #[must_use]
    pub fn extra_food_used(&self) -> usize {
        self.extra_food.len()
    }

    /// Check the route against `maze` without trusting the search.
    ///
    /// # Validation Rules
    /// - the route is non-empty and every vertex belongs to `maze`
    /// - no vertex repeats (simple route)
    /// - consecutive vertices share an edge
    /// - extra food sits on distinct route vertices
    /// - walking from the start, the hops since the last food stop never
    ///   exceed `max_gap`; original food and placed food both reset the count
    ///
    /// # Errors
    /// * `GraphError::VertexNotFound` - a vertex is not in the maze
    /// * `GraphError::RouteViolation` - any other rule fails (first failure)
    pub fn verify(&self, maze: &Maze, max_gap: usize) -> GraphResult<()> {
        if self.vertices.is_empty() {
            return Err(GraphError::RouteViolation("route is empty".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.vertices.len());
        for &id in &self.vertices {
            maze.slot(id)?;
            if !seen.insert(id) {
                return Err(GraphError::RouteViolation(format!(
                    "vertex {} appears twice",
                    id
                )));
            }
        }

        for pair in self.vertices.windows(2) {
            if !maze.has_edge(pair[0], pair[1]) {
                return Err(GraphError::RouteViolation(format!(
                    "no edge between {} and {}",
                    pair[0], pair[1]
                )));
            }
        }

        let mut placed = HashSet::with_capacity(self.extra_food.len());
        for &id in &self.extra_food {
            if !seen.contains(&id) {
                return Err(GraphError::RouteViolation(format!(
                    "extra food on {} which is off the route",
                    id
                )));
            }
            if !placed.insert(id) {
                return Err(GraphError::RouteViolation(format!(
                    "extra food placed twice on {}",
                    id
                )));
            }
        }

        let mut gap = 0usize;
        for &id in self.vertices.iter().skip(1) {
            gap += 1;
            if gap > max_gap {
                return Err(GraphError::RouteViolation(format!(
                    "{} hops without food reaching {} (max {})",
                    gap, id, max_gap
                )));
            }
            let stocked = maze.vertex(id).map_or(false, |v| v.has_food()) || placed.contains(&id);
            if stocked {
                gap = 0;
            }
        }

        Ok(())
    }
}
