//! Core Maze struct: vertex arena, slot index and construction.

use std::collections::{BTreeSet, HashMap};

use crate::config::SearchConfig;
use crate::error::{GraphError, GraphResult};

use super::vertex::{Vertex, VertexId};

/// Undirected simple graph of locations.
///
/// Vertices live in an arena (`Vec<Vertex>`) and are addressed internally by
/// slot index; callers address them by [`VertexId`]. Adjacency is one
/// `BTreeSet<usize>` of neighbor slots per vertex, so neighbor iteration
/// follows vertex insertion order and searches are deterministic.
///
/// # Invariants
/// - every id in `slots` maps to the slot holding that vertex
/// - `v ∉ adjacency[v]` (no self-loops)
/// - `u ∈ adjacency[v] ⟺ v ∈ adjacency[u]`
///
/// Queries take `&self` and keep all traversal state locally, so a maze can
/// be shared across threads for read-only searching.
///
/// # Example
/// ```
/// use quokka_maze::{Maze, Vertex};
///
/// let mut maze = Maze::new();
/// let a = maze.add_vertex(Vertex::without_food())?;
/// let b = maze.add_vertex(Vertex::with_food())?;
/// maze.fix_edge(a, b)?;
/// assert_eq!(maze.find_path(a, b, 1)?, Some(vec![a, b]));
/// # Ok::<(), quokka_maze::GraphError>(())
/// ```
#[derive(Clone, Default)]
pub struct Maze {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) slots: HashMap<VertexId, usize>,
    pub(crate) adjacency: Vec<BTreeSet<usize>>,
    pub(crate) config: SearchConfig,
}

impl Maze {
    /// Empty maze with the default search configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty maze with a custom search configuration.
    ///
    /// # Errors
    /// * `GraphError::InvalidConfig` - `config.validate()` failed
    pub fn with_config(config: SearchConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Search configuration used by the query methods.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the search configuration.
    ///
    /// The previous configuration is kept if the new one is invalid.
    pub fn set_config(&mut self, config: SearchConfig) -> GraphResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Add a vertex to the maze.
    ///
    /// # Returns
    /// * `Ok(VertexId)` - handle for later edge and query calls
    /// * `Err(GraphError::DuplicateVertex)` - this instance (same id) is
    ///   already present; the maze is unchanged
    pub fn add_vertex(&mut self, vertex: Vertex) -> GraphResult<VertexId> {
        let id = vertex.id();
        if self.slots.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }

        let slot = self.vertices.len();
        log::trace!("ADD vertex {} slot={}", vertex, slot);
        self.vertices.push(vertex);
        self.adjacency.push(BTreeSet::new());
        self.slots.insert(id, slot);
        Ok(id)
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(&id).map(|&slot| &self.vertices[slot])
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Vertices that carry food, in insertion order.
    pub fn food_vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().filter(|v| v.has_food())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ========== Slot Helpers ==========

    pub(crate) fn slot(&self, id: VertexId) -> GraphResult<usize> {
        self.slots
            .get(&id)
            .copied()
            .ok_or(GraphError::VertexNotFound(id))
    }

    #[inline]
    pub(crate) fn id_at(&self, slot: usize) -> VertexId {
        self.vertices[slot].id()
    }

    #[inline]
    pub(crate) fn food_at(&self, slot: usize) -> bool {
        self.vertices[slot].has_food()
    }

    #[inline]
    pub(crate) fn neighbor_slots(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[slot].iter().copied()
    }
}

impl std::fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Maze")
            .field("vertex_count", &self.vertex_count())
            .field("edge_count", &self.edge_count())
            .field("food_count", &self.food_vertices().count())
            .field("policy", &self.config.policy)
            .finish()
    }
}
