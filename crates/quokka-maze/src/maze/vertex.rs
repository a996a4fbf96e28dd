//! Vertex type: a location in the maze, with or without food.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a vertex.
///
/// Every call to [`Vertex::new`] draws a fresh v4 UUID, so two vertices with
/// the same attributes are still distinct. Clones share the id and are
/// treated as the same instance by [`Maze`](crate::maze::Maze).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(Uuid);

impl VertexId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID.
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A location in the maze.
///
/// `has_food` is fixed at construction. Adjacency is not stored here; the
/// owning [`Maze`](crate::maze::Maze) keeps neighbor sets keyed by arena slot.
///
/// # Example
/// ```
/// use quokka_maze::Vertex;
///
/// let burrow = Vertex::with_food().label("burrow");
/// let twin = Vertex::with_food().label("burrow");
/// assert_ne!(burrow.id(), twin.id());
/// assert!(burrow.has_food());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    has_food: bool,
    label: Option<String>,
}

impl Vertex {
    /// Create a vertex with a fresh identity.
    pub fn new(has_food: bool) -> Self {
        Self {
            id: VertexId::generate(),
            has_food,
            label: None,
        }
    }

    /// Shorthand for `Vertex::new(true)`.
    pub fn with_food() -> Self {
        Self::new(true)
    }

    /// Shorthand for `Vertex::new(false)`.
    pub fn without_food() -> Self {
        Self::new(false)
    }

    /// Builder: attach a display label. Does not affect identity.
    #[must_use]
    pub fn label(mut self, name: impl Into<String>) -> Self {
        self.label = Some(name.into());
        self
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn has_food(&self) -> bool {
        self.has_food
    }

    pub fn name(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Identity-based equality: attributes are ignored.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.has_food { "*" } else { "" };
        match &self.label {
            Some(name) => write!(f, "{}{}", name, marker),
            None => write!(f, "{}{}", self.id, marker),
        }
    }
}
