//! Maze: an undirected simple graph of locations, some of which carry food.
//!
//! # Module Structure
//!
//! - [`vertex`]: `Vertex` and its identity `VertexId`
//! - `core`: `Maze` arena, vertex insertion and accessors
//! - `edges`: edge mutation (`fix_edge` / `block_edge`) and adjacency reads
//! - `queries`: the path queries, validated against the maze config

mod core;
mod edges;
mod queries;
pub mod vertex;


pub use self::core::Maze;
pub use self::vertex::{Vertex, VertexId};
