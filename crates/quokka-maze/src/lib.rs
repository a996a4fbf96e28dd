//! Quokka maze: food-constrained path search over an undirected location graph.
//!
//! A [`Maze`] is a simple undirected graph whose vertices may carry food.
//! Two queries run over it:
//!
//! - [`Maze::find_path`]: a simple path whose consecutive food stops are at
//!   most `k` hops apart
//! - [`Maze::exists_path_with_extra_food`]: whether such a path exists after
//!   placing food on at most `x` more vertices along it
//!
//! # Architecture
//!
//! - **config**: search configuration (claim policy, frame limit)
//! - **error**: `GraphError` / `GraphResult`
//! - **maze**: vertex arena, edge mutation, query surface
//! - **traversal**: the food route search engine
//!
//! Queries keep all traversal state local to the call, so they never
//! mutate the maze and repeated calls return identical results.
//!
//! # Example
//!
//! ```
//! use quokka_maze::{Maze, Vertex};
//!
//! //                     *
//! // A -- B -- C -- D -- E
//! let mut maze = Maze::new();
//! let ids: Vec<_> = [false, false, false, false, true]
//!     .into_iter()
//!     .map(|food| maze.add_vertex(Vertex::new(food)))
//!     .collect::<Result<_, _>>()?;
//! for pair in ids.windows(2) {
//!     maze.fix_edge(pair[0], pair[1])?;
//! }
//!
//! assert!(!maze.exists_path_with_extra_food(ids[0], ids[4], 2, 0)?);
//! assert!(maze.exists_path_with_extra_food(ids[0], ids[4], 2, 1)?);
//! assert!(maze.exists_path_with_extra_food(ids[0], ids[4], 1, 6)?);
//! # Ok::<(), quokka_maze::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod maze;
pub mod traversal;

// Re-exports for convenience
pub use config::{ClaimPolicy, SearchConfig};
pub use error::{GraphError, GraphResult};
pub use maze::{Maze, Vertex, VertexId};
pub use traversal::{find_food_route, FoodParams, FoodRoute};
