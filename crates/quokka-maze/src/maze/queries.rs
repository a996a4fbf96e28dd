//! Path queries on Maze.
//!
//! Thin validation layer over [`find_food_route`]: budgets arrive as signed
//! integers, are checked for sign, then run with the maze's
//! [`SearchConfig`](crate::config::SearchConfig).

use crate::error::{GraphError, GraphResult};
use crate::traversal::food::{find_food_route, FoodParams, FoodRoute};

use super::core::Maze;
use super::vertex::VertexId;

impl Maze {
    /// Find a simple path from `s` to `t` where, walking from `s`, no more
    /// than `k` edges separate consecutive food stops (`s` and `t` count as
    /// stops).
    ///
    /// # Returns
    /// * `Ok(Some(path))` - Vertices from `s` to `t` inclusive
    /// * `Ok(None)` - No path found
    /// * `Err(GraphError::InvalidBudget)` - `k < 0`
    /// * `Err(GraphError::VertexNotFound)` - Unknown endpoint
    ///
    /// # Example
    /// ```
    /// use quokka_maze::{Maze, Vertex};
    ///
    /// //           *         *
    /// // A -- B -- C -- D -- E
    /// let mut maze = Maze::new();
    /// let ids: Vec<_> = [false, false, true, false, true]
    ///     .into_iter()
    ///     .map(|food| maze.add_vertex(Vertex::new(food)))
    ///     .collect::<Result<_, _>>()?;
    /// for pair in ids.windows(2) {
    ///     maze.fix_edge(pair[0], pair[1])?;
    /// }
    ///
    /// assert_eq!(maze.find_path(ids[0], ids[4], 2)?, Some(ids.clone()));
    /// assert_eq!(maze.find_path(ids[0], ids[4], 1)?, None);
    /// assert_eq!(maze.find_path(ids[0], ids[2], 4)?, Some(ids[..3].to_vec()));
    /// # Ok::<(), quokka_maze::GraphError>(())
    /// ```
    pub fn find_path(&self, s: VertexId, t: VertexId, k: i64) -> GraphResult<Option<Vec<VertexId>>> {
        let params = self.food_params(k, 0)?;
        let route = find_food_route(self, s, t, params)?;
        Ok(route.map(|route| route.vertices))
    }

    /// Whether a simple path from `s` to `t` meets the hop budget `k` after
    /// placing food on at most `x` additional vertices along it.
    ///
    /// # Errors
    /// * `GraphError::InvalidBudget` - `k < 0` or `x < 0`
    /// * `GraphError::VertexNotFound` - Unknown endpoint
    pub fn exists_path_with_extra_food(&self, s: VertexId, t: VertexId, k: i64, x: i64) -> GraphResult<bool> {
        Ok(self.plan_with_extra_food(s, t, k, x)?.is_some())
    }

    /// Same query as [`exists_path_with_extra_food`](Self::exists_path_with_extra_food),
    /// returning the route and where the extra food goes.
    pub fn plan_with_extra_food(
        &self,
        s: VertexId,
        t: VertexId,
        k: i64,
        x: i64,
    ) -> GraphResult<Option<FoodRoute>> {
        let params = self.food_params(k, x)?;
        find_food_route(self, s, t, params)
    }

    fn food_params(&self, k: i64, x: i64) -> GraphResult<FoodParams> {
        let max_gap = usize::try_from(k).map_err(|_| GraphError::negative("k", k))?;
        let extra_food = usize::try_from(x).map_err(|_| GraphError::negative("x", x))?;
        Ok(FoodParams::from_config(&self.config, max_gap).extra_food(extra_food))
    }
}
