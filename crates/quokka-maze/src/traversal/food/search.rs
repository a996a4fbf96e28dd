//! Food-constrained route search.
//!
//! One engine serves both queries: a plain route search is a search with
//! zero extra food. Frames are stored in a [`FrameArena`]; the frontier is a
//! `VecDeque` of frame indices, drained from the front for the breadth-first
//! policies and from the back for `Exhaustive`.
//!
//! `FirstClaim` sweeps once per budget `0, 1, ..= x` and stops at the first
//! success. A single sweep with budget `x` can lose a route that a smaller
//! budget finds (a shorter path spends the extra food and claims a vertex
//! first), so the budget ladder keeps the answer monotone in `x`. Budgets
//! above the vertex count behave identically and are skipped.

use std::collections::{HashSet, VecDeque};

use crate::config::ClaimPolicy;
use crate::error::GraphResult;
use crate::maze::{Maze, VertexId};

use super::frames::{Frame, FrameArena};
use super::route::FoodRoute;
use super::types::FoodParams;

/// Find a simple route from `start` to `target` that respects the hop
/// budget, placing at most `params.extra_food` extra food stops.
///
/// # Arguments
/// * `maze` - Maze to search (not modified)
/// * `start` - Start vertex; counts as a food stop at position 0
/// * `target` - Target vertex; needs no food of its own
/// * `params` - Hop budget, extra food, claim policy and frame limit
///
/// # Returns
/// * `Ok(Some(route))` - A qualifying route and its extra food placements
/// * `Ok(None)` - No route found under the chosen policy
/// * `Err(GraphError::VertexNotFound)` - Unknown endpoint
/// * `Err(GraphError::SearchLimitExceeded)` - More than `max_states` frames
///
/// Under `FirstClaim` and `ResourceState`, `Ok(None)` means "none found by
/// the sweep". Only `Exhaustive` makes `Ok(None)` a proof that no route
/// exists. Under every policy a route found with budget `x` is still found
/// with any larger budget.
///
/// # Example
///
/// ```
/// use quokka_maze::{find_food_route, FoodParams, Maze, Vertex};
///
/// let mut maze = Maze::new();
/// let ids: Vec<_> = [false, false, false, false, true]
///     .into_iter()
///     .map(|food| maze.add_vertex(Vertex::new(food)))
///     .collect::<Result<_, _>>()?;
/// for pair in ids.windows(2) {
///     maze.fix_edge(pair[0], pair[1])?;
/// }
///
/// let params = FoodParams::with_gap(2).extra_food(1);
/// let route = find_food_route(&maze, ids[0], ids[4], params)?.expect("route exists");
/// assert_eq!(route.extra_food, vec![ids[2]]);
/// # Ok::<(), quokka_maze::GraphError>(())
/// ```
pub fn find_food_route(
    maze: &Maze,
    start: VertexId,
    target: VertexId,
    params: FoodParams,
) -> GraphResult<Option<FoodRoute>> {
    let start_slot = maze.slot(start)?;
    let target_slot = maze.slot(target)?;

    let budgets = match params.policy {
        ClaimPolicy::FirstClaim => 0..=params.extra_food.min(maze.vertex_count()),
        ClaimPolicy::ResourceState | ClaimPolicy::Exhaustive => params.extra_food..=params.extra_food,
    };

    let mut search = FoodSearch::new(maze, target_slot, &params);
    let mut arrival = None;
    for budget in budgets {
        arrival = search.run(start_slot, budget)?;
        if arrival.is_some() {
            break;
        }
    }

    log::debug!(
        "Food search complete: policy={:?} k={} x={} frames={} found={}",
        params.policy,
        params.max_gap,
        params.extra_food,
        search.arena.spent(),
        arrival.is_some()
    );

    Ok(arrival.map(|arrival| search.route(arrival)))
}

/// How the target was reached.
#[derive(Debug, Clone, Copy)]
enum Arrival {
    /// The frame itself sits on the target (start == target).
    At(usize),
    /// The frame is adjacent to the target and may close the route.
    Beside(usize),
}

/// Explored-state bookkeeping, one variant per policy.
enum Claims {
    Vertices(HashSet<usize>),
    States(HashSet<(usize, usize, usize)>),
    Open,
}

struct FoodSearch<'a> {
    maze: &'a Maze,
    target: usize,
    params: &'a FoodParams,
    arena: FrameArena,
    frontier: VecDeque<usize>,
    claims: Claims,
}

impl<'a> FoodSearch<'a> {
    fn new(maze: &'a Maze, target: usize, params: &'a FoodParams) -> Self {
        let claims = match params.policy {
            ClaimPolicy::FirstClaim => Claims::Vertices(HashSet::with_capacity(maze.vertex_count())),
            ClaimPolicy::ResourceState => Claims::States(HashSet::new()),
            ClaimPolicy::Exhaustive => Claims::Open,
        };

        Self {
            maze,
            target,
            params,
            arena: FrameArena::new(params.max_states),
            frontier: VecDeque::new(),
            claims,
        }
    }

    fn next(&mut self) -> Option<usize> {
        match self.params.policy {
            ClaimPolicy::Exhaustive => self.frontier.pop_back(),
            ClaimPolicy::FirstClaim | ClaimPolicy::ResourceState => self.frontier.pop_front(),
        }
    }

    /// Clear per-sweep state. The arena keeps counting frames toward the limit.
    fn reset(&mut self) {
        self.arena.clear();
        self.frontier.clear();
        match &mut self.claims {
            Claims::Vertices(claimed) => claimed.clear(),
            Claims::States(claimed) => claimed.clear(),
            Claims::Open => {}
        }
    }

    /// One sweep from `start` with `budget` extra food.
    fn run(&mut self, start: usize, budget: usize) -> GraphResult<Option<Arrival>> {
        self.reset();
        let root = Frame::root(start, budget);
        self.admit(&root);
        let root_index = self.arena.push(root)?;
        self.frontier.push_back(root_index);

        let max_gap = self.params.max_gap;

        while let Some(index) = self.next() {
            let frame = self.arena.get(index);

            if frame.slot == self.target {
                return Ok(Some(Arrival::At(index)));
            }

            if frame.can_close(max_gap) && self.maze.adjacency[frame.slot].contains(&self.target) {
                return Ok(Some(Arrival::Beside(index)));
            }

            let neighbors: Vec<usize> = match self.params.policy {
                // LIFO frontier: push in reverse so the first neighbor pops first
                ClaimPolicy::Exhaustive => self.maze.adjacency[frame.slot].iter().rev().copied().collect(),
                _ => self.maze.neighbor_slots(frame.slot).collect(),
            };

            for slot in neighbors {
                let Some(next) = frame.advance(index, slot, self.maze.food_at(slot), max_gap) else {
                    continue;
                };
                if !self.admit(&next) {
                    continue;
                }
                let child = self.arena.push(next)?;
                self.frontier.push_back(child);
            }
        }

        Ok(None)
    }

    /// Claim the state of `frame`. False if it was already explored or
    /// would revisit a vertex on its own route.
    fn admit(&mut self, frame: &Frame) -> bool {
        let on_trail = |arena: &FrameArena| {
            frame
                .parent
                .map_or(false, |parent| arena.on_trail(parent, frame.slot))
        };

        match &mut self.claims {
            // A claimed vertex is never re-entered, so routes stay simple
            Claims::Vertices(claimed) => claimed.insert(frame.slot),
            Claims::States(claimed) => {
                !on_trail(&self.arena) && claimed.insert((frame.slot, frame.gap, frame.spare))
            }
            Claims::Open => !on_trail(&self.arena),
        }
    }

    fn route(&self, arrival: Arrival) -> FoodRoute {
        let (mut slots, placed, closing) = match arrival {
            Arrival::At(index) => {
                let (slots, placed) = self.arena.trail(index);
                (slots, placed, None)
            }
            Arrival::Beside(index) => {
                let (slots, placed) = self.arena.trail(index);
                (slots, placed, Some(self.target))
            }
        };
        slots.extend(closing);

        FoodRoute {
            vertices: slots.into_iter().map(|slot| self.maze.id_at(slot)).collect(),
            extra_food: placed.into_iter().map(|slot| self.maze.id_at(slot)).collect(),
        }
    }
}
