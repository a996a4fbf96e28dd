//! Deterministic maze fixtures.
//!
//! Same inputs (or same seed) always produce the same maze with the same
//! vertex insertion order, so neighbor order and search results repeat.

#![allow(dead_code)]

use std::collections::HashMap;

use quokka_maze::{Maze, Vertex, VertexId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Maze with vertices addressable by label.
pub struct LabelledMaze {
    pub maze: Maze,
    ids: HashMap<String, VertexId>,
}

impl LabelledMaze {
    /// Build from a vertex spec like `"A B C* D E*"` (a trailing `*` marks
    /// food) and `"A-B B-C"` style edges.
    pub fn parse(vertices: &str, edges: &str) -> Self {
        let mut maze = Maze::new();
        let mut ids = HashMap::new();

        for token in vertices.split_whitespace() {
            let (name, food) = match token.strip_suffix('*') {
                Some(name) => (name, true),
                None => (token, false),
            };
            let id = maze
                .add_vertex(Vertex::new(food).label(name))
                .expect("add_vertex failed");
            ids.insert(name.to_string(), id);
        }

        let mut labelled = Self { maze, ids };
        for pair in edges.split_whitespace() {
            let (u, v) = pair.split_once('-').expect("edge must look like A-B");
            let (u, v) = (labelled.id(u), labelled.id(v));
            labelled.maze.fix_edge(u, v).expect("fix_edge failed");
        }
        labelled
    }

    pub fn id(&self, name: &str) -> VertexId {
        *self
            .ids
            .get(name)
            .unwrap_or_else(|| panic!("no vertex labelled {}", name))
    }

    /// Labels along a path, for readable assertions.
    pub fn names(&self, path: &[VertexId]) -> Vec<String> {
        path.iter()
            .map(|id| {
                self.maze
                    .vertex(*id)
                    .and_then(|v| v.name())
                    .unwrap_or("?")
                    .to_string()
            })
            .collect()
    }
}

/// `rows x cols` grid with food on every cell where `(r + c) % food_every == 0`.
///
/// Returns the maze and the ids in row-major order.
pub fn grid(rows: usize, cols: usize, food_every: usize) -> (Maze, Vec<VertexId>) {
    let mut maze = Maze::new();
    let mut ids = Vec::with_capacity(rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            let food = food_every > 0 && (r + c) % food_every == 0;
            ids.push(maze.add_vertex(Vertex::new(food)).expect("add_vertex failed"));
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let here = ids[r * cols + c];
            if c + 1 < cols {
                maze.fix_edge(here, ids[r * cols + c + 1]).expect("fix_edge failed");
            }
            if r + 1 < rows {
                maze.fix_edge(here, ids[(r + 1) * cols + c]).expect("fix_edge failed");
            }
        }
    }

    (maze, ids)
}

/// Random simple graph on `2..=max_vertices` vertices.
pub fn random_maze(
    rng: &mut ChaCha8Rng,
    max_vertices: usize,
    edge_probability: f64,
    food_probability: f64,
) -> (Maze, Vec<VertexId>) {
    let count = rng.gen_range(2..=max_vertices);
    let mut maze = Maze::new();
    let ids: Vec<VertexId> = (0..count)
        .map(|_| {
            let food = rng.gen_bool(food_probability);
            maze.add_vertex(Vertex::new(food)).expect("add_vertex failed")
        })
        .collect();

    for u in 0..count {
        for v in (u + 1)..count {
            if rng.gen_bool(edge_probability) {
                maze.fix_edge(ids[u], ids[v]).expect("fix_edge failed");
            }
        }
    }

    (maze, ids)
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
