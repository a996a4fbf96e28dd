//! Tests for the food route search.


use crate::maze::{Maze, Vertex, VertexId};

/// Build a maze from `(label, has_food)` pairs and label-pair edges.
///
/// Vertices are inserted in the given order, which fixes neighbor order.
pub(super) fn build(vertices: &[(&str, bool)], edges: &[(&str, &str)]) -> (Maze, Vec<VertexId>) {
    let mut maze = Maze::new();
    let ids: Vec<VertexId> = vertices
        .iter()
        .map(|&(name, food)| {
            maze.add_vertex(Vertex::new(food).label(name))
                .expect("add_vertex failed")
        })
        .collect();

    let lookup = |name: &str| {
        let pos = vertices
            .iter()
            .position(|&(n, _)| n == name)
            .unwrap_or_else(|| panic!("unknown vertex label {}", name));
        ids[pos]
    };

    for &(u, v) in edges {
        maze.fix_edge(lookup(u), lookup(v)).expect("fix_edge failed");
    }

    (maze, ids)
}

/// Path graph over `food` flags, labelled A, B, C, ...
pub(super) fn line(food: &[bool]) -> (Maze, Vec<VertexId>) {
    let labels: Vec<String> = (0..food.len())
        .map(|i| char::from(b'A' + i as u8).to_string())
        .collect();
    let vertices: Vec<(&str, bool)> = labels.iter().map(String::as_str).zip(food.iter().copied()).collect();
    let edges: Vec<(&str, &str)> = labels
        .windows(2)
        .map(|w| (w[0].as_str(), w[1].as_str()))
        .collect();
    build(&vertices, &edges)
}

/// Graph where the first vertex to reach `v` does so with the larger gap.
///
/// ```text
/// s -- a -- v -- w -- t
///  \       /
///   b -- c*
/// ```
///
/// With k = 3 the only valid route is s, b, c, v, w, t, but a breadth-first
/// sweep claims `v` through `a` first (gap 2) and then cannot reach `t`.
pub(super) fn late_food_detour() -> (Maze, Vec<VertexId>) {
    build(
        &[
            ("s", false),
            ("a", false),
            ("b", false),
            ("c", true),
            ("v", false),
            ("w", false),
            ("t", false),
        ],
        &[("s", "a"), ("s", "b"), ("a", "v"), ("b", "c"), ("c", "v"), ("v", "w"), ("w", "t")],
    )
}

/// Graph where spending more extra food early claims a vertex too cheaply.
///
/// ```text
/// s -- a -- b -- v* -- w -- t
///  \           /
///   c* - d* - e*
/// ```
///
/// With k = 1 and two extra stops, a single breadth-first sweep feeds `a`
/// and `b`, claims `v` with nothing left for `w`, and fails. One stop is
/// enough along the food-lined detour.
pub(super) fn eager_budget_trap() -> (Maze, Vec<VertexId>) {
    build(
        &[
            ("s", false),
            ("a", false),
            ("b", false),
            ("c", true),
            ("d", true),
            ("e", true),
            ("v", true),
            ("w", false),
            ("t", false),
        ],
        &[
            ("s", "a"),
            ("a", "b"),
            ("b", "v"),
            ("s", "c"),
            ("c", "d"),
            ("d", "e"),
            ("e", "v"),
            ("v", "w"),
            ("w", "t"),
        ],
    )
}

/// Graph where `(v, gap 0, spare 0)` is first claimed by a route that
/// already used `a`, which the only valid route needs after `v`.
///
/// ```text
/// s -- q -- a -- m -- t
///  \        |
///   b1-b2-- v*
/// ```
///
/// With k = 3 the only valid route is s, b1, b2, v, a, m, t.
pub(super) fn shared_state_detour() -> (Maze, Vec<VertexId>) {
    build(
        &[
            ("s", false),
            ("q", false),
            ("b1", false),
            ("a", false),
            ("b2", false),
            ("v", true),
            ("m", false),
            ("t", false),
        ],
        &[
            ("s", "q"),
            ("s", "b1"),
            ("q", "a"),
            ("b1", "b2"),
            ("a", "v"),
            ("b2", "v"),
            ("a", "m"),
            ("m", "t"),
        ],
    )
}
