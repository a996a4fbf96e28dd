//! Shared fixtures for quokka-maze integration tests.
//!
//! - `fixtures`: deterministic maze builders (labelled graphs, grids, seeded
//!   random mazes)

pub mod fixtures;
