//! Graph traversal algorithms.
//!
//! - **food**: breadth-first (or exhaustive depth-first) route search under a
//!   hop budget between food stops, with optional extra food placement

pub mod food;

pub use food::{find_food_route, FoodParams, FoodRoute};
