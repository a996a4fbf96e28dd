//! Food-constrained route search.
//!
//! Finds a simple route between two vertices such that, walking from the
//! start, no more than `k` edges separate consecutive food stops, optionally
//! placing up to `x` extra food stops along the way.
//!
//! # Transition Rule
//!
//! Moving to a neighbor with food resets the gap to 0; any other move adds
//! one hop. A move that would bring the gap to `k` either spends one extra
//! food on the neighbor (gap back to 0) or is pruned. The edge into the
//! target closes the route whenever the current gap is below `k`.
//!
//! # Claim Policies
//!
//! See [`ClaimPolicy`](crate::config::ClaimPolicy). `FirstClaim` costs
//! O(V + E) per sweep; `ResourceState` explores more states at a higher
//! cost but can still miss routes; only `Exhaustive` is complete.

mod frames;
mod route;
mod search;
mod types;

#[cfg(test)]
mod tests;

pub use self::route::FoodRoute;
pub use self::search::find_food_route;
pub use self::types::FoodParams;
