//! Configuration types for maze queries.
//!
//! - [`SearchConfig`]: claim policy and per-query frame limit
//! - [`ClaimPolicy`]: how the food search decides a state is already explored

mod search;

pub use self::search::{ClaimPolicy, SearchConfig};
