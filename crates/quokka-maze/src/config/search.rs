//! Food search configuration.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// How the food search decides that a state has already been explored.
///
/// All policies are sound: a returned route always satisfies the gap rule,
/// and none loses a route when the extra food budget grows. Only
/// `Exhaustive` is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPolicy {
    /// Breadth-first; each vertex is claimed by the first frame reaching it.
    ///
    /// O(V + E) per sweep, one sweep per extra food budget `0..=x` until one
    /// succeeds. May miss a route that needs to pass a vertex with a smaller
    /// gap (or more spare food) than the frame that claimed it.
    #[default]
    FirstClaim,

    /// Breadth-first; claims are keyed by `(vertex, gap, spare food)` and
    /// routes must stay simple. Bounded by V * (k + 1) * (x + 1) claims.
    ///
    /// May miss a route when a state is first claimed by a partial route
    /// that already used a vertex the rest of the route needs; later routes
    /// reaching the same state are dropped.
    ResourceState,

    /// Depth-first enumeration of simple routes (explicit stack).
    ///
    /// Complete, exponential in the worst case. Bounded by `max_states`.
    Exhaustive,
}

/// Configuration applied by [`Maze`](crate::maze::Maze) query methods.
///
/// # Example
/// ```
/// use quokka_maze::config::{ClaimPolicy, SearchConfig};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.policy, ClaimPolicy::FirstClaim);
/// assert!(config.validate().is_ok());
///
/// let exact = SearchConfig::with_policy(ClaimPolicy::Exhaustive).max_states(50_000);
/// assert_eq!(exact.max_states, 50_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Claim policy. Default: `FirstClaim`.
    pub policy: ClaimPolicy,

    /// Maximum search frames a single query may create.
    /// Default: 1,000,000. Must be positive.
    pub max_states: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            policy: ClaimPolicy::FirstClaim,
            max_states: 1_000_000,
        }
    }
}

impl SearchConfig {
    /// Config with a specific policy and default limits.
    pub fn with_policy(policy: ClaimPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Builder: set the frame limit.
    #[must_use]
    pub fn max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    /// Validate configuration parameters.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidConfig` if `max_states == 0`.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.max_states == 0 {
            return Err(GraphError::InvalidConfig(
                "max_states must be positive (got 0)".to_string(),
            ));
        }
        Ok(())
    }
}
