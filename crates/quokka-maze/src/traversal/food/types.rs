//! Food search parameters.

use crate::config::{ClaimPolicy, SearchConfig};

/// Parameters for a food-constrained route search.
///
/// `max_gap` is the hop budget `k`: walking the route from the start, no
/// more than `max_gap` edges may separate consecutive food stops (the start
/// and the target count as stops). `extra_food` is the number `x` of
/// additional food stops the search may place along the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodParams {
    /// Maximum hops between food stops (default: 1).
    pub max_gap: usize,

    /// Extra food stops the search may place (default: 0).
    pub extra_food: usize,

    /// Claim policy (default: `FirstClaim`).
    pub policy: ClaimPolicy,

    /// Maximum frames created by one query (default: 1,000,000).
    pub max_states: usize,
}

impl Default for FoodParams {
    fn default() -> Self {
        let config = SearchConfig::default();
        Self {
            max_gap: 1,
            extra_food: 0,
            policy: config.policy,
            max_states: config.max_states,
        }
    }
}

impl FoodParams {
    /// Params with a specific hop budget.
    #[must_use]
    pub fn with_gap(max_gap: usize) -> Self {
        Self {
            max_gap,
            ..Default::default()
        }
    }

    /// Params taking policy and limits from a config.
    #[must_use]
    pub fn from_config(config: &SearchConfig, max_gap: usize) -> Self {
        Self {
            max_gap,
            extra_food: 0,
            policy: config.policy,
            max_states: config.max_states,
        }
    }

    /// Builder: set hop budget.
    #[must_use]
    pub fn max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Builder: set extra food budget.
    #[must_use]
    pub fn extra_food(mut self, extra_food: usize) -> Self {
        self.extra_food = extra_food;
        self
    }

    /// Builder: set claim policy.
    #[must_use]
    pub fn policy(mut self, policy: ClaimPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder: set frame limit.
    #[must_use]
    pub fn max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }
}
