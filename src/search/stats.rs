//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search run.
///
/// Purely diagnostic; nothing here feeds back into the search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States taken off the frontier (one candidate each).
    pub states_popped: u64,

    /// Successors pushed onto the frontier.
    pub states_added: u64,

    /// Popped states not expanded: sequence at max length.
    pub stopped_length: u64,

    /// Popped states not expanded: effect count at max effects.
    pub stopped_effects: u64,

    /// Popped states not expanded: optimistic bound below the best net.
    pub pruned_bound: u64,

    /// Successors skipped for repeating the previous mixer.
    pub pruned_repeat: u64,

    /// Successors over the effect limit.
    pub pruned_effects: u64,

    /// Successors exceeding the quality-drop tolerance.
    pub pruned_regression: u64,

    /// Successors dominated by an equal-or-cheaper state.
    pub pruned_dominated: u64,

    /// Transition cache hits during this run.
    pub cache_hits: u64,

    /// Transition cache misses during this run.
    pub cache_misses: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Successors discarded by any rule.
    #[must_use]
    pub fn successors_pruned(&self) -> u64 {
        self.pruned_repeat + self.pruned_effects + self.pruned_regression + self.pruned_dominated
    }

    /// Fraction of transitions served from the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    /// Calculate states popped per second.
    #[must_use]
    pub fn states_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.states_popped as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
