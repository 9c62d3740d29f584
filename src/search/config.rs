//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::rules::DEFAULT_EFFECT_CAP;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum sequence length, counting the base item (default: 9).
    pub max_length: usize,

    /// Maximum effects on any explored state (default: 8).
    /// States at this count are not expanded further.
    pub max_effects: u32,

    /// Strictly decreasing multiplier steps tolerated per path (default: 2).
    pub max_quality_drops: u32,

    /// Cap used by the rule engine for every transition (default: 8).
    pub effect_cap: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_length: 9,
            max_effects: 8,
            max_quality_drops: 2,
            effect_cap: DEFAULT_EFFECT_CAP,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom max length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Create a new config with custom max effects.
    pub fn with_max_effects(mut self, max_effects: u32) -> Self {
        self.max_effects = max_effects;
        self
    }

    /// Create a new config with custom regression tolerance.
    pub fn with_max_quality_drops(mut self, drops: u32) -> Self {
        self.max_quality_drops = drops;
        self
    }

    /// Create a new config with custom rule engine cap.
    pub fn with_effect_cap(mut self, cap: u32) -> Self {
        self.effect_cap = cap;
        self
    }
}
