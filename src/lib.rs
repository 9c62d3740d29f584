//! # mix-optimizer
//!
//! Finds the most profitable sequences of mixers to apply to a base item.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Rules**: Mixers are ordered lists of conditional
//!    replace/add rules plus a default effect. Nothing about a specific
//!    game is hardcoded outside the `data` module.
//!
//! 2. **Bitmask State**: An item's effects are a `u64` bitmask, so
//!    transitions, dominance keys and cache keys are all cheap to copy
//!    and hash.
//!
//! 3. **Deterministic Search**: The same inputs always give the same
//!    result, down to the bit.
//!
//! ## Architecture
//!
//! - **Rule engine**: `rules::apply` is the pure transition function;
//!   `TransitionCache` memoizes it per `(effects, mixer)`.
//!
//! - **Branch-and-bound**: FIFO frontier with immediate-repeat, effect-cap,
//!   quality-regression, dominance and optimistic-bound pruning.
//!
//! - **Persistent paths**: Search paths use `im` vectors so successors
//!   share their parent's prefix.
//!
//! ## Modules
//!
//! - `effects`: Effect catalog and effect sets
//! - `rules`: Rules, transition function, transition cache
//! - `mixers`: Mixer definitions and registry
//! - `search`: Branch-and-bound search, configuration, results
//! - `data`: Reference effects, mixers and base items
//! - `error`: Construction-time errors

pub mod data;
pub mod effects;
pub mod error;
pub mod mixers;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::effects::{Effect, EffectCatalog, EffectId, EffectSet};

pub use crate::error::{CatalogError, CatalogResult};

pub use crate::mixers::{Mixer, MixerId, MixerRegistry, MixerSpec, Placement};

pub use crate::rules::{apply, Rule, RuleAction, RuleSpec, TransitionCache, DEFAULT_EFFECT_CAP};

pub use crate::search::{
    search, Candidate, MixSearch, SearchConfig, SearchResult, SearchState, SearchStats,
};

pub use crate::data::reference_registry;
