//! Effects and effect sets.
//!
//! An `EffectCatalog` assigns every named effect a bit position and a
//! price multiplier. `EffectSet` is the bitmask that the rule engine and
//! the search operate on.

pub mod catalog;
pub mod set;

pub use catalog::{Effect, EffectCatalog};
pub use set::{EffectId, EffectSet, EffectSetIter};
