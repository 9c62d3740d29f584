//! Reference game data.
//!
//! The effect table, the sixteen supplemental mixers and the six base
//! items of the reference game, kept as static declarative records and
//! turned into a `MixerRegistry` on demand.

pub mod effects;
pub mod mixers;

pub use effects::EFFECTS;
pub use mixers::{MixerRow, RuleRow, BASE_ITEMS, MIXERS};

use crate::effects::EffectCatalog;
use crate::error::CatalogResult;
use crate::mixers::MixerRegistry;

/// The reference effect catalog.
pub fn reference_catalog() -> CatalogResult<EffectCatalog> {
    EffectCatalog::new(EFFECTS.iter().copied())
}

/// Registry holding the base items first, then the supplemental mixers.
pub fn reference_registry() -> CatalogResult<MixerRegistry> {
    let mut registry = MixerRegistry::new(reference_catalog()?);
    registry.register_all(BASE_ITEMS.iter().map(MixerRow::to_spec))?;
    registry.register_all(MIXERS.iter().map(MixerRow::to_spec))?;
    Ok(registry)
}
