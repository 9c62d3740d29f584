//! Effect catalog.
//!
//! The catalog fixes the set of effects for a run. Each effect gets the
//! next free bit in insertion order, so catalog order and bit order agree.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

use super::set::{EffectId, EffectSet};

/// A named effect with its price multiplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub id: EffectId,
    pub name: String,
    pub multiplier: f64,
}

/// Immutable, ordered collection of effects.
///
/// ## Example
///
/// ```
/// use mix_optimizer::effects::EffectCatalog;
///
/// let catalog = EffectCatalog::new([("Calming", 0.10), ("Energizing", 0.22)]).unwrap();
/// let set = catalog.set_of(["Calming", "Energizing"]).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert!((catalog.multiplier(set) - 0.32).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectCatalog {
    effects: Vec<Effect>,
    by_name: FxHashMap<String, EffectId>,
}

impl EffectCatalog {
    /// Build a catalog from `(name, multiplier)` pairs.
    ///
    /// Names must be unique, multipliers finite and within `[0, 1]`, and
    /// there can be at most [`EffectSet::CAPACITY`] entries.
    pub fn new<I, S>(entries: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for (name, multiplier) in entries {
            catalog.push(name.into(), multiplier)?;
        }
        Ok(catalog)
    }

    fn push(&mut self, name: String, multiplier: f64) -> CatalogResult<EffectId> {
        if self.by_name.contains_key(&name) {
            return Err(CatalogError::DuplicateEffect { name });
        }
        if !multiplier.is_finite() || !(0.0..=1.0).contains(&multiplier) {
            return Err(CatalogError::InvalidMultiplier { name, multiplier });
        }
        if self.effects.len() >= EffectSet::CAPACITY {
            return Err(CatalogError::CatalogFull {
                capacity: EffectSet::CAPACITY,
            });
        }

        let id = EffectId::new(self.effects.len() as u8);
        self.by_name.insert(name.clone(), id);
        self.effects.push(Effect {
            id,
            name,
            multiplier,
        });
        Ok(id)
    }

    /// Look up an effect by name.
    pub fn id(&self, name: &str) -> CatalogResult<EffectId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownEffect {
                name: name.to_string(),
            })
    }

    /// Build a set from effect names.
    pub fn set_of<I, S>(&self, names: I) -> CatalogResult<EffectSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.id(name.as_ref()))
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: EffectId) -> Option<&Effect> {
        self.effects.get(id.raw() as usize)
    }

    /// Sum of multipliers, accumulated lowest bit first.
    ///
    /// Bits outside the catalog contribute nothing.
    #[must_use]
    pub fn multiplier(&self, set: EffectSet) -> f64 {
        let mut total = 0.0;
        for id in set {
            if let Some(effect) = self.effects.get(id.raw() as usize) {
                total += effect.multiplier;
            }
        }
        total
    }

    /// Effect names in catalog order.
    #[must_use]
    pub fn names(&self, set: EffectSet) -> Vec<String> {
        set.iter()
            .filter_map(|id| self.get(id))
            .map(|e| e.name.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over effects in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }
}
