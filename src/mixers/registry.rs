//! Mixer registry.
//!
//! The `MixerRegistry` owns the effect catalog and every mixer compiled
//! against it. IDs are assigned in registration order, which keeps them
//! unique for the transition cache.

use rustc_hash::FxHashMap;

use crate::effects::EffectCatalog;
use crate::error::{CatalogError, CatalogResult};

use super::definition::{Mixer, MixerId, MixerSpec};

/// Registry of mixers and base items.
///
/// ## Example
///
/// ```
/// use mix_optimizer::effects::EffectCatalog;
/// use mix_optimizer::mixers::{MixerRegistry, MixerSpec};
///
/// let catalog = EffectCatalog::new([("Calming", 0.10), ("Energizing", 0.22)]).unwrap();
/// let mut registry = MixerRegistry::new(catalog);
///
/// let id = registry.register(MixerSpec::new("Cuke", 2.0).with_default("Energizing")).unwrap();
///
/// assert_eq!(registry.get(id).unwrap().name, "Cuke");
/// assert_eq!(registry.by_name("Cuke").unwrap().id, id);
/// ```
#[derive(Clone, Debug)]
pub struct MixerRegistry {
    catalog: EffectCatalog,
    mixers: Vec<Mixer>,
    by_name: FxHashMap<String, MixerId>,
}

impl MixerRegistry {
    /// Create an empty registry over a catalog.
    #[must_use]
    pub fn new(catalog: EffectCatalog) -> Self {
        Self {
            catalog,
            mixers: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Compile and register a mixer.
    ///
    /// Fails on duplicate names, unknown effects or invalid prices. Nothing
    /// is registered on failure.
    pub fn register(&mut self, spec: MixerSpec) -> CatalogResult<MixerId> {
        if self.by_name.contains_key(&spec.name) {
            return Err(CatalogError::DuplicateMixer { name: spec.name });
        }

        let id = MixerId::new(self.mixers.len() as u32);
        let mixer = spec.compile(id, &self.catalog)?;

        tracing::debug!(
            mixer = %mixer.name,
            %id,
            rules = mixer.rules.len(),
            price = mixer.price,
            "registered mixer"
        );

        self.by_name.insert(mixer.name.clone(), id);
        self.mixers.push(mixer);
        Ok(id)
    }

    /// Register several mixers in order, returning their IDs.
    pub fn register_all(
        &mut self,
        specs: impl IntoIterator<Item = MixerSpec>,
    ) -> CatalogResult<Vec<MixerId>> {
        specs.into_iter().map(|spec| self.register(spec)).collect()
    }

    #[must_use]
    pub fn catalog(&self) -> &EffectCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn get(&self, id: MixerId) -> Option<&Mixer> {
        self.mixers.get(id.raw() as usize)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Mixer> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    /// Look up several mixers by name, skipping unknown names.
    pub fn select<'a, I, S>(&'a self, names: I) -> Vec<&'a Mixer>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.by_name(name.as_ref()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mixers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mixers.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Mixer> {
        self.mixers.iter()
    }
}
