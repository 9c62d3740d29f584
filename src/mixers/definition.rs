//! Mixer definitions - static mixer data.
//!
//! A `MixerSpec` is the declarative form (names, loadable with serde).
//! A `Mixer` is the compiled, immutable form the engine runs. Base items
//! are mixers without rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::{EffectCatalog, EffectId};
use crate::error::{CatalogError, CatalogResult};
use crate::rules::{Rule, RuleSpec};

/// Identity of a mixer within its registry.
///
/// The transition cache keys on this, so two mixers from the same
/// registry never share an ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MixerId(pub u32);

impl MixerId {
    /// Create a new mixer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MixerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mixer({})", self.0)
    }
}

/// When the default effect is applied relative to the rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Before any rule; reaching the cap here ends the application.
    Before,
    /// After all rules, only if it fits under the cap.
    #[default]
    After,
}

/// Declarative mixer.
///
/// ## Example
///
/// ```
/// use mix_optimizer::mixers::MixerSpec;
/// use mix_optimizer::rules::RuleSpec;
///
/// let cuke = MixerSpec::new("Cuke", 2.0)
///     .with_default("Energizing")
///     .with_rule(RuleSpec::replace("Toxic", "Euphoric"));
///
/// assert_eq!(cuke.rules.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixerSpec {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub default_effect: Option<String>,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl MixerSpec {
    /// Create a mixer with no default effect and no rules.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            default_effect: None,
            placement: Placement::After,
            rules: Vec::new(),
        }
    }

    /// Create a base item: a default effect (if any) and no rules.
    #[must_use]
    pub fn base(name: impl Into<String>, default_effect: Option<&str>, price: f64) -> Self {
        Self {
            default_effect: default_effect.map(str::to_string),
            ..Self::new(name, price)
        }
    }

    /// Set the default effect, applied after the rules.
    #[must_use]
    pub fn with_default(mut self, effect: impl Into<String>) -> Self {
        self.default_effect = Some(effect.into());
        self
    }

    /// Set where the default effect is applied.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Append a rule (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: RuleSpec) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules in order.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = RuleSpec>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Validate and resolve against a catalog.
    ///
    /// Only a `MixerRegistry` assigns ids, so a transition cache never sees
    /// two mixers sharing one.
    pub(crate) fn compile(&self, id: MixerId, catalog: &EffectCatalog) -> CatalogResult<Mixer> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                mixer: self.name.clone(),
                price: self.price,
            });
        }

        let default_effect = self
            .default_effect
            .as_deref()
            .map(|name| catalog.id(name))
            .transpose()?;

        let rules = self
            .rules
            .iter()
            .map(|rule| rule.compile(catalog))
            .collect::<CatalogResult<SmallVec<[Rule; 8]>>>()?;

        Ok(Mixer {
            id,
            name: self.name.clone(),
            price: self.price,
            default_effect,
            placement: self.placement,
            rules,
        })
    }
}

/// Compiled, immutable mixer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mixer {
    pub id: MixerId,
    pub name: String,
    pub price: f64,
    pub default_effect: Option<EffectId>,
    pub placement: Placement,
    /// Rules in declaration order.
    pub rules: SmallVec<[Rule; 8]>,
}

impl Mixer {
    /// True for an item with no rules (a base item shape).
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.rules.is_empty()
    }
}
