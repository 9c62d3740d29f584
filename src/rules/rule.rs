//! Conditional effect rules.
//!
//! A `RuleSpec` names effects; a `Rule` is the same rule resolved against
//! an `EffectCatalog` into bitmasks.

use serde::{Deserialize, Serialize};

use crate::effects::{EffectCatalog, EffectId, EffectSet};
use crate::error::CatalogResult;

/// What a rule does once its conditions hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleAction {
    /// Set the result effect, keep everything else.
    Add,
    /// Clear the target effect, then set the result effect.
    Replace,
}

/// Declarative rule, effects referenced by name.
///
/// ## Example
///
/// ```
/// use mix_optimizer::rules::{RuleAction, RuleSpec};
///
/// // Munchies becomes Athletic, unless Athletic is already present.
/// let spec = RuleSpec::replace("Munchies", "Athletic").unless(["Athletic"]);
/// assert_eq!(spec.action, RuleAction::Replace);
/// assert_eq!(spec.present, vec!["Munchies"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Effects that must all be present.
    pub present: Vec<String>,

    /// Effects that must all be absent.
    #[serde(default)]
    pub absent: Vec<String>,

    pub action: RuleAction,

    /// Effect removed by `Replace`. Ignored by `Add`.
    #[serde(default)]
    pub target: Option<String>,

    /// Effect set by the rule.
    pub result: String,
}

impl RuleSpec {
    /// `target` present ⇒ replace it with `result`.
    #[must_use]
    pub fn replace(target: impl Into<String>, result: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            present: vec![target.clone()],
            absent: Vec::new(),
            action: RuleAction::Replace,
            target: Some(target),
            result: result.into(),
        }
    }

    /// All of `present` ⇒ add `result`.
    #[must_use]
    pub fn add<I, S>(present: I, result: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            present: present.into_iter().map(Into::into).collect(),
            absent: Vec::new(),
            action: RuleAction::Add,
            target: None,
            result: result.into(),
        }
    }

    /// Require additional present effects (builder pattern).
    #[must_use]
    pub fn also<I, S>(mut self, present: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.present.extend(present.into_iter().map(Into::into));
        self
    }

    /// Require effects to be absent (builder pattern).
    #[must_use]
    pub fn unless<I, S>(mut self, absent: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.absent.extend(absent.into_iter().map(Into::into));
        self
    }

    /// Resolve names against a catalog.
    pub fn compile(&self, catalog: &EffectCatalog) -> CatalogResult<Rule> {
        let target = match (&self.action, &self.target) {
            (RuleAction::Replace, Some(name)) => Some(catalog.id(name)?),
            _ => None,
        };

        Ok(Rule {
            present: catalog.set_of(&self.present)?,
            absent: catalog.set_of(&self.absent)?,
            action: self.action,
            target,
            result: catalog.id(&self.result)?,
        })
    }
}

/// Compiled rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub present: EffectSet,
    pub absent: EffectSet,
    pub action: RuleAction,
    /// `None` for `Add`, or a `Replace` that clears nothing.
    pub target: Option<EffectId>,
    pub result: EffectId,
}

impl Rule {
    /// True if the rule's conditions hold for `effects`.
    ///
    /// A rule whose present and absent sets overlap never matches.
    #[inline]
    #[must_use]
    pub fn matches(&self, effects: EffectSet) -> bool {
        effects.contains_all(self.present) && effects.is_disjoint(self.absent)
    }

    /// The set produced by firing the rule, ignoring any cap.
    #[inline]
    #[must_use]
    pub fn fire(&self, effects: EffectSet) -> EffectSet {
        let cleared = match (self.action, self.target) {
            (RuleAction::Replace, Some(target)) => effects.without(target),
            _ => effects,
        };
        cleared.with(self.result)
    }
}
