//! Effect transition engine.
//!
//! `apply` is the single transition function of the system: given a mixer
//! and the current effects it returns the effects after mixing. It is pure
//! and total, and every set it returns is within `cap`.

use crate::effects::EffectSet;
use crate::mixers::{Mixer, Placement};

/// Default maximum number of effects an item can carry.
pub const DEFAULT_EFFECT_CAP: u32 = 8;

/// Apply `mixer` to `effects`.
///
/// 1. A `Before` default effect is set first; reaching `cap` there ends
///    the application.
/// 2. Rules run in declaration order against the working set. A firing
///    rule is kept only if the result stays within `cap`; a rejected rule
///    is not retried.
/// 3. An `After` default effect is set if it fits within `cap`.
#[must_use]
pub fn apply(mixer: &Mixer, effects: EffectSet, cap: u32) -> EffectSet {
    let mut working = effects;

    if let (Some(effect), Placement::Before) = (mixer.default_effect, mixer.placement) {
        // An input already at the cap stays unchanged rather than overflowing.
        let candidate = working.with(effect);
        if candidate.len() <= cap {
            working = candidate;
        }
        if working.len() >= cap {
            return working;
        }
    }

    for rule in &mixer.rules {
        if !rule.matches(working) {
            continue;
        }
        let candidate = rule.fire(working);
        if candidate.len() <= cap {
            working = candidate;
        }
    }

    if let (Some(effect), Placement::After) = (mixer.default_effect, mixer.placement) {
        let candidate = working.with(effect);
        if candidate.len() <= cap {
            working = candidate;
        }
    }

    working
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectCatalog;
    use crate::mixers::{MixerId, MixerSpec};
    use crate::rules::RuleSpec;

    fn catalog() -> EffectCatalog {
        EffectCatalog::new([
            ("A", 0.10),
            ("B", 0.20),
            ("C", 0.30),
            ("D", 0.40),
            ("E", 0.50),
        ])
        .unwrap()
    }

    fn build(spec: MixerSpec, catalog: &EffectCatalog) -> Mixer {
        spec.compile(MixerId::new(0), catalog).unwrap()
    }

    #[test]
    fn test_default_after_added() {
        let catalog = catalog();
        let mixer = build(MixerSpec::new("m", 1.0).with_default("A"), &catalog);

        let out = apply(&mixer, EffectSet::EMPTY, DEFAULT_EFFECT_CAP);
        assert_eq!(out, catalog.set_of(["A"]).unwrap());
    }

    #[test]
    fn test_rules_see_earlier_results() {
        let catalog = catalog();
        // A -> B, then B -> C: a single application chains both.
        let mixer = build(
            MixerSpec::new("m", 1.0)
                .with_rule(RuleSpec::replace("A", "B"))
                .with_rule(RuleSpec::replace("B", "C")),
            &catalog,
        );

        let out = apply(&mixer, catalog.set_of(["A"]).unwrap(), DEFAULT_EFFECT_CAP);
        assert_eq!(out, catalog.set_of(["C"]).unwrap());
    }

    #[test]
    fn test_declaration_order_matters() {
        let catalog = catalog();
        // B -> C declared first does not see the B produced by A -> B.
        let mixer = build(
            MixerSpec::new("m", 1.0)
                .with_rule(RuleSpec::replace("B", "C"))
                .with_rule(RuleSpec::replace("A", "B")),
            &catalog,
        );

        let out = apply(&mixer, catalog.set_of(["A"]).unwrap(), DEFAULT_EFFECT_CAP);
        assert_eq!(out, catalog.set_of(["B"]).unwrap());
    }

    #[test]
    fn test_absent_condition_blocks() {
        let catalog = catalog();
        let mixer = build(
            MixerSpec::new("m", 1.0).with_rule(RuleSpec::replace("A", "B").unless(["C"])),
            &catalog,
        );

        let blocked = catalog.set_of(["A", "C"]).unwrap();
        assert_eq!(apply(&mixer, blocked, DEFAULT_EFFECT_CAP), blocked);

        let open = catalog.set_of(["A"]).unwrap();
        assert_eq!(apply(&mixer, open, DEFAULT_EFFECT_CAP), catalog.set_of(["B"]).unwrap());
    }

    #[test]
    fn test_add_over_cap_is_skipped() {
        let catalog = catalog();
        let mixer = build(
            MixerSpec::new("m", 1.0)
                .with_rule(RuleSpec::add(["A"], "C"))
                .with_rule(RuleSpec::replace("B", "D")),
            &catalog,
        );

        // Cap 2: adding C would make 3, so it is skipped; the replace still fits.
        let start = catalog.set_of(["A", "B"]).unwrap();
        let out = apply(&mixer, start, 2);
        assert_eq!(out, catalog.set_of(["A", "D"]).unwrap());
    }

    #[test]
    fn test_default_after_respects_cap() {
        let catalog = catalog();
        let mixer = build(MixerSpec::new("m", 1.0).with_default("E"), &catalog);

        let full = catalog.set_of(["A", "B"]).unwrap();
        assert_eq!(apply(&mixer, full, 2), full);
    }

    #[test]
    fn test_default_before_reaching_cap_stops() {
        let catalog = catalog();
        let mixer = build(
            MixerSpec::new("m", 1.0)
                .with_default("C")
                .with_placement(Placement::Before)
                .with_rule(RuleSpec::replace("A", "D")),
            &catalog,
        );

        // {A, B} + C reaches cap 3, so the A -> D rule never runs.
        let out = apply(&mixer, catalog.set_of(["A", "B"]).unwrap(), 3);
        assert_eq!(out, catalog.set_of(["A", "B", "C"]).unwrap());

        // Below the cap the rule runs and sees C already present.
        let out = apply(&mixer, catalog.set_of(["A"]).unwrap(), 3);
        assert_eq!(out, catalog.set_of(["C", "D"]).unwrap());
    }

    #[test]
    fn test_default_before_on_full_set() {
        let catalog = catalog();
        let mixer = build(
            MixerSpec::new("m", 1.0)
                .with_default("E")
                .with_placement(Placement::Before),
            &catalog,
        );

        let full = catalog.set_of(["A", "B"]).unwrap();
        assert_eq!(apply(&mixer, full, 2), full);
    }

    #[test]
    fn test_rule_requiring_missing_effect_is_noop() {
        let catalog = catalog();
        let mixer = build(
            MixerSpec::new("m", 1.0).with_rule(RuleSpec::replace("E", "A")),
            &catalog,
        );

        let start = catalog.set_of(["B", "C"]).unwrap();
        assert_eq!(apply(&mixer, start, DEFAULT_EFFECT_CAP), start);
        assert_eq!(apply(&mixer, EffectSet::EMPTY, DEFAULT_EFFECT_CAP), EffectSet::EMPTY);
    }
}
