//! Reference mixer and base item tables.
//!
//! Each rule row is `(present, absent, action, result)`. Rows run in the
//! order written; several mixers rely on that order.

use crate::mixers::MixerSpec;
use crate::rules::{RuleAction, RuleSpec};

/// A rule as static data.
#[derive(Clone, Copy, Debug)]
pub struct RuleRow {
    pub present: &'static [&'static str],
    pub absent: &'static [&'static str],
    pub action: RuleAction,
    pub target: Option<&'static str>,
    pub result: &'static str,
}

const fn replace(
    present: &'static [&'static str],
    absent: &'static [&'static str],
    target: &'static str,
    result: &'static str,
) -> RuleRow {
    RuleRow {
        present,
        absent,
        action: RuleAction::Replace,
        target: Some(target),
        result,
    }
}

const fn add(present: &'static [&'static str], absent: &'static [&'static str], result: &'static str) -> RuleRow {
    RuleRow {
        present,
        absent,
        action: RuleAction::Add,
        target: None,
        result,
    }
}

impl RuleRow {
    #[must_use]
    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec {
            present: self.present.iter().map(|s| s.to_string()).collect(),
            absent: self.absent.iter().map(|s| s.to_string()).collect(),
            action: self.action,
            target: self.target.map(str::to_string),
            result: self.result.to_string(),
        }
    }
}

/// A mixer or base item as static data. Default effects apply after rules.
#[derive(Clone, Copy, Debug)]
pub struct MixerRow {
    pub name: &'static str,
    pub price: f64,
    pub default_effect: Option<&'static str>,
    pub rules: &'static [RuleRow],
}

impl MixerRow {
    const fn new(name: &'static str, price: f64, default_effect: &'static str, rules: &'static [RuleRow]) -> Self {
        Self {
            name,
            price,
            default_effect: Some(default_effect),
            rules,
        }
    }

    const fn base(name: &'static str, default_effect: Option<&'static str>, price: f64) -> Self {
        Self {
            name,
            price,
            default_effect,
            rules: &[],
        }
    }

    #[must_use]
    pub fn to_spec(&self) -> MixerSpec {
        let spec = MixerSpec::new(self.name, self.price).with_rules(self.rules.iter().map(RuleRow::to_spec));
        match self.default_effect {
            Some(effect) => spec.with_default(effect),
            None => spec,
        }
    }
}

/// Base items. Meth and Cocaine start without an effect.
pub const BASE_ITEMS: &[MixerRow] = &[
    MixerRow::base("OG Kush", Some("Calming"), 35.0),
    MixerRow::base("Sour Diesel", Some("Refreshing"), 35.0),
    MixerRow::base("Green Crack", Some("Energizing"), 35.0),
    MixerRow::base("Grandaddy purple", Some("Sedating"), 35.0),
    MixerRow::base("Meth", None, 70.0),
    MixerRow::base("Cocaine", None, 150.0),
];

/// Supplemental mixers in unlock-table order.
pub const MIXERS: &[MixerRow] = &[
    MixerRow::new("Cuke", 2.0, "Energizing", CUKE),
    MixerRow::new("Flu Medicine", 2.0, "Sedating", FLU_MEDICINE),
    MixerRow::new("Gasoline", 5.0, "Toxic", GASOLINE),
    MixerRow::new("Donut", 2.0, "Calorie-Dense", DONUT),
    MixerRow::new("Energy Drink", 6.0, "Athletic", ENERGY_DRINK),
    MixerRow::new("Mouth Wash", 4.0, "Balding", MOUTH_WASH),
    MixerRow::new("Motor Oil", 4.0, "Slippery", MOTOR_OIL),
    MixerRow::new("Banana", 4.0, "Gingeritis", BANANA),
    MixerRow::new("Chili", 7.0, "Spicy", CHILI),
    MixerRow::new("Iodine", 6.0, "Jennerising", IODINE),
    MixerRow::new("Paracetamol", 6.0, "Sneaky", PARACETAMOL),
    MixerRow::new("Viagra", 6.0, "Tropic Thunder", VIAGRA),
    MixerRow::new("Horse Semen", 8.0, "Long Faced", HORSE_SEMEN),
    MixerRow::new("Mega Bean", 7.0, "Foggy", MEGA_BEAN),
    MixerRow::new("Addy", 9.0, "Thought-Provoking", ADDY),
    MixerRow::new("Battery", 8.0, "Bright-Eyed", BATTERY),
];

const CUKE: &[RuleRow] = &[
    replace(&["Munchies"], &["Athletic"], "Munchies", "Athletic"),
    replace(&["Slippery"], &["Munchies"], "Slippery", "Munchies"),
    replace(&["Slippery"], &[], "Slippery", "Athletic"),
    replace(&["Euphoric"], &[], "Euphoric", "Laxative"),
    replace(&["Toxic"], &[], "Toxic", "Euphoric"),
    replace(&["Sneaky"], &[], "Sneaky", "Paranoia"),
    replace(&["Foggy"], &[], "Foggy", "Cyclopean"),
    replace(&["Gingeritis"], &[], "Gingeritis", "Thought-Provoking"),
];

const FLU_MEDICINE: &[RuleRow] = &[
    replace(&["Calming"], &[], "Calming", "Bright-Eyed"),
    replace(&["Athletic"], &[], "Athletic", "Munchies"),
    replace(&["Thought-Provoking"], &[], "Thought-Provoking", "Gingeritis"),
    replace(&["Cyclopean"], &[], "Cyclopean", "Foggy"),
    replace(&["Munchies"], &[], "Munchies", "Slippery"),
    replace(&["Laxative"], &[], "Laxative", "Euphoric"),
    replace(&["Euphoric"], &[], "Euphoric", "Toxic"),
    replace(&["Focused"], &[], "Focused", "Calming"),
    replace(&["Electrifying"], &[], "Electrifying", "Refreshing"),
    replace(&["Shrinking"], &[], "Shrinking", "Paranoia"),
];

const GASOLINE: &[RuleRow] = &[
    replace(&["Euphoric"], &["Energizing"], "Euphoric", "Spicy"),
    replace(&["Energizing"], &[], "Energizing", "Euphoric"),
    replace(&["Gingeritis"], &[], "Gingeritis", "Smelly"),
    replace(&["Jennerising"], &[], "Jennerising", "Sneaky"),
    replace(&["Sneaky"], &[], "Sneaky", "Tropic Thunder"),
    replace(&["Munchies"], &[], "Munchies", "Sedating"),
    replace(&["Laxative"], &[], "Laxative", "Foggy"),
    replace(&["Disorienting"], &[], "Disorienting", "Glowing"),
    replace(&["Paranoia"], &[], "Paranoia", "Calming"),
    replace(&["Electrifying"], &[], "Electrifying", "Disorienting"),
    replace(&["Shrinking"], &[], "Shrinking", "Focused"),
];

const DONUT: &[RuleRow] = &[
    add(&["Calorie-Dense"], &["Explosive"], "Explosive"),
    replace(&["Balding"], &[], "Balding", "Sneaky"),
    replace(&["Anti-Gravity"], &[], "Anti-Gravity", "Slippery"),
    replace(&["Jennerising"], &[], "Jennerising", "Gingeritis"),
    replace(&["Focused"], &[], "Focused", "Euphoric"),
    replace(&["Shrinking"], &[], "Shrinking", "Energizing"),
];

const ENERGY_DRINK: &[RuleRow] = &[
    replace(&["Sedating"], &[], "Sedating", "Munchies"),
    replace(&["Euphoric"], &[], "Euphoric", "Energizing"),
    replace(&["Spicy"], &[], "Spicy", "Euphoric"),
    replace(&["Tropic Thunder"], &[], "Tropic Thunder", "Sneaky"),
    replace(&["Glowing"], &[], "Glowing", "Disorienting"),
    replace(&["Foggy"], &[], "Foggy", "Laxative"),
    replace(&["Disorienting"], &[], "Disorienting", "Electrifying"),
    replace(&["Schizophrenia"], &[], "Schizophrenia", "Balding"),
    replace(&["Focused"], &[], "Focused", "Shrinking"),
];

const MOUTH_WASH: &[RuleRow] = &[
    replace(&["Calming"], &[], "Calming", "Anti-Gravity"),
    replace(&["Calorie-Dense"], &[], "Calorie-Dense", "Sneaky"),
    replace(&["Explosive"], &[], "Explosive", "Sedating"),
    replace(&["Focused"], &[], "Focused", "Jennerising"),
];

const MOTOR_OIL: &[RuleRow] = &[
    replace(&["Energizing"], &[], "Energizing", "Munchies"),
    replace(&["Foggy"], &[], "Foggy", "Toxic"),
    replace(&["Energizing"], &[], "Energizing", "Schizophrenia"),
    replace(&["Euphoric"], &[], "Euphoric", "Sedating"),
    replace(&["Paranoia"], &[], "Paranoia", "Anti-Gravity"),
    replace(&["Munchies"], &["Energizing"], "Munchies", "Schizophrenia"),
];

const BANANA: &[RuleRow] = &[
    replace(&["Energizing"], &["Cyclopean"], "Energizing", "Thought-Provoking"),
    replace(&["Smelly"], &["Anti-Gravity"], "Smelly", "Anti-Gravity"),
    replace(&["Calming"], &[], "Calming", "Sneaky"),
    replace(&["Toxic"], &[], "Toxic", "Smelly"),
    replace(&["Long Faced"], &[], "Long Faced", "Refreshing"),
    replace(&["Cyclopean"], &[], "Cyclopean", "Thought-Provoking"),
    replace(&["Disorienting"], &[], "Disorienting", "Focused"),
    replace(&["Focused"], &[], "Focused", "Seizure-Inducing"),
];

const CHILI: &[RuleRow] = &[
    replace(&["Athletic"], &[], "Athletic", "Euphoric"),
    replace(&["Anti-Gravity"], &[], "Anti-Gravity", "Tropic Thunder"),
    replace(&["Sneaky"], &[], "Sneaky", "Bright-Eyed"),
    replace(&["Munchies"], &[], "Munchies", "Toxic"),
    replace(&["Laxative"], &[], "Laxative", "Long Faced"),
    replace(&["Shrinking"], &[], "Shrinking", "Refreshing"),
];

const IODINE: &[RuleRow] = &[
    replace(&["Calming"], &[], "Calming", "Balding"),
    replace(&["Toxic"], &[], "Toxic", "Sneaky"),
    replace(&["Foggy"], &[], "Foggy", "Paranoia"),
    replace(&["Calorie-Dense"], &[], "Calorie-Dense", "Gingeritis"),
    replace(&["Euphoric"], &[], "Euphoric", "Seizure-Inducing"),
    replace(&["Refreshing"], &[], "Refreshing", "Thought-Provoking"),
];

const PARACETAMOL: &[RuleRow] = &[
    replace(&["Munchies"], &[], "Munchies", "Anti-Gravity"),
    replace(&["Calming"], &[], "Calming", "Slippery"),
    replace(&["Toxic"], &[], "Toxic", "Tropic Thunder"),
    replace(&["Spicy"], &[], "Spicy", "Bright-Eyed"),
    replace(&["Glowing"], &[], "Glowing", "Toxic"),
    replace(&["Foggy"], &[], "Foggy", "Calming"),
    replace(&["Munchies"], &[], "Munchies", "Anti-Gravity"),
    replace(&["Energizing", "Paranoia"], &[], "Energizing", "Balding"),
    replace(&["Electrifying"], &[], "Electrifying", "Athletic"),
    replace(&["Energizing"], &["Munchies"], "Energizing", "Paranoia"),
];

const VIAGRA: &[RuleRow] = &[
    replace(&["Athletic"], &[], "Athletic", "Sneaky"),
    replace(&["Euphoric"], &[], "Euphoric", "Bright-Eyed"),
    replace(&["Laxative"], &[], "Laxative", "Calming"),
    replace(&["Disorienting"], &[], "Disorienting", "Toxic"),
];

const HORSE_SEMEN: &[RuleRow] = &[
    replace(&["Anti-Gravity"], &[], "Anti-Gravity", "Calming"),
    replace(&["Gingeritis"], &[], "Gingeritis", "Refreshing"),
    replace(&["Thought-Provoking"], &["Seizure-Inducing"], "Thought-Provoking", "Electrifying"),
];

const MEGA_BEAN: &[RuleRow] = &[
    replace(&["Energizing"], &["Thought-Provoking"], "Energizing", "Cyclopean"),
    replace(&["Calming"], &[], "Calming", "Glowing"),
    replace(&["Sneaky"], &[], "Sneaky", "Calming"),
    replace(&["Jennerising"], &[], "Jennerising", "Paranoia"),
    replace(&["Slippery"], &[], "Slippery", "Toxic"),
    replace(&["Thought-Provoking"], &[], "Thought-Provoking", "Energizing"),
    replace(&["Seizure-Inducing"], &[], "Seizure-Inducing", "Focused"),
    replace(&["Focused"], &[], "Focused", "Disorienting"),
    replace(&["Sneaky"], &[], "Sneaky", "Glowing"),
    replace(&["Thought-Provoking"], &[], "Thought-Provoking", "Cyclopean"),
    replace(&["Shrinking"], &[], "Shrinking", "Electrifying"),
    replace(&["Athletic"], &[], "Athletic", "Laxative"),
];

const ADDY: &[RuleRow] = &[
    replace(&["Sedating"], &[], "Sedating", "Gingeritis"),
    replace(&["Long Faced"], &[], "Long Faced", "Electrifying"),
    replace(&["Glowing"], &[], "Glowing", "Refreshing"),
    replace(&["Foggy"], &[], "Foggy", "Energizing"),
    replace(&["Explosive"], &[], "Explosive", "Euphoric"),
];

const BATTERY: &[RuleRow] = &[
    replace(&["Munchies"], &[], "Munchies", "Tropic Thunder"),
    replace(&["Euphoric"], &["Electrifying"], "Euphoric", "Zombifying"),
    replace(&["Electrifying"], &["Zombifying"], "Electrifying", "Euphoric"),
    replace(&["Laxative"], &[], "Laxative", "Calorie-Dense"),
    replace(&["Electrifying"], &[], "Electrifying", "Euphoric"),
    replace(&["Shrinking"], &[], "Shrinking", "Munchies"),
    replace(&["Cyclopean"], &["Glowing"], "Cyclopean", "Glowing"),
];
