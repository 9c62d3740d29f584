//! Search output records.
//!
//! These are the only types handed to persistence and display code, so
//! they carry names rather than IDs or bitmasks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stats::SearchStats;

/// Snapshot of one explored sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Base item first, then supplemental mixers in application order.
    pub sequence: Vec<String>,

    /// Active effects in catalog order.
    pub effects: Vec<String>,

    /// Sum of effect multipliers.
    pub total_multiplier: f64,

    /// Sum of supplemental mixer prices.
    pub cost: f64,

    /// `base price * total_multiplier - cost`.
    pub net_benefit: f64,

    /// `ceil(base price * (1 + total_multiplier))`.
    pub expected_total_value: i64,
}

impl Candidate {
    /// Sequence length including the base item.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// `ceil(base_price * (1 + multiplier))`.
#[must_use]
pub fn expected_total_value(base_price: f64, multiplier: f64) -> i64 {
    (base_price * (1.0 + multiplier)).ceil() as i64
}

/// Outcome of one search run.
///
/// Equality compares candidates only; `stats` is diagnostic and varies
/// with timing and cache warmth.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// Highest expected total value, cheapest on ties.
    pub best_value: Candidate,

    /// Highest net benefit.
    pub best_net: Candidate,

    /// Best net benefit per sequence length.
    pub by_length: BTreeMap<usize, Candidate>,

    pub stats: SearchStats,
}

impl SearchResult {
    /// Best candidate of a given length, if that length was reached.
    #[must_use]
    pub fn best_of_length(&self, length: usize) -> Option<&Candidate> {
        self.by_length.get(&length)
    }

    /// Longest sequence length with a recorded candidate.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.by_length.keys().next_back().copied().unwrap_or(0)
    }
}

impl PartialEq for SearchResult {
    fn eq(&self, other: &Self) -> bool {
        self.best_value == other.best_value
            && self.best_net == other.best_net
            && self.by_length == other.by_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(sequence: &[&str], net: f64) -> Candidate {
        Candidate {
            sequence: sequence.iter().map(|s| s.to_string()).collect(),
            effects: vec!["Calming".into()],
            total_multiplier: 0.1,
            cost: 0.0,
            net_benefit: net,
            expected_total_value: 39,
        }
    }

    #[test]
    fn test_expected_total_value() {
        assert_eq!(expected_total_value(35.0, 0.20), 42);
        assert_eq!(expected_total_value(35.0, 0.10), 39);
        assert_eq!(expected_total_value(35.0, 0.0), 35);
    }

    #[test]
    fn test_equality_ignores_stats() {
        let base = candidate(&["OG Kush"], 3.5);
        let mut by_length = BTreeMap::new();
        by_length.insert(1, base.clone());

        let a = SearchResult {
            best_value: base.clone(),
            best_net: base.clone(),
            by_length: by_length.clone(),
            stats: SearchStats::default(),
        };
        let mut b = a.clone();
        b.stats.time_us = 1234;

        assert_eq!(a, b);
        assert_eq!(a.max_length(), 1);
        assert_eq!(a.best_of_length(1).map(Candidate::len), Some(1));
    }

    #[test]
    fn test_json_length_keys() {
        let base = candidate(&["OG Kush"], 3.5);
        let mut by_length = BTreeMap::new();
        by_length.insert(1, base.clone());
        let result = SearchResult {
            best_value: base.clone(),
            best_net: base,
            by_length,
            stats: SearchStats::default(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["by_length"]["1"]["sequence"][0], "OG Kush");

        let text = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }
}
