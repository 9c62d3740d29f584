//! Frontier states.

use crate::effects::EffectSet;

/// One partial sequence on the search frontier.
///
/// `path` holds indices into the allowed-mixer slice, base item excluded.
/// It is a persistent vector, so a successor shares its parent's prefix
/// instead of copying it.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub effects: EffectSet,
    pub path: im::Vector<usize>,
    /// Sum of supplemental mixer prices.
    pub cost: f64,
    /// `base price * multiplier(effects) - cost`.
    pub net: f64,
    /// Strictly decreasing steps along the path.
    pub drops: u32,
    /// Index of the last supplemental mixer, `None` at the root.
    pub last: Option<usize>,
}

/// Dominance key: states agreeing on all three have identical futures.
pub(crate) type DominanceKey = (EffectSet, Option<usize>, u32);

impl SearchState {
    /// The base item alone.
    #[must_use]
    pub fn root(effects: EffectSet, net: f64) -> Self {
        Self {
            effects,
            path: im::Vector::new(),
            cost: 0.0,
            net,
            drops: 0,
            last: None,
        }
    }

    /// Sequence length including the base item.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len() + 1
    }

    /// Always false: a state holds at least the base item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub(crate) fn key(&self) -> DominanceKey {
        (self.effects, self.last, self.drops)
    }

    /// The state after applying allowed mixer `index`.
    #[must_use]
    pub fn successor(&self, index: usize, effects: EffectSet, cost: f64, net: f64, drops: u32) -> Self {
        let mut path = self.path.clone();
        path.push_back(index);
        Self {
            effects,
            path,
            cost,
            net,
            drops,
            last: Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectId;

    #[test]
    fn test_root() {
        let root = SearchState::root(EffectId::new(2).bit(), 3.5);
        assert_eq!(root.len(), 1);
        assert_eq!(root.last, None);
        assert_eq!(root.key(), (EffectId::new(2).bit(), None, 0));
    }

    #[test]
    fn test_successor_shares_prefix() {
        let root = SearchState::root(EffectSet::EMPTY, 0.0);
        let a = root.successor(0, EffectId::new(1).bit(), 2.0, 5.0, 0);
        let b = a.successor(1, EffectId::new(3).bit(), 6.0, 1.0, 1);

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
        assert_eq!(b.path.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(b.last, Some(1));
        assert_eq!(b.drops, 1);
        // Parent is untouched.
        assert_eq!(a.path.len(), 1);
    }
}
