//! Fixed-width effect sets.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Bit position of an effect in its catalog.
///
/// Always below [`EffectSet::CAPACITY`]. IDs are minted by the catalog, or
/// checked through `TryFrom<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EffectId(u8);

impl EffectId {
    /// Create an effect ID. `id` must be below [`EffectSet::CAPACITY`].
    #[must_use]
    pub(crate) const fn new(id: u8) -> Self {
        debug_assert!((id as usize) < EffectSet::CAPACITY);
        Self(id)
    }

    /// Get the raw bit position.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Single-element set containing this effect.
    #[must_use]
    pub const fn bit(self) -> EffectSet {
        match 1u64.checked_shl(self.0 as u32) {
            Some(mask) => EffectSet(mask),
            None => EffectSet::EMPTY,
        }
    }
}

impl TryFrom<u8> for EffectId {
    type Error = CatalogError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < EffectSet::CAPACITY {
            Ok(Self(id))
        } else {
            Err(CatalogError::EffectOutOfRange { id })
        }
    }
}

impl From<EffectId> for u8 {
    fn from(id: EffectId) -> u8 {
        id.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// A set of effects stored as one bit per catalog entry.
///
/// Sets compare by equality only. Iteration yields effects in ascending
/// bit order, which is also catalog order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectSet(pub u64);

impl EffectSet {
    /// Maximum number of distinct effects a set can address.
    pub const CAPACITY: usize = 64;

    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Wrap a raw mask.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw mask.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Number of effects in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, effect: EffectId) -> bool {
        self.0 & effect.bit().0 != 0
    }

    /// True if every effect of `other` is in `self`.
    #[inline]
    #[must_use]
    pub const fn contains_all(self, other: EffectSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no effect of `other` is in `self`.
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: EffectSet) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: EffectSet) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: EffectSet) -> Self {
        Self(self.0 & !other.0)
    }

    /// Copy of the set with `effect` added.
    #[inline]
    #[must_use]
    pub const fn with(self, effect: EffectId) -> Self {
        Self(self.0 | effect.bit().0)
    }

    /// Copy of the set with `effect` removed.
    #[inline]
    #[must_use]
    pub const fn without(self, effect: EffectId) -> Self {
        Self(self.0 & !effect.bit().0)
    }

    pub fn insert(&mut self, effect: EffectId) {
        self.0 |= effect.bit().0;
    }

    pub fn remove(&mut self, effect: EffectId) {
        self.0 &= !effect.bit().0;
    }

    /// Iterate over effects in ascending bit order.
    pub fn iter(self) -> EffectSetIter {
        EffectSetIter(self.0)
    }
}

impl FromIterator<EffectId> for EffectSet {
    fn from_iter<I: IntoIterator<Item = EffectId>>(iter: I) -> Self {
        let mut set = EffectSet::EMPTY;
        for effect in iter {
            set.insert(effect);
        }
        set
    }
}

impl IntoIterator for EffectSet {
    type Item = EffectId;
    type IntoIter = EffectSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the effects of an `EffectSet`, lowest bit first.
#[derive(Clone, Debug)]
pub struct EffectSetIter(u64);

impl Iterator for EffectSetIter {
    type Item = EffectId;

    fn next(&mut self) -> Option<EffectId> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(EffectId(bit as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for EffectSetIter {}
