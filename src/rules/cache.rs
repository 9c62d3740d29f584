//! Memoized transitions.
//!
//! `apply` is a pure function of immutable inputs, so results are stored
//! forever: no invalidation, no eviction.

use rustc_hash::FxHashMap;

use crate::effects::EffectSet;
use crate::mixers::{Mixer, MixerId};

use super::engine::{apply, DEFAULT_EFFECT_CAP};

/// Cache of `(effects, mixer) -> effects'` transitions.
///
/// Keys use `MixerId`, so a cache must only see mixers from one registry.
/// The cap is fixed at construction; every cached entry was computed with it.
#[derive(Clone, Debug)]
pub struct TransitionCache {
    cap: u32,
    memo: FxHashMap<(EffectSet, MixerId), EffectSet>,
    hits: u64,
    misses: u64,
}

impl Default for TransitionCache {
    fn default() -> Self {
        Self::new(DEFAULT_EFFECT_CAP)
    }
}

impl TransitionCache {
    /// Create an empty cache for the given effect cap.
    #[must_use]
    pub fn new(cap: u32) -> Self {
        Self {
            cap,
            memo: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached equivalent of [`apply`] with this cache's cap.
    pub fn apply(&mut self, mixer: &Mixer, effects: EffectSet) -> EffectSet {
        let key = (effects, mixer.id);
        if let Some(&out) = self.memo.get(&key) {
            self.hits += 1;
            return out;
        }

        let out = apply(mixer, effects, self.cap);
        self.memo.insert(key, out);
        self.misses += 1;
        out
    }

    #[must_use]
    pub fn cap(&self) -> u32 {
        self.cap
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of memoized transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Drop all entries and counters.
    pub fn clear(&mut self) {
        self.memo.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
