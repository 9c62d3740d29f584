//! Pruned breadth-first branch-and-bound over mixer sequences.
//!
//! States leave the frontier in FIFO order, so lengths are non-decreasing.
//! The optimistic-bound prune relies on that ordering.

use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::effects::{EffectCatalog, EffectSet};
use crate::mixers::{Mixer, MixerRegistry};
use crate::rules::TransitionCache;

use super::config::SearchConfig;
use super::result::{expected_total_value, Candidate, SearchResult};
use super::state::{DominanceKey, SearchState};
use super::stats::SearchStats;

/// Search context.
///
/// Borrows the registry the mixers come from and owns the transition cache,
/// which stays warm across calls to [`MixSearch::search`]. Use one
/// `MixSearch` per thread; the registry itself can be shared.
///
/// ## Example
///
/// ```
/// use mix_optimizer::effects::EffectCatalog;
/// use mix_optimizer::mixers::{MixerRegistry, MixerSpec};
/// use mix_optimizer::search::{MixSearch, SearchConfig};
///
/// let catalog = EffectCatalog::new([("Gingeritis", 0.20)]).unwrap();
/// let mut registry = MixerRegistry::new(catalog);
/// registry.register(MixerSpec::base("Weed", None, 35.0)).unwrap();
/// registry.register(MixerSpec::new("Banana", 2.0).with_default("Gingeritis")).unwrap();
///
/// let base = registry.by_name("Weed").unwrap();
/// let allowed = registry.select(["Banana"]);
///
/// let mut search = MixSearch::new(&registry, SearchConfig::default().with_max_length(2));
/// let result = search.search(base, &allowed);
///
/// assert_eq!(result.best_net.sequence, vec!["Weed", "Banana"]);
/// assert_eq!(result.best_net.expected_total_value, 42);
/// ```
pub struct MixSearch<'r> {
    registry: &'r MixerRegistry,
    config: SearchConfig,
    cache: TransitionCache,
    stats: SearchStats,
}

/// Running best by (expected total value, lower cost).
struct BestValue {
    value: i64,
    cost: f64,
    state: SearchState,
}

impl<'r> MixSearch<'r> {
    /// Create a search context over a registry.
    pub fn new(registry: &'r MixerRegistry, config: SearchConfig) -> Self {
        let cache = TransitionCache::new(config.effect_cap);
        Self {
            registry,
            config,
            cache,
            stats: SearchStats::default(),
        }
    }

    /// Find the best sequences starting from `base` using `allowed` mixers.
    ///
    /// `base` and every allowed mixer must come from this context's
    /// registry. The base item is never used as a supplemental step unless
    /// it is also listed in `allowed`.
    pub fn search(&mut self, base: &Mixer, allowed: &[&Mixer]) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();
        let (hits_before, misses_before) = (self.cache.hits(), self.cache.misses());

        let registry = self.registry;
        let catalog = registry.catalog();
        debug_assert!(
            std::iter::once(base)
                .chain(allowed.iter().copied())
                .all(|mixer| registry.get(mixer.id) == Some(mixer)),
            "mixers must come from the search registry"
        );
        let max_length = self.config.max_length;
        let max_effects = self.config.max_effects;
        let max_drops = self.config.max_quality_drops;
        let base_price = base.price;

        tracing::debug!(
            base = %base.name,
            allowed = allowed.len(),
            max_length,
            max_effects,
            "starting mix search"
        );

        let initial = self.cache.apply(base, EffectSet::EMPTY);
        let root = SearchState::root(initial, base_price * catalog.multiplier(initial));
        let delta_max = self.delta_max(base_price, allowed);

        let mut frontier = VecDeque::new();
        let mut visited: FxHashMap<DominanceKey, f64> = FxHashMap::default();
        visited.insert(root.key(), 0.0);

        let mut global_best_net = root.net;
        let mut best_value = BestValue {
            value: expected_total_value(base_price, catalog.multiplier(initial)),
            cost: 0.0,
            state: root.clone(),
        };
        let mut best_net = root.clone();
        let mut by_length: BTreeMap<usize, SearchState> = BTreeMap::new();

        frontier.push_back(root);

        while let Some(state) = frontier.pop_front() {
            self.stats.states_popped += 1;

            let length = state.len();
            let multiplier = catalog.multiplier(state.effects);
            let value = expected_total_value(base_price, multiplier);

            if value > best_value.value || (value == best_value.value && state.cost < best_value.cost) {
                best_value = BestValue {
                    value,
                    cost: state.cost,
                    state: state.clone(),
                };
            }
            if state.net > best_net.net {
                best_net = state.clone();
            }

            let improved = by_length
                .get(&length)
                .map_or(true, |best| state.net > best.net);
            if improved {
                tracing::trace!(length, net = state.net, "new best for length");
                global_best_net = global_best_net.max(state.net);
                by_length.insert(length, state.clone());
            }

            if length >= max_length {
                self.stats.stopped_length += 1;
                continue;
            }
            if state.effects.len() >= max_effects {
                self.stats.stopped_effects += 1;
                continue;
            }
            let remaining = (max_length - length) as f64;
            if state.net + remaining * delta_max < global_best_net {
                self.stats.pruned_bound += 1;
                continue;
            }

            for (index, mixer) in allowed.iter().enumerate() {
                if state.last == Some(index) {
                    self.stats.pruned_repeat += 1;
                    continue;
                }

                let effects = self.cache.apply(mixer, state.effects);
                if effects.len() > max_effects {
                    self.stats.pruned_effects += 1;
                    continue;
                }

                let cost = state.cost + mixer.price;
                let next_multiplier = catalog.multiplier(effects);
                let drops = if next_multiplier < multiplier {
                    state.drops + 1
                } else {
                    state.drops
                };
                if drops > max_drops {
                    self.stats.pruned_regression += 1;
                    continue;
                }

                let key = (effects, Some(index), drops);
                if visited.get(&key).is_some_and(|&seen| seen <= cost) {
                    self.stats.pruned_dominated += 1;
                    continue;
                }
                visited.insert(key, cost);

                let net = base_price * next_multiplier - cost;
                frontier.push_back(state.successor(index, effects, cost, net, drops));
                self.stats.states_added += 1;
            }
        }

        self.stats.cache_hits = self.cache.hits() - hits_before;
        self.stats.cache_misses = self.cache.misses() - misses_before;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        tracing::debug!(
            base = %base.name,
            popped = self.stats.states_popped,
            added = self.stats.states_added,
            pruned = self.stats.successors_pruned(),
            best_net = best_net.net,
            time_us = self.stats.time_us,
            "mix search finished"
        );

        SearchResult {
            best_value: snapshot(catalog, base, allowed, &best_value.state),
            best_net: snapshot(catalog, base, allowed, &best_net),
            by_length: by_length
                .iter()
                .map(|(&length, state)| (length, snapshot(catalog, base, allowed, state)))
                .collect(),
            stats: self.stats.clone(),
        }
    }

    /// Largest single-step net gain over the allowed mixers.
    ///
    /// Each mixer is applied to the empty set, not to the base item's
    /// effects, and the value is not recomputed per state. It is a
    /// heuristic bound, not a proven one. Zero when nothing is allowed.
    fn delta_max(&mut self, base_price: f64, allowed: &[&Mixer]) -> f64 {
        let registry = self.registry;
        let catalog = registry.catalog();
        let mut best: Option<f64> = None;
        for mixer in allowed {
            let gain = base_price * catalog.multiplier(self.cache.apply(mixer, EffectSet::EMPTY)) - mixer.price;
            best = Some(best.map_or(gain, |b| b.max(gain)));
        }
        best.unwrap_or(0.0)
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The transition cache, including entries from earlier searches.
    #[must_use]
    pub fn cache(&self) -> &TransitionCache {
        &self.cache
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &'r MixerRegistry {
        self.registry
    }
}

/// One-shot search with explicit limits and default regression tolerance.
///
/// `max_length` or `max_effects` below 1 are accepted and yield the base
/// item alone.
pub fn search(
    registry: &MixerRegistry,
    base: &Mixer,
    allowed: &[&Mixer],
    max_length: usize,
    max_effects: u32,
) -> SearchResult {
    let config = SearchConfig::default()
        .with_max_length(max_length)
        .with_max_effects(max_effects);
    MixSearch::new(registry, config).search(base, allowed)
}

fn snapshot(catalog: &EffectCatalog, base: &Mixer, allowed: &[&Mixer], state: &SearchState) -> Candidate {
    let mut sequence = Vec::with_capacity(state.len());
    sequence.push(base.name.clone());
    sequence.extend(state.path.iter().map(|&index| allowed[index].name.clone()));

    let multiplier = catalog.multiplier(state.effects);
    Candidate {
        sequence,
        effects: catalog.names(state.effects),
        total_multiplier: multiplier,
        cost: state.cost,
        net_benefit: state.net,
        expected_total_value: expected_total_value(base.price, multiplier),
    }
}
