//! Search and transition benchmarks on the reference tables.
//!
//! Run with: cargo bench --bench search

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mix_optimizer::data::{reference_registry, MIXERS};
use mix_optimizer::effects::EffectSet;
use mix_optimizer::rules::{apply, TransitionCache, DEFAULT_EFFECT_CAP};
use mix_optimizer::search::{MixSearch, SearchConfig};

fn bench_apply(c: &mut Criterion) {
    let registry = reference_registry().unwrap();
    let cuke = registry.by_name("Cuke").unwrap();
    let effects = registry
        .catalog()
        .set_of(["Munchies", "Toxic", "Euphoric", "Slippery"])
        .unwrap();

    c.bench_function("apply_cuke", |b| {
        b.iter(|| apply(black_box(cuke), black_box(effects), DEFAULT_EFFECT_CAP))
    });

    c.bench_function("apply_cached", |b| {
        let mut cache = TransitionCache::default();
        b.iter(|| cache.apply(black_box(cuke), black_box(effects)))
    });
}

fn bench_search(c: &mut Criterion) {
    let registry = reference_registry().unwrap();
    let base = registry.by_name("OG Kush").unwrap();
    let mut group = c.benchmark_group("search_og_kush");
    group.sample_size(10);

    for count in [4, 8, 16] {
        let names: Vec<&str> = MIXERS.iter().take(count).map(|row| row.name).collect();
        let allowed = registry.select(&names);

        group.bench_with_input(BenchmarkId::from_parameter(format!("{count}_mixers")), &count, |b, _| {
            b.iter(|| {
                // Fresh context so every iteration starts with a cold cache.
                let mut engine = MixSearch::new(&registry, SearchConfig::default().with_max_length(6));
                black_box(engine.search(base, &allowed))
            });
        });
    }

    group.finish();
}

fn bench_empty_delta(c: &mut Criterion) {
    let registry = reference_registry().unwrap();
    let allowed: Vec<_> = registry.select(MIXERS.iter().map(|row| row.name));

    c.bench_function("apply_all_to_empty", |b| {
        b.iter(|| {
            allowed
                .iter()
                .map(|mixer| apply(mixer, EffectSet::EMPTY, DEFAULT_EFFECT_CAP).len())
                .sum::<u32>()
        })
    });
}

criterion_group!(benches, bench_apply, bench_search, bench_empty_delta);
criterion_main!(benches);
