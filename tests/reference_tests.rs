//! Spot checks against the reference game tables.

use mix_optimizer::data::reference_registry;
use mix_optimizer::effects::EffectSet;
use mix_optimizer::mixers::MixerRegistry;
use mix_optimizer::rules::{apply, DEFAULT_EFFECT_CAP};
use mix_optimizer::search::{search, MixSearch, SearchConfig};

fn set_of(registry: &MixerRegistry, names: &[&str]) -> EffectSet {
    registry.catalog().set_of(names.iter().copied()).unwrap()
}

fn mix(registry: &MixerRegistry, mixer: &str, effects: &[&str]) -> Vec<String> {
    let mixer = registry.by_name(mixer).unwrap();
    let out = apply(mixer, set_of(registry, effects), DEFAULT_EFFECT_CAP);
    registry.catalog().names(out)
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn test_cuke_turns_munchies_athletic() {
    let registry = reference_registry().unwrap();
    assert_eq!(mix(&registry, "Cuke", &["Munchies"]), vec!["Energizing", "Athletic"]);
}

#[test]
fn test_donut_adds_explosive() {
    let registry = reference_registry().unwrap();
    assert_eq!(
        mix(&registry, "Donut", &["Calorie-Dense"]),
        vec!["Explosive", "Calorie-Dense"]
    );
}

#[test]
fn test_rules_chain_in_order() {
    let registry = reference_registry().unwrap();
    // Euphoric becomes Laxative before Toxic becomes Euphoric.
    assert_eq!(
        mix(&registry, "Cuke", &["Toxic", "Euphoric"]),
        vec!["Laxative", "Euphoric", "Energizing"]
    );
}

#[test]
fn test_full_item_keeps_rules_within_cap() {
    let registry = reference_registry().unwrap();
    let full = [
        "Calming",
        "Munchies",
        "Refreshing",
        "Focused",
        "Euphoric",
        "Gingeritis",
        "Sneaky",
        "Sedating",
    ];
    let out = mix(&registry, "Donut", &full);
    // Focused merges into Euphoric, which frees a slot for the default.
    assert_eq!(out.len(), 8);
    assert!(!out.contains(&"Focused".to_string()));
    assert!(out.contains(&"Calorie-Dense".to_string()));

    let out = mix(&registry, "Cuke", &full);
    // Munchies becomes Athletic in place; Energizing has no room.
    assert_eq!(out.len(), 8);
    assert!(out.contains(&"Athletic".to_string()));
    assert!(!out.contains(&"Energizing".to_string()));
}

// =============================================================================
// Searches
// =============================================================================

#[test]
fn test_og_kush_with_cuke() {
    let registry = reference_registry().unwrap();
    let base = registry.by_name("OG Kush").unwrap();
    let allowed = registry.select(["Cuke"]);

    let result = search(&registry, base, &allowed, 2, 8);
    let two = result.best_of_length(2).unwrap();

    assert_eq!(two.sequence, vec!["OG Kush", "Cuke"]);
    assert_eq!(two.effects, vec!["Calming", "Energizing"]);
    assert!((two.net_benefit - 9.2).abs() < 1e-9);
    assert_eq!(two.expected_total_value, 47);
    assert_eq!(result.best_net, *two);
}

#[test]
fn test_reference_search_is_sane() {
    let registry = reference_registry().unwrap();
    let names: Vec<&str> = mix_optimizer::data::MIXERS.iter().map(|row| row.name).collect();
    let allowed = registry.select(&names);
    assert_eq!(allowed.len(), 16);

    for base_name in ["OG Kush", "Meth"] {
        let base = registry.by_name(base_name).unwrap();
        let mut engine = MixSearch::new(&registry, SearchConfig::default().with_max_length(4));
        let result = engine.search(base, &allowed);

        assert_eq!(result.best_of_length(1).unwrap().sequence, vec![base_name]);
        assert!(result.max_length() <= 4);
        assert!(result.best_net.net_benefit > 0.0, "{base_name}");
        assert!(result.best_value.expected_total_value as f64 >= base.price);
        for pair in result.best_net.sequence.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }

        let stats = engine.stats();
        assert_eq!(stats.states_popped, stats.states_added + 1);
        assert!(stats.cache_misses > 0);
    }
}

#[test]
fn test_og_kush_full_pool_golden() {
    let registry = reference_registry().unwrap();
    let base = registry.by_name("OG Kush").unwrap();
    let names: Vec<&str> = mix_optimizer::data::MIXERS.iter().map(|row| row.name).collect();
    let allowed = registry.select(&names);

    let result = search(&registry, base, &allowed, 9, 8);

    let nets: Vec<f64> = result
        .by_length
        .values()
        .map(|candidate| (candidate.net_benefit * 10.0).round() / 10.0)
        .collect();
    assert_eq!(nets, vec![3.5, 25.4, 40.0, 50.2, 62.9, 73.4, 84.2, 96.8, 86.7]);

    let eight = result.best_of_length(8).unwrap();
    assert_eq!(
        eight.sequence,
        vec!["OG Kush", "Banana", "Gasoline", "Cuke", "Mega Bean", "Battery", "Banana", "Cuke"]
    );
    assert_eq!(eight.expected_total_value, 164);
    assert_eq!(
        result.best_of_length(9).unwrap().sequence,
        vec![
            "OG Kush",
            "Cuke",
            "Flu Medicine",
            "Paracetamol",
            "Gasoline",
            "Cuke",
            "Mega Bean",
            "Battery",
            "Horse Semen"
        ]
    );

    assert_eq!(result.best_net, *eight);
    assert_eq!(
        result.best_value.sequence,
        vec!["OG Kush", "Mega Bean", "Banana", "Motor Oil", "Cuke", "Battery", "Horse Semen", "Mega Bean"]
    );
    assert_eq!(result.best_value.expected_total_value, 171);
    assert_eq!(result.best_value.cost, 40.0);

    // Any change to the dominance or bound prunes shifts this count.
    assert_eq!(result.stats.states_popped, 202_498);
}
