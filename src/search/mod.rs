//! Branch-and-bound search over mixer sequences.
//!
//! ## Overview
//!
//! Starting from a base item, the search applies allowed mixers one at a
//! time and keeps the best sequence for every length. The frontier is
//! expanded breadth-first and pruned by:
//!
//! - **No immediate repeats**: the same mixer twice in a row is skipped
//! - **Effect limit**: successors over `max_effects` are dropped
//! - **Quality regressions**: at most `max_quality_drops` multiplier drops per path
//! - **Dominance**: same effects, last mixer and drop count reached more
//!   cheaply before
//! - **Optimistic bound**: `net + remaining * delta_max` below the best net
//!
//! ## Usage
//!
//! ```rust
//! use mix_optimizer::data::reference_registry;
//! use mix_optimizer::search::{MixSearch, SearchConfig};
//!
//! let registry = reference_registry().unwrap();
//! let base = registry.by_name("OG Kush").unwrap();
//! let allowed = registry.select(["Cuke", "Banana", "Paracetamol", "Donut"]);
//!
//! let mut search = MixSearch::new(&registry, SearchConfig::default().with_max_length(4));
//! let result = search.search(base, &allowed);
//!
//! for (length, best) in &result.by_length {
//!     println!("{length}: {:?} nets {:.2}", best.sequence, best.net_benefit);
//! }
//! ```

pub mod config;
pub mod engine;
pub mod result;
pub mod state;
pub mod stats;

pub use config::SearchConfig;
pub use result::{expected_total_value, Candidate, SearchResult};
pub use engine::{search, MixSearch};
pub use state::SearchState;
pub use stats::SearchStats;
