//! Effect transition rules.
//!
//! A mixer changes an item's effects through an ordered list of
//! conditional rules plus an optional default effect:
//! - `RuleSpec` / `Rule`: one conditional replace-or-add step
//! - `apply`: the pure transition function
//! - `TransitionCache`: memoized `apply`
//!
//! Rules never see game concepts beyond effect bits; prices and
//! multipliers only matter to the search.

pub mod cache;
pub mod engine;
pub mod rule;

pub use cache::TransitionCache;
pub use engine::{apply, DEFAULT_EFFECT_CAP};
pub use rule::{Rule, RuleAction, RuleSpec};
