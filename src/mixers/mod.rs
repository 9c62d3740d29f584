//! Mixer definitions and registry.
//!
//! - `MixerSpec`: declarative mixer (names, serde-loadable)
//! - `Mixer`: compiled mixer with effect bitmasks
//! - `MixerRegistry`: owns the catalog, assigns `MixerId`s

pub mod definition;
pub mod registry;

pub use definition::{Mixer, MixerId, MixerSpec, Placement};
pub use registry::MixerRegistry;
