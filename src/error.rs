//! Construction-time errors.
//!
//! Everything that can go wrong is detected while building the effect
//! catalog or registering mixers. Once a `MixerRegistry` exists the search
//! itself cannot fail.

use thiserror::Error;

/// Errors raised while building catalogs and mixers.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CatalogError {
    /// A rule, target or default effect names an effect the catalog lacks.
    #[error("unknown effect `{name}`")]
    UnknownEffect { name: String },

    /// The same effect name was given twice.
    #[error("effect `{name}` is already defined")]
    DuplicateEffect { name: String },

    /// Multiplier outside `[0, 1]` or not finite.
    #[error("effect `{name}` has invalid multiplier {multiplier}")]
    InvalidMultiplier { name: String, multiplier: f64 },

    /// Effect ID that does not address a bit of an `EffectSet`.
    #[error("effect id {id} is out of range")]
    EffectOutOfRange { id: u8 },

    /// More effects than fit in an `EffectSet`.
    #[error("effect catalog is full ({capacity} effects)")]
    CatalogFull { capacity: usize },

    /// Negative or non-finite mixer price.
    #[error("mixer `{mixer}` has invalid price {price}")]
    InvalidPrice { mixer: String, price: f64 },

    /// The same mixer name was registered twice.
    #[error("mixer `{name}` is already registered")]
    DuplicateMixer { name: String },
}

/// Result alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;
