//! Error types for weight scheme configuration.
//!
//! Conversions themselves never fail; only building a weight scheme from
//! caller supplied numbers or names can.

use thiserror::Error;

use crate::color::Component;

/// A weight scheme could not be built.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// A weight is NaN or infinite.
    #[error("weight {index} is not a finite number: {value}")]
    NonFiniteWeight {
        /// Position of the weight in the triple.
        index: usize,
        /// The rejected value.
        value: Component,
    },

    /// A weight is below zero.
    #[error("weight {index} is negative: {value}")]
    NegativeWeight {
        /// Position of the weight in the triple.
        index: usize,
        /// The rejected value.
        value: Component,
    },

    /// The weights do not add up to one.
    #[error("weights must sum to 1, but sum to {sum}")]
    WeightsNotNormalized {
        /// The sum of the three weights.
        sum: Component,
    },

    /// A weight that must carry some lightness is zero.
    #[error("weight {index} must be greater than zero")]
    ZeroWeight {
        /// Position of the weight in the triple.
        index: usize,
    },

    /// No preset is known by the given name.
    #[error("unknown weight preset: {0}")]
    UnknownPreset(String),
}

/// Result type for weight scheme configuration.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
