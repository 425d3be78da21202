//! # Generation Errors
//!
//! Error types for parameter resolution and part generation.

use thiserror::Error;

/// Errors that can occur while resolving parameters or building an assembly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// Model type tag not recognised
    #[error("Unknown model type: {0}")]
    UnknownModelType(String),

    /// Material tag not recognised
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Simulation overlay tag not recognised
    #[error("Unknown simulation overlay: {0}")]
    UnknownOverlay(String),

    /// Render quality tag not recognised
    #[error("Unknown render quality: {0}")]
    UnknownQuality(String),

    /// Parameter value outside the range the builder can handle
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Parameter given as a flag where a number is needed, or the reverse
    #[error("Parameter {name} must be a {expected}")]
    WrongParameterKind { name: String, expected: &'static str },

    /// Builder asked for a parameter its model does not define
    #[error("Parameter {name} is not defined for {model}")]
    MissingParameter { name: String, model: String },

    /// Assembly would exceed the primitive budget
    #[error("Too many primitives: {count} (max: {max})")]
    TooManyPrimitives { count: usize, max: usize },
}

impl GenerateError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Creates a wrong parameter kind error.
    pub fn wrong_kind(name: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongParameterKind {
            name: name.into(),
            expected,
        }
    }
}
