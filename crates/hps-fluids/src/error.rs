//! Fluid property errors.

use thiserror::Error;

/// Result type for property lookups.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors raised by property-model backends.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// The backend has no data for the requested species.
    #[error("Not supported: {what}")]
    NotSupported { what: String },

    /// Temperature (or another input) outside the backend's valid range.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Invalid argument (e.g., quality outside [0, 1]).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// External backend failure, passed through unmodified.
    #[error("Backend error: {message}")]
    Backend { message: String },
}
