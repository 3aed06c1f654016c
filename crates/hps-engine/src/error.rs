//! Engine-facing error types.

use hps_topology::ConnKey;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A boundary assignment or result lookup referenced an undeclared component.
    #[error("Unknown component '{name}'")]
    UnknownComponent { name: String },

    /// A boundary assignment or result lookup referenced an undeclared connection.
    #[error("Unknown connection '{key}'")]
    UnknownConnection { key: ConnKey },

    /// `solve` was called before `load`.
    #[error("Engine has no loaded network")]
    NotLoaded,

    /// The external solver failed to converge. Propagated, never retried.
    #[error("Solver did not converge: {what}")]
    NotConverged { what: String },

    /// A requested result was not part of the solution.
    #[error("No solved {what} available for '{name}'")]
    MissingResult { name: String, what: &'static str },

    /// Any other failure of the external engine, passed through unmodified.
    #[error("Engine backend error: {message}")]
    Backend { message: String },
}
