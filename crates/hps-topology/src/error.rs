//! Topology-specific error types.

use crate::decl::{ConnKey, Port};
use thiserror::Error;

pub type TopologyResult<T> = Result<T, TopologyError>;

/// Topology construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Bad study configuration (unknown expansion device, zero stages, ...).
    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    /// Interleaved sequences have incompatible lengths.
    #[error("Cannot interleave sequences of length {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A component name was declared twice.
    #[error("Component '{name}' is already declared")]
    DuplicateComponent { name: String },

    /// A second connection was declared for the same (source, target) pair.
    #[error("Connection '{key}' is already declared")]
    DuplicateConnection { key: ConnKey },

    /// A connection endpoint references an undeclared component.
    #[error("Connection endpoint references undeclared component '{name}'")]
    UnknownComponent { name: String },

    /// A connection uses an inlet port as a source or an outlet port as a target.
    #[error("Port {port} cannot be used as {role} on component '{name}'")]
    InvalidPort {
        name: String,
        port: Port,
        role: &'static str,
    },

    /// No outgoing connection exists for the named component.
    #[error("Component '{name}' has no outgoing connection on {port}")]
    MissingOutlet { name: String, port: Port },

    /// A declared component ended up with no connections at all.
    #[error("Component '{name}' is not referenced by any connection")]
    IsolatedComponent { name: String },
}
