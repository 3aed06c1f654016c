//! hps-core: stable foundation for the heat pump study workspace.
//!
//! Contains:
//! - units (uom SI types + constructors + engine-unit accessors)
//! - numeric (float helpers and tolerances)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HpsError, HpsResult};
pub use numeric::*;
pub use units::*;
