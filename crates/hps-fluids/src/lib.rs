//! hps-fluids: thermophysical property seam for heat pump studies.
//!
//! Provides:
//! - Working fluid identifiers (`Species`)
//! - The `PropertyModel` trait isolating the study logic from property
//!   backends (CoolProp, REFPROP, ...); only saturation-pressure lookups
//!   are consumed here
//! - An Antoine-correlation backend with tabulated, range-checked
//!   coefficients, usable as a deterministic default
//!
//! Property-lookup failures (unsupported fluid, out-of-range temperature)
//! propagate as `FluidError`; nothing is silently defaulted.

pub mod antoine;
pub mod error;
pub mod model;
pub mod species;

// Re-exports for ergonomics
pub use antoine::AntoineModel;
pub use error::{FluidError, FluidResult};
pub use model::PropertyModel;
pub use species::Species;
