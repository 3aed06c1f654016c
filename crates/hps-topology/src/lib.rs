//! hps-topology: procedural cycle-topology generation for heat pump studies.
//!
//! Provides:
//! - Component/connection declarations with typed connection keys
//! - An incremental, validating topology builder
//! - Stage-repetition and pairwise interleaving helpers
//! - Builders for the four supported cycle shapes (regular, intercooled,
//!   internal-condenser, vapor-injection)
//!
//! # Example
//!
//! ```
//! use hps_topology::{CycleVariant, ExpansionDevice, build_topology};
//!
//! let topo = build_topology(1, ExpansionDevice::ExpansionValve, &CycleVariant::Regular).unwrap();
//! assert_eq!(topo.components().len(), 5);
//! ```

pub mod builder;
pub mod decl;
pub mod error;
pub mod interleave;
pub mod stages;
pub mod variant;

mod intercooled;
mod internal_condenser;
mod regular;
mod vapor_injection;

// Re-exports for ergonomics
pub use builder::{Topology, TopologyBuilder};
pub use decl::{ComponentDecl, ComponentKind, ConnKey, ConnectionDecl, Port};
pub use error::{TopologyError, TopologyResult};
pub use interleave::interleave;
pub use stages::{repeat_comp, repeat_conn, stage_name};
pub use variant::{CycleVariant, ExchangeDirection, ExpansionDevice, build_topology};
