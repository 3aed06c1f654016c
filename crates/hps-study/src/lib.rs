//! hps-study: study facade over the cycle topologies and the external
//! simulation engine.
//!
//! A [`HeatPumpStudy`] owns the component/connection registries for one
//! cycle variant, assigns boundary conditions from saturation-pressure
//! lookups, drives the engine, and derives COP and efficiency-matrix
//! sweeps from the solved results.
//!
//! # Example
//!
//! ```no_run
//! use hps_engine::{ScriptedEngine, SolveMode};
//! use hps_fluids::AntoineModel;
//! use hps_study::{HeatPumpStudy, StudyConfig};
//! use hps_topology::CycleVariant;
//!
//! let mut study = HeatPumpStudy::new(
//!     StudyConfig::default(),
//!     CycleVariant::Regular,
//!     ScriptedEngine::new(),
//!     AntoineModel::new(),
//! ).unwrap();
//! study.solve(SolveMode::Design).unwrap();
//! println!("COP: {}", study.cop().unwrap());
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod study;
pub mod sweep;

// Re-exports for ergonomics
pub use boundary::InjectionPhase;
pub use config::{OperatingPoint, StudyConfig};
pub use error::{StudyError, StudyResult};
pub use study::HeatPumpStudy;
pub use sweep::{
    EfficiencyMatrix, default_condensation_temps, default_evaporation_temps, temperature_range,
};
