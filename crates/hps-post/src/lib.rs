//! hps-post: CSV ingestion and export around the cycle studies.
//!
//! Reads the public datasets used to contextualize a study (monthly German
//! electricity generation, heating degree days) and exports efficiency
//! matrices for spreadsheet consumption. All readers take `io::Read`, so
//! tests run against in-memory bytes.

pub mod degree_days;
pub mod energy_mix;
pub mod error;
pub mod export;

pub use degree_days::read_monthly_degree_days;
pub use energy_mix::{EnergyMix, read_energy_mix};
pub use error::{PostError, PostResult};
pub use export::write_efficiency_matrix;
