//! Study-level error type.

use hps_core::HpsError;
use hps_engine::EngineError;
use hps_fluids::FluidError;
use hps_topology::TopologyError;
use thiserror::Error;

pub type StudyResult<T> = Result<T, StudyError>;

#[derive(Error, Debug)]
pub enum StudyError {
    /// Shared numeric/lookup failure from the core crate.
    #[error(transparent)]
    Core(#[from] HpsError),

    /// Topology construction failed (bad variant configuration).
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Property lookup failed; propagated from the property service unmodified.
    #[error(transparent)]
    Property(#[from] FluidError),

    /// Engine failure, including non-convergence of the external solver.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Bad study configuration caught before anything is built.
    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    /// The internal-condenser variant needs a consumer supply temperature.
    #[error("Operating point is missing the consumer temperature")]
    MissingConsumerTemperature,

    /// A derived quantity was requested before a successful solve.
    #[error("No solved results available; call solve() first")]
    NotSolved,

    /// COP is undefined when the solved compression work is not positive.
    #[error("Total compression work is not positive: {work_w} W")]
    NonPositiveWork { work_w: f64 },
}
