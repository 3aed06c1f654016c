//! hps-engine: narrow interface to the external process-simulation engine.
//!
//! The equation solver itself is an external collaborator; this crate only
//! defines what the study layer hands it (a topology plus a partial boundary
//! assignment) and what it hands back (per-component results). Attributes
//! left unset in the boundary state are solver-determined unknowns.
//!
//! `ScriptedEngine` is a deterministic stand-in that records every call and
//! replays pre-seeded solutions; it backs the study-level tests.

pub mod error;
pub mod scripted;
pub mod solution;
pub mod state;

use hps_fluids::Species;
use hps_topology::Topology;

pub use error::{EngineError, EngineResult};
pub use scripted::{ScriptedEngine, SolveRecord};
pub use solution::{ComponentResult, Solution, StatePoint};
pub use state::{BoundaryState, ComponentState, ConnectionState};

/// Solve mode of the external engine.
///
/// Off-design solves reuse the engine's persisted design-point solution as a
/// starting reference; that persistence is an engine concern and opaque here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SolveMode {
    Design,
    OffDesign,
}

impl SolveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SolveMode::Design => "design",
            SolveMode::OffDesign => "offdesign",
        }
    }
}

/// The consumed surface of the external simulation engine.
///
/// Calls are blocking and strictly sequential; a non-converging solve is the
/// engine's own `NotConverged` error and is never retried here.
pub trait SimulationEngine {
    /// Register the cycle's connections with the engine, replacing any
    /// previously loaded network.
    fn load(&mut self, topology: &Topology, fluids: &[Species]) -> EngineResult<()>;

    /// Solve with the given boundary assignment.
    fn solve(&mut self, boundary: &BoundaryState, mode: SolveMode) -> EngineResult<Solution>;
}

impl<E: SimulationEngine + ?Sized> SimulationEngine for &mut E {
    fn load(&mut self, topology: &Topology, fluids: &[Species]) -> EngineResult<()> {
        (**self).load(topology, fluids)
    }

    fn solve(&mut self, boundary: &BoundaryState, mode: SolveMode) -> EngineResult<Solution> {
        (**self).solve(boundary, mode)
    }
}
