//! Deterministic engine stand-in for tests.

use std::collections::VecDeque;

use hps_fluids::Species;
use hps_topology::Topology;

use crate::error::{EngineError, EngineResult};
use crate::solution::Solution;
use crate::state::BoundaryState;
use crate::{SimulationEngine, SolveMode};

/// One recorded `solve` call: the mode and a snapshot of the boundary
/// assignment at call time.
#[derive(Debug, Clone)]
pub struct SolveRecord {
    pub mode: SolveMode,
    pub boundary: BoundaryState,
}

/// Engine double that replays scripted solutions and records every call.
///
/// Queued solutions are consumed in order; once the queue is empty the
/// fallback solution (if any) answers all further solves. Without either,
/// a solve fails like a non-converging external run.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    loaded: Option<Topology>,
    fluids: Vec<Species>,
    queue: VecDeque<Solution>,
    fallback: Option<Solution>,
    pub load_count: usize,
    pub solves: Vec<SolveRecord>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every un-queued solve with this solution.
    pub fn with_fallback(solution: Solution) -> Self {
        Self {
            fallback: Some(solution),
            ..Self::default()
        }
    }

    /// Queue a solution for the next unanswered solve.
    pub fn enqueue(&mut self, solution: Solution) {
        self.queue.push_back(solution);
    }

    pub fn loaded_topology(&self) -> Option<&Topology> {
        self.loaded.as_ref()
    }

    pub fn fluids(&self) -> &[Species] {
        &self.fluids
    }
}

impl SimulationEngine for ScriptedEngine {
    fn load(&mut self, topology: &Topology, fluids: &[Species]) -> EngineResult<()> {
        self.loaded = Some(topology.clone());
        self.fluids = fluids.to_vec();
        self.load_count += 1;
        Ok(())
    }

    fn solve(&mut self, boundary: &BoundaryState, mode: SolveMode) -> EngineResult<Solution> {
        if self.loaded.is_none() {
            return Err(EngineError::NotLoaded);
        }
        self.solves.push(SolveRecord {
            mode,
            boundary: boundary.clone(),
        });

        if let Some(next) = self.queue.pop_front() {
            return Ok(next);
        }
        self.fallback
            .clone()
            .ok_or_else(|| EngineError::NotConverged {
                what: "scripted engine has no solution left to replay".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hps_core::units::watts;
    use hps_topology::{CycleVariant, ExpansionDevice, build_topology};

    use crate::solution::ComponentResult;

    fn load_regular(engine: &mut ScriptedEngine) -> BoundaryState {
        let topo =
            build_topology(1, ExpansionDevice::ExpansionValve, &CycleVariant::Regular).unwrap();
        engine.load(&topo, &[Species::R290]).unwrap();
        BoundaryState::for_topology(&topo)
    }

    #[test]
    fn solve_before_load_fails() {
        let mut engine = ScriptedEngine::new();
        let topo =
            build_topology(1, ExpansionDevice::ExpansionValve, &CycleVariant::Regular).unwrap();
        let boundary = BoundaryState::for_topology(&topo);
        let err = engine.solve(&boundary, SolveMode::Design).unwrap_err();
        assert_eq!(err, EngineError::NotLoaded);
    }

    #[test]
    fn queue_then_fallback() {
        let mut queued = Solution::new();
        queued.insert(
            "condenser",
            ComponentResult {
                duty: Some(watts(-1.0)),
                ..Default::default()
            },
        );
        let fallback = Solution::new();

        let mut engine = ScriptedEngine::with_fallback(fallback.clone());
        engine.enqueue(queued.clone());
        let boundary = load_regular(&mut engine);

        assert_eq!(engine.solve(&boundary, SolveMode::Design).unwrap(), queued);
        assert_eq!(engine.solve(&boundary, SolveMode::Design).unwrap(), fallback);
        assert_eq!(engine.solves.len(), 2);
    }

    #[test]
    fn exhausted_script_reads_as_non_convergence() {
        let mut engine = ScriptedEngine::new();
        let boundary = load_regular(&mut engine);
        let err = engine.solve(&boundary, SolveMode::OffDesign).unwrap_err();
        assert!(matches!(err, EngineError::NotConverged { .. }));
    }
}
