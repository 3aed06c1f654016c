//! The study facade: one cycle variant, one engine, one property service.

use std::collections::BTreeMap;

use hps_core::units::engine_units;
use hps_engine::{BoundaryState, SimulationEngine, Solution, SolveMode, StatePoint};
use hps_fluids::{PropertyModel, Species};
use hps_topology::{ComponentKind, CycleVariant, Topology, build_topology};
use tracing::{debug, info};

use crate::boundary::{
    self, InjectionPhase, assign_intercooled, assign_internal_condenser, assign_regular,
    assign_vapor_injection,
};
use crate::config::{OperatingPoint, StudyConfig};
use crate::error::{StudyError, StudyResult};
use crate::sweep::EfficiencyMatrix;

/// A configured heat pump cycle study.
///
/// Owns the topology, the boundary registries and the engine session for one
/// cycle variant. Any change of operating point rebuilds the boundary
/// assignment wholesale; there is no incremental patching of constraints.
pub struct HeatPumpStudy<E, P> {
    config: StudyConfig,
    variant: CycleVariant,
    point: OperatingPoint,
    topology: Topology,
    boundary: BoundaryState,
    engine: E,
    properties: P,
    last_solution: Option<Solution>,
}

impl<E: SimulationEngine, P: PropertyModel> HeatPumpStudy<E, P> {
    /// Build the variant's topology, load it into the engine and assign the
    /// default operating point's boundary conditions.
    pub fn new(
        config: StudyConfig,
        variant: CycleVariant,
        engine: E,
        properties: P,
    ) -> StudyResult<Self> {
        config.validate()?;
        let point = OperatingPoint::default_for(&variant);
        let topology = build_topology(config.stages, config.expansion_device, &variant)?;
        let boundary = BoundaryState::for_topology(&topology);
        let mut study = Self {
            config,
            variant,
            point,
            topology,
            boundary,
            engine,
            properties,
            last_solution: None,
        };
        study.setup_network()?;
        Ok(study)
    }

    /// Working fluids announced to the engine. The consumer loop of the
    /// internal-condenser variant runs on water.
    fn fluids(&self) -> Vec<Species> {
        match self.variant {
            CycleVariant::InternalCondenser(_) => {
                vec![self.config.working_fluid, Species::Water]
            }
            _ => vec![self.config.working_fluid],
        }
    }

    /// Rebuild topology and boundary registries and reload the engine.
    fn setup_network(&mut self) -> StudyResult<()> {
        info!(
            variant = ?self.variant,
            stages = self.config.stages,
            fluid = self.config.working_fluid.name(),
            "loading cycle network"
        );
        self.topology = build_topology(
            self.config.stages,
            self.config.expansion_device,
            &self.variant,
        )?;
        self.engine.load(&self.topology, &self.fluids())?;
        self.assign_boundary()
    }

    /// Reset the boundary registries and reassign for the current point.
    fn assign_boundary(&mut self) -> StudyResult<()> {
        self.point.validate()?;
        self.boundary = BoundaryState::for_topology(&self.topology);
        self.last_solution = None;
        match self.variant {
            CycleVariant::Regular => assign_regular(
                &self.topology,
                &mut self.boundary,
                &self.config,
                &self.properties,
                &self.point,
            ),
            CycleVariant::Intercooled(_) => assign_intercooled(
                &self.topology,
                &mut self.boundary,
                &self.config,
                &self.properties,
                &self.point,
            ),
            CycleVariant::InternalCondenser(_) => assign_internal_condenser(
                &self.topology,
                &mut self.boundary,
                &self.config,
                &self.properties,
                &self.point,
            ),
            CycleVariant::VaporInjection => assign_vapor_injection(
                &self.topology,
                &mut self.boundary,
                &self.config,
                &self.properties,
                &self.point,
            ),
        }
    }

    /// Move the study to a new operating point, reassigning every boundary
    /// condition from scratch.
    pub fn set_operating_point(&mut self, point: OperatingPoint) -> StudyResult<()> {
        self.point = point;
        self.assign_boundary()
    }

    /// Solve the cycle and retain the solution for derived quantities.
    ///
    /// The vapor-injection variant solves twice in design mode: once with
    /// provisional injection flows to stabilize the iteration, then with the
    /// final saturated-intake constraints. The retained solution is always
    /// the final one.
    pub fn solve(&mut self, mode: SolveMode) -> StudyResult<&Solution> {
        let solution = if matches!(self.variant, CycleVariant::VaporInjection)
            && mode == SolveMode::Design
        {
            let (p_cond, p_evap) = boundary::saturation_pressures(
                &self.properties,
                self.config.working_fluid,
                &self.point,
            )?;
            let n = self.config.stages;

            debug!(phase = ?InjectionPhase::ProvisionalInjection, "stabilizing solve");
            boundary::apply_injection_phase(
                &mut self.boundary,
                InjectionPhase::ProvisionalInjection,
                p_evap,
                p_cond,
                n,
            )?;
            self.engine.solve(&self.boundary, SolveMode::Design)?;

            debug!(phase = ?InjectionPhase::SaturatedIntake, "final solve");
            boundary::apply_injection_phase(
                &mut self.boundary,
                InjectionPhase::SaturatedIntake,
                p_evap,
                p_cond,
                n,
            )?;
            self.engine.solve(&self.boundary, SolveMode::Design)?
        } else {
            info!(mode = mode.as_str(), "solving cycle");
            self.engine.solve(&self.boundary, mode)?
        };
        Ok(&*self.last_solution.insert(solution))
    }

    /// Coefficient of performance of the last solve.
    ///
    /// Delivered heat is the consumer duty for the internal-condenser
    /// variant and the condenser duty otherwise; work is the net shaft power
    /// of all compression and expansion machines, so an expander's recovered
    /// work reduces the denominator.
    pub fn cop(&self) -> StudyResult<f64> {
        let solution = self.last_solution.as_ref().ok_or(StudyError::NotSolved)?;
        let heat_component = match self.variant {
            CycleVariant::InternalCondenser(_) => "consumer",
            _ => "condenser",
        };
        let heat_w = engine_units::power_w(solution.duty(heat_component)?).abs();

        let mut work_w = 0.0;
        for comp in self.topology.components() {
            if comp.kind.is_work_machine() {
                work_w += engine_units::power_w(solution.power(&comp.name)?);
            }
        }
        if !(work_w > 0.0) {
            return Err(StudyError::NonPositiveWork { work_w });
        }
        Ok(heat_w / work_w)
    }

    /// Process lines of the last solve, keyed by a plot label.
    ///
    /// Cycle closers and splitters carry no process line of their own and
    /// are skipped. Merges and two-stream exchangers other than the
    /// condenser contribute both streams, labelled `name_1` and `name_2`.
    pub fn results(&self) -> StudyResult<BTreeMap<String, Vec<StatePoint>>> {
        let solution = self.last_solution.as_ref().ok_or(StudyError::NotSolved)?;
        let mut lines = BTreeMap::new();
        for comp in self.topology.components() {
            if matches!(
                comp.kind,
                ComponentKind::CycleCloser | ComponentKind::Splitter
            ) {
                continue;
            }
            let result = solution.component(&comp.name)?;
            let two_stream = comp.kind == ComponentKind::Merge
                || (self.topology.has_second_stream(&comp.name) && comp.name != "condenser");
            if two_stream {
                for (i, stream) in result.streams.iter().take(2).enumerate() {
                    lines.insert(format!("{}_{}", comp.name, i + 1), stream.clone());
                }
            } else if let Some(stream) = result.streams.first() {
                lines.insert(comp.name.clone(), stream.clone());
            }
        }
        Ok(lines)
    }

    /// Sweep a grid of condensation/evaporation setpoints and collect the
    /// COP at each cell. Each cell is assigned and solved independently; the
    /// study returns to its original operating point afterwards.
    pub fn efficiency_matrix(
        &mut self,
        condensation_temps_c: &[f64],
        evaporation_temps_c: &[f64],
        mode: SolveMode,
    ) -> StudyResult<EfficiencyMatrix> {
        let original = self.point;
        let mut cop = Vec::with_capacity(condensation_temps_c.len() * evaporation_temps_c.len());
        for &t_cond in condensation_temps_c {
            for &t_evap in evaporation_temps_c {
                let point = OperatingPoint {
                    t_condenser_c: t_cond,
                    t_evaporator_c: t_evap,
                    t_consumer_c: original.t_consumer_c,
                };
                self.set_operating_point(point)?;
                self.solve(mode)?;
                cop.push(self.cop()?);
            }
        }
        self.set_operating_point(original)?;
        Ok(EfficiencyMatrix {
            condensation_temps_c: condensation_temps_c.to_vec(),
            evaporation_temps_c: evaporation_temps_c.to_vec(),
            cop,
        })
    }

    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    pub fn variant(&self) -> &CycleVariant {
        &self.variant
    }

    pub fn operating_point(&self) -> &OperatingPoint {
        &self.point
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn boundary(&self) -> &BoundaryState {
        &self.boundary
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn last_solution(&self) -> Option<&Solution> {
        self.last_solution.as_ref()
    }
}
