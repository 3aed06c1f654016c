//! Boundary-condition assignment per cycle variant.
//!
//! Saturation pressures come from the property service; everything else is
//! setpoints and heuristics mutated into the study's boundary registries.
//! Assignment never skips a missing name silently: a lookup against a
//! component or connection the topology does not declare fails with the
//! engine's name-resolution error.

use hps_core::units::{Pressure, bar, engine_units, kgps, watts};
use hps_engine::BoundaryState;
use hps_fluids::{PropertyModel, Species};
use hps_topology::{ExpansionDevice, Port, Topology, stage_name};

use crate::config::{OperatingPoint, StudyConfig};
use crate::error::{StudyError, StudyResult};

/// Pressure-ratio and guess constants shared by the variants.
const PR_EVAPORATOR: f64 = 0.98;
const PR_CONDENSER: f64 = 0.98;
const PR_INTERCOOLER: f64 = 0.995;
const PR_CONSUMER: f64 = 0.99;

/// Experimental starting value for the circulating mass flow [kg/s].
const M0_KG_S: f64 = 3.65e-2;

/// Wet-vapor margin at the expander intake. Expanders need a trace vapor
/// fraction to keep the turbine model out of its liquid-slug regime; this is
/// a deliberate compensation, not a tuning knob.
const EXPANDER_INTAKE_QUALITY: f64 = 0.01;
const EXPANDER_INTAKE_QUALITY_MULTISTAGE: f64 = 0.05;

/// Phases of the vapor-injection assignment. The true injection pressures
/// and flows are not known a priori and the system is numerically stiff, so
/// assignment runs as a fixed two-phase sequence; solving directly with the
/// final constraint set diverges for this topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionPhase {
    /// Provisional injection mass flows and interpolated pressures.
    ProvisionalInjection,
    /// Mass flows released; merge intakes pinned to saturated vapor.
    SaturatedIntake,
}

/// Saturation pressures at the condenser (liquid side) and evaporator
/// (vapor side) setpoints.
pub(crate) fn saturation_pressures<P: PropertyModel>(
    props: &P,
    fluid: Species,
    point: &OperatingPoint,
) -> StudyResult<(Pressure, Pressure)> {
    let p_cond = props.saturation_pressure(fluid, 0.0, point.t_condenser())?;
    let p_evap = props.saturation_pressure(fluid, 1.0, point.t_evaporator())?;
    Ok((p_cond, p_evap))
}

/// Linear discharge-pressure split across the compression stages:
/// p_i = p_evap + (p_cond - p_evap) * i / (N + 1).
///
/// A simplifying heuristic that spreads the pressure lift evenly; it is not
/// a thermodynamic optimum.
pub(crate) fn stage_pressure(p_evap: Pressure, p_cond: Pressure, i: usize, n: usize) -> Pressure {
    p_evap + (p_cond - p_evap) * (i as f64 / (n + 1) as f64)
}

/// Geometric interpolation for the provisional injection pressures:
/// p_k = p_evap * (p_cond / p_evap)^(k / (N + 1)).
pub(crate) fn injection_pressure(
    p_evap: Pressure,
    p_cond: Pressure,
    k: usize,
    n: usize,
) -> Pressure {
    let pe = engine_units::pressure_bar(p_evap);
    let pc = engine_units::pressure_bar(p_cond);
    bar(pe * (pc / pe).powf(k as f64 / (n + 1) as f64))
}

/// 1-based stage index of an indexed component name (`compressor_3` -> 3).
fn stage_index(name: &str, base: &str) -> Option<usize> {
    name.strip_prefix(base)?.strip_prefix('_')?.parse().ok()
}

fn expander_intake_quality(stages: usize) -> f64 {
    if stages > 1 {
        EXPANDER_INTAKE_QUALITY_MULTISTAGE
    } else {
        EXPANDER_INTAKE_QUALITY
    }
}

/// Regular single-stage cycle.
pub(crate) fn assign_regular<P: PropertyModel>(
    topology: &Topology,
    boundary: &mut BoundaryState,
    config: &StudyConfig,
    props: &P,
    point: &OperatingPoint,
) -> StudyResult<()> {
    let (p_cond, p_evap) = saturation_pressures(props, config.working_fluid, point)?;

    boundary.component_mut("evaporator")?.pressure_ratio = Some(PR_EVAPORATOR);
    let suction = topology.outlet_of("evaporator", Port::Out1)?;
    {
        let conn = boundary.connection_mut(&suction)?;
        conn.pressure = Some(p_evap);
        conn.quality = Some(1.0);
        conn.fluid = Some(config.working_fluid);
    }

    boundary.component_mut("compressor")?.isentropic_efficiency =
        Some(config.compressor_efficiency);

    {
        let condenser = boundary.component_mut("condenser")?;
        condenser.pressure_ratio = Some(PR_CONDENSER);
        condenser.heat_duty = Some(-config.heat_output());
    }

    let liquid_line = topology.outlet_of("condenser", Port::Out1)?;
    let conn = boundary.connection_mut(&liquid_line)?;
    conn.pressure = Some(p_cond);
    match config.expansion_device {
        ExpansionDevice::ExpansionValve => {
            conn.quality = Some(0.0);
        }
        ExpansionDevice::Expander => {
            conn.quality = Some(EXPANDER_INTAKE_QUALITY);
            boundary.component_mut("expander")?.isentropic_efficiency =
                Some(config.expander_efficiency);
        }
    }

    Ok(())
}

/// Intercooled multi-stage cycle.
pub(crate) fn assign_intercooled<P: PropertyModel>(
    topology: &Topology,
    boundary: &mut BoundaryState,
    config: &StudyConfig,
    props: &P,
    point: &OperatingPoint,
) -> StudyResult<()> {
    let n = config.stages;
    let (p_cond, p_evap) = saturation_pressures(props, config.working_fluid, point)?;

    boundary.component_mut("evaporator")?.pressure_ratio = Some(PR_EVAPORATOR);
    let suction = topology.outlet_of("evaporator", Port::Out1)?;
    {
        let conn = boundary.connection_mut(&suction)?;
        conn.pressure = Some(p_evap);
        conn.quality = Some(1.0);
        conn.fluid = Some(config.working_fluid);
    }

    for i in 1..=n + 1 {
        boundary
            .component_mut(&stage_name("compressor", i))?
            .isentropic_efficiency = Some(config.compressor_efficiency);
    }

    // Heat removed per intercooler: a guess proportional to the temperature
    // lift, only there to keep the solver on track.
    let intercooler_duty =
        -config.heat_output_w * (point.t_condenser_c - point.t_evaporator_c) / 1000.0 * 2.0;
    for j in 1..n {
        let hx = boundary.component_mut(&stage_name("intermediate_hx", j))?;
        hx.pressure_ratio_hot = Some(PR_INTERCOOLER);
        hx.pressure_ratio_cold = Some(PR_INTERCOOLER);
        hx.heat_duty = Some(watts(intercooler_duty));
    }

    // Split the pressure lift across the stages.
    let discharges = boundary.connection_keys_where(|k| k.source.starts_with("compressor_"));
    for key in discharges {
        if let Some(i) = stage_index(&key.source, "compressor") {
            boundary.connection_mut(&key)?.pressure = Some(stage_pressure(p_evap, p_cond, i, n));
        }
    }

    {
        let condenser = boundary.component_mut("condenser")?;
        condenser.pressure_ratio = Some(PR_CONDENSER);
        condenser.heat_duty = Some(-config.heat_output());
    }

    let liquid_line = topology.outlet_of("condenser", Port::Out1)?;
    match config.expansion_device {
        ExpansionDevice::ExpansionValve => {
            boundary.connection_mut(&liquid_line)?.quality = Some(0.0);
        }
        ExpansionDevice::Expander => {
            boundary.connection_mut(&liquid_line)?.quality = Some(expander_intake_quality(n));
            boundary.component_mut("expander")?.isentropic_efficiency =
                Some(config.expander_efficiency);
        }
    }

    Ok(())
}

/// Internally-coupled condenser cycle with consumer loop.
pub(crate) fn assign_internal_condenser<P: PropertyModel>(
    topology: &Topology,
    boundary: &mut BoundaryState,
    config: &StudyConfig,
    props: &P,
    point: &OperatingPoint,
) -> StudyResult<()> {
    let n = config.stages;
    let t_consumer = point
        .t_consumer_c
        .ok_or(StudyError::MissingConsumerTemperature)?;
    let (p_cond, p_evap) = saturation_pressures(props, config.working_fluid, point)?;

    boundary.component_mut("evaporator")?.pressure_ratio = Some(PR_EVAPORATOR);
    let suction = topology.outlet_of("evaporator", Port::Out1)?;
    {
        let conn = boundary.connection_mut(&suction)?;
        conn.pressure = Some(p_evap);
        conn.fluid = Some(config.working_fluid);
    }

    for i in 1..=n + 1 {
        boundary
            .component_mut(&stage_name("compressor", i))?
            .isentropic_efficiency = Some(config.compressor_efficiency);
    }
    for j in 1..n {
        let hx = boundary.component_mut(&stage_name("intermediate_hx", j))?;
        hx.pressure_ratio_hot = Some(PR_INTERCOOLER);
        hx.pressure_ratio_cold = Some(PR_INTERCOOLER);
    }

    // Discharge into the condenser arrives at condenser pressure, slightly
    // superheated so the pinch stays workable.
    let discharge = topology.outlet_of(&stage_name("compressor", n + 1), Port::Out1)?;
    {
        let conn = boundary.connection_mut(&discharge)?;
        conn.pressure = Some(p_cond);
        conn.temperature = Some(hps_core::units::celsius(point.t_condenser_c + 3.0));
    }

    // Saturated vapor at every compressor intake.
    let intakes = boundary.connection_keys_where(|k| k.target.starts_with("compressor_"));
    for key in intakes {
        boundary.connection_mut(&key)?.quality = Some(1.0);
    }

    {
        let condenser = boundary.component_mut("condenser")?;
        condenser.pressure_ratio_hot = Some(PR_CONDENSER);
        condenser.pressure_ratio_cold = Some(PR_CONDENSER);
    }

    let liquid_line = topology.outlet_of("condenser", Port::Out1)?;
    match config.expansion_device {
        ExpansionDevice::ExpansionValve => {
            boundary.connection_mut(&liquid_line)?.quality = Some(0.0);
        }
        ExpansionDevice::Expander => {
            boundary.connection_mut(&liquid_line)?.quality =
                Some(EXPANDER_INTAKE_QUALITY_MULTISTAGE);
            boundary.component_mut("expander")?.isentropic_efficiency =
                Some(config.expander_efficiency);
        }
    }

    // Consumer loop: water at 10 bar, preheated through the intercoolers.
    boundary.component_mut("consumer_pump")?.isentropic_efficiency = Some(1.0);
    let feed = topology.outlet_of("consumer_pump", Port::Out1)?;
    {
        let conn = boundary.connection_mut(&feed)?;
        conn.temperature = Some(hps_core::units::celsius(t_consumer - 10.0));
        conn.pressure = Some(bar(10.0));
        conn.fluid = Some(Species::Water);
    }
    let delivery = topology.outlet_of("condenser", Port::Out2)?;
    boundary.connection_mut(&delivery)?.temperature = Some(hps_core::units::celsius(t_consumer));
    {
        let consumer = boundary.component_mut("consumer")?;
        consumer.pressure_ratio = Some(PR_CONSUMER);
        consumer.heat_duty = Some(-config.heat_output());
    }

    Ok(())
}

/// Apply one phase of the vapor-injection assignment.
pub(crate) fn apply_injection_phase(
    boundary: &mut BoundaryState,
    phase: InjectionPhase,
    p_evap: Pressure,
    p_cond: Pressure,
    n: usize,
) -> StudyResult<()> {
    let cross = boundary
        .connection_keys_where(|k| k.source.starts_with("splitter") && k.target.starts_with("merge"));

    match phase {
        InjectionPhase::ProvisionalInjection => {
            // Release any saturated-intake pins left by a previous sequence;
            // the stabilizing solve runs without them.
            let intakes = boundary.connection_keys_where(|k| {
                k.source.starts_with("merge") && k.target.starts_with("compressor")
            });
            for key in intakes {
                boundary.connection_mut(&key)?.quality = None;
            }
            for key in cross {
                let Some(k) = stage_index(&key.target, "merge") else {
                    continue;
                };
                let conn = boundary.connection_mut(&key)?;
                conn.pressure = Some(injection_pressure(p_evap, p_cond, k, n));
                conn.mass_flow = Some(kgps(M0_KG_S / 10.0 / n as f64));
            }
        }
        InjectionPhase::SaturatedIntake => {
            for key in cross {
                boundary.connection_mut(&key)?.mass_flow = None;
            }
            let intakes = boundary.connection_keys_where(|k| {
                k.source.starts_with("merge") && k.target.starts_with("compressor")
            });
            for key in intakes {
                boundary.connection_mut(&key)?.quality = Some(1.0);
            }
        }
    }
    Ok(())
}

/// Vapor-injection economizer cycle: the phase-independent constraints.
///
/// The injection constraints themselves arrive through
/// [`apply_injection_phase`]; the study runs the two-phase solve sequence.
pub(crate) fn assign_vapor_injection<P: PropertyModel>(
    topology: &Topology,
    boundary: &mut BoundaryState,
    config: &StudyConfig,
    props: &P,
    point: &OperatingPoint,
) -> StudyResult<()> {
    let n = config.stages;
    let (_, p_evap) = saturation_pressures(props, config.working_fluid, point)?;
    let m0 = kgps(M0_KG_S);

    boundary.component_mut("evaporator")?.pressure_ratio = Some(PR_EVAPORATOR);
    let suction = topology.outlet_of("evaporator", Port::Out1)?;
    {
        let conn = boundary.connection_mut(&suction)?;
        conn.quality = Some(1.0);
        conn.pressure = Some(p_evap);
        conn.mass_flow_guess = Some(m0);
        conn.fluid = Some(config.working_fluid);
    }

    for i in 1..=n + 1 {
        boundary
            .component_mut(&stage_name("compressor", i))?
            .isentropic_efficiency = Some(config.compressor_efficiency);
        if config.expansion_device == ExpansionDevice::Expander {
            boundary
                .component_mut(&stage_name("expander", i))?
                .isentropic_efficiency = Some(config.expander_efficiency);
        }
    }

    // Pin the condenser feed close to the condensation temperature to keep
    // the last stage's temperature difference small.
    let discharge = topology.outlet_of(&stage_name("compressor", n + 1), Port::Out1)?;
    {
        let conn = boundary.connection_mut(&discharge)?;
        conn.mass_flow = Some(m0);
        conn.temperature = Some(hps_core::units::celsius(point.t_condenser_c + 5.0));
    }

    boundary.component_mut("condenser")?.pressure_ratio = Some(PR_CONDENSER);

    let liquid_line = topology.outlet_of("condenser", Port::Out1)?;
    match config.expansion_device {
        ExpansionDevice::ExpansionValve => {
            boundary.connection_mut(&liquid_line)?.quality = Some(0.0);
        }
        ExpansionDevice::Expander => {
            boundary.connection_mut(&liquid_line)?.quality =
                Some(EXPANDER_INTAKE_QUALITY_MULTISTAGE);
        }
    }

    Ok(())
}
