//! Facade-level tests of the regular and intercooled cycles against a
//! scripted engine and the correlation-based property service.

use approx::assert_relative_eq;
use hps_core::units::{engine_units, watts};
use hps_engine::{ComponentResult, ScriptedEngine, Solution, SolveMode};
use hps_fluids::{AntoineModel, Species};
use hps_study::{HeatPumpStudy, OperatingPoint, StudyConfig, StudyError};
use hps_topology::{ConnKey, CycleVariant, ExchangeDirection, ExpansionDevice};

fn result_with_duty(duty_w: f64) -> ComponentResult {
    ComponentResult {
        duty: Some(watts(duty_w)),
        ..Default::default()
    }
}

fn result_with_power(power_w: f64) -> ComponentResult {
    ComponentResult {
        power: Some(watts(power_w)),
        ..Default::default()
    }
}

#[test]
fn regular_boundary_pins_both_saturation_pressures() {
    let study = HeatPumpStudy::new(
        StudyConfig::default(),
        CycleVariant::Regular,
        ScriptedEngine::new(),
        AntoineModel::new(),
    )
    .unwrap();

    // R290 at the default 80/20 setpoints
    let suction = study
        .boundary()
        .connection(&ConnKey::new("evaporator", "compressor"))
        .unwrap();
    assert_relative_eq!(
        engine_units::pressure_bar(suction.pressure.unwrap()),
        8.36,
        max_relative = 0.02
    );
    assert_eq!(suction.quality, Some(1.0));
    assert_eq!(suction.fluid, Some(Species::R290));

    let liquid = study
        .boundary()
        .connection(&ConnKey::new("condenser", "expansionValve"))
        .unwrap();
    assert_relative_eq!(
        engine_units::pressure_bar(liquid.pressure.unwrap()),
        31.6,
        max_relative = 0.02
    );
    assert_eq!(liquid.quality, Some(0.0));

    let condenser = study.boundary().component("condenser").unwrap();
    assert_eq!(condenser.heat_duty, Some(watts(-8000.0)));
    assert_eq!(condenser.pressure_ratio, Some(0.98));

    let compressor = study.boundary().component("compressor").unwrap();
    assert_eq!(compressor.isentropic_efficiency, Some(0.8));
}

#[test]
fn expander_gets_efficiency_and_wet_intake() {
    let config = StudyConfig {
        expansion_device: ExpansionDevice::Expander,
        expander_efficiency: 0.75,
        ..Default::default()
    };
    let study = HeatPumpStudy::new(
        config,
        CycleVariant::Regular,
        ScriptedEngine::new(),
        AntoineModel::new(),
    )
    .unwrap();

    let expander = study.boundary().component("expander").unwrap();
    assert_eq!(expander.isentropic_efficiency, Some(0.75));

    let liquid = study
        .boundary()
        .connection(&ConnKey::new("condenser", "expander"))
        .unwrap();
    assert_eq!(liquid.quality, Some(0.01));
}

#[test]
fn intercooled_stage_pressures_increase_to_condensation() {
    let config = StudyConfig {
        stages: 3,
        ..Default::default()
    };
    let study = HeatPumpStudy::new(
        config,
        CycleVariant::Intercooled(ExchangeDirection::Counterflow),
        ScriptedEngine::new(),
        AntoineModel::new(),
    )
    .unwrap();

    // Discharge pressures of stages 1..4, regardless of what each stage
    // feeds into.
    let mut pressures = Vec::new();
    for (key, state) in study.boundary().connections() {
        if key.source.starts_with("compressor_") {
            pressures.push((
                key.source.clone(),
                engine_units::pressure_bar(state.pressure.unwrap()),
            ));
        }
    }
    pressures.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(pressures.len(), 4);
    for pair in pressures.windows(2) {
        assert!(pair[1].1 > pair[0].1, "{pair:?}");
    }

    // The trailing stage discharges at condensation pressure (R290, 80 °C).
    assert_relative_eq!(pressures[3].1, 31.6, max_relative = 0.02);

    // Intercooler duty guesses are heat removal.
    let hx = study.boundary().component("intermediate_hx_1").unwrap();
    assert!(engine_units::power_w(hx.heat_duty.unwrap()) < 0.0);
    assert_eq!(hx.pressure_ratio_hot, Some(0.995));
    assert_eq!(hx.pressure_ratio_cold, Some(0.995));
}

#[test]
fn internal_condenser_requires_consumer_temperature() {
    let mut study = HeatPumpStudy::new(
        StudyConfig {
            stages: 2,
            ..Default::default()
        },
        CycleVariant::InternalCondenser(ExchangeDirection::Counterflow),
        ScriptedEngine::new(),
        AntoineModel::new(),
    )
    .unwrap();

    let err = study
        .set_operating_point(OperatingPoint::new(80.0, -10.0))
        .unwrap_err();
    assert!(matches!(err, StudyError::MissingConsumerTemperature));
}

#[test]
fn internal_condenser_feeds_water_loop() {
    let study = HeatPumpStudy::new(
        StudyConfig {
            stages: 2,
            ..Default::default()
        },
        CycleVariant::InternalCondenser(ExchangeDirection::Counterflow),
        ScriptedEngine::new(),
        AntoineModel::new(),
    )
    .unwrap();

    assert_eq!(
        study.engine().fluids(),
        &[Species::R290, Species::Water]
    );

    // Pump outlet: water, 10 bar, ten kelvin below the consumer setpoint.
    let feed = study
        .boundary()
        .connection(&ConnKey::new("consumer_pump", "intermediate_hx_1"))
        .unwrap();
    assert_eq!(feed.fluid, Some(Species::Water));
    assert_relative_eq!(engine_units::pressure_bar(feed.pressure.unwrap()), 10.0);
    assert_relative_eq!(
        engine_units::temperature_c(feed.temperature.unwrap()),
        50.0,
        epsilon = 1e-9
    );

    let delivery = study
        .boundary()
        .connection(&ConnKey::new("condenser", "consumer"))
        .unwrap();
    assert_relative_eq!(
        engine_units::temperature_c(delivery.temperature.unwrap()),
        60.0,
        epsilon = 1e-9
    );

    let consumer = study.boundary().component("consumer").unwrap();
    assert_eq!(consumer.heat_duty, Some(watts(-8000.0)));
    assert_eq!(consumer.pressure_ratio, Some(0.99));
}

#[test]
fn efficiency_matrix_sweeps_every_cell_independently() {
    let mut solution = Solution::new();
    solution.insert("condenser", result_with_duty(-8000.0));
    solution.insert("compressor", result_with_power(2500.0));
    let engine = ScriptedEngine::with_fallback(solution);

    let mut study = HeatPumpStudy::new(
        StudyConfig::default(),
        CycleVariant::Regular,
        engine,
        AntoineModel::new(),
    )
    .unwrap();

    let cond = [50.0, 60.0];
    let evap = [-10.0, 0.0, 10.0];
    let matrix = study
        .efficiency_matrix(&cond, &evap, SolveMode::Design)
        .unwrap();

    assert_eq!(matrix.rows(), 2);
    assert_eq!(matrix.cols(), 3);
    assert_eq!(matrix.cop.len(), 6);
    for i in 0..2 {
        for j in 0..3 {
            assert_relative_eq!(matrix.get(i, j).unwrap(), 3.2);
        }
    }

    // One solve per cell, each against a freshly assigned boundary.
    assert_eq!(study.engine().solves.len(), 6);
    let first = &study.engine().solves[0];
    let suction = first
        .boundary
        .connection(&ConnKey::new("evaporator", "compressor"))
        .unwrap();
    // First cell is (50, -10): propane saturation well below the 80/20
    // default assignment.
    assert!(engine_units::pressure_bar(suction.pressure.unwrap()) < 8.0);

    // The study returns to its original point afterwards.
    assert_eq!(study.operating_point().t_condenser_c, 80.0);
    assert_eq!(study.operating_point().t_evaporator_c, 20.0);
}

#[test]
fn regular_cop_stays_below_the_carnot_limit() {
    let mut solution = Solution::new();
    solution.insert("condenser", result_with_duty(-8000.0));
    solution.insert("compressor", result_with_power(2000.0));
    let mut engine = ScriptedEngine::new();
    engine.enqueue(solution);

    let mut study = HeatPumpStudy::new(
        StudyConfig::default(),
        CycleVariant::Regular,
        engine,
        AntoineModel::new(),
    )
    .unwrap();
    study.solve(SolveMode::Design).unwrap();

    let cop = study.cop().unwrap();
    assert!(cop.is_finite() && cop > 0.0);
    // Carnot limit at the default 80/20 setpoints: 353.15 / 60
    let carnot = (80.0 + 273.15) / (80.0 - 20.0);
    assert!(cop < carnot, "{cop} >= {carnot}");
}

#[test]
fn cop_surfaces_missing_power_as_engine_error() {
    let mut solution = Solution::new();
    solution.insert("condenser", result_with_duty(-8000.0));
    // compressor present but with no power result
    solution.insert("compressor", ComponentResult::default());
    let mut engine = ScriptedEngine::new();
    engine.enqueue(solution);

    let mut study = HeatPumpStudy::new(
        StudyConfig::default(),
        CycleVariant::Regular,
        engine,
        AntoineModel::new(),
    )
    .unwrap();
    study.solve(SolveMode::Design).unwrap();
    assert!(matches!(study.cop().unwrap_err(), StudyError::Engine(_)));
}

#[test]
fn zero_work_is_rejected() {
    let mut solution = Solution::new();
    solution.insert("condenser", result_with_duty(-8000.0));
    solution.insert("compressor", result_with_power(0.0));
    let mut engine = ScriptedEngine::new();
    engine.enqueue(solution);

    let mut study = HeatPumpStudy::new(
        StudyConfig::default(),
        CycleVariant::Regular,
        engine,
        AntoineModel::new(),
    )
    .unwrap();
    study.solve(SolveMode::Design).unwrap();
    assert!(matches!(
        study.cop().unwrap_err(),
        StudyError::NonPositiveWork { .. }
    ));
}
