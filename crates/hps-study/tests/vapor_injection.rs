//! The vapor-injection variant's two-phase solve sequence, observed through
//! the scripted engine's call records.

use approx::assert_relative_eq;
use hps_core::units::{engine_units, kgps, watts};
use hps_engine::{ComponentResult, ScriptedEngine, Solution, SolveMode, StatePoint};
use hps_fluids::AntoineModel;
use hps_study::{HeatPumpStudy, StudyConfig};
use hps_topology::{ConnKey, CycleVariant, stage_name};

fn vi_study(stages: usize) -> HeatPumpStudy<ScriptedEngine, AntoineModel> {
    let config = StudyConfig {
        stages,
        ..Default::default()
    };
    HeatPumpStudy::new(
        config,
        CycleVariant::VaporInjection,
        ScriptedEngine::with_fallback(Solution::new()),
        AntoineModel::new(),
    )
    .unwrap()
}

#[test]
fn design_solve_runs_the_two_phase_sequence() {
    let n = 2;
    let mut study = vi_study(n);
    study.solve(SolveMode::Design).unwrap();

    let solves = &study.engine().solves;
    assert_eq!(solves.len(), 2);
    assert!(solves.iter().all(|s| s.mode == SolveMode::Design));

    // Phase one: every cross connection carries a provisional flow at an
    // interpolated pressure.
    let first = &solves[0].boundary;
    for k in 1..=n {
        let key = ConnKey::new(stage_name("splitter", k), stage_name("merge", n - k + 1));
        let cross = first.connection(&key).unwrap();
        assert_eq!(cross.mass_flow, Some(kgps(3.65e-2 / 10.0 / n as f64)));
        let p = engine_units::pressure_bar(cross.pressure.unwrap());
        assert!(p > 0.0);
    }

    // Phase two: flows released, merge outlets pinned to saturated vapor.
    let second = &solves[1].boundary;
    for k in 1..=n {
        let key = ConnKey::new(stage_name("splitter", k), stage_name("merge", n - k + 1));
        assert_eq!(second.connection(&key).unwrap().mass_flow, None);

        let intake = ConnKey::new(stage_name("merge", k), stage_name("compressor", k + 1));
        assert_eq!(second.connection(&intake).unwrap().quality, Some(1.0));
    }
}

#[test]
fn provisional_pressures_interpolate_between_the_saturation_levels() {
    let n = 3;
    let mut study = vi_study(n);
    study.solve(SolveMode::Design).unwrap();

    let first = &study.engine().solves[0].boundary;
    let p_evap = engine_units::pressure_bar(
        first
            .connection(&ConnKey::new("evaporator", "compressor_1"))
            .unwrap()
            .pressure
            .unwrap(),
    );

    let mut last = p_evap;
    for j in 1..=n {
        // merge_j sits after compression stage j; its injection arrives
        // from splitter_{n-j+1}
        let key = ConnKey::new(stage_name("splitter", n - j + 1), stage_name("merge", j));
        let p = engine_units::pressure_bar(first.connection(&key).unwrap().pressure.unwrap());
        assert!(p > last, "merge_{j}: {p} <= {last}");
        last = p;
    }
}

#[test]
fn discharge_is_pinned_above_condensation_temperature() {
    let n = 2;
    let study = vi_study(n);

    let discharge = study
        .boundary()
        .connection(&ConnKey::new(stage_name("compressor", n + 1), "condenser"))
        .unwrap();
    assert_eq!(discharge.mass_flow, Some(kgps(3.65e-2)));
    // Default condensation setpoint is 80 °C
    assert_relative_eq!(
        engine_units::temperature_c(discharge.temperature.unwrap()),
        85.0,
        epsilon = 1e-9
    );

    let suction = study
        .boundary()
        .connection(&ConnKey::new("evaporator", "compressor_1"))
        .unwrap();
    assert_eq!(suction.mass_flow_guess, Some(kgps(3.65e-2)));
    assert_eq!(suction.quality, Some(1.0));
}

#[test]
fn repeated_design_solves_restart_the_sequence_cleanly() {
    let n = 2;
    let mut study = vi_study(n);
    study.solve(SolveMode::Design).unwrap();
    study.solve(SolveMode::Design).unwrap();

    let solves = &study.engine().solves;
    assert_eq!(solves.len(), 4);

    // The second sequence's stabilizing solve carries provisional flows
    // only; the saturated-intake pins of the first sequence are gone.
    let third = &solves[2].boundary;
    for k in 1..=n {
        let cross = ConnKey::new(stage_name("splitter", k), stage_name("merge", n - k + 1));
        assert!(third.connection(&cross).unwrap().mass_flow.is_some());

        let intake = ConnKey::new(stage_name("merge", k), stage_name("compressor", k + 1));
        assert_eq!(third.connection(&intake).unwrap().quality, None);
    }

    // And the closing solve pins the intakes again.
    let fourth = &solves[3].boundary;
    for k in 1..=n {
        let cross = ConnKey::new(stage_name("splitter", k), stage_name("merge", n - k + 1));
        assert_eq!(fourth.connection(&cross).unwrap().mass_flow, None);

        let intake = ConnKey::new(stage_name("merge", k), stage_name("compressor", k + 1));
        assert_eq!(fourth.connection(&intake).unwrap().quality, Some(1.0));
    }
}

#[test]
fn off_design_solves_once_with_the_standing_constraints() {
    let mut study = vi_study(2);
    study.solve(SolveMode::Design).unwrap();
    study.solve(SolveMode::OffDesign).unwrap();

    let solves = &study.engine().solves;
    assert_eq!(solves.len(), 3);
    assert_eq!(solves[2].mode, SolveMode::OffDesign);
}

#[test]
fn cop_sums_every_compression_stage() {
    let n = 2;
    let mut solution = Solution::new();
    solution.insert(
        "condenser",
        ComponentResult {
            duty: Some(watts(-9000.0)),
            ..Default::default()
        },
    );
    for i in 1..=n + 1 {
        solution.insert(
            stage_name("compressor", i),
            ComponentResult {
                power: Some(watts(1000.0)),
                ..Default::default()
            },
        );
    }

    let mut study = HeatPumpStudy::new(
        StudyConfig {
            stages: n,
            ..Default::default()
        },
        CycleVariant::VaporInjection,
        ScriptedEngine::with_fallback(solution),
        AntoineModel::new(),
    )
    .unwrap();
    study.solve(SolveMode::Design).unwrap();
    assert_relative_eq!(study.cop().unwrap(), 3.0);
}

#[test]
fn results_label_merge_streams_and_skip_splitters() {
    let n = 1;
    let point = |p: f64| StatePoint {
        pressure_bar: p,
        temperature_c: 20.0,
        enthalpy_kj_per_kg: 400.0,
        entropy_kj_per_kg_k: 1.8,
    };

    let mut solution = Solution::new();
    let names = [
        "evaporator",
        "compressor_1",
        "compressor_2",
        "merge_1",
        "condenser",
        "expansionValve_1",
        "expansionValve_2",
        "splitter_1",
        "cycle_closer",
    ];
    for name in names {
        let streams = if name == "merge_1" {
            vec![vec![point(5.0)], vec![point(6.0)]]
        } else {
            vec![vec![point(1.0)]]
        };
        solution.insert(
            name,
            ComponentResult {
                streams,
                ..Default::default()
            },
        );
    }

    let mut engine = ScriptedEngine::with_fallback(Solution::new());
    engine.enqueue(Solution::new());
    engine.enqueue(solution);

    let mut study = HeatPumpStudy::new(
        StudyConfig {
            stages: n,
            ..Default::default()
        },
        CycleVariant::VaporInjection,
        engine,
        AntoineModel::new(),
    )
    .unwrap();
    study.solve(SolveMode::Design).unwrap();

    let lines = study.results().unwrap();
    assert!(lines.contains_key("merge_1_1"));
    assert!(lines.contains_key("merge_1_2"));
    assert!(lines.contains_key("condenser"));
    assert!(lines.contains_key("compressor_2"));
    assert!(!lines.contains_key("merge_1"));
    assert!(!lines.contains_key("splitter_1"));
    assert!(!lines.contains_key("cycle_closer"));
}
