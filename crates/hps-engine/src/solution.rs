//! Solved results handed back by the engine.

use std::collections::BTreeMap;

use hps_core::units::Power;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One state point on a process line, in engine-normalized units
/// (bar, °C, kJ/kg, kJ/(kg·K)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    pub pressure_bar: f64,
    pub temperature_c: f64,
    pub enthalpy_kj_per_kg: f64,
    pub entropy_kj_per_kg_k: f64,
}

/// Post-solve results for one component.
///
/// `streams` holds the plotting-relevant process lines: one entry for a
/// single-stream device, two for a two-stream exchanger or a merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentResult {
    pub duty: Option<Power>,
    pub power: Option<Power>,
    pub streams: Vec<Vec<StatePoint>>,
}

/// A converged solution: per-component results keyed by component name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    results: BTreeMap<String, ComponentResult>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, result: ComponentResult) {
        self.results.insert(name.into(), result);
    }

    pub fn component(&self, name: &str) -> EngineResult<&ComponentResult> {
        self.results
            .get(name)
            .ok_or_else(|| EngineError::UnknownComponent {
                name: name.to_string(),
            })
    }

    /// Heat duty of a component; an error if the solve left it undefined.
    pub fn duty(&self, name: &str) -> EngineResult<Power> {
        self.component(name)?
            .duty
            .ok_or_else(|| EngineError::MissingResult {
                name: name.to_string(),
                what: "heat duty",
            })
    }

    /// Shaft power of a component; an error if the solve left it undefined.
    pub fn power(&self, name: &str) -> EngineResult<Power> {
        self.component(name)?
            .power
            .ok_or_else(|| EngineError::MissingResult {
                name: name.to_string(),
                what: "power",
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ComponentResult)> {
        self.results.iter()
    }
}
