//! Efficiency-matrix sweep results.

use hps_core::numeric::{Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};

/// COP over a grid of condensation/evaporation setpoints, row-major with one
/// row per condensation temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyMatrix {
    pub condensation_temps_c: Vec<f64>,
    pub evaporation_temps_c: Vec<f64>,
    pub cop: Vec<f64>,
}

impl EfficiencyMatrix {
    /// COP at condensation row `i`, evaporation column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if j >= self.evaporation_temps_c.len() {
            return None;
        }
        self.cop.get(i * self.evaporation_temps_c.len() + j).copied()
    }

    pub fn rows(&self) -> usize {
        self.condensation_temps_c.len()
    }

    pub fn cols(&self) -> usize {
        self.evaporation_temps_c.len()
    }
}

/// Inclusive temperature range with a fixed step, in °C.
///
/// The stop value is included when the step lands on it exactly.
pub fn temperature_range(start_c: f64, stop_c: f64, step_c: f64) -> Vec<f64> {
    if step_c <= 0.0 || stop_c < start_c {
        return Vec::new();
    }
    let count = ((stop_c - start_c) / step_c).round() as usize;
    let tol = Tolerances::default();
    let mut temps = Vec::with_capacity(count + 1);
    let mut i = 0usize;
    loop {
        let t = start_c + i as f64 * step_c;
        if t > stop_c && !nearly_equal(t, stop_c, tol) {
            break;
        }
        temps.push(t);
        i += 1;
    }
    temps
}

/// Historically surveyed condensation setpoints [°C].
pub fn default_condensation_temps() -> Vec<f64> {
    temperature_range(50.0, 70.0, 5.0)
}

/// Historically surveyed evaporation setpoints [°C].
pub fn default_evaporation_temps() -> Vec<f64> {
    temperature_range(-10.0, 10.0, 5.0)
}
