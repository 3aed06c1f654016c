//! Study configuration and operating points.

use hps_core::numeric::{ensure_finite, ensure_positive};
use hps_core::units::{Power, Temperature, celsius, watts};
use hps_fluids::Species;
use hps_topology::{CycleVariant, ExpansionDevice};
use serde::{Deserialize, Serialize};

use crate::error::{StudyError, StudyResult};

/// Study-level parameters, fixed for the lifetime of one study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Stage count N of the multi-stage variants.
    #[serde(default = "default_stages")]
    pub stages: usize,

    /// Target heat delivery [W].
    #[serde(default = "default_heat_output_w")]
    pub heat_output_w: f64,

    #[serde(default = "default_working_fluid")]
    pub working_fluid: Species,

    /// Isentropic efficiency applied uniformly to all compressor stages.
    #[serde(default = "default_efficiency")]
    pub compressor_efficiency: f64,

    /// Isentropic efficiency applied uniformly to all expander stages.
    #[serde(default = "default_efficiency")]
    pub expander_efficiency: f64,

    #[serde(default = "default_expansion_device")]
    pub expansion_device: ExpansionDevice,
}

fn default_stages() -> usize {
    1
}

fn default_heat_output_w() -> f64 {
    8e3
}

fn default_working_fluid() -> Species {
    Species::R290
}

fn default_efficiency() -> f64 {
    0.8
}

fn default_expansion_device() -> ExpansionDevice {
    ExpansionDevice::ExpansionValve
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            stages: default_stages(),
            heat_output_w: default_heat_output_w(),
            working_fluid: default_working_fluid(),
            compressor_efficiency: default_efficiency(),
            expander_efficiency: default_efficiency(),
            expansion_device: default_expansion_device(),
        }
    }
}

impl StudyConfig {
    pub fn validate(&self) -> StudyResult<()> {
        if self.stages == 0 {
            return Err(StudyError::InvalidConfiguration {
                what: "stages must be at least 1".into(),
            });
        }
        for (name, eta) in [
            ("compressor_efficiency", self.compressor_efficiency),
            ("expander_efficiency", self.expander_efficiency),
        ] {
            if !(eta > 0.0 && eta <= 1.0) {
                return Err(StudyError::InvalidConfiguration {
                    what: format!("{name} must lie in (0, 1], got {eta}"),
                });
            }
        }
        ensure_positive(self.heat_output_w, "heat_output_w")?;
        Ok(())
    }

    pub fn heat_output(&self) -> Power {
        watts(self.heat_output_w)
    }
}

/// Condenser/evaporator (and optional consumer) setpoint temperatures [°C].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    pub t_condenser_c: f64,
    pub t_evaporator_c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_consumer_c: Option<f64>,
}

impl OperatingPoint {
    pub fn new(t_condenser_c: f64, t_evaporator_c: f64) -> Self {
        Self {
            t_condenser_c,
            t_evaporator_c,
            t_consumer_c: None,
        }
    }

    pub fn with_consumer(mut self, t_consumer_c: f64) -> Self {
        self.t_consumer_c = Some(t_consumer_c);
        self
    }

    /// Historical default setpoints per variant.
    pub fn default_for(variant: &CycleVariant) -> Self {
        match variant {
            CycleVariant::Regular => Self::new(80.0, 20.0),
            CycleVariant::Intercooled(_) | CycleVariant::VaporInjection => Self::new(80.0, -10.0),
            CycleVariant::InternalCondenser(_) => Self::new(80.0, -10.0).with_consumer(60.0),
        }
    }

    pub fn validate(&self) -> StudyResult<()> {
        ensure_finite(self.t_condenser_c, "t_condenser_c")?;
        ensure_finite(self.t_evaporator_c, "t_evaporator_c")?;
        if let Some(t) = self.t_consumer_c {
            ensure_finite(t, "t_consumer_c")?;
        }
        Ok(())
    }

    pub fn t_condenser(&self) -> Temperature {
        celsius(self.t_condenser_c)
    }

    pub fn t_evaporator(&self) -> Temperature {
        celsius(self.t_evaporator_c)
    }
}
