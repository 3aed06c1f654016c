//! Cycle variants and shared configuration enums.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builder::Topology;
use crate::decl::ComponentKind;
use crate::error::{TopologyError, TopologyResult};
use crate::{intercooled, internal_condenser, regular, vapor_injection};

/// Device on the expansion side of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpansionDevice {
    ExpansionValve,
    Expander,
}

impl ExpansionDevice {
    /// Component base name used in topologies (`expansionValve_2`, `expander`).
    pub fn base_name(self) -> &'static str {
        match self {
            ExpansionDevice::ExpansionValve => "expansionValve",
            ExpansionDevice::Expander => "expander",
        }
    }

    pub fn component_kind(self) -> ComponentKind {
        match self {
            ExpansionDevice::ExpansionValve => ComponentKind::Valve,
            ExpansionDevice::Expander => ComponentKind::Turbine,
        }
    }
}

impl FromStr for ExpansionDevice {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expansionValve" => Ok(ExpansionDevice::ExpansionValve),
            "expander" => Ok(ExpansionDevice::Expander),
            other => Err(TopologyError::InvalidConfiguration {
                what: format!(
                    "expansion_device must be 'expansionValve' or 'expander', got '{other}'"
                ),
            }),
        }
    }
}

impl fmt::Display for ExpansionDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_name())
    }
}

/// Hot-side routing order of the intermediate exchangers relative to the
/// compression stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExchangeDirection {
    /// Stage i discharges into exchanger N-i (reversed index).
    #[default]
    Counterflow,
    /// Stage i discharges into exchanger i.
    ParallelFlow,
}

impl FromStr for ExchangeDirection {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counterflow" => Ok(ExchangeDirection::Counterflow),
            "parallel_flow" => Ok(ExchangeDirection::ParallelFlow),
            other => Err(TopologyError::InvalidConfiguration {
                what: format!(
                    "exchange_direction must be 'counterflow' or 'parallel_flow', got '{other}'"
                ),
            }),
        }
    }
}

/// The supported cycle shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleVariant {
    /// Fixed single-stage cycle; the stage count is ignored.
    Regular,
    /// Multi-stage compression with inter-stage heat removal.
    Intercooled(ExchangeDirection),
    /// Intercooled train with a two-stream condenser fed by a consumer loop.
    InternalCondenser(ExchangeDirection),
    /// Economizer cycle recovering flash gas into the compression train.
    VaporInjection,
}

/// Build the component/connection graph for one cycle variant.
///
/// `n` is the stage count (N >= 1). The returned topology is deterministic
/// for identical inputs and guaranteed internally consistent: every
/// connection endpoint names a declared component.
pub fn build_topology(
    n: usize,
    device: ExpansionDevice,
    variant: &CycleVariant,
) -> TopologyResult<Topology> {
    if n == 0 {
        return Err(TopologyError::InvalidConfiguration {
            what: "stage count must be at least 1".into(),
        });
    }

    match variant {
        CycleVariant::Regular => regular::build(device),
        CycleVariant::Intercooled(direction) => intercooled::build(n, device, *direction),
        CycleVariant::InternalCondenser(direction) => {
            internal_condenser::build(n, device, *direction)
        }
        CycleVariant::VaporInjection => vapor_injection::build(n, device),
    }
}
