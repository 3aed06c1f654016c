//! Working fluid identifiers.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FluidError;

/// Fluids known to the study layer.
///
/// `R290` (propane) is the primary refrigerant; `Water` carries the consumer
/// loop of the internal-condenser variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    R290,
    R134a,
    Water,
}

impl Species {
    /// Identifier as understood by the external property service.
    pub fn name(self) -> &'static str {
        match self {
            Species::R290 => "R290",
            Species::R134a => "R134a",
            Species::Water => "water",
        }
    }
}

impl FromStr for Species {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R290" | "propane" => Ok(Species::R290),
            "R134a" => Ok(Species::R134a),
            "water" | "Water" => Ok(Species::Water),
            other => Err(FluidError::NotSupported {
                what: format!("fluid '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
