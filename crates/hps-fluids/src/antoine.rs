//! Antoine-correlation property backend.
//!
//! log10(p_bar) = A - B / (T_K + C), with tabulated coefficient rows per
//! species. Each row carries its validity range; a temperature outside every
//! row is an `OutOfRange` error, never an extrapolation. Rows are ordered by
//! preference, so overlapping ranges resolve to the first (most accurate)
//! set.

use hps_core::units::{Pressure, Temperature, bar, engine_units};

use crate::error::{FluidError, FluidResult};
use crate::model::PropertyModel;
use crate::species::Species;

/// One Antoine coefficient set with its validity window [K].
#[derive(Debug, Clone, Copy)]
struct AntoineRow {
    t_min_k: f64,
    t_max_k: f64,
    a: f64,
    b: f64,
    c: f64,
}

impl AntoineRow {
    fn pressure_bar(&self, t_k: f64) -> f64 {
        10f64.powf(self.a - self.b / (t_k + self.c))
    }
}

// Propane: Kemp & Egan (277.6-360.8 K) preferred, Helgeson & Sage below.
const R290_ROWS: &[AntoineRow] = &[
    AntoineRow {
        t_min_k: 277.6,
        t_max_k: 360.8,
        a: 4.53678,
        b: 1149.36,
        c: 24.906,
    },
    AntoineRow {
        t_min_k: 230.6,
        t_max_k: 320.7,
        a: 3.98292,
        b: 819.296,
        c: -24.417,
    },
];

// R134a: fitted to saturation data between -33 and 87 degC (within ~2.5%).
const R134A_ROWS: &[AntoineRow] = &[AntoineRow {
    t_min_k: 240.0,
    t_max_k: 360.0,
    a: 4.2420,
    b: 906.6,
    c: -33.0,
}];

// Water: Stull up to the normal boiling point, Liu & Lindsay above.
const WATER_ROWS: &[AntoineRow] = &[
    AntoineRow {
        t_min_k: 255.9,
        t_max_k: 373.0,
        a: 4.6543,
        b: 1435.264,
        c: -64.848,
    },
    AntoineRow {
        t_min_k: 373.0,
        t_max_k: 573.0,
        a: 3.55959,
        b: 643.748,
        c: -198.043,
    },
];

/// Antoine saturation-pressure model.
///
/// Deterministic and dependency-free, which also makes it the property
/// backend of choice in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AntoineModel;

impl AntoineModel {
    pub fn new() -> Self {
        Self
    }

    fn rows(species: Species) -> &'static [AntoineRow] {
        match species {
            Species::R290 => R290_ROWS,
            Species::R134a => R134A_ROWS,
            Species::Water => WATER_ROWS,
        }
    }
}

impl PropertyModel for AntoineModel {
    fn saturation_pressure(
        &self,
        species: Species,
        quality: f64,
        t: Temperature,
    ) -> FluidResult<Pressure> {
        if !(0.0..=1.0).contains(&quality) {
            return Err(FluidError::InvalidArg {
                what: "quality must be within [0, 1]",
            });
        }

        let t_k = engine_units::temperature_k(t);
        if !t_k.is_finite() {
            return Err(FluidError::OutOfRange {
                what: "saturation temperature",
                value: t_k,
            });
        }

        let row = Self::rows(species)
            .iter()
            .find(|r| (r.t_min_k..=r.t_max_k).contains(&t_k))
            .ok_or(FluidError::OutOfRange {
                what: "saturation temperature",
                value: t_k,
            })?;

        Ok(bar(row.pressure_bar(t_k)))
    }
}
