//! Property model trait.

use hps_core::units::{Pressure, Temperature};

use crate::error::FluidResult;
use crate::species::Species;

/// Saturation-pressure lookup seam.
///
/// The study layer only ever asks one question of the property service:
/// the saturation pressure of a pure fluid at a given temperature. The
/// `quality` flag (0 = saturated liquid, 1 = saturated vapor) mirrors the
/// external lookup signature; for a pure fluid the returned pressure is the
/// same on both sides of the dome.
///
/// Implementations must fail on unsupported species or out-of-range
/// temperatures instead of extrapolating silently.
pub trait PropertyModel {
    fn saturation_pressure(
        &self,
        species: Species,
        quality: f64,
        t: Temperature,
    ) -> FluidResult<Pressure>;
}

impl<M: PropertyModel + ?Sized> PropertyModel for &M {
    fn saturation_pressure(
        &self,
        species: Species,
        quality: f64,
        t: Temperature,
    ) -> FluidResult<Pressure> {
        (**self).saturation_pressure(species, quality, t)
    }
}
