// hps-core/src/units.rs

use uom::si::f64::{
    MassRate as UomMassRate, Power as UomPower, Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Accessors in the engine-internal unit convention
/// (pressure = bar, temperature = °C, mass flow = kg/s, power = W).
pub mod engine_units {
    use super::*;

    #[inline]
    pub fn pressure_bar(p: Pressure) -> f64 {
        use uom::si::pressure::bar;
        p.get::<bar>()
    }

    #[inline]
    pub fn temperature_c(t: Temperature) -> f64 {
        use uom::si::thermodynamic_temperature::degree_celsius;
        t.get::<degree_celsius>()
    }

    #[inline]
    pub fn temperature_k(t: Temperature) -> f64 {
        use uom::si::thermodynamic_temperature::kelvin;
        t.get::<kelvin>()
    }

    #[inline]
    pub fn mass_flow_kg_s(m: MassRate) -> f64 {
        use uom::si::mass_rate::kilogram_per_second;
        m.get::<kilogram_per_second>()
    }

    #[inline]
    pub fn power_w(p: Power) -> f64 {
        use uom::si::power::watt;
        p.get::<watt>()
    }
}
