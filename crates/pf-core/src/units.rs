// pf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassDensity as UomMassDensity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;

/// Offset between the Celsius and Kelvin scales.
pub const ZERO_CELSIUS_K: f64 = 273.15;

/// Seconds per hour, for the m³/h flow convention of the flow diagram.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Convert a Celsius temperature to Kelvin.
#[inline]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + ZERO_CELSIUS_K
}

/// Convert a volumetric flow in m³/h to m³/s.
#[inline]
pub fn per_hour_to_per_second(v: f64) -> f64 {
    v / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(0.1);
        let _rho = kg_per_m3(1000.0);
        let _mu = pa_s(0.001);
    }

    #[test]
    fn celsius_conversion() {
        use crate::numeric::{Tolerances, nearly_equal};
        assert!(nearly_equal(celsius_to_kelvin(60.0), 333.15, Tolerances::default()));
        assert_eq!(celsius_to_kelvin(-273.15), 0.0);
    }

    #[test]
    fn area_from_lengths() {
        let a: Area = m(2.0) * m(3.0);
        assert_eq!(a.value, 6.0);
    }
}
