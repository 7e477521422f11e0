//! CROCUS fresh snow density.

use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter, velocity::meter_per_second};

use crate::support::meteo::Meteo;

use super::{DensityRelation, SkinTemperature};

const A: f64 = 109.;
const B: f64 = 6.;
const C: f64 = 26.;

/// Lowest density returned, in kg/m³.
const FLOOR: f64 = 50.;

/// Fresh snow density as parameterized in the CROCUS snow model.
///
/// `ρ = max(109 + 6·(T − T0) + 26·√W, 50)`.
///
/// Wind speed is not checked before the square root. A negative or `NaN`
/// wind gives a `NaN` density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crocus;

impl DensityRelation for Crocus {
    fn density<M: Meteo + ?Sized>(&self, meteo: &M) -> MassDensity {
        let skin = SkinTemperature::read(meteo);
        let w = meteo.surface_wind().get::<meter_per_second>();

        let rho = A + B * skin.above_freezing + C * w.sqrt();

        // Written out rather than `f64::max` so a NaN density is not floored.
        let rho = if rho < FLOOR { FLOOR } else { rho };
        MassDensity::new::<kilogram_per_cubic_meter>(rho)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::super::test_support::{density, meteo};

    #[test]
    fn calm_wind_is_linear_in_temperature() {
        for above_freezing in [-5.0, -1.0, 0.0, 1.5] {
            assert_relative_eq!(
                density(&Crocus, &meteo(above_freezing, 0.0)),
                109.0 + 6.0 * above_freezing,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn at_freezing_with_moderate_wind() {
        assert_relative_eq!(density(&Crocus, &meteo(0.0, 4.0)), 161.0, epsilon = 1e-9);
    }

    #[test]
    fn never_below_floor() {
        for above_freezing in [-10.0, -20.0, -60.0] {
            for wind in [0.0, 0.5, 2.0, 10.0] {
                let rho = density(&Crocus, &meteo(above_freezing, wind));
                assert!(
                    rho >= FLOOR,
                    "rho = {rho} at dT = {above_freezing}, W = {wind}"
                );
            }
        }

        assert_eq!(density(&Crocus, &meteo(-40.0, 0.0)), FLOOR);
    }

    #[test]
    fn negative_wind_is_not_trapped() {
        assert!(density(&Crocus, &meteo(0.0, -1.0)).is_nan());
    }
}
