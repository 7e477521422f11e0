//! Lenaerts et al. (2012) fresh snow density.

use uom::si::{
    f64::MassDensity, mass_density::kilogram_per_cubic_meter, thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::meteo::Meteo;

use super::DensityRelation;

const A: f64 = 97.5;
const B: f64 = 0.77;
const C: f64 = 4.49;

/// Linear regression on surface temperature and wind during accumulation.
///
/// Lenaerts et al. (2012), equation 11: `ρ = 97.5 + 0.77·T + 4.49·W`, with the
/// skin temperature `T` in kelvin and the surface wind `W` in m/s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lenaerts2012;

impl DensityRelation for Lenaerts2012 {
    fn density<M: Meteo + ?Sized>(&self, meteo: &M) -> MassDensity {
        let t = meteo.surface_temperature().get::<kelvin>();
        let w = meteo.surface_wind().get::<meter_per_second>();

        MassDensity::new::<kilogram_per_cubic_meter>(A + B * t + C * w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::meteo::MeteoSnapshot;

    use super::super::test_support::density;

    #[test]
    fn linear_in_temperature_and_wind() {
        let meteo = MeteoSnapshot::from_si(250.0, 5.0, 0.0, 0.0, 0.0);
        assert_relative_eq!(
            density(&Lenaerts2012, &meteo),
            97.5 + 192.5 + 22.45,
            epsilon = 1e-9
        );

        let calm = MeteoSnapshot::from_si(250.0, 0.0, 0.0, 0.0, 0.0);
        assert_relative_eq!(density(&Lenaerts2012, &calm), 290.0, epsilon = 1e-9);
    }

    #[test]
    fn ignores_annual_climatology() {
        let a = MeteoSnapshot::from_si(260.0, 4.0, 240.0, 100.0, 3.0);
        let b = MeteoSnapshot::from_si(260.0, 4.0, 265.0, 900.0, 12.0);

        assert_eq!(density(&Lenaerts2012, &a), density(&Lenaerts2012, &b));
    }

    #[test]
    fn nan_wind_propagates() {
        let meteo = MeteoSnapshot::from_si(260.0, f64::NAN, 0.0, 0.0, 0.0);
        assert!(density(&Lenaerts2012, &meteo).is_nan());
    }
}
