//! Helsen et al. (2008) fresh snow density.

use uom::si::{
    areal_mass_density::kilogram_per_square_meter,
    f64::MassDensity,
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::meteo::Meteo;

use super::DensityRelation;

/// Regression on annual climatology, after Helsen et al. (2008).
///
/// `ρ = −154.91 + 1.4266·(73.6 + 1.06·T + 0.0669·A + 4.77·W)`, where `T` is the
/// annual mean skin temperature (K), `A` the annual accumulation (mm w.e. per
/// year) and `W` the annual mean 10 m wind speed (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Helsen2008;

impl DensityRelation for Helsen2008 {
    fn density<M: Meteo + ?Sized>(&self, meteo: &M) -> MassDensity {
        let t = meteo.annual_tskin().get::<kelvin>();
        let acc = meteo.annual_acc().get::<kilogram_per_square_meter>();
        let w = meteo.annual_w10m().get::<meter_per_second>();

        let rho = -154.91 + 1.4266 * (73.6 + 1.06 * t + 0.0669 * acc + 4.77 * w);
        MassDensity::new::<kilogram_per_cubic_meter>(rho)
    }
}
