//! Slater (2016) fresh snow density.

use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter, velocity::meter_per_second};

use crate::support::meteo::Meteo;

use super::{DensityRelation, SkinTemperature, T0, anderson_mid_range};

/// Maximum density offset from wind, in kg/m³.
const WIND_SCALE: f64 = 266.861;

/// Temperature and continuous wind dependence after Andrew Slater (2016).
///
/// Around −15 °C the flakes make the lightest powder. Colder snow crystals get
/// smaller, so density rises again below that point:
///
/// | Skin temperature       | Temperature term (kg/m³)                 |
/// |------------------------|------------------------------------------|
/// | `T > T0 + 2`           | `170`                                    |
/// | `T0 − 15 < T ≤ T0 + 2` | `50 + 1.7·(T − T0 + 15)^1.5`             |
/// | `T ≤ T0 − 15`          | `−3.8333·(T − T0) − 0.0333·(T − T0)²`    |
///
/// The wind term `266.861·((1 + tanh(W/5))/2)^8.8` follows the ideas of
/// Liston et al. (2007), made continuous and slightly more sensitive to wind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slater2016;

fn temperature_term(skin: SkinTemperature) -> f64 {
    if skin.kelvin > T0 + 2. {
        170.
    } else if T0 - 15. < skin.kelvin {
        anderson_mid_range(skin.above_freezing)
    } else {
        let dt = skin.above_freezing;
        -3.8333 * dt - 0.0333 * dt.powi(2)
    }
}

fn wind_term(w: f64) -> f64 {
    WIND_SCALE * ((1. + (w / 5.).tanh()) / 2.).powf(8.8)
}

impl DensityRelation for Slater2016 {
    fn density<M: Meteo + ?Sized>(&self, meteo: &M) -> MassDensity {
        let w = meteo.surface_wind().get::<meter_per_second>();
        let rho = temperature_term(SkinTemperature::read(meteo)) + wind_term(w);

        MassDensity::new::<kilogram_per_cubic_meter>(rho)
    }
}
