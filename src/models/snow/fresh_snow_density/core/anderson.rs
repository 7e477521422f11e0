//! Anderson (1976) fresh snow density.

use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

use crate::support::meteo::Meteo;

use super::{DensityRelation, SkinTemperature, T0, anderson_mid_range};

/// Temperature-only density after Anderson (1976).
///
/// | Skin temperature       | Density (kg/m³)            |
/// |------------------------|----------------------------|
/// | `T > T0 + 2`           | `50 + 1.7·17^1.5`          |
/// | `T0 − 15 < T ≤ T0 + 2` | `50 + 1.7·(T − T0 + 15)^1.5` |
/// | `T ≤ T0 − 15`          | `50`                       |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anderson;

impl Anderson {
    fn density_kg_m3(skin: SkinTemperature) -> f64 {
        if skin.kelvin > T0 + 2. {
            50. + 1.7 * 17_f64.powf(1.5)
        } else if T0 - 15. < skin.kelvin {
            anderson_mid_range(skin.above_freezing)
        } else {
            50.
        }
    }
}

impl DensityRelation for Anderson {
    fn density<M: Meteo + ?Sized>(&self, meteo: &M) -> MassDensity {
        let rho = Self::density_kg_m3(SkinTemperature::read(meteo));
        MassDensity::new::<kilogram_per_cubic_meter>(rho)
    }
}
