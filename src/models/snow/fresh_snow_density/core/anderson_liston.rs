//! Anderson (1976) temperature dependence with the Liston et al. (2007) wind correction.

use log::debug;
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter, velocity::meter_per_second};

use crate::support::meteo::Meteo;

use super::{Anderson, DensityRelation};

/// Wind speed, in m/s, at which wind compaction starts.
const WIND_THRESHOLD: f64 = 5.;

/// Fresh snow density as used in CLM4.5.
///
/// Temperature dependence comes from a wrapped [`Anderson`] scheme. At or
/// above 5 m/s, the wind correction of Liston et al. (2007),
/// *Simulating complex snow distributions in windy environments using
/// SnowTran-3D*, adds `25 + 250·(1 − e^(−0.2·(W − 5)))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndersonListon {
    anderson: Anderson,
}

impl AndersonListon {
    #[must_use]
    pub fn new() -> Self {
        debug!("AndersonListon wraps an Anderson scheme");
        Self { anderson: Anderson }
    }

    /// Returns the wrapped temperature-only scheme.
    #[must_use]
    pub fn anderson(&self) -> &Anderson {
        &self.anderson
    }
}

impl Default for AndersonListon {
    fn default() -> Self {
        Self::new()
    }
}

fn wind_correction(w: f64) -> f64 {
    if w >= WIND_THRESHOLD {
        25. + 250. * (1. - (-0.2 * (w - WIND_THRESHOLD)).exp())
    } else {
        0.
    }
}

impl DensityRelation for AndersonListon {
    fn density<M: Meteo + ?Sized>(&self, meteo: &M) -> MassDensity {
        let w = meteo.surface_wind().get::<meter_per_second>();
        let base = self.anderson.density(meteo);

        base + MassDensity::new::<kilogram_per_cubic_meter>(wind_correction(w))
    }
}
