//! Computational core for fresh snow density.
//!
//! Each published parameterization lives in its own module as a small type
//! implementing [`DensityRelation`]. [`DensityScheme`] is the closed set of
//! those types and dispatches evaluation by `match`. [`SurfaceDensity`] binds
//! a scheme to the simulation's meteorology provider.

mod anderson;
mod anderson_liston;
mod constant;
mod crocus;
mod helsen2008;
mod kind;
mod lenaerts2012;
mod scheme;
mod selection;
mod slater2016;

#[cfg(test)]
mod test_support;

pub use anderson::Anderson;
pub use anderson_liston::AndersonListon;
pub use constant::Constant;
pub use crocus::Crocus;
pub use helsen2008::Helsen2008;
pub use kind::SchemeKind;
pub use lenaerts2012::Lenaerts2012;
pub use scheme::DensityScheme;
pub use selection::{SurfaceDensity, instantiate_surface_density};
pub use slater2016::Slater2016;

use uom::si::{
    f64::{MassDensity, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{meteo::Meteo, units::TemperatureDifference};

/// Freezing point of water, in kelvin.
pub(crate) const T0: f64 = 273.15;

/// A fresh snow density parameterization.
pub trait DensityRelation {
    /// Returns the density of freshly fallen snow for the current meteorology.
    fn density<M: Meteo + ?Sized>(&self, meteo: &M) -> MassDensity;
}

/// Surface temperature, in kelvin, paired with its offset from [`T0`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct SkinTemperature {
    pub(crate) kelvin: f64,
    pub(crate) above_freezing: f64,
}

impl SkinTemperature {
    pub(crate) fn read<M: Meteo + ?Sized>(meteo: &M) -> Self {
        let skin = meteo.surface_temperature();
        let freezing = ThermodynamicTemperature::new::<kelvin>(T0);

        Self {
            kelvin: skin.get::<kelvin>(),
            above_freezing: skin.minus(freezing).get::<delta_kelvin>(),
        }
    }
}

/// Temperature dependence shared by the Anderson (1976) family between
/// `T0 - 15` and `T0 + 2`.
pub(crate) fn anderson_mid_range(above_freezing: f64) -> f64 {
    50. + 1.7 * (above_freezing + 15.).powf(1.5)
}
