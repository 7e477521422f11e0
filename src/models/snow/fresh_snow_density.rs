//! Fresh snow density models.
//!
//! Seven published parameterizations estimate the bulk density of newly
//! deposited snow from skin temperature, wind and annual climatology. The
//! configured scheme is selected once per simulation with
//! [`instantiate_surface_density`] and then evaluated whenever new snow needs
//! an initial density.
//!
//! | `which_fsd` | Scheme                                   |
//! |-------------|------------------------------------------|
//! | 0           | [`Constant`] (reads `fresh_snow_density:density`) |
//! | 1 (default) | [`Helsen2008`]                           |
//! | 2           | [`Lenaerts2012`]                         |
//! | 3           | [`Crocus`]                               |
//! | 4           | [`Anderson`]                             |
//! | 5           | [`AndersonListon`]                       |
//! | 6           | [`Slater2016`]                           |
//!
//! [`FreshSnowDensity`] is the [`twine_core::Model`] adapter: it maps a
//! [`MeteoSnapshot`] to a density without holding a provider.
//!
//! # Example
//!
//! ```
//! use snow_models::models::snow::fresh_snow_density::{SchemeKind, instantiate_surface_density};
//! use snow_models::support::{config::MapConfig, meteo::MeteoSnapshot};
//! use uom::si::mass_density::kilogram_per_cubic_meter;
//!
//! let config = MapConfig::new().with("fresh_snow_density:which_fsd", 3);
//! let meteo = MeteoSnapshot::from_si(273.15, 4.0, 250.0, 300.0, 8.0);
//!
//! let estimator = instantiate_surface_density(&config, &meteo).unwrap();
//! assert_eq!(estimator.kind(), SchemeKind::Crocus);
//!
//! let rho = estimator.density().get::<kilogram_per_cubic_meter>();
//! assert!((rho - 161.0).abs() < 1e-9);
//! ```

mod core;

pub use self::core::{
    Anderson, AndersonListon, Constant, Crocus, DensityRelation, DensityScheme, Helsen2008,
    Lenaerts2012, SchemeKind, Slater2016, SurfaceDensity, instantiate_surface_density,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::MassDensity;

use crate::support::{
    config::{ConfigError, ConfigSource},
    meteo::MeteoSnapshot,
};

/// Fresh snow density as a [`Model`] from meteorology to density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreshSnowDensity {
    scheme: DensityScheme,
}

impl FreshSnowDensity {
    #[must_use]
    pub fn new(scheme: DensityScheme) -> Self {
        Self { scheme }
    }

    /// Builds the model from the `fresh_snow_density` configuration options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration does not describe a valid scheme.
    pub fn from_config<C: ConfigSource + ?Sized>(config: &C) -> Result<Self, ConfigError> {
        Ok(Self::new(DensityScheme::from_config(config)?))
    }

    #[must_use]
    pub fn scheme(&self) -> &DensityScheme {
        &self.scheme
    }
}

impl Model for FreshSnowDensity {
    type Input = MeteoSnapshot;
    type Output = MassDensity;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.scheme.density(input))
    }
}
