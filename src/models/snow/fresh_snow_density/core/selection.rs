use std::fmt;

use log::error;
use uom::si::f64::MassDensity;

use crate::support::{
    config::{ConfigError, ConfigSource},
    meteo::Meteo,
};

use super::{DensityRelation, DensityScheme, SchemeKind};

/// Name of the option selecting the scheme.
pub(crate) const WHICH_FSD_OPTION: &str = "fresh_snow_density:which_fsd";

/// A fresh snow density scheme bound to the simulation's meteorology.
///
/// The estimator borrows the provider, so it can never outlive it.
/// Every call to [`density`](Self::density) reads the provider's current values.
pub struct SurfaceDensity<'a, M: ?Sized> {
    scheme: DensityScheme,
    meteo: &'a M,
}

impl<'a, M: Meteo + ?Sized> SurfaceDensity<'a, M> {
    /// Binds `scheme` to `meteo`.
    #[must_use]
    pub fn new(scheme: DensityScheme, meteo: &'a M) -> Self {
        Self { scheme, meteo }
    }

    /// Returns the density of freshly fallen snow under current conditions.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.scheme.density(self.meteo)
    }

    /// Returns the selected scheme.
    #[must_use]
    pub fn scheme(&self) -> &DensityScheme {
        &self.scheme
    }

    /// Returns which scheme was selected.
    #[must_use]
    pub fn kind(&self) -> SchemeKind {
        self.scheme.kind()
    }
}

impl<M: ?Sized> fmt::Debug for SurfaceDensity<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceDensity")
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

impl DensityScheme {
    /// Selects and builds a scheme from `fresh_snow_density:which_fsd`.
    ///
    /// The option is an integer from 0 to 6 and defaults to 1 ([`SchemeKind::Helsen2008`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the selection is not a known scheme, or if the
    /// selected scheme's own options are invalid. The error is also logged.
    pub fn from_config<C: ConfigSource + ?Sized>(config: &C) -> Result<Self, ConfigError> {
        select(config).inspect_err(|err| error!("{err}"))
    }
}

fn select<C: ConfigSource + ?Sized>(config: &C) -> Result<DensityScheme, ConfigError> {
    // Any integer parses here; the scheme table is the only range check.
    let index = config.get_int(
        WHICH_FSD_OPTION,
        false,
        i64::MIN,
        i64::MAX,
        SchemeKind::DEFAULT.index(),
    )?;

    let kind = SchemeKind::try_from(index).map_err(|value| ConfigError::IntOutOfRange {
        name: WHICH_FSD_OPTION.to_owned(),
        value,
        min: SchemeKind::ALL[0].index(),
        max: SchemeKind::ALL[SchemeKind::ALL.len() - 1].index(),
    })?;

    DensityScheme::from_kind(kind, config)
}

/// Builds the configured fresh snow density estimator for a simulation.
///
/// Called once during setup. The returned estimator is then evaluated each
/// time new snow needs an initial density.
///
/// # Errors
///
/// Returns [`ConfigError`] if the configuration does not describe a valid
/// scheme. Nothing is built in that case.
pub fn instantiate_surface_density<'a, C, M>(
    config: &C,
    meteo: &'a M,
) -> Result<SurfaceDensity<'a, M>, ConfigError>
where
    C: ConfigSource + ?Sized,
    M: Meteo + ?Sized,
{
    let scheme = DensityScheme::from_config(config)?;
    Ok(SurfaceDensity::new(scheme, meteo))
}
