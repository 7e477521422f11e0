//! Constant fresh snow density.

use log::info;
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

use crate::support::{
    config::{ConfigError, ConfigSource},
    meteo::Meteo,
};

use super::DensityRelation;

/// Name of the option holding the constant density, in kg/m³.
pub(super) const DENSITY_OPTION: &str = "fresh_snow_density:density";

/// Smallest configurable density, in kg/m³.
pub(super) const MIN_DENSITY: f64 = 1.;

/// Largest configurable density, in kg/m³.
pub(super) const MAX_DENSITY: f64 = 1000.;

/// A fixed density, independent of meteorology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    density: MassDensity,
}

impl Constant {
    /// Creates a constant scheme returning `density`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DoubleOutOfRange`] if the density is `NaN` or
    /// outside 1 to 1000 kg/m³.
    pub fn new(density: MassDensity) -> Result<Self, ConfigError> {
        let value = density.get::<kilogram_per_cubic_meter>();
        if !(MIN_DENSITY..=MAX_DENSITY).contains(&value) {
            return Err(ConfigError::DoubleOutOfRange {
                name: DENSITY_OPTION.to_owned(),
                value,
                min: MIN_DENSITY,
                max: MAX_DENSITY,
            });
        }

        Ok(Self { density })
    }

    /// Reads the required density option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the option is absent or outside 1 to 1000 kg/m³.
    pub fn from_config<C: ConfigSource + ?Sized>(config: &C) -> Result<Self, ConfigError> {
        let value = config.get_double(DENSITY_OPTION, true, MIN_DENSITY, MAX_DENSITY, -1.)?;
        info!("Constant fresh snow density: {value} kg/m3");

        Self::new(MassDensity::new::<kilogram_per_cubic_meter>(value))
    }

    /// Returns the configured density.
    #[must_use]
    pub fn value(&self) -> MassDensity {
        self.density
    }
}

impl DensityRelation for Constant {
    fn density<M: Meteo + ?Sized>(&self, _meteo: &M) -> MassDensity {
        self.density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::config::MapConfig;

    use super::super::test_support::{density, meteo};

    #[test]
    fn ignores_meteorology() {
        let config = MapConfig::new().with(DENSITY_OPTION, 300);
        let constant = Constant::from_config(&config).unwrap();

        let conditions = [(0.0, 0.0), (-40.0, 25.0), (5.0, 3.0), (f64::NAN, f64::NAN)];
        for (above_freezing, wind) in conditions {
            assert_eq!(density(&constant, &meteo(above_freezing, wind)), 300.0);
        }
    }

    #[test]
    fn requires_density_option() {
        let err = Constant::from_config(&MapConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing { ref name } if name == DENSITY_OPTION
        ));
    }

    #[test]
    fn rejects_out_of_range_density() {
        for value in [0.5, -300.0, 1000.5, 5000.0] {
            let config = MapConfig::new().with(DENSITY_OPTION, value);
            assert!(matches!(
                Constant::from_config(&config),
                Err(ConfigError::DoubleOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn new_rejects_out_of_range_density() {
        for value in [0.0, -5.0, 5000.0, f64::NAN] {
            let result = Constant::new(MassDensity::new::<kilogram_per_cubic_meter>(value));
            assert!(
                matches!(result, Err(ConfigError::DoubleOutOfRange { .. })),
                "accepted {value}"
            );
        }

        let rho = MassDensity::new::<kilogram_per_cubic_meter>(300.0);
        let constant = Constant::new(rho).unwrap();
        assert_eq!(density(&constant, &meteo(0.0, 0.0)), 300.0);
    }

    #[test]
    fn accepts_bounds() {
        for value in [MIN_DENSITY, MAX_DENSITY] {
            let config = MapConfig::new().with(DENSITY_OPTION, value);
            let constant = Constant::from_config(&config).unwrap();
            assert_eq!(constant.value().get::<kilogram_per_cubic_meter>(), value);
        }
    }
}
