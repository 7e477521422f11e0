//! Bounded configuration options.
//!
//! Models read their options through the [`ConfigSource`] trait rather than a
//! process-wide configuration object, so an embedding simulation decides where
//! options come from and tests can supply them directly.
//!
//! Option names follow a `section:key` convention, for example
//! `fresh_snow_density:which_fsd`.
//!
//! # Example
//!
//! ```
//! use snow_models::support::config::{ConfigError, ConfigSource, MapConfig};
//!
//! let config = MapConfig::new().with("fresh_snow_density:which_fsd", 3);
//!
//! assert_eq!(config.get_int("fresh_snow_density:which_fsd", false, 0, 6, 1), Ok(3));
//! assert_eq!(config.get_int("fresh_snow_density:other", false, 0, 6, 1), Ok(1));
//! assert!(matches!(
//!     config.get_double("fresh_snow_density:density", true, 1.0, 1000.0, -1.0),
//!     Err(ConfigError::Missing { .. }),
//! ));
//! ```

use std::collections::HashMap;

use thiserror::Error;

/// Errors returned when reading a configuration option.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A required option is absent.
    #[error("missing required config option {name}")]
    Missing { name: String },

    /// The option's value could not be parsed as the requested type.
    #[error("invalid value {value:?} for config option {name}")]
    Parse { name: String, value: String },

    /// An integer option lies outside its allowed range.
    #[error("unknown value: {value} for config option {name} (allowed {min}..={max})")]
    IntOutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A floating point option lies outside its allowed range.
    #[error("value {value} for config option {name} is outside [{min}, {max}]")]
    DoubleOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ConfigError {
    /// Returns the name of the option that caused the error.
    #[must_use]
    pub fn option_name(&self) -> &str {
        match self {
            Self::Missing { name }
            | Self::Parse { name, .. }
            | Self::IntOutOfRange { name, .. }
            | Self::DoubleOutOfRange { name, .. } => name,
        }
    }
}

/// Read access to configuration options.
///
/// Implementors only provide [`lookup`](Self::lookup).
/// The typed getters parse the raw value and enforce inclusive bounds.
pub trait ConfigSource {
    /// Returns the raw value of an option, or `None` if it is not set.
    fn lookup(&self, name: &str) -> Option<&str>;

    /// Reads an integer option constrained to `min..=max`.
    ///
    /// An absent optional option yields `default`, which is not bounds-checked.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required option is absent, the value is
    /// not an integer, or it lies outside the bounds.
    fn get_int(
        &self,
        name: &str,
        required: bool,
        min: i64,
        max: i64,
        default: i64,
    ) -> Result<i64, ConfigError> {
        let Some(raw) = self.lookup(name) else {
            return absent(name, required, default);
        };

        let value: i64 = raw.trim().parse().map_err(|_| ConfigError::Parse {
            name: name.to_owned(),
            value: raw.to_owned(),
        })?;

        if !(min..=max).contains(&value) {
            return Err(ConfigError::IntOutOfRange {
                name: name.to_owned(),
                value,
                min,
                max,
            });
        }

        Ok(value)
    }

    /// Reads a floating point option constrained to `[min, max]`.
    ///
    /// An absent optional option yields `default`, which is not bounds-checked.
    /// `NaN` never satisfies the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required option is absent, the value is
    /// not a number, or it lies outside the bounds.
    fn get_double(
        &self,
        name: &str,
        required: bool,
        min: f64,
        max: f64,
        default: f64,
    ) -> Result<f64, ConfigError> {
        let Some(raw) = self.lookup(name) else {
            return absent(name, required, default);
        };

        let value: f64 = raw.trim().parse().map_err(|_| ConfigError::Parse {
            name: name.to_owned(),
            value: raw.to_owned(),
        })?;

        if !(min..=max).contains(&value) {
            return Err(ConfigError::DoubleOutOfRange {
                name: name.to_owned(),
                value,
                min,
                max,
            });
        }

        Ok(value)
    }
}

fn absent<T>(name: &str, required: bool, default: T) -> Result<T, ConfigError> {
    if required {
        Err(ConfigError::Missing {
            name: name.to_owned(),
        })
    } else {
        Ok(default)
    }
}

/// An in-memory [`ConfigSource`] keyed by option name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this configuration with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous raw value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) -> Option<String> {
        self.values.insert(name.into(), value.to_string())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for MapConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (name, value) in iter {
            config.insert(name, value);
        }
        config
    }
}

impl ConfigSource for MapConfig {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const NAME: &str = "section:key";

    #[test]
    fn absent_optional_uses_default() {
        let config = MapConfig::new();

        assert_eq!(config.get_int(NAME, false, 0, 6, 1), Ok(1));
        assert_relative_eq!(config.get_double(NAME, false, 0.0, 1.0, 0.5).unwrap(), 0.5);
    }

    #[test]
    fn absent_required_is_missing() {
        let config = MapConfig::new();

        let err = config.get_double(NAME, true, 1.0, 1000.0, -1.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                name: NAME.to_owned()
            }
        );
        assert_eq!(err.option_name(), NAME);
    }

    #[test]
    fn bounds_are_inclusive() {
        for value in [0, 6] {
            let config = MapConfig::new().with(NAME, value);
            assert_eq!(config.get_int(NAME, false, 0, 6, 1), Ok(value));
        }

        for value in [1.0, 1000.0] {
            let config = MapConfig::new().with(NAME, value);
            assert_relative_eq!(
                config.get_double(NAME, true, 1.0, 1000.0, -1.0).unwrap(),
                value
            );
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let config = MapConfig::new().with(NAME, 7);
        assert_eq!(
            config.get_int(NAME, false, 0, 6, 1),
            Err(ConfigError::IntOutOfRange {
                name: NAME.to_owned(),
                value: 7,
                min: 0,
                max: 6,
            })
        );

        let config = MapConfig::new().with(NAME, -1);
        assert!(config.get_int(NAME, false, 0, 6, 1).is_err());

        for value in ["0.5", "1000.5", "NaN", "-inf"] {
            let config = MapConfig::new().with(NAME, value);
            assert!(matches!(
                config.get_double(NAME, true, 1.0, 1000.0, -1.0),
                Err(ConfigError::DoubleOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn unparsable_values_are_rejected() {
        let config = MapConfig::new().with(NAME, "three");

        assert_eq!(
            config.get_int(NAME, false, 0, 6, 1),
            Err(ConfigError::Parse {
                name: NAME.to_owned(),
                value: "three".to_owned(),
            })
        );
        assert!(config.get_double(NAME, false, 0.0, 1.0, 0.5).is_err());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let config: MapConfig = [(NAME, " 4 ")].into_iter().collect();
        assert_eq!(config.get_int(NAME, false, 0, 6, 1), Ok(4));
    }
}
