//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, wind speed, density).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval,
//! such as a skin temperature relative to the freezing point:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin};
//! use snow_models::support::units::TemperatureDifference;
//!
//! let skin = ThermodynamicTemperature::new::<kelvin>(263.15);
//! let freezing = ThermodynamicTemperature::new::<kelvin>(273.15);
//! let below_freezing = skin.minus(freezing);
//! assert!((below_freezing.get::<delta_kelvin>() + 10.0).abs() < 1e-9);
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
