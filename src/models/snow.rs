//! Snowpack models.
//!
//! This module contains models used when initializing and evolving snow
//! layers, such as the density assigned to freshly deposited snow.

pub mod fresh_snow_density;
