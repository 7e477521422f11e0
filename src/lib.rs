//! # Snow Models
//!
//! Fresh snow density parameterizations for snowpack and land-surface models,
//! built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific models, including [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models (configuration, meteorology, units).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific utility code remains private.

pub mod models;
pub mod support;
