//! Supporting utilities used by models.
//!
//! - [`config`]: Read access to bounded configuration options.
//! - [`meteo`]: The meteorology capability models read their forcing from.
//! - [`units`]: Extensions to [`uom`].

pub mod config;
pub mod meteo;
pub mod units;
