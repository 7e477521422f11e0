//! Meteorological forcing read by snow models.
//!
//! A simulation owns a single meteorology provider that implements [`Meteo`].
//! Models borrow it for their whole lifetime and pull fresh values on every
//! evaluation, so the provider's current state at call time determines the
//! result.
//!
//! [`MeteoSnapshot`] is a plain record of the same values and implements
//! [`Meteo`] itself. It is the input type of the model adapters.

use uom::si::{
    areal_mass_density::kilogram_per_square_meter,
    f64::{ArealMassDensity, ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

/// Read-only access to the current meteorological state.
///
/// Accessors must be free of side effects.
pub trait Meteo {
    /// Instantaneous surface (skin) temperature.
    fn surface_temperature(&self) -> ThermodynamicTemperature;

    /// Instantaneous near-surface wind speed.
    fn surface_wind(&self) -> Velocity;

    /// Annual mean skin temperature.
    fn annual_tskin(&self) -> ThermodynamicTemperature;

    /// Annual mean accumulation, as mass per area per year (mm w.e. per year).
    fn annual_acc(&self) -> ArealMassDensity;

    /// Annual mean 10 m wind speed.
    fn annual_w10m(&self) -> Velocity;
}

impl<M: Meteo + ?Sized> Meteo for &M {
    fn surface_temperature(&self) -> ThermodynamicTemperature {
        (**self).surface_temperature()
    }

    fn surface_wind(&self) -> Velocity {
        (**self).surface_wind()
    }

    fn annual_tskin(&self) -> ThermodynamicTemperature {
        (**self).annual_tskin()
    }

    fn annual_acc(&self) -> ArealMassDensity {
        (**self).annual_acc()
    }

    fn annual_w10m(&self) -> Velocity {
        (**self).annual_w10m()
    }
}

/// A fixed set of meteorological values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteoSnapshot {
    pub surface_temperature: ThermodynamicTemperature,
    pub surface_wind: Velocity,
    pub annual_tskin: ThermodynamicTemperature,
    pub annual_acc: ArealMassDensity,
    pub annual_w10m: Velocity,
}

impl MeteoSnapshot {
    /// Creates a snapshot from raw values in kelvin, m/s and kg/m² per year.
    #[must_use]
    pub fn from_si(
        surface_temperature: f64,
        surface_wind: f64,
        annual_tskin: f64,
        annual_acc: f64,
        annual_w10m: f64,
    ) -> Self {
        Self {
            surface_temperature: ThermodynamicTemperature::new::<kelvin>(surface_temperature),
            surface_wind: Velocity::new::<meter_per_second>(surface_wind),
            annual_tskin: ThermodynamicTemperature::new::<kelvin>(annual_tskin),
            annual_acc: ArealMassDensity::new::<kilogram_per_square_meter>(annual_acc),
            annual_w10m: Velocity::new::<meter_per_second>(annual_w10m),
        }
    }

    /// Captures the current values of a provider.
    #[must_use]
    pub fn capture(meteo: &impl Meteo) -> Self {
        Self {
            surface_temperature: meteo.surface_temperature(),
            surface_wind: meteo.surface_wind(),
            annual_tskin: meteo.annual_tskin(),
            annual_acc: meteo.annual_acc(),
            annual_w10m: meteo.annual_w10m(),
        }
    }
}

impl Meteo for MeteoSnapshot {
    fn surface_temperature(&self) -> ThermodynamicTemperature {
        self.surface_temperature
    }

    fn surface_wind(&self) -> Velocity {
        self.surface_wind
    }

    fn annual_tskin(&self) -> ThermodynamicTemperature {
        self.annual_tskin
    }

    fn annual_acc(&self) -> ArealMassDensity {
        self.annual_acc
    }

    fn annual_w10m(&self) -> Velocity {
        self.annual_w10m
    }
}
