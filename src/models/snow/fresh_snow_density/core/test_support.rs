use std::cell::Cell;

use uom::si::{
    f64::{ArealMassDensity, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::meteo::{Meteo, MeteoSnapshot};

use super::{DensityRelation, T0};

/// Meteorology with the given skin temperature offset from `T0` and surface wind.
///
/// Annual values are set to a cold, moderately windy ice sheet climate.
pub(super) fn meteo(above_freezing: f64, wind: f64) -> MeteoSnapshot {
    MeteoSnapshot::from_si(T0 + above_freezing, wind, 250.0, 300.0, 8.0)
}

/// Evaluates a relation and returns the density in kg/m³.
pub(super) fn density(relation: &impl DensityRelation, meteo: &impl Meteo) -> f64 {
    relation.density(meteo).get::<kilogram_per_cubic_meter>()
}

/// A provider whose values can change between evaluations and that counts reads.
pub(super) struct ChangingMeteo {
    pub(super) snapshot: Cell<MeteoSnapshot>,
    pub(super) reads: Cell<usize>,
}

impl ChangingMeteo {
    pub(super) fn new(snapshot: MeteoSnapshot) -> Self {
        Self {
            snapshot: Cell::new(snapshot),
            reads: Cell::new(0),
        }
    }

    pub(super) fn set_surface(&self, temperature: f64, wind: f64) {
        let mut snapshot = self.snapshot.get();
        snapshot.surface_temperature = ThermodynamicTemperature::new::<kelvin>(temperature);
        snapshot.surface_wind = Velocity::new::<meter_per_second>(wind);
        self.snapshot.set(snapshot);
    }

    fn read<T>(&self, value: impl FnOnce(MeteoSnapshot) -> T) -> T {
        self.reads.set(self.reads.get() + 1);
        value(self.snapshot.get())
    }
}

impl Meteo for ChangingMeteo {
    fn surface_temperature(&self) -> ThermodynamicTemperature {
        self.read(|s| s.surface_temperature)
    }

    fn surface_wind(&self) -> Velocity {
        self.read(|s| s.surface_wind)
    }

    fn annual_tskin(&self) -> ThermodynamicTemperature {
        self.read(|s| s.annual_tskin)
    }

    fn annual_acc(&self) -> ArealMassDensity {
        self.read(|s| s.annual_acc)
    }

    fn annual_w10m(&self) -> Velocity {
        self.read(|s| s.annual_w10m)
    }
}
