use log::info;
use uom::si::f64::MassDensity;

use crate::support::{
    config::{ConfigError, ConfigSource},
    meteo::Meteo,
};

use super::{
    Anderson, AndersonListon, Constant, Crocus, DensityRelation, Helsen2008, Lenaerts2012,
    SchemeKind, Slater2016,
};

/// One of the supported fresh snow density parameterizations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityScheme {
    Constant(Constant),
    Helsen2008(Helsen2008),
    Lenaerts2012(Lenaerts2012),
    Crocus(Crocus),
    Anderson(Anderson),
    AndersonListon(AndersonListon),
    Slater2016(Slater2016),
}

impl DensityScheme {
    /// Builds the scheme identified by `kind`.
    ///
    /// Only [`SchemeKind::Constant`] reads further configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the constant density option is missing or out of range.
    pub fn from_kind<C: ConfigSource + ?Sized>(
        kind: SchemeKind,
        config: &C,
    ) -> Result<Self, ConfigError> {
        let scheme = match kind {
            SchemeKind::Constant => Self::Constant(Constant::from_config(config)?),
            SchemeKind::Helsen2008 => Self::Helsen2008(Helsen2008),
            SchemeKind::Lenaerts2012 => Self::Lenaerts2012(Lenaerts2012),
            SchemeKind::Crocus => Self::Crocus(Crocus),
            SchemeKind::Anderson => Self::Anderson(Anderson),
            SchemeKind::AndersonListon => Self::AndersonListon(AndersonListon::new()),
            SchemeKind::Slater2016 => Self::Slater2016(Slater2016),
        };

        info!("fresh snow density scheme: {kind}");
        Ok(scheme)
    }

    /// Returns which scheme this is.
    #[must_use]
    pub fn kind(&self) -> SchemeKind {
        match self {
            Self::Constant(_) => SchemeKind::Constant,
            Self::Helsen2008(_) => SchemeKind::Helsen2008,
            Self::Lenaerts2012(_) => SchemeKind::Lenaerts2012,
            Self::Crocus(_) => SchemeKind::Crocus,
            Self::Anderson(_) => SchemeKind::Anderson,
            Self::AndersonListon(_) => SchemeKind::AndersonListon,
            Self::Slater2016(_) => SchemeKind::Slater2016,
        }
    }
}

impl DensityRelation for DensityScheme {
    fn density<M: Meteo + ?Sized>(&self, meteo: &M) -> MassDensity {
        match self {
            Self::Constant(scheme) => scheme.density(meteo),
            Self::Helsen2008(scheme) => scheme.density(meteo),
            Self::Lenaerts2012(scheme) => scheme.density(meteo),
            Self::Crocus(scheme) => scheme.density(meteo),
            Self::Anderson(scheme) => scheme.density(meteo),
            Self::AndersonListon(scheme) => scheme.density(meteo),
            Self::Slater2016(scheme) => scheme.density(meteo),
        }
    }
}

impl From<Constant> for DensityScheme {
    fn from(scheme: Constant) -> Self {
        Self::Constant(scheme)
    }
}

impl From<AndersonListon> for DensityScheme {
    fn from(scheme: AndersonListon) -> Self {
        Self::AndersonListon(scheme)
    }
}
