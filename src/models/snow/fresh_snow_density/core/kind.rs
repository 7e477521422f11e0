use std::fmt;

/// Identifies a fresh snow density scheme.
///
/// The discriminants are the values of the `fresh_snow_density:which_fsd`
/// configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    Constant = 0,
    Helsen2008 = 1,
    Lenaerts2012 = 2,
    Crocus = 3,
    Anderson = 4,
    AndersonListon = 5,
    Slater2016 = 6,
}

impl SchemeKind {
    /// All schemes, ordered by configuration index.
    pub const ALL: [Self; 7] = [
        Self::Constant,
        Self::Helsen2008,
        Self::Lenaerts2012,
        Self::Crocus,
        Self::Anderson,
        Self::AndersonListon,
        Self::Slater2016,
    ];

    /// Scheme used when the selection option is not set.
    pub const DEFAULT: Self = Self::Helsen2008;

    /// Returns the configuration index of this scheme.
    #[must_use]
    pub fn index(self) -> i64 {
        self as i64
    }

    /// Returns the name of the scheme.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Helsen2008 => "Helsen2008",
            Self::Lenaerts2012 => "Lenaerts2012",
            Self::Crocus => "CROCUS",
            Self::Anderson => "Anderson",
            Self::AndersonListon => "AndersonListon",
            Self::Slater2016 => "Slater2016",
        }
    }
}

/// Looks up a scheme by configuration index, returning the index back on failure.
impl TryFrom<i64> for SchemeKind {
    type Error = i64;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(index)
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, kind) in SchemeKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i64::try_from(i).unwrap());
            assert_eq!(SchemeKind::try_from(kind.index()), Ok(kind));
        }
    }

    #[test]
    fn unknown_indices() {
        for index in [-1, 7, 42, i64::MIN, i64::MAX] {
            assert_eq!(SchemeKind::try_from(index), Err(index));
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(SchemeKind::Crocus.to_string(), "CROCUS");
        assert_eq!(SchemeKind::DEFAULT.to_string(), "Helsen2008");
    }
}
