use std::error::Error;
use std::fmt;

use qimen_ephem::EphemerisError;

/// Errors reported by the almanac layer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// The ephemeris backend failed.
    Ephemeris(EphemerisError),
    /// No solar-term instant is representable near the requested year.
    OutOfCalendarRange { year: i32 },
}

impl fmt::Display for AlmanacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris failure: {e}"),
            Self::OutOfCalendarRange { year } => {
                write!(f, "no representable solar-term instants near year {year}")
            }
        }
    }
}

impl Error for AlmanacError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::OutOfCalendarRange { .. } => None,
        }
    }
}

impl From<EphemerisError> for AlmanacError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
