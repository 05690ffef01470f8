use std::error::Error;
use std::fmt;

use qimen_almanac::AlmanacError;
use qimen_base::{Period, SolarTerm};

/// Errors reported while casting a chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The almanac layer (term search or pillar arithmetic) failed.
    Almanac(AlmanacError),
    /// The input timestamp could not be parsed.
    MalformedInput { input: String },
    /// The resolved term/period pair is missing from both polarity tables.
    ///
    /// Unreachable for the closed 24-term set, but checked explicitly
    /// rather than defaulted.
    ConfigurationLookup { term: SolarTerm, period: Period },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Almanac(e) => write!(f, "almanac failure: {e}"),
            Self::MalformedInput { input } => {
                write!(f, "malformed timestamp {input:?}, expected YYYY-MM-DD HH:MM:SS")
            }
            Self::ConfigurationLookup { term, period } => write!(
                f,
                "no configuration number for {} / {} in either polarity table",
                term.name(),
                period.name()
            ),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Almanac(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AlmanacError> for ChartError {
    fn from(e: AlmanacError) -> Self {
        Self::Almanac(e)
    }
}
