use std::error::Error;
use std::fmt;

/// Errors reported by an ephemeris backend.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The requested instant lies outside the backend's validity span.
    OutOfRange { jd: f64 },
}

impl fmt::Display for EphemerisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { jd } => {
                write!(f, "instant JD {jd} is outside the ephemeris validity span")
            }
        }
    }
}

impl Error for EphemerisError {}
