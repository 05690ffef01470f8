//! Solar ephemeris seam for the almanac layer.
//!
//! Provides Julian-day conversions on the naive civil timeline and the
//! [`SolarEphemeris`] oracle trait with its built-in analytic backend.

pub mod error;
pub mod julian;
pub mod sun;

pub use error::EphemerisError;
pub use julian::{J2000_JD, UNIX_EPOCH_JD, datetime_from_jd, jd_from_datetime};
pub use sun::{AnalyticSun, SolarEphemeris, normalize_360};
