//! Almanac layer: solar-term instants and the sexagenary clock.
//!
//! Sits between the ephemeris oracle and the chart derivation. Everything
//! here works on the naive civil timeline handed in by the caller.

pub mod error;
pub mod sexagenary;
pub mod terms;

pub use error::AlmanacError;
pub use sexagenary::{
    FourPillars, day_pillar, four_pillars, hour_pillar, month_pillar, reckoning_date, year_pillar,
};
pub use terms::{Almanac, Direction};
