//! Solar-term boundary resolution by bisection.
//!
//! A term instant is the root of `longitude(t) = target` inside a window
//! seeded from the term's nominal month: the window opens on the first of
//! the month before and closes on the first of the month after, wide enough
//! to contain the crossing in every year. The predicate "longitude has
//! reached the target" is evaluated as a signed angular difference folded
//! into [0, 360), which stays monotone-safe across the 0° wrap at the
//! spring equinox.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use qimen_base::{ALL_SOLAR_TERMS, SolarTerm};
use qimen_ephem::{SolarEphemeris, datetime_from_jd, jd_from_datetime};

use crate::error::AlmanacError;

/// Bisection steps per term search. The window is two months wide, so this
/// resolves the instant to a few seconds.
const BISECTION_ITERATIONS: u32 = 20;

/// Search direction for [`Almanac::nearest_term`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Latest term at or before the instant.
    Before,
    /// Earliest term strictly after the instant.
    After,
}

/// Term-instant oracle over a solar ephemeris, with a per-(year, term)
/// memo so repeated chart casts in the same season stay cheap.
pub struct Almanac<'e> {
    sun: &'e dyn SolarEphemeris,
    cache: RefCell<HashMap<(i32, SolarTerm), NaiveDateTime>>,
}

impl<'e> Almanac<'e> {
    pub fn new(sun: &'e dyn SolarEphemeris) -> Almanac<'e> {
        Almanac {
            sun,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Instant the term falls in the given civil year.
    ///
    /// For Minor/Major Cold the civil year is the January-side year.
    pub fn term_instant(
        &self,
        year: i32,
        term: SolarTerm,
    ) -> Result<NaiveDateTime, AlmanacError> {
        if let Some(hit) = self.cache.borrow().get(&(year, term)) {
            return Ok(*hit);
        }
        let instant = self.search(year, term)?;
        self.cache.borrow_mut().insert((year, term), instant);
        Ok(instant)
    }

    /// Start-of-Spring instant of the civil year (head of the solar year).
    pub fn start_of_spring(&self, year: i32) -> Result<NaiveDateTime, AlmanacError> {
        self.term_instant(year, SolarTerm::StartOfSpring)
    }

    /// The `(summer, winter)` solstice instants of the civil year.
    pub fn solstices(&self, year: i32) -> Result<(NaiveDateTime, NaiveDateTime), AlmanacError> {
        Ok((
            self.term_instant(year, SolarTerm::SummerSolstice)?,
            self.term_instant(year, SolarTerm::WinterSolstice)?,
        ))
    }

    /// Nearest term instant in the given direction.
    pub fn nearest_term(
        &self,
        at: NaiveDateTime,
        direction: Direction,
    ) -> Result<(SolarTerm, NaiveDateTime), AlmanacError> {
        let mut best: Option<(SolarTerm, NaiveDateTime)> = None;
        for year in (at.year() - 1)..=(at.year() + 1) {
            for term in ALL_SOLAR_TERMS {
                let instant = self.term_instant(year, term)?;
                let better = match direction {
                    Direction::Before => {
                        instant <= at && best.is_none_or(|(_, b)| instant > b)
                    }
                    Direction::After => {
                        instant > at && best.is_none_or(|(_, b)| instant < b)
                    }
                };
                if better {
                    best = Some((term, instant));
                }
            }
        }
        best.ok_or(AlmanacError::OutOfCalendarRange { year: at.year() })
    }

    fn search(&self, year: i32, term: SolarTerm) -> Result<NaiveDateTime, AlmanacError> {
        let (lo, hi) = search_window(year, term.nominal_month())
            .ok_or(AlmanacError::OutOfCalendarRange { year })?;
        let target = term.target_longitude();

        let mut jd_lo = jd_from_datetime(lo);
        let mut jd_hi = jd_from_datetime(hi);
        for _ in 0..BISECTION_ITERATIONS {
            let mid = (jd_lo + jd_hi) / 2.0;
            if reached(self.sun.solar_longitude(mid)?, target) {
                jd_hi = mid;
            } else {
                jd_lo = mid;
            }
        }
        datetime_from_jd(jd_hi).ok_or(AlmanacError::OutOfCalendarRange { year })
    }
}

/// True once the longitude has passed the target, measured as a forward
/// angular offset under half a turn.
fn reached(longitude: f64, target: f64) -> bool {
    (longitude - target).rem_euclid(360.0) < 180.0
}

/// `[1st of month-1, 1st of month+1]` around the nominal month, crossing
/// the year boundary at both ends.
fn search_window(year: i32, month: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let (lo_y, lo_m) = if month == 1 { (year - 1, 12) } else { (year, month - 1) };
    let (hi_y, hi_m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let lo = NaiveDate::from_ymd_opt(lo_y, lo_m, 1)?.and_hms_opt(0, 0, 0)?;
    let hi = NaiveDate::from_ymd_opt(hi_y, hi_m, 1)?.and_hms_opt(0, 0, 0)?;
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use qimen_ephem::AnalyticSun;

    fn almanac_with(sun: &AnalyticSun) -> Almanac<'_> {
        Almanac::new(sun)
    }

    #[test]
    fn window_wraps_year_ends() {
        let (lo, hi) = search_window(2024, 1).unwrap();
        assert_eq!(lo.date(), NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(hi.date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let (lo, hi) = search_window(2024, 12).unwrap();
        assert_eq!(lo.date(), NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        assert_eq!(hi.date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn reached_handles_zero_wrap() {
        assert!(!reached(359.5, 0.0));
        assert!(reached(0.5, 0.0));
        assert!(!reached(260.0, 270.0));
        assert!(reached(271.0, 270.0));
    }

    #[test]
    fn solstices_2024() {
        let sun = AnalyticSun;
        let almanac = almanac_with(&sun);
        let (summer, winter) = almanac.solstices(2024).unwrap();
        assert_eq!(summer.date(), NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
        assert_eq!(winter.date(), NaiveDate::from_ymd_opt(2024, 12, 21).unwrap());
        // reference instants 20:51 and 09:20 UT, tolerate the series error
        assert!((summer.hour() as i32 - 20).abs() <= 1, "{summer}");
        assert!((winter.hour() as i32 - 9).abs() <= 1, "{winter}");
    }

    #[test]
    fn spring_equinox_2024_despite_wrap() {
        let sun = AnalyticSun;
        let almanac = almanac_with(&sun);
        let instant = almanac
            .term_instant(2024, SolarTerm::SpringEquinox)
            .unwrap();
        assert_eq!(
            instant.date(),
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
        );
    }

    #[test]
    fn start_of_spring_dates() {
        let sun = AnalyticSun;
        let almanac = almanac_with(&sun);
        assert_eq!(
            almanac.start_of_spring(2024).unwrap().date(),
            NaiveDate::from_ymd_opt(2024, 2, 4).unwrap()
        );
        assert_eq!(
            almanac.start_of_spring(2025).unwrap().date(),
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
        );
    }

    #[test]
    fn nearest_term_both_directions() {
        let sun = AnalyticSun;
        let almanac = almanac_with(&sun);
        let at = NaiveDate::from_ymd_opt(2024, 11, 19)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let (before, t_before) = almanac.nearest_term(at, Direction::Before).unwrap();
        assert_eq!(before, SolarTerm::StartOfWinter);
        assert!(t_before <= at);
        let (after, t_after) = almanac.nearest_term(at, Direction::After).unwrap();
        assert_eq!(after, SolarTerm::MinorSnow);
        assert!(t_after > at);
    }

    #[test]
    fn cache_is_consistent() {
        let sun = AnalyticSun;
        let almanac = almanac_with(&sun);
        let a = almanac.term_instant(2024, SolarTerm::GrainRain).unwrap();
        let b = almanac.term_instant(2024, SolarTerm::GrainRain).unwrap();
        assert_eq!(a, b);
    }
}
