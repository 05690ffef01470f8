//! The sexagenary clock: year, month, day, and hour pillars.
//!
//! Year and month pillars follow the solar calendar, so they flip at term
//! instants (Start-of-Spring for the year, section terms for the month),
//! not at civil new year. Day pillars are plain modular arithmetic against
//! a fixed epoch, with the day rolling over at 23:00 rather than midnight;
//! hour pillars derive from the day stem by the five-rats rule.
//! Timestamps are naive civil time throughout.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use qimen_base::{Branch, Stem, StemBranch, XunHead};

use crate::error::AlmanacError;
use crate::terms::{Almanac, Direction};

/// A Jia-Zi day on the fixed epoch used for day-pillar arithmetic.
const DAY_EPOCH: (i32, u32, u32) = (2025, 2, 24);

/// First civil year of an era cycle: 4 CE opened a Jia-Zi year.
const YEAR_EPOCH: i32 = 4;

/// The four pillars of a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

impl FourPillars {
    /// Decad head of the hour pillar.
    pub fn hour_xun(&self) -> XunHead {
        XunHead::of(self.hour)
    }
}

/// Year pillar of an instant. The solar year begins at Start-of-Spring.
pub fn year_pillar(
    almanac: &Almanac<'_>,
    at: NaiveDateTime,
) -> Result<StemBranch, AlmanacError> {
    let spring = almanac.start_of_spring(at.year())?;
    let solar_year = if at < spring { at.year() - 1 } else { at.year() };
    Ok(StemBranch::from_index(
        (solar_year - YEAR_EPOCH).rem_euclid(60) as u8,
    ))
}

/// Month pillar of an instant. Solar months open at the section terms
/// (every second term from Start-of-Spring); the stem follows the
/// five-tigers rule from the year stem.
pub fn month_pillar(
    almanac: &Almanac<'_>,
    at: NaiveDateTime,
) -> Result<StemBranch, AlmanacError> {
    let (term, _) = almanac.nearest_term(at, Direction::Before)?;
    // section index 0 = the Yin month opened by Start-of-Spring; a mid-term
    // belongs to the section before it, which integer division absorbs
    let section = term.index() / 2;
    let branch = Branch::from_index((2 + section) % 12);

    let year_stem = year_pillar(almanac, at)?.stem;
    // five tigers: the first month's stem advances two stems per year stem
    let start = (year_stem.index() % 5) * 2 + 2;
    let stem = Stem::from_index((start + section) % 10);

    // the five-tigers construction always lands on matching parity
    debug_assert_eq!(stem.index() % 2, branch.index() % 2);
    Ok(StemBranch { stem, branch })
}

/// The date an instant is reckoned under: the late Zi hour (23:00-23:59)
/// already belongs to the next day.
pub fn reckoning_date(at: NaiveDateTime) -> NaiveDate {
    if at.hour() == 23 {
        at.date() + Days::new(1)
    } else {
        at.date()
    }
}

/// Day pillar of a reckoning date (see [`reckoning_date`]).
pub fn day_pillar(date: NaiveDate) -> Result<StemBranch, AlmanacError> {
    let (y, m, d) = DAY_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or(AlmanacError::OutOfCalendarRange { year: y })?;
    let days = (date - epoch).num_days();
    Ok(StemBranch::from_index(days.rem_euclid(60) as u8))
}

/// Hour pillar of an instant. Double-hours open on odd civil hours, with
/// the Zi hour spanning 23:00-00:59; the stem follows the five-rats rule
/// from the day stem.
pub fn hour_pillar(day: StemBranch, at: NaiveDateTime) -> StemBranch {
    let branch_idx = ((at.hour() + 1) / 2) % 12;
    let branch = Branch::from_index(branch_idx as u8);
    let start = (day.stem.index() % 5) * 2;
    let stem = Stem::from_index((start + branch_idx as u8) % 10);
    StemBranch { stem, branch }
}

/// All four pillars of an instant.
pub fn four_pillars(
    almanac: &Almanac<'_>,
    at: NaiveDateTime,
) -> Result<FourPillars, AlmanacError> {
    let day = day_pillar(reckoning_date(at))?;
    Ok(FourPillars {
        year: year_pillar(almanac, at)?,
        month: month_pillar(almanac, at)?,
        day,
        hour: hour_pillar(day, at),
    })
}
