//! Configuration resolution: symbol-head location, the leap rule, and the
//! polarity/number tables.
//!
//! The intercalation method anchors the count at a solstice, substitutes a
//! neighbouring term when the solstice's own symbol-head lies more than
//! nine days back (the leap), then walks forward in 15-day blocks to the
//! resolved term and five-day period. The split-patch method reads the
//! period off the head day's branch group.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use qimen_base::{Branch, Period, Polarity, SolarTerm, StemBranch};
use qimen_almanac::{Almanac, Direction, day_pillar, reckoning_date};

use crate::error::ChartError;

/// A solstice symbol-head further back than this triggers the leap.
pub const LEAP_THRESHOLD_DAYS: u8 = 9;

/// Period banding boundaries for a symbol-head's `days_ago` (inclusive).
const UPPER_BAND_MAX: u8 = 5;
const MIDDLE_BAND_MAX: u8 = 10;
const LOWER_BAND_MAX: u8 = 15;

/// Days per term block and per period band in the forward walk.
const DAYS_PER_TERM: i64 = 15;
const DAYS_PER_PERIOD: i64 = 5;

/// How the symbol-head anchoring the configuration count is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AnchorMethod {
    /// Anchor at the four designated head days (every 15th cycle index)
    /// and insert leap segments at the solstices.
    #[default]
    Intercalation,
    /// Anchor at the nearest Jia or Ji day and read the period straight
    /// from the term in effect.
    SplitPatch,
}

/// The symbol-head governing a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnchorInfo {
    pub method: AnchorMethod,
    /// The head day's pair.
    pub head: StemBranch,
    /// Calendar date of the head day.
    pub date: NaiveDate,
    /// Whole days from the head to the queried day.
    pub days_ago: u8,
    /// Period of the head: the five-day band of `days_ago` under
    /// intercalation, the head branch's group under split-patch.
    pub period: Period,
    /// 1-based day within the band.
    pub day_in_period: u8,
}

/// The fully resolved configuration of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Configuration {
    pub method: AnchorMethod,
    pub polarity: Polarity,
    /// Configuration number, 1-9.
    pub number: u8,
    /// Resolved term after the leap adjustment and forward walk.
    pub term: SolarTerm,
    pub period: Period,
    /// Symbol-head of the queried day itself.
    pub anchor: AnchorInfo,
    /// Head date the forward walk counts from.
    pub head_date: NaiveDate,
}

/// Locate the symbol-head governing `day`, which falls on `date`.
///
/// Under intercalation the heads sit at every 15th cycle index; under
/// split-patch every Jia or Ji day is a head.
pub fn locate_anchor(day: StemBranch, date: NaiveDate, method: AnchorMethod) -> AnchorInfo {
    let idx = day.cycle_index();
    let days_ago = match method {
        AnchorMethod::Intercalation => idx % 15,
        AnchorMethod::SplitPatch => idx % 5,
    };
    let head = StemBranch::from_index(idx - days_ago);
    let period = match method {
        AnchorMethod::Intercalation => band_period(days_ago),
        AnchorMethod::SplitPatch => head_branch_period(head.branch),
    };
    AnchorInfo {
        method,
        head,
        date: date - Days::new(days_ago as u64),
        days_ago,
        period,
        day_in_period: days_ago % 5 + 1,
    }
}

/// Band a symbol-head distance into a period. Distances beyond the lower
/// band fall back to Upper; that is a defined fallback, not an error.
pub fn band_period(days_ago: u8) -> Period {
    if days_ago <= UPPER_BAND_MAX {
        Period::Upper
    } else if days_ago <= MIDDLE_BAND_MAX {
        Period::Middle
    } else if days_ago <= LOWER_BAND_MAX {
        Period::Lower
    } else {
        Period::Upper
    }
}

/// Period of a split-patch head, read from its branch group: the cardinal
/// branches open Upper, the corner branches Middle, the storage branches
/// Lower.
pub const fn head_branch_period(branch: Branch) -> Period {
    match branch {
        Branch::Zi | Branch::Wu | Branch::Mao | Branch::You => Period::Upper,
        Branch::Yin | Branch::Shen | Branch::Si | Branch::Hai => Period::Middle,
        Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Period::Lower,
    }
}

/// The solstice governing a symbol-head instant: strictly before the
/// summer solstice of its year it is the previous winter solstice, then
/// the summer solstice until (strictly) the winter one. An instant exactly
/// at a solstice anchors at that solstice.
pub fn anchor_term_for(
    almanac: &Almanac<'_>,
    head: NaiveDateTime,
) -> Result<(SolarTerm, NaiveDateTime), ChartError> {
    let (summer, winter) = almanac.solstices(head.year())?;
    if head < summer {
        let (_, prev_winter) = almanac.solstices(head.year() - 1)?;
        Ok((SolarTerm::WinterSolstice, prev_winter))
    } else if head < winter {
        Ok((SolarTerm::SummerSolstice, summer))
    } else {
        Ok((SolarTerm::WinterSolstice, winter))
    }
}

/// Resolve the configuration for an instant whose day pillar is `day`.
pub fn resolve_configuration(
    almanac: &Almanac<'_>,
    at: NaiveDateTime,
    day: StemBranch,
    method: AnchorMethod,
) -> Result<Configuration, ChartError> {
    let date = reckoning_date(at);
    let anchor = locate_anchor(day, date, method);

    let (term, period, head_date) = match method {
        AnchorMethod::Intercalation => {
            let head_at = anchor.date.and_time(at.time());
            let (anchor_term, anchor_instant) = anchor_term_for(almanac, head_at)?;

            // the leap check re-anchors on the solstice's own reckoned
            // day, which rolls at 23:00 like any other
            let solstice_date = reckoning_date(anchor_instant);
            let solstice_day = day_pillar(solstice_date)?;
            let solstice_anchor =
                locate_anchor(solstice_day, solstice_date, AnchorMethod::Intercalation);
            let term = if solstice_anchor.days_ago > LEAP_THRESHOLD_DAYS {
                // the inserted segment repeats from the same head day, so
                // only the term name changes, never the head date
                anchor_term.leap_substitute().unwrap_or(anchor_term)
            } else {
                anchor_term
            };

            let days = (date - solstice_anchor.date).num_days();
            let (q, r) = (days.div_euclid(DAYS_PER_TERM), days.rem_euclid(DAYS_PER_TERM));
            let resolved = SolarTerm::from_index((term.index() as i64 + q).rem_euclid(24) as u8);
            let period = match r / DAYS_PER_PERIOD {
                0 => Period::Upper,
                1 => Period::Middle,
                _ => Period::Lower,
            };
            (resolved, period, solstice_anchor.date)
        }
        AnchorMethod::SplitPatch => {
            let (term, instant) = almanac.nearest_term(at, Direction::Before)?;
            (term, anchor.period, instant.date())
        }
    };

    let (polarity, number) = configuration_number(term, period)?;
    Ok(Configuration {
        method,
        polarity,
        number,
        term,
        period,
        anchor,
        head_date,
    })
}

// --- polarity/number tables ------------------------------------------------

/// `[Upper, Middle, Lower]` numbers for the forward (yang) terms.
const fn forward_row(term: SolarTerm) -> Option<[u8; 3]> {
    use SolarTerm::*;
    match term {
        WinterSolstice => Some([1, 7, 4]),
        MinorCold => Some([2, 8, 5]),
        MajorCold => Some([3, 9, 6]),
        StartOfSpring => Some([8, 5, 2]),
        RainWater => Some([9, 6, 3]),
        AwakeningOfInsects => Some([1, 7, 4]),
        SpringEquinox => Some([3, 9, 6]),
        ClearAndBright => Some([4, 1, 7]),
        GrainRain => Some([5, 2, 8]),
        StartOfSummer => Some([4, 1, 7]),
        GrainFull => Some([5, 2, 8]),
        GrainInEar => Some([6, 3, 9]),
        _ => None,
    }
}

/// `[Upper, Middle, Lower]` numbers for the reverse (yin) terms.
const fn reverse_row(term: SolarTerm) -> Option<[u8; 3]> {
    use SolarTerm::*;
    match term {
        SummerSolstice => Some([9, 3, 6]),
        MinorHeat => Some([8, 2, 5]),
        MajorHeat => Some([7, 1, 4]),
        StartOfAutumn => Some([2, 5, 8]),
        EndOfHeat => Some([1, 4, 7]),
        WhiteDew => Some([9, 3, 6]),
        AutumnEquinox => Some([7, 6, 5]),
        ColdDew => Some([6, 5, 4]),
        FrostDescent => Some([5, 4, 3]),
        StartOfWinter => Some([6, 5, 4]),
        MinorSnow => Some([5, 8, 3]),
        MajorSnow => Some([4, 3, 2]),
        _ => None,
    }
}

/// Configuration number and polarity for a term/period pair.
///
/// Every term sits in exactly one of the two tables; a miss in both is a
/// hard error, never a silent default.
pub fn configuration_number(
    term: SolarTerm,
    period: Period,
) -> Result<(Polarity, u8), ChartError> {
    let slot = period.index() as usize;
    if let Some(row) = forward_row(term) {
        Ok((Polarity::Yang, row[slot]))
    } else if let Some(row) = reverse_row(term) {
        Ok((Polarity::Yin, row[slot]))
    } else {
        Err(ChartError::ConfigurationLookup { term, period })
    }
}
