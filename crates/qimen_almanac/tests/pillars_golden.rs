//! Golden four-pillar fixtures, hand-traced from the cycle tables.

use chrono::{NaiveDate, NaiveDateTime};
use qimen_almanac::{Almanac, four_pillars};
use qimen_base::{Branch, Stem, XunHead};
use qimen_ephem::AnalyticSun;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[test]
fn pillars_autumn_evening_2024() {
    let sun = AnalyticSun;
    let almanac = Almanac::new(&sun);
    let pillars = four_pillars(&almanac, at(2024, 11, 19, 20, 0)).unwrap();

    assert_eq!(pillars.year.cycle_index(), 40); // Jia-Chen
    assert_eq!(pillars.year.stem, Stem::Jia);
    assert_eq!(pillars.year.branch, Branch::Chen);

    assert_eq!(pillars.month.stem, Stem::Yi);
    assert_eq!(pillars.month.branch, Branch::Hai);

    assert_eq!(pillars.day.cycle_index(), 23); // Ding-Hai
    assert_eq!(pillars.hour.cycle_index(), 46); // Geng-Xu

    assert_eq!(pillars.hour_xun(), XunHead::JiaChen);
    assert_eq!(pillars.hour_xun().instrument(), Stem::Ren);
}

#[test]
fn pillars_late_winter_2025() {
    let sun = AnalyticSun;
    let almanac = Almanac::new(&sun);
    let pillars = four_pillars(&almanac, at(2025, 2, 28, 18, 30)).unwrap();

    assert_eq!(pillars.year.cycle_index(), 41); // Yi-Si
    assert_eq!(pillars.month.stem, Stem::Wu);
    assert_eq!(pillars.month.branch, Branch::Yin);
    assert_eq!(pillars.day.cycle_index(), 4); // Wu-Chen
    assert_eq!(pillars.hour.cycle_index(), 57); // Xin-You

    assert_eq!(pillars.hour_xun(), XunHead::JiaYin);
    assert_eq!(pillars.hour_xun().instrument(), Stem::Gui);
}

#[test]
fn year_flips_at_start_of_spring_not_new_year() {
    let sun = AnalyticSun;
    let almanac = Almanac::new(&sun);

    // mid-January 2025 still belongs to the Jia-Chen solar year
    let before = four_pillars(&almanac, at(2025, 1, 15, 12, 0)).unwrap();
    assert_eq!(before.year.cycle_index(), 40);

    // a week after Start-of-Spring the Yi-Si year has opened
    let after = four_pillars(&almanac, at(2025, 2, 10, 12, 0)).unwrap();
    assert_eq!(after.year.cycle_index(), 41);
}

#[test]
fn month_flips_at_section_terms() {
    let sun = AnalyticSun;
    let almanac = Almanac::new(&sun);

    // after Major Snow (Dec 6-7) the Zi month has opened: Bing-Zi
    let pillars = four_pillars(&almanac, at(2024, 12, 10, 12, 0)).unwrap();
    assert_eq!(pillars.month.stem, Stem::Bing);
    assert_eq!(pillars.month.branch, Branch::Zi);

    // early December, before Major Snow, is still the Hai month
    let pillars = four_pillars(&almanac, at(2024, 12, 3, 12, 0)).unwrap();
    assert_eq!(pillars.month.branch, Branch::Hai);
}
