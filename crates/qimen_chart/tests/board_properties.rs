//! Structural properties that must hold for every cast, checked over a
//! sweep of timestamps through a full year.

use chrono::{Days, NaiveDate, NaiveDateTime};
use qimen_almanac::{Almanac, day_pillar};
use qimen_base::{Palace, Polarity, SolarTerm, StemBranch};
use qimen_chart::config::anchor_term_for;
use qimen_chart::{cast_chart, AnchorMethod, cast_chart_with};
use qimen_ephem::AnalyticSun;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn year_sweep() -> impl Iterator<Item = NaiveDateTime> {
    let start = at(2024, 3, 1, 9, 30);
    (0..36u64).map(move |i| start + Days::new(i * 11))
}

#[test]
fn earth_plate_covers_all_tokens_everywhere() {
    for ts in year_sweep() {
        let chart = cast_chart(ts).unwrap();
        let mut indices: Vec<u8> = chart.board.cells.iter().map(|c| c.earth.index()).collect();
        indices.sort_unstable();
        assert_eq!(indices, [1, 2, 3, 4, 5, 6, 7, 8, 9], "{ts}");
    }
}

#[test]
fn configuration_stays_in_range() {
    for ts in year_sweep() {
        let chart = cast_chart(ts).unwrap();
        let config = &chart.configuration;
        assert!((1..=9).contains(&config.number), "{ts}");
        assert_eq!(config.polarity, config.term.polarity(), "{ts}");
        assert!(config.anchor.days_ago < 60, "{ts}");
        assert!((1..=5).contains(&config.anchor.day_in_period), "{ts}");
    }
}

#[test]
fn split_patch_method_also_stays_in_range() {
    let sun = AnalyticSun;
    for ts in year_sweep().step_by(4) {
        let chart = cast_chart_with(&sun, ts, AnchorMethod::SplitPatch).unwrap();
        assert!((1..=9).contains(&chart.configuration.number), "{ts}");
        assert!(chart.configuration.anchor.days_ago < 5, "{ts}");
        // the period is the head's in both places
        assert_eq!(
            chart.configuration.period, chart.configuration.anchor.period,
            "{ts}"
        );
    }
}

#[test]
fn outer_rings_are_complete_and_center_is_fixed() {
    for ts in year_sweep().step_by(3) {
        let chart = cast_chart(ts).unwrap();
        let center = chart.board.cell(Palace::Center);
        assert_eq!(center.sky, center.earth, "{ts}");
        assert_eq!(center.gate, None, "{ts}");
        assert_eq!(center.deity, None, "{ts}");

        let mut gates: Vec<_> = chart.board.cells.iter().filter_map(|c| c.gate).collect();
        gates.sort_by_key(|g| g.name());
        gates.dedup();
        assert_eq!(gates.len(), 8, "{ts}");

        let mut deities: Vec<_> = chart.board.cells.iter().filter_map(|c| c.deity).collect();
        deities.sort_by_key(|d| d.name());
        deities.dedup();
        assert_eq!(deities.len(), 8, "{ts}");
    }
}

#[test]
fn day_pair_index_is_a_bijection() {
    for idx in 0..60u8 {
        let pair = StemBranch::from_index(idx);
        assert_eq!(StemBranch::from_index(pair.cycle_index()), pair);
    }
}

#[test]
fn epoch_day_is_cycle_origin() {
    let pillar = day_pillar(NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()).unwrap();
    assert_eq!(pillar.cycle_index(), 0);
}

#[test]
fn solstice_anchors_itself() {
    let sun = AnalyticSun;
    let almanac = Almanac::new(&sun);
    let (summer, winter) = almanac.solstices(2024).unwrap();

    let (term, instant) = anchor_term_for(&almanac, winter).unwrap();
    assert_eq!(term, SolarTerm::WinterSolstice);
    assert_eq!(instant, winter);

    let (term, instant) = anchor_term_for(&almanac, summer).unwrap();
    assert_eq!(term, SolarTerm::SummerSolstice);
    assert_eq!(instant, summer);
}

#[test]
fn duty_palace_tracks_hours_within_a_decad() {
    // two hours of the same decad, one double-hour apart, in a yin chart:
    // the duty palace steps one palace number backward
    let first = cast_chart(at(2024, 11, 19, 20, 0)).unwrap();
    let second = cast_chart(at(2024, 11, 19, 22, 0)).unwrap();
    assert_eq!(first.board.xun, second.board.xun);
    assert_eq!(first.configuration.polarity, Polarity::Yin);
    assert_eq!(first.board.duty_gate, second.board.duty_gate);
    assert_eq!(first.board.duty_palace.number(), 7);
    assert_eq!(second.board.duty_palace.number(), 6);
}
