//! Apparent geocentric solar longitude.
//!
//! [`SolarEphemeris`] is the oracle seam: the almanac layer only ever asks
//! for the sun's apparent ecliptic longitude at a Julian day. [`AnalyticSun`]
//! is the built-in backend, a truncated analytic series good to roughly
//! 0.01°, which places solar-term instants within about a quarter hour —
//! far inside the whole-day granularity the chart derivation consumes.

use crate::error::EphemerisError;
use crate::julian::centuries_since_j2000;

/// Oracle for the sun's apparent ecliptic longitude.
pub trait SolarEphemeris {
    /// Apparent geocentric ecliptic longitude at `jd`, degrees in [0, 360).
    fn solar_longitude(&self, jd: f64) -> Result<f64, EphemerisError>;
}

/// Fold an angle in degrees into [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Built-in analytic solar-longitude backend.
///
/// Mean longitude and equation of center to three terms, corrected for
/// aberration and nutation in longitude. Valid over several millennia
/// around J2000 at the stated accuracy, so it never reports out-of-range.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticSun;

impl SolarEphemeris for AnalyticSun {
    fn solar_longitude(&self, jd: f64) -> Result<f64, EphemerisError> {
        let t = centuries_since_j2000(jd);

        // geometric mean longitude and mean anomaly
        let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
        let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();

        // equation of center
        let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
            + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin();

        // aberration and nutation corrections give the apparent longitude
        let omega = (125.04 - 1_934.136 * t).to_radians();
        let apparent = l0 + c - 0.005_69 - 0.004_78 * omega.sin();

        Ok(normalize_360(apparent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::{J2000_JD, jd_from_datetime};
    use chrono::NaiveDate;

    fn lon_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> f64 {
        let dt = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap();
        AnalyticSun.solar_longitude(jd_from_datetime(dt)).unwrap()
    }

    fn angular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn longitude_at_j2000() {
        let lon = AnalyticSun.solar_longitude(J2000_JD).unwrap();
        assert!(angular_distance(lon, 280.37) < 0.05, "got {lon}");
    }

    #[test]
    fn equinox_2024() {
        // 2024 March equinox: 2024-03-20 03:06 UT
        let lon = lon_at(2024, 3, 20, 3, 6);
        assert!(angular_distance(lon, 0.0) < 0.02, "got {lon}");
    }

    #[test]
    fn solstices_2024() {
        // June solstice 2024-06-20 20:51 UT, December solstice 2024-12-21 09:20 UT
        let summer = lon_at(2024, 6, 20, 20, 51);
        assert!(angular_distance(summer, 90.0) < 0.02, "got {summer}");
        let winter = lon_at(2024, 12, 21, 9, 20);
        assert!(angular_distance(winter, 270.0) < 0.02, "got {winter}");
    }

    #[test]
    fn longitude_is_normalized() {
        for day in 0..400 {
            let lon = AnalyticSun
                .solar_longitude(J2000_JD + day as f64)
                .unwrap();
            assert!((0.0..360.0).contains(&lon), "day {day}: {lon}");
        }
    }

    #[test]
    fn advances_about_a_degree_per_day() {
        let a = AnalyticSun.solar_longitude(J2000_JD + 100.0).unwrap();
        let b = AnalyticSun.solar_longitude(J2000_JD + 101.0).unwrap();
        let step = (b - a).rem_euclid(360.0);
        assert!((0.9..1.1).contains(&step), "step {step}");
    }

    #[test]
    fn normalize_wraps_both_signs() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-90.0), 270.0);
        assert_eq!(normalize_360(725.0), 5.0);
    }
}
