//! Solar position model: equation of time, declination, solar noon.
//!
//! Low-precision closed-form fits, adequate to the minute for civil
//! timetables. The equation of time follows the standard almanac
//! approximation (mean longitude, mean anomaly, apparent ecliptic
//! longitude, right ascension via `atan2`); declination uses the
//! truncated Fourier series in day-of-year.

use std::f64::consts::TAU;

use crate::angle::normalize_360;

/// Fixed reference meridian for solar noon, in degrees east.
///
/// The timetable convention for the GMT+8 region references solar noon
/// to 120 deg E. This is deliberately a separate constant from the
/// caller's zone offset: the zone shifts the Julian Day epoch, the
/// meridian anchors the noon formula, and the two are not interchangeable.
pub const REFERENCE_MERIDIAN_DEG: f64 = 120.0;

/// Equation of time in minutes: apparent minus mean solar time.
///
/// `jd` is the re-based Julian Day from [`crate::julian::julian_day`].
/// Sign convention follows the timetable reference: positive values
/// push solar noon later on the clock.
pub fn equation_of_time_minutes(jd: f64) -> f64 {
    // Mean longitude and mean anomaly of the Sun, degrees
    let l = normalize_360(280.46 + 0.9856474 * jd);
    let g = normalize_360(357.528 + 0.9856003 * jd);

    let g_rad = g.to_radians();
    // Apparent ecliptic longitude (equation-of-center terms)
    let lambda = l + 1.915 * g_rad.sin() + 0.020 * (2.0 * g_rad).sin();

    // Obliquity of the ecliptic, slowly decreasing
    let eps = 23.439 - 0.000_000_4 * jd;
    // Right ascension from ecliptic coordinates, degrees
    let alpha = f64::atan2(
        eps.to_radians().cos() * lambda.to_radians().sin(),
        lambda.to_radians().cos(),
    )
    .to_degrees();

    // atan2 folds alpha into (-180, 180]; when lambda sits in the upper
    // half-turn the raw difference lands near 360 instead of near zero.
    // The 50-degree guard is the timetable convention's exact threshold
    // and must stay as-is to reproduce published times.
    let mut e = l - alpha;
    if e > 50.0 {
        e -= 360.0;
    }

    // One degree of hour angle is four minutes of time
    -e * 4.0
}

/// Solar declination in radians for a given day of year.
///
/// `days_since_jan1` is zero-based (January 1 maps to 0), matching
/// [`crate::julian::days_since_jan1`]; the series keeps its `(n - 1)`
/// phase term so the pair reproduces the reference timetables.
pub fn declination_rad(days_since_jan1: u32) -> f64 {
    let t = TAU * (days_since_jan1 as f64 - 1.0) / 365.0;

    0.006918 - 0.399912 * t.cos() + 0.070257 * t.sin() - 0.006758 * (2.0 * t).cos()
        + 0.000907 * (2.0 * t).sin()
        - 0.002696 * (3.0 * t).cos()
        + 0.00148 * (3.0 * t).sin()
}

/// Local clock time of solar meridian transit (istiwa), decimal hours.
///
/// Referenced to [`REFERENCE_MERIDIAN_DEG`]: each degree of longitude
/// west of the reference meridian delays noon by four minutes.
pub fn solar_noon_hours(eot_minutes: f64, longitude_deg: f64) -> f64 {
    (12.0 + eot_minutes / 60.0) + (REFERENCE_MERIDIAN_DEG - longitude_deg) / 15.0
}
