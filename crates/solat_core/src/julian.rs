//! Calendar conversions: day-of-year and Julian Day.
//!
//! The Julian Day here is the classical truncating Gregorian algorithm
//! re-based so that day zero falls near J2000.0. Every downstream solar
//! quantity (equation of time, obliquity) is fitted against this count,
//! so the epoch shift must not be changed independently of those fits.

/// Epoch shift subtracted from the classical Gregorian day count.
///
/// The classical accumulation below carries an implicit offset of
/// 1720994.5 days; together with this constant the count is re-based to
/// J2000.0 (1720994.5 + 730550.5 = 2451545.0).
const EPOCH_SHIFT: f64 = 730_550.5;

/// Cumulative days before the first of each month, non-leap year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month (1-12) of a given year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days elapsed since January 1 of the same year. January 1 maps to 0.
///
/// This zero-based convention is paired with the `(n - 1)` phase term in
/// [`crate::solar::declination_rad`]; the two must move together.
/// Out-of-range months map to 0, mirroring [`days_in_month`]; callers
/// validate dates before deriving anything from them.
pub fn days_since_jan1(year: i32, month: u32, day: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    let mut n = DAYS_BEFORE_MONTH[(month - 1) as usize] + day.saturating_sub(1);
    if month > 2 && is_leap_year(year) {
        n += 1;
    }
    n
}

/// Julian Day re-based near J2000.0, expressed at the given local zone.
///
/// Standard Gregorian accumulation: January/February are counted as
/// months 13/14 of the previous year, `B` corrects for the Gregorian
/// century rule, and the 365.25 / 30.6001 terms are truncated, not
/// rounded. The zone offset shifts the count so the value refers to
/// local midnight rather than UTC midnight.
pub fn julian_day(year: i32, month: u32, day: u32, zone_offset_hours: i32) -> f64 {
    let (mut y, mut m) = (year as i64, month as i64);
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    // Century part of the year and the Gregorian reform correction.
    let a = y / 100;
    let b = 2 - a + a / 4;

    // Truncating casts are intentional: the classical algorithm floors
    // these terms, and y is positive for all accepted dates.
    let c = (365.25 * y as f64) as i64;
    let d = (30.6001 * (m + 1) as f64) as i64;

    (b + c + d + day as i64) as f64 - EPOCH_SHIFT - zone_offset_hours as f64 / 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn jan1_is_zero() {
        assert_eq!(days_since_jan1(2024, 1, 1), 0);
        assert_eq!(days_since_jan1(2023, 1, 1), 0);
    }

    #[test]
    fn doy_leap_vs_common() {
        // March 1: 59 days elapsed in a common year, 60 in a leap year
        assert_eq!(days_since_jan1(2023, 3, 1), 59);
        assert_eq!(days_since_jan1(2024, 3, 1), 60);
    }

    #[test]
    fn doy_summer_solstice_leap() {
        assert_eq!(days_since_jan1(2024, 6, 21), 172);
    }

    #[test]
    fn doy_out_of_range_month_is_zero() {
        assert_eq!(days_since_jan1(2024, 0, 1), 0);
        assert_eq!(days_since_jan1(2024, 13, 5), 0);
        // Day 0 saturates instead of underflowing
        assert_eq!(days_since_jan1(2024, 1, 0), 0);
    }

    #[test]
    fn doy_year_end() {
        assert_eq!(days_since_jan1(2023, 12, 31), 364);
        assert_eq!(days_since_jan1(2024, 12, 31), 365);
    }

    #[test]
    fn jd_reference_date() {
        // 2024-06-21 at zone +8, cross-checked against the reference
        // implementation of the same truncating algorithm.
        let jd = julian_day(2024, 6, 21, 8);
        assert!(
            (jd - 8937.166666666666).abs() < 1e-9,
            "jd = {jd}"
        );
    }

    #[test]
    fn jd_zone_shift() {
        let jd0 = julian_day(2024, 6, 21, 0);
        let jd8 = julian_day(2024, 6, 21, 8);
        assert!(
            (jd0 - jd8 - 8.0 / 24.0).abs() < 1e-12,
            "zone shift: jd0 = {jd0}, jd8 = {jd8}"
        );
    }

    #[test]
    fn jd_consecutive_days() {
        let a = julian_day(2024, 2, 28, 8);
        let b = julian_day(2024, 2, 29, 8);
        let c = julian_day(2024, 3, 1, 8);
        assert!((b - a - 1.0).abs() < 1e-12);
        assert!((c - b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn jd_jan_feb_shift() {
        // January/February fold into months 13/14 of the prior year;
        // the count must still advance by exactly one day across Dec 31.
        let dec31 = julian_day(2023, 12, 31, 0);
        let jan1 = julian_day(2024, 1, 1, 0);
        assert!((jan1 - dec31 - 1.0).abs() < 1e-12);
    }
}
