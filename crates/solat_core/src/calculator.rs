//! Prayer-time orchestration: one solar state, seven markers.

use crate::error::SolatError;
use crate::hour_angle::{asr_altitude_deg, hour_angle_hours};
use crate::types::{CalendarDate, GeoLocation, MarkerTime, PrayerTimes, SolarState};

/// Sun altitude for dawn and nightfall (Fajr/Isya), degrees.
pub const DAWN_ALTITUDE_DEG: f64 = -18.0;

/// Sun altitude for sunrise and sunset (Shuruq/Maghrib), degrees.
///
/// The timetable convention uses a flat -1 deg rather than the
/// astronomical -50 arcmin; it absorbs refraction and semidiameter in
/// one round figure and is kept to match published tables.
pub const HORIZON_ALTITUDE_DEG: f64 = -1.0;

/// Imsak precedes Fajr by ten minutes.
pub const IMSAK_OFFSET_HOURS: f64 = 10.0 / 60.0;

/// Dhuhr follows meridian transit by two minutes.
pub const DHUHR_OFFSET_HOURS: f64 = 2.0 / 60.0;

/// Compute all seven markers for a location and date.
///
/// Validates inputs, derives the solar state once, then evaluates each
/// marker's hour angle independently. A marker whose altitude the sun
/// never reaches comes back as [`MarkerTime::Undefined`]; the others
/// are still computed, so high-latitude summers keep Dhuhr and Asr
/// while losing Fajr and Isya.
pub fn compute(
    location: &GeoLocation,
    date: &CalendarDate,
) -> Result<PrayerTimes, SolatError> {
    location.validate()?;
    date.validate()?;

    let solar = SolarState::for_query(location, date);
    let noon = solar.solar_noon_hours;
    let dec = solar.declination_rad;
    let lat = location.latitude_deg;

    let dawn = hour_angle_hours(dec, lat, DAWN_ALTITUDE_DEG);
    let horizon = hour_angle_hours(dec, lat, HORIZON_ALTITUDE_DEG);
    let asr = hour_angle_hours(dec, lat, asr_altitude_deg(dec, lat));

    let before = |ha: Option<f64>, extra: f64| match ha {
        Some(h) => MarkerTime::At(noon - h - extra),
        None => MarkerTime::Undefined,
    };
    let after = |ha: Option<f64>| match ha {
        Some(h) => MarkerTime::At(noon + h),
        None => MarkerTime::Undefined,
    };

    Ok(PrayerTimes {
        imsak: before(dawn, IMSAK_OFFSET_HOURS),
        fajr: before(dawn, 0.0),
        shuruq: before(horizon, 0.0),
        dhuhr: MarkerTime::At(noon + DHUHR_OFFSET_HOURS),
        asr: after(asr),
        maghrib: after(horizon),
        isya: after(dawn),
    })
}
