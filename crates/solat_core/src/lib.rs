//! Prayer-time calculation engine.
//!
//! Computes the five canonical daily prayer times plus two auxiliary
//! markers (Imsak, Shuruq) from approximate solar-position astronomy:
//! calendar date → Julian Day → equation of time → declination and
//! solar noon → per-marker hour angle → clock time.
//!
//! Every function is a pure computation over its inputs; there is no
//! I/O, no shared state, and identical inputs always yield identical
//! outputs. Markers the sun cannot reach on a given date and latitude
//! (polar conditions) come back as [`MarkerTime::Undefined`] rather
//! than failing the whole query.

pub mod angle;
pub mod calculator;
pub mod error;
pub mod format;
pub mod hour_angle;
pub mod julian;
pub mod solar;
pub mod types;

pub use calculator::{
    DAWN_ALTITUDE_DEG, DHUHR_OFFSET_HOURS, HORIZON_ALTITUDE_DEG, IMSAK_OFFSET_HOURS, compute,
};
pub use error::SolatError;
pub use format::format_clock;
pub use hour_angle::{asr_altitude_deg, hour_angle_hours};
pub use julian::{days_in_month, days_since_jan1, is_leap_year, julian_day};
pub use solar::{
    REFERENCE_MERIDIAN_DEG, declination_rad, equation_of_time_minutes, solar_noon_hours,
};
pub use types::{
    ALL_MARKERS, CalendarDate, GeoLocation, Marker, MarkerTime, PrayerTimes, SolarState,
};
