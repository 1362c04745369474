//! Core types: location, date, solar state, markers, and results.

use std::fmt::{Display, Formatter};

use crate::error::SolatError;
use crate::format::format_clock;
use crate::julian::{days_in_month, days_since_jan1, julian_day};
use crate::solar::{declination_rad, equation_of_time_minutes, solar_noon_hours};

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Reject out-of-range coordinates before any computation.
    pub fn validate(&self) -> Result<(), SolatError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(SolatError::InvalidLocation("latitude out of [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(SolatError::InvalidLocation("longitude out of [-180, 180]"));
        }
        Ok(())
    }
}

/// Proleptic Gregorian calendar date with the observer's UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Observer's UTC offset in whole hours.
    pub zone_offset_hours: i32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32, zone_offset_hours: i32) -> Self {
        Self {
            year,
            month,
            day,
            zone_offset_hours,
        }
    }

    /// Reject nonexistent dates and unsupported years.
    pub fn validate(&self) -> Result<(), SolatError> {
        if self.year <= 0 {
            return Err(SolatError::InvalidDate("year must be positive"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(SolatError::InvalidDate("month out of [1, 12]"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(SolatError::InvalidDate("day out of range for month"));
        }
        Ok(())
    }
}

/// Derived solar quantities shared by every marker of one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarState {
    /// Solar declination in radians.
    pub declination_rad: f64,
    /// Local clock time of meridian transit (istiwa), decimal hours.
    pub solar_noon_hours: f64,
}

impl SolarState {
    /// Compute declination and solar noon once for a location and date.
    ///
    /// Inputs must already be validated; this is the computation step
    /// only. Declination depends on the date alone, solar noon also on
    /// the longitude and the zone-shifted Julian Day.
    pub fn for_query(location: &GeoLocation, date: &CalendarDate) -> Self {
        let n = days_since_jan1(date.year, date.month, date.day);
        let jd = julian_day(date.year, date.month, date.day, date.zone_offset_hours);
        let eot = equation_of_time_minutes(jd);
        Self {
            declination_rad: declination_rad(n),
            solar_noon_hours: solar_noon_hours(eot, location.longitude_deg),
        }
    }
}

/// The seven daily markers, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Imsak,
    Fajr,
    Shuruq,
    Dhuhr,
    Asr,
    Maghrib,
    Isya,
}

/// All markers in display (chronological) order.
pub const ALL_MARKERS: [Marker; 7] = [
    Marker::Imsak,
    Marker::Fajr,
    Marker::Shuruq,
    Marker::Dhuhr,
    Marker::Asr,
    Marker::Maghrib,
    Marker::Isya,
];

impl Marker {
    /// Display label, Malay timetable spelling.
    pub fn label(self) -> &'static str {
        match self {
            Self::Imsak => "Imsak",
            Self::Fajr => "Fajr",
            Self::Shuruq => "Syuruk",
            Self::Dhuhr => "Zuhr",
            Self::Asr => "Asar",
            Self::Maghrib => "Maghrib",
            Self::Isya => "Isyak",
        }
    }
}

/// A single marker's outcome: a clock time, or no solution for this
/// date and latitude (the sun never reaches the marker's altitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerTime {
    /// Local clock time in decimal hours.
    At(f64),
    /// The marker has no solution today at this latitude.
    Undefined,
}

impl MarkerTime {
    /// Decimal hours, if defined.
    pub fn hours(self) -> Option<f64> {
        match self {
            Self::At(h) => Some(h),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Self::At(_))
    }
}

impl Display for MarkerTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::At(h) => write!(f, "{}", format_clock(*h)),
            Self::Undefined => write!(f, "--:--:--"),
        }
    }
}

/// The full set of marker times for one (location, date, zone) query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    pub imsak: MarkerTime,
    pub fajr: MarkerTime,
    pub shuruq: MarkerTime,
    pub dhuhr: MarkerTime,
    pub asr: MarkerTime,
    pub maghrib: MarkerTime,
    pub isya: MarkerTime,
}

impl PrayerTimes {
    /// Marker access by name.
    pub fn get(&self, marker: Marker) -> MarkerTime {
        match marker {
            Marker::Imsak => self.imsak,
            Marker::Fajr => self.fajr,
            Marker::Shuruq => self.shuruq,
            Marker::Dhuhr => self.dhuhr,
            Marker::Asr => self.asr,
            Marker::Maghrib => self.maghrib,
            Marker::Isya => self.isya,
        }
    }

    /// Iterate markers with their outcomes in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Marker, MarkerTime)> + '_ {
        ALL_MARKERS.iter().map(move |&m| (m, self.get(m)))
    }
}
