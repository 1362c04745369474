//! Clock-time formatting for decimal-hour values.

/// Format decimal hours as "HH:MM:SS".
///
/// Each component is truncated, never rounded: published timetables are
/// produced this way and rounding would drift some entries by a second.
/// Inputs outside [0, 24) are not wrapped; callers wrap if they need to.
pub fn format_clock(decimal_hours: f64) -> String {
    let h = decimal_hours as i64;
    let minutes = (decimal_hours - h as f64) * 60.0;
    let m = minutes as i64;
    let s = ((minutes - m as f64) * 60.0) as i64;

    format!("{h:02}:{m:02}:{s:02}")
}
