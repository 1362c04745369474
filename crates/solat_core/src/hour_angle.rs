//! Hour-angle computation: hours from solar noon to a target altitude.
//!
//! Spherical-astronomy identity:
//! `cos H = (sin h0 - sin dec * sin lat) / (cos dec * cos lat)`
//! with the result converted from degrees of hour angle to hours.
//! The domain of `acos` is checked first; outside it the sun never
//! reaches the requested altitude on that day at that latitude.

/// Hours between solar noon and the moment the sun reaches
/// `target_altitude_deg` (negative = below the horizon).
///
/// Returns `None` when the altitude is never reached (polar day or
/// polar night for that target). The check runs before `acos`, so no
/// NaN ever leaves this function.
pub fn hour_angle_hours(
    declination_rad: f64,
    latitude_deg: f64,
    target_altitude_deg: f64,
) -> Option<f64> {
    let h0 = target_altitude_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let cos_h = (h0.sin() - declination_rad.sin() * phi.sin())
        / (declination_rad.cos() * phi.cos());

    // Polar condition; also rejects NaN from degenerate latitudes.
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    Some(cos_h.acos().to_degrees() / 15.0)
}

/// Asr target altitude in degrees, shadow-length ratio 1.
///
/// `tan a = 1 / (1 + tan |lat - dec|)` with both angles in radians.
pub fn asr_altitude_deg(declination_rad: f64, latitude_deg: f64) -> f64 {
    let spread = (latitude_deg.to_radians() - declination_rad).abs();
    (1.0 / (1.0 + spread.tan())).atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_equinox_sunset() {
        // dec = 0, lat = 0, target 0: the sun crosses the horizon
        // exactly six hours from noon.
        let h = hour_angle_hours(0.0, 0.0, 0.0).unwrap();
        assert!((h - 6.0).abs() < 1e-12, "hour angle = {h}");
    }

    #[test]
    fn deeper_target_is_farther_from_noon() {
        let dec = 0.2;
        let h1 = hour_angle_hours(dec, 3.139, -1.0).unwrap();
        let h18 = hour_angle_hours(dec, 3.139, -18.0).unwrap();
        assert!(
            h18 > h1,
            "-18 deg ({h18}h) should be farther from noon than -1 deg ({h1}h)"
        );
    }

    #[test]
    fn polar_night_undefined() {
        // Tromso-like latitude at winter solstice: the sun never
        // reaches -1 deg, cos H > 1.
        let dec = (-23.44_f64).to_radians();
        assert_eq!(hour_angle_hours(dec, 70.0, -1.0), None);
    }

    #[test]
    fn midnight_sun_undefined() {
        // High-latitude midsummer: the sun never goes down to -18 deg,
        // cos H < -1.
        let dec = 23.44_f64.to_radians();
        assert_eq!(hour_angle_hours(dec, 70.0, -18.0), None);
    }

    #[test]
    fn midsummer_noon_still_defined_at_high_latitude() {
        // Same latitude and date: a positive target the sun does pass
        // through remains well-defined.
        let dec = 23.44_f64.to_radians();
        let a = asr_altitude_deg(dec, 70.0);
        assert!(
            hour_angle_hours(dec, 70.0, a).is_some(),
            "asr target {a} deg should be reachable"
        );
    }

    #[test]
    fn degenerate_pole_is_rejected() {
        // cos(lat) = 0 drives the ratio to infinity or NaN; both must
        // come back as None, never reach acos.
        let dec = 0.1;
        assert_eq!(hour_angle_hours(dec, 90.0, -1.0), None);
    }

    #[test]
    fn asr_altitude_tropics() {
        // Near the equator at solstice the spread is ~20 deg:
        // tan a = 1 / (1 + tan 20 deg) -> a ~ 36 deg.
        let dec = 23.45_f64.to_radians();
        let a = asr_altitude_deg(dec, 3.139);
        assert!(
            (30.0..45.0).contains(&a),
            "asr altitude = {a} deg"
        );
    }

    #[test]
    fn asr_altitude_symmetric_in_spread() {
        let dec = 0.1;
        let north = asr_altitude_deg(dec, 40.0);
        let south = asr_altitude_deg(-dec, -40.0);
        assert!(
            (north - south).abs() < 1e-12,
            "north = {north}, south = {south}"
        );
    }
}
