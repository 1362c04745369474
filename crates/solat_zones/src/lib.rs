//! Read-only zone catalog: (city, state) → coordinates.
//!
//! A static table embedded at compile time; lookups are exact string
//! matches and enumeration preserves the table's state-then-city order.
//! No storage backend, no mutation.

mod data;

/// One catalog row: a city with its state and coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub city: &'static str,
    pub state: &'static str,
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl Zone {
    pub(crate) const fn new(
        city: &'static str,
        state: &'static str,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Self {
        Self {
            city,
            state,
            latitude_deg,
            longitude_deg,
        }
    }
}

/// All catalog rows.
pub fn zones() -> &'static [Zone] {
    data::ZONES
}

/// Distinct states, in catalog order (sorted).
pub fn states() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for z in data::ZONES {
        if out.last() != Some(&z.state) {
            out.push(z.state);
        }
    }
    out
}

/// Cities belonging to a state, in catalog order (sorted).
///
/// Empty when the state is unknown; exact match only.
pub fn cities_in_state(state: &str) -> Vec<&'static str> {
    data::ZONES
        .iter()
        .filter(|z| z.state == state)
        .map(|z| z.city)
        .collect()
}

/// Look up one zone by exact (city, state) pair.
pub fn find(city: &str, state: &str) -> Option<&'static Zone> {
    data::ZONES
        .iter()
        .find(|z| z.city == city && z.state == state)
}
