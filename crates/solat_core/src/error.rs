//! Error types for prayer-time computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from input validation. Computation itself cannot fail at the
/// request level; an unreachable altitude is a per-marker outcome, not
/// an error (see [`crate::types::MarkerTime`]).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolatError {
    /// Latitude or longitude outside its valid range.
    InvalidLocation(&'static str),
    /// Calendar date does not exist or the year is unsupported.
    InvalidDate(&'static str),
}

impl Display for SolatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for SolatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = SolatError::InvalidLocation("latitude out of [-90, 90]");
        assert_eq!(e.to_string(), "invalid location: latitude out of [-90, 90]");
        let e = SolatError::InvalidDate("day out of range for month");
        assert_eq!(e.to_string(), "invalid date: day out of range for month");
    }
}
