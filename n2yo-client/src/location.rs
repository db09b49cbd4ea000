//! Observer location and the per-call fallback policy

use serde::{Deserialize, Serialize};

/// Observer position on Earth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Degrees, north positive
    pub latitude: f64,
    /// Degrees, east positive
    pub longitude: f64,
    /// Meters above sea level
    pub altitude_meters: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, altitude_meters: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude_meters,
        }
    }

    /// A coordinate that is NaN or infinite counts as unset.
    pub fn is_complete(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite() && self.altitude_meters.is_finite()
    }
}

/// Outcome of resolving the location for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationResolution {
    Resolved(Location),
    Missing,
}

impl LocationResolution {
    pub fn into_option(self) -> Option<Location> {
        match self {
            LocationResolution::Resolved(location) => Some(location),
            LocationResolution::Missing => None,
        }
    }
}

/// Pick the location for a request: the per-call override wins, then the
/// configured default. An incomplete location resolves to `Missing`.
pub fn resolve_location(
    override_location: Option<Location>,
    default_location: Option<Location>,
) -> LocationResolution {
    match override_location.or(default_location) {
        Some(location) if location.is_complete() => LocationResolution::Resolved(location),
        _ => LocationResolution::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Location {
        Location::new(41.702, -76.014, 0.0)
    }

    #[test]
    fn test_override_wins() {
        let other = Location::new(51.5, -0.12, 35.0);
        assert_eq!(
            resolve_location(Some(other), Some(home())),
            LocationResolution::Resolved(other)
        );
    }

    #[test]
    fn test_falls_back_to_default() {
        assert_eq!(
            resolve_location(None, Some(home())),
            LocationResolution::Resolved(home())
        );
    }

    #[test]
    fn test_missing_without_any_location() {
        assert_eq!(resolve_location(None, None), LocationResolution::Missing);
    }

    #[test]
    fn test_incomplete_override_is_missing() {
        // An explicit but incomplete override does not silently use the default
        let broken = Location::new(f64::NAN, -76.014, 0.0);
        assert_eq!(
            resolve_location(Some(broken), Some(home())),
            LocationResolution::Missing
        );
    }

    #[test]
    fn test_location_without_altitude_is_rejected() {
        let result =
            serde_json::from_str::<Location>(r#"{"latitude": 41.7, "longitude": -76.1}"#);
        assert!(result.is_err());

        let location: Location = serde_json::from_str(
            r#"{"latitude": 41.7, "longitude": -76.1, "altitude_meters": 0}"#,
        )
        .unwrap();
        assert!(location.is_complete());
    }

    #[test]
    fn test_unset_altitude_is_missing() {
        let no_altitude = Location::new(41.7, -76.1, f64::NAN);
        assert!(!no_altitude.is_complete());
        assert_eq!(resolve_location(Some(no_altitude), None), LocationResolution::Missing);
    }
}
