use serde::{Deserialize, Serialize};

/// Geographic coordinate identifying a location.
///
/// Supplied by the caller, typically from a static city directory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, [-180, 180].
    pub lng: f64,
}

impl Coordinate {
    /// Creates a validated coordinate, or `None` if either component is out of range.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng))
            .then_some(Self { lat, lng })
    }

    /// Creates a coordinate without range validation.
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        assert!(Coordinate::new(30.0444, 31.2357).is_some());
        assert!(Coordinate::new(-90.0, 180.0).is_some());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Coordinate::new(91.0, 0.0).is_none());
        assert!(Coordinate::new(0.0, -180.5).is_none());
    }
}
