// Location model representing a geographic coordinate

use serde::{Deserialize, Serialize};

use crate::models::Meters;
use crate::utils::distance::great_circle_distance;

/// Represents a geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Creates a new location from latitude and longitude in degrees
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another location, in meters
    pub fn distance_to(&self, other: &Location) -> Meters {
        great_circle_distance(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_to_self() {
        let loc = Location::new(37.5665, 126.9780);
        assert_eq!(loc.distance_to(&loc), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let loc1 = Location::new(0.0, 0.0);
        let loc2 = Location::new(1.0, 0.0);

        // One degree of latitude is roughly 111 km
        let distance = loc1.distance_to(&loc2);
        assert!((distance - 111_000.0).abs() < 1_000.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let loc1 = Location::new(37.5665, 126.9780);
        let loc2 = Location::new(35.1796, 129.0756);

        assert_eq!(loc1.distance_to(&loc2), loc2.distance_to(&loc1));
    }
}
