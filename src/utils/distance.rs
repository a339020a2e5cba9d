// Distance calculation utilities

use geo::{HaversineDistance, Point};

use crate::models::{Location, Meters};

/// Great-circle distance between two coordinates, in meters
pub fn great_circle_distance(from: &Location, to: &Location) -> Meters {
    let p1 = Point::new(from.lng, from.lat);
    let p2 = Point::new(to.lng, to.lat);
    p1.haversine_distance(&p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distance() {
        // Seoul City Hall to Gwanghwamun, roughly 1 km apart
        let city_hall = Location::new(37.5663, 126.9779);
        let gwanghwamun = Location::new(37.5759, 126.9769);

        let distance = great_circle_distance(&city_hall, &gwanghwamun);
        assert!(distance > 900.0 && distance < 1_300.0, "got {}", distance);
    }

    #[test]
    fn test_antimeridian() {
        let west = Location::new(0.0, 179.9);
        let east = Location::new(0.0, -179.9);

        // Short hop across the antimeridian, not most of the way around
        let distance = great_circle_distance(&west, &east);
        assert!(distance < 30_000.0, "got {}", distance);
    }
}
