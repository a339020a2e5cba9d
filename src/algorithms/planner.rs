// Itinerary planner assembling day buckets into a complete trip plan

use chrono::Duration;
use log::debug;

use crate::algorithms::allocator::distribute_places_by_days;
use crate::algorithms::sequencer::{MissingCoordinatePolicy, RouteSequencer};
use crate::models::{DaySchedule, Location, Place, ScheduleItem, TripData, TripPlan, VisitModel};

/// Plans a trip from a snapshot of selected places and trip metadata.
///
/// Pure computation: the planner holds no cross-call state and performs no
/// I/O, so it is safe to re-run on every selection change. The caller owns
/// persistence and any debouncing.
#[derive(Debug, Clone, Default)]
pub struct ItineraryPlanner {
    sequencer: RouteSequencer,
}

impl ItineraryPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner with a custom visit model
    pub fn new_with_model(visit_model: VisitModel) -> Self {
        Self {
            sequencer: RouteSequencer::new_with_model(visit_model),
        }
    }

    /// Creates a planner with a custom visit model and coordinate policy
    pub fn new_with_policy(visit_model: VisitModel, policy: MissingCoordinatePolicy) -> Self {
        Self {
            sequencer: RouteSequencer::new_with_policy(visit_model, policy),
        }
    }

    /// Plans the whole trip: places are split across the trip's days in
    /// input order, then each day is sequenced independently.
    ///
    /// Day N is dated `start_date + (N - 1)` days when the start date
    /// parses; malformed dates leave the days undated and the trip one day
    /// long rather than failing.
    pub fn plan(&self, places: &[Place], trip: &TripData) -> TripPlan {
        let trip_days = trip.trip_days();
        let start = trip.start();
        debug!(
            "planning {} places over {} days for {}",
            places.len(),
            trip_days,
            trip.destination
        );

        let days = distribute_places_by_days(places, trip_days)
            .iter()
            .enumerate()
            .map(|(index, bucket)| DaySchedule {
                day: index as u32 + 1,
                date: start.map(|date| date + Duration::days(index as i64)),
                items: self.sequencer.sequence(bucket, None),
            })
            .collect();

        TripPlan { days }
    }

    /// Sequences a single day's places without touching day allocation,
    /// optionally starting from an explicit coordinate. Used for per-day
    /// previews while the user is still editing selections.
    pub fn plan_single_day(&self, places: &[Place], start_location: Option<Location>) -> Vec<ScheduleItem> {
        self.sequencer.sequence(places, start_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn make_places(count: usize) -> Vec<Place> {
        (0..count)
            .map(|i| {
                Place::new(
                    format!("p{}", i),
                    format!("Place {}", i),
                    Category::TouristAttraction,
                    Location::new(37.50 + i as f64 * 0.01, 127.00),
                )
            })
            .collect()
    }

    #[test]
    fn test_plan_spans_trip_days_with_dates() {
        let places = make_places(5);
        let trip = TripData::new("Seoul", "2024-03-01", "2024-03-03", 2);

        let plan = ItineraryPlanner::new().plan(&places, &trip);

        assert_eq!(plan.days.len(), 3);
        assert_eq!(plan.days[0].day, 1);
        assert_eq!(plan.days[0].date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(plan.days[2].date, NaiveDate::from_ymd_opt(2024, 3, 3));

        let sizes: Vec<usize> = plan.days.iter().map(|d| d.items.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_malformed_dates_collapse_to_one_undated_day() {
        let places = make_places(4);
        let trip = TripData::new("Seoul", "sometime", "later", 2);

        let plan = ItineraryPlanner::new().plan(&places, &trip);

        assert_eq!(plan.days.len(), 1);
        assert!(plan.days[0].date.is_none());
        assert_eq!(plan.days[0].items.len(), 4);
    }

    #[test]
    fn test_no_places_gives_one_empty_day() {
        let trip = TripData::new("Seoul", "2024-03-01", "2024-03-03", 2);

        let plan = ItineraryPlanner::new().plan(&[], &trip);

        assert_eq!(plan.days.len(), 1);
        assert!(plan.days[0].items.is_empty());
        assert_eq!(plan.summary().total_cost, 0);
    }

    #[test]
    fn test_single_day_preview_uses_start_location() {
        let places = make_places(3);
        let start = Location::new(37.52, 127.00);

        let preview = ItineraryPlanner::new().plan_single_day(&places, Some(start));

        assert_eq!(preview.len(), 3);
        assert_eq!(preview[0].place.id, "p2"); // closest to the start
    }
}
