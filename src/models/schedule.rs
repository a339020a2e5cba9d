// Schedule models for sequenced stops and the assembled trip plan

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Cost, Meters, Minutes, Place};

/// A place annotated with its computed position in a day's schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// The place being visited
    pub place: Place,

    /// 1-based visit order within the day
    pub order: u32,

    /// Estimated clock time of arrival, formatted `HH:MM`
    pub estimated_time: String,

    /// Visit duration in minutes, from the visit model
    pub duration: Minutes,

    /// Distance from the previous stop in meters, absent for the first stop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_previous: Option<Meters>,

    /// Travel time from the previous stop in minutes, absent for the first stop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<Minutes>,

    /// Expected spending at the place, from the visit model
    pub estimated_cost: Cost,
}

/// The ordered schedule for one calendar day of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// 1-based day index within the trip
    pub day: u32,

    /// Calendar date of this day, absent when the trip start date is malformed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Stops in visit order
    pub items: Vec<ScheduleItem>,
}

/// Trip-level totals for summary display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Sum of all leg distances across all days, in meters
    pub total_distance: Meters,

    /// Sum of visit durations and travel times across all days, in minutes
    pub total_duration: Minutes,

    /// Sum of expected spending across all days
    pub total_cost: Cost,
}

/// A complete planned trip: one schedule per day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub days: Vec<DaySchedule>,
}

impl TripPlan {
    fn items(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.days.iter().flat_map(|day| day.items.iter())
    }

    /// Total distance traveled across all days, in meters
    pub fn total_distance(&self) -> Meters {
        self.items()
            .filter_map(|item| item.distance_from_previous)
            .sum()
    }

    /// Total time spent visiting and traveling, in minutes
    pub fn total_duration(&self) -> Minutes {
        self.items()
            .map(|item| item.duration + item.travel_time.unwrap_or(0))
            .sum()
    }

    /// Total expected spending across all days
    pub fn total_cost(&self) -> Cost {
        self.items().map(|item| item.estimated_cost).sum()
    }

    /// Rolls the per-item figures up into trip-level totals
    pub fn summary(&self) -> TripSummary {
        TripSummary {
            total_distance: self.total_distance(),
            total_duration: self.total_duration(),
            total_cost: self.total_cost(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Location};

    fn item(order: u32, leg: Option<(Meters, Minutes)>, duration: Minutes, cost: Cost) -> ScheduleItem {
        ScheduleItem {
            place: Place::new("p", "Stop", Category::Cafe, Location::new(0.0, 0.0)),
            order,
            estimated_time: "09:00".to_string(),
            duration,
            distance_from_previous: leg.map(|(d, _)| d),
            travel_time: leg.map(|(_, t)| t),
            estimated_cost: cost,
        }
    }

    #[test]
    fn test_summary_totals() {
        let plan = TripPlan {
            days: vec![
                DaySchedule {
                    day: 1,
                    date: None,
                    items: vec![
                        item(1, None, 60, 6_000),
                        item(2, Some((250.0, 5)), 90, 15_000),
                    ],
                },
                DaySchedule {
                    day: 2,
                    date: None,
                    items: vec![item(1, None, 120, 10_000)],
                },
            ],
        };

        let summary = plan.summary();
        assert_eq!(summary.total_distance, 250.0);
        assert_eq!(summary.total_duration, 60 + 90 + 5 + 120);
        assert_eq!(summary.total_cost, 31_000);
    }

    #[test]
    fn test_empty_plan_sums_to_zero() {
        let plan = TripPlan { days: Vec::new() };

        let summary = plan.summary();
        assert_eq!(summary.total_distance, 0.0);
        assert_eq!(summary.total_duration, 0);
        assert_eq!(summary.total_cost, 0);
    }
}
