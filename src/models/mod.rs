// Models module - exports all model types

mod location;
mod place;
mod schedule;
mod trip;
mod visit_model;

// Re-export model types
pub use self::location::Location;
pub use self::place::{Category, Place};
pub use self::schedule::{DaySchedule, ScheduleItem, TripPlan, TripSummary};
pub use self::trip::{calculate_trip_days, DayEntry, SavedPlaces, SavedTrip, TaggedPlace, TripData};
pub use self::visit_model::{VisitModel, VisitProfile};

// Common type aliases for improved code readability
pub type Meters = f64;
pub type Minutes = u32;
pub type Cost = u32;
