// Public modules
pub mod algorithms;
pub mod models;
pub mod storage;
pub mod utils;

// Re-exports for convenience
pub use algorithms::{ItineraryPlanner, MissingCoordinatePolicy, RouteSequencer};
pub use models::{
    Category, DaySchedule, Place, SavedTrip, ScheduleItem, TripData, TripPlan, TripSummary,
    VisitModel,
};
pub use storage::{JsonFileStore, TripStore};
