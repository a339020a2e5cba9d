pub mod allocator;
pub mod planner;
pub mod sequencer;

pub use self::allocator::distribute_places_by_days;
pub use self::planner::ItineraryPlanner;
pub use self::sequencer::{MissingCoordinatePolicy, RouteSequencer};
