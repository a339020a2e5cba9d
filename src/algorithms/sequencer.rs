// Route sequencer producing an ordered, time-annotated schedule for one day

use chrono::{Duration, NaiveTime};

use crate::models::{Location, Meters, Minutes, Place, ScheduleItem, VisitModel};

/// Walking speed used to turn leg distance into travel minutes,
/// roughly 3 km/h. A coarse heuristic, not a routing-API call.
const WALK_METERS_PER_MINUTE: f64 = 50.0;

/// Hour of day the simulated clock starts at
const DAY_START_HOUR: u32 = 9;

/// How the sequencer treats a place without a coordinate.
///
/// Existing schedules were built with such places scored at distance zero,
/// which makes a malformed record the preferred next stop. That is likely
/// unintentional, but changing it silently would reorder saved trips, so it
/// stays the default and `Deprioritize` is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCoordinatePolicy {
    /// Score unknown legs as zero-length, visiting the place immediately
    #[default]
    PreferNearest,

    /// Score unknown legs as infinitely long, visiting the place last
    Deprioritize,
}

/// Builds a visit order over one day's places with a greedy
/// nearest-neighbor heuristic.
///
/// Deliberately not an optimal tour solver: the greedy order and its
/// first-encountered tie-break are load-bearing for reproducing previously
/// saved schedules, so they must not be "improved" into an exact solve.
#[derive(Debug, Clone, Default)]
pub struct RouteSequencer {
    visit_model: VisitModel,
    missing_coordinate: MissingCoordinatePolicy,
}

/// Accumulated planning state while stops are being placed
struct PlanningState {
    clock: NaiveTime,
    current_location: Option<Location>,
    remaining: Vec<Place>,
    placed: Vec<ScheduleItem>,
}

impl PlanningState {
    fn new(places: &[Place], start_location: Option<Location>) -> Self {
        Self {
            clock: NaiveTime::from_hms_opt(DAY_START_HOUR, 0, 0).unwrap(),
            current_location: start_location.or_else(|| places[0].location),
            remaining: places.to_vec(),
            placed: Vec::with_capacity(places.len()),
        }
    }

    fn advance(&mut self, minutes: Minutes) {
        self.clock += Duration::minutes(i64::from(minutes));
    }
}

impl RouteSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequencer with a custom visit model
    pub fn new_with_model(visit_model: VisitModel) -> Self {
        Self {
            visit_model,
            missing_coordinate: MissingCoordinatePolicy::default(),
        }
    }

    /// Creates a sequencer with a custom visit model and coordinate policy
    pub fn new_with_policy(visit_model: VisitModel, policy: MissingCoordinatePolicy) -> Self {
        Self {
            visit_model,
            missing_coordinate: policy,
        }
    }

    /// Sequences one day's places into an ordered schedule.
    ///
    /// Starts from `start_location` when supplied, otherwise from the first
    /// place in the input. The simulated clock starts at 09:00; travel time
    /// advances it before an arrival is recorded (skipped for the first
    /// stop), the visit duration advances it afterwards. Given the same
    /// input order and starting location the output is fully deterministic.
    pub fn sequence(&self, places: &[Place], start_location: Option<Location>) -> Vec<ScheduleItem> {
        if places.is_empty() {
            return Vec::new();
        }

        let mut state = PlanningState::new(places, start_location);
        while !state.remaining.is_empty() {
            let (index, leg) = self.nearest_unvisited(&state);
            self.place_stop(&mut state, index, leg);
        }

        state.placed
    }

    /// Finds the unvisited place closest to the current location.
    ///
    /// The strict `<` keeps the first-encountered place on ties, which makes
    /// the order reproducible for equal distances.
    fn nearest_unvisited(&self, state: &PlanningState) -> (usize, Option<Meters>) {
        let mut best_index = 0;
        let mut best_leg = self.leg(state.current_location, &state.remaining[0]);

        for (index, place) in state.remaining.iter().enumerate().skip(1) {
            let leg = self.leg(state.current_location, place);
            if self.selection_key(leg) < self.selection_key(best_leg) {
                best_index = index;
                best_leg = leg;
            }
        }

        (best_index, best_leg)
    }

    /// Distance of the leg to a place, or `None` when either end has no
    /// usable coordinate
    fn leg(&self, from: Option<Location>, to: &Place) -> Option<Meters> {
        match (from, to.location) {
            (Some(from), Some(to)) => Some(from.distance_to(&to)),
            _ => None,
        }
    }

    fn selection_key(&self, leg: Option<Meters>) -> f64 {
        match leg {
            Some(distance) => distance,
            None => match self.missing_coordinate {
                MissingCoordinatePolicy::PreferNearest => 0.0,
                MissingCoordinatePolicy::Deprioritize => f64::INFINITY,
            },
        }
    }

    fn place_stop(&self, state: &mut PlanningState, index: usize, leg: Option<Meters>) {
        let place = state.remaining.remove(index);
        let profile = self.visit_model.profile(place.category);

        // Unknown legs are recorded as zero-length regardless of policy
        let distance = leg.unwrap_or(0.0);
        let travel_time = (distance / WALK_METERS_PER_MINUTE).ceil() as Minutes;

        let is_first = state.placed.is_empty();
        if !is_first {
            state.advance(travel_time);
        }

        if place.location.is_some() {
            state.current_location = place.location;
        }

        let item = ScheduleItem {
            order: state.placed.len() as u32 + 1,
            estimated_time: state.clock.format("%H:%M").to_string(),
            duration: profile.duration,
            distance_from_previous: (!is_first).then_some(distance),
            travel_time: (!is_first).then_some(travel_time),
            estimated_cost: profile.cost,
            place,
        };
        state.placed.push(item);

        state.advance(profile.duration);
    }
}
