use trip_planner::models::{Category, Location, Place, SavedPlaces, SavedTrip, TaggedPlace, TripData};
use trip_planner::storage::{JsonFileStore, TripStore};
use trip_planner::ItineraryPlanner;

fn main() {
    env_logger::init();

    let places = sample_places();
    let trip = TripData::new("Seoul", "2024-03-01", "2024-03-03", 2);

    println!(
        "Planning {} places in {} from {} to {} ({} days)",
        places.len(),
        trip.destination,
        trip.start_date,
        trip.end_date,
        trip.trip_days()
    );

    let planner = ItineraryPlanner::new();
    let plan = planner.plan(&places, &trip);

    println!("\nOptimized schedule:");
    println!("------------------------------------------");
    for day in &plan.days {
        match day.date {
            Some(date) => println!("Day {} ({})", day.day, date),
            None => println!("Day {}", day.day),
        }
        for item in &day.items {
            print!("  {}. {} at {}", item.order, item.place.name, item.estimated_time);
            if let (Some(distance), Some(travel)) = (item.distance_from_previous, item.travel_time) {
                print!("  ({:.0} m, {} min on foot)", distance, travel);
            }
            println!("  stay {} min, ~{} won", item.duration, item.estimated_cost);
        }
    }

    let summary = plan.summary();
    println!("------------------------------------------");
    println!("Total distance: {:.0} m", summary.total_distance);
    println!(
        "Total time: {} min ({} h {} min)",
        summary.total_duration,
        summary.total_duration / 60,
        summary.total_duration % 60
    );
    println!("Estimated cost: {} won", summary.total_cost);

    // Persist the selections the way the UI would on "save trip"
    let saved = SavedTrip {
        id: 1,
        title: format!("{} getaway", trip.destination),
        destination: trip.destination.clone(),
        start_date: trip.start_date.clone(),
        end_date: trip.end_date.clone(),
        participants: trip.participants,
        places: SavedPlaces::Flat(
            plan.days
                .iter()
                .flat_map(|day| {
                    day.items.iter().map(|item| TaggedPlace {
                        place: item.place.clone(),
                        day: Some(day.day),
                    })
                })
                .collect(),
        ),
    };

    let store = JsonFileStore::new("trips.json");
    match store.save("demo-user", &saved) {
        Ok(()) => match store.load_all("demo-user") {
            Ok(trips) => println!("\nSaved. {} trip(s) on record for demo-user.", trips.len()),
            Err(e) => eprintln!("Failed to reload trips: {}", e),
        },
        Err(e) => eprintln!("Failed to save trip: {}", e),
    }
}

fn sample_places() -> Vec<Place> {
    vec![
        Place::new(
            "gyeongbokgung",
            "Gyeongbokgung Palace",
            Category::TouristAttraction,
            Location::new(37.5796, 126.9770),
        ),
        Place::new(
            "tosokchon",
            "Tosokchon Samgyetang",
            Category::Restaurant,
            Location::new(37.5785, 126.9715),
        ),
        Place::new(
            "bukchon",
            "Bukchon Hanok Village",
            Category::TouristAttraction,
            Location::new(37.5826, 126.9831),
        ),
        Place::new(
            "onion",
            "Cafe Onion Anguk",
            Category::Cafe,
            Location::new(37.5779, 126.9856),
        ),
        Place::new(
            "myeongdong",
            "Myeongdong Shopping Street",
            Category::ShoppingMall,
            Location::new(37.5637, 126.9838),
        ),
        Place::new(
            "namsan",
            "N Seoul Tower",
            Category::TouristAttraction,
            Location::new(37.5512, 126.9882),
        ),
        Place::new(
            "hotel",
            "Stay Myeongdong",
            Category::Lodging,
            Location::new(37.5619, 126.9850),
        ),
    ]
}
