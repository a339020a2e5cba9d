// Trip persistence: a store trait and a JSON-file implementation

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::models::SavedTrip;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed trip store: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Keyed persistence for saved trips.
///
/// The planner itself never touches storage; callers pass a store in
/// wherever trips need saving or re-loading.
pub trait TripStore {
    /// Saves a trip under a user id, replacing any trip with the same id
    fn save(&self, user_id: &str, trip: &SavedTrip) -> Result<()>;

    /// Loads all trips saved under a user id, empty when none exist
    fn load_all(&self, user_id: &str) -> Result<Vec<SavedTrip>>;
}

/// Trip store backed by a single JSON file mapping user ids to trip lists
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_store(&self) -> Result<HashMap<String, Vec<SavedTrip>>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write_store(&self, store: &HashMap<String, Vec<SavedTrip>>) -> Result<()> {
        let json = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl TripStore for JsonFileStore {
    fn save(&self, user_id: &str, trip: &SavedTrip) -> Result<()> {
        let mut store = self.read_store()?;
        let trips = store.entry(user_id.to_string()).or_default();

        match trips.iter_mut().find(|existing| existing.id == trip.id) {
            Some(existing) => *existing = trip.clone(),
            None => trips.push(trip.clone()),
        }

        debug!("saved trip {} for user {}", trip.id, user_id);
        self.write_store(&store)
    }

    fn load_all(&self, user_id: &str) -> Result<Vec<SavedTrip>> {
        let store = self.read_store()?;
        Ok(store.get(user_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SavedPlaces, TaggedPlace};

    fn temp_store(name: &str) -> JsonFileStore {
        let path = std::env::temp_dir().join(format!("trip_store_{}_{}.json", std::process::id(), name));
        let _ = fs::remove_file(&path);
        JsonFileStore::new(path)
    }

    fn sample_trip(id: u64) -> SavedTrip {
        SavedTrip {
            id,
            title: format!("Trip {}", id),
            destination: "Seoul".to_string(),
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-03".to_string(),
            participants: 2,
            places: SavedPlaces::Flat(Vec::<TaggedPlace>::new()),
        }
    }

    #[test]
    fn test_load_from_missing_file_is_empty() {
        let store = temp_store("missing");
        assert!(store.load_all("u1").unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = temp_store("round_trip");

        store.save("u1", &sample_trip(1)).unwrap();
        store.save("u1", &sample_trip(2)).unwrap();
        store.save("u2", &sample_trip(3)).unwrap();

        let trips = store.load_all("u1").unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].id, 1);
        assert_eq!(store.load_all("u2").unwrap().len(), 1);
    }

    #[test]
    fn test_saving_same_id_replaces() {
        let store = temp_store("replace");

        store.save("u1", &sample_trip(1)).unwrap();
        let mut updated = sample_trip(1);
        updated.title = "Renamed".to_string();
        store.save("u1", &updated).unwrap();

        let trips = store.load_all("u1").unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].title, "Renamed");
    }
}
