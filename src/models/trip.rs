// Trip metadata and the persisted trip record

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Place;

/// Trip metadata supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripData {
    /// Destination label, used only for display
    pub destination: String,

    /// ISO date string, e.g. "2024-03-01"
    pub start_date: String,

    /// ISO date string, inclusive end of the trip
    pub end_date: String,

    /// Number of travellers
    pub participants: u32,
}

impl TripData {
    pub fn new<S: Into<String>>(destination: S, start_date: S, end_date: S, participants: u32) -> Self {
        Self {
            destination: destination.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            participants,
        }
    }

    /// Inclusive length of the trip in days, never less than 1
    pub fn trip_days(&self) -> u32 {
        calculate_trip_days(&self.start_date, &self.end_date)
    }

    /// Parsed start date, if well-formed
    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()
    }
}

/// Inclusive day count between two ISO date strings.
///
/// Malformed dates or an end before the start fall back to a single day so
/// a bad form field can never take down schedule rendering.
pub fn calculate_trip_days(start_date: &str, end_date: &str) -> u32 {
    let parsed = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .and_then(|start| NaiveDate::parse_from_str(end_date, "%Y-%m-%d").map(|end| (start, end)));

    match parsed {
        Ok((start, end)) => {
            let days = (end - start).num_days() + 1;
            if days > 0 {
                days as u32
            } else {
                1
            }
        }
        Err(_) => 1,
    }
}

/// A place as it appears inside a saved trip, optionally tagged with the
/// day it was planned for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedPlace {
    #[serde(flatten)]
    pub place: Place,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

/// One day's block in the nested saved-trip layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    pub places: Vec<TaggedPlace>,
}

/// The two saved-trip place layouts found in existing stored data: a flat,
/// optionally day-tagged list, and a nested per-day structure. Both must
/// keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavedPlaces {
    Nested(Vec<DayEntry>),
    Flat(Vec<TaggedPlace>),
}

/// A persisted trip record: the original selections plus trip metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTrip {
    pub id: u64,
    pub title: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub participants: u32,
    pub places: SavedPlaces,
}

impl SavedTrip {
    /// Normalizes either saved layout into places grouped by day number.
    ///
    /// Untagged places land on day 1, matching how existing trips without
    /// day information are displayed.
    pub fn places_by_day(&self) -> BTreeMap<u32, Vec<Place>> {
        let mut grouped: BTreeMap<u32, Vec<Place>> = BTreeMap::new();

        match &self.places {
            SavedPlaces::Nested(entries) => {
                for entry in entries {
                    let day = if entry.day > 0 { entry.day } else { 1 };
                    let bucket = grouped.entry(day).or_default();
                    bucket.extend(entry.places.iter().map(|tagged| tagged.place.clone()));
                }
            }
            SavedPlaces::Flat(tagged_places) => {
                for tagged in tagged_places {
                    let day = tagged.day.filter(|&d| d > 0).unwrap_or(1);
                    grouped.entry(day).or_default().push(tagged.place.clone());
                }
            }
        }

        grouped
    }
}
