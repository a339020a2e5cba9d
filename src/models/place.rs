// Place model representing points of interest returned by the place search

use serde::{Deserialize, Serialize};

use crate::models::Location;

/// Category assigned to a place by the search provider.
///
/// Stored data may carry category strings this crate does not know about;
/// those deserialize into `Other` and fall through to the default visit
/// profile instead of failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Lodging,
    Restaurant,
    TouristAttraction,
    Cafe,
    ShoppingMall,
    #[serde(other)]
    Other,
}

/// Represents a candidate or selected point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Provider-assigned identifier, unique within one search session
    pub id: String,

    /// Display name of the place
    pub name: String,

    /// Free-text vicinity/address string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,

    /// Provider rating, 0-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Category assigned by the search provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Geographic coordinate, absent for malformed records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Place {
    /// Creates a new place with the given id, name, category, and coordinate
    pub fn new<S: Into<String>>(id: S, name: S, category: Category, location: Location) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vicinity: None,
            rating: None,
            category: Some(category),
            location: Some(location),
        }
    }
}
