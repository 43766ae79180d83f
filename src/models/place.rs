// src/models/place.rs
// DOCUMENTATION: Place data returned to callers
// PURPOSE: Normalized place record built fresh from each provider response

use serde::{Deserialize, Serialize};

/// Average walking speed used for the "minutes on foot" estimate
pub const WALKING_METERS_PER_MINUTE: f64 = 67.0;

/// A nearby restaurant or cafe
/// DOCUMENTATION: Immutable, no identity beyond its fields, never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,

    /// Distance from the office as reported by the provider
    pub distance_meters: u32,

    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Provider's place page
    pub external_url: String,
}

impl Place {
    /// Estimated walking time in whole minutes
    pub fn walking_minutes(&self) -> u32 {
        (self.distance_meters as f64 / WALKING_METERS_PER_MINUTE).round() as u32
    }
}

/// Query parameters for GET /lunch and GET /fragments/places
/// DOCUMENTATION: `category` is parsed with CategorySelector::from_query
#[derive(Debug, Deserialize)]
pub struct LunchQuery {
    pub category: Option<String>,
}

/// Response DTO for GET /lunch
#[derive(Debug, Serialize, Deserialize)]
pub struct LunchResponse {
    pub results: Vec<Place>,
}
