// src/config/search_area.rs
// DOCUMENTATION: Fixed search parameters around the office
// PURPOSE: Origin coordinate, radius and page size sent with every category search

use geo_types::Point;

/// Office longitude
pub const ORIGIN_LONGITUDE: f64 = 126.836806;
/// Office latitude
pub const ORIGIN_LATITUDE: f64 = 37.569203;
/// Search and filter radius in meters
pub const SEARCH_RADIUS_METERS: u32 = 1000;
/// Results requested per category search
pub const PAGE_SIZE: u32 = 15;
/// Provider sort order (nearest first)
pub const SORT_ORDER: &str = "distance";

/// Where and how far to search
/// DOCUMENTATION: Built once at startup and injected into PlaceService
#[derive(Debug, Clone, PartialEq)]
pub struct SearchArea {
    /// Origin as (x = longitude, y = latitude)
    pub origin: Point<f64>,
    /// Radius in meters, used both upstream and in the local distance filter
    pub radius_meters: u32,
    /// Page size per provider request
    pub page_size: u32,
}

impl SearchArea {
    pub fn longitude(&self) -> f64 {
        self.origin.x()
    }

    pub fn latitude(&self) -> f64 {
        self.origin.y()
    }
}

impl Default for SearchArea {
    fn default() -> Self {
        Self {
            origin: Point::new(ORIGIN_LONGITUDE, ORIGIN_LATITUDE),
            radius_meters: SEARCH_RADIUS_METERS,
            page_size: PAGE_SIZE,
        }
    }
}
