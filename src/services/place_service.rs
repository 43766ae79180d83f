// src/services/place_service.rs
// DOCUMENTATION: Business logic for nearby place suggestions
// PURPOSE: Query Kakao per category, filter by distance, sample a few

use crate::config::SearchArea;
use crate::errors::LunchError;
use crate::models::{CategorySelector, Place};
use crate::services::kakao_local_client::{KakaoDocument, KakaoLocalClient};
use crate::services::sampling::sample;

/// Places returned per query
pub const MAX_SUGGESTIONS: usize = 3;

/// Places query service
/// DOCUMENTATION: Stateless; one instance is shared by every request
pub struct PlaceService {
    client: KakaoLocalClient,
    area: SearchArea,
}

impl PlaceService {
    pub fn new(client: KakaoLocalClient, area: SearchArea) -> Self {
        Self { client, area }
    }

    /// Up to three random places within the radius for `selector`
    /// DOCUMENTATION: `All` runs both category searches concurrently and
    /// fails as a whole if either one fails
    pub async fn query_nearby_places(
        &self,
        selector: CategorySelector,
    ) -> Result<Vec<Place>, LunchError> {
        let candidates = self.fetch_candidates(selector).await?;
        let picked = sample(candidates, MAX_SUGGESTIONS, &mut rand::rng());

        log::info!(
            "Suggesting {} place(s) for category {}",
            picked.len(),
            selector
        );
        Ok(picked)
    }

    /// Every place within the radius, in provider order, before sampling
    pub async fn fetch_candidates(
        &self,
        selector: CategorySelector,
    ) -> Result<Vec<Place>, LunchError> {
        let documents: Vec<KakaoDocument> = match selector.category_codes() {
            [first, second] => {
                let (first_docs, second_docs) = tokio::try_join!(
                    self.client.category_search(&self.area, first),
                    self.client.category_search(&self.area, second),
                )?;
                first_docs.into_iter().chain(second_docs).collect()
            }
            codes => {
                let mut documents = Vec::new();
                for code in codes {
                    documents.extend(self.client.category_search(&self.area, code).await?);
                }
                documents
            }
        };

        let fetched = documents.len();
        let places = within_radius(documents, self.area.radius_meters);
        log::debug!(
            "{} of {} documents within {}m",
            places.len(),
            fetched,
            self.area.radius_meters
        );

        Ok(places)
    }
}

/// Keep documents whose parsed distance is at most `radius_meters`
pub fn within_radius(documents: Vec<KakaoDocument>, radius_meters: u32) -> Vec<Place> {
    documents
        .into_iter()
        .filter_map(KakaoDocument::into_place)
        .filter(|place| place.distance_meters <= radius_meters)
        .collect()
}
