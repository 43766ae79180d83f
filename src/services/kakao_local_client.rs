// src/services/kakao_local_client.rs
// DOCUMENTATION: Kakao Local API client
// PURPOSE: Category search around the office for restaurants and cafes

use crate::config::SearchArea;
use crate::config::search_area::SORT_ORDER;
use crate::errors::LunchError;
use crate::models::Place;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Path of the category search endpoint
pub const CATEGORY_SEARCH_PATH: &str = "/v2/local/search/category.json";

/// Kakao Local API client
/// DOCUMENTATION: Holds the REST API key and issues category searches
pub struct KakaoLocalClient {
    /// HTTP client for making requests
    client: Client,
    /// Kakao REST API key
    api_key: String,
    /// Base URL, e.g. https://dapi.kakao.com
    base_url: String,
}

/// Response from the category search endpoint
/// DOCUMENTATION: A missing `documents` array is read as no results
#[derive(Debug, Deserialize, Serialize)]
pub struct KakaoCategoryResponse {
    #[serde(default)]
    pub documents: Vec<KakaoDocument>,
}

/// Individual place document from Kakao
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KakaoDocument {
    pub place_name: String,
    /// Meters from the request origin, sent as a string
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub address_name: String,
    /// Empty string when the place has no phone
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub place_url: String,
}

impl KakaoDocument {
    /// Provider distance as whole meters, reading leading digits only
    pub fn distance_meters(&self) -> Option<u32> {
        let digits: String = self
            .distance
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// Convert to a Place; documents without a usable distance are dropped
    pub fn into_place(self) -> Option<Place> {
        let distance_meters = self.distance_meters()?;
        Some(Place {
            name: self.place_name,
            distance_meters,
            address: self.address_name,
            phone: self.phone.filter(|p| !p.trim().is_empty()),
            external_url: self.place_url,
        })
    }
}

impl KakaoLocalClient {
    /// Create new Kakao Local API client
    /// DOCUMENTATION: `base_url` is normally https://dapi.kakao.com
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search one category group around the configured origin
    /// DOCUMENTATION: Nearest first, one page of `area.page_size` results
    ///
    /// # Arguments
    /// * `area` - Origin, radius and page size
    /// * `category_code` - Kakao category group code (FD6, CE7)
    ///
    /// # Returns
    /// Documents in provider order
    pub async fn category_search(
        &self,
        area: &SearchArea,
        category_code: &str,
    ) -> Result<Vec<KakaoDocument>, LunchError> {
        if self.api_key.is_empty() {
            return Err(LunchError::Provider(
                "KAKAO_REST_API_KEY is not configured".to_string(),
            ));
        }

        let url = format!("{}{}", self.base_url, CATEGORY_SEARCH_PATH);

        let params = [
            ("x", area.longitude().to_string()),
            ("y", area.latitude().to_string()),
            ("radius", area.radius_meters.to_string()),
            ("size", area.page_size.to_string()),
            ("sort", SORT_ORDER.to_string()),
            ("category_group_code", category_code.to_string()),
        ];

        log::debug!(
            "Kakao category search: code={}, x={}, y={}, radius={}",
            category_code,
            area.longitude(),
            area.latitude(),
            area.radius_meters
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("KakaoAK {}", self.api_key))
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Kakao API request failed: {}", e);
                LunchError::Provider(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Kakao API error {}: {}", status, body);
            return Err(LunchError::Provider(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let api_response: KakaoCategoryResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Kakao response: {}", e);
            LunchError::Provider(format!("Parse error: {}", e))
        })?;

        log::debug!(
            "Kakao category {} returned {} documents",
            category_code,
            api_response.documents.len()
        );

        Ok(api_response.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn document(distance: &str) -> KakaoDocument {
        KakaoDocument {
            place_name: "김밥천국".to_string(),
            distance: distance.to_string(),
            address_name: "서울 강서구 마곡동 1".to_string(),
            phone: Some(String::new()),
            place_url: "http://place.map.kakao.com/123".to_string(),
        }
    }

    #[test]
    fn test_distance_parsing() {
        assert_eq!(document("500").distance_meters(), Some(500));
        assert_eq!(document(" 42 ").distance_meters(), Some(42));
        assert_eq!(document("120m").distance_meters(), Some(120));
        assert_eq!(document("").distance_meters(), None);
        assert_eq!(document("abc").distance_meters(), None);
    }

    #[test]
    fn test_into_place_drops_blank_phone() {
        let place = document("300").into_place().unwrap();
        assert_eq!(place.name, "김밥천국");
        assert_eq!(place.distance_meters, 300);
        assert_eq!(place.phone, None);
        assert_eq!(place.external_url, "http://place.map.kakao.com/123");
        assert!(document("").into_place().is_none());
    }

    #[tokio::test]
    async fn test_category_search_sends_fixed_parameters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(CATEGORY_SEARCH_PATH)
                    .query_param("x", "126.836806")
                    .query_param("y", "37.569203")
                    .query_param("radius", "1000")
                    .query_param("size", "15")
                    .query_param("sort", "distance")
                    .query_param("category_group_code", "CE7")
                    .header("authorization", "KakaoAK test-key");
                then.status(200).json_body(json!({
                    "documents": [
                        {
                            "place_name": "스타벅스",
                            "distance": "120",
                            "address_name": "서울 강서구 마곡동 2",
                            "phone": "02-000-0000",
                            "place_url": "http://place.map.kakao.com/1"
                        }
                    ]
                }));
            })
            .await;

        let client = KakaoLocalClient::new("test-key".to_string(), server.base_url());
        let docs = client
            .category_search(&SearchArea::default(), "CE7")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].place_name, "스타벅스");
    }

    #[tokio::test]
    async fn test_missing_documents_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(CATEGORY_SEARCH_PATH);
                then.status(200).json_body(json!({ "meta": { "total_count": 0 } }));
            })
            .await;

        let client = KakaoLocalClient::new("test-key".to_string(), server.base_url());
        let docs = client
            .category_search(&SearchArea::default(), "FD6")
            .await
            .unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_provider_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(CATEGORY_SEARCH_PATH);
                then.status(401).json_body(json!({ "errorType": "AccessDeniedError" }));
            })
            .await;

        let client = KakaoLocalClient::new("bad-key".to_string(), server.base_url());
        let result = client.category_search(&SearchArea::default(), "FD6").await;
        assert!(matches!(result, Err(LunchError::Provider(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_provider_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(CATEGORY_SEARCH_PATH);
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let client = KakaoLocalClient::new("test-key".to_string(), server.base_url());
        let result = client.category_search(&SearchArea::default(), "FD6").await;
        assert!(matches!(result, Err(LunchError::Provider(_))));
    }

    #[tokio::test]
    async fn test_missing_api_key_skips_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path(CATEGORY_SEARCH_PATH);
                then.status(200).json_body(json!({ "documents": [] }));
            })
            .await;

        let client = KakaoLocalClient::new(String::new(), server.base_url());
        let result = client.category_search(&SearchArea::default(), "FD6").await;

        assert!(matches!(result, Err(LunchError::Provider(_))));
        assert_eq!(mock.hits_async().await, 0);
    }
}
