//! Google Places Nearby Search client with parallel category fan-out.

use std::collections::HashMap;
use std::time::Duration;

use funday_core::Location;
use serde::Deserialize;
use tracing::instrument;

use crate::distance::haversine_km;
use crate::types::{OpeningHours, Place, PlacesError};

const GOOGLE_PLACES_BASE: &str = "https://maps.googleapis.com/maps/api/place";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_PHOTOS_PER_PLACE: usize = 3;

/// The fixed category set searched for every request.
pub const KID_FRIENDLY_CATEGORIES: [&str; 10] = [
    "amusement_park",
    "aquarium",
    "zoo",
    "museum",
    "park",
    "bowling_alley",
    "movie_theater",
    "library",
    "shopping_mall",
    "tourist_attraction",
];

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<RawPlace>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<RawPlace>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    place_id: String,
    name: String,
    formatted_address: Option<String>,
    vicinity: Option<String>,
    geometry: RawGeometry,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    price_level: Option<u8>,
    opening_hours: Option<RawOpeningHours>,
    photos: Option<Vec<RawPhoto>>,
    website: Option<String>,
    formatted_phone_number: Option<String>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    location: RawLatLng,
}

#[derive(Debug, Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct RawOpeningHours {
    open_now: Option<bool>,
    weekday_text: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    photo_reference: String,
}

#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    pub fn new(api_key: &str) -> Result<Self, PlacesError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: GOOGLE_PLACES_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub fn new_with_base_url(api_key: &str, base_url: &str) -> Result<Self, PlacesError> {
        let mut client = Self::new(api_key)?;
        client.base_url = base_url.to_string();
        Ok(client)
    }

    /// Search kid-friendly venues around a location.
    ///
    /// All categories are queried concurrently; a failing category
    /// contributes zero results and never sinks the whole search. Results
    /// are deduplicated by place id and sorted ascending by distance
    /// (places without a computed distance sort as 0, i.e. first).
    #[instrument(skip(self, origin), fields(city = %origin.city), level = "info")]
    pub async fn search_nearby(&self, origin: &Location, radius_meters: u32) -> Vec<Place> {
        let searches = KID_FRIENDLY_CATEGORIES
            .iter()
            .map(|category| self.search_category(origin, radius_meters, category));

        let mut by_id: HashMap<String, Place> = HashMap::new();
        for (category, result) in
            KID_FRIENDLY_CATEGORIES.iter().zip(futures::future::join_all(searches).await)
        {
            match result {
                Ok(places) => {
                    // Last write wins on duplicate ids; normalized fields
                    // are deterministic per source record.
                    for place in places {
                        by_id.insert(place.id.clone(), place);
                    }
                }
                Err(e) => {
                    tracing::warn!("Place search for category {} failed: {}", category, e);
                }
            }
        }

        let mut places: Vec<Place> = by_id.into_values().collect();
        places.sort_by(|a, b| {
            a.distance.unwrap_or(0.0).total_cmp(&b.distance.unwrap_or(0.0))
        });
        places
    }

    /// Look up full details for a single place id. Any failure yields
    /// `None`; details are an enrichment, never load-bearing.
    #[instrument(skip(self), level = "info")]
    pub async fn place_details(&self, place_id: &str) -> Option<Place> {
        match self.fetch_details(place_id).await {
            Ok(place) => place,
            Err(e) => {
                tracing::warn!("Place details for {} failed: {}", place_id, e);
                None
            }
        }
    }

    async fn search_category(
        &self,
        origin: &Location,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<Place>, PlacesError> {
        let url = format!("{}/nearbysearch/json", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("location", format!("{},{}", origin.lat, origin.lng).as_str()),
                ("radius", &radius_meters.to_string()),
                ("type", category),
                ("language", "de"),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlacesError::Api(response.status().as_u16()));
        }

        let data: NearbySearchResponse = response.json().await?;
        if data.status != "OK" && data.status != "ZERO_RESULTS" {
            return Err(PlacesError::ProviderStatus(data.status));
        }

        Ok(data.results.into_iter().map(|raw| self.normalize(raw, Some(origin))).collect())
    }

    async fn fetch_details(&self, place_id: &str) -> Result<Option<Place>, PlacesError> {
        let url = format!("{}/details/json", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                (
                    "fields",
                    "place_id,name,formatted_address,geometry,rating,user_ratings_total,\
                     price_level,opening_hours,photos,website,formatted_phone_number,types",
                ),
                ("language", "de"),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlacesError::Api(response.status().as_u16()));
        }

        let data: DetailsResponse = response.json().await?;
        if data.status != "OK" {
            return Err(PlacesError::ProviderStatus(data.status));
        }

        Ok(data.result.map(|raw| self.normalize(raw, None)))
    }

    fn normalize(&self, raw: RawPlace, origin: Option<&Location>) -> Place {
        let distance = origin.map(|o| {
            haversine_km(o.lat, o.lng, raw.geometry.location.lat, raw.geometry.location.lng)
        });

        let photos = raw.photos.map(|photos| {
            photos
                .into_iter()
                .take(MAX_PHOTOS_PER_PLACE)
                .map(|photo| {
                    format!(
                        "{}/photo?maxwidth=400&photo_reference={}&key={}",
                        self.base_url, photo.photo_reference, self.api_key
                    )
                })
                .collect()
        });

        Place {
            id: raw.place_id,
            name: raw.name,
            address: raw.formatted_address.or(raw.vicinity).unwrap_or_default(),
            location: funday_core::Coordinates {
                lat: raw.geometry.location.lat,
                lng: raw.geometry.location.lng,
            },
            distance,
            rating: raw.rating,
            user_ratings_total: raw.user_ratings_total,
            price_level: raw.price_level,
            opening_hours: raw.opening_hours.map(|hours| OpeningHours {
                is_open: hours.open_now.unwrap_or(false),
                weekday_text: hours.weekday_text,
            }),
            photos,
            website: raw.website,
            phone_number: raw.formatted_phone_number,
            types: raw.types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn origin() -> Location {
        Location {
            lat: 52.52,
            lng: 13.405,
            city: "Berlin".to_string(),
            postal_code: None,
        }
    }

    fn raw_place(id: &str, name: &str, lat: f64, lng: f64) -> serde_json::Value {
        serde_json::json!({
            "place_id": id,
            "name": name,
            "vicinity": format!("{} Street 1", name),
            "geometry": {"location": {"lat": lat, "lng": lng}},
            "types": ["point_of_interest"]
        })
    }

    fn ok_body(results: Vec<serde_json::Value>) -> serde_json::Value {
        serde_json::json!({"status": "OK", "results": results})
    }

    fn zero_results() -> serde_json::Value {
        serde_json::json!({"status": "ZERO_RESULTS", "results": []})
    }

    async fn mount_default_zero(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/nearbysearch/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(zero_results()))
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_search_deduplicates_across_categories() {
        let mock_server = MockServer::start().await;

        // Zoo and tourist_attraction both return the same venue.
        Mock::given(method("GET"))
            .and(path("/nearbysearch/json"))
            .and(query_param("type", "zoo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![
                raw_place("shared-id", "Zoo Berlin", 52.508, 13.337),
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/nearbysearch/json"))
            .and(query_param("type", "tourist_attraction"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![
                raw_place("shared-id", "Zoo Berlin", 52.508, 13.337),
                raw_place("other-id", "Fernsehturm", 52.520, 13.409),
            ])))
            .mount(&mock_server)
            .await;
        mount_default_zero(&mock_server).await;

        let client = PlacesClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        let places = client.search_nearby(&origin(), 10_000).await;

        assert_eq!(places.len(), 2);
        assert_eq!(places.iter().filter(|p| p.id == "shared-id").count(), 1);
    }

    #[tokio::test]
    async fn test_search_sorts_by_distance_ascending() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nearbysearch/json"))
            .and(query_param("type", "museum"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![
                raw_place("far", "Far Museum", 52.7, 13.9),
                raw_place("near", "Near Museum", 52.521, 13.406),
            ])))
            .mount(&mock_server)
            .await;
        mount_default_zero(&mock_server).await;

        let client = PlacesClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        let places = client.search_nearby(&origin(), 10_000).await;

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].id, "near");
        assert!(places[0].distance.unwrap() < places[1].distance.unwrap());
    }

    #[tokio::test]
    async fn test_failing_category_contributes_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nearbysearch/json"))
            .and(query_param("type", "park"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/nearbysearch/json"))
            .and(query_param("type", "aquarium"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "REQUEST_DENIED", "results": []
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/nearbysearch/json"))
            .and(query_param("type", "library"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![
                raw_place("lib-1", "Stadtbibliothek", 52.53, 13.41),
            ])))
            .mount(&mock_server)
            .await;
        mount_default_zero(&mock_server).await;

        let client = PlacesClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        let places = client.search_nearby(&origin(), 10_000).await;

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].id, "lib-1");
    }

    #[tokio::test]
    async fn test_normalization_caps_photos_and_builds_urls() {
        let mock_server = MockServer::start().await;

        let mut place = raw_place("photo-place", "Museumsinsel", 52.516, 13.402);
        place["photos"] = serde_json::json!([
            {"photo_reference": "ref-1", "height": 400, "width": 600},
            {"photo_reference": "ref-2", "height": 400, "width": 600},
            {"photo_reference": "ref-3", "height": 400, "width": 600},
            {"photo_reference": "ref-4", "height": 400, "width": 600}
        ]);
        place["formatted_address"] = serde_json::json!("Bodestra\u{df}e 1-3, Berlin");

        Mock::given(method("GET"))
            .and(path("/nearbysearch/json"))
            .and(query_param("type", "museum"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![place])))
            .mount(&mock_server)
            .await;
        mount_default_zero(&mock_server).await;

        let client = PlacesClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        let places = client.search_nearby(&origin(), 10_000).await;

        assert_eq!(places.len(), 1);
        let photos = places[0].photos.as_ref().unwrap();
        assert_eq!(photos.len(), 3);
        assert!(photos[0].contains("photo_reference=ref-1"));
        assert!(photos[0].contains("key=test-key"));
        // formatted_address wins over vicinity.
        assert_eq!(places[0].address, "Bodestra\u{df}e 1-3, Berlin");
    }

    #[tokio::test]
    async fn test_place_details_none_on_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/details/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "NOT_FOUND"
            })))
            .mount(&mock_server)
            .await;

        let client = PlacesClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        assert!(client.place_details("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_place_details_has_no_distance() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/details/json"))
            .and(query_param("place_id", "detail-id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "OK",
                "result": raw_place("detail-id", "Aquarium", 52.5, 13.4)
            })))
            .mount(&mock_server)
            .await;

        let client = PlacesClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        let place = client.place_details("detail-id").await.unwrap();

        assert_eq!(place.id, "detail-id");
        assert!(place.distance.is_none());
    }
}
