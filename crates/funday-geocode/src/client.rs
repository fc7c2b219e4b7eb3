//! Nominatim client: forward and reverse geocoding.

use std::time::Duration;

use funday_core::Location;
use serde::Deserialize;
use tracing::instrument;

use crate::error::GeocodeError;

const NOMINATIM_BASE: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;
// Nominatim requires an identifying User-Agent.
const USER_AGENT: &str = "Funday/0.1.0 (family activity finder)";

const UNKNOWN_LOCATION: &str = "Unknown location";

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
}

#[derive(Debug, Deserialize)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

/// Returns true when the input should be treated as a postal code:
/// non-empty and consisting solely of digits.
pub fn is_postal_code(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new() -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, base_url: NOMINATIM_BASE.to_string() })
    }

    #[cfg(test)]
    pub fn new_with_base_url(base_url: &str) -> Result<Self, GeocodeError> {
        let mut client = Self::new()?;
        client.base_url = base_url.to_string();
        Ok(client)
    }

    /// Route a free-text query: all-digit input goes to postal-code
    /// resolution, anything else to city search.
    pub async fn resolve_query(&self, query: &str) -> Result<Location, GeocodeError> {
        if is_postal_code(query) {
            self.resolve_postal_code(query).await
        } else {
            self.resolve_city(query).await
        }
    }

    /// Reverse-geocode device coordinates into a location with a
    /// human-readable city name.
    ///
    /// The reverse lookup is best-effort: any failure, or a response with
    /// no usable locality field, yields the "Unknown location" placeholder
    /// rather than an error. Locality priority: city, town, village,
    /// municipality.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve_coordinates(&self, lat: f64, lng: f64) -> Location {
        let city = match self.reverse_lookup(lat, lng).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Reverse geocoding failed: {}", e);
                UNKNOWN_LOCATION.to_string()
            }
        };

        Location { lat, lng, city, postal_code: None }
    }

    /// Resolve a postal code to a location. Zero matches yield
    /// [`GeocodeError::PostalCodeNotFound`].
    #[instrument(skip(self), level = "info")]
    pub async fn resolve_postal_code(&self, postal_code: &str) -> Result<Location, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("postalcode", postal_code), ("limit", "1")])
            .send()
            .await?;

        let results = Self::handle_search_response(response).await?;
        let first = results.into_iter().next().ok_or(GeocodeError::PostalCodeNotFound)?;

        let mut location = Self::location_from_result(&first)?;
        location.postal_code = Some(postal_code.to_string());
        Ok(location)
    }

    /// Resolve a free-text city query to a location. Zero matches yield
    /// [`GeocodeError::CityNotFound`].
    #[instrument(skip(self), level = "info")]
    pub async fn resolve_city(&self, query: &str) -> Result<Location, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()
            .await?;

        let results = Self::handle_search_response(response).await?;
        let first = results.into_iter().next().ok_or(GeocodeError::CityNotFound)?;

        Self::location_from_result(&first)
    }

    async fn reverse_lookup(&self, lat: f64, lng: f64) -> Result<String, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json"),
                ("lat", &lat.to_string()),
                ("lon", &lng.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Api(response.status().as_u16()));
        }

        let body: ReverseResponse = response.json().await?;

        let city = body.address.and_then(|addr| {
            addr.city.or(addr.town).or(addr.village).or(addr.municipality)
        });

        Ok(city.unwrap_or_else(|| UNKNOWN_LOCATION.to_string()))
    }

    async fn handle_search_response(
        response: reqwest::Response,
    ) -> Result<Vec<SearchResult>, GeocodeError> {
        if !response.status().is_success() {
            return Err(GeocodeError::Api(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    fn location_from_result(result: &SearchResult) -> Result<Location, GeocodeError> {
        let lat: f64 = result
            .lat
            .parse()
            .map_err(|_| GeocodeError::Parse(format!("bad latitude '{}'", result.lat)))?;
        let lng: f64 = result
            .lon
            .parse()
            .map_err(|_| GeocodeError::Parse(format!("bad longitude '{}'", result.lon)))?;

        // Nominatim's display_name is "City, County, State, Country";
        // only the leading segment is shown to the user.
        let city = result
            .display_name
            .split(',')
            .next()
            .unwrap_or(&result.display_name)
            .trim()
            .to_string();

        Ok(Location { lat, lng, city, postal_code: None })
    }
}
