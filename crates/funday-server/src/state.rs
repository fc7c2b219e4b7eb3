//! Shared application state.

use anyhow::Result;
use funday_core::Config;
use funday_geocode::GeocodeClient;
use funday_places::PlacesClient;
use funday_recommend::AnthropicClient;
use funday_weather::WeatherClient;

/// Clients shared across handlers, constructed once at startup.
///
/// Clients needing a credential are `None` when the credential is absent;
/// the affected endpoints report a configuration error at request time.
pub struct AppState {
    pub geocode: GeocodeClient,
    pub weather: WeatherClient,
    pub places: Option<PlacesClient>,
    pub recommend: Option<AnthropicClient>,
}

impl AppState {
    /// Build state from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let places = match &config.places_api_key {
            Some(key) => Some(PlacesClient::new(key)?),
            None => None,
        };
        let recommend = match &config.anthropic_api_key {
            Some(key) => Some(AnthropicClient::new(key)?),
            None => None,
        };

        Ok(Self {
            geocode: GeocodeClient::new()?,
            weather: WeatherClient::new()?,
            places,
            recommend,
        })
    }
}
