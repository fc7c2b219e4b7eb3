//! Weather data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current conditions plus the daily forecast for a location.
///
/// Invariant: `forecast` is ordered by date ascending, one entry per
/// calendar day, no gaps (Open-Meteo returns it that way).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentWeather,
    pub forecast: Vec<DailyForecast>,
}

/// Current conditions, temperatures rounded to whole degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: i32,
    pub weather_code: u16,
    pub description: String,
    pub icon: String,
    pub is_good_outdoor: bool,
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temperature_max: i32,
    pub temperature_min: i32,
    pub weather_code: u16,
    pub description: String,
    pub icon: String,
    pub precipitation_probability: u8,
}

/// Weather adapter errors. Weather failures are never downgraded; they
/// fail the whole call.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather API error: status {0}")]
    Api(u16),

    #[error("Invalid weather response: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl WeatherError {
    /// User-friendly message suitable for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Api(_) | Self::Parse(_) => "Weather service error. Please try again.",
            Self::Network(_) => "Network error. Check your connection.",
        }
    }
}
