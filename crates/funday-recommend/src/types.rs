//! Composer types.

use funday_core::{BudgetLevel, Child, DateTimeSelection, Location};
use funday_places::Place;
use funday_weather::WeatherSnapshot;
use serde::{Deserialize, Serialize};

/// Full input bundle to the composer.
///
/// Invariant: `children` is non-empty (validated at the HTTP boundary).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub location: Location,
    pub weather: WeatherSnapshot,
    pub children: Vec<Child>,
    pub date_time: DateTimeSelection,
    pub budget: BudgetLevel,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// One recommended activity, repaired and cross-referenced.
///
/// `id` and `maps_url` are always present: the id is synthesized when the
/// model omits it, and the map link falls back to a text search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub distance: String,
    pub price_range: String,
    pub age_range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    pub is_indoor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub maps_url: String,
    pub reasoning: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source: ActivitySource,
}

/// Where an activity came from. Unrecognized values from the model fall
/// back to `Suggestion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySource {
    GooglePlaces,
    Event,
    #[default]
    #[serde(other)]
    Suggestion,
}

/// Composer output: the repaired activities plus the model-authored
/// summary, passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub activities: Vec<Activity>,
    pub summary: String,
}

/// Composer errors. The operation is all-or-nothing: no partial activity
/// list is ever returned on failure.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("Model API error: status {0}")]
    Api(u16),

    #[error("No text content in model response")]
    NoTextContent,

    #[error("No JSON object in model response")]
    NoJsonObject,

    #[error("Invalid JSON in model response: {0}")]
    InvalidJson(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl RecommendError {
    /// User-friendly message suitable for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Network error. Check your connection.",
            Self::Api(_) | Self::NoTextContent | Self::NoJsonObject | Self::InvalidJson(_) => {
                "Could not create recommendations. Please try again."
            }
        }
    }
}

/// The model's reply shape before repair. Everything is optional or
/// defaulted except the activity name; repair fills in the rest.
#[derive(Debug, Deserialize)]
pub(crate) struct ModelReply {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub activities: Vec<RawActivity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawActivity {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub age_range: String,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub is_indoor: bool,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source: ActivitySource,
}
