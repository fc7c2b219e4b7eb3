//! Place types.

use funday_core::Coordinates;
use serde::{Deserialize, Serialize};

/// A candidate venue from place search.
///
/// `id` is the provider's place id and uniquely identifies a venue across
/// duplicate category hits. `distance`, when present, is kilometers from
/// the search origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Opening status as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday_text: Option<Vec<String>>,
}

/// Place search errors.
///
/// A single category's error is downgraded to an empty contribution inside
/// the fan-out; these variants surface only from the details lookup and in
/// logs.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    #[error("Places API error: status {0}")]
    Api(u16),

    #[error("Places API returned status '{0}'")]
    ProviderStatus(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl PlacesError {
    /// User-friendly message suitable for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Api(_) | Self::ProviderStatus(_) => {
                "Place search failed. Please try again."
            }
            Self::Network(_) => "Network error. Check your connection.",
        }
    }
}
