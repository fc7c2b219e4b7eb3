//! Geocoding error types.

use thiserror::Error;

/// Errors from the geocoding adapter.
///
/// Zero-match lookups are distinct variants from provider failures so the
/// caller can offer a corrective retry path (manual entry) instead of
/// treating them as a system fault.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Postal code not found")]
    PostalCodeNotFound,

    #[error("City not found")]
    CityNotFound,

    #[error("Geocoding API error: status {0}")]
    Api(u16),

    #[error("Invalid geocoding response: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl GeocodeError {
    /// Returns true for zero-match outcomes, as opposed to provider faults.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostalCodeNotFound | Self::CityNotFound)
    }

    /// User-friendly message suitable for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PostalCodeNotFound => "Postal code not found. Check and try again.",
            Self::CityNotFound => "City not found. Check and try again.",
            Self::Api(_) | Self::Parse(_) | Self::Network(_) => {
                "Location lookup failed. Please try again."
            }
        }
    }
}

/// Device geolocation failure kinds, as reported by the browser boundary.
///
/// The server never constructs these itself; they give the UI a typed
/// vocabulary so each failure renders a specific message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationFailure {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("Unknown geolocation error")]
    Unknown,
}

impl GeolocationFailure {
    /// User-friendly message suitable for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Location access was denied. Enter your location manually."
            }
            Self::PositionUnavailable => {
                "Your position could not be determined. Enter your location manually."
            }
            Self::Timeout => "Locating you took too long. Enter your location manually.",
            Self::Unknown => "Something went wrong while locating you. Try again.",
        }
    }
}
