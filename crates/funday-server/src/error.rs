//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use funday_core::ConfigError;
use funday_geocode::GeocodeError;
use funday_recommend::RecommendError;
use funday_weather::WeatherError;

/// An error rendered as `{ "error": "<message>" }` with an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::internal(err.user_message())
    }
}

impl From<GeocodeError> for ApiError {
    fn from(err: GeocodeError) -> Self {
        if err.is_not_found() {
            Self::not_found(err.user_message())
        } else {
            tracing::error!("Geocoding failed: {}", err);
            Self::internal(err.user_message())
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        tracing::error!("Weather fetch failed: {}", err);
        Self::internal(err.user_message())
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        tracing::error!("Recommendation generation failed: {}", err);
        Self::internal(err.user_message())
    }
}
