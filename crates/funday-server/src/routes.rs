//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use funday_core::Location;
use funday_places::Place;
use funday_recommend::{get_recommendations, RecommendationRequest, RecommendationResponse};
use funday_weather::WeatherSnapshot;

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_RADIUS_METERS: u32 = 10_000;

#[derive(Debug, Deserialize)]
pub struct CoordsQuery {
    lat: Option<String>,
    lng: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlacesQuery {
    lat: Option<String>,
    lng: Option<String>,
    city: Option<String>,
    radius: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    q: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct PlacesResponse {
    places: Vec<Place>,
}

/// Parse and validate a coordinate pair from query parameters.
///
/// Missing parameters and non-numeric or out-of-range values are distinct
/// client errors; neither reaches an adapter.
fn parse_coords(lat: Option<&str>, lng: Option<&str>) -> Result<(f64, f64), ApiError> {
    let (Some(lat), Some(lng)) = (lat, lng) else {
        return Err(ApiError::bad_request("Latitude and longitude are required"));
    };

    let lat: f64 = lat.parse().map_err(|_| ApiError::bad_request("Invalid coordinates"))?;
    let lng: f64 = lng.parse().map_err(|_| ApiError::bad_request("Invalid coordinates"))?;

    if !lat.is_finite() || !lng.is_finite() || !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(ApiError::bad_request("Invalid coordinates"));
    }

    Ok((lat, lng))
}

/// `GET /api/places?lat&lng&city&radius`
pub async fn places(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<PlacesResponse>, ApiError> {
    let (lat, lng) = parse_coords(query.lat.as_deref(), query.lng.as_deref())?;

    let client = state
        .places
        .as_ref()
        .ok_or_else(|| ApiError::internal("Google Places API key not configured"))?;

    let origin = Location {
        lat,
        lng,
        city: query.city.unwrap_or_default(),
        postal_code: None,
    };
    let radius = query
        .radius
        .as_deref()
        .and_then(|r| r.parse().ok())
        .unwrap_or(DEFAULT_RADIUS_METERS);

    let places = client.search_nearby(&origin, radius).await;
    Ok(Json(PlacesResponse { places }))
}

/// `GET /api/weather?lat&lng`
pub async fn weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CoordsQuery>,
) -> Result<Json<WeatherSnapshot>, ApiError> {
    let (lat, lng) = parse_coords(query.lat.as_deref(), query.lng.as_deref())?;

    let snapshot = state.weather.fetch_weather(lat, lng).await?;
    Ok(Json(snapshot))
}

/// `POST /api/recommend`
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let client = state
        .recommend
        .as_ref()
        .ok_or_else(|| ApiError::internal("API key not configured"))?;

    let Json(request) = body.map_err(|rejection| match rejection {
        JsonRejection::JsonSyntaxError(_) => ApiError::bad_request("Invalid JSON format"),
        JsonRejection::JsonDataError(_) => ApiError::bad_request("Missing required fields"),
        _ => ApiError::bad_request("Invalid request body"),
    })?;

    if request.children.is_empty() {
        return Err(ApiError::bad_request("At least one child must be specified"));
    }

    let response = get_recommendations(client, &request).await?;
    Ok(Json(response))
}

/// `GET /api/geocode?q=` - postal-code or city resolution.
pub async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<Location>, ApiError> {
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query is required"))?;

    let location = state.geocode.resolve_query(q).await?;
    Ok(Json(location))
}

/// `GET /api/geocode/reverse?lat&lng` - coordinates to city name.
pub async fn geocode_reverse(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CoordsQuery>,
) -> Result<Json<Location>, ApiError> {
    let (lat, lng) = parse_coords(query.lat.as_deref(), query.lng.as_deref())?;

    let location = state.geocode.resolve_coordinates(lat, lng).await;
    Ok(Json(location))
}
