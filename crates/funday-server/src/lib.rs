//! HTTP boundary for Funday.
//!
//! A small stateless axum server fronting the geocoding, weather, place
//! search and recommendation adapters. Each request is handled
//! independently; nothing persists between calls.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use state::AppState;

/// Upper bound on a recommendation request, given the cost of the
/// upstream generative call.
const RECOMMEND_TIMEOUT_SECS: u64 = 60;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/places", get(routes::places))
        .route("/weather", get(routes::weather))
        .route(
            "/recommend",
            post(routes::recommend)
                .layer(TimeoutLayer::new(Duration::from_secs(RECOMMEND_TIMEOUT_SECS))),
        )
        .route("/geocode", get(routes::geocode))
        .route("/geocode/reverse", get(routes::geocode_reverse));

    Router::new().nest("/api", api_routes).layer(cors).with_state(state)
}
