//! Place search adapter for Funday.
//!
//! Fans out parallel kid-friendly category searches against the Google
//! Places API, deduplicates venues by provider id, computes great-circle
//! distances to the user and sorts nearest-first.

pub mod client;
pub mod distance;
pub mod links;
pub mod types;

pub use client::{PlacesClient, KID_FRIENDLY_CATEGORIES};
pub use distance::{format_distance, haversine_km};
pub use links::{maps_search_url, maps_url};
pub use types::{OpeningHours, Place, PlacesError};
