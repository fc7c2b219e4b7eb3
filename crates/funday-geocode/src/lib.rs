//! Geocoding adapter for Funday.
//!
//! Resolves free-text queries (postal codes or city names) and device
//! coordinates into normalized locations via Nominatim (OpenStreetMap) -
//! free, no API key required.

pub mod client;
pub mod error;

pub use client::{is_postal_code, GeocodeClient};
pub use error::{GeocodeError, GeolocationFailure};
