//! Google Maps link helpers.

/// Place-detail map link keyed by provider place id.
pub fn maps_url(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{}", place_id)
}

/// Text-search map link for activities with no matched place.
pub fn maps_search_url(name: &str, city: &str) -> String {
    format!(
        "https://www.google.com/maps/search/{}",
        urlencoding::encode(&format!("{} {}", name, city))
    )
}
