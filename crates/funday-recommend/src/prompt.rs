//! Prompt construction.
//!
//! Renders the recommendation request into the single instruction block
//! sent to the model. The model contract requires every text field of the
//! reply to be in the request's locale.

use funday_core::{BudgetLevel, Child, Gender, TimeOfDay};
use funday_places::{format_distance, Place};
use funday_weather::{forecast_for_date, should_prefer_indoor};

use crate::types::RecommendationRequest;

/// Prompt-size bound: only the nearest venues make it into the digest.
const MAX_PLACES_IN_PROMPT: usize = 20;

pub(crate) fn budget_label(budget: BudgetLevel) -> &'static str {
    match budget {
        BudgetLevel::Free => "Free only",
        BudgetLevel::Cheap => "Budget-friendly (under 20)",
        BudgetLevel::Medium => "Medium (20-50)",
        BudgetLevel::Any => "Any budget",
    }
}

pub(crate) fn time_label(time_of_day: TimeOfDay) -> &'static str {
    match time_of_day {
        TimeOfDay::Morning => "Morning (8-12)",
        TimeOfDay::Afternoon => "Afternoon (12-18)",
        TimeOfDay::AllDay => "All day",
    }
}

/// Family age range as `(min, max)` across all children.
pub fn age_range(children: &[Child]) -> (u8, u8) {
    let min = children.iter().map(|c| c.age).min().unwrap_or(0);
    let max = children.iter().map(|c| c.age).max().unwrap_or(0);
    (min, max)
}

fn child_line(index: usize, child: &Child) -> String {
    let gender = match child.gender {
        Gender::Boy => ", boy",
        Gender::Girl => ", girl",
        Gender::Any => "",
    };
    format!("Child {}: {} years old{}", index + 1, child.age, gender)
}

fn place_entry(place: &Place) -> String {
    let distance = place.distance.map_or_else(|| "Unknown".to_string(), format_distance);
    let rating = place.rating.map_or_else(
        || "No rating".to_string(),
        |r| format!("{}/5 ({} reviews)", r, place.user_ratings_total.unwrap_or(0)),
    );
    let price = place
        .price_level
        .map_or_else(|| "Unknown".to_string(), |level| "\u{20ac}".repeat(usize::from(level) + 1));
    let open = if place.opening_hours.as_ref().is_some_and(|h| h.is_open) {
        "Open"
    } else {
        "Closed/Unknown"
    };

    format!(
        "- {}\n  Address: {}\n  Distance: {}\n  Rating: {}\n  Price level: {}\n  Status: {}\n  Types: {}",
        place.name,
        place.address,
        distance,
        rating,
        price,
        open,
        place.types.join(", ")
    )
}

/// Render the full instruction block for a recommendation request.
pub fn build_prompt(request: &RecommendationRequest) -> String {
    let locale = request.locale.as_deref().unwrap_or("en");
    let prefer_indoor = should_prefer_indoor(&request.weather, request.date_time.date);
    let day = forecast_for_date(&request.weather, request.date_time.date);

    let children = request
        .children
        .iter()
        .enumerate()
        .map(|(i, c)| child_line(i, c))
        .collect::<Vec<_>>()
        .join("\n");
    let (age_min, age_max) = age_range(&request.children);

    let places = request
        .places
        .iter()
        .take(MAX_PLACES_IN_PROMPT)
        .map(place_entry)
        .collect::<Vec<_>>()
        .join("\n\n");
    let places = if places.is_empty() { "No places found".to_string() } else { places };

    // Prefer the specific day's forecast over the generic current reading.
    let weather_line = match day {
        Some(day) => format!(
            "{} {}, {}\u{b0}C, precipitation probability: {}%",
            day.icon, day.description, day.temperature_max, day.precipitation_probability
        ),
        None => format!(
            "{} {}, {}\u{b0}C",
            request.weather.current.icon,
            request.weather.current.description,
            request.weather.current.temperature
        ),
    };

    let indoor_note = if prefer_indoor {
        "\n- NOTE: Due to weather conditions, indoor activities should be preferred!"
    } else {
        ""
    };

    format!(
        r#"You are a helpful assistant that helps families find suitable activities for their children.

IMPORTANT: Respond entirely in the language indicated by the locale code "{locale}". All text fields in your JSON response (name, description, address, priceRange, ageRange, openingHours, reasoning, tags, summary) MUST be in this language.

CONTEXT:
- Location: {city} ({lat}, {lng})
- Date: {date}
- Time of day: {time}
- Weather: {weather}
- Budget: {budget}{indoor_note}

CHILDREN:
{children}
Age range: {age_min}-{age_max} years

NEARBY PLACES:
{places}

TASK:
Select the 6-8 best activities for this family. Consider:
1. Age suitability for ALL children ({age_min}-{age_max} years)
2. Weather conditions ({weather_hint})
3. Budget constraint: {budget}
4. Time of day and opening hours
5. Ratings and quality

You may also suggest general activities not in the places list (e.g. local events, playgrounds, parks).

Respond in the following JSON format:
{{
  "summary": "Brief summary of recommendations (1-2 sentences)",
  "activities": [
    {{
      "id": "unique-id-1",
      "name": "Activity name",
      "description": "Description (1-2 sentences)",
      "address": "Full address",
      "distance": "e.g. 2.5 km",
      "priceRange": "e.g. Free, €5-10, €20-30",
      "ageRange": "e.g. 3-12 years",
      "openingHours": "e.g. 10:00-18:00",
      "isIndoor": true/false,
      "websiteUrl": "URL if known",
      "reasoning": "Why this activity is recommended (1 sentence)",
      "tags": ["Indoor", "Free", "For toddlers", etc.],
      "source": "google_places" or "suggestion"
    }}
  ]
}}"#,
        locale = locale,
        city = request.location.city,
        lat = request.location.lat,
        lng = request.location.lng,
        date = request.date_time.date,
        time = time_label(request.date_time.time_of_day),
        weather = weather_line,
        budget = budget_label(request.budget),
        indoor_note = indoor_note,
        children = children,
        age_min = age_min,
        age_max = age_max,
        places = places,
        weather_hint = if prefer_indoor { "prefer indoor" } else { "outdoor possible" },
    )
}
