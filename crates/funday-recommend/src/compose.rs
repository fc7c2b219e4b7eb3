//! Reply parsing and repair: turn the model's semi-structured text into
//! typed, UI-ready activity records.

use rand::distributions::Alphanumeric;
use rand::Rng;

use funday_places::{maps_search_url, maps_url, Place};

use crate::client::AnthropicClient;
use crate::prompt::build_prompt;
use crate::types::{
    Activity, ModelReply, RawActivity, RecommendError, RecommendationRequest,
    RecommendationResponse,
};

/// Compose recommendations for a request: build the prompt, call the
/// model, parse and repair the reply.
///
/// All-or-nothing: any provider or parse failure surfaces as an error, no
/// partial activity list is returned.
pub async fn get_recommendations(
    client: &AnthropicClient,
    request: &RecommendationRequest,
) -> Result<RecommendationResponse, RecommendError> {
    let prompt = build_prompt(request);
    let text = client.complete(&prompt).await?;

    let json = extract_json(&text).ok_or(RecommendError::NoJsonObject)?;
    let reply: ModelReply =
        serde_json::from_str(json).map_err(|e| RecommendError::InvalidJson(e.to_string()))?;

    let activities = reply
        .activities
        .into_iter()
        .map(|raw| repair_activity(raw, request))
        .collect();

    Ok(RecommendationResponse { activities, summary: reply.summary })
}

/// Extract the first JSON object substring: bounded greedy match from the
/// first `{` to the last `}`.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Cross-reference a model-returned activity name against the candidate
/// places by case-insensitive substring containment in either direction.
///
/// Heuristic: when several places match, the first in iteration order wins.
/// That is an accepted imprecision, not a policy; replace this function
/// with fuzzy matching if it ever needs to be better.
fn match_place<'a>(activity_name: &str, places: &'a [Place]) -> Option<&'a Place> {
    let needle = activity_name.to_lowercase();
    places.iter().find(|place| {
        let name = place.name.to_lowercase();
        name.contains(&needle) || needle.contains(&name)
    })
}

fn synthesize_id() -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("activity-{}", token.to_lowercase())
}

fn repair_activity(raw: RawActivity, request: &RecommendationRequest) -> Activity {
    let matched = match_place(&raw.name, &request.places);

    let maps_link = match matched {
        Some(place) => maps_url(&place.id),
        None => maps_search_url(&raw.name, &request.location.city),
    };
    let image_url =
        matched.and_then(|place| place.photos.as_ref().and_then(|photos| photos.first()).cloned());

    Activity {
        id: raw.id.filter(|id| !id.is_empty()).unwrap_or_else(synthesize_id),
        name: raw.name,
        description: raw.description,
        address: raw.address,
        distance: raw.distance,
        price_range: raw.price_range,
        age_range: raw.age_range,
        opening_hours: raw.opening_hours,
        is_indoor: raw.is_indoor,
        image_url,
        website_url: raw.website_url,
        maps_url: maps_link,
        reasoning: raw.reasoning,
        tags: raw.tags,
        source: raw.source,
    }
}
