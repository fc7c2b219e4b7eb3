//! Shared domain types.
//!
//! These are request-scoped value objects exchanged between the adapters,
//! the recommendation composer and the HTTP boundary. Field names follow
//! the camelCase JSON contract the UI consumes.

use serde::{Deserialize, Serialize};

/// A bare coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A resolved point of interest.
///
/// Invariant: `lat` in [-90, 90], `lng` in [-180, 180].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// One family member to plan for. Ages run 0-17; the UI enforces at most
/// six children per family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub age: u8,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
    #[default]
    Any,
}

/// Budget preference for the outing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Free,
    Cheap,
    Medium,
    #[default]
    Any,
}

/// Part of the day the family wants to go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    #[default]
    AllDay,
}

/// Selected date and time of day.
///
/// The date is a plain calendar date; clients may send a full ISO
/// timestamp, of which only the date part is kept so there is no implied
/// timezone drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeSelection {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: chrono::NaiveDate,
    pub time_of_day: TimeOfDay,
}

fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<chrono::NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    let date_part = raw.split('T').next().unwrap_or(&raw);
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| D::Error::custom(format!("invalid date '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Boy).unwrap(), "\"boy\"");
        let g: Gender = serde_json::from_str("\"any\"").unwrap();
        assert_eq!(g, Gender::Any);
    }

    #[test]
    fn test_time_of_day_serde_camel_case() {
        assert_eq!(serde_json::to_string(&TimeOfDay::AllDay).unwrap(), "\"allDay\"");
        let t: TimeOfDay = serde_json::from_str("\"morning\"").unwrap();
        assert_eq!(t, TimeOfDay::Morning);
    }

    #[test]
    fn test_date_time_accepts_plain_date() {
        let sel: DateTimeSelection =
            serde_json::from_str(r#"{"date":"2026-03-14","timeOfDay":"afternoon"}"#).unwrap();
        assert_eq!(sel.date.to_string(), "2026-03-14");
    }

    #[test]
    fn test_date_time_strips_iso_timestamp() {
        let sel: DateTimeSelection =
            serde_json::from_str(r#"{"date":"2026-03-14T09:30:00.000Z","timeOfDay":"allDay"}"#)
                .unwrap();
        assert_eq!(sel.date.to_string(), "2026-03-14");
    }

    #[test]
    fn test_date_time_rejects_garbage() {
        let result: Result<DateTimeSelection, _> =
            serde_json::from_str(r#"{"date":"next tuesday","timeOfDay":"allDay"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_location_postal_code_optional() {
        let loc: Location = serde_json::from_str(r#"{"lat":52.5,"lng":13.4,"city":"Berlin"}"#)
            .unwrap();
        assert_eq!(loc.postal_code, None);
        let json = serde_json::to_string(&loc).unwrap();
        assert!(!json.contains("postalCode"));
    }
}
