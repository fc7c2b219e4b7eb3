//! Outdoor-suitability classification.

use chrono::NaiveDate;

use crate::codes::weather_code_info;
use crate::types::{DailyForecast, WeatherSnapshot};

/// Find the forecast entry for a calendar date, if the horizon covers it.
pub fn forecast_for_date(snapshot: &WeatherSnapshot, date: NaiveDate) -> Option<&DailyForecast> {
    snapshot.forecast.iter().find(|day| day.date == date)
}

/// Decide whether indoor activities should be preferred on the given day.
///
/// Check order matters: weather-code unsuitability short-circuits before
/// the numeric thresholds. Without a forecast entry for the date, the
/// current outdoor flag (negated) decides.
pub fn should_prefer_indoor(snapshot: &WeatherSnapshot, date: NaiveDate) -> bool {
    let Some(day) = forecast_for_date(snapshot, date) else {
        return !snapshot.current.is_good_outdoor;
    };

    if !weather_code_info(day.weather_code).is_good_outdoor {
        return true;
    }
    if day.precipitation_probability > 50 {
        return true;
    }
    if day.temperature_max < 5 || day.temperature_max > 35 {
        return true;
    }

    false
}
