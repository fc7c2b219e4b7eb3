//! Open-Meteo client.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use crate::codes::weather_code_info;
use crate::types::{CurrentWeather, DailyForecast, WeatherError, WeatherSnapshot};

const OPEN_METEO_BASE: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const FORECAST_DAYS: u8 = 14;

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: OpenMeteoCurrent,
    daily: OpenMeteoDaily,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCurrent {
    temperature_2m: f64,
    weather_code: u16,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoDaily {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weather_code: Vec<u16>,
    precipitation_probability_max: Vec<Option<u8>>,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, base_url: OPEN_METEO_BASE.to_string() })
    }

    #[cfg(test)]
    pub fn new_with_base_url(base_url: &str) -> Result<Self, WeatherError> {
        let mut client = Self::new()?;
        client.base_url = base_url.to_string();
        Ok(client)
    }

    /// Fetch current conditions plus the daily forecast in one call.
    ///
    /// Temperatures are rounded to the nearest whole degree; weather codes
    /// are normalized through the fixed WMO table.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_weather(&self, lat: f64, lng: f64) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", lat.to_string().as_str()),
                ("longitude", lng.to_string().as_str()),
                ("current", "temperature_2m,weather_code"),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,weather_code,precipitation_probability_max",
                ),
                ("timezone", "auto"),
                ("forecast_days", &FORECAST_DAYS.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Api(response.status().as_u16()));
        }

        let data: OpenMeteoResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        Self::normalize(data)
    }

    fn normalize(data: OpenMeteoResponse) -> Result<WeatherSnapshot, WeatherError> {
        let current_info = weather_code_info(data.current.weather_code);
        let current = CurrentWeather {
            temperature: round(data.current.temperature_2m),
            weather_code: data.current.weather_code,
            description: current_info.description.to_string(),
            icon: current_info.icon.to_string(),
            is_good_outdoor: current_info.is_good_outdoor,
        };

        let daily = data.daily;
        let mut forecast = Vec::with_capacity(daily.time.len());
        for (i, date) in daily.time.iter().enumerate() {
            let temperature_max = column(&daily.temperature_2m_max, i)?;
            let temperature_min = column(&daily.temperature_2m_min, i)?;
            let weather_code = column(&daily.weather_code, i)?;
            let precipitation = column(&daily.precipitation_probability_max, i)?.unwrap_or(0);

            let day_info = weather_code_info(weather_code);
            forecast.push(DailyForecast {
                date: *date,
                temperature_max: round(temperature_max),
                temperature_min: round(temperature_min),
                weather_code,
                description: day_info.description.to_string(),
                icon: day_info.icon.to_string(),
                precipitation_probability: precipitation,
            });
        }

        Ok(WeatherSnapshot { current, forecast })
    }
}

fn column<T: Copy>(values: &[T], index: usize) -> Result<T, WeatherError> {
    values
        .get(index)
        .copied()
        .ok_or_else(|| WeatherError::Parse("daily arrays have mismatched lengths".into()))
}

#[allow(clippy::cast_possible_truncation)]
fn round(value: f64) -> i32 {
    value.round() as i32
}
