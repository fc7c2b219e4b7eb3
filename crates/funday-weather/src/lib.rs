//! Weather adapter for Funday.
//!
//! Fetches current conditions and a 14-day daily forecast from Open-Meteo,
//! normalizes WMO weather codes into a fixed description/icon/outdoor
//! taxonomy, and decides whether a given day calls for indoor activities.

pub mod classify;
pub mod client;
pub mod codes;
pub mod types;

pub use classify::{forecast_for_date, should_prefer_indoor};
pub use client::WeatherClient;
pub use codes::{weather_code_info, WeatherCodeInfo};
pub use types::{CurrentWeather, DailyForecast, WeatherError, WeatherSnapshot};
