//! WMO weather code taxonomy.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

/// Normalized description of a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeInfo {
    pub description: &'static str,
    pub icon: &'static str,
    pub is_good_outdoor: bool,
}

const fn info(description: &'static str, icon: &'static str, is_good_outdoor: bool) -> WeatherCodeInfo {
    WeatherCodeInfo { description, icon, is_good_outdoor }
}

/// Map a WMO weather code to its description, icon and outdoor flag.
///
/// Unknown codes map to a safe default rather than failing: "Unknown",
/// neutral icon, outdoor-suitable.
pub fn weather_code_info(code: u16) -> WeatherCodeInfo {
    match code {
        0 => info("Clear", "\u{2600}\u{fe0f}", true),
        1 => info("Mostly clear", "\u{1f324}\u{fe0f}", true),
        2 => info("Partly cloudy", "\u{26c5}", true),
        3 => info("Cloudy", "\u{2601}\u{fe0f}", true),
        45 => info("Fog", "\u{1f32b}\u{fe0f}", false),
        48 => info("Fog with rime", "\u{1f32b}\u{fe0f}", false),
        51 => info("Light drizzle", "\u{1f327}\u{fe0f}", false),
        53 => info("Moderate drizzle", "\u{1f327}\u{fe0f}", false),
        55 => info("Heavy drizzle", "\u{1f327}\u{fe0f}", false),
        61 => info("Light rain", "\u{1f327}\u{fe0f}", false),
        63 => info("Moderate rain", "\u{1f327}\u{fe0f}", false),
        65 => info("Heavy rain", "\u{1f327}\u{fe0f}", false),
        66 => info("Freezing rain", "\u{1f328}\u{fe0f}", false),
        67 => info("Heavy freezing rain", "\u{1f328}\u{fe0f}", false),
        71 => info("Light snow", "\u{1f328}\u{fe0f}", false),
        73 => info("Moderate snow", "\u{1f328}\u{fe0f}", false),
        75 => info("Heavy snow", "\u{2744}\u{fe0f}", false),
        77 => info("Snow grains", "\u{1f328}\u{fe0f}", false),
        80 => info("Light rain showers", "\u{1f326}\u{fe0f}", false),
        81 => info("Moderate rain showers", "\u{1f326}\u{fe0f}", false),
        82 => info("Heavy rain showers", "\u{26c8}\u{fe0f}", false),
        85 => info("Light snow showers", "\u{1f328}\u{fe0f}", false),
        86 => info("Heavy snow showers", "\u{2744}\u{fe0f}", false),
        95 => info("Thunderstorm", "\u{26c8}\u{fe0f}", false),
        96 => info("Thunderstorm with hail", "\u{26c8}\u{fe0f}", false),
        99 => info("Thunderstorm with heavy hail", "\u{26c8}\u{fe0f}", false),
        _ => info("Unknown", "\u{2753}", true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_is_good_outdoor() {
        let code = weather_code_info(0);
        assert_eq!(code.description, "Clear");
        assert!(code.is_good_outdoor);
    }

    #[test]
    fn test_cloudy_codes_are_good_outdoor() {
        for code in [1, 2, 3] {
            assert!(weather_code_info(code).is_good_outdoor, "code {}", code);
        }
    }

    #[test]
    fn test_precipitation_codes_are_bad_outdoor() {
        for code in [45, 48, 51, 53, 55, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85, 86, 95, 96, 99] {
            assert!(!weather_code_info(code).is_good_outdoor, "code {}", code);
        }
    }

    #[test]
    fn test_unknown_code_maps_to_safe_default() {
        let code = weather_code_info(42);
        assert_eq!(code.description, "Unknown");
        assert_eq!(code.icon, "\u{2753}");
        assert!(code.is_good_outdoor);
    }

    #[test]
    fn test_thunderstorm_description() {
        assert_eq!(weather_code_info(95).description, "Thunderstorm");
    }
}
