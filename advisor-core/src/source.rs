//! Reading observations from JSON documents.
//!
//! Fetching the documents is somebody else's job; this module only turns
//! text already on hand (a file, stdin, a fixture) into a [`WeatherObservation`].

use std::fmt;

use thiserror::Error;

use crate::model::WeatherObservation;

pub mod lenient;
pub mod openweather;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to parse observation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Observation is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Layout of an observation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputFormat {
    /// The serde shape of [`WeatherObservation`] itself.
    #[default]
    Native,
    /// OpenWeather "current weather" response body.
    OpenWeather,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Native => "native",
            InputFormat::OpenWeather => "openweather",
        }
    }

    pub const fn all() -> &'static [InputFormat] {
        &[InputFormat::Native, InputFormat::OpenWeather]
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InputFormat {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "native" => Ok(InputFormat::Native),
            "openweather" => Ok(InputFormat::OpenWeather),
            _ => Err(anyhow::anyhow!(
                "Unknown input format '{value}'. Supported formats: native, openweather."
            )),
        }
    }
}

/// Parse one observation document in the given format.
pub fn parse_observation(text: &str, format: InputFormat) -> Result<WeatherObservation, SourceError> {
    tracing::debug!(%format, bytes = text.len(), "parsing observation document");

    let observation = match format {
        InputFormat::Native => serde_json::from_str(text)?,
        InputFormat::OpenWeather => openweather::parse_current(text)?,
    };

    tracing::debug!(
        location = observation.location.as_deref().unwrap_or("unknown"),
        code = ?observation.condition.code,
        "observation parsed"
    );

    Ok(observation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_format_as_str_roundtrip() {
        for format in InputFormat::all() {
            let parsed = InputFormat::try_from(format.as_str()).expect("roundtrip should succeed");
            assert_eq!(*format, parsed);
        }
    }

    #[test]
    fn input_format_is_case_insensitive() {
        let parsed = InputFormat::try_from("OpenWeather").expect("mixed case should parse");
        assert_eq!(parsed, InputFormat::OpenWeather);
    }

    #[test]
    fn unknown_input_format_error() {
        let err = InputFormat::try_from("xml").unwrap_err();
        assert!(err.to_string().contains("Unknown input format"));
    }

    #[test]
    fn native_document_with_optional_fields_missing() {
        let json = r#"{
            "temperature_c": 30.5,
            "humidity_pct": 74,
            "precipitation": { "rain_mm_per_h": 0.25 },
            "condition": { "code": 500, "main": "Rain", "description": "light rain" }
        }"#;

        let obs = parse_observation(json, InputFormat::Native).expect("valid document");

        assert_eq!(obs.temperature_c, 30.5);
        assert_eq!(obs.feels_like(), 30.5);
        assert_eq!(obs.humidity_pct, Some(74.0));
        assert_eq!(obs.rain_volume(), Some(0.25));
        assert_eq!(obs.snow_volume(), None);
        assert_eq!(obs.condition.code, Some(500));
        assert_eq!(obs.pressure_hpa, None);
    }

    #[test]
    fn native_document_treats_garbage_numbers_as_absent() {
        let json = r#"{
            "temperature_c": 22.0,
            "humidity_pct": "n/a",
            "pressure_hpa": "1003.5",
            "cloud_cover_pct": [1, 2],
            "condition": { "code": "abc", "main": "Clouds", "description": "" }
        }"#;

        let obs = parse_observation(json, InputFormat::Native).expect("valid document");

        assert_eq!(obs.humidity_pct, None);
        assert_eq!(obs.pressure_hpa, Some(1003.5));
        assert_eq!(obs.cloud_cover_pct, None);
        assert_eq!(obs.condition.code, None);
    }

    #[test]
    fn native_document_accepts_string_temperature() {
        let json = r#"{ "temperature_c": "19.2", "condition": null, "precipitation": null }"#;

        let obs = parse_observation(json, InputFormat::Native).expect("numeric string temperature");

        assert_eq!(obs.temperature_c, 19.2);
        assert_eq!(obs.condition, crate::model::Condition::default());
        assert_eq!(obs.precipitation, None);
    }

    #[test]
    fn native_document_with_unreadable_temperature_is_an_error() {
        let err = parse_observation(r#"{ "temperature_c": "warm" }"#, InputFormat::Native).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn native_document_without_temperature_is_an_error() {
        let err = parse_observation(r#"{ "humidity_pct": 50 }"#, InputFormat::Native).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
        assert!(err.to_string().contains("temperature_c"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_observation("{ not json", InputFormat::OpenWeather).unwrap_err();
        assert!(err.to_string().contains("Failed to parse observation JSON"));
    }
}
