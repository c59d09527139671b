use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::source::lenient;

/// Broad weather group derived from the leading digit of a condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionGroup {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
}

impl ConditionGroup {
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            200..=299 => Some(Self::Thunderstorm),
            300..=399 => Some(Self::Drizzle),
            500..=599 => Some(Self::Rain),
            600..=699 => Some(Self::Snow),
            700..=799 => Some(Self::Atmosphere),
            800 => Some(Self::Clear),
            801..=899 => Some(Self::Clouds),
            _ => None,
        }
    }
}

/// Reported weather condition, e.g. `{500, "Rain", "light rain"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, deserialize_with = "lenient::code")]
    pub code: Option<u16>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub main: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

impl Condition {
    pub fn new(code: u16, main: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            main: main.into(),
            description: description.into(),
        }
    }

    pub fn group(&self) -> Option<ConditionGroup> {
        self.code.and_then(ConditionGroup::from_code)
    }

    /// True when either the headline or the description names rain.
    pub fn mentions_rain(&self) -> bool {
        self.main.to_lowercase().contains("rain") || self.description.to_lowercase().contains("rain")
    }
}

/// Observed precipitation rates over the last hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(default, deserialize_with = "lenient::number")]
    pub rain_mm_per_h: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub snow_mm_per_h: Option<f64>,
}

/// A single current-weather observation for one location.
///
/// Built once per request and never mutated; every advisor reads it through
/// the accessors below so that defaults for absent fields live in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub observed_at: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "lenient::required_number")]
    pub temperature_c: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub feels_like_c: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub humidity_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pressure_hpa: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cloud_cover_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub visibility_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub wind_speed_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub uv_index: Option<f64>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub precipitation: Option<Precipitation>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub condition: Condition,
}

impl WeatherObservation {
    pub fn new(temperature_c: f64, condition: Condition) -> Self {
        Self {
            temperature_c,
            condition,
            ..Self::default()
        }
    }

    pub fn feels_like(&self) -> f64 {
        self.feels_like_c.unwrap_or(self.temperature_c)
    }

    pub fn cloud_cover(&self) -> f64 {
        self.cloud_cover_pct.unwrap_or(0.0)
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed_ms.unwrap_or(0.0)
    }

    pub fn rain_volume(&self) -> Option<f64> {
        self.precipitation.as_ref().and_then(|p| p.rain_mm_per_h)
    }

    pub fn snow_volume(&self) -> Option<f64> {
        self.precipitation.as_ref().and_then(|p| p.snow_mm_per_h)
    }

    pub fn condition_group(&self) -> Option<ConditionGroup> {
        self.condition.group()
    }

    /// Wet conditions: measurable rain or snow, or a condition that names rain.
    pub fn is_wet(&self) -> bool {
        let falling = |v: Option<f64>| v.is_some_and(|mm| mm > 0.0);
        falling(self.rain_volume()) || falling(self.snow_volume()) || self.condition.mentions_rain()
    }

    pub fn with_feels_like(mut self, feels_like_c: f64) -> Self {
        self.feels_like_c = Some(feels_like_c);
        self
    }

    pub fn with_humidity(mut self, humidity_pct: f64) -> Self {
        self.humidity_pct = Some(humidity_pct);
        self
    }

    pub fn with_pressure(mut self, pressure_hpa: f64) -> Self {
        self.pressure_hpa = Some(pressure_hpa);
        self
    }

    pub fn with_cloud_cover(mut self, cloud_cover_pct: f64) -> Self {
        self.cloud_cover_pct = Some(cloud_cover_pct);
        self
    }

    pub fn with_visibility(mut self, visibility_m: f64) -> Self {
        self.visibility_m = Some(visibility_m);
        self
    }

    pub fn with_wind_speed(mut self, wind_speed_ms: f64) -> Self {
        self.wind_speed_ms = Some(wind_speed_ms);
        self
    }

    pub fn with_rain(mut self, mm_per_h: f64) -> Self {
        self.precipitation.get_or_insert_with(Precipitation::default).rain_mm_per_h = Some(mm_per_h);
        self
    }

    pub fn with_snow(mut self, mm_per_h: f64) -> Self {
        self.precipitation.get_or_insert_with(Precipitation::default).snow_mm_per_h = Some(mm_per_h);
        self
    }
}
