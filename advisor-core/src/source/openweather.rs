use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::{Condition, Precipitation, WeatherObservation};

use super::{SourceError, lenient};

#[derive(Debug, Deserialize)]
struct OwMain {
    #[serde(default, deserialize_with = "lenient::number")]
    temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    feels_like: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pressure: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwWeather {
    #[serde(default, deserialize_with = "lenient::code")]
    id: Option<u16>,
    #[serde(default, deserialize_with = "lenient::text")]
    main: String,
    #[serde(default, deserialize_with = "lenient::text")]
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default, deserialize_with = "lenient::number")]
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwClouds {
    #[serde(default, deserialize_with = "lenient::number")]
    all: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    dt: Option<i64>,
    main: Option<OwMain>,
    #[serde(default, deserialize_with = "lenient::object")]
    weather: Vec<OwWeather>,
    #[serde(default, deserialize_with = "lenient::object")]
    wind: OwWind,
    #[serde(default, deserialize_with = "lenient::object")]
    clouds: OwClouds,
    #[serde(default, deserialize_with = "lenient::number")]
    visibility: Option<f64>,
    #[serde(default, deserialize_with = "lenient::volume")]
    rain: Option<f64>,
    #[serde(default, deserialize_with = "lenient::volume")]
    snow: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    uvi: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    sys: OwSys,
}

/// Map an OpenWeather current-weather body onto a [`WeatherObservation`].
pub fn parse_current(body: &str) -> Result<WeatherObservation, SourceError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let main = parsed.main.ok_or(SourceError::MissingField("main"))?;
    let temperature_c = main.temp.ok_or(SourceError::MissingField("main.temp"))?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| Condition {
            code: w.id,
            main: w.main,
            description: w.description,
        })
        .unwrap_or_default();

    let precipitation = (parsed.rain.is_some() || parsed.snow.is_some()).then_some(Precipitation {
        rain_mm_per_h: parsed.rain,
        snow_mm_per_h: parsed.snow,
    });

    let location = match (parsed.name, parsed.sys.country) {
        (Some(name), Some(country)) if !name.is_empty() => Some(format!("{name}, {country}")),
        (Some(name), _) if !name.is_empty() => Some(name),
        _ => None,
    };

    Ok(WeatherObservation {
        location,
        observed_at: parsed.dt.and_then(unix_to_utc),
        temperature_c,
        feels_like_c: main.feels_like,
        humidity_pct: main.humidity,
        pressure_hpa: main.pressure,
        cloud_cover_pct: parsed.clouds.all,
        visibility_m: parsed.visibility,
        wind_speed_ms: parsed.wind.speed,
        uv_index: parsed.uvi,
        precipitation,
        condition,
    })
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
