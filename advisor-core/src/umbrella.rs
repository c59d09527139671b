//! Umbrella recommendation from independent precipitation indicators.
//!
//! Each indicator that fires contributes a probability and a reason. The
//! indicators are treated as independent events and combined with the union
//! formula `P = 1 - Π(1 - p_i)`; an umbrella is recommended at `P >= 0.5`.

use serde::{Deserialize, Serialize};

use crate::{
    model::{ConditionGroup, WeatherObservation},
    round_to,
};

pub const RECOMMEND_THRESHOLD: f64 = 0.5;

pub const NO_INDICATORS: &str = "no precipitation indicators found";

// Magnus coefficients for water.
const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationAssessment {
    pub recommend: bool,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// One fired indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub probability: f64,
    pub reason: String,
}

impl Signal {
    fn new(probability: f64, reason: impl Into<String>) -> Self {
        Self {
            probability,
            reason: reason.into(),
        }
    }
}

/// Dew point in °C (Magnus formula), rounded to two decimals.
///
/// `None` when humidity is not positive or the result is not finite.
pub fn dew_point(temp_c: f64, humidity_pct: f64) -> Option<f64> {
    if humidity_pct <= 0.0 {
        return None;
    }

    let f = (MAGNUS_A * temp_c) / (MAGNUS_B + temp_c) + (humidity_pct / 100.0).ln();
    let dew = (MAGNUS_B * f) / (MAGNUS_A - f);

    dew.is_finite().then(|| round_to(dew, 2))
}

/// Evaluate every indicator in display order and keep the ones that fired.
pub fn signals(obs: &WeatherObservation) -> Vec<Signal> {
    [
        condition_signal(obs),
        rain_volume_signal(obs),
        snow_volume_signal(obs),
        dew_point_signal(obs),
        humidity_signal(obs),
        cloud_signal(obs),
        pressure_signal(obs),
        visibility_signal(obs),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Probability that at least one of the independent events occurs.
pub fn combine<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let none_occur = probabilities.into_iter().fold(1.0, |acc, p| acc * (1.0 - p));
    (1.0 - none_occur).clamp(0.0, 1.0)
}

pub fn estimate(obs: &WeatherObservation) -> PrecipitationAssessment {
    let signals = signals(obs);

    if signals.is_empty() {
        return PrecipitationAssessment {
            recommend: false,
            score: 0.0,
            reasons: vec![NO_INDICATORS.to_string()],
        };
    }

    let score = round_to(combine(signals.iter().map(|s| s.probability)), 3);

    PrecipitationAssessment {
        recommend: score >= RECOMMEND_THRESHOLD,
        score,
        reasons: signals.into_iter().map(|s| s.reason).collect(),
    }
}

fn condition_signal(obs: &WeatherObservation) -> Option<Signal> {
    let (p, reason) = match obs.condition_group()? {
        ConditionGroup::Thunderstorm => (0.95, "thunderstorm reported"),
        ConditionGroup::Drizzle => (0.6, "drizzle reported"),
        ConditionGroup::Rain => (0.9, "rain reported"),
        ConditionGroup::Snow => (0.9, "snow reported"),
        ConditionGroup::Atmosphere | ConditionGroup::Clear | ConditionGroup::Clouds => return None,
    };
    Some(Signal::new(p, reason))
}

fn rain_volume_signal(obs: &WeatherObservation) -> Option<Signal> {
    let rv = obs.rain_volume().filter(|v| *v > 0.0)?;
    Some(Signal::new((0.5 + rv / 10.0).min(1.0), format!("rain volume {rv:?} mm/h")))
}

fn snow_volume_signal(obs: &WeatherObservation) -> Option<Signal> {
    let sv = obs.snow_volume().filter(|v| *v > 0.0)?;
    Some(Signal::new((0.6 + sv / 10.0).min(1.0), format!("snow volume {sv:?} mm/h")))
}

fn dew_point_signal(obs: &WeatherObservation) -> Option<Signal> {
    let dp = dew_point(obs.temperature_c, obs.humidity_pct?)?;
    let delta = obs.temperature_c - dp;

    if delta <= 2.0 {
        Some(Signal::new(0.6, format!("Dew point close to temperature ({dp:?}°C)")))
    } else if delta <= 4.0 {
        Some(Signal::new(0.35, format!("Dew point moderately close ({dp:?}°C)")))
    } else if delta <= 6.0 {
        Some(Signal::new(0.15, format!("Dew point somewhat close ({dp:?}°C)")))
    } else {
        None
    }
}

fn humidity_signal(obs: &WeatherObservation) -> Option<Signal> {
    match obs.humidity_pct? {
        h if h >= 90.0 => Some(Signal::new(0.5, "very high humidity")),
        h if h >= 75.0 => Some(Signal::new(0.25, "high humidity")),
        _ => None,
    }
}

fn cloud_signal(obs: &WeatherObservation) -> Option<Signal> {
    match obs.cloud_cover_pct? {
        c if c >= 90.0 => Some(Signal::new(0.3, "overcast clouds")),
        c if c >= 60.0 => Some(Signal::new(0.15, "considerable cloudiness")),
        _ => None,
    }
}

// Relative to the ~1013 hPa standard atmosphere.
fn pressure_signal(obs: &WeatherObservation) -> Option<Signal> {
    match obs.pressure_hpa? {
        p if p <= 1000.0 => Some(Signal::new(0.2, "low atmospheric pressure")),
        p if p <= 1005.0 => Some(Signal::new(0.1, "slightly low pressure")),
        _ => None,
    }
}

fn visibility_signal(obs: &WeatherObservation) -> Option<Signal> {
    obs.visibility_m
        .filter(|v| *v <= 2000.0)
        .map(|_| Signal::new(0.25, "low visibility"))
}
