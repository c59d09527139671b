//! Core library for the `advisor` CLI.
//!
//! This crate defines:
//! - The weather observation model and document parsing
//! - Umbrella, clothing and UV advisors (pure functions of an observation)
//! - The combined advisory report
//! - User preferences handling
//!
//! It is used by `advisor-cli`, but can also be reused by other binaries or services.

pub mod clothing;
pub mod config;
pub mod model;
pub mod report;
pub mod source;
pub mod umbrella;
pub mod uv;

pub use clothing::{ClothingAdvisory, ClothingTier};
pub use config::Preferences;
pub use model::{Condition, ConditionGroup, Precipitation, WeatherObservation};
pub use report::{AdvisoryReport, assess};
pub use source::{InputFormat, SourceError, parse_observation};
pub use umbrella::PrecipitationAssessment;
pub use uv::{ProtectionItems, SkinType, UvAdvisory, UvCategory};

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
