use serde::{Deserialize, Serialize};

use crate::{
    clothing::{self, ClothingAdvisory},
    model::WeatherObservation,
    umbrella::{self, PrecipitationAssessment},
    uv::{self, ProtectionItems, SkinType, UvAdvisory},
};

/// Everything the advisors have to say about one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub observation: WeatherObservation,
    pub umbrella: PrecipitationAssessment,
    pub clothing: ClothingAdvisory,
    pub outfit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<UvAdvisory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection: Option<ProtectionItems>,
}

/// Run all advisors against `observation`.
///
/// `uv_index` takes precedence over the reading carried by the observation;
/// with neither, the UV sections are left out.
pub fn assess(
    observation: &WeatherObservation,
    uv_index: Option<f64>,
    skin_type: Option<SkinType>,
) -> AdvisoryReport {
    let uv_index = uv_index.or(observation.uv_index);

    let report = AdvisoryReport {
        observation: observation.clone(),
        umbrella: umbrella::estimate(observation),
        clothing: clothing::advise(observation),
        outfit: clothing::outfit_suggestion(observation),
        uv: uv_index.map(|index| uv::classify(index, skin_type)),
        protection: uv_index.map(uv::protection_items),
    };

    tracing::debug!(
        umbrella = report.umbrella.recommend,
        score = report.umbrella.score,
        clothing = %report.clothing.category,
        uv = ?report.uv.as_ref().map(|u| u.category),
        "advisory report assembled"
    );

    report
}
