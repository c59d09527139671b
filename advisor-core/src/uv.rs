//! UV index advice following the WHO exposure categories.
//!
//! | Index | Category  | Color  |
//! |-------|-----------|--------|
//! | 0-2   | Low       | green  |
//! | 3-5   | Moderate  | yellow |
//! | 6-7   | High      | orange |
//! | 8-10  | Very High | red    |
//! | 11+   | Extreme   | purple |
//!
//! A negative index means the reading is unavailable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UvCategory {
    Unknown,
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Extreme,
}

impl UvCategory {
    pub const fn all() -> &'static [UvCategory] {
        &[
            UvCategory::Unknown,
            UvCategory::Low,
            UvCategory::Moderate,
            UvCategory::High,
            UvCategory::VeryHigh,
            UvCategory::Extreme,
        ]
    }

    /// Upper bounds are inclusive: 2.0 is Low, 7.0 is High.
    pub fn from_index(uv_index: f64) -> Self {
        if uv_index.is_nan() || uv_index < 0.0 {
            UvCategory::Unknown
        } else if uv_index <= 2.0 {
            UvCategory::Low
        } else if uv_index <= 5.0 {
            UvCategory::Moderate
        } else if uv_index <= 7.0 {
            UvCategory::High
        } else if uv_index <= 10.0 {
            UvCategory::VeryHigh
        } else {
            UvCategory::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UvCategory::Unknown => "Unknown",
            UvCategory::Low => "Low",
            UvCategory::Moderate => "Moderate",
            UvCategory::High => "High",
            UvCategory::VeryHigh => "Very High",
            UvCategory::Extreme => "Extreme",
        }
    }

    fn content(&self) -> &'static UvContent {
        &UV_CONTENT[*self as usize]
    }
}

impl fmt::Display for UvCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which protective measures apply at a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionItems {
    pub sunscreen: bool,
    pub sunglasses: bool,
    pub hat: bool,
    pub long_sleeves: bool,
    pub shade: bool,
    pub stay_indoors: bool,
}

impl ProtectionItems {
    /// Number of measures switched on.
    pub fn count(&self) -> usize {
        [
            self.sunscreen,
            self.sunglasses,
            self.hat,
            self.long_sleeves,
            self.shade,
            self.stay_indoors,
        ]
        .into_iter()
        .filter(|on| *on)
        .count()
    }
}

const fn items(sunscreen: bool, hat: bool, shade: bool, stay_indoors: bool) -> ProtectionItems {
    ProtectionItems {
        sunscreen,
        sunglasses: true,
        hat,
        long_sleeves: hat,
        shade,
        stay_indoors,
    }
}

struct UvContent {
    color: &'static str,
    risk_level: &'static str,
    recommendations: &'static [&'static str],
    protection_needed: bool,
    safe_exposure: Option<&'static str>,
    sunscreen: Option<&'static str>,
    warning: Option<&'static str>,
    protection: ProtectionItems,
}

// Indexed by `UvCategory as usize`. Unknown readings share the Low measures.
static UV_CONTENT: [UvContent; 6] = [
    UvContent {
        color: "gray",
        risk_level: "unknown",
        recommendations: &["UV data not available"],
        protection_needed: false,
        safe_exposure: None,
        sunscreen: None,
        warning: None,
        protection: items(false, false, false, false),
    },
    UvContent {
        color: "green",
        risk_level: "minimal",
        recommendations: &[
            "No protection required",
            "You can safely stay outside",
            "Wear sunglasses on bright days",
        ],
        protection_needed: false,
        safe_exposure: Some("Unlimited for most people"),
        sunscreen: None,
        warning: None,
        protection: items(false, false, false, false),
    },
    UvContent {
        color: "yellow",
        risk_level: "moderate",
        recommendations: &[
            "Take precautions during midday hours (10 AM - 4 PM)",
            "Seek shade when sun is strongest",
            "Wear sunglasses and use sunscreen SPF 30+",
            "Cover up with clothing if outside for extended periods",
        ],
        protection_needed: true,
        safe_exposure: Some("2-3 hours without protection"),
        sunscreen: Some("SPF 30+ recommended"),
        warning: None,
        protection: items(true, false, true, false),
    },
    UvContent {
        color: "orange",
        risk_level: "high",
        recommendations: &[
            "Protection essential - reduce sun exposure 10 AM - 4 PM",
            "Seek shade during midday hours",
            "Wear protective clothing, hat, and sunglasses",
            "Apply sunscreen SPF 30+ every 2 hours",
            "Surfaces like sand and water increase UV exposure",
        ],
        protection_needed: true,
        safe_exposure: Some("1-2 hours without protection"),
        sunscreen: Some("SPF 30-50+ required"),
        warning: Some("Burns possible in less than 30 minutes"),
        protection: items(true, true, true, false),
    },
    UvContent {
        color: "red",
        risk_level: "very_high",
        recommendations: &[
            "Extra protection needed - avoid sun exposure 10 AM - 4 PM",
            "Stay in shade whenever possible",
            "Wear long-sleeved shirt, pants, and wide-brimmed hat",
            "Apply sunscreen SPF 50+ every 2 hours",
            "Wear UV-blocking sunglasses",
            "Unprotected skin will burn quickly",
        ],
        protection_needed: true,
        safe_exposure: Some("15-30 minutes without protection"),
        sunscreen: Some("SPF 50+ required"),
        warning: Some("Serious sunburn risk - skin damage occurs rapidly"),
        protection: items(true, true, true, false),
    },
    UvContent {
        color: "purple",
        risk_level: "extreme",
        recommendations: &[
            "Take all precautions - avoid outdoor activities",
            "Stay indoors during midday hours if possible",
            "If outside, stay in shade and cover all exposed skin",
            "Wear long-sleeved shirt, pants, and wide-brimmed hat",
            "Apply sunscreen SPF 50+ every 1-2 hours",
            "Wear wrap-around UV-blocking sunglasses",
        ],
        protection_needed: true,
        safe_exposure: Some("Less than 15 minutes without protection"),
        sunscreen: Some("SPF 50+ required, reapply frequently"),
        warning: Some("Extreme risk - unprotected skin can burn in minutes"),
        protection: items(true, true, true, true),
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Skin type must be between 1 and 6 on the Fitzpatrick scale, got {0}")]
pub struct InvalidSkinType(pub u8);

/// Fitzpatrick skin type, 1 (burns very easily) to 6 (rarely burns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkinType(u8);

impl SkinType {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self, InvalidSkinType> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidSkinType(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn band(self) -> SkinBand {
        match self.0 {
            1 | 2 => SkinBand::Fair,
            3 | 4 => SkinBand::Medium,
            _ => SkinBand::Dark,
        }
    }
}

impl Default for SkinType {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for SkinType {
    type Error = InvalidSkinType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkinType> for u8 {
    fn from(skin: SkinType) -> Self {
        skin.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinBand {
    Fair,
    Medium,
    Dark,
}

const UNIVERSAL_LOW_UV_ADVICE: &str = "Safe for all skin types with minimal precautions";

// Rows: fair, medium, dark. Columns: index up to 5, up to 7, above 7.
static SKIN_ADVICE: [[&str; 3]; 3] = [
    [
        "Fair skin: Use SPF 50+, reapply every 2 hours",
        "Fair skin: High risk - Use SPF 50+, seek shade, wear protective clothing",
        "Fair skin: Very high risk - Minimize outdoor exposure, full protection required",
    ],
    [
        "Medium skin: Use SPF 30+, take precautions during peak hours",
        "Medium skin: Use SPF 50+, wear hat and sunglasses",
        "Medium skin: High risk - Full sun protection required",
    ],
    [
        "Dark skin: Use SPF 15-30, basic precautions recommended",
        "Dark skin: Use SPF 30+, take precautions during peak hours",
        "Dark skin: Use SPF 30-50+, avoid prolonged exposure",
    ],
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvAdvisory {
    pub index: f64,
    pub category: UvCategory,
    pub color: String,
    pub risk_level: String,
    pub recommendations: Vec<String>,
    pub protection_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_exposure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunscreen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_advice: Option<String>,
}

/// Classify a UV reading; a skin type adds a personalised sentence.
pub fn classify(uv_index: f64, skin_type: Option<SkinType>) -> UvAdvisory {
    let category = UvCategory::from_index(uv_index);
    let content = category.content();

    let (index, skin_advice) = match category {
        UvCategory::Unknown => (0.0, None),
        _ => (
            round_to(uv_index, 1),
            skin_type.map(|skin| skin_advice(uv_index, skin).to_string()),
        ),
    };

    UvAdvisory {
        index,
        category,
        color: content.color.to_string(),
        risk_level: content.risk_level.to_string(),
        recommendations: content.recommendations.iter().map(|s| s.to_string()).collect(),
        protection_needed: content.protection_needed,
        safe_exposure: content.safe_exposure.map(str::to_string),
        sunscreen: content.sunscreen.map(str::to_string),
        warning: content.warning.map(str::to_string),
        skin_advice,
    }
}

pub fn protection_items(uv_index: f64) -> ProtectionItems {
    UvCategory::from_index(uv_index).content().protection
}

pub fn skin_advice(uv_index: f64, skin_type: SkinType) -> &'static str {
    if uv_index.is_nan() || uv_index <= 2.0 {
        return UNIVERSAL_LOW_UV_ADVICE;
    }

    let row = match skin_type.band() {
        SkinBand::Fair => 0,
        SkinBand::Medium => 1,
        SkinBand::Dark => 2,
    };
    let column = if uv_index <= 5.0 {
        0
    } else if uv_index <= 7.0 {
        1
    } else {
        2
    };

    SKIN_ADVICE[row][column]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skin(value: u8) -> SkinType {
        SkinType::new(value).expect("valid skin type")
    }

    #[test]
    fn negative_index_is_unknown() {
        let advice = classify(-1.0, None);

        assert_eq!(advice.category, UvCategory::Unknown);
        assert_eq!(advice.index, 0.0);
        assert_eq!(advice.color, "gray");
        assert!(!advice.protection_needed);
        assert_eq!(advice.recommendations, vec!["UV data not available"]);
        assert_eq!(advice.safe_exposure, None);
    }

    #[test]
    fn nan_index_is_unknown() {
        assert_eq!(classify(f64::NAN, None).category, UvCategory::Unknown);
    }

    #[test]
    fn inclusive_upper_bounds() {
        assert_eq!(classify(0.0, None).category, UvCategory::Low);
        assert_eq!(classify(2.0, None).category, UvCategory::Low);
        assert_eq!(classify(2.1, None).category, UvCategory::Moderate);
        assert_eq!(classify(5.0, None).category, UvCategory::Moderate);
        assert_eq!(classify(7.0, None).category, UvCategory::High);
        assert_eq!(classify(7.01, None).category, UvCategory::VeryHigh);
        assert_eq!(classify(10.0, None).category, UvCategory::VeryHigh);
        assert_eq!(classify(11.0, None).category, UvCategory::Extreme);
    }

    #[test]
    fn low_needs_no_protection() {
        let advice = classify(1.44, None);

        assert_eq!(advice.index, 1.4);
        assert_eq!(advice.color, "green");
        assert!(!advice.protection_needed);
        assert_eq!(advice.safe_exposure.as_deref(), Some("Unlimited for most people"));
        assert_eq!(advice.sunscreen, None);
        assert_eq!(advice.warning, None);
    }

    #[test]
    fn moderate_has_sunscreen_but_no_warning() {
        let advice = classify(4.0, None);

        assert!(advice.protection_needed);
        assert_eq!(advice.sunscreen.as_deref(), Some("SPF 30+ recommended"));
        assert_eq!(advice.warning, None);
        assert_eq!(advice.recommendations.len(), 4);
    }

    #[test]
    fn high_and_above_carry_warnings() {
        for (uv, category, risk) in [
            (6.2, UvCategory::High, "high"),
            (9.0, UvCategory::VeryHigh, "very_high"),
            (12.5, UvCategory::Extreme, "extreme"),
        ] {
            let advice = classify(uv, None);
            assert_eq!(advice.category, category);
            assert_eq!(advice.risk_level, risk);
            assert!(advice.protection_needed);
            assert!(advice.safe_exposure.is_some());
            assert!(advice.sunscreen.is_some());
            assert!(advice.warning.is_some(), "{category} should warn");
        }

        assert_eq!(
            classify(11.0, None).warning.as_deref(),
            Some("Extreme risk - unprotected skin can burn in minutes")
        );
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(classify(1.0, None)).unwrap();

        assert_eq!(json["category"], "Low");
        assert!(json.get("sunscreen").is_none());
        assert!(json.get("warning").is_none());
        assert!(json.get("skin_advice").is_none());

        let json = serde_json::to_value(classify(8.0, Some(skin(2)))).unwrap();
        assert_eq!(json["category"], "Very High");
        assert_eq!(
            json["skin_advice"],
            "Fair skin: Very high risk - Minimize outdoor exposure, full protection required"
        );
    }

    #[test]
    fn unknown_reading_gets_no_skin_advice() {
        assert_eq!(classify(-1.0, Some(skin(1))).skin_advice, None);
    }

    #[test]
    fn protection_grows_with_tier() {
        let samples = [1.0, 4.0, 6.5, 9.0, 11.5];
        for pair in samples.windows(2) {
            let lower = protection_items(pair[0]);
            let higher = protection_items(pair[1]);

            assert!(higher.count() >= lower.count());
            assert!(!lower.sunscreen || higher.sunscreen);
            assert!(!lower.hat || higher.hat);
            assert!(!lower.long_sleeves || higher.long_sleeves);
            assert!(!lower.shade || higher.shade);
        }
    }

    #[test]
    fn stay_indoors_only_when_extreme() {
        for uv in [-1.0, 0.0, 2.0, 5.0, 7.0, 10.0] {
            assert!(!protection_items(uv).stay_indoors, "uv {uv}");
        }
        assert!(protection_items(10.1).stay_indoors);
        assert_eq!(protection_items(11.0).count(), 6);
    }

    #[test]
    fn unknown_reading_shares_low_measures() {
        assert_eq!(protection_items(-1.0), protection_items(1.0));
        assert!(protection_items(-1.0).sunglasses);
        assert!(!protection_items(-1.0).sunscreen);
    }

    #[test]
    fn skin_type_bounds() {
        assert_eq!(SkinType::new(0), Err(InvalidSkinType(0)));
        assert_eq!(SkinType::new(7), Err(InvalidSkinType(7)));
        assert_eq!(SkinType::default().value(), 3);
        assert_eq!(skin(1).band(), SkinBand::Fair);
        assert_eq!(skin(4).band(), SkinBand::Medium);
        assert_eq!(skin(6).band(), SkinBand::Dark);

        let err = SkinType::try_from(9).unwrap_err();
        assert!(err.to_string().contains("between 1 and 6"));
    }

    #[test]
    fn skin_type_deserializes_with_validation() {
        let parsed: SkinType = serde_json::from_str("5").unwrap();
        assert_eq!(parsed.value(), 5);
        assert!(serde_json::from_str::<SkinType>("8").is_err());
    }

    #[test]
    fn low_uv_advice_ignores_skin_type() {
        for value in SkinType::MIN..=SkinType::MAX {
            assert_eq!(skin_advice(2.0, skin(value)), UNIVERSAL_LOW_UV_ADVICE);
        }
        assert_eq!(skin_advice(-3.0, skin(1)), UNIVERSAL_LOW_UV_ADVICE);
        assert_eq!(skin_advice(f64::NAN, skin(1)), UNIVERSAL_LOW_UV_ADVICE);
    }

    #[test]
    fn skin_advice_by_band_and_tier() {
        assert_eq!(skin_advice(4.0, skin(1)), "Fair skin: Use SPF 50+, reapply every 2 hours");
        assert_eq!(
            skin_advice(7.0, skin(3)),
            "Medium skin: Use SPF 50+, wear hat and sunglasses"
        );
        assert_eq!(
            skin_advice(9.0, SkinType::default()),
            "Medium skin: High risk - Full sun protection required"
        );
        assert_eq!(
            skin_advice(5.0, skin(6)),
            "Dark skin: Use SPF 15-30, basic precautions recommended"
        );
        assert_eq!(skin_advice(12.0, skin(5)), "Dark skin: Use SPF 30-50+, avoid prolonged exposure");
    }

    #[test]
    fn classify_is_deterministic() {
        for uv in [-1.0, 0.5, 3.3, 6.6, 9.9, 14.0] {
            let a = serde_json::to_string(&classify(uv, Some(skin(2)))).unwrap();
            let b = serde_json::to_string(&classify(uv, Some(skin(2)))).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn every_category_has_content() {
        for category in UvCategory::all() {
            assert!(!category.content().recommendations.is_empty());
        }
    }
}
