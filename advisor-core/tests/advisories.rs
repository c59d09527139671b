//! End-to-end checks: documents in, advisories out.

use advisor_core::{
    ClothingTier, Condition, InputFormat, SkinType, UvCategory, WeatherObservation, assess, clothing,
    parse_observation, umbrella, uv,
};

const TAGUIG_RAIN: &str = include_str!("fixtures/taguig_rain.json");
const BAGUIO_CLEAR: &str = include_str!("fixtures/baguio_clear.json");

#[test]
fn openweather_rain_document_recommends_umbrella() {
    let obs = parse_observation(TAGUIG_RAIN, InputFormat::OpenWeather).expect("fixture should parse");
    let report = assess(&obs, Some(6.2), None);

    assert_eq!(report.observation.location.as_deref(), Some("Taguig, PH"));
    assert!(report.umbrella.recommend);
    assert!(report.umbrella.score > 0.95);
    assert_eq!(report.umbrella.reasons.first().map(String::as_str), Some("rain reported"));

    assert_eq!(report.clothing.category, ClothingTier::Hot);
    assert!(report.clothing.conditions.rain);
    assert_eq!(report.clothing.accessories[0], "☂️ Umbrella (essential)");

    assert_eq!(report.uv.map(|u| u.category), Some(UvCategory::High));
}

#[test]
fn native_clear_document_needs_no_umbrella() {
    let obs = parse_observation(BAGUIO_CLEAR, InputFormat::Native).expect("fixture should parse");
    let report = assess(&obs, None, Some(SkinType::new(1).expect("valid")));

    assert_eq!(
        report.observation.observed_at.map(|t| t.to_rfc3339()),
        Some("2023-10-18T02:00:00+00:00".to_string())
    );

    assert!(!report.umbrella.recommend);
    assert_eq!(report.umbrella.score, 0.0);
    assert_eq!(report.umbrella.reasons, vec![umbrella::NO_INDICATORS]);

    assert_eq!(report.clothing.category, ClothingTier::Cool);
    assert!(report.clothing.conditions.windy);
    assert!(report.clothing.conditions.sunny);

    let uv = report.uv.expect("observation carries a UV reading");
    assert_eq!(uv.category, UvCategory::VeryHigh);
    assert_eq!(uv.index, 8.6);
    assert_eq!(
        uv.skin_advice.as_deref(),
        Some("Fair skin: Very high risk - Minimize outdoor exposure, full protection required")
    );
}

#[test]
fn report_json_has_stable_shape() {
    let obs = parse_observation(TAGUIG_RAIN, InputFormat::OpenWeather).expect("fixture should parse");
    let json = serde_json::to_value(assess(&obs, None, None)).expect("report serializes");

    for key in ["observation", "umbrella", "clothing", "outfit"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    for key in ["actual", "feels_like", "effective"] {
        assert!(json["clothing"]["temperature"].get(key).is_some(), "missing temperature.{key}");
    }
    assert_eq!(json["clothing"]["category"], "Hot");
    assert_eq!(json["observation"]["condition"]["code"], 500);
}

#[test]
fn empty_observation_is_still_answered() {
    let obs = WeatherObservation::new(12.0, Condition::default());
    let report = assess(&obs, Some(-1.0), None);

    assert!(!report.umbrella.recommend);
    assert_eq!(report.umbrella.reasons, vec![umbrella::NO_INDICATORS]);
    assert_eq!(report.clothing.category, ClothingTier::Cold);

    let uv = report.uv.expect("explicit reading given");
    assert_eq!(uv.category, UvCategory::Unknown);
    assert!(!uv.protection_needed);
}

#[test]
fn every_effective_temperature_lands_in_one_tier() {
    for step in -200..=450 {
        let temp = f64::from(step) / 10.0;
        let tier = clothing::advise(&WeatherObservation::new(temp, Condition::default())).category;

        let expected = if temp >= 32.0 {
            ClothingTier::VeryHot
        } else if temp >= 28.0 {
            ClothingTier::Hot
        } else if temp >= 24.0 {
            ClothingTier::Warm
        } else if temp >= 20.0 {
            ClothingTier::Mild
        } else if temp >= 16.0 {
            ClothingTier::Cool
        } else {
            ClothingTier::Cold
        };
        assert_eq!(tier, expected, "effective {temp}");
    }
}

#[test]
fn score_stays_in_unit_interval() {
    let codes = [None, Some(210), Some(310), Some(502), Some(602), Some(800), Some(804)];
    for code in codes {
        for rain in [0.0, 0.1, 3.0, 40.0] {
            for visibility in [500.0, 9000.0] {
                let condition = Condition {
                    code,
                    ..Condition::default()
                };
                let obs = WeatherObservation::new(27.0, condition)
                    .with_humidity(92.0)
                    .with_cloud_cover(95.0)
                    .with_pressure(998.0)
                    .with_visibility(visibility)
                    .with_rain(rain)
                    .with_snow(rain);

                let result = umbrella::estimate(&obs);
                assert!((0.0..=1.0).contains(&result.score), "{result:?}");
                assert_eq!(result.recommend, result.score >= umbrella::RECOMMEND_THRESHOLD);
            }
        }
    }
}

#[test]
fn uv_tier_examples() {
    assert_eq!(uv::classify(-1.0, None).category, UvCategory::Unknown);
    assert!(!uv::classify(-1.0, None).protection_needed);
    assert_eq!(uv::classify(2.0, None).category, UvCategory::Low);
    assert_eq!(uv::classify(7.0, None).category, UvCategory::High);
    assert_eq!(uv::classify(11.0, None).category, UvCategory::Extreme);
}
