//! What to wear, from the effective temperature plus rain, wind, sun and humidity.

use serde::{Deserialize, Serialize};

use crate::{model::WeatherObservation, round_to};

pub const WINDY_ABOVE_MS: f64 = 5.0;
pub const HUMID_ABOVE_PCT: f64 = 75.0;
pub const SUNNY_BELOW_CLOUD_PCT: f64 = 50.0;
pub const SUN_PROTECTION_ABOVE_C: f64 = 24.0;

/// Comfort tier selected by effective temperature, warmest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClothingTier {
    #[serde(rename = "Very Hot")]
    VeryHot,
    Hot,
    Warm,
    Mild,
    Cool,
    Cold,
}

// Lower bound (inclusive) of every tier except the last.
const LOWER_BOUNDS: [(f64, ClothingTier); 5] = [
    (32.0, ClothingTier::VeryHot),
    (28.0, ClothingTier::Hot),
    (24.0, ClothingTier::Warm),
    (20.0, ClothingTier::Mild),
    (16.0, ClothingTier::Cool),
];

impl ClothingTier {
    pub const fn all() -> &'static [ClothingTier] {
        &[
            ClothingTier::VeryHot,
            ClothingTier::Hot,
            ClothingTier::Warm,
            ClothingTier::Mild,
            ClothingTier::Cool,
            ClothingTier::Cold,
        ]
    }

    pub fn from_effective_temp(effective_c: f64) -> Self {
        LOWER_BOUNDS
            .iter()
            .find(|(min, _)| effective_c >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(ClothingTier::Cold)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClothingTier::VeryHot => "Very Hot",
            ClothingTier::Hot => "Hot",
            ClothingTier::Warm => "Warm",
            ClothingTier::Mild => "Mild",
            ClothingTier::Cool => "Cool",
            ClothingTier::Cold => "Cold",
        }
    }

    fn content(&self) -> &'static TierContent {
        &TIER_CONTENT[*self as usize]
    }
}

impl std::fmt::Display for ClothingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

struct TierContent {
    color: &'static str,
    icon: &'static str,
    comfort_level: &'static str,
    clothing_items: &'static [&'static str],
    layers: &'static [&'static str],
    accessories: &'static [&'static str],
    tips: &'static [&'static str],
    outfit: &'static str,
}

// Indexed by `ClothingTier as usize`.
static TIER_CONTENT: [TierContent; 6] = [
    TierContent {
        color: "#dc2626",
        icon: "🔥",
        comfort_level: "Extreme Heat",
        clothing_items: &[
            "Light cotton shirt or tank top",
            "Shorts or light skirt",
            "Sandals or breathable shoes",
        ],
        layers: &["Single layer - minimal clothing"],
        accessories: &[
            "Wide-brimmed hat for sun protection",
            "Sunglasses (UV protection)",
            "Cooling towel",
            "Water bottle (stay hydrated)",
        ],
        tips: &[
            "Wear light-colored, loose-fitting clothes",
            "Choose breathable, moisture-wicking fabrics",
            "Avoid dark colors that absorb heat",
            "Stay indoors during peak heat hours",
        ],
        outfit: "Wear minimal, light-colored clothing. Stay cool and hydrated!",
    },
    TierContent {
        color: "#f97316",
        icon: "☀️",
        comfort_level: "Warm & Humid",
        clothing_items: &[
            "Light t-shirt or blouse",
            "Shorts, skirt, or light pants",
            "Sandals or canvas shoes",
        ],
        layers: &["Single light layer"],
        accessories: &[
            "Hat or cap",
            "Sunglasses",
            "Light scarf (for sun protection)",
            "Reusable water bottle",
        ],
        tips: &[
            "Choose breathable cotton or linen fabrics",
            "Light colors help reflect heat",
            "Wear loose-fitting clothes for air circulation",
            "Carry a small towel for perspiration",
        ],
        outfit: "Light, breathable clothes recommended. Stay comfortable in the heat.",
    },
    TierContent {
        color: "#fbbf24",
        icon: "🌤️",
        comfort_level: "Pleasant",
        clothing_items: &[
            "T-shirt or casual shirt",
            "Jeans, chinos, or casual pants",
            "Comfortable walking shoes",
        ],
        layers: &["Single layer or light layering"],
        accessories: &[
            "Light jacket (optional, for air-conditioned spaces)",
            "Sunglasses",
            "Cap or hat (optional)",
        ],
        tips: &[
            "Perfect weather for most activities",
            "Light jacket for indoor air conditioning",
            "Comfortable clothing for all-day wear",
        ],
        outfit: "Casual comfortable clothing is perfect for today's weather.",
    },
    TierContent {
        color: "#22c55e",
        icon: "🌥️",
        comfort_level: "Comfortable",
        clothing_items: &[
            "Long-sleeve shirt or light sweater",
            "Full-length pants or jeans",
            "Closed-toe shoes or sneakers",
        ],
        layers: &["1-2 layers recommended"],
        accessories: &["Light jacket or cardigan", "Scarf (optional)", "Bag for extra layer"],
        tips: &[
            "Layer clothing for temperature changes",
            "Bring a light jacket for evening",
            "Comfortable for outdoor activities",
        ],
        outfit: "Long sleeves recommended. Bring a light jacket just in case.",
    },
    TierContent {
        color: "#3b82f6",
        icon: "🌬️",
        comfort_level: "Cool",
        clothing_items: &["Sweater or hoodie", "Long pants or jeans", "Closed shoes with socks"],
        layers: &["2-3 layers recommended"],
        accessories: &["Jacket or windbreaker", "Scarf", "Light gloves (optional)"],
        tips: &[
            "Multiple layers for warmth",
            "Windproof outer layer recommended",
            "Cover extremities (neck, hands)",
        ],
        outfit: "Layer up with a sweater and jacket. It's getting cool!",
    },
    TierContent {
        color: "#6366f1",
        icon: "❄️",
        comfort_level: "Cold",
        clothing_items: &[
            "Warm sweater or thermal top",
            "Heavy pants or lined jeans",
            "Warm boots or closed shoes",
        ],
        layers: &["3+ layers recommended"],
        accessories: &["Warm jacket or coat", "Scarf and beanie", "Gloves", "Warm socks"],
        tips: &[
            "Dress in layers to trap warmth",
            "Cover all exposed skin",
            "Insulated, windproof outer layer essential",
        ],
        outfit: "Bundle up with warm layers, coat, and accessories.",
    },
];

const UMBRELLA: &str = "☂️ Umbrella (essential)";
const RAINCOAT: &str = "Waterproof jacket or raincoat";
const WET_FOOTWEAR: &str = "Water-resistant footwear recommended";
const WATERPROOF_TIP: &str = "Waterproof or water-resistant clothing recommended";
const WINDBREAKER: &str = "Windbreaker or wind-resistant jacket";
const SUNGLASSES: &str = "Sunglasses for sun protection";
const SUNSCREEN_TIP: &str = "High UV exposure - apply sunscreen";
const UMBRELLA_REMINDER: &str = " Don't forget your umbrella and raincoat!";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub actual: f64,
    pub feels_like: f64,
    pub effective: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionFlags {
    pub rain: bool,
    pub windy: bool,
    pub humid: bool,
    pub sunny: bool,
}

impl ConditionFlags {
    fn of(obs: &WeatherObservation) -> Self {
        Self {
            rain: obs.is_wet(),
            windy: obs.wind_speed() > WINDY_ABOVE_MS,
            humid: obs.humidity_pct.is_some_and(|h| h > HUMID_ABOVE_PCT),
            sunny: obs.cloud_cover() < SUNNY_BELOW_CLOUD_PCT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingAdvisory {
    pub category: ClothingTier,
    pub color: String,
    pub icon: String,
    pub comfort_level: String,
    pub temperature: TemperatureSummary,
    pub clothing_items: Vec<String>,
    pub layers: Vec<String>,
    pub accessories: Vec<String>,
    pub tips: Vec<String>,
    pub conditions: ConditionFlags,
}

/// Average of actual and feels-like temperature.
pub fn effective_temperature(obs: &WeatherObservation) -> f64 {
    (obs.temperature_c + obs.feels_like()) / 2.0
}

pub fn advise(obs: &WeatherObservation) -> ClothingAdvisory {
    let effective = effective_temperature(obs);
    let tier = ClothingTier::from_effective_temp(effective);
    let content = tier.content();
    let conditions = ConditionFlags::of(obs);

    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let mut clothing_items = owned(content.clothing_items);
    let mut accessories = owned(content.accessories);
    let mut tips = owned(content.tips);

    if conditions.rain {
        accessories.insert(0, UMBRELLA.to_string());
        accessories.insert(1, RAINCOAT.to_string());
        if clothing_items.iter().any(|item| item.to_lowercase().contains("sandal")) {
            clothing_items.push(WET_FOOTWEAR.to_string());
        }
        tips.insert(0, WATERPROOF_TIP.to_string());
    }

    if conditions.windy {
        accessories.push(WINDBREAKER.to_string());
        tips.push(format!("Windy conditions ({} m/s) - secure loose items", obs.wind_speed()));
    }

    if conditions.sunny && effective > SUN_PROTECTION_ABOVE_C {
        if !accessories.iter().any(|a| a.contains("Sunglasses")) {
            accessories.push(SUNGLASSES.to_string());
        }
        tips.push(SUNSCREEN_TIP.to_string());
    }

    if let Some(humidity) = obs.humidity_pct.filter(|h| *h > HUMID_ABOVE_PCT) {
        tips.push(format!("High humidity ({humidity}%) - choose moisture-wicking fabrics"));
    }

    ClothingAdvisory {
        category: tier,
        color: content.color.to_string(),
        icon: content.icon.to_string(),
        comfort_level: content.comfort_level.to_string(),
        temperature: TemperatureSummary {
            actual: round_to(obs.temperature_c, 1),
            feels_like: round_to(obs.feels_like(), 1),
            effective: round_to(effective, 1),
        },
        clothing_items,
        layers: owned(content.layers),
        accessories,
        tips,
        conditions,
    }
}

/// One-sentence outfit summary for the observation.
pub fn outfit_suggestion(obs: &WeatherObservation) -> String {
    let tier = ClothingTier::from_effective_temp(effective_temperature(obs));
    let mut outfit = tier.content().outfit.to_string();
    if obs.is_wet() {
        outfit.push_str(UMBRELLA_REMINDER);
    }
    outfit
}
