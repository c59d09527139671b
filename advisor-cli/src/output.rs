//! Human-readable rendering of advisories.

use advisor_core::{AdvisoryReport, ProtectionItems, UvAdvisory, WeatherObservation};

pub fn render_report(report: &AdvisoryReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(&report.observation));
    out.push('\n');

    let umbrella = &report.umbrella;
    let verdict = if umbrella.recommend { "bring one" } else { "not needed" };
    out.push_str(&format!("Umbrella: {verdict} (chance {:.0}%)\n", umbrella.score * 100.0));
    for reason in &umbrella.reasons {
        out.push_str(&format!("  - {reason}\n"));
    }
    out.push('\n');

    let clothing = &report.clothing;
    out.push_str(&format!(
        "Clothing: {} {} - {} (effective {:.1}°C)\n",
        clothing.icon, clothing.category, clothing.comfort_level, clothing.temperature.effective
    ));
    out.push_str(&format!("  {}\n", report.outfit));
    push_list(&mut out, "Wear", &clothing.clothing_items);
    push_list(&mut out, "Layers", &clothing.layers);
    push_list(&mut out, "Bring", &clothing.accessories);
    push_list(&mut out, "Tips", &clothing.tips);

    if let Some(uv) = &report.uv {
        out.push('\n');
        out.push_str(&render_uv(uv, report.protection.as_ref()));
    }

    out
}

pub fn render_uv(uv: &UvAdvisory, protection: Option<&ProtectionItems>) -> String {
    let mut out = String::new();

    out.push_str(&format!("UV index: {:.1} {} ({})\n", uv.index, uv.category, uv.color));
    if let Some(warning) = &uv.warning {
        out.push_str(&format!("  Warning: {warning}\n"));
    }
    if let Some(advice) = &uv.skin_advice {
        out.push_str(&format!("  {advice}\n"));
    }
    if let Some(exposure) = &uv.safe_exposure {
        out.push_str(&format!("  Safe exposure: {exposure}\n"));
    }
    if let Some(sunscreen) = &uv.sunscreen {
        out.push_str(&format!("  Sunscreen: {sunscreen}\n"));
    }
    push_list(&mut out, "Advice", &uv.recommendations);

    if let Some(items) = protection {
        let wanted: Vec<String> = [
            (items.sunscreen, "sunscreen"),
            (items.sunglasses, "sunglasses"),
            (items.hat, "hat"),
            (items.long_sleeves, "long sleeves"),
            (items.shade, "shade"),
            (items.stay_indoors, "stay indoors"),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| name.to_string())
        .collect();

        if !wanted.is_empty() {
            out.push_str(&format!("  Protection: {}\n", wanted.join(", ")));
        }
    }

    out
}

fn render_header(obs: &WeatherObservation) -> String {
    let mut out = String::new();

    let place = obs.location.as_deref().unwrap_or("Current conditions");
    match obs.observed_at {
        Some(at) => out.push_str(&format!("{place} ({})\n", at.format("%Y-%m-%d %H:%M UTC"))),
        None => out.push_str(&format!("{place}\n")),
    }

    let description = if obs.condition.description.is_empty() {
        obs.condition.main.as_str()
    } else {
        obs.condition.description.as_str()
    };
    if !description.is_empty() {
        out.push_str(&format!("Weather: {description}\n"));
    }

    out.push_str(&format!(
        "Temperature: {:.1}°C (feels like {:.1}°C)\n",
        obs.temperature_c,
        obs.feels_like()
    ));
    if let Some(humidity) = obs.humidity_pct {
        out.push_str(&format!("Humidity: {humidity:.0}%\n"));
    }
    if let Some(wind) = obs.wind_speed_ms {
        out.push_str(&format!("Wind: {wind:.1} m/s\n"));
    }

    out
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("  {title}:\n"));
    for item in items {
        out.push_str(&format!("    - {item}\n"));
    }
}
