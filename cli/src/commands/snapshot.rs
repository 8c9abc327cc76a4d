use color_eyre::eyre::Result;
use serde_json::{json, Value};

use crate::config::UserConfig;
use crate::data::{DashboardModel, DemoFeed};

pub fn run(config: &UserConfig, compact: bool) -> Result<()> {
    let feed = DemoFeed::new();
    let model = DashboardModel::build(&feed, config, true, config.blanket.target_c);
    let doc = snapshot_document(&feed, &model);

    if compact {
        println!("{}", serde_json::to_string(&doc)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }

    Ok(())
}

fn snapshot_document(feed: &DemoFeed, model: &DashboardModel) -> Value {
    let vitals = &model.vitals;

    let zones: Vec<_> = model
        .zones
        .iter()
        .map(|z| {
            json!({
                "zone": z.zone,
                "temperature_c": z.temperature_c,
                "heat": z.heat,
            })
        })
        .collect();

    json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "vitals": {
            "skin_temp_c": feed.skin_temp_c,
            "mat_temp_c": feed.mat_temp_c,
            "weight_kg": vitals.weight_kg.value(),
            "trend": vitals.trend.map(|t| json!({
                "label": t.label.as_str(),
                "icon": t.icon,
                "token": t.label.token(),
            })),
            "weight_delta": vitals.delta.map(|d| json!({
                "display": d.formatted(),
                "placeholder": d.is_placeholder(),
            })),
            "observed_delta": vitals.observed_delta.map(|d| d.formatted()),
        },
        "blanket": {
            "pcm_state": feed.pcm_state,
            "adaptive_mode": model.blanket.adaptive_mode,
            "target_c": model.blanket.target_c,
            "progress": model.blanket.progress,
        },
        "comfort": {
            "score": feed.comfort_score,
            "risk": model.comfort.map(|c| c.label),
            "token": model.comfort.map(|c| c.token),
            "prediction": feed.prediction,
        },
        "alert": {
            "status": feed.status.label,
            "message": feed.recent_alert.message,
            "age_secs": feed.recent_alert.age.as_secs(),
            "priority": feed.recent_alert.priority.label(),
            "token": model.alert_token,
        },
        "zones": zones,
        "impact": {
            "saved_kwh": model.impact.saved_kwh.value(),
            "phone_charges": model.impact.phone_charges,
            "period": feed.impact_period,
            "recent": model.impact.recent,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_document() -> Value {
        let config = UserConfig::default();
        let feed = DemoFeed::new();
        let model = DashboardModel::build(&feed, &config, true, config.blanket.target_c);
        snapshot_document(&feed, &model)
    }

    #[test]
    fn test_snapshot_reports_derived_values() {
        let doc = default_document();
        assert_eq!(doc["comfort"]["risk"], "Low risk");
        assert_eq!(doc["comfort"]["token"], "success");
        assert_eq!(doc["blanket"]["progress"], 0.5);
        assert_eq!(doc["impact"]["saved_kwh"], 0.5);
        assert_eq!(doc["impact"]["phone_charges"], 10);
        assert_eq!(doc["vitals"]["trend"]["label"], "Gaining");
    }

    #[test]
    fn test_snapshot_zones_and_alert() {
        let doc = default_document();
        let zones = doc["zones"].as_array().unwrap();
        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0]["zone"], "A");
        assert_eq!(doc["alert"]["priority"], "Low");
        assert_eq!(doc["alert"]["age_secs"], 600);
    }

    #[test]
    fn test_snapshot_flags_placeholder_delta() {
        let doc = default_document();
        assert_eq!(doc["vitals"]["weight_delta"]["placeholder"], true);
        assert_eq!(doc["vitals"]["weight_delta"]["display"], "+0.10 kg");
    }
}
