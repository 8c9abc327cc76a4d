//! Display-ready values for one render of the dashboard.
//!
//! The model is rebuilt from the demo feed and the user config whenever the
//! inputs change. All arithmetic is delegated to `cradle-metrics`; a metric
//! that fails is logged and shown as a placeholder.

use cradle_metrics::{
    band_comfort_score, classify_weight_trend, latest, normalize_progress,
    observed_weight_delta, phone_charge_equivalent, select_recent_samples, weight_delta,
    zone_heat_fraction, ComfortBand, ImpactSample, MetricError, PaletteToken, Reading,
    WeightDelta, WeightTrend,
};
use tracing::{debug, warn};

use crate::config::UserConfig;
use crate::data::DemoFeed;

/// Shown wherever a value could not be derived.
pub const NO_DATA: &str = "—";

#[derive(Debug, Clone)]
pub struct VitalsView {
    pub weight_kg: Reading<f64>,
    pub trend: Option<WeightTrend>,
    pub delta: Option<WeightDelta>,
    pub observed_delta: Option<WeightDelta>,
}

#[derive(Debug, Clone)]
pub struct BlanketView {
    pub adaptive_mode: bool,
    pub target_c: f64,
    pub min_c: f64,
    pub max_c: f64,
    pub progress: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ZoneView {
    pub zone: String,
    pub temperature_c: f64,
    pub heat: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ImpactView {
    pub saved_kwh: Reading<f64>,
    pub phone_charges: Option<u32>,
    pub recent: Vec<ImpactSample>,
}

#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub vitals: VitalsView,
    pub blanket: BlanketView,
    pub comfort: Option<ComfortBand>,
    pub alert_token: PaletteToken,
    pub zones: Vec<ZoneView>,
    pub impact: ImpactView,
}

fn logged<T>(metric: &'static str, result: Result<T, MetricError>) -> Option<T> {
    result
        .map_err(|e| warn!(metric, error = %e, "Metric unavailable"))
        .ok()
}

impl DashboardModel {
    pub fn build(feed: &DemoFeed, config: &UserConfig, adaptive_mode: bool, target_c: f64) -> Self {
        let thresholds = &config.thresholds;

        let weight_kg = latest(&feed.weights).map(|s| s.weight_kg);
        let vitals = VitalsView {
            weight_kg,
            trend: weight_kg
                .value()
                .map(|w| classify_weight_trend(w, thresholds.weight_gain_threshold_kg)),
            delta: weight_kg.value().map(|w| weight_delta(w, thresholds)),
            observed_delta: observed_weight_delta(&feed.weights),
        };

        let blanket = BlanketView {
            adaptive_mode,
            target_c,
            min_c: config.blanket.min_c,
            max_c: config.blanket.max_c,
            progress: logged(
                "blanket_progress",
                normalize_progress(target_c, config.blanket.min_c, config.blanket.max_c),
            ),
        };

        let comfort = logged(
            "comfort_band",
            band_comfort_score(feed.comfort_score, &config.comfort_bands),
        );

        let zones = feed
            .zones
            .iter()
            .map(|z| ZoneView {
                zone: z.zone.clone(),
                temperature_c: z.temperature_c,
                heat: logged(
                    "zone_heat",
                    zone_heat_fraction(z, config.heatmap.min_c, config.heatmap.max_c),
                ),
            })
            .collect();

        let saved_kwh = latest(&feed.impact).map(|s| s.kwh_saved);
        let impact = ImpactView {
            saved_kwh,
            phone_charges: saved_kwh.value().and_then(|kwh| {
                logged(
                    "phone_charges",
                    phone_charge_equivalent(kwh, config.impact.kwh_per_phone_charge),
                )
            }),
            recent: select_recent_samples(&feed.impact, config.impact.window).to_vec(),
        };

        debug!(
            target_c,
            adaptive_mode,
            comfort = comfort.map(|c| c.label),
            "Dashboard model built"
        );

        Self {
            vitals,
            blanket,
            comfort,
            alert_token: feed.recent_alert.priority.token(),
            zones,
            impact,
        }
    }
}
