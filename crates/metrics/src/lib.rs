//! Derived display metrics for the cradle comfort monitor.
//!
//! Every function in this crate is pure: raw monitored values go in, plain
//! display-ready values (labels, palette tokens, fractions) come out. Nothing
//! here knows about terminals, colours or layout.

mod comfort;
mod error;
mod impact;
mod progress;
mod series;
mod trend;
mod types;

pub use comfort::{band_comfort_score, ComfortBand, RiskLevel};
pub use error::MetricError;
pub use impact::{phone_charge_equivalent, DEFAULT_KWH_PER_PHONE_CHARGE};
pub use progress::{normalize_progress, zone_heat_fraction};
pub use series::{latest, select_recent_samples, Reading};
pub use trend::{
    classify_weight_trend, observed_weight_delta, weight_delta, DeltaSign, TrendLabel,
    WeightDelta, WeightTrend,
};
pub use types::{
    AlertEntry, AlertPriority, ComfortBands, ImpactSample, PaletteToken, ThresholdConfig,
    TimelineEvent, WeightSample, ZoneReading,
};
