//! Weight trend classification.
//!
//! The trend compares the current weight against a single configured
//! threshold. The delta shown next to it is a fixed display increment; the
//! measured delta between the last two samples is available separately via
//! [`observed_weight_delta`].

use serde::{Deserialize, Serialize};

use crate::types::{PaletteToken, ThresholdConfig, WeightSample};

const ICON_GAINING: &str = "↑";
const ICON_STABLE: &str = "→";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    Gaining,
    Stable,
}

impl TrendLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::Gaining => "Gaining",
            TrendLabel::Stable => "Stable",
        }
    }

    pub fn token(&self) -> PaletteToken {
        match self {
            TrendLabel::Gaining => PaletteToken::Success,
            TrendLabel::Stable => PaletteToken::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightTrend {
    pub label: TrendLabel,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeltaSign {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl DeltaSign {
    pub fn as_char(&self) -> char {
        match self {
            DeltaSign::Plus => '+',
            DeltaSign::Minus => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightDelta {
    pub sign: DeltaSign,
    pub magnitude_kg: f64,
    placeholder: bool,
}

impl WeightDelta {
    /// True when the magnitude is the configured display increment rather
    /// than a measured difference.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn formatted(&self) -> String {
        format!("{}{:.2} kg", self.sign.as_char(), self.magnitude_kg)
    }
}

/// `Gaining` iff `current_weight_kg > threshold_kg`. NaN reads as `Stable`.
pub fn classify_weight_trend(current_weight_kg: f64, threshold_kg: f64) -> WeightTrend {
    if current_weight_kg > threshold_kg {
        WeightTrend {
            label: TrendLabel::Gaining,
            icon: ICON_GAINING,
        }
    } else {
        WeightTrend {
            label: TrendLabel::Stable,
            icon: ICON_STABLE,
        }
    }
}

/// Display delta for the weight metric.
///
/// The sign follows the trend; the magnitude is the fixed
/// `weight_display_increment_kg`, so the result is always flagged as a
/// placeholder.
pub fn weight_delta(current_weight_kg: f64, thresholds: &ThresholdConfig) -> WeightDelta {
    let trend = classify_weight_trend(current_weight_kg, thresholds.weight_gain_threshold_kg);
    let sign = match trend.label {
        TrendLabel::Gaining => DeltaSign::Plus,
        TrendLabel::Stable => DeltaSign::Minus,
    };

    WeightDelta {
        sign,
        magnitude_kg: thresholds.weight_display_increment_kg.abs(),
        placeholder: true,
    }
}

/// Measured delta between the last two samples. `None` with fewer than two.
pub fn observed_weight_delta(series: &[WeightSample]) -> Option<WeightDelta> {
    let [.., previous, current] = series else {
        return None;
    };

    let diff = current.weight_kg - previous.weight_kg;
    let sign = if diff > 0.0 {
        DeltaSign::Plus
    } else {
        DeltaSign::Minus
    };

    Some(WeightDelta {
        sign,
        magnitude_kg: diff.abs(),
        placeholder: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaining_above_threshold() {
        for current in [3.21, 3.5, 10.0, f64::MAX] {
            assert_eq!(
                classify_weight_trend(current, 3.2).label,
                TrendLabel::Gaining,
                "{} should be gaining",
                current
            );
        }
    }

    #[test]
    fn test_stable_at_or_below_threshold() {
        for current in [3.2, 3.19, 0.0, -1.0, f64::NAN] {
            assert_eq!(
                classify_weight_trend(current, 3.2).label,
                TrendLabel::Stable,
                "{} should be stable",
                current
            );
        }
    }

    #[test]
    fn test_trend_icons() {
        assert_eq!(classify_weight_trend(4.0, 3.0).icon, ICON_GAINING);
        assert_eq!(classify_weight_trend(3.0, 3.0).icon, ICON_STABLE);
        assert_eq!(TrendLabel::Gaining.token(), PaletteToken::Success);
        assert_eq!(TrendLabel::Stable.token(), PaletteToken::Neutral);
    }

    #[test]
    fn test_weight_delta_follows_trend() {
        let thresholds = ThresholdConfig {
            weight_gain_threshold_kg: 3.2,
            weight_display_increment_kg: 0.1,
        };

        let gaining = weight_delta(3.4, &thresholds);
        assert_eq!(gaining.sign, DeltaSign::Plus);
        assert_eq!(gaining.magnitude_kg, 0.1);
        assert!(gaining.is_placeholder());

        let stable = weight_delta(3.2, &thresholds);
        assert_eq!(stable.sign, DeltaSign::Minus);
        assert_eq!(stable.formatted(), "-0.10 kg");
    }

    #[test]
    fn test_observed_delta_needs_two_samples() {
        assert!(observed_weight_delta(&[]).is_none());
        assert!(observed_weight_delta(&[WeightSample::new("09:00", 3.2)]).is_none());
    }

    #[test]
    fn test_observed_delta_uses_last_two() {
        let series = vec![
            WeightSample::new("Mon", 3.0),
            WeightSample::new("Tue", 3.2),
            WeightSample::new("Wed", 3.35),
        ];

        let delta = observed_weight_delta(&series).unwrap();
        assert_eq!(delta.sign, DeltaSign::Plus);
        assert!((delta.magnitude_kg - 0.15).abs() < 1e-9);
        assert!(!delta.is_placeholder());

        let losing = vec![WeightSample::new("Mon", 3.3), WeightSample::new("Tue", 3.25)];
        assert_eq!(observed_weight_delta(&losing).unwrap().sign, DeltaSign::Minus);
    }
}
