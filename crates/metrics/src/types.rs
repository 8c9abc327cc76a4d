use serde::{Deserialize, Serialize};

use crate::error::MetricError;

/// Lower bound of the comfort score scale.
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of the comfort score scale.
pub const SCORE_MAX: f64 = 100.0;

/// Semantic colour for a badge or bar. Resolved to a concrete colour by the
/// presentation layer's theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteToken {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl PaletteToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteToken::Success => "success",
            PaletteToken::Warning => "warning",
            PaletteToken::Danger => "danger",
            PaletteToken::Info => "info",
            PaletteToken::Neutral => "neutral",
        }
    }
}

/// A single weight measurement. Series are ordered oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    pub timestamp: String,
    pub weight_kg: f64,
}

impl WeightSample {
    pub fn new(timestamp: impl Into<String>, weight_kg: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            weight_kg,
        }
    }
}

/// Cumulative electricity saved at a point in time. Series are ordered oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSample {
    pub timestamp: String,
    pub kwh_saved: f64,
}

impl ImpactSample {
    pub fn new(timestamp: impl Into<String>, kwh_saved: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            kwh_saved,
        }
    }
}

/// Temperature of one zone of the mat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneReading {
    pub zone: String,
    pub temperature_c: f64,
}

impl ZoneReading {
    pub fn new(zone: impl Into<String>, temperature_c: f64) -> Self {
        Self {
            zone: zone.into(),
            temperature_c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    #[default]
    Low,
    Medium,
    High,
}

impl AlertPriority {
    pub fn label(&self) -> &'static str {
        match self {
            AlertPriority::Low => "Low",
            AlertPriority::Medium => "Medium",
            AlertPriority::High => "High",
        }
    }

    pub fn token(&self) -> PaletteToken {
        match self {
            AlertPriority::Low => PaletteToken::Success,
            AlertPriority::Medium => PaletteToken::Warning,
            AlertPriority::High => PaletteToken::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEntry {
    pub time: String,
    pub message: String,
    pub priority: AlertPriority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub time: String,
    pub event: String,
}

/// Boundaries used to classify and display the weight trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Weight above which the trend reads "Gaining".
    pub weight_gain_threshold_kg: f64,
    /// Fixed magnitude shown next to the trend arrow. Placeholder, not a
    /// measured delta.
    pub weight_display_increment_kg: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            weight_gain_threshold_kg: 3.2,
            weight_display_increment_kg: 0.1,
        }
    }
}

/// Upper bounds (inclusive) of the low and medium risk bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComfortBands {
    pub low_max: f64,
    pub medium_max: f64,
}

impl Default for ComfortBands {
    fn default() -> Self {
        Self {
            low_max: 95.0,
            medium_max: 99.0,
        }
    }
}

impl ComfortBands {
    /// Both bounds must lie on the score scale and be ordered.
    pub fn validate(&self) -> Result<(), MetricError> {
        let on_scale = |v: f64| (SCORE_MIN..=SCORE_MAX).contains(&v);
        if on_scale(self.low_max) && on_scale(self.medium_max) && self.low_max <= self.medium_max
        {
            Ok(())
        } else {
            Err(MetricError::InvalidBands {
                low_max: self.low_max,
                medium_max: self.medium_max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands_are_valid() {
        assert!(ComfortBands::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_bands_rejected() {
        let bands = ComfortBands {
            low_max: 80.0,
            medium_max: 50.0,
        };
        assert_eq!(
            bands.validate(),
            Err(MetricError::InvalidBands {
                low_max: 80.0,
                medium_max: 50.0
            })
        );
    }

    #[test]
    fn test_bands_off_scale_rejected() {
        let bands = ComfortBands {
            low_max: 40.0,
            medium_max: 120.0,
        };
        assert!(bands.validate().is_err());

        let nan = ComfortBands {
            low_max: f64::NAN,
            medium_max: 70.0,
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_alert_priority_tokens() {
        assert_eq!(AlertPriority::Low.token(), PaletteToken::Success);
        assert_eq!(AlertPriority::Medium.token(), PaletteToken::Warning);
        assert_eq!(AlertPriority::High.token(), PaletteToken::Danger);
    }

    #[test]
    fn test_palette_token_serializes_snake_case() {
        let json = serde_json::to_string(&PaletteToken::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
    }
}
