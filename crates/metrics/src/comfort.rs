use serde::Serialize;

use crate::error::MetricError;
use crate::types::{ComfortBands, PaletteToken, SCORE_MAX, SCORE_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Medium => "Medium risk",
            RiskLevel::High => "High risk",
        }
    }

    pub fn token(&self) -> PaletteToken {
        match self {
            RiskLevel::Low => PaletteToken::Success,
            RiskLevel::Medium => PaletteToken::Warning,
            RiskLevel::High => PaletteToken::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComfortBand {
    pub level: RiskLevel,
    pub label: &'static str,
    pub token: PaletteToken,
}

impl From<RiskLevel> for ComfortBand {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            label: level.label(),
            token: level.token(),
        }
    }
}

/// Maps a comfort score on the 0..=100 scale to a risk band.
///
/// `score <= low_max` is low risk, `score <= medium_max` medium, anything
/// above is high.
pub fn band_comfort_score(score: f64, bands: &ComfortBands) -> Result<ComfortBand, MetricError> {
    bands.validate()?;

    if score.is_nan() {
        return Err(MetricError::NotANumber);
    }
    if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Err(MetricError::ScoreOutOfRange { score });
    }

    let level = if score <= bands.low_max {
        RiskLevel::Low
    } else if score <= bands.medium_max {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    Ok(level.into())
}
