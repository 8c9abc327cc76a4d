use thiserror::Error;

/// Errors raised by the derived-metric functions.
///
/// Every variant describes an out-of-domain input. Empty series are not an
/// error; see [`crate::Reading::NoData`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MetricError {
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("score {score} is outside 0..=100")]
    ScoreOutOfRange { score: f64 },

    #[error("invalid comfort bands: low_max={low_max}, medium_max={medium_max}")]
    InvalidBands { low_max: f64, medium_max: f64 },

    #[error("value {value} must not be negative")]
    NegativeValue { value: f64 },

    #[error("value is not a number")]
    NotANumber,

    #[error("kWh per charge must be positive, got {kwh_per_charge}")]
    InvalidRate { kwh_per_charge: f64 },
}
