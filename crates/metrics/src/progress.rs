use crate::error::MetricError;
use crate::types::ZoneReading;

/// Position of `value` within `[min, max]` as a fraction in `[0, 1]`.
///
/// Values outside the range are clamped. `value == min` yields exactly `0.0`
/// and `value == max` exactly `1.0`. Bounds must be finite, ordered, and
/// span a finite width.
pub fn normalize_progress(value: f64, min: f64, max: f64) -> Result<f64, MetricError> {
    let span = max - min;
    // Negated comparison so NaN bounds are rejected too.
    if !(max > min) || !min.is_finite() || !max.is_finite() || !span.is_finite() {
        return Err(MetricError::InvalidRange { min, max });
    }
    if value.is_nan() {
        return Err(MetricError::NotANumber);
    }

    Ok(((value - min) / span).clamp(0.0, 1.0))
}

/// Heat fraction of a zone within the displayed temperature span.
pub fn zone_heat_fraction(zone: &ZoneReading, min_c: f64, max_c: f64) -> Result<f64, MetricError> {
    normalize_progress(zone.temperature_c, min_c, max_c)
}
