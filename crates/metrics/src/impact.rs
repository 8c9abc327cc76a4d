use crate::error::MetricError;

/// Energy of one full smartphone charge.
pub const DEFAULT_KWH_PER_PHONE_CHARGE: f64 = 0.05;

/// Number of whole phone charges equivalent to `kwh`, rounded to nearest.
pub fn phone_charge_equivalent(kwh: f64, kwh_per_charge: f64) -> Result<u32, MetricError> {
    if !(kwh_per_charge > 0.0) {
        return Err(MetricError::InvalidRate { kwh_per_charge });
    }
    if kwh.is_nan() {
        return Err(MetricError::NotANumber);
    }
    if kwh < 0.0 {
        return Err(MetricError::NegativeValue { value: kwh });
    }

    Ok((kwh / kwh_per_charge).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_kwh_is_ten_charges() {
        assert_eq!(
            phone_charge_equivalent(0.5, DEFAULT_KWH_PER_PHONE_CHARGE),
            Ok(10)
        );
    }

    #[test]
    fn test_zero_saved() {
        assert_eq!(phone_charge_equivalent(0.0, 0.05), Ok(0));
    }

    #[test]
    fn test_rejects_bad_rate() {
        assert_eq!(
            phone_charge_equivalent(0.5, 0.0),
            Err(MetricError::InvalidRate {
                kwh_per_charge: 0.0
            })
        );
        assert!(phone_charge_equivalent(0.5, -1.0).is_err());
    }

    #[test]
    fn test_rejects_negative_energy() {
        assert_eq!(
            phone_charge_equivalent(-0.1, 0.05),
            Err(MetricError::NegativeValue { value: -0.1 })
        );
        assert_eq!(
            phone_charge_equivalent(f64::NAN, 0.05),
            Err(MetricError::NotANumber)
        );
    }
}
