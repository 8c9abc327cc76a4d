use cradle_metrics::*;
use pretty_assertions::assert_eq;

fn weight_series() -> Vec<WeightSample> {
    vec![
        WeightSample::new("Mon", 3.10),
        WeightSample::new("Tue", 3.15),
        WeightSample::new("Wed", 3.22),
        WeightSample::new("Thu", 3.28),
        WeightSample::new("Fri", 3.35),
    ]
}

fn impact_series() -> Vec<ImpactSample> {
    vec![
        ImpactSample::new("09:00", 0.00),
        ImpactSample::new("09:15", 0.10),
        ImpactSample::new("09:30", 0.25),
        ImpactSample::new("09:45", 0.40),
        ImpactSample::new("10:00", 0.50),
    ]
}

#[test]
fn trend_splits_exactly_at_threshold() {
    let threshold = 3.2;
    let steps = (0..=80).map(|i| 2.8 + i as f64 * 0.01);

    for weight in steps {
        let expected = if weight > threshold {
            TrendLabel::Gaining
        } else {
            TrendLabel::Stable
        };
        assert_eq!(classify_weight_trend(weight, threshold).label, expected);
    }
}

#[test]
fn override_slider_progress() {
    assert_eq!(normalize_progress(30.0, 28.0, 32.0), Ok(0.5));
    assert_eq!(normalize_progress(28.0, 28.0, 32.0), Ok(0.0));
    assert_eq!(normalize_progress(32.0, 28.0, 32.0), Ok(1.0));
    assert_eq!(normalize_progress(20.0, 28.0, 32.0), Ok(0.0));
    assert!(matches!(
        normalize_progress(30.0, 32.0, 28.0),
        Err(MetricError::InvalidRange { .. })
    ));
}

#[test]
fn integer_ranges_have_exact_bounds() {
    for (min, max) in [(0.0, 1.0), (28.0, 32.0), (-10.0, 10.0), (0.0, 100.0), (3.0, 7.0)] {
        assert_eq!(normalize_progress(min, min, max), Ok(0.0));
        assert_eq!(normalize_progress(max, min, max), Ok(1.0));
    }
}

#[test]
fn progress_is_within_unit_interval_or_an_error() {
    let edges = [
        f64::NEG_INFINITY,
        -f64::MAX,
        -1.0,
        0.0,
        28.0,
        f64::MAX,
        f64::INFINITY,
        f64::NAN,
    ];
    for &min in &edges {
        for &max in &edges {
            for &value in &edges {
                if let Ok(p) = normalize_progress(value, min, max) {
                    assert!(
                        (0.0..=1.0).contains(&p),
                        "normalize_progress({value}, {min}, {max}) = {p}"
                    );
                }
            }
        }
    }
}

#[test]
fn comfort_banding_depends_on_configured_bands() {
    let narrow = ComfortBands {
        low_max: 40.0,
        medium_max: 70.0,
    };
    let wide = ComfortBands {
        low_max: 95.0,
        medium_max: 99.0,
    };

    assert_eq!(band_comfort_score(92.0, &narrow).unwrap().label, "High risk");
    assert_eq!(band_comfort_score(92.0, &wide).unwrap().label, "Low risk");
}

#[test]
fn recent_window_over_weight_series() {
    let series = weight_series();
    let recent = select_recent_samples(&series, 3);

    assert_eq!(recent, &series[2..]);
    assert_eq!(recent.first().map(|s| s.timestamp.as_str()), Some("Wed"));
    assert!(select_recent_samples::<WeightSample>(&[], 7).is_empty());
}

#[test]
fn recent_window_of_ten_keeps_last_seven() {
    let series: Vec<ImpactSample> = (1..=10)
        .map(|i| ImpactSample::new(format!("s{}", i), i as f64 / 10.0))
        .collect();

    let recent = select_recent_samples(&series, 7);
    let stamps: Vec<&str> = recent.iter().map(|s| s.timestamp.as_str()).collect();
    assert_eq!(stamps, vec!["s4", "s5", "s6", "s7", "s8", "s9", "s10"]);
}

#[test]
fn impact_panel_values() {
    let series = impact_series();
    let saved = latest(&series).map(|s| s.kwh_saved);

    assert_eq!(saved, Reading::Value(0.5));
    assert_eq!(
        phone_charge_equivalent(0.5, DEFAULT_KWH_PER_PHONE_CHARGE),
        Ok(10)
    );
    assert!(latest::<ImpactSample>(&[]).is_no_data());
}

#[test]
fn placeholder_and_observed_deltas_agree_on_sign_for_demo_series() {
    let series = weight_series();
    let thresholds = ThresholdConfig::default();
    let current = latest(&series).map(|s| s.weight_kg).value().unwrap();

    let shown = weight_delta(current, &thresholds);
    let observed = observed_weight_delta(&series).unwrap();

    assert!(shown.is_placeholder());
    assert!(!observed.is_placeholder());
    assert_eq!(shown.sign, observed.sign);
}

#[test]
fn repeated_calls_are_identical() {
    let series = weight_series();
    let bands = ComfortBands::default();

    assert_eq!(
        classify_weight_trend(3.35, 3.2),
        classify_weight_trend(3.35, 3.2)
    );
    assert_eq!(
        normalize_progress(29.3, 28.0, 32.0),
        normalize_progress(29.3, 28.0, 32.0)
    );
    assert_eq!(
        band_comfort_score(92.0, &bands),
        band_comfort_score(92.0, &bands)
    );
    assert_eq!(
        select_recent_samples(&series, 2),
        select_recent_samples(&series, 2)
    );
}

#[test]
fn band_serializes_token_for_consumers() {
    let band = band_comfort_score(92.0, &ComfortBands::default()).unwrap();
    let json = serde_json::to_value(band).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "level": "low",
            "label": "Low risk",
            "token": "success",
        })
    );
}
