use analytics::{
    average_consecutive_growth, pairwise_percentage_delta, AnalyticsError, GrowthAggregator,
};
use core_types::{DeltaRounding, GrowthOptions, TransitionRange};

const EPS: f64 = 1e-9;

/// A geometric series where every step grows by `pct` percent.
fn geometric(start: f64, pct: f64, len: usize) -> Vec<f64> {
    let factor = 1.0 + pct / 100.0;
    (0..len).map(|i| start * factor.powi(i as i32)).collect()
}

#[test]
fn n3_matches_first_pairwise_delta() {
    let values = [100.0, 110.0, 121.0];
    let expected = pairwise_percentage_delta(100.0, 110.0).unwrap();
    assert_eq!(expected, 10.0);
    assert!((average_consecutive_growth(&values).unwrap() - expected).abs() < EPS);
}

#[test]
fn n4_doubling_series() {
    let avg = average_consecutive_growth(&[100.0, 200.0, 400.0, 800.0]).unwrap();
    assert!((avg - 100.0).abs() < EPS);
}

#[test]
fn lengths_one_and_two_are_insufficient() {
    assert!(matches!(
        average_consecutive_growth(&[5.0]),
        Err(AnalyticsError::InsufficientData { available: 1, .. })
    ));
    assert!(matches!(
        average_consecutive_growth(&[5.0, 6.0]),
        Err(AnalyticsError::InsufficientData { available: 2, .. })
    ));
}

#[test]
fn constant_growth_is_recovered_exactly() {
    for pct in [5.0, 12.5, -4.0] {
        for options in [
            GrowthOptions::default(),
            GrowthOptions { range: TransitionRange::All, rounding: DeltaRounding::None },
        ] {
            let avg = GrowthAggregator::with_options(options)
                .average(&geometric(250_000.0, pct, 12))
                .unwrap();
            assert!((avg - pct).abs() < EPS, "pct {pct} with {options:?} gave {avg}");
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let values = geometric(410_000.0, 0.37, 52);
    let agg = GrowthAggregator::new();
    let first = agg.average(&values).unwrap();
    let second = agg.average(&values).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn zero_reached_as_previous_fails() {
    assert_eq!(
        average_consecutive_growth(&[10.0, 0.0, 10.0]),
        Ok(-100.0),
        "zero as the current value of the only transition is fine"
    );
    assert_eq!(
        average_consecutive_growth(&[10.0, 0.0, 10.0, 10.0]),
        Err(AnalyticsError::DivisionByZero { position: 1 })
    );
}

#[test]
fn aggregator_is_shareable_across_threads() {
    let agg = GrowthAggregator::new();
    let values = geometric(100.0, 3.0, 20);
    let results: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| agg.average(&values).unwrap())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|r| (r - 3.0).abs() < EPS));
}
