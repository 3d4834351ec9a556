use crate::error::AnalyticsError;
use crate::report::DescriptiveSummary;

/// Count, mean, median, sample standard deviation and range of `values`.
pub fn describe(values: &[f64]) -> Result<DescriptiveSummary, AnalyticsError> {
    if values.is_empty() {
        return Err(AnalyticsError::InsufficientData {
            required: 1,
            available: 0,
        });
    }
    if let Some((position, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(AnalyticsError::InvalidValue { position, value });
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };

    let std_dev = (n > 1).then(|| {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    });

    Ok(DescriptiveSummary {
        count: n,
        mean,
        median,
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
    })
}

/// How much larger `subject` is than `baseline`, in percent. Unrounded.
pub fn percentage_difference(subject: f64, baseline: f64) -> Result<f64, AnalyticsError> {
    if baseline == 0.0 {
        return Err(AnalyticsError::DivisionByZero { position: 1 });
    }
    Ok(100.0 * (subject - baseline) / baseline)
}

/// Arithmetic mean; `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
