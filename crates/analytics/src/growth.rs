use crate::error::AnalyticsError;
use crate::report::GrowthSummary;
use core_types::{DeltaRounding, GrowthOptions};
use rust_decimal::prelude::*;

/// Decimal places a pairwise delta is rounded to for presentation.
pub const DELTA_DECIMAL_PLACES: u32 = 2;

/// A stateless calculator for the average period-over-period percentage growth
/// of an ordered series.
///
/// The series order is the iteration order; values are addressed by position,
/// never by label. Which transitions take part is governed by
/// [`GrowthOptions::range`], and whether each delta is rounded before averaging
/// by [`GrowthOptions::rounding`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthAggregator {
    options: GrowthOptions,
}

impl GrowthAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GrowthOptions) -> Self {
        Self { options }
    }

    /// The mean of the included pairwise percentage deltas.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` when the series is too short to yield a single delta.
    /// * `DivisionByZero` when an included "previous" value is zero.
    /// * `InvalidValue` when an included value is NaN or infinite.
    pub fn average(&self, values: &[f64]) -> Result<f64, AnalyticsError> {
        let deltas = self.deltas(values)?;
        let mean = deltas.iter().sum::<f64>() / deltas.len() as f64;
        tracing::trace!(
            len = values.len(),
            transitions = deltas.len(),
            range = %self.options.range,
            mean,
            "computed average consecutive growth"
        );
        Ok(mean)
    }

    /// Like [`average`](Self::average), extracting the value of each item with `selector`.
    pub fn average_by<T, F>(&self, items: &[T], selector: F) -> Result<f64, AnalyticsError>
    where
        F: Fn(&T) -> f64,
    {
        let values: Vec<f64> = items.iter().map(selector).collect();
        self.average(&values)
    }

    /// The included pairwise deltas, in series order.
    pub fn deltas(&self, values: &[f64]) -> Result<Vec<f64>, AnalyticsError> {
        let range = self.options.range;
        if values.len() < range.min_len() {
            return Err(AnalyticsError::InsufficientData {
                required: range.min_len(),
                available: values.len(),
            });
        }

        range
            .positions(values.len())
            .map(|i| self.delta_at(values, i))
            .collect()
    }

    /// Deltas and their mean in one report.
    pub fn summarize(&self, values: &[f64]) -> Result<GrowthSummary, AnalyticsError> {
        let deltas = self.deltas(values)?;
        let average_pct = deltas.iter().sum::<f64>() / deltas.len() as f64;
        Ok(GrowthSummary {
            transitions: deltas.len(),
            deltas,
            average_pct,
            options: self.options,
        })
    }

    fn delta_at(&self, values: &[f64], i: usize) -> Result<f64, AnalyticsError> {
        let (previous, current) = (values[i - 1], values[i]);
        for (position, value) in [(i - 1, previous), (i, current)] {
            if !value.is_finite() {
                return Err(AnalyticsError::InvalidValue { position, value });
            }
        }
        if previous == 0.0 {
            return Err(AnalyticsError::DivisionByZero { position: i - 1 });
        }

        let raw = 100.0 * (current - previous) / previous;
        if !raw.is_finite() {
            // The pair itself is finite but its ratio overflowed.
            return Err(AnalyticsError::InvalidValue { position: i, value: raw });
        }
        match self.options.rounding {
            DeltaRounding::PerDelta => round_pct(raw),
            DeltaRounding::None => Ok(raw),
        }
    }
}

/// Percentage change from `previous` to `current`, rounded to two decimals.
///
/// A zero `previous` is reported as `DivisionByZero` at position 0 (the first
/// value of the pair).
pub fn pairwise_percentage_delta(previous: f64, current: f64) -> Result<f64, AnalyticsError> {
    round_pct(raw_percentage_delta(previous, current)?)
}

/// Percentage change from `previous` to `current`, unrounded.
pub fn raw_percentage_delta(previous: f64, current: f64) -> Result<f64, AnalyticsError> {
    GrowthAggregator::with_options(GrowthOptions {
        rounding: DeltaRounding::None,
        ..GrowthOptions::default()
    })
    .delta_at(&[previous, current], 1)
}

/// Average growth over `values` with the default options.
pub fn average_consecutive_growth(values: &[f64]) -> Result<f64, AnalyticsError> {
    GrowthAggregator::new().average(values)
}

/// Average growth over the values `selector` extracts from `items`.
pub fn average_consecutive_growth_by<T, F>(
    items: &[T],
    selector: F,
    options: &GrowthOptions,
) -> Result<f64, AnalyticsError>
where
    F: Fn(&T) -> f64,
{
    GrowthAggregator::with_options(*options).average_by(items, selector)
}

/// Round half-to-even to [`DELTA_DECIMAL_PLACES`].
///
/// Finite values beyond `Decimal`'s range carry no fractional digits at that
/// precision and come back unchanged.
fn round_pct(value: f64) -> Result<f64, AnalyticsError> {
    let Some(decimal) = Decimal::from_f64(value) else {
        return if value.is_finite() {
            Ok(value)
        } else {
            Err(AnalyticsError::Calculation(format!("{value} cannot be rounded")))
        };
    };
    decimal.round_dp(DELTA_DECIMAL_PLACES).to_f64().ok_or_else(|| {
        AnalyticsError::Calculation(format!("failed to convert rounded {value} back to f64"))
    })
}
