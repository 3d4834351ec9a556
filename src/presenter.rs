use analytics::{AnalyticsError, DescriptiveSummary, GrowthAggregator, GrowthSummary};
use comfy_table::{presets::UTF8_FULL, Table};
use core_types::GrowthOptions;
use serde::Serialize;
use std::collections::HashMap;

/// Shown in place of a figure that could not be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Identity of a computed growth figure: the series label, the exact values and
/// the options it was computed with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    label: String,
    bits: Vec<u64>,
    options: GrowthOptions,
}

impl CacheKey {
    fn new(label: &str, values: &[f64], options: GrowthOptions) -> Self {
        Self {
            label: label.to_string(),
            bits: values.iter().map(|v| v.to_bits()).collect(),
            options,
        }
    }
}

/// Computes growth figures for display and memoizes them.
///
/// Failed figures are cached too, so a broken series is not recomputed on every
/// render. Entries live until [`invalidate`](Self::invalidate) or
/// [`clear`](Self::clear) drops them.
#[derive(Debug, Default)]
pub struct MetricPresenter {
    cache: HashMap<CacheKey, Result<GrowthSummary, AnalyticsError>>,
    computed: usize,
}

impl MetricPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn growth(
        &mut self,
        label: &str,
        values: &[f64],
        options: GrowthOptions,
    ) -> &Result<GrowthSummary, AnalyticsError> {
        let computed = &mut self.computed;
        self.cache
            .entry(CacheKey::new(label, values, options))
            .or_insert_with(|| {
                *computed += 1;
                let result = GrowthAggregator::with_options(options).summarize(values);
                if let Err(e) = &result {
                    tracing::warn!(series = label, error = %e, "growth figure unavailable");
                }
                result
            })
    }

    /// Drops every cached figure of `label`, returning how many were dropped.
    pub fn invalidate(&mut self, label: &str) -> usize {
        let before = self.cache.len();
        self.cache.retain(|key, _| key.label != label);
        before - self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// How many figures were actually computed rather than served from cache.
    pub fn computed(&self) -> usize {
        self.computed
    }
}

/// One line of the growth report.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthRow {
    pub label: String,
    pub transitions: Option<usize>,
    pub average_pct: Option<f64>,
    pub deltas: Vec<f64>,
    pub error: Option<String>,
}

impl GrowthRow {
    pub fn new(label: &str, result: &Result<GrowthSummary, AnalyticsError>) -> Self {
        match result {
            Ok(summary) => Self {
                label: label.to_string(),
                transitions: Some(summary.transitions),
                average_pct: Some(summary.average_pct),
                deltas: summary.deltas.clone(),
                error: None,
            },
            Err(e) => Self {
                label: label.to_string(),
                transitions: None,
                average_pct: None,
                deltas: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Formats a percentage with sign and two decimals, or [`NOT_AVAILABLE`].
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:+.2}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn growth_table(rows: &[GrowthRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Series", "Transitions", "Avg growth", "Note"]);
    for row in rows {
        table.add_row(vec![
            row.label.clone(),
            row.transitions.map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string()),
            format_pct(row.average_pct),
            row.error.clone().unwrap_or_default(),
        ]);
    }
    table
}

pub fn summary_table(summary: &DescriptiveSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Count".to_string(), summary.count.to_string()]);
    table.add_row(vec!["Mean".to_string(), format!("{:.2}", summary.mean)]);
    table.add_row(vec!["Median".to_string(), format!("{:.2}", summary.median)]);
    table.add_row(vec![
        "Std dev".to_string(),
        summary.std_dev.map_or_else(|| NOT_AVAILABLE.to_string(), |s| format!("{s:.2}")),
    ]);
    table.add_row(vec!["Min".to_string(), format!("{:.2}", summary.min)]);
    table.add_row(vec!["Max".to_string(), format!("{:.2}", summary.max)]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::TransitionRange;

    #[test]
    fn repeated_requests_hit_the_cache() {
        let mut presenter = MetricPresenter::new();
        let values = [100.0, 110.0, 121.0];

        let first = presenter.growth("year", &values, GrowthOptions::default()).clone();
        let second = presenter.growth("year", &values, GrowthOptions::default()).clone();

        assert_eq!(first, second);
        assert_eq!(presenter.computed(), 1);
        assert_eq!(presenter.len(), 1);
    }

    #[test]
    fn different_values_or_options_are_separate_entries() {
        let mut presenter = MetricPresenter::new();
        let all = GrowthOptions { range: TransitionRange::All, ..GrowthOptions::default() };

        presenter.growth("year", &[100.0, 110.0, 121.0], GrowthOptions::default());
        presenter.growth("year", &[100.0, 110.0, 121.0], all);
        presenter.growth("year", &[100.0, 120.0, 121.0], GrowthOptions::default());

        assert_eq!(presenter.computed(), 3);
    }

    #[test]
    fn invalidation_forces_recompute() {
        let mut presenter = MetricPresenter::new();
        let values = [100.0, 110.0, 121.0];
        presenter.growth("week", &values, GrowthOptions::default());
        presenter.growth("month", &values, GrowthOptions::default());

        assert_eq!(presenter.invalidate("week"), 1);
        assert_eq!(presenter.len(), 1);
        presenter.growth("week", &values, GrowthOptions::default());
        assert_eq!(presenter.computed(), 3);

        presenter.clear();
        assert!(presenter.is_empty());
    }

    #[test]
    fn failures_degrade_to_not_available() {
        let mut presenter = MetricPresenter::new();
        let result = presenter.growth("year", &[100.0, 110.0], GrowthOptions::default());
        let row = GrowthRow::new("year", result);

        assert_eq!(row.average_pct, None);
        assert!(row.error.as_deref().unwrap().contains("Not enough data"));
        assert_eq!(format_pct(row.average_pct), NOT_AVAILABLE);
    }

    #[test]
    fn formats_signed_percentages() {
        assert_eq!(format_pct(Some(10.0)), "+10.00%");
        assert_eq!(format_pct(Some(-0.04)), "-0.04%");
    }

    #[test]
    fn table_lists_every_series() {
        let mut presenter = MetricPresenter::new();
        let rows: Vec<GrowthRow> = [("week", vec![1.0, 2.0, 3.0]), ("grade", vec![0.0, 1.0, 2.0])]
            .iter()
            .map(|(label, values)| {
                GrowthRow::new(label, presenter.growth(label, values, GrowthOptions::default()))
            })
            .collect();

        let rendered = growth_table(&rows).to_string();
        assert!(rendered.contains("week"));
        assert!(rendered.contains("+100.00%"));
        assert!(rendered.contains("grade"));
        assert!(rendered.contains(NOT_AVAILABLE));
    }
}
