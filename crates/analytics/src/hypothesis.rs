use crate::error::AnalyticsError;
use crate::growth::GrowthAggregator;
use crate::grouping::{group_mean, series};
use crate::report::HypothesisOutcome;
use crate::stats::{mean, percentage_difference};
use core_types::{HouseRecord, HypothesisCriteria, Verdict};

/// Checks the ten business hypotheses of the portfolio study against a set of records.
///
/// Comparison hypotheses (H1-H3, H8) measure how much larger the mean of one group is
/// than the mean of another. Growth hypotheses (H4-H7, H9, H10) group by an ordered
/// key, take the mean price per group and run the result through the
/// [`GrowthAggregator`] configured by `criteria.growth`.
#[derive(Debug, Clone, Default)]
pub struct HypothesisEngine {
    criteria: HypothesisCriteria,
    aggregator: GrowthAggregator,
}

impl HypothesisEngine {
    pub fn new(criteria: HypothesisCriteria) -> Self {
        let aggregator = GrowthAggregator::with_options(criteria.growth);
        Self { criteria, aggregator }
    }

    /// Evaluates H1 through H10, in order.
    ///
    /// A hypothesis whose figure cannot be computed is reported as
    /// [`Verdict::Undetermined`]; evaluation as a whole never fails.
    pub fn evaluate(&self, records: &[HouseRecord]) -> Vec<HypothesisOutcome> {
        let c = &self.criteria;
        let all: Vec<&HouseRecord> = records.iter().collect();

        let outcomes = vec![
            self.outcome(
                "H1",
                "Waterfront properties are 20% more expensive, on average.".to_string(),
                20.0,
                self.compare(&all, |r| r.waterfront, |r| !r.waterfront, |r| r.price),
            ),
            self.outcome(
                "H2",
                format!(
                    "Properties built before {} are 50% cheaper, on average.",
                    c.old_house_cutoff_year
                ),
                -50.0,
                self.compare(
                    &all,
                    |r| r.built_before(c.old_house_cutoff_year),
                    |r| !r.built_before(c.old_house_cutoff_year),
                    |r| r.price,
                ),
            ),
            self.outcome(
                "H3",
                "Properties without a basement have a 40% larger lot than those with one."
                    .to_string(),
                40.0,
                self.compare(&all, |r| !r.has_basement(), |r| r.has_basement(), |r| r.sqft_lot),
            ),
            self.outcome(
                "H4",
                "Mean price grows 10% year over year.".to_string(),
                10.0,
                self.growth(&all, HouseRecord::year),
            ),
            self.outcome(
                "H5",
                format!(
                    "Properties with {} bathrooms grow 15% month over month, on average.",
                    c.bathroom_count
                ),
                15.0,
                {
                    let subset: Vec<&HouseRecord> = records
                        .iter()
                        .filter(|r| r.bathrooms == c.bathroom_count)
                        .collect();
                    self.growth(&subset, HouseRecord::month)
                },
            ),
            self.outcome(
                "H6",
                "Each additional bedroom adds 10% to the mean price.".to_string(),
                10.0,
                self.growth(&all, |r| r.bedrooms),
            ),
            self.outcome(
                "H7",
                "Each step up in condition adds 20% to the mean price.".to_string(),
                20.0,
                self.growth(&all, |r| r.condition),
            ),
            self.outcome(
                "H8",
                concat!(
                    "Poor-condition waterfront properties are 40% more expensive ",
                    "than poor-condition ones without a view."
                )
                .to_string(),
                40.0,
                {
                    let poor: Vec<&HouseRecord> = records
                        .iter()
                        .filter(|r| r.condition <= c.poor_condition_max)
                        .collect();
                    self.compare(&poor, |r| r.waterfront, |r| !r.waterfront, |r| r.price)
                },
            ),
            self.outcome(
                "H9",
                "Each grade level adds 25% to the mean price.".to_string(),
                25.0,
                self.growth(&all, |r| r.grade),
            ),
            self.outcome(
                "H10",
                "Mean price grows 0.1% week over week.".to_string(),
                0.1,
                self.growth(&all, HouseRecord::iso_week),
            ),
        ];

        tracing::debug!(
            records = records.len(),
            valid = outcomes.iter().filter(|o| o.verdict == Verdict::Valid).count(),
            undetermined = outcomes.iter().filter(|o| o.verdict == Verdict::Undetermined).count(),
            "evaluated business hypotheses"
        );
        outcomes
    }

    fn outcome(
        &self,
        id: &str,
        statement: String,
        claimed_pct: f64,
        figure: Result<f64, AnalyticsError>,
    ) -> HypothesisOutcome {
        match figure {
            Ok(observed) => {
                let verdict = if (observed - claimed_pct).abs() <= self.criteria.tolerance_pct {
                    Verdict::Valid
                } else {
                    Verdict::Invalid
                };
                HypothesisOutcome {
                    id: id.to_string(),
                    statement,
                    claimed_pct,
                    observed_pct: Some(observed),
                    verdict,
                    note: None,
                }
            }
            Err(e) => {
                tracing::warn!(
                    hypothesis = id,
                    error = %e,
                    "hypothesis figure could not be computed"
                );
                HypothesisOutcome {
                    id: id.to_string(),
                    statement,
                    claimed_pct,
                    observed_pct: None,
                    verdict: Verdict::Undetermined,
                    note: Some(e.to_string()),
                }
            }
        }
    }

    /// Percentage by which the subject group's mean exceeds the baseline group's mean.
    fn compare<S, B, V>(
        &self,
        records: &[&HouseRecord],
        in_subject: S,
        in_baseline: B,
        value: V,
    ) -> Result<f64, AnalyticsError>
    where
        S: Fn(&HouseRecord) -> bool,
        B: Fn(&HouseRecord) -> bool,
        V: Fn(&HouseRecord) -> f64,
    {
        let group_mean_of = |keep: &dyn Fn(&HouseRecord) -> bool| {
            let values: Vec<f64> = records
                .iter()
                .copied()
                .filter(|&r| keep(r))
                .map(|r| value(r))
                .collect();
            mean(&values).ok_or(AnalyticsError::InsufficientData {
                required: 1,
                available: 0,
            })
        };

        let subject = group_mean_of(&in_subject)?;
        let baseline = group_mean_of(&in_baseline)?;
        percentage_difference(subject, baseline)
    }

    /// Average growth of the mean price across groups ordered by `key_fn`.
    fn growth<K, F>(&self, records: &[&HouseRecord], key_fn: F) -> Result<f64, AnalyticsError>
    where
        K: Ord,
        F: Fn(&HouseRecord) -> K,
    {
        let groups = group_mean(records, |r| key_fn(*r), |r| r.price);
        self.aggregator.average(&series(&groups))
    }
}
