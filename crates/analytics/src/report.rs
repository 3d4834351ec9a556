use chrono::NaiveDate;
use core_types::{GrowthOptions, Season, Verdict};
use serde::{Deserialize, Serialize};

/// The deltas behind a growth figure, together with their mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub transitions: usize,
    pub deltas: Vec<f64>,
    pub average_pct: f64,
    pub options: GrowthOptions,
}

/// Summary statistics of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; `None` for a single observation.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

/// Headline figures of the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    pub total_properties: usize,
    pub distinct_zipcodes: usize,
    pub mean_price: f64,
    /// Mean of price / lot area over records that have a lot area.
    pub mean_price_per_lot_area: Option<f64>,
    pub price: DescriptiveSummary,
}

/// The result of checking one business hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypothesisOutcome {
    /// "H1" through "H10".
    pub id: String,
    pub statement: String,
    pub claimed_pct: f64,
    pub observed_pct: Option<f64>,
    pub verdict: Verdict,
    /// Why the figure could not be computed, when the verdict is undetermined.
    pub note: Option<String>,
}

/// Expected result of buying every recommended property and reselling it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub total_properties: usize,
    pub buy_count: usize,
    /// Share of all properties recommended for purchase, in percent.
    pub buy_share_pct: f64,
    pub total_buy_price: f64,
    pub total_sale_price: f64,
    pub total_profit: f64,
    /// Total profit relative to the total buy price; `None` when nothing is bought.
    pub profit_pct: Option<f64>,
}

/// Number of recommended purchases dated on one day, in one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub season: Season,
    pub count: usize,
}
