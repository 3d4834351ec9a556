//! # House Insights Analytics
//!
//! Pure numeric summaries of a housing portfolio: the period-over-period growth
//! aggregator, group means, descriptive statistics, the business hypotheses
//! built on top of them and the buy/sell recommendation results.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** No I/O and no knowledge of how records were loaded or how
//!   results are displayed. Depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every calculator takes its input by reference and
//!   returns a fresh value or a typed `AnalyticsError`. Nothing is cached here;
//!   memoization belongs to the presentation layer.
//!
//! ## Public API
//!
//! - `GrowthAggregator` and the free functions `pairwise_percentage_delta` /
//!   `average_consecutive_growth`: mean percentage change across an ordered series.
//! - `group_mean`: ordered per-key means feeding the aggregator.
//! - `describe`, `PortfolioOverview`: descriptive statistics.
//! - `HypothesisEngine`: checks the ten business hypotheses.
//! - `RecommendationSummary` and the `recommendation` rankings: expected
//!   results of the buy/sell recommendation report.

pub mod error;
pub mod growth;
pub mod grouping;
pub mod hypothesis;
pub mod overview;
pub mod recommendation;
pub mod report;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use error::AnalyticsError;
pub use growth::{
    average_consecutive_growth, average_consecutive_growth_by, pairwise_percentage_delta,
    raw_percentage_delta, GrowthAggregator, DELTA_DECIMAL_PLACES,
};
pub use grouping::{group_mean, series, GroupMean};
pub use hypothesis::HypothesisEngine;
pub use recommendation::{
    buy_price_by_season, profit_by_zipcode, sales_by_date_and_season, top_deals, TOP_DEALS,
    TOP_ZIPCODES,
};
pub use report::{
    DailySales, DescriptiveSummary, GrowthSummary, HypothesisOutcome, PortfolioOverview,
    RecommendationSummary,
};
pub use stats::{describe, percentage_difference};
