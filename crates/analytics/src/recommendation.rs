use crate::error::AnalyticsError;
use crate::grouping::{group_mean, GroupMean};
use crate::report::{DailySales, RecommendationSummary};
use chrono::NaiveDate;
use core_types::{Recommendation, Season};
use std::collections::BTreeMap;

/// How many deals the "best deals" listing shows by default.
pub const TOP_DEALS: usize = 100;

/// How many zipcodes the profit-by-region ranking shows by default.
pub const TOP_ZIPCODES: usize = 10;

impl RecommendationSummary {
    /// Totals over the properties recommended for purchase.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` for an empty report.
    /// * `InvalidValue` when a recommended row has a non-finite price or sale
    ///   price. The position is the row index.
    pub fn from_records(records: &[Recommendation]) -> Result<Self, AnalyticsError> {
        if records.is_empty() {
            return Err(AnalyticsError::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        let mut buy_count = 0;
        let (mut total_buy_price, mut total_sale_price) = (0.0, 0.0);
        for (position, r) in records.iter().enumerate().filter(|(_, r)| r.is_buy()) {
            for value in [r.price, r.sale_price] {
                if !value.is_finite() {
                    return Err(AnalyticsError::InvalidValue { position, value });
                }
            }
            buy_count += 1;
            total_buy_price += r.price;
            total_sale_price += r.sale_price;
        }

        let total_profit = total_sale_price - total_buy_price;
        let profit_pct = (total_buy_price != 0.0).then(|| 100.0 * total_profit / total_buy_price);
        tracing::debug!(
            total = records.len(),
            buy_count,
            total_profit,
            "summarized recommendations"
        );

        Ok(Self {
            total_properties: records.len(),
            buy_count,
            buy_share_pct: 100.0 * buy_count as f64 / records.len() as f64,
            total_buy_price,
            total_sale_price,
            total_profit,
            profit_pct,
        })
    }
}

/// The `limit` recommended purchases with the highest expected profit, best first.
///
/// Ties keep report order.
pub fn top_deals(records: &[Recommendation], limit: usize) -> Vec<&Recommendation> {
    let mut deals: Vec<&Recommendation> = records.iter().filter(|r| r.is_buy()).collect();
    deals.sort_by(|a, b| b.profit().total_cmp(&a.profit()));
    deals.truncate(limit);
    deals
}

/// Mean discount to the zipcode median per zipcode, over recommended purchases.
///
/// Ranked by mean descending (ties by zipcode) and cut to `limit` entries.
pub fn profit_by_zipcode(records: &[Recommendation], limit: usize) -> Vec<GroupMean<u32>> {
    let buys: Vec<&Recommendation> = records.iter().filter(|r| r.is_buy()).collect();
    let mut groups = group_mean(&buys, |r| r.zipcode, |r| r.discount_to_median());
    groups.sort_by(|a, b| b.mean.total_cmp(&a.mean).then(a.key.cmp(&b.key)));
    groups.truncate(limit);
    groups
}

/// Mean purchase price of recommended properties per season, in season order.
pub fn buy_price_by_season(records: &[Recommendation]) -> Vec<GroupMean<Season>> {
    let buys: Vec<&Recommendation> = records.iter().filter(|r| r.is_buy()).collect();
    group_mean(&buys, |r| r.season, |r| r.price)
}

/// Recommended purchases counted per day and season, ordered by date.
///
/// Rows dated before `since` are left out.
pub fn sales_by_date_and_season(
    records: &[Recommendation],
    since: Option<NaiveDate>,
) -> Vec<DailySales> {
    let mut counts: BTreeMap<(NaiveDate, Season), usize> = BTreeMap::new();
    for r in records.iter().filter(|r| r.is_buy()) {
        if since.is_some_and(|start| r.date < start) {
            continue;
        }
        *counts.entry((r.date, r.season)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((date, season), count)| DailySales { date, season, count })
        .collect()
}
