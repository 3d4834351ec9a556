use crate::error::AnalyticsError;
use crate::report::PortfolioOverview;
use crate::stats::{describe, mean};
use core_types::HouseRecord;
use std::collections::BTreeSet;

impl PortfolioOverview {
    /// Computes the headline figures of a set of records.
    pub fn from_records(records: &[HouseRecord]) -> Result<Self, AnalyticsError> {
        let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
        let price = describe(&prices)?;

        let per_area: Vec<f64> = records
            .iter()
            .filter_map(HouseRecord::price_per_lot_area)
            .collect();
        let distinct_zipcodes = records
            .iter()
            .map(|r| r.zipcode)
            .collect::<BTreeSet<_>>()
            .len();

        Ok(Self {
            total_properties: records.len(),
            distinct_zipcodes,
            mean_price: price.mean,
            mean_price_per_lot_area: mean(&per_area),
            price,
        })
    }
}
