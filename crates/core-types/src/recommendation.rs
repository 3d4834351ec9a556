use crate::enums::{RecommendationStatus, Season};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the buy/sell recommendation report.
///
/// `median_price` is the median price of the record's zipcode; a house priced
/// below it (in good condition) is what the report recommends buying. The
/// column aliases match the headers of the published report files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u64,
    pub date: NaiveDate,
    pub zipcode: u32,
    pub season: Season,
    pub status: RecommendationStatus,
    /// Purchase price.
    #[serde(alias = "Buy Price")]
    pub price: f64,
    #[serde(alias = "Median Price")]
    pub median_price: f64,
    /// Expected resale price.
    #[serde(alias = "Sale Price")]
    pub sale_price: f64,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
}

impl Recommendation {
    pub fn is_buy(&self) -> bool {
        self.status == RecommendationStatus::Buy
    }

    /// Expected gain from buying at `price` and selling at `sale_price`.
    pub fn profit(&self) -> f64 {
        self.sale_price - self.price
    }

    /// How far the purchase price sits below the zipcode median.
    pub fn discount_to_median(&self) -> f64 {
        self.median_price - self.price
    }
}
