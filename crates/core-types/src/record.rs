use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single property sale from the housing portfolio.
///
/// Field names follow the public King County house-sales dataset so records can
/// be deserialized straight from it by whichever layer owns the loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    pub id: u64,
    pub date: NaiveDate,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft_living: f64,
    pub sqft_lot: f64,
    pub floors: f64,
    #[serde(with = "flag")]
    pub waterfront: bool,
    pub view: u8,
    /// Condition score, 1 (poor) to 5 (excellent).
    pub condition: u8,
    /// Construction quality grade, 1 to 13.
    pub grade: u8,
    pub sqft_basement: f64,
    pub yr_built: i32,
    pub zipcode: u32,
    pub lat: f64,
    pub long: f64,
}

/// ISO-8601 week bucket. Orders chronologically across year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoWeek {
    pub year: i32,
    pub week: u32,
}

impl HouseRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn iso_week(&self) -> IsoWeek {
        let week = self.date.iso_week();
        IsoWeek {
            year: week.year(),
            week: week.week(),
        }
    }

    pub fn has_basement(&self) -> bool {
        self.sqft_basement > 0.0
    }

    /// True when the house was built strictly before `cutoff_year`.
    pub fn built_before(&self, cutoff_year: i32) -> bool {
        self.yr_built < cutoff_year
    }

    /// Sale price divided by lot area; `None` for records without a lot area.
    pub fn price_per_lot_area(&self) -> Option<f64> {
        if self.sqft_lot > 0.0 {
            Some(self.price / self.sqft_lot)
        } else {
            None
        }
    }
}

/// The dataset encodes booleans as 0/1; accept both that and real booleans.
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(b),
            Raw::Int(i) => Ok(i != 0),
        }
    }
}
