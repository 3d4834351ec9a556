use crate::enums::{DeltaRounding, TransitionRange};
use serde::{Deserialize, Serialize};

/// How the growth aggregator walks and rounds a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthOptions {
    pub range: TransitionRange,
    pub rounding: DeltaRounding,
}

/// Thresholds used when checking the business hypotheses against the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypothesisCriteria {
    /// Absolute distance, in percentage points, within which an observed figure
    /// confirms the claimed one.
    pub tolerance_pct: f64,
    /// Houses built before this year count as "old".
    pub old_house_cutoff_year: i32,
    /// Highest `condition` score still considered poor.
    pub poor_condition_max: u8,
    /// Bathroom count the month-over-month hypothesis is restricted to.
    pub bathroom_count: f64,
    pub growth: GrowthOptions,
}

impl Default for HypothesisCriteria {
    fn default() -> Self {
        Self {
            tolerance_pct: 1.0,
            old_house_cutoff_year: 1955,
            poor_condition_max: 2,
            bathroom_count: 3.0,
            growth: GrowthOptions::default(),
        }
    }
}
