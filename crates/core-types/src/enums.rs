use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which adjacent pairs of a series take part in a growth calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionRange {
    /// Positions `1..n-1`, pairing `(v[i-1], v[i])`.
    ///
    /// Keeps the first transition and drops the final one. This is the range
    /// the published dashboard figures were produced with; whether dropping the
    /// last transition was ever intended is unknown, so it stays selectable.
    #[default]
    Observed,
    /// Every adjacent pair of the series.
    All,
}

impl TransitionRange {
    /// Minimum series length that yields at least one transition.
    pub fn min_len(&self) -> usize {
        match self {
            TransitionRange::Observed => 3,
            TransitionRange::All => 2,
        }
    }

    /// Positions `i` whose pair `(v[i-1], v[i])` is included, for a series of length `n`.
    pub fn positions(&self, n: usize) -> std::ops::Range<usize> {
        match self {
            TransitionRange::Observed => 1..n.saturating_sub(1).max(1),
            TransitionRange::All => 1..n.max(1),
        }
    }
}

impl fmt::Display for TransitionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionRange::Observed => write!(f, "observed"),
            TransitionRange::All => write!(f, "all"),
        }
    }
}

impl FromStr for TransitionRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "observed" => Ok(TransitionRange::Observed),
            "all" => Ok(TransitionRange::All),
            other => Err(format!(
                "unknown transition range '{other}' (expected 'observed' or 'all')"
            )),
        }
    }
}

/// Whether each pairwise delta is rounded before the deltas are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeltaRounding {
    /// Round every delta to two decimal places, then average.
    #[default]
    PerDelta,
    /// Average the unrounded deltas.
    None,
}

impl fmt::Display for DeltaRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaRounding::PerDelta => write!(f, "per-delta"),
            DeltaRounding::None => write!(f, "none"),
        }
    }
}

impl FromStr for DeltaRounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-delta" => Ok(DeltaRounding::PerDelta),
            "none" => Ok(DeltaRounding::None),
            other => Err(format!("unknown rounding '{other}' (expected 'per-delta' or 'none')")),
        }
    }
}

/// Outcome of checking a business hypothesis against the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Valid,
    Invalid,
    /// The figure could not be computed (e.g. an empty comparison group).
    Undetermined,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Invalid => write!(f, "invalid"),
            Verdict::Undetermined => write!(f, "undetermined"),
        }
    }
}

/// Season of a sale date, as tagged in the recommendation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[serde(alias = "Spring")]
    Spring,
    #[serde(alias = "Summer")]
    Summer,
    #[serde(alias = "Fall", alias = "autumn", alias = "Autumn")]
    Fall,
    #[serde(alias = "Winter")]
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// Whether a property was recommended for purchase.
///
/// Anything other than `Buy` is treated as a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecommendationStatus {
    Buy,
    Pass,
}

impl From<String> for RecommendationStatus {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("buy") {
            RecommendationStatus::Buy
        } else {
            RecommendationStatus::Pass
        }
    }
}

impl From<RecommendationStatus> for String {
    fn from(status: RecommendationStatus) -> Self {
        match status {
            RecommendationStatus::Buy => "Buy".to_string(),
            RecommendationStatus::Pass => "Don't buy".to_string(),
        }
    }
}
