use clap::{Parser, Subcommand};
use core_types::{DeltaRounding, TransitionRange};
use std::path::PathBuf;

/// Period-over-period growth and summary statistics for housing price series.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file. Missing files fall back to defaults.
    #[arg(long, global = true, default_value = configuration::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Average percentage growth between consecutive values of one or more series.
    Growth(GrowthArgs),
    /// Count, mean, median, standard deviation and range of a list of values.
    Describe(DescribeArgs),
}

#[derive(Parser, Debug)]
pub struct GrowthArgs {
    /// A labelled, ordered series, e.g. `week=412000,415300,409800`. Repeatable.
    #[arg(long = "series", required = true, value_parser = parse_series)]
    pub series: Vec<LabelledSeries>,

    /// Which transitions to include: `observed` or `all`. Overrides the config file.
    #[arg(long)]
    pub range: Option<TransitionRange>,

    /// Delta rounding before averaging: `per-delta` or `none`. Overrides the config file.
    #[arg(long)]
    pub rounding: Option<DeltaRounding>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Comma-separated values.
    #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<f64>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelledSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Parses `label=v1,v2,...`. An empty value list is accepted; the aggregator
/// reports it as insufficient data.
pub fn parse_series(s: &str) -> Result<LabelledSeries, String> {
    let (label, values) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=V1,V2,... but got '{s}'"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("series '{s}' has an empty label"));
    }

    let values = values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<f64>()
                .map_err(|e| format!("invalid value '{v}' in series '{label}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LabelledSeries {
        label: label.to_string(),
        values,
    })
}
