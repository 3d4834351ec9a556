use analytics::describe;
use anyhow::{Context, Result};
use clap::Parser;
use configuration::Config;
use core_types::GrowthOptions;
use house_insights::cli::{Cli, Commands, DescribeArgs, GrowthArgs};
use house_insights::logging;
use house_insights::presenter::{
    growth_table, summary_table, GrowthRow, MetricPresenter, NOT_AVAILABLE,
};

/// The main entry point for the house-insights command-line tool.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Logging comes up first so configuration loading is traced too.
    let log_level = logging::init()?;

    let config = configuration::load_config_from(&cli.config)
        .context("configuration could not be loaded")?;
    // `RUST_LOG` wins over the configured level.
    log_level.apply(&config.logging.level)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Growth(args) => handle_growth(args, &config),
        Commands::Describe(args) => handle_describe(args),
    }
}

// ==============================================================================
// Growth Command Logic
// ==============================================================================

/// Computes the average consecutive growth of every requested series.
///
/// A series that cannot be computed is shown as N/A with the reason; it never
/// fails the command.
fn handle_growth(args: GrowthArgs, config: &Config) -> Result<()> {
    let options = GrowthOptions {
        range: args.range.unwrap_or(config.growth.range),
        rounding: args.rounding.unwrap_or(config.growth.rounding),
    };
    tracing::info!(
        series = args.series.len(),
        range = %options.range,
        rounding = %options.rounding,
        "computing growth"
    );

    let mut presenter = MetricPresenter::new();
    let rows: Vec<GrowthRow> = args
        .series
        .iter()
        .map(|s| GrowthRow::new(&s.label, presenter.growth(&s.label, &s.values, options)))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", growth_table(&rows));
    }

    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        tracing::info!(failed, "some series shown as {}", NOT_AVAILABLE);
    }
    Ok(())
}

// ==============================================================================
// Describe Command Logic
// ==============================================================================

fn handle_describe(args: DescribeArgs) -> Result<()> {
    match describe(&args.values) {
        Ok(summary) if args.json => println!("{}", serde_json::to_string_pretty(&summary)?),
        Ok(summary) => println!("{}", summary_table(&summary)),
        Err(e) => {
            tracing::warn!(error = %e, "summary unavailable");
            println!("{NOT_AVAILABLE}: {e}");
        }
    }
    Ok(())
}
