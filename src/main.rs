//! Salesdash CLI
//!
//! A filtering and aggregation pipeline for e-commerce sales data.
//! Generates dashboard-ready JSON reports from order CSV exports.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use salesdash_core::commands::{
    display_schema, display_version, execute_inspect, execute_report, validate_args,
    validate_report_file, ReportArgs,
};

/// Salesdash - dashboard reports for e-commerce sales data
#[derive(Parser, Debug)]
#[command(name = "salesdash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a dashboard report from a sales CSV
    Report {
        /// Path to the sales CSV dataset
        #[arg(short, long)]
        data: PathBuf,

        /// Output path for the report JSON
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Categories to include, comma-separated (default: all in data)
        #[arg(short, long, value_delimiter = ',')]
        categories: Option<Vec<String>>,

        /// Inclusive start date, YYYY-MM-DD (default: earliest in data)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Inclusive end date, YYYY-MM-DD (default: latest in data)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Months for the daily trend, comma-separated (default: most recent)
        #[arg(long, value_delimiter = ',')]
        months: Option<Vec<String>>,

        /// Number of cities in the top-cities table
        #[arg(long, default_value = "10")]
        top_cities: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Print a dataset overview: categories and date range
    Inspect {
        /// Path to the sales CSV dataset
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            data,
            output,
            categories,
            start,
            end,
            months,
            top_cities,
            summary,
        } => {
            let args = ReportArgs {
                data,
                output_json: output,
                categories,
                start_date: start,
                end_date: end,
                trend_months: months,
                top_cities,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Inspect { data } => {
            execute_inspect(&data)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
