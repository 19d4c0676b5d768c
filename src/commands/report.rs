//! Report command implementation.
//!
//! The report command:
//! 1. Loads and normalizes the dataset
//! 2. Applies the filter criteria
//! 3. Computes the chart tables
//! 4. Assembles and writes the report JSON

use crate::aggregate::{chart_tables, observed_trend_months};
use crate::filter::{apply, FilterCriteria, FilteredView};
use crate::report::{build_report, render_summary, write_report};
use crate::store::RecordStore;
use crate::utils::config::DEFAULT_TOP_CITIES;
use anyhow::{Context, Result};
use chrono::{Month, NaiveDate};
use log::{debug, info};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the sales CSV dataset
    pub data: PathBuf,

    /// Output path for the report JSON
    pub output_json: PathBuf,

    /// Categories to include (None = every category in the data)
    pub categories: Option<Vec<String>>,

    /// Inclusive start of the date interval (None = earliest in the data)
    pub start_date: Option<NaiveDate>,

    /// Inclusive end of the date interval (None = latest in the data)
    pub end_date: Option<NaiveDate>,

    /// Month names for the daily trend (None = most recent observed)
    pub trend_months: Option<Vec<String>>,

    /// Number of cities to keep in the top-cities table
    pub top_cities: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from("sales.csv"),
            output_json: PathBuf::from("report.json"),
            categories: None,
            start_date: None,
            end_date: None,
            trend_months: None,
            top_cities: DEFAULT_TOP_CITIES,
            print_summary: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Report command arguments
///
/// # Returns
/// Ok if the report was written, Err with context if any step fails
///
/// # Errors
/// * Dataset load failures (missing file, missing columns, no usable rows)
/// * Inverted date intervals after defaults are resolved
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = ReportArgs {
///     data: PathBuf::from("sales.csv"),
///     output_json: PathBuf::from("report.json"),
///     categories: Some(vec!["Shirts".to_string()]),
///     print_summary: true,
///     ..Default::default()
/// };
///
/// execute_report(args)?;
/// ```
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Generating report from: {}", args.data.display());

    // Step 1: Load dataset
    info!("Step 1/4: Loading dataset...");
    let store = RecordStore::open(&args.data)
        .with_context(|| format!("Failed to load dataset {}", args.data.display()))?;

    debug!(
        "Loaded {} records ({} without a parseable date)",
        store.len(),
        store.missing_dates()
    );

    // Step 2: Resolve criteria and filter
    info!("Step 2/4: Applying filters...");
    let criteria = build_criteria(&args, &store)?;
    let view = apply(&store, &criteria);

    info!("Filtered view: {} of {} records", view.len(), store.len());

    // Step 3: Aggregate chart tables
    info!("Step 3/4: Computing chart tables...");
    let months = resolve_trend_months(&args, &view)?;
    let tables = chart_tables(&view, &months, args.top_cities);

    debug!("Top 3 categories by sales:");
    for (i, row) in tables.sales_by_category.iter().take(3).enumerate() {
        debug!("  {}. {} ({:.2})", i + 1, row.category, row.sales);
    }

    // Step 4: Assemble and write report
    info!("Step 4/4: Writing report...");
    let source = args.data.display().to_string();
    let report = build_report(&source, &criteria, &view, tables);

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    // Print text summary (if requested)
    if args.print_summary {
        println!("\n{}", render_summary(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Resolve the filter criteria from args and dataset defaults
///
/// **Private** - internal helper for execute_report
fn build_criteria(args: &ReportArgs, store: &RecordStore) -> Result<FilterCriteria> {
    let (earliest, latest) = store
        .date_bounds()
        .unwrap_or((NaiveDate::MIN, NaiveDate::MAX));

    let start = args.start_date.unwrap_or(earliest);
    let end = args.end_date.unwrap_or(latest);

    if start > end {
        anyhow::bail!("Start date {} is after end date {}", start, end);
    }

    let categories: Vec<String> = match &args.categories {
        Some(list) => list.clone(),
        None => store.distinct_categories().iter().cloned().collect(),
    };

    Ok(FilterCriteria::new(categories, start, end))
}

/// Resolve the daily-trend months from args or the view itself
///
/// **Private** - internal helper for execute_report
fn resolve_trend_months(args: &ReportArgs, view: &FilteredView) -> Result<Vec<Month>> {
    match &args.trend_months {
        Some(names) => names
            .iter()
            .map(|name| {
                Month::from_str(name)
                    .map_err(|_| anyhow::anyhow!("Unknown month name: {}", name))
            })
            .collect(),
        None => Ok(observed_trend_months(view)),
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.data.as_os_str().is_empty() {
        anyhow::bail!("Data path cannot be empty");
    }

    if let (Some(start), Some(end)) = (args.start_date, args.end_date) {
        if start > end {
            anyhow::bail!("Start date must not be after end date");
        }
    }

    if let Some(months) = &args.trend_months {
        for name in months {
            if Month::from_str(name).is_err() {
                anyhow::bail!("Unknown month name: {}", name);
            }
        }
    }

    if args.top_cities == 0 {
        anyhow::bail!("top_cities must be greater than 0");
    }

    if args.top_cities > 1000 {
        anyhow::bail!("top_cities is too large (max 1000)");
    }

    Ok(())
}

/// Quick report with defaults (convenience function)
///
/// **Public** - simplified API for common use case
///
/// # Arguments
/// * `data` - Path to the sales CSV dataset
/// * `output` - Path for the report JSON
///
/// # Returns
/// Path to the generated report
pub fn quick_report(data: &str, output: &str) -> Result<PathBuf> {
    let args = ReportArgs {
        data: PathBuf::from(data),
        output_json: PathBuf::from(output),
        ..Default::default()
    };

    execute_report(args.clone())?;

    Ok(args.output_json)
}
