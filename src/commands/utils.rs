use crate::report::read_report;
use crate::utils::config::{REQUIRED_COLUMNS, SCHEMA_VERSION};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!(
        "  Filters: {} categories, {} to {}",
        report.filters.categories.len(),
        report.filters.start_date,
        report.filters.end_date
    );
    println!("  Rows: {}", report.row_count);
    println!("  Total Sales: {:.2}", report.total_sales);
    println!("  Total Orders: {}", report.total_orders);
    println!("  Category Rows: {}", report.sales_by_category.len());
    println!("  Monthly Points: {}", report.monthly_sales.len());
    println!("  Daily Points: {}", report.daily_sales.len());
    println!("  Cities: {}", report.top_cities.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Salesdash Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  source: string             - Dataset the report was computed from");
        println!("  filters: object            - Echo of the applied criteria");
        println!("    categories: array        - Selected categories, sorted");
        println!("    start_date: string       - Inclusive interval start (ISO date)");
        println!("    end_date: string         - Inclusive interval end (ISO date)");
        println!("  row_count: number          - Records in the filtered view");
        println!("  total_sales: number        - Sum of amounts (INR)");
        println!("  total_orders: number       - Distinct order ids");
        println!("  orders_by_category: array  - Distinct orders per category, busiest first");
        println!("  sales_by_category: array   - Revenue per category, highest first");
        println!("  monthly_sales: array       - Revenue per observed month, calendar order");
        println!("  daily_sales: array         - Per-day revenue points; null sales = gap");
        println!("  sales_by_fulfilment: array - Revenue split by shipping channel");
        println!("  sales_by_service_level: array - Revenue split by delivery tier");
        println!("  top_cities: array          - Highest-revenue cities, truncated");
        println!("  sample: array              - First rows of the filtered view");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!();
        println!("Required input columns:");
        for column in REQUIRED_COLUMNS {
            println!("  {}", column);
        }
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Salesdash v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("A filtering and aggregation pipeline for e-commerce sales dashboards.");
    println!("https://github.com/your-org/salesdash");
}
