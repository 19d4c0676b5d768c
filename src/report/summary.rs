//! Plain-text report summary for terminal output.

use crate::report::schema::Report;
use crate::utils::config::CURRENCY;

const RULE_WIDTH: usize = 72;

/// Render a report as a human-readable text summary
///
/// Shows the KPIs and the head of the biggest tables; the JSON file
/// remains the complete artifact.
///
/// **Public** - used by the report command's `--summary` flag
pub fn render_summary(report: &Report) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(RULE_WIDTH));
    lines.push("SALES REPORT SUMMARY".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("Source:       {}", report.source));
    lines.push(format!(
        "Date range:   {} to {}",
        report.filters.start_date, report.filters.end_date
    ));
    lines.push(format!(
        "Categories:   {}",
        if report.filters.categories.is_empty() {
            "(none)".to_string()
        } else {
            report.filters.categories.join(", ")
        }
    ));
    lines.push(format!("Rows:         {}", report.row_count));
    lines.push(format!("Total orders: {}", report.total_orders));
    lines.push(format!(
        "Total sales:  {} {:.2}",
        CURRENCY, report.total_sales
    ));

    if !report.sales_by_category.is_empty() {
        lines.push(String::new());
        lines.push("TOP CATEGORIES BY SALES".to_string());
        for row in report.sales_by_category.iter().take(5) {
            lines.push(format!("  {:<28} {:>14.2}", row.category, row.sales));
        }
    }

    if !report.monthly_sales.is_empty() {
        lines.push(String::new());
        lines.push("MONTHLY SALES".to_string());
        for row in &report.monthly_sales {
            lines.push(format!("  {:<28} {:>14.2}", row.month, row.sales));
        }
    }

    if !report.top_cities.is_empty() {
        lines.push(String::new());
        lines.push("TOP CITIES BY SALES".to_string());
        for row in report.top_cities.iter().take(5) {
            lines.push(format!("  {:<28} {:>14.2}", row.city, row.sales));
        }
    }

    lines.push("=".repeat(RULE_WIDTH));

    lines.join("\n")
}
