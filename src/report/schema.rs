//! Report JSON schema definitions.
//!
//! This module defines the structure of the file handed to the
//! presentation layer: one ordered table per chart plus the envelope.
//! Schema is versioned to allow future evolution.

use crate::filter::{FilterCriteria, FilteredView};
use crate::store::{Fulfilment, ShipServiceLevel};
use crate::utils::config::{SAMPLE_ROWS, SCHEMA_VERSION};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset the report was computed from
    pub source: String,

    /// Echo of the applied filter criteria
    pub filters: FilterSummary,

    /// Records in the filtered view
    pub row_count: u64,

    /// Sum of amount over the filtered view (INR)
    pub total_sales: f64,

    /// Distinct order ids over the filtered view
    pub total_orders: u64,

    /// Order counts per category, busiest first
    pub orders_by_category: Vec<CategoryOrders>,

    /// Revenue per category, highest first
    pub sales_by_category: Vec<CategorySales>,

    /// Revenue per observed month, calendar order
    pub monthly_sales: Vec<MonthlySales>,

    /// Day-by-day revenue series per requested month; gaps are null
    pub daily_sales: Vec<DailySales>,

    /// Revenue split by who ships the order
    pub sales_by_fulfilment: Vec<FulfilmentSales>,

    /// Revenue split by delivery speed tier
    pub sales_by_service_level: Vec<ServiceLevelSales>,

    /// Highest-revenue destination cities, truncated
    pub top_cities: Vec<CitySales>,

    /// First rows of the filtered view, for the dataset-example widget
    pub sample: Vec<SampleRow>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Echo of the criteria a report was filtered with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSummary {
    /// Selected categories, sorted
    pub categories: Vec<String>,

    /// Inclusive start of the date interval
    pub start_date: NaiveDate,

    /// Inclusive end of the date interval
    pub end_date: NaiveDate,
}

/// One row of the orders-by-category table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOrders {
    pub category: String,

    /// Count of distinct order ids in the category
    pub orders: u64,
}

/// One row of the sales-by-category table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub sales: f64,
}

/// One row of the monthly trend table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySales {
    /// Full month name, e.g. "April"
    pub month: String,
    pub sales: f64,
}

/// One point of the daily trend series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySales {
    /// Day of month on the uniform 1..=30 axis
    pub day: u32,

    /// Full month name the point belongs to
    pub month: String,

    /// `None` marks a day with no observed rows - a gap, not a zero
    pub sales: Option<f64>,
}

/// One row of the fulfilment mix table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfilmentSales {
    pub fulfilment: Fulfilment,
    pub sales: f64,
}

/// One row of the ship-service-level mix table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLevelSales {
    pub ship_service_level: ShipServiceLevel,
    pub sales: f64,
}

/// One row of the top-cities table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySales {
    pub city: String,
    pub sales: f64,
}

/// One echoed record of the filtered view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRow {
    pub order_id: String,
    pub date: Option<NaiveDate>,
    pub category: String,
    pub amount: f64,
    pub fulfilment: Fulfilment,
    pub ship_service_level: ShipServiceLevel,
    pub ship_city: String,
}

/// The chart tables computed by the aggregation stage
///
/// Carrier between the aggregation fan-out and report assembly; the
/// report embeds the tables flat.
#[derive(Debug, Clone, Default)]
pub struct ChartTables {
    pub orders_by_category: Vec<CategoryOrders>,
    pub sales_by_category: Vec<CategorySales>,
    pub monthly_sales: Vec<MonthlySales>,
    pub daily_sales: Vec<DailySales>,
    pub sales_by_fulfilment: Vec<FulfilmentSales>,
    pub sales_by_service_level: Vec<ServiceLevelSales>,
    pub top_cities: Vec<CitySales>,
}

/// Assemble the final report envelope
///
/// **Public** - used by commands to create the hand-off artifact
pub fn build_report(
    source: &str,
    criteria: &FilterCriteria,
    view: &FilteredView,
    tables: ChartTables,
) -> Report {
    use chrono::Utc;

    let (start_date, end_date) = criteria.date_range();

    let sample = view
        .iter()
        .take(SAMPLE_ROWS)
        .map(|r| SampleRow {
            order_id: r.order_id.clone(),
            date: r.date,
            category: r.category.clone(),
            amount: r.amount,
            fulfilment: r.fulfilment,
            ship_service_level: r.ship_service_level,
            ship_city: r.ship_city.clone(),
        })
        .collect();

    Report {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        filters: FilterSummary {
            categories: criteria.categories().iter().cloned().collect(),
            start_date,
            end_date,
        },
        row_count: view.len() as u64,
        total_sales: view.total_sales(),
        total_orders: view.distinct_orders() as u64,
        orders_by_category: tables.orders_by_category,
        sales_by_category: tables.sales_by_category,
        monthly_sales: tables.monthly_sales,
        daily_sales: tables.daily_sales,
        sales_by_fulfilment: tables.sales_by_fulfilment,
        sales_by_service_level: tables.sales_by_service_level,
        top_cities: tables.top_cities,
        sample,
        generated_at: Utc::now().to_rfc3339(),
    }
}
