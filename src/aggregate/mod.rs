//! Aggregation stage: turns a filtered view into the chart tables.
//!
//! Every function here is pure - it reads the view and produces an
//! ordered table, leaving the underlying records untouched.

pub mod categories;
pub mod shipping;
pub mod trends;

pub use categories::{orders_by_category, sales_by_category};
pub use shipping::{sales_by_fulfilment, sales_by_service_level, top_cities_by_sales};
pub use trends::{daily_sales_trend, monthly_sales_trend, observed_trend_months};

use crate::filter::FilteredView;
use crate::report::schema::ChartTables;
use chrono::Month;
use log::debug;

/// Compute the full set of chart tables for a view
///
/// **Public** - the fan-out used by report generation
pub fn chart_tables(view: &FilteredView, trend_months: &[Month], top_cities: usize) -> ChartTables {
    debug!(
        "Aggregating {} records across {} trend months",
        view.len(),
        trend_months.len()
    );

    ChartTables {
        orders_by_category: orders_by_category(view),
        sales_by_category: sales_by_category(view),
        monthly_sales: monthly_sales_trend(view),
        daily_sales: daily_sales_trend(view, trend_months),
        sales_by_fulfilment: sales_by_fulfilment(view),
        sales_by_service_level: sales_by_service_level(view),
        top_cities: top_cities_by_sales(view, top_cities),
    }
}
