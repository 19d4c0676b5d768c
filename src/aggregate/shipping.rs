//! Shipping-dimension aggregations: fulfilment, service level, cities.

use crate::filter::FilteredView;
use crate::report::schema::{CitySales, FulfilmentSales, ServiceLevelSales};
use crate::store::{Fulfilment, ShipServiceLevel};
use std::collections::HashMap;

/// Sum sales per fulfilment channel
///
/// Rows come out in the fixed channel order; channels absent from the
/// view are omitted rather than reported as zero.
///
/// **Public** - feeds the fulfilment mix chart
pub fn sales_by_fulfilment(view: &FilteredView) -> Vec<FulfilmentSales> {
    let mut sales: HashMap<Fulfilment, f64> = HashMap::new();

    for record in view.iter() {
        *sales.entry(record.fulfilment).or_insert(0.0) += record.amount;
    }

    Fulfilment::ALL
        .iter()
        .filter_map(|fulfilment| {
            sales.get(fulfilment).map(|total| FulfilmentSales {
                fulfilment: *fulfilment,
                sales: *total,
            })
        })
        .collect()
}

/// Sum sales per ship service level
///
/// Same shape as [`sales_by_fulfilment`]: fixed tier order, absent
/// tiers omitted.
///
/// **Public** - feeds the service level mix chart
pub fn sales_by_service_level(view: &FilteredView) -> Vec<ServiceLevelSales> {
    let mut sales: HashMap<ShipServiceLevel, f64> = HashMap::new();

    for record in view.iter() {
        *sales.entry(record.ship_service_level).or_insert(0.0) += record.amount;
    }

    ShipServiceLevel::ALL
        .iter()
        .filter_map(|level| {
            sales.get(level).map(|total| ServiceLevelSales {
                ship_service_level: *level,
                sales: *total,
            })
        })
        .collect()
}

/// Rank destination cities by revenue and keep the top `limit`
///
/// City names are aggregated exactly as they appear in the data; ties
/// are broken by city name ascending.
///
/// **Public** - feeds the top-cities chart
pub fn top_cities_by_sales(view: &FilteredView, limit: usize) -> Vec<CitySales> {
    let mut sales: HashMap<&str, f64> = HashMap::new();

    for record in view.iter() {
        *sales.entry(record.ship_city.as_str()).or_insert(0.0) += record.amount;
    }

    let mut rows: Vec<CitySales> = sales
        .into_iter()
        .map(|(city, total)| CitySales {
            city: city.to_string(),
            sales: total,
        })
        .collect();

    rows.sort_by(|a, b| b.sales.total_cmp(&a.sales).then_with(|| a.city.cmp(&b.city)));
    rows.truncate(limit);

    rows
}
