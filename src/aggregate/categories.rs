//! Category-level aggregations.

use crate::filter::FilteredView;
use crate::report::schema::{CategoryOrders, CategorySales};
use std::collections::{HashMap, HashSet};

/// Count distinct order ids per category, busiest category first
///
/// An order spanning several categories is counted once in each of
/// them, so the column may sum to more than the distinct order total.
/// Ties are broken by category name ascending to keep output stable.
///
/// **Public** - feeds the orders-per-category chart
pub fn orders_by_category(view: &FilteredView) -> Vec<CategoryOrders> {
    let mut orders: HashMap<&str, HashSet<&str>> = HashMap::new();

    for record in view.iter() {
        orders
            .entry(record.category.as_str())
            .or_default()
            .insert(record.order_id.as_str());
    }

    let mut rows: Vec<CategoryOrders> = orders
        .into_iter()
        .map(|(category, ids)| CategoryOrders {
            category: category.to_string(),
            orders: ids.len() as u64,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.orders
            .cmp(&a.orders)
            .then_with(|| a.category.cmp(&b.category))
    });

    rows
}

/// Sum sales per category, highest revenue first
///
/// **Public** - feeds the revenue-per-category chart
pub fn sales_by_category(view: &FilteredView) -> Vec<CategorySales> {
    let mut sales: HashMap<&str, f64> = HashMap::new();

    for record in view.iter() {
        *sales.entry(record.category.as_str()).or_insert(0.0) += record.amount;
    }

    let mut rows: Vec<CategorySales> = sales
        .into_iter()
        .map(|(category, total)| CategorySales {
            category: category.to_string(),
            sales: total,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.sales
            .total_cmp(&a.sales)
            .then_with(|| a.category.cmp(&b.category))
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply, FilterCriteria};
    use crate::store::{RecordStore, SaleRecord};
    use chrono::NaiveDate;

    fn record(order_id: &str, category: &str, amount: f64) -> SaleRecord {
        let mut r = SaleRecord {
            order_id: order_id.to_string(),
            raw_date: "04-15-22".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 4, 15),
            month: None,
            day: None,
            category: category.to_string(),
            amount,
            fulfilment: crate::store::Fulfilment::Amazon,
            ship_service_level: crate::store::ShipServiceLevel::Expedited,
            ship_city: "MUMBAI".to_string(),
        };
        r.normalize_date();
        r
    }

    fn view_of(records: Vec<SaleRecord>) -> (RecordStore, FilterCriteria) {
        let store = RecordStore::from_records(records);
        let criteria = FilterCriteria::select_all(&store);
        (store, criteria)
    }

    #[test]
    fn test_orders_counted_distinct_per_category() {
        let (store, criteria) = view_of(vec![
            record("A1", "Shirts", 100.0),
            record("A1", "Shirts", 150.0),
            record("A2", "Shirts", 200.0),
            record("A3", "Watches", 5000.0),
        ]);
        let view = apply(&store, &criteria);

        let rows = orders_by_category(&view);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Shirts");
        assert_eq!(rows[0].orders, 2);
        assert_eq!(rows[1].category, "Watches");
        assert_eq!(rows[1].orders, 1);
    }

    #[test]
    fn test_order_spanning_categories_counted_in_each() {
        let (store, criteria) = view_of(vec![
            record("A1", "Shirts", 100.0),
            record("A1", "Watches", 5000.0),
        ]);
        let view = apply(&store, &criteria);

        let rows = orders_by_category(&view);
        let total: u64 = rows.iter().map(|r| r.orders).sum();
        assert_eq!(total, 2);
        assert_eq!(view.distinct_orders(), 1);
    }

    #[test]
    fn test_sales_sorted_descending_with_name_tiebreak() {
        let (store, criteria) = view_of(vec![
            record("A1", "Shirts", 100.0),
            record("A2", "Watches", 5000.0),
            record("A3", "Belts", 100.0),
        ]);
        let view = apply(&store, &criteria);

        let rows = sales_by_category(&view);
        assert_eq!(rows[0].category, "Watches");
        assert_eq!(rows[0].sales, 5000.0);
        // Belts and Shirts tie at 100.0; name ascending breaks the tie
        assert_eq!(rows[1].category, "Belts");
        assert_eq!(rows[2].category, "Shirts");
    }

    #[test]
    fn test_empty_view_yields_empty_tables() {
        let (store, _) = view_of(vec![record("A1", "Shirts", 100.0)]);
        let criteria = FilterCriteria::new(
            Vec::<String>::new(),
            NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2022, 4, 30).unwrap(),
        );
        let view = apply(&store, &criteria);

        assert!(orders_by_category(&view).is_empty());
        assert!(sales_by_category(&view).is_empty());
    }
}
