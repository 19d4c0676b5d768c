//! Time-axis aggregations: monthly totals and per-day series.

use crate::filter::FilteredView;
use crate::report::schema::{DailySales, MonthlySales};
use crate::utils::config::{TREND_DAY_SPAN, TREND_MONTH_SPAN};
use chrono::Month;
use std::collections::HashMap;

/// Sum sales per observed month, in calendar order
///
/// Records without a parseable date carry no month and are skipped.
///
/// **Public** - feeds the monthly trend chart
pub fn monthly_sales_trend(view: &FilteredView) -> Vec<MonthlySales> {
    let mut sales: HashMap<Month, f64> = HashMap::new();

    for record in view.iter() {
        let Some(month) = record.month else {
            continue;
        };
        *sales.entry(month).or_insert(0.0) += record.amount;
    }

    let mut rows: Vec<(Month, f64)> = sales.into_iter().collect();
    rows.sort_by_key(|(month, _)| month.number_from_month());

    rows.into_iter()
        .map(|(month, total)| MonthlySales {
            month: month.name().to_string(),
            sales: total,
        })
        .collect()
}

/// Months to plot in the daily series when the caller names none
///
/// Takes the most recent `TREND_MONTH_SPAN` months observed in the
/// view, returned in calendar order.
///
/// **Public** - used by commands to default the trend window
pub fn observed_trend_months(view: &FilteredView) -> Vec<Month> {
    let mut months: Vec<Month> = view.iter().filter_map(|r| r.month).collect();
    months.sort_by_key(|m| m.number_from_month());
    months.dedup_by_key(|m| m.number_from_month());

    let skip = months.len().saturating_sub(TREND_MONTH_SPAN);
    months.split_off(skip)
}

/// Build the day-by-day series for the requested months
///
/// The day axis is uniform 1..=`TREND_DAY_SPAN` for every month so the
/// series overlay cleanly; day-31 amounts fall outside the axis. Days
/// with no observed rows yield `None` - a gap in the chart, not a
/// zero. Requested months are deduplicated and plotted in calendar
/// order. An empty view or empty month list yields an empty table.
///
/// **Public** - feeds the daily trend chart
pub fn daily_sales_trend(view: &FilteredView, months: &[Month]) -> Vec<DailySales> {
    if view.is_empty() || months.is_empty() {
        return Vec::new();
    }

    let mut requested: Vec<Month> = months.to_vec();
    requested.sort_by_key(|m| m.number_from_month());
    requested.dedup_by_key(|m| m.number_from_month());

    let mut sales: HashMap<(u32, u32), f64> = HashMap::new();
    for record in view.iter() {
        let (Some(month), Some(day)) = (record.month, record.day) else {
            continue;
        };
        if day > TREND_DAY_SPAN {
            continue;
        }
        *sales
            .entry((month.number_from_month(), day))
            .or_insert(0.0) += record.amount;
    }

    let mut rows = Vec::with_capacity(requested.len() * TREND_DAY_SPAN as usize);
    for month in requested {
        for day in 1..=TREND_DAY_SPAN {
            rows.push(DailySales {
                day,
                month: month.name().to_string(),
                sales: sales.get(&(month.number_from_month(), day)).copied(),
            });
        }
    }

    rows
}
