//! Filter stage: user-selected criteria applied to the record store.
//!
//! `apply` is a pure function over the immutable store. Criteria are
//! re-created on every interaction and never mutated afterwards, so
//! concurrent evaluations can share one store snapshot without locking.

use crate::store::{RecordStore, SaleRecord};
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeSet;

/// One interaction's filter selection: category set + closed date interval
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    categories: BTreeSet<String>,
    start: NaiveDate,
    end: NaiveDate,
}

impl FilterCriteria {
    /// Build criteria from an explicit category selection and `[start, end]`
    ///
    /// An empty category set is honored as-is: it selects nothing. An
    /// inverted interval also selects nothing; neither is an error.
    pub fn new(
        categories: impl IntoIterator<Item = String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            start,
            end,
        }
    }

    /// The dashboard default: every category, full date bounds
    ///
    /// A store without a single parseable date has no bounds; the widest
    /// possible interval is used, which still matches no undated record.
    pub fn select_all(store: &RecordStore) -> Self {
        let (start, end) = store
            .date_bounds()
            .unwrap_or((NaiveDate::MIN, NaiveDate::MAX));

        Self::new(store.distinct_categories().iter().cloned(), start, end)
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// True iff the record's category is selected and its normalized date
    /// lies within the inclusive interval
    ///
    /// Records with a missing date never pass a date-bounded filter.
    pub fn matches(&self, record: &SaleRecord) -> bool {
        if !self.categories.contains(record.category.as_str()) {
            return false;
        }

        record
            .date
            .is_some_and(|d| self.start <= d && d <= self.end)
    }
}

/// The records currently in scope, borrowed from the store
///
/// Derived, never persisted; recomputed on every filter change. Every
/// record in a view produced by `apply` carries a parsed date.
#[derive(Debug)]
pub struct FilteredView<'a> {
    records: Vec<&'a SaleRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a SaleRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SaleRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `amount` over the view
    pub fn total_sales(&self) -> f64 {
        self.iter().map(|r| r.amount).sum()
    }

    /// Number of distinct order ids over the view
    pub fn distinct_orders(&self) -> usize {
        let orders: BTreeSet<&str> = self.iter().map(|r| r.order_id.as_str()).collect();
        orders.len()
    }
}

/// Apply filter criteria to the store
///
/// **Public** - the single entry point of the filter stage
///
/// Pure: identical inputs always produce an equivalent view, and the
/// store is never mutated.
pub fn apply<'a>(store: &'a RecordStore, criteria: &FilterCriteria) -> FilteredView<'a> {
    let records: Vec<&SaleRecord> = store
        .records()
        .iter()
        .filter(|r| criteria.matches(r))
        .collect();

    debug!(
        "Filter kept {} of {} records ({} categories, {} to {})",
        records.len(),
        store.len(),
        criteria.categories.len(),
        criteria.start,
        criteria.end,
    );

    FilteredView { records }
}
