//! Dataset loading and the in-memory record store.
//!
//! Loading is structural-strict, row-lenient: a missing required column
//! fails the whole load, while a malformed row is warned and skipped.
//! Dates are normalized in a single pass after loading; the store is
//! read-only from then on.

use super::record::{Fulfilment, SaleRecord, ShipServiceLevel};
use crate::utils::config::{
    COL_AMOUNT, COL_CATEGORY, COL_DATE, COL_FULFILMENT, COL_ORDER_ID, COL_SERVICE_LEVEL,
    COL_SHIP_CITY,
};
use crate::utils::error::LoadError;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Resolved positions of the required columns
///
/// **Private** - header order is free and extra columns are ignored, so
/// every access goes through these indexes.
struct Columns {
    order_id: usize,
    date: usize,
    category: usize,
    amount: usize,
    fulfilment: usize,
    service_level: usize,
    ship_city: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Self {
            order_id: position(COL_ORDER_ID)?,
            date: position(COL_DATE)?,
            category: position(COL_CATEGORY)?,
            amount: position(COL_AMOUNT)?,
            fulfilment: position(COL_FULFILMENT)?,
            service_level: position(COL_SERVICE_LEVEL)?,
            ship_city: position(COL_SHIP_CITY)?,
        })
    }
}

/// Read sale records from any CSV reader
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::Csv` - unreadable header row
/// * `LoadError::MissingColumn` - a required column is absent
/// * `LoadError::NoUsableRows` - the file had rows but every one was rejected
pub fn read_records<R: Read>(reader: R) -> Result<Vec<SaleRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    let mut rejected = 0usize;

    for (index, result) in csv_reader.records().enumerate() {
        // Header is line 1, so the first data row is line 2
        let line = index + 2;
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping unreadable row at line {}: {}", line, e);
                rejected += 1;
                continue;
            }
        };

        match parse_row(&row, &columns, line) {
            Some(record) => records.push(record),
            None => rejected += 1,
        }
    }

    if records.is_empty() && rejected > 0 {
        return Err(LoadError::NoUsableRows(rejected));
    }

    debug!("Loaded {} records ({} rejected)", records.len(), rejected);

    Ok(records)
}

/// Read sale records from a CSV file path
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>, LoadError> {
    let file = File::open(path.as_ref())?;
    read_records(BufReader::new(file))
}

/// Parse one CSV row into a record
///
/// **Private** - returns `None` for rows outside the closed enums; such
/// rows are data-quality rejects, never load failures.
fn parse_row(row: &csv::StringRecord, columns: &Columns, line: usize) -> Option<SaleRecord> {
    let fulfilment_label = row.get(columns.fulfilment).unwrap_or("");
    let Some(fulfilment) = Fulfilment::parse(fulfilment_label) else {
        warn!(
            "Skipping line {}: unknown fulfilment label {:?}",
            line, fulfilment_label
        );
        return None;
    };

    let level_label = row.get(columns.service_level).unwrap_or("");
    let Some(ship_service_level) = ShipServiceLevel::parse(level_label) else {
        warn!(
            "Skipping line {}: unknown ship-service-level label {:?}",
            line, level_label
        );
        return None;
    };

    // Missing amounts (e.g. cancelled orders) contribute 0.0 to sums while
    // the record still counts toward distinct-order tallies.
    let amount = row
        .get(columns.amount)
        .unwrap_or("")
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0);

    Some(SaleRecord {
        order_id: row.get(columns.order_id).unwrap_or("").to_string(),
        raw_date: row.get(columns.date).unwrap_or("").to_string(),
        date: None,
        month: None,
        day: None,
        category: row.get(columns.category).unwrap_or("").to_string(),
        amount,
        fulfilment,
        ship_service_level,
        ship_city: row.get(columns.ship_city).unwrap_or("").to_string(),
    })
}

/// Parse every record's raw date in a single pass
///
/// **Public** - part of the load contract
///
/// Records with unparseable dates are retained, flagged as missing, and
/// excluded from every date-bounded view. One warning summarizes the
/// total; individual rejects are logged at debug level.
pub fn normalize_dates(mut records: Vec<SaleRecord>) -> Vec<SaleRecord> {
    let mut missing = 0usize;

    for record in &mut records {
        if !record.normalize_date() {
            missing += 1;
            debug!(
                "Unparseable date {:?} on order {}",
                record.raw_date, record.order_id
            );
        }
    }

    if missing > 0 {
        warn!(
            "{} records have unparseable dates and are excluded from date-bounded views",
            missing
        );
    }

    records
}

/// The canonical dataset, read-only for the process lifetime
///
/// Distinct categories and date bounds are computed once here and seed
/// the dashboard's default filter widgets.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<SaleRecord>,
    categories: BTreeSet<String>,
    bounds: Option<(NaiveDate, NaiveDate)>,
    missing_dates: usize,
}

impl RecordStore {
    /// Load, normalize and index a dataset file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading dataset: {}", path.display());

        let records = normalize_dates(load_records(path)?);
        let store = Self::from_records(records);

        info!(
            "Dataset ready: {} records, {} categories",
            store.len(),
            store.distinct_categories().len()
        );

        Ok(store)
    }

    /// Build a store from already-normalized records
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        let categories = records.iter().map(|r| r.category.clone()).collect();

        let mut bounds: Option<(NaiveDate, NaiveDate)> = None;
        for date in records.iter().filter_map(|r| r.date) {
            bounds = Some(match bounds {
                None => (date, date),
                Some((min, max)) => (min.min(date), max.max(date)),
            });
        }

        let missing_dates = records.iter().filter(|r| !r.has_date()).count();

        Self {
            records,
            categories,
            bounds,
            missing_dates,
        }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category labels, sorted
    pub fn distinct_categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Min and max parsed date, `None` when no record carries one
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.bounds
    }

    /// Records whose date failed to parse
    pub fn missing_dates(&self) -> usize {
        self.missing_dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Order ID,Date,Status,Fulfilment,ship-service-level,Category,Amount,ship-city
405-0000000-0000001,04-30-22,Shipped,Merchant,Standard,Shirts,647.62,MUMBAI
405-0000000-0000002,04-30-22,Shipped,Amazon,Expedited,T-Shirts,406.00,BENGALURU
405-0000000-0000003,05-01-22,Cancelled,Amazon,Expedited,Shirts,,CHENNAI
405-0000000-0000004,junk,Shipped,Merchant,Standard,Watches,5000.00,HYDERABAD
";

    #[test]
    fn test_read_records_sample() {
        let records = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].order_id, "405-0000000-0000001");
        assert_eq!(records[0].category, "Shirts");
        assert_eq!(records[0].fulfilment, Fulfilment::Merchant);
        assert_eq!(records[1].ship_service_level, ShipServiceLevel::Expedited);
        assert_eq!(records[1].ship_city, "BENGALURU");
        // Dates are not parsed until normalize_dates runs
        assert!(records.iter().all(|r| r.date.is_none()));
    }

    #[test]
    fn test_missing_amount_loads_as_zero() {
        let records = read_records(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(records[2].amount, 0.0);
        assert_eq!(records[2].order_id, "405-0000000-0000003");
    }

    #[test]
    fn test_missing_column() {
        let csv = "Order ID,Date,Category,Amount,Fulfilment,ship-service-level\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, "ship-city"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_enum_label_skips_row() {
        let csv = "\
Order ID,Date,Category,Amount,Fulfilment,ship-service-level,ship-city
a,04-30-22,Shirts,10.0,Courier,Standard,MUMBAI
b,04-30-22,Shirts,20.0,Amazon,Standard,MUMBAI
";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_id, "b");
    }

    #[test]
    fn test_all_rows_rejected() {
        let csv = "\
Order ID,Date,Category,Amount,Fulfilment,ship-service-level,ship-city
a,04-30-22,Shirts,10.0,Courier,Standard,MUMBAI
";
        let err = read_records(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::NoUsableRows(rejected) => assert_eq!(rejected, 1),
            other => panic!("expected NoUsableRows, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let csv = "Order ID,Date,Category,Amount,Fulfilment,ship-service-level,ship-city\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_store_indexes() {
        let records = normalize_dates(read_records(SAMPLE_CSV.as_bytes()).unwrap());
        let store = RecordStore::from_records(records);

        let categories: Vec<&str> = store
            .distinct_categories()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(categories, vec!["Shirts", "T-Shirts", "Watches"]);

        let (min, max) = store.date_bounds().unwrap();
        assert_eq!(min, NaiveDate::from_ymd_opt(2022, 4, 30).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2022, 5, 1).unwrap());

        // The "junk" date row is retained but flagged
        assert_eq!(store.len(), 4);
        assert_eq!(store.missing_dates(), 1);
    }

    #[test]
    fn test_bounds_empty_without_dates() {
        let store = RecordStore::from_records(Vec::new());
        assert!(store.date_bounds().is_none());
        assert!(store.is_empty());
    }
}
