//! Record store: dataset loading, date normalization, load-time indexes.
//!
//! This module handles:
//! - Parsing the delimited dataset into sale records
//! - Normalizing date fields once at load
//! - Distinct categories and date bounds for seeding default filters

pub mod loader;
pub mod record;

// Re-export main types
pub use loader::{load_records, normalize_dates, read_records, RecordStore};
pub use record::{parse_record_date, Fulfilment, SaleRecord, ShipServiceLevel};
