//! Sale record model and per-record date normalization.
//!
//! A record is one line item of the dataset. One order id may appear on
//! several records (multi-item orders), so order counts are always
//! distinct counts.

use crate::utils::config::DATE_FORMATS;
use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Who physically ships the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fulfilment {
    Merchant,
    Amazon,
}

impl Fulfilment {
    /// Fixed presentation order for the fulfilment mix chart
    pub const ALL: [Fulfilment; 2] = [Fulfilment::Merchant, Fulfilment::Amazon];

    /// Map a dataset label to a variant
    ///
    /// Returns `None` for labels outside the closed enum; the loader
    /// rejects such rows record-by-record.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("merchant") {
            Some(Self::Merchant)
        } else if label.eq_ignore_ascii_case("amazon") {
            Some(Self::Amazon)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merchant => "Merchant",
            Self::Amazon => "Amazon",
        }
    }
}

/// Delivery speed tier selected by the buyer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipServiceLevel {
    Standard,
    Expedited,
}

impl ShipServiceLevel {
    /// Fixed presentation order for the service-level mix chart
    pub const ALL: [ShipServiceLevel; 2] =
        [ShipServiceLevel::Standard, ShipServiceLevel::Expedited];

    /// Map a dataset label to a variant
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("standard") {
            Some(Self::Standard)
        } else if label.eq_ignore_ascii_case("expedited") {
            Some(Self::Expedited)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Expedited => "Expedited",
        }
    }
}

/// One row of the dataset
///
/// `date`, `month` and `day` start empty and are filled exactly once by
/// `normalize_dates`; no later stage re-derives them. A record whose raw
/// date cannot be parsed keeps `date = None` ("missing") and is excluded
/// from every date-bounded view.
#[derive(Debug, Clone)]
pub struct SaleRecord {
    pub order_id: String,
    /// Date text as loaded, kept for diagnostics
    pub raw_date: String,
    pub date: Option<NaiveDate>,
    pub month: Option<Month>,
    pub day: Option<u32>,
    pub category: String,
    /// Monetary value in INR; missing amounts load as 0.0
    pub amount: f64,
    pub fulfilment: Fulfilment,
    pub ship_service_level: ShipServiceLevel,
    pub ship_city: String,
}

impl SaleRecord {
    /// Parse `raw_date` and fill the derived calendar fields
    ///
    /// Returns false when the raw text matches none of the accepted
    /// formats; the record is retained but flagged as having a missing
    /// date.
    pub fn normalize_date(&mut self) -> bool {
        match parse_record_date(&self.raw_date) {
            Some(date) => {
                self.date = Some(date);
                self.month = Month::try_from(date.month() as u8).ok();
                self.day = Some(date.day());
                true
            }
            None => {
                self.date = None;
                self.month = None;
                self.day = None;
                false
            }
        }
    }

    /// True once `normalize_date` succeeded for this record
    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }
}

/// Try the accepted date formats in order; first match wins
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
