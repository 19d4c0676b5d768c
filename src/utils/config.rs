//! Configuration and constants for the pipeline and CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Currency label carried by the dataset amounts
pub const CURRENCY: &str = "INR";

// Required dataset columns. Header positions are free and extra columns are
// ignored; headers are compared after whitespace trimming because real
// exports occasionally pad them.
pub const COL_ORDER_ID: &str = "Order ID";
pub const COL_DATE: &str = "Date";
pub const COL_CATEGORY: &str = "Category";
pub const COL_AMOUNT: &str = "Amount";
pub const COL_FULFILMENT: &str = "Fulfilment";
pub const COL_SERVICE_LEVEL: &str = "ship-service-level";
pub const COL_SHIP_CITY: &str = "ship-city";

/// All required columns, in the order they are reported when missing
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_ORDER_ID,
    COL_DATE,
    COL_CATEGORY,
    COL_AMOUNT,
    COL_FULFILMENT,
    COL_SERVICE_LEVEL,
    COL_SHIP_CITY,
];

// Accepted date formats, tried in order. The source export writes
// "MM-DD-YY"; the rest are common variants of the same locale plus ISO.
pub const DATE_FORMATS: &[&str] = &[
    "%m-%d-%y",
    "%m/%d/%y",
    "%m-%d-%Y",
    "%m/%d/%Y",
    "%Y-%m-%d",
];

/// Uniform day axis for the daily trend: days 1..=30, so a 31st never
/// renders as a month-end cliff
pub const TREND_DAY_SPAN: u32 = 30;

/// How many observed months seed the default daily-trend series
pub const TREND_MONTH_SPAN: usize = 3;

/// Default number of cities in the top-cities table
pub const DEFAULT_TOP_CITIES: usize = 10;

/// Filtered-view rows echoed in the report for the dataset-example widget
pub const SAMPLE_ROWS: usize = 5;
