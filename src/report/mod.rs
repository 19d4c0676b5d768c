//! Report stage: schema, JSON persistence, and text rendering.

pub mod json;
pub mod schema;
pub mod summary;

pub use json::{read_report, write_report};
pub use schema::{build_report, ChartTables, FilterSummary, Report};
pub use summary::render_summary;
