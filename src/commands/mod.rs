//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use inspect::execute_inspect;
pub use report::{execute_report, quick_report, validate_args, ReportArgs};
pub use utils::{display_schema, display_version, validate_report_file};
