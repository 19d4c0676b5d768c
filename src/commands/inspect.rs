//! Inspect command implementation.
//!
//! Loads a dataset and prints what a filter picker would offer:
//! record counts, distinct categories, and the observed date range.

use crate::store::RecordStore;
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `data` - Path to the sales CSV dataset
///
/// # Returns
/// Ok after printing the dataset overview
pub fn execute_inspect(data: &Path) -> Result<()> {
    info!("Inspecting dataset: {}", data.display());

    let store = RecordStore::open(data)
        .with_context(|| format!("Failed to load dataset {}", data.display()))?;

    println!("Dataset: {}", data.display());
    println!("  Records: {}", store.len());
    println!("  Without parseable date: {}", store.missing_dates());

    match store.date_bounds() {
        Some((earliest, latest)) => println!("  Date range: {} to {}", earliest, latest),
        None => println!("  Date range: (no parseable dates)"),
    }

    println!("  Categories ({}):", store.distinct_categories().len());
    for category in store.distinct_categories() {
        println!("    {}", category);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Order ID,Date,Category,Amount,Fulfilment,ship-service-level,ship-city
405-1,04-30-22,Shirts,459.0,Merchant,Standard,MUMBAI
405-2,05-01-22,Watches,5000.0,Amazon,Expedited,DELHI
";

    #[test]
    fn test_inspect_valid_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        assert!(execute_inspect(file.path()).is_ok());
    }

    #[test]
    fn test_inspect_missing_file() {
        let result = execute_inspect(Path::new("/nonexistent/sales.csv"));
        assert!(result.is_err());
    }
}
