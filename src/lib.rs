//! Salesdash
//!
//! Filtering and aggregation pipeline for an e-commerce sales
//! analytics dashboard.
//!
//! This crate provides the core implementation for the
//! `salesdash` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install salesdash-core
//! salesdash --help
//! ```
//!
//! The pipeline has four stages: load a CSV export into a
//! [`store::RecordStore`], select records with [`filter::apply`],
//! compute chart tables with [`aggregate::chart_tables`], and persist
//! the result with [`report::write_report`].

pub mod aggregate;
pub mod commands;
pub mod filter;
pub mod report;
pub mod store;
pub mod utils;
