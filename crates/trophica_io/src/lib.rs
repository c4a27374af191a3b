//! # Trophica IO
//!
//! File formats for the trophica simulation:
//! - the per-tick population table as CSV
//! - plain-text stability reports
//! - the end-of-run JSON summary

/// Error types and result aliases for I/O operations
pub mod error;
/// Stability report rendering and export
pub mod report;
/// Run summary JSON and console table
pub mod summary;
/// Population table CSV codec
pub mod table;

pub use error::{IoError, Result};
pub use report::{render_report, report_path, write_report};
pub use summary::RunSummary;
pub use table::{read_table, write_table};
