//! Export module for the money tracker
//!
//! Writes the displayed register rows to CSV.

pub mod csv;

pub use self::csv::export_rows_csv;
