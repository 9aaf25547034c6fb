//! Reports module for the money tracker
//!
//! Pure views over the ledger: the month-filtered register with its balance,
//! and expense totals by category.

pub mod category;
pub mod register;

pub use category::{expense_by_category, CategoryReport};
pub use register::{balance, filter_by_month, filtered_rows, DisplayRow, RegisterReport};
