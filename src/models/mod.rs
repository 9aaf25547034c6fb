//! Core data models for the money tracker
//!
//! Transactions, the money amount type, and the month filter used by the
//! views.

pub mod money;
pub mod month;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use month::{MonthFilter, ALL_MONTHS, MONTH_OPTIONS};
pub use transaction::{Transaction, TransactionKind, STORED_DATE_FORMAT};

/// Categories offered by the shell; any other label is accepted too
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Bills",
    "Shopping",
    "Salary",
    "Other",
    "Mess",
    "Room rent",
];
