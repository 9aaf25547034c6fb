//! money-tracker - personal income and expense tracking
//!
//! Records income and expense transactions in a plain text file, one
//! comma-separated line per transaction, and derives the views a front end
//! needs: a month-filtered table, its balance, and expense totals by category.
//!
//! # Architecture
//!
//! - `config`: Data directory and settings
//! - `error`: Custom error types
//! - `models`: Money, transactions and the month filter
//! - `storage`: The append-only flat-file store
//! - `services`: The ledger and the tracker service used by the shell
//! - `reports`: Register rows, balance and category totals
//! - `export`: CSV export of register rows
//! - `cli`: Command handlers for the `money-tracker` binary
//!
//! # Example
//!
//! ```rust
//! use money_tracker::config::Settings;
//! use money_tracker::models::{MonthFilter, TransactionKind};
//! use money_tracker::services::{Ledger, Tracker};
//! use money_tracker::storage::MemoryStore;
//!
//! let mut tracker = Tracker::new(Ledger::new(MemoryStore::new()), Settings::default());
//! tracker.add_transaction(TransactionKind::Income, "1000", "Salary", "pay")?;
//! tracker.add_transaction(TransactionKind::Expense, "200.50", "Food", "lunch")?;
//!
//! assert_eq!(tracker.balance(MonthFilter::All).to_string(), "799.50");
//! # Ok::<(), money_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
