//! Business logic layer
//!
//! The ledger owns the session's transactions and their store; the tracker
//! turns raw shell input into transactions and serves the views.

pub mod ledger;
pub mod tracker;

pub use ledger::Ledger;
pub use tracker::Tracker;
