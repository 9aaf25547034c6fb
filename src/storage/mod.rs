//! Storage layer for the money tracker
//!
//! Transactions persist as one text line each in an append-only file. The
//! ledger only sees the [`TransactionStore`] trait, so tests can swap in the
//! in-memory store.

pub mod flat_file;
pub mod memory;

pub use flat_file::FlatFileStore;
pub use memory::MemoryStore;

use crate::error::TrackerResult;
use crate::models::Transaction;

/// Append-only persistence for transactions
pub trait TransactionStore {
    /// Read every stored transaction in stored order, skipping lines that
    /// do not parse. A store that does not exist yet is empty.
    fn load_all(&self) -> TrackerResult<Vec<Transaction>>;

    /// Append one transaction to the end of the store, creating it if absent
    fn append(&mut self, txn: &Transaction) -> TrackerResult<()>;
}

