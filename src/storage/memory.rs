//! In-memory transaction store
//!
//! Keeps stored lines in a `Vec<String>` so the ledger can be exercised
//! without touching the filesystem. Writes can be made to fail on demand.

use super::TransactionStore;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lines: Vec<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing raw lines, as if read from a file
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            fail_writes: false,
        }
    }

    /// Make every following append fail with an I/O error
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl TransactionStore for MemoryStore {
    fn load_all(&self) -> TrackerResult<Vec<Transaction>> {
        Ok(self
            .lines
            .iter()
            .filter_map(|line| Transaction::parse_line(line).ok())
            .collect())
    }

    fn append(&mut self, txn: &Transaction) -> TrackerResult<()> {
        if self.fail_writes {
            return Err(TrackerError::Io("Store is not writable".into()));
        }
        self.lines.push(txn.to_line());
        Ok(())
    }
}
