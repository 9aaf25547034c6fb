//! Flat-file transaction store
//!
//! One `kind,amount,category,description,date` line per transaction. The file
//! is opened and closed inside each call; nothing holds a handle between
//! operations.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::TransactionStore;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

/// Transaction store backed by a text file
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Create a store for the given file; nothing is touched until the first
    /// load or append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionStore for FlatFileStore {
    fn load_all(&self) -> TrackerResult<Vec<Transaction>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no transaction file yet");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            TrackerError::Io(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut transactions = Vec::new();
        let mut skipped = 0usize;

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                TrackerError::Io(format!("Failed to read {}: {}", self.path.display(), e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            match Transaction::parse_line(&line) {
                Ok(txn) => transactions.push(txn),
                Err(e) => {
                    skipped += 1;
                    warn!(line = index + 1, error = %e, "skipping unreadable transaction line");
                }
            }
        }

        debug!(
            path = %self.path.display(),
            loaded = transactions.len(),
            skipped,
            "loaded transactions"
        );

        Ok(transactions)
    }

    fn append(&mut self, txn: &Transaction) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    TrackerError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TrackerError::Io(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", txn.to_line())
            .and_then(|_| writer.flush())
            .map_err(|e| {
                TrackerError::Io(format!("Failed to write {}: {}", self.path.display(), e))
            })?;

        debug!(path = %self.path.display(), "appended transaction");
        Ok(())
    }
}
