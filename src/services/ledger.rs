//! Ledger
//!
//! The session's ordered list of transactions together with the store that
//! persists them. Insertion order is kept; records are never removed or
//! rewritten.

use tracing::{debug, info};

use crate::error::TrackerResult;
use crate::models::Transaction;
use crate::storage::TransactionStore;

/// Transactions in insertion order, backed by a [`TransactionStore`]
pub struct Ledger<S> {
    store: S,
    transactions: Vec<Transaction>,
}

impl<S: TransactionStore> Ledger<S> {
    /// Create an empty ledger over `store` without reading it
    pub fn new(store: S) -> Self {
        Self {
            store,
            transactions: Vec::new(),
        }
    }

    /// Create a ledger and load everything the store holds
    pub fn open(store: S) -> TrackerResult<Self> {
        let mut ledger = Self::new(store);
        ledger.load()?;
        Ok(ledger)
    }

    /// Replace the in-memory contents with the store's contents
    ///
    /// On failure the ledger keeps what it had. Returns the number of
    /// transactions loaded.
    pub fn load(&mut self) -> TrackerResult<usize> {
        let loaded = self.store.load_all()?;
        debug!(count = loaded.len(), "ledger loaded");
        self.transactions = loaded;
        Ok(self.transactions.len())
    }

    /// Persist `txn`, then append it to the in-memory sequence
    ///
    /// If the store rejects the write the ledger is left unchanged.
    pub fn add(&mut self, txn: Transaction) -> TrackerResult<&Transaction> {
        self.store.append(&txn)?;
        info!(transaction = %txn, "transaction added");
        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn parse(line: &str) -> Transaction {
        Transaction::parse_line(line).unwrap()
    }

    #[test]
    fn test_open_loads_store_in_order() {
        let store = MemoryStore::with_lines([
            "Expense,50.00,Transport,bus,2024-02-01",
            "Income,1000.00,Salary,pay,2024-01-05",
        ]);
        let ledger = Ledger::open(store).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all()[0].category(), "Transport");
        assert_eq!(ledger.all()[1].category(), "Salary");
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        assert!(ledger.is_empty());

        let txn = parse("Expense,200.50,Food,lunch,2024-01-10");
        ledger.add(txn.clone()).unwrap();

        assert_eq!(ledger.all(), &[txn]);
        assert_eq!(
            ledger.store().lines(),
            &["Expense,200.50,Food,lunch,2024-01-10".to_string()]
        );
    }

    #[test]
    fn test_failed_add_leaves_ledger_unchanged() {
        let mut store = MemoryStore::with_lines(["Income,10.00,Salary,,2024-01-01"]);
        store.fail_writes(true);
        let mut ledger = Ledger::open(store).unwrap();

        let err = ledger
            .add(parse("Expense,5.00,Food,,2024-01-02"))
            .unwrap_err();

        assert!(err.is_io());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.store().lines().len(), 1);
    }
}
