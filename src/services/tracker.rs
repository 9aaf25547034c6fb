//! Tracker service
//!
//! The interface the presentation shell talks to: accept new transactions
//! from raw user input and hand back the views for rendering.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use super::ledger::Ledger;
use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, MonthFilter, Transaction, TransactionKind, MONTH_OPTIONS};
use crate::reports::{self, CategoryReport, DisplayRow, RegisterReport};
use crate::storage::TransactionStore;

/// Service for recording and viewing transactions
pub struct Tracker<S> {
    ledger: Ledger<S>,
    settings: Settings,
}

impl<S: TransactionStore> Tracker<S> {
    pub fn new(ledger: Ledger<S>, settings: Settings) -> Self {
        Self { ledger, settings }
    }

    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Record a transaction dated today
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount_text: &str,
        category: &str,
        description: &str,
    ) -> TrackerResult<Transaction> {
        let today = chrono::Local::now().date_naive();
        self.add_transaction_on(kind, amount_text, category, description, today)
    }

    /// Record a transaction on `date`
    ///
    /// An empty category falls back to the configured default. The amount
    /// must be a non-negative number; extra decimal places round to cents.
    /// Line breaks in the category or description are rejected since each
    /// transaction is stored as one line.
    pub fn add_transaction_on(
        &mut self,
        kind: TransactionKind,
        amount_text: &str,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> TrackerResult<Transaction> {
        let amount = Money::parse(amount_text)?;
        if amount.is_negative() || amount_text.trim_start().starts_with('-') {
            return Err(TrackerError::Parse(format!(
                "Amount must not be negative: '{}'",
                amount_text
            )));
        }

        let category = match category.trim() {
            "" => self.settings.default_category.as_str(),
            trimmed => trimmed,
        };
        if category.contains(',') {
            return Err(TrackerError::Validation(format!(
                "Category must not contain a comma: '{}'",
                category
            )));
        }

        for (field, value) in [("Category", category), ("Description", description)] {
            if value.contains(['\r', '\n']) {
                return Err(TrackerError::Validation(format!(
                    "{} must not contain a line break",
                    field
                )));
            }
        }

        if description.contains(',') {
            warn!(
                description,
                "description contains a comma; this line will not load back correctly"
            );
        }

        let txn = Transaction::new(kind, amount, category, description, date)?;
        self.ledger.add(txn).cloned()
    }

    /// Display rows for `filter`, in ledger order
    pub fn rows(&self, filter: MonthFilter) -> Vec<DisplayRow> {
        reports::filtered_rows(self.ledger.all(), filter, &self.settings)
    }

    /// Balance of the rows shown for `filter`
    pub fn balance(&self, filter: MonthFilter) -> Money {
        reports::balance(reports::filter_by_month(self.ledger.all(), filter))
    }

    /// Expense totals per category over the whole ledger
    pub fn category_report(&self) -> BTreeMap<String, Money> {
        reports::expense_by_category(self.ledger.all())
    }

    /// Month filter options: `All` followed by the twelve month names
    pub fn available_months(&self) -> [&'static str; 13] {
        MONTH_OPTIONS
    }

    pub fn register_report(&self, filter: MonthFilter) -> RegisterReport {
        RegisterReport::generate(self.ledger.all(), filter, &self.settings)
    }

    pub fn expense_report(&self) -> CategoryReport {
        CategoryReport::generate(self.ledger.all(), &self.settings.currency_symbol)
    }
}
