//! Transaction register
//!
//! The table view: ledger rows for one month filter, formatted for display,
//! with the balance of exactly those rows.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Money, MonthFilter, Transaction};

/// A formatted, read-only projection of one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct DisplayRow {
    #[serde(rename = "Date")]
    #[tabled(rename = "Date")]
    pub date: String,
    #[serde(rename = "Type")]
    #[tabled(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Amount")]
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    #[tabled(rename = "Description")]
    pub description: String,
}

impl DisplayRow {
    pub fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            date: txn.date().format(&settings.date_format).to_string(),
            kind: txn.kind().to_string(),
            amount: txn.amount().format_with_symbol(&settings.currency_symbol),
            category: txn.category().to_string(),
            description: txn.description().to_string(),
        }
    }
}

/// Transactions in `filter`'s month, in ledger order
pub fn filter_by_month<'a>(
    transactions: &'a [Transaction],
    filter: MonthFilter,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions
        .iter()
        .filter(move |txn| filter.includes(txn.month()))
}

/// Display rows for `filter`, in ledger order
pub fn filtered_rows(
    transactions: &[Transaction],
    filter: MonthFilter,
    settings: &Settings,
) -> Vec<DisplayRow> {
    filter_by_month(transactions, filter)
        .map(|txn| DisplayRow::new(txn, settings))
        .collect()
}

/// Income minus expense over the given transactions
pub fn balance<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().map(Transaction::signed_amount).sum()
}

/// Rows and balance for one month filter
#[derive(Debug, Clone)]
pub struct RegisterReport {
    pub filter: MonthFilter,
    pub rows: Vec<DisplayRow>,
    pub balance: Money,
    currency_symbol: String,
}

impl RegisterReport {
    pub fn generate(transactions: &[Transaction], filter: MonthFilter, settings: &Settings) -> Self {
        Self {
            filter,
            rows: filtered_rows(transactions, filter, settings),
            balance: balance(filter_by_month(transactions, filter)),
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Month: {}\n", self.filter));

        if self.rows.is_empty() {
            output.push_str("No transactions found.\n");
        } else {
            let mut table = Table::new(&self.rows);
            table.with(Style::sharp());
            output.push_str(&table.to_string());
            output.push('\n');
        }

        output.push_str(&format!(
            "Balance: {}\n",
            self.balance.format_with_symbol(&self.currency_symbol)
        ));

        output
    }
}
