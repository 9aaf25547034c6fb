//! Expense by category report
//!
//! Totals every expense in the ledger per category. The month filter does
//! not apply here: the report always covers the whole ledger.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction};

/// Sum of expense amounts per category, ordered by category name
pub fn expense_by_category<'a, I>(transactions: I) -> BTreeMap<String, Money>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        *totals.entry(txn.category().to_string()).or_default() += txn.amount();
    }

    totals
}

/// Expense totals with their grand total
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub totals: BTreeMap<String, Money>,
    pub total_expenses: Money,
    currency_symbol: String,
}

impl CategoryReport {
    pub fn generate(transactions: &[Transaction], currency_symbol: &str) -> Self {
        let totals = expense_by_category(transactions);
        let total_expenses: Money = totals.values().copied().sum();

        Self {
            totals,
            total_expenses,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Expense by Category\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.totals.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        for (category, amount) in &self.totals {
            output.push_str(&format!(
                "{:<20} : {:>15}\n",
                category,
                amount.format_with_symbol(&self.currency_symbol)
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} : {:>15}\n",
            "TOTAL",
            self.total_expenses.format_with_symbol(&self.currency_symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Category", "Amount"])?;
        for (category, amount) in &self.totals {
            csv_writer.write_record([category.as_str(), amount.to_string().as_str()])?;
        }
        csv_writer.write_record(["TOTAL", self.total_expenses.to_string().as_str()])?;

        csv_writer
            .flush()
            .map_err(|e| TrackerError::Export(e.to_string()))
    }
}
