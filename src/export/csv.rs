//! CSV Export functionality
//!
//! Exports the register rows for a month filter, formatted exactly as they
//! are displayed.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::DisplayRow;

/// Export display rows to CSV with a `Date,Type,Amount,Category,Description`
/// header. Text fields are quoted as needed, so commas survive here.
pub fn export_rows_csv<W: Write>(rows: &[DisplayRow], writer: W) -> TrackerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if rows.is_empty() {
        csv_writer.write_record(["Date", "Type", "Amount", "Category", "Description"])?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{MonthFilter, Transaction};
    use crate::reports::filtered_rows;

    #[test]
    fn test_export_rows() {
        let ledger = vec![
            Transaction::parse_line("Income,1000.00,Salary,pay,2024-01-05").unwrap(),
            Transaction::parse_line("Expense,50.00,Transport,bus,2024-02-01").unwrap(),
        ];
        let rows = filtered_rows(&ledger, MonthFilter::All, &Settings::default());

        let mut buffer = Vec::new();
        export_rows_csv(&rows, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(
            csv,
            "Date,Type,Amount,Category,Description\n\
             2024-01-05,Income,₹1000.00,Salary,pay\n\
             2024-02-01,Expense,₹50.00,Transport,bus\n"
        );
    }

    #[test]
    fn test_export_no_rows_writes_header() {
        let mut buffer = Vec::new();
        export_rows_csv(&[], &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Date,Type,Amount,Category,Description\n"
        );
    }
}
