//! CLI commands for reports
//!
//! `report` shows expenses by category; `export` writes register rows to CSV.

use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::export::export_rows_csv;
use crate::models::MonthFilter;
use crate::services::Tracker;
use crate::storage::TransactionStore;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Month to export ("All", "JANUARY", ...)
    #[arg(short, long, default_value = "All")]
    pub month: MonthFilter,

    /// Destination CSV file
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Handle `report`
pub fn handle_report_command<S: TransactionStore>(
    tracker: &Tracker<S>,
    args: ReportArgs,
) -> TrackerResult<()> {
    let report = tracker.expense_report();

    if let Some(path) = args.output {
        report.export_csv(BufWriter::new(create_file(&path)?))?;
        println!("Expense report exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle `export`
pub fn handle_export_command<S: TransactionStore>(
    tracker: &Tracker<S>,
    args: ExportArgs,
) -> TrackerResult<()> {
    let rows = tracker.rows(args.month);
    export_rows_csv(&rows, BufWriter::new(create_file(&args.output)?))?;

    println!(
        "Exported {} transaction(s) to: {}",
        rows.len(),
        args.output.display()
    );
    Ok(())
}

fn create_file(path: &Path) -> TrackerResult<File> {
    File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })
}
