//! Transaction CLI commands
//!
//! `add` records one transaction; `list` shows the register for a month.

use chrono::NaiveDate;
use clap::Args;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{MonthFilter, TransactionKind};
use crate::services::Tracker;
use crate::storage::TransactionStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type (income or expense)
    pub kind: TransactionKind,
    /// Amount, e.g. "200.50"
    pub amount: String,
    /// Category name (defaults to the configured default category)
    #[arg(short, long, default_value = "")]
    pub category: String,
    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Month to show ("All", "JANUARY", "march", ...)
    #[arg(short, long, default_value = "All")]
    pub month: MonthFilter,
}

/// Handle `add`
pub fn handle_add_command<S: TransactionStore>(
    tracker: &mut Tracker<S>,
    args: AddArgs,
) -> TrackerResult<()> {
    let txn = match args.date {
        Some(date_str) => {
            let date = parse_date(&date_str)?;
            tracker.add_transaction_on(
                args.kind,
                &args.amount,
                &args.category,
                &args.description,
                date,
            )?
        }
        None => {
            tracker.add_transaction(args.kind, &args.amount, &args.category, &args.description)?
        }
    };

    let symbol = &tracker.settings().currency_symbol;
    println!(
        "Added {} of {} ({}) on {}",
        txn.kind(),
        txn.amount().format_with_symbol(symbol),
        txn.category(),
        txn.date().format(&tracker.settings().date_format)
    );
    println!(
        "Balance: {}",
        tracker.balance(MonthFilter::All).format_with_symbol(symbol)
    );

    Ok(())
}

/// Handle `list`
pub fn handle_list_command<S: TransactionStore>(
    tracker: &Tracker<S>,
    args: ListArgs,
) -> TrackerResult<()> {
    print!("{}", tracker.register_report(args.month).format_terminal());
    Ok(())
}

fn parse_date(date_str: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        TrackerError::Parse(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}
