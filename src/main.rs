use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use money_tracker::cli::{
    handle_add_command, handle_export_command, handle_list_command, handle_report_command,
    AddArgs, ExportArgs, ListArgs, ReportArgs,
};
use money_tracker::config::{Settings, TrackerPaths};
use money_tracker::logging::init_tracing;
use money_tracker::models::{TransactionKind, DEFAULT_CATEGORIES, MONTH_OPTIONS};
use money_tracker::services::{Ledger, Tracker};
use money_tracker::storage::FlatFileStore;

#[derive(Parser)]
#[command(
    name = "money-tracker",
    version,
    about = "Track income and expenses in a plain text file",
    long_about = "money-tracker records income and expense transactions, one line each, \
                  in a text file, shows them by month with a running balance, and \
                  summarizes expenses by category."
)]
struct Cli {
    /// Directory holding the transaction file (defaults to the current directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new income or expense
    Add(AddArgs),

    /// Show transactions and balance, optionally for one month
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show expenses by category
    Report(ReportArgs),

    /// Export transactions to a CSV file
    Export(ExportArgs),

    /// List the month filter options
    Months,

    /// List the suggested categories
    Categories,

    /// Write a default settings file to the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = TrackerPaths::new(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    let transactions_file = paths.transactions_file(&settings.data_file);

    let mut ledger = Ledger::new(FlatFileStore::new(&transactions_file));
    if let Err(e) = ledger.load() {
        eprintln!("Warning: Failed to load data: {}", e);
    }
    let mut tracker = Tracker::new(ledger, settings);

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut tracker, args)?,
        Some(Commands::List(args)) => handle_list_command(&tracker, args)?,
        Some(Commands::Report(args)) => handle_report_command(&tracker, args)?,
        Some(Commands::Export(args)) => handle_export_command(&tracker, args)?,
        Some(Commands::Months) => {
            for month in MONTH_OPTIONS {
                println!("{}", month);
            }
        }
        Some(Commands::Categories) => {
            for category in DEFAULT_CATEGORIES {
                println!("{}", category);
            }
        }
        Some(Commands::Init) => {
            if paths.settings_file().exists() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                tracker.settings().save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            let settings = tracker.settings();
            println!("money-tracker Configuration");
            println!("===========================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Transaction file: {}", transactions_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            println!("  Transactions:     {}", tracker.ledger().len());
        }
        None => {
            println!("money-tracker - income and expense tracking");
            println!();
            println!(
                "Types: {}",
                TransactionKind::all()
                    .iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("Run 'money-tracker --help' for usage information.");
        }
    }

    Ok(())
}
