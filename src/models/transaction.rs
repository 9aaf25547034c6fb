//! Transaction model
//!
//! One income or expense entry, plus the single-line text form used by the
//! flat-file store: `kind,amount,category,description,date`.

use chrono::{Datelike, Month, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Date format used in the stored line
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

const FIELD_COUNT: usize = 5;

const CALENDAR: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// All kinds, in the order the shell offers them
    pub fn all() -> &'static [TransactionKind] {
        &[Self::Income, Self::Expense]
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TrackerError::Parse(format!(
                "Unknown transaction kind '{}'. Use Income or Expense",
                s
            ))),
        }
    }
}

/// A single ledger entry
///
/// Fields are private: a transaction cannot change after construction. There
/// is no identifier; a transaction is addressed by its position in the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    category: String,
    description: String,
    date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is negative; the direction of
    /// the money is carried by `kind`, never by the sign.
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> TrackerResult<Self> {
        if amount.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Amount must not be negative: {}",
                amount
            )));
        }

        Ok(Self {
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Calendar month of the transaction date
    pub fn month(&self) -> Month {
        CALENDAR[self.date.month0() as usize]
    }

    /// Amount with the sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Serialize to one stored line (without the line terminator)
    ///
    /// Commas inside text fields are written as-is. Such a line will not parse
    /// back into the same transaction.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.kind,
            self.amount,
            self.category,
            self.description,
            self.date.format(STORED_DATE_FORMAT)
        )
    }

    /// Parse one stored line
    pub fn parse_line(line: &str) -> TrackerResult<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() != FIELD_COUNT {
            return Err(TrackerError::Parse(format!(
                "Expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let kind: TransactionKind = fields[0].parse()?;
        let amount = Money::parse(fields[1])?;
        let date = NaiveDate::parse_from_str(fields[4].trim(), STORED_DATE_FORMAT)
            .map_err(|_| TrackerError::Parse(format!("Invalid date '{}'", fields[4])))?;

        Self::new(kind, amount, fields[2], fields[3], date)
            .map_err(|e| TrackerError::Parse(e.to_string()))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(STORED_DATE_FORMAT),
            self.kind,
            self.category,
            self.amount
        )
    }
}
