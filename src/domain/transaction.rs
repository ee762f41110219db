use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Amount;

/// Format used for the `date` field, both on disk and on screen.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A transaction is a single income (positive amount) or expense (negative amount).
/// Transactions are immutable once recorded and carry no identifier: the ledger
/// is simply the sequence in which they were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: Amount,
    /// Free-text label, used to group expenses
    pub category: String,
    pub description: String,
    /// Local wall-clock time at which the transaction was recorded, as `DATE_FORMAT`.
    /// Kept as text so hand-edited entries load unchanged.
    pub date: String,
}

impl Transaction {
    /// Create a transaction stamped with the current local time.
    pub fn new(
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::at(amount, category, description, now())
    }

    /// Create a transaction with an explicit timestamp.
    pub fn at(
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// The recorded date, if it is in `DATE_FORMAT`.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Current local time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
