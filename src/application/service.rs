use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::domain::{
    compute_balance, compute_category_totals, Amount, CategoryTotals, Transaction,
};
use crate::storage::Repository;

use super::AppError;

/// Application service providing high-level operations for the ledger.
/// It owns the in-memory transactions and mirrors every change to disk.
pub struct LedgerService {
    repo: Repository,
    transactions: Vec<Transaction>,
}

impl LedgerService {
    /// Create a service over an already loaded set of transactions.
    pub fn new(repo: Repository, transactions: Vec<Transaction>) -> Self {
        Self { repo, transactions }
    }

    /// Open the ledger stored at the given path.
    /// A missing or corrupt file yields an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let repo = Repository::new(path);
        let transactions = repo.load();
        Self::new(repo, transactions)
    }

    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    // ========================
    // Mutations
    // ========================

    /// Record a new transaction stamped with the current local time.
    pub fn add_transaction(
        &mut self,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&Transaction, AppError> {
        self.record(Transaction::new(amount, category, description))
    }

    /// Record a new transaction with an explicit timestamp.
    pub fn add_transaction_at(
        &mut self,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Result<&Transaction, AppError> {
        self.record(Transaction::at(amount, category, description, date))
    }

    fn record(&mut self, transaction: Transaction) -> Result<&Transaction, AppError> {
        self.transactions.push(transaction);

        if let Err(err) = self.repo.save(&self.transactions) {
            // Keep memory in sync with what is on disk
            self.transactions.pop();
            return Err(AppError::Storage(err));
        }

        let index = self.transactions.len() - 1;
        let recorded = &self.transactions[index];
        tracing::debug!(
            amount = recorded.amount,
            category = %recorded.category,
            "recorded transaction"
        );
        Ok(recorded)
    }

    // ========================
    // Queries
    // ========================

    /// Iterate over all transactions in insertion order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Sum of all amounts.
    pub fn balance(&self) -> Amount {
        compute_balance(&self.transactions)
    }

    /// Expense totals per category, in first-seen order.
    pub fn category_totals(&self) -> CategoryTotals {
        compute_category_totals(&self.transactions)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
