use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::Transaction;

/// Repository persisting the whole ledger as a single JSON array.
/// Every save rewrites the file from scratch.
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all transactions, treating a missing or unreadable file as an empty ledger.
    pub fn load(&self) -> Vec<Transaction> {
        match self.try_load() {
            Ok(Some(transactions)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = transactions.len(),
                    "loaded transactions"
                );
                transactions
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no ledger file, starting empty");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %format!("{:#}", err),
                    "could not read ledger file, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Load all transactions, returning `None` if the file does not exist.
    pub fn try_load(&self) -> Result<Option<Vec<Transaction>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read ledger file {}", self.path.display())
                });
            }
        };

        let transactions = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid ledger data in {}", self.path.display()))?;
        Ok(Some(transactions))
    }

    /// Overwrite the file with the given transactions.
    pub fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        transactions
            .serialize(&mut serializer)
            .context("Failed to serialize transactions")?;

        let mut file = fs::File::create(&self.path)
            .with_context(|| format!("Failed to create ledger file {}", self.path.display()))?;
        file.write_all(&buf)
            .with_context(|| format!("Failed to write ledger file {}", self.path.display()))?;

        tracing::debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;

    fn sample() -> Vec<Transaction> {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        vec![
            Transaction::at(2500.0, "Salary", "May salary", date),
            Transaction::at(-42.75, "Food", "groceries", date),
            Transaction::at(-9.99, "Shopping", "", date),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::new(dir.path().join("missing.json"));

        assert!(repo.try_load().unwrap().is_none());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::new(dir.path().join("ledger.json"));
        let transactions = sample();

        repo.save(&transactions).unwrap();

        assert_eq!(repo.load(), transactions);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::new(dir.path().join("ledger.json"));

        repo.save(&sample()).unwrap();
        repo.save(&sample()[..1]).unwrap();

        assert_eq!(repo.load().len(), 1);
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();
        let repo = Repository::new(&path);

        assert!(repo.try_load().is_err());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, r#"{"amount": 1.0}"#).unwrap();

        assert!(Repository::new(&path).load().is_empty());
    }

    #[test]
    fn test_file_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        let repo = Repository::new(&path);

        repo.save(&sample()[1..2]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert!(raw.starts_with("[\n    {"));
        assert_eq!(value[0]["amount"], -42.75);
        assert_eq!(value[0]["category"], "Food");
        assert_eq!(value[0]["description"], "groceries");
        assert_eq!(value[0]["date"], "2024-05-01 08:30:00");
    }

    #[test]
    fn test_empty_ledger_saves_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");

        Repository::new(&path).save(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
