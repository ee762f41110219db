// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use tally::application::LedgerService;
use tempfile::TempDir;

/// Helper to create a test service backed by a file in a temporary directory
pub fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = LedgerService::open(ledger_path(&temp_dir));
    Ok((service, temp_dir))
}

/// Path of the ledger file used by [`test_service`]
pub fn ledger_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("transactions.json")
}

/// Helper to parse a "YYYY-MM-DD HH:MM:SS" string
pub fn parse_date(date_str: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Helper to build a midnight timestamp for a day
pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
