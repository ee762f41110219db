use anyhow::Result;
use std::io::Write;

use crate::application::LedgerService;
use crate::domain::format_amount;

/// Exporter for converting ledger data to CSV
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export transactions to CSV format, in insertion order
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["date", "category", "amount", "description"])?;

        let mut count = 0;
        for transaction in self.service.transactions() {
            csv_writer.write_record([
                transaction.date.clone(),
                transaction.category.clone(),
                format_amount(transaction.amount),
                transaction.description.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }
}
