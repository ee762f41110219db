use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::{AppError, LedgerService};
use crate::domain::{format_amount, parse_amount};

/// An option picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Balance,
    CategoryReport,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::List,
            "3" => MenuChoice::Balance,
            "4" => MenuChoice::CategoryReport,
            "5" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Interactive menu loop driving a [`LedgerService`].
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu until the user exits or input runs out.
    pub fn run(&mut self, service: &mut LedgerService) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("\nSelect an option: ")? else {
                tracing::debug!("input closed, leaving shell");
                break;
            };

            match MenuChoice::parse(&choice) {
                MenuChoice::Add => self.add_transaction(service)?,
                MenuChoice::List => self.list_transactions(service)?,
                MenuChoice::Balance => self.show_balance(service)?,
                MenuChoice::CategoryReport => self.show_category_spending(service)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "\nExiting... Have a great day!")?;
                    break;
                }
                MenuChoice::Invalid => writeln!(self.output, "\nInvalid option, try again.")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nPersonal Finance Tracker")?;
        writeln!(self.output, "1. Add Transaction")?;
        writeln!(self.output, "2. View Transactions")?;
        writeln!(self.output, "3. Check Balance")?;
        writeln!(self.output, "4. View Spending by Category")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Print a prompt and read one line, without its line terminator.
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn add_transaction(&mut self, service: &mut LedgerService) -> Result<()> {
        let Some(raw_amount) = self.prompt("\nEnter amount (use - for expenses): ")? else {
            return Ok(());
        };

        // Reject bad amounts before asking anything else, so nothing gets written
        let amount = match parse_amount(&raw_amount).map_err(AppError::from) {
            Ok(amount) => amount,
            Err(err) => {
                tracing::debug!(input = %raw_amount, "rejected amount");
                writeln!(self.output, "\n{}", err)?;
                return Ok(());
            }
        };

        let Some(category) = self.prompt("Enter category (Food, Bills, Shopping, etc.): ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(());
        };

        service.add_transaction(amount, category, description)?;
        writeln!(self.output, "\nTransaction added successfully!\n")?;
        Ok(())
    }

    fn list_transactions(&mut self, service: &LedgerService) -> Result<()> {
        if service.is_empty() {
            writeln!(self.output, "\nNo transactions found!\n")?;
            return Ok(());
        }

        writeln!(self.output, "\nYour Transactions:")?;
        for t in service.transactions() {
            writeln!(
                self.output,
                "{} | {} | ${} | {}",
                t.date,
                t.category,
                format_amount(t.amount),
                t.description
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn show_balance(&mut self, service: &LedgerService) -> Result<()> {
        writeln!(
            self.output,
            "\nCurrent Balance: ${}\n",
            format_amount(service.balance())
        )?;
        Ok(())
    }

    fn show_category_spending(&mut self, service: &LedgerService) -> Result<()> {
        writeln!(self.output, "\nCategory Spending:")?;
        for entry in &service.category_totals() {
            writeln!(
                self.output,
                "{}: ${}",
                entry.category,
                format_amount(entry.total)
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}
