use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::LedgerService;
use crate::io::Exporter;

mod shell;

pub use shell::*;

/// Tally - Personal Finance Tracker
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record income and expenses in a JSON ledger")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(short, long, default_value = "transactions.json")]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a command, the interactive menu is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export all transactions as CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = LedgerService::open(&self.file);

        match self.command {
            None => {
                let stdin = io::stdin();
                let mut shell = Shell::new(stdin.lock(), io::stdout());
                shell.run(&mut service)?;
            }

            Some(Commands::Export { output }) => {
                run_export_command(&service, output.as_deref())?;
            }
        }

        Ok(())
    }
}

fn run_export_command(service: &LedgerService, output: Option<&Path>) -> Result<()> {
    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    let count = exporter.export_transactions_csv(writer)?;
    if output.is_some() {
        eprintln!("Exported {} transactions", count);
    }

    Ok(())
}
