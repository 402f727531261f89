//! Billing Ledger CLI
//!
//! Command-line interface for building consolidated customer statements
//! from bill and transaction CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- bills.csv --transactions transactions.csv --customer "Acme Traders"
//! cargo run -- bills.csv --customer "Acme Traders" --date 2024-03-01 --output statement.txt
//! cargo run -- bills.csv --customer "Acme Traders" --gst-rate 0.05 --currency-symbol "$"
//! ```
//!
//! The program loads the bill and transaction tables (skipping unusable
//! rows with a warning), assembles the customer's statement as of the given
//! date, and renders it as plain text to stdout or the chosen output file.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use billing_ledger::cli;
use billing_ledger::core::repository::BillRepository;
use billing_ledger::core::statement::build_statement;
use billing_ledger::io::reader::{load_bills, load_transactions};
use billing_ledger::report::{RenderStatement, TextRenderer};
use chrono::Local;
use std::fs::File;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Row-level import warnings and repository events go through tracing;
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), String> {
    let bills = load_bills(&args.bills_file)?;
    let transactions = match &args.transactions_file {
        Some(path) => load_transactions(path)?,
        None => Vec::new(),
    };

    let repo = BillRepository::from_parts(bills, transactions, args.to_ledger_config());

    let statement_date = args
        .statement_date
        .unwrap_or_else(|| Local::now().date_naive());
    let statement = build_statement(&repo, &args.customer, statement_date);

    let renderer = TextRenderer::new(args.currency_symbol.clone());
    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .map_err(|e| format!("Failed to create '{}': {}", path.display(), e))?;
            renderer.render(&statement, &mut file)
        }
        None => renderer.render(&statement, &mut std::io::stdout()),
    }
}
