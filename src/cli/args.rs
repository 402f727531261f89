use crate::core::ledger::LedgerConfig;
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Generate consolidated customer statements from billing tables
#[derive(Parser, Debug)]
#[command(name = "billing-ledger")]
#[command(about = "Track bills, payments, and interest; render customer statements", long_about = None)]
pub struct CliArgs {
    /// Bills CSV file path
    #[arg(value_name = "BILLS", help = "Path to the bills CSV file")]
    pub bills_file: PathBuf,

    /// Transactions CSV file path
    #[arg(
        long = "transactions",
        value_name = "FILE",
        help = "Path to the transactions CSV file (omit for an empty ledger)"
    )]
    pub transactions_file: Option<PathBuf>,

    /// Customer the statement is built for
    #[arg(
        long = "customer",
        value_name = "NAME",
        help = "Customer name exactly as it appears in the bills table"
    )]
    pub customer: String,

    /// As-of date for live interest
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Statement date (default: today)"
    )]
    pub statement_date: Option<NaiveDate>,

    /// Where to write the rendered statement
    #[arg(
        long = "output",
        value_name = "FILE",
        help = "Output file (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Currency symbol prefixed to rendered amounts
    #[arg(
        long = "currency-symbol",
        value_name = "SYMBOL",
        default_value = "Rs.",
        help = "Currency symbol for rendered amounts"
    )]
    pub currency_symbol: String,

    /// Flat tax rate applied to interest
    #[arg(
        long = "gst-rate",
        value_name = "RATE",
        allow_hyphen_values = true,
        help = "Tax rate on interest as a fraction (default: 0.18)"
    )]
    pub gst_rate: Option<Decimal>,

    /// Settlement threshold for residual balances
    #[arg(
        long = "settlement-epsilon",
        value_name = "AMOUNT",
        allow_hyphen_values = true,
        help = "Post-payment balance at or below this settles the bill (default: 99.99)"
    )]
    pub settlement_epsilon: Option<Decimal>,
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    ///
    /// This method constructs a LedgerConfig using the CLI arguments if
    /// provided, or falls back to default values. Invalid (negative)
    /// overrides are reported and replaced by the defaults.
    ///
    /// # Returns
    ///
    /// A `LedgerConfig` with values from CLI arguments or defaults.
    pub fn to_ledger_config(&self) -> LedgerConfig {
        if self.gst_rate.is_some() || self.settlement_epsilon.is_some() {
            // At least one custom value provided, create custom config
            let default = LedgerConfig::default();
            LedgerConfig::new(
                self.gst_rate.unwrap_or(default.gst_rate),
                self.settlement_epsilon
                    .unwrap_or(default.settlement_epsilon),
            )
        } else {
            // No custom values, use all defaults
            LedgerConfig::default()
        }
    }
}
