//! Plain-text statement renderer
//!
//! Reference implementation of [`RenderStatement`]: a fixed-width text
//! document with the same sections the original paginated report carries
//! (title block, summary table, consolidated transaction table with its
//! three totals rows, one section per bill, footer disclaimer).
//!
//! Currency renders as `"<symbol> #,##0.00"` with thousands grouping; all
//! rounding happens here, at display time.

use crate::core::statement::{BillSummary, ClosingNote, LedgerRow, Statement};
use crate::report::RenderStatement;
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rs.";

/// Format a monetary value as `"<symbol> #,##0.00"`
///
/// The value is rounded to two decimals, the integer part grouped with
/// thousands separators, and a leading minus sign applied for negative
/// amounts.
pub fn format_currency(symbol: &str, value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let abs = rounded.abs();
    let units = abs.trunc();
    let cents = (abs - units) * Decimal::ONE_HUNDRED;

    match (units.to_i64(), cents.to_i64()) {
        (Some(units), Some(cents)) => format!(
            "{}{} {}.{:02}",
            sign,
            symbol,
            units.to_formatted_string(&Locale::en),
            cents
        ),
        // Out of i64 range; grouping is skipped but the value still renders
        _ => format!("{}{} {:.2}", sign, symbol, abs),
    }
}

/// Long date form used in the title block and status sentences
fn format_long_date(date: NaiveDate) -> String {
    date.format("%d %b, %Y").to_string()
}

/// Tax row label such as `GST @ 18%`
fn gst_label(rate: Decimal) -> String {
    format!("GST @ {}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// Fixed-width plain-text renderer
pub struct TextRenderer {
    currency_symbol: String,
}

impl TextRenderer {
    /// Create a renderer with a custom currency symbol
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        TextRenderer {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn currency(&self, value: Decimal) -> String {
        format_currency(&self.currency_symbol, value)
    }

    fn write_document(&self, statement: &Statement, out: &mut dyn Write) -> io::Result<()> {
        let rule = "=".repeat(88);
        let line = "-".repeat(88);
        let gst = gst_label(statement.gst_rate);
        let print_date = format_long_date(statement.statement_date);

        // Title block
        writeln!(out, "{}", rule)?;
        writeln!(out, "{:^88}", "CUSTOMER CONSOLIDATED STATEMENT")?;
        writeln!(out, "{:^88}", format!("Customer: {}", statement.customer))?;
        writeln!(out, "{:^88}", format!("Statement Date: {}", print_date))?;
        writeln!(out, "{}", rule)?;
        writeln!(out)?;

        // Summary table
        writeln!(out, "Summary")?;
        writeln!(out, "{}", line)?;
        let summary = &statement.summary;
        let summary_rows = [
            (
                "Outstanding Principal".to_string(),
                summary.outstanding_principal,
            ),
            (
                format!(
                    "Interest (Inclusive of Outstanding Principal as of {})",
                    print_date
                ),
                summary.interest_due,
            ),
            (gst.clone(), summary.gst),
            (
                "Total Payable Interest".to_string(),
                summary.total_payable_interest,
            ),
            ("Net Payable Amount".to_string(), summary.net_payable),
        ];
        for (label, value) in summary_rows {
            writeln!(out, "{:<68} {:>19}", label, self.currency(value))?;
        }
        writeln!(out)?;

        // Consolidated transaction table
        writeln!(out, "All Transactions Summary")?;
        writeln!(out, "{}", line)?;
        if statement.transactions.is_empty() {
            writeln!(out, "No transactions recorded.")?;
        } else {
            writeln!(
                out,
                "{:<10} {:<11} {:<11} {:>15} {:>14} {:>5} {:>6} {:>13}",
                "Bill ID", "Due Date", "Pay Date", "Balance", "Amount Paid", "Days", "ROI%",
                "Interest"
            )?;
            for row in &statement.transactions {
                writeln!(
                    out,
                    "{:<10} {:<11} {:<11} {:>15} {:>14} {:>5} {:>6} {:>13}",
                    row.bill_id,
                    row.due_date,
                    row.payment_date,
                    self.currency(row.opening_balance),
                    self.currency(row.amount_paid),
                    row.delayed_days,
                    format!("{}%", row.rate.normalize()),
                    self.currency(row.interest_charged)
                )?;
            }
            let totals = &statement.transaction_totals;
            writeln!(out, "{}", line)?;
            writeln!(
                out,
                "{:>74} {:>13}",
                "TOTAL INTEREST",
                self.currency(totals.interest_charged)
            )?;
            writeln!(out, "{:>74} {:>13}", gst, self.currency(totals.gst))?;
            writeln!(
                out,
                "{:>74} {:>13}",
                "TOTAL PAYABLE INTEREST",
                self.currency(totals.total_payable)
            )?;
        }
        writeln!(out)?;

        // Individual bill sections
        writeln!(out, "Individual Bill Details")?;
        writeln!(out, "{}", line)?;
        for section in &statement.bills {
            writeln!(out)?;
            writeln!(out, "Bill #{} - {}", section.bill_id, section.status.as_str())?;

            let bill_rows: Vec<(String, Decimal)> = match &section.summary {
                BillSummary::Outstanding {
                    principal_balance,
                    interest_due,
                    gst: bill_gst,
                    total_interest_with_gst,
                    net_payable,
                } => vec![
                    ("Principal Balance".to_string(), *principal_balance),
                    ("Interest Due".to_string(), *interest_due),
                    (gst.clone(), *bill_gst),
                    (
                        "Total Interest (Incl. GST)".to_string(),
                        *total_interest_with_gst,
                    ),
                    ("Net Payable".to_string(), *net_payable),
                ],
                BillSummary::Settled {
                    total_interest_charged,
                    gst: bill_gst,
                    total_interest_payable,
                } => vec![
                    (
                        "Total Interest Charged".to_string(),
                        *total_interest_charged,
                    ),
                    (gst.clone(), *bill_gst),
                    (
                        "Total Interest Payable".to_string(),
                        *total_interest_payable,
                    ),
                ],
            };
            for (label, value) in bill_rows {
                writeln!(out, "  {:<40} {:>19}", label, self.currency(value))?;
            }
            writeln!(out)?;

            writeln!(
                out,
                "  {:<11} {:<11} {:>15} {:>14} {:>5} {:>6} {:>13} {:>15}",
                "Due Date", "Pay Date", "Op. Bal", "Paid", "Days", "ROI%", "Int", "Rem Bal"
            )?;
            let roi = format!("{}%", section.rate.normalize());
            for row in &section.rows {
                match row {
                    LedgerRow::Payment {
                        date,
                        opening_balance,
                        amount_paid,
                        delayed_days,
                        interest_charged,
                        remaining_balance,
                    } => writeln!(
                        out,
                        "  {:<11} {:<11} {:>15} {:>14} {:>5} {:>6} {:>13} {:>15}",
                        section.due_date,
                        date,
                        self.currency(*opening_balance),
                        self.currency(*amount_paid),
                        delayed_days,
                        roi,
                        self.currency(*interest_charged),
                        self.currency(*remaining_balance)
                    )?,
                    LedgerRow::Pending {
                        since,
                        balance,
                        days_overdue,
                        live_interest,
                    } => writeln!(
                        out,
                        "  {:<11} {:<11} {:>15} {:>14} {:>5} {:>6} {:>13} {:>15}",
                        since,
                        "PENDING",
                        self.currency(*balance),
                        "NA",
                        days_overdue,
                        roi,
                        self.currency(*live_interest),
                        self.currency(*balance)
                    )?,
                }
            }
            writeln!(out)?;

            match &section.closing {
                ClosingNote::Outstanding { net_payable } => writeln!(
                    out,
                    "  Bill is currently outstanding. Net payable: {}",
                    self.currency(*net_payable)
                )?,
                ClosingNote::Settled { last_payment } => writeln!(
                    out,
                    "  Bill fully settled as of {}",
                    last_payment
                        .map(format_long_date)
                        .unwrap_or_else(|| "N/A".to_string())
                )?,
            }
        }

        // Footer
        writeln!(out)?;
        writeln!(out, "{}", line)?;
        writeln!(out, "{:^88}", "This is a system-generated consolidated statement.")?;

        Ok(())
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl RenderStatement for TextRenderer {
    fn render(&self, statement: &Statement, output: &mut dyn Write) -> Result<(), String> {
        self.write_document(statement, output)
            .map_err(|e| format!("Failed to write statement: {}", e))
    }
}
