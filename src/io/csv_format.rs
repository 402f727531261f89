//! CSV format handling for the bill and transaction tables
//!
//! This module centralizes all tabular format concerns, providing:
//! - Record structures matching the spreadsheet column layout
//! - Lenient conversion from records to domain types
//! - Writers that emit the same column sets back, round-trippable
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Lenient dates
//!
//! Date-typed columns are parsed leniently across the handful of formats
//! the original spreadsheets carry. A date that fails every format becomes
//! a conversion error for that row only; the loaders skip such rows with a
//! warning and the import continues.

use crate::types::{Bill, BillStatus, Transaction};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Date-only formats accepted at the import boundary
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Datetime formats accepted at the import boundary (date part is kept)
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a date cell leniently
///
/// Tries the accepted date formats, then the datetime formats (keeping only
/// the date part). Returns None when nothing matches.
pub fn parse_date_lenient(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// CSV record structure for one bill row
///
/// Matches the bills table columns: ID, Customer, Original Amount, Balance,
/// Due Date, Rate, Status, Created_Date. Monetary and date cells stay as
/// strings so conversion can trim, parse, and reject per field.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BillCsvRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Original Amount")]
    pub original_amount: String,
    #[serde(rename = "Balance")]
    pub balance: String,
    #[serde(rename = "Due Date")]
    pub due_date: Option<String>,
    #[serde(rename = "Rate")]
    pub rate: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Created_Date")]
    pub created_date: Option<String>,
}

/// CSV record structure for one transaction row
///
/// Matches the transactions table columns: Trans_ID, Bill_ID, Date,
/// Principal for Interest, Delayed Days, Interest Charged, Amount Paid,
/// Remaining Balance.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionCsvRecord {
    #[serde(rename = "Trans_ID")]
    pub trans_id: String,
    #[serde(rename = "Bill_ID")]
    pub bill_id: String,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Principal for Interest")]
    pub principal_for_interest: String,
    #[serde(rename = "Delayed Days")]
    pub delayed_days: String,
    #[serde(rename = "Interest Charged")]
    pub interest_charged: String,
    #[serde(rename = "Amount Paid")]
    pub amount_paid: String,
    #[serde(rename = "Remaining Balance")]
    pub remaining_balance: String,
}

fn parse_decimal(value: &str, column: &str, row: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim())
        .map_err(|_| format!("Invalid {} '{}' for row '{}'", column, value, row))
}

fn parse_count(value: &str, column: &str, row: &str) -> Result<u32, String> {
    // Spreadsheet exports may carry integer cells as "31.0"
    parse_decimal(value, column, row)?
        .to_u32()
        .ok_or_else(|| format!("Invalid {} '{}' for row '{}'", column, value, row))
}

fn parse_required_date(
    value: Option<&str>,
    column: &str,
    row: &str,
) -> Result<NaiveDate, String> {
    let raw = value.unwrap_or_default();
    parse_date_lenient(raw)
        .ok_or_else(|| format!("Unparseable {} '{}' for row '{}'", column, raw, row))
}

/// Convert a BillCsvRecord to a Bill
///
/// This function:
/// - Parses the monetary cells into Decimals
/// - Parses the date cells leniently (a missing/unusable date rejects the
///   row, not the import)
/// - Maps the Status label onto the status enum (case-insensitive)
///
/// # Returns
///
/// Result containing either:
/// - Ok(Bill) - Successfully converted row
/// - Err(String) - Error message describing the conversion failure
pub fn convert_bill_record(record: BillCsvRecord) -> Result<Bill, String> {
    let id = record.id.trim().to_string();
    if id.is_empty() {
        return Err("Bill row is missing an ID".to_string());
    }

    let status = match record.status.trim().to_lowercase().as_str() {
        "unpaid" => BillStatus::Unpaid,
        "fully paid" => BillStatus::FullyPaid,
        other => return Err(format!("Invalid status '{}' for row '{}'", other, id)),
    };

    Ok(Bill {
        customer: record.customer.trim().to_string(),
        original_amount: parse_decimal(&record.original_amount, "original amount", &id)?,
        balance: parse_decimal(&record.balance, "balance", &id)?,
        due_date: parse_required_date(record.due_date.as_deref(), "due date", &id)?,
        created_date: parse_required_date(record.created_date.as_deref(), "created date", &id)?,
        rate: parse_decimal(&record.rate, "rate", &id)?,
        status,
        id,
    })
}

/// Convert a TransactionCsvRecord to a Transaction
///
/// Numeric identifiers and counts tolerate the "31.0" shape spreadsheet
/// exports produce for integer cells.
///
/// # Returns
///
/// Result containing either:
/// - Ok(Transaction) - Successfully converted row
/// - Err(String) - Error message describing the conversion failure
pub fn convert_transaction_record(record: TransactionCsvRecord) -> Result<Transaction, String> {
    let bill_id = record.bill_id.trim().to_string();
    let row = format!("{}/{}", record.trans_id.trim(), bill_id);

    Ok(Transaction {
        trans_id: parse_count(&record.trans_id, "transaction ID", &row)?,
        date: parse_required_date(record.date.as_deref(), "date", &row)?,
        principal_for_interest: parse_decimal(
            &record.principal_for_interest,
            "principal",
            &row,
        )?,
        delayed_days: parse_count(&record.delayed_days, "delayed days", &row)?,
        interest_charged: parse_decimal(&record.interest_charged, "interest", &row)?,
        amount_paid: parse_decimal(&record.amount_paid, "amount paid", &row)?,
        remaining_balance: parse_decimal(&record.remaining_balance, "remaining balance", &row)?,
        bill_id,
    })
}

/// Write bills in the spreadsheet column layout
///
/// Dates are written ISO (`%Y-%m-%d`) and decimals at full precision, so an
/// export can be re-imported without loss.
///
/// # Arguments
///
/// * `bills` - Slice of bills to write, emitted in the given order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_bills_csv(bills: &[Bill], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "ID",
            "Customer",
            "Original Amount",
            "Balance",
            "Due Date",
            "Rate",
            "Status",
            "Created_Date",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for bill in bills {
        writer
            .write_record(&[
                bill.id.clone(),
                bill.customer.clone(),
                bill.original_amount.to_string(),
                bill.balance.to_string(),
                bill.due_date.format("%Y-%m-%d").to_string(),
                bill.rate.to_string(),
                bill.status.as_str().to_string(),
                bill.created_date.format("%Y-%m-%d").to_string(),
            ])
            .map_err(|e| format!("Failed to write bill record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write transactions in the spreadsheet column layout
///
/// # Arguments
///
/// * `transactions` - Slice of ledger entries to write, emitted in the
///   given order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "Trans_ID",
            "Bill_ID",
            "Date",
            "Principal for Interest",
            "Delayed Days",
            "Interest Charged",
            "Amount Paid",
            "Remaining Balance",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for transaction in transactions {
        writer
            .write_record(&[
                transaction.trans_id.to_string(),
                transaction.bill_id.clone(),
                transaction.date.format("%Y-%m-%d").to_string(),
                transaction.principal_for_interest.to_string(),
                transaction.delayed_days.to_string(),
                transaction.interest_charged.to_string(),
                transaction.amount_paid.to_string(),
                transaction.remaining_balance.to_string(),
            ])
            .map_err(|e| format!("Failed to write transaction record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
