//! CSV readers for the bills and transactions tables
//!
//! Provides streaming iterators over table rows plus whole-file loaders
//! implementing the lenient import policy. Format concerns are delegated to
//! the csv_format module.
//!
//! # Iterator Interface
//!
//! Both readers implement Iterator, yielding `Result<T, String>` per CSV
//! row with line numbers included in error messages:
//!
//! ```no_run
//! use billing_ledger::io::reader::BillsReader;
//! use std::path::Path;
//!
//! let reader = BillsReader::new(Path::new("bills.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(bill) => println!("Loaded bill: {:?}", bill),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - The loaders skip bad rows with a warning and keep going, so one
//!   unparseable date never rejects a whole import

use crate::io::csv_format::{
    convert_bill_record, convert_transaction_record, BillCsvRecord, TransactionCsvRecord,
};
use crate::types::{Bill, Transaction};
use csv::{Reader, ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;
use tracing::warn;

/// Open a CSV file with the shared reader configuration
///
/// All fields are whitespace-trimmed and rows may carry trailing empty
/// cells (spreadsheet exports often do).
fn open_table(path: &Path) -> Result<Reader<File>, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

    Ok(ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(file))
}

/// Streaming reader over the bills table
#[derive(Debug)]
pub struct BillsReader {
    reader: Reader<File>,
    line_num: usize,
}

impl BillsReader {
    /// Open the bills CSV file for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(BillsReader)` if the file opened successfully
    /// * `Err(String)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        Ok(Self {
            reader: open_table(path)?,
            line_num: 0,
        })
    }
}

impl Iterator for BillsReader {
    type Item = Result<Bill, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<BillCsvRecord>();

        match deserializer.next()? {
            Ok(record) => {
                self.line_num += 1;
                // Add line number context to any conversion errors
                Some(
                    convert_bill_record(record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

/// Streaming reader over the transactions table
#[derive(Debug)]
pub struct TransactionsReader {
    reader: Reader<File>,
    line_num: usize,
}

impl TransactionsReader {
    /// Open the transactions CSV file for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(TransactionsReader)` if the file opened successfully
    /// * `Err(String)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        Ok(Self {
            reader: open_table(path)?,
            line_num: 0,
        })
    }
}

impl Iterator for TransactionsReader {
    type Item = Result<Transaction, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<TransactionCsvRecord>();

        match deserializer.next()? {
            Ok(record) => {
                self.line_num += 1;
                Some(
                    convert_transaction_record(record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

/// Load every usable bill row from a CSV file
///
/// Rows that fail parsing or conversion are skipped with a warning; the
/// rest load normally. Only failure to open the file is fatal.
pub fn load_bills(path: &Path) -> Result<Vec<Bill>, String> {
    let mut bills = Vec::new();
    for result in BillsReader::new(path)? {
        match result {
            Ok(bill) => bills.push(bill),
            Err(e) => warn!("Skipping bill row: {}", e),
        }
    }
    Ok(bills)
}

/// Load every usable transaction row from a CSV file
///
/// Same lenient policy as [`load_bills`].
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, String> {
    let mut transactions = Vec::new();
    for result in TransactionsReader::new(path)? {
        match result {
            Ok(transaction) => transactions.push(transaction),
            Err(e) => warn!("Skipping transaction row: {}", e),
        }
    }
    Ok(transactions)
}
