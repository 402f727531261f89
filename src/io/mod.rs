//! I/O module
//!
//! Handles the tabular load/save boundary.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output
//!   serialization, lenient date parsing)
//! - `reader` - Streaming CSV readers and whole-file loaders

pub mod csv_format;
pub mod reader;

pub use csv_format::{
    convert_bill_record, convert_transaction_record, parse_date_lenient, write_bills_csv,
    write_transactions_csv, BillCsvRecord, TransactionCsvRecord,
};
pub use reader::{load_bills, load_transactions, BillsReader, TransactionsReader};
