//! Error types for the billing ledger
//!
//! This module defines all error types that can occur while managing bills,
//! recording payments, and importing tabular data.
//!
//! # Error Categories
//!
//! - **Validation Errors**: empty customer, non-positive amounts, negative
//!   rates. The operation aborts with prior state unchanged.
//! - **Duplicate/Lookup Errors**: requested bill ID collisions, references
//!   to bills that do not exist.
//! - **Import Errors**: malformed CSV rows; recoverable at row level.
//! - **I/O Errors**: file not found, permission denied, etc.
//! - **Arithmetic Errors**: overflow/underflow in balance calculations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the billing ledger
///
/// Every core operation is synchronous and returns either a success value or
/// one of these variants; no error leaves partial bill or transaction state
/// behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    /// Customer name was empty or whitespace-only
    ///
    /// Recoverable: the bill is not created and the caller may retry.
    #[error("Customer name must not be empty")]
    InvalidCustomer,

    /// Bill amount was zero or negative
    #[error("Invalid bill amount {amount}: must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Interest rate was negative
    #[error("Invalid interest rate {rate}: must not be negative")]
    InvalidRate {
        /// The rejected rate (annual percent)
        rate: Decimal,
    },

    /// Payment amount was zero or negative
    #[error("Invalid payment amount {amount}: must be greater than zero")]
    InvalidPayment {
        /// The rejected amount
        amount: Decimal,
    },

    /// Requested bill ID collides with an existing one
    ///
    /// Matching is exact and case-sensitive. Recoverable: nothing is
    /// mutated and the caller picks a different ID.
    #[error("Bill ID '{id}' already exists")]
    DuplicateBillId {
        /// The colliding ID
        id: String,
    },

    /// Operation referenced a bill that does not exist
    ///
    /// Surfaced, for example, when recording a payment against a deleted
    /// bill. No partial mutation occurs.
    #[error("Bill '{id}' not found")]
    BillNotFound {
        /// The missing bill ID
        id: String,
    },

    /// CSV parsing error at the import boundary
    ///
    /// Recoverable: the malformed row is skipped and the import continues
    /// with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// Recoverable: the operation is rejected to keep the ledger intact.
    #[error("Arithmetic overflow in {operation} for bill '{bill}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Bill ID
        bill: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// Recoverable: the operation is rejected to keep the ledger intact.
    #[error("Arithmetic underflow in {operation} for bill '{bill}'")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
        /// Bill ID
        bill: String,
    },
}

// Conversion from io::Error to BillingError
impl From<std::io::Error> for BillingError {
    fn from(error: std::io::Error) -> Self {
        BillingError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BillingError
impl From<csv::Error> for BillingError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        BillingError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BillingError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BillingError::InvalidAmount { amount }
    }

    /// Create an InvalidRate error
    pub fn invalid_rate(rate: Decimal) -> Self {
        BillingError::InvalidRate { rate }
    }

    /// Create an InvalidPayment error
    pub fn invalid_payment(amount: Decimal) -> Self {
        BillingError::InvalidPayment { amount }
    }

    /// Create a DuplicateBillId error
    pub fn duplicate_bill_id(id: &str) -> Self {
        BillingError::DuplicateBillId { id: id.to_string() }
    }

    /// Create a BillNotFound error
    pub fn bill_not_found(id: &str) -> Self {
        BillingError::BillNotFound { id: id.to_string() }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, bill: &str) -> Self {
        BillingError::ArithmeticOverflow {
            operation: operation.to_string(),
            bill: bill.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str, bill: &str) -> Self {
        BillingError::ArithmeticUnderflow {
            operation: operation.to_string(),
            bill: bill.to_string(),
        }
    }
}
