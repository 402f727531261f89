//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `bill`: Bill-related types and the creation parameter struct
//! - `transaction`: Ledger entry types and identifiers
//! - `error`: Error types for the billing ledger

pub mod bill;
pub mod error;
pub mod transaction;

pub use bill::{Bill, BillStatus, NewBill};
pub use error::BillingError;
pub use transaction::{TransId, Transaction};
