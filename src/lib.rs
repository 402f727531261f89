//! Billing Ledger Library
//! # Overview
//!
//! This library provides a billing/interest ledger engine: customer
//! invoices ("bills"), payments recorded against them with simple-interest
//! charges, and consolidated per-customer statements.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Bill, Transaction, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Interest, tax, and aging derivation rules
//!   - [`core::repository`] - Bill/transaction ownership and consistency
//!   - [`core::statement`] - Renderer-neutral statement assembly
//! - [`io`] - Tabular (CSV) load/save boundary with lenient imports
//! - [`report`] - Statement rendering behind the [`report::RenderStatement`]
//!   seam
//!
//! # Billing Model
//!
//! A bill carries an immutable principal, an annual interest rate, and a
//! mutable balance that only decreases as payments land. Each payment
//! appends an immutable transaction recording the balance it was computed
//! against, the days past due, and the simple interest (actual/365, no
//! compounding) charged for the delay. A post-payment balance within the
//! configurable settlement epsilon snaps to zero and flips the bill to
//! Fully Paid, permanently.
//!
//! # Statements
//!
//! Statement figures are derived on demand as pure functions of repository
//! state plus an "as-of" date: live interest on current balances, the
//! historical interest already crystallized, a flat tax on interest, aging
//! buckets, and per-bill breakdowns. The assembled [`core::Statement`] is
//! renderer-neutral; the bundled [`report::TextRenderer`] produces the
//! plain-text document.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod types;

pub use crate::core::{build_statement, BillRepository, LedgerConfig, Statement};
pub use crate::io::{load_bills, load_transactions, write_bills_csv, write_transactions_csv};
pub use crate::report::{RenderStatement, TextRenderer};
pub use crate::types::{Bill, BillStatus, BillingError, NewBill, TransId, Transaction};
