//! Core business logic module
//!
//! This module contains the core billing components:
//! - `ledger` - Interest, tax, and aging derivation rules (pure functions)
//! - `repository` - Bill/transaction ownership, ID allocation, consistency
//! - `statement` - Renderer-neutral statement assembly

pub mod ledger;
pub mod repository;
pub mod statement;

pub use ledger::{
    bill_figures, consolidated_summary, days_overdue, historical_interest, live_interest,
    simple_interest, total_interest_due, AgeBand, AgingBuckets, BillFigures, ConsolidatedSummary,
    LedgerConfig,
};
pub use repository::BillRepository;
pub use statement::{build_statement, Statement};
