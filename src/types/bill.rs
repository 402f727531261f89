//! Bill-related types for the billing ledger
//!
//! This module defines the Bill structure and its settlement status,
//! plus the parameter struct used when creating new bills.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement status of a bill
///
/// A bill starts Unpaid and becomes Fully Paid once its balance drops to
/// zero (payments within the settlement epsilon snap the balance to zero).
/// The transition is one-way: a bill never reverts to Unpaid automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillStatus {
    /// Outstanding principal remains on the bill
    Unpaid,

    /// The balance has reached zero
    FullyPaid,
}

impl BillStatus {
    /// Storage/display label, matching the spreadsheet `Status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Unpaid => "Unpaid",
            BillStatus::FullyPaid => "Fully Paid",
        }
    }
}

/// A customer invoice tracked by outstanding principal balance
///
/// The balance only ever decreases (payments are floored at zero) and
/// represents unpaid principal only; interest is tracked separately in the
/// transaction ledger and derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Unique bill identifier, immutable once created
    ///
    /// May be numeric-looking (auto-generated IDs are) or custom
    /// alphanumeric when supplied by the caller.
    pub id: String,

    /// Customer the bill belongs to, non-empty
    pub customer: String,

    /// Invoiced principal, set at creation and immutable
    pub original_amount: Decimal,

    /// Unpaid principal, decreases as payments are applied, never below zero
    pub balance: Decimal,

    /// Date the payment falls due; interest accrues from this date
    pub due_date: NaiveDate,

    /// Billing/invoice date
    pub created_date: NaiveDate,

    /// Annual interest rate in percent (e.g. 12 for 12% p.a.), immutable
    pub rate: Decimal,

    /// Current settlement status, derived from the balance
    pub status: BillStatus,
}

impl Bill {
    /// Create a new unpaid bill with balance equal to the original amount
    pub fn new(
        id: String,
        customer: String,
        original_amount: Decimal,
        due_date: NaiveDate,
        created_date: NaiveDate,
        rate: Decimal,
    ) -> Self {
        Bill {
            id,
            customer,
            original_amount,
            balance: original_amount,
            due_date,
            created_date,
            rate,
            status: BillStatus::Unpaid,
        }
    }

    /// Whether the bill has been fully settled
    pub fn is_settled(&self) -> bool {
        self.status == BillStatus::FullyPaid
    }
}

/// Parameters for creating a bill via the repository
///
/// `requested_id` of `None` (or an empty/whitespace string) asks the
/// repository to auto-generate the next numeric ID.
#[derive(Debug, Clone)]
pub struct NewBill {
    pub customer: String,
    pub original_amount: Decimal,
    pub due_date: NaiveDate,
    pub created_date: NaiveDate,
    pub rate: Decimal,
    pub requested_id: Option<String>,
}
