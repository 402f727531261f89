//! Transaction-related types for the billing ledger
//!
//! A Transaction is an immutable, append-only ledger entry recording one
//! payment applied to a bill, together with the interest crystallized at
//! that moment. Entries are never edited or deleted individually; they only
//! disappear when their parent bill is deleted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction identifier
///
/// Assigned monotonically: max existing ID + 1, or 1 for an empty ledger.
pub type TransId = u32;

/// One payment applied to a bill, with the interest charged at that moment
///
/// All monetary fields are frozen at recording time. In particular
/// `principal_for_interest` and `interest_charged` keep the figures the
/// payment was computed against, even as the parent bill's balance changes
/// with later payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique ledger entry identifier
    pub trans_id: TransId,

    /// ID of the bill this payment applies to
    pub bill_id: String,

    /// Date the payment was recorded
    pub date: NaiveDate,

    /// Bill balance before this payment, the base for the interest charge
    pub principal_for_interest: Decimal,

    /// Days past the bill's due date at payment time, clamped at zero
    pub delayed_days: u32,

    /// Simple interest charged for the delay, frozen at recording time
    pub interest_charged: Decimal,

    /// Amount paid, strictly positive
    pub amount_paid: Decimal,

    /// Bill balance after this payment was applied (post settlement-epsilon
    /// flooring), never negative
    pub remaining_balance: Decimal,
}
