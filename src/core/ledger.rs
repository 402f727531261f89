//! Interest, tax, and aging calculations
//!
//! This module contains the derivation rules of the billing ledger as pure
//! functions of bill/transaction state and an "as-of" date. Nothing here
//! mutates; the repository applies these rules when recording payments, and
//! the statement builder applies them when assembling a report.
//!
//! # Interest model
//!
//! Simple (non-compounding) interest on an actual/365 day count:
//!
//! ```text
//! interest(balance, rate_percent, days) = balance * (rate_percent / 100) * days / 365
//! ```
//!
//! Day counts are clamped at zero, so a bill that is not yet overdue
//! contributes no live interest. There is no leap-year adjustment and no
//! rate history; each bill carries one annual rate for its lifetime.
//!
//! Monetary values stay unrounded `Decimal`s throughout; rounding happens
//! only at display time so that accumulation across bills does not compound
//! rounding error.

use crate::types::{Bill, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// Ledger calculation parameters
///
/// Controls the flat tax applied to interest and the settlement threshold
/// below which a post-payment balance snaps to zero.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    /// Flat tax rate applied to computed interest, never to principal
    /// (0.18 = 18%)
    pub gst_rate: Decimal,

    /// Post-payment balances at or below this amount (absolute currency
    /// units) are treated as fully settled: the balance snaps to zero and
    /// the bill's status flips to Fully Paid
    pub settlement_epsilon: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            gst_rate: Decimal::new(18, 2),            // 18%
            settlement_epsilon: Decimal::new(9999, 2), // 99.99
        }
    }
}

impl LedgerConfig {
    /// Create a new LedgerConfig with custom values
    ///
    /// Negative values are invalid and fall back to the defaults with a
    /// warning.
    pub fn new(gst_rate: Decimal, settlement_epsilon: Decimal) -> Self {
        let default = Self::default();

        let gst_rate = if gst_rate.is_sign_negative() {
            warn!(
                "Invalid gst_rate ({}), using default ({})",
                gst_rate, default.gst_rate
            );
            default.gst_rate
        } else {
            gst_rate
        };

        let settlement_epsilon = if settlement_epsilon.is_sign_negative() {
            warn!(
                "Invalid settlement_epsilon ({}), using default ({})",
                settlement_epsilon, default.settlement_epsilon
            );
            default.settlement_epsilon
        } else {
            settlement_epsilon
        };

        Self {
            gst_rate,
            settlement_epsilon,
        }
    }
}

/// Days a bill is overdue as of the given date, clamped at zero
///
/// A due date after `as_of` yields 0, never a negative count or an error.
pub fn days_overdue(due_date: NaiveDate, as_of: NaiveDate) -> u32 {
    (as_of - due_date).num_days().max(0) as u32
}

/// Simple interest on `balance` at `rate_percent` per annum over `days`
///
/// Single division (by 100 * 365) keeps the result as exact as `Decimal`
/// allows before any display rounding.
pub fn simple_interest(balance: Decimal, rate_percent: Decimal, days: u32) -> Decimal {
    balance * rate_percent * Decimal::from(days) / Decimal::from(36_500_u32)
}

/// Interest accruing on the bill's current balance from its due date
/// through `as_of`, not yet crystallized into any transaction
pub fn live_interest(bill: &Bill, as_of: NaiveDate) -> Decimal {
    simple_interest(bill.balance, bill.rate, days_overdue(bill.due_date, as_of))
}

/// Sum of interest already charged on the bill's recorded payments
pub fn historical_interest(bill_id: &str, ledger: &[Transaction]) -> Decimal {
    ledger
        .iter()
        .filter(|t| t.bill_id == bill_id)
        .map(|t| t.interest_charged)
        .sum()
}

/// Total interest due on a bill as of a date: crystallized payment interest
/// plus the live extrapolation on the current balance
///
/// For bills with multiple payments the live component (recomputed over the
/// full overdue span) overlaps with interest already charged against earlier,
/// larger balances. That accounting is intentional and confined to this
/// function; changing it does not touch any other derivation.
pub fn total_interest_due(bill: &Bill, ledger: &[Transaction], as_of: NaiveDate) -> Decimal {
    historical_interest(&bill.id, ledger) + live_interest(bill, as_of)
}

/// Derived monetary figures for one bill as of a statement date
#[derive(Debug, Clone, PartialEq)]
pub struct BillFigures {
    /// Days past due as of the statement date
    pub days_overdue: u32,

    /// Interest accruing on the current balance, not yet crystallized
    pub live_interest: Decimal,

    /// Interest already charged on recorded payments
    pub historical_interest: Decimal,

    /// `historical_interest + live_interest`
    pub total_interest_due: Decimal,

    /// Tax on `total_interest_due`
    pub gst: Decimal,

    /// `total_interest_due + gst`
    pub total_interest_with_gst: Decimal,

    /// `balance + total_interest_due + gst`; for a fully paid bill the
    /// balance is zero, leaving the interest-only total
    pub net_payable: Decimal,
}

/// Compute all derived figures for one bill
pub fn bill_figures(
    bill: &Bill,
    ledger: &[Transaction],
    as_of: NaiveDate,
    config: &LedgerConfig,
) -> BillFigures {
    let days = days_overdue(bill.due_date, as_of);
    let live = simple_interest(bill.balance, bill.rate, days);
    let historical = historical_interest(&bill.id, ledger);
    let total = historical + live;
    let gst = total * config.gst_rate;

    BillFigures {
        days_overdue: days,
        live_interest: live,
        historical_interest: historical,
        total_interest_due: total,
        gst,
        total_interest_with_gst: total + gst,
        net_payable: bill.balance + total + gst,
    }
}

/// Day-overdue band used to group outstanding balances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Days0To30,
    Days31To60,
    Days61To90,
    Over90,
}

impl AgeBand {
    /// Classify a day count into its band (inclusive upper bounds)
    pub fn classify(days_overdue: u32) -> Self {
        match days_overdue {
            0..=30 => AgeBand::Days0To30,
            31..=60 => AgeBand::Days31To60,
            61..=90 => AgeBand::Days61To90,
            _ => AgeBand::Over90,
        }
    }

    /// Display label for the band
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Days0To30 => "0-30",
            AgeBand::Days31To60 => "31-60",
            AgeBand::Days61To90 => "61-90",
            AgeBand::Over90 => "90+",
        }
    }
}

/// Outstanding balances grouped by days overdue
///
/// The four bands are mutually exclusive and exhaustive over non-negative
/// day counts, so the band sums always equal the total balance added.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgingBuckets {
    pub days_0_30: Decimal,
    pub days_31_60: Decimal,
    pub days_61_90: Decimal,
    pub over_90: Decimal,
}

impl AgingBuckets {
    /// Add a bill's balance to the band its day count falls in
    pub fn add(&mut self, days_overdue: u32, balance: Decimal) {
        match AgeBand::classify(days_overdue) {
            AgeBand::Days0To30 => self.days_0_30 += balance,
            AgeBand::Days31To60 => self.days_31_60 += balance,
            AgeBand::Days61To90 => self.days_61_90 += balance,
            AgeBand::Over90 => self.over_90 += balance,
        }
    }

    /// Sum across all four bands
    pub fn total(&self) -> Decimal {
        self.days_0_30 + self.days_31_60 + self.days_61_90 + self.over_90
    }

    /// Labelled band values in ascending age order, for display
    pub fn rows(&self) -> [(&'static str, Decimal); 4] {
        [
            (AgeBand::Days0To30.label(), self.days_0_30),
            (AgeBand::Days31To60.label(), self.days_31_60),
            (AgeBand::Days61To90.label(), self.days_61_90),
            (AgeBand::Over90.label(), self.over_90),
        ]
    }
}

/// Consolidated totals across a set of bills as of a statement date
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedSummary {
    /// Sum of original invoiced amounts
    pub total_original: Decimal,

    /// Sum of outstanding principal balances
    pub total_balance: Decimal,

    /// Sum of per-bill total interest due (crystallized + live)
    pub total_interest: Decimal,

    /// Tax on `total_interest`
    pub total_gst: Decimal,

    /// `total_interest + total_gst`
    pub total_payable_interest: Decimal,

    /// `total_balance + total_interest + total_gst`
    pub net_due: Decimal,

    /// Outstanding balances grouped by days overdue
    pub aging: AgingBuckets,
}

/// Compute the consolidated summary for a set of bills
///
/// `ledger` is the full transaction ledger; each bill's entries are selected
/// by `bill_id`.
pub fn consolidated_summary(
    bills: &[&Bill],
    ledger: &[Transaction],
    as_of: NaiveDate,
    config: &LedgerConfig,
) -> ConsolidatedSummary {
    let mut total_original = Decimal::ZERO;
    let mut total_balance = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;
    let mut aging = AgingBuckets::default();

    for bill in bills {
        total_original += bill.original_amount;
        total_balance += bill.balance;
        total_interest += total_interest_due(bill, ledger, as_of);
        aging.add(days_overdue(bill.due_date, as_of), bill.balance);
    }

    let total_gst = total_interest * config.gst_rate;

    ConsolidatedSummary {
        total_original,
        total_balance,
        total_interest,
        total_gst,
        total_payable_interest: total_interest + total_gst,
        net_due: total_balance + total_interest + total_gst,
        aging,
    }
}
