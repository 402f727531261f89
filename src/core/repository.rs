//! Bill and transaction repository
//!
//! This module provides the `BillRepository` struct which owns the
//! authoritative collections of bills and their payment ledger.
//!
//! The BillRepository is responsible for:
//! - Creating bills with unique (auto-generated or caller-supplied) IDs
//! - Recording payments and deriving the resulting balance/status
//! - Cascading transaction deletion when a bill is deleted
//! - Preserving insertion order for listings and ledger queries
//!
//! Both collections are plain vectors: the ledger is append-only and every
//! listing the statement layer consumes must come back in insertion order.
//! All mutation flows through the methods here; on any error path the prior
//! state is left untouched.

use crate::core::ledger::{days_overdue, simple_interest, LedgerConfig};
use crate::types::{Bill, BillStatus, BillingError, NewBill, TransId, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// First ID handed out when no numeric-looking bill IDs exist yet
const FIRST_AUTO_ID: u64 = 100_001;

/// Owns all bills and their transaction ledger for one session
///
/// The repository enforces ID uniqueness and referential integrity between
/// bills and transactions; there is no database underneath. Derived figures
/// (interest, status transitions) come from the ledger rules in
/// [`crate::core::ledger`].
pub struct BillRepository {
    /// Bills in insertion order
    bills: Vec<Bill>,

    /// Append-only payment ledger in insertion order
    transactions: Vec<Transaction>,

    /// Calculation parameters applied when recording payments
    config: LedgerConfig,
}

impl BillRepository {
    /// Create an empty repository with default ledger parameters
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create an empty repository with custom ledger parameters
    pub fn with_config(config: LedgerConfig) -> Self {
        BillRepository {
            bills: Vec::new(),
            transactions: Vec::new(),
            config,
        }
    }

    /// Build a repository from already-loaded collections
    ///
    /// This is the import boundary: the given collections fully replace any
    /// repository state, exactly as a spreadsheet upload replaces the
    /// session's tables.
    pub fn from_parts(
        bills: Vec<Bill>,
        transactions: Vec<Transaction>,
        config: LedgerConfig,
    ) -> Self {
        info!(
            bills = bills.len(),
            transactions = transactions.len(),
            "loaded repository state"
        );
        BillRepository {
            bills,
            transactions,
            config,
        }
    }

    /// The ledger parameters this repository applies
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// All bills in insertion order (the export boundary)
    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    /// The full payment ledger in insertion order (the export boundary)
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Drop every bill and transaction, keeping the configuration
    pub fn clear(&mut self) {
        self.bills.clear();
        self.transactions.clear();
    }

    /// Look up a bill by exact ID
    pub fn get_bill(&self, id: &str) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }

    /// Bills in insertion order, optionally restricted to one customer
    pub fn list_bills(&self, customer: Option<&str>) -> Vec<&Bill> {
        self.bills
            .iter()
            .filter(|b| customer.map_or(true, |c| b.customer == c))
            .collect()
    }

    /// Sorted, de-duplicated customer names across all bills
    pub fn customers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bills.iter().map(|b| b.customer.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Ledger entries for one bill, in insertion order
    pub fn transactions_for(&self, bill_id: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.bill_id == bill_id)
            .collect()
    }

    /// Create a new bill
    ///
    /// The customer name is trimmed and must be non-empty; the amount must
    /// be positive and the rate non-negative. A requested ID is trimmed
    /// (empty means auto-generate) and rejected if it already exists, with
    /// exact case-sensitive matching. Auto-generated IDs continue the
    /// numeric sequence of existing all-digit IDs, starting at 100001.
    ///
    /// # Returns
    ///
    /// * `Ok(Bill)` - The bill as inserted (status Unpaid, balance equal to
    ///   the original amount)
    /// * `Err(BillingError)` - If validation fails or the requested ID
    ///   collides; nothing is inserted
    pub fn create_bill(&mut self, new_bill: NewBill) -> Result<Bill, BillingError> {
        let customer = new_bill.customer.trim();
        if customer.is_empty() {
            return Err(BillingError::InvalidCustomer);
        }
        if new_bill.original_amount <= Decimal::ZERO {
            return Err(BillingError::invalid_amount(new_bill.original_amount));
        }
        if new_bill.rate.is_sign_negative() {
            return Err(BillingError::invalid_rate(new_bill.rate));
        }

        let requested = new_bill
            .requested_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());

        let id = match requested {
            Some(requested) => {
                if self.get_bill(requested).is_some() {
                    return Err(BillingError::duplicate_bill_id(requested));
                }
                requested.to_string()
            }
            None => self.next_auto_id(),
        };

        let bill = Bill::new(
            id,
            customer.to_string(),
            new_bill.original_amount,
            new_bill.due_date,
            new_bill.created_date,
            new_bill.rate,
        );

        info!(bill_id = %bill.id, customer = %bill.customer, amount = %bill.original_amount, "created bill");
        self.bills.push(bill.clone());
        Ok(bill)
    }

    /// Delete a bill and every transaction referencing it
    ///
    /// Irreversible; there is no soft-delete or undo.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The bill and its ledger entries are gone
    /// * `Err(BillingError)` - If the ID does not exist; nothing is removed
    pub fn delete_bill(&mut self, id: &str) -> Result<(), BillingError> {
        let position = self
            .bills
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BillingError::bill_not_found(id))?;

        self.bills.remove(position);

        let before = self.transactions.len();
        self.transactions.retain(|t| t.bill_id != id);

        info!(
            bill_id = %id,
            cascaded_transactions = before - self.transactions.len(),
            "deleted bill"
        );
        Ok(())
    }

    /// Record a payment against a bill
    ///
    /// Computes the delay past the due date (clamped at zero) and the
    /// simple-interest charge on the balance *before* this payment, appends
    /// an immutable ledger entry, and lowers the bill's balance, flooring at
    /// zero. A post-payment balance at or below the settlement epsilon snaps
    /// to zero and flips the bill to Fully Paid; the recorded
    /// `remaining_balance` is that post-snap balance. No upper bound is
    /// placed on the amount; overpayment excess is not tracked.
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The ledger entry as appended
    /// * `Err(BillingError)` - Unknown bill or non-positive amount; the
    ///   repository is unchanged
    pub fn record_payment(
        &mut self,
        bill_id: &str,
        payment_date: NaiveDate,
        amount_paid: Decimal,
    ) -> Result<Transaction, BillingError> {
        if amount_paid <= Decimal::ZERO {
            return Err(BillingError::invalid_payment(amount_paid));
        }

        let trans_id = self.next_trans_id();
        let epsilon = self.config.settlement_epsilon;

        let bill = self
            .bills
            .iter_mut()
            .find(|b| b.id == bill_id)
            .ok_or_else(|| BillingError::bill_not_found(bill_id))?;

        let opening_balance = bill.balance;
        let delayed_days = days_overdue(bill.due_date, payment_date);
        let interest_charged = simple_interest(opening_balance, bill.rate, delayed_days);

        let new_balance = opening_balance
            .checked_sub(amount_paid)
            .ok_or_else(|| BillingError::arithmetic_underflow("record_payment", bill_id))?
            .max(Decimal::ZERO);

        let settled = new_balance <= epsilon;
        let remaining_balance = if settled { Decimal::ZERO } else { new_balance };

        bill.balance = remaining_balance;
        if settled {
            bill.status = BillStatus::FullyPaid;
        }

        let transaction = Transaction {
            trans_id,
            bill_id: bill_id.to_string(),
            date: payment_date,
            principal_for_interest: opening_balance,
            delayed_days,
            interest_charged,
            amount_paid,
            remaining_balance,
        };

        debug!(
            bill_id = %bill_id,
            trans_id,
            amount = %amount_paid,
            remaining = %remaining_balance,
            "recorded payment"
        );
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Next auto-generated bill ID
    ///
    /// Scans existing IDs, considers only those made entirely of ASCII
    /// digits (an ID like "DL100050" is invisible to this scan), and
    /// returns max + 1, or 100001 when none qualify.
    fn next_auto_id(&self) -> String {
        self.bills
            .iter()
            .filter(|b| !b.id.is_empty() && b.id.bytes().all(|c| c.is_ascii_digit()))
            .filter_map(|b| b.id.parse::<u64>().ok())
            .max()
            .map_or(FIRST_AUTO_ID, |max| max + 1)
            .to_string()
    }

    /// Next transaction ID: ledger max + 1, or 1 for an empty ledger
    fn next_trans_id(&self) -> TransId {
        self.transactions
            .iter()
            .map(|t| t.trans_id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

impl Default for BillRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_bill(customer: &str, amount: &str, requested_id: Option<&str>) -> NewBill {
        NewBill {
            customer: customer.to_string(),
            original_amount: dec(amount),
            due_date: date(2024, 1, 1),
            created_date: date(2023, 12, 1),
            rate: dec("12"),
            requested_id: requested_id.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_create_bill_starts_unpaid_with_full_balance() {
        let mut repo = BillRepository::new();

        let bill = repo
            .create_bill(new_bill("Acme Traders", "10000", None))
            .unwrap();

        assert_eq!(bill.id, "100001");
        assert_eq!(bill.balance, dec("10000"));
        assert_eq!(bill.status, BillStatus::Unpaid);
        assert_eq!(repo.bills().len(), 1);
    }

    #[test]
    fn test_create_bill_trims_customer_name() {
        let mut repo = BillRepository::new();

        let bill = repo
            .create_bill(new_bill("  Acme Traders  ", "10000", None))
            .unwrap();

        assert_eq!(bill.customer, "Acme Traders");
    }

    #[test]
    fn test_create_bill_rejects_empty_customer() {
        let mut repo = BillRepository::new();

        let result = repo.create_bill(new_bill("   ", "10000", None));

        assert!(matches!(result, Err(BillingError::InvalidCustomer)));
        assert!(repo.bills().is_empty());
    }

    #[test]
    fn test_create_bill_rejects_non_positive_amount() {
        let mut repo = BillRepository::new();

        let result = repo.create_bill(new_bill("Acme Traders", "0", None));

        assert!(matches!(result, Err(BillingError::InvalidAmount { .. })));
    }

    #[test]
    fn test_create_bill_rejects_negative_rate() {
        let mut repo = BillRepository::new();
        let mut bill = new_bill("Acme Traders", "10000", None);
        bill.rate = dec("-1");

        let result = repo.create_bill(bill);

        assert!(matches!(result, Err(BillingError::InvalidRate { .. })));
    }

    #[test]
    fn test_auto_id_starts_at_100001() {
        let mut repo = BillRepository::new();

        let bill = repo
            .create_bill(new_bill("Acme Traders", "10000", None))
            .unwrap();

        assert_eq!(bill.id, "100001");
    }

    #[test]
    fn test_auto_id_continues_from_max_numeric() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();
        repo.create_bill(new_bill("Acme Traders", "5000", Some("100003")))
            .unwrap();

        let bill = repo
            .create_bill(new_bill("Acme Traders", "2000", None))
            .unwrap();

        assert_eq!(bill.id, "100004");
    }

    #[test]
    fn test_auto_id_ignores_non_numeric_ids() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("DL100050")))
            .unwrap();

        let bill = repo
            .create_bill(new_bill("Acme Traders", "5000", None))
            .unwrap();

        // The alphanumeric ID is invisible to the numeric scan
        assert_eq!(bill.id, "100001");
    }

    #[test]
    fn test_requested_id_is_trimmed_and_used_as_is() {
        let mut repo = BillRepository::new();

        let bill = repo
            .create_bill(new_bill("Acme Traders", "10000", Some("  INV-7  ")))
            .unwrap();

        assert_eq!(bill.id, "INV-7");
    }

    #[test]
    fn test_blank_requested_id_falls_back_to_auto() {
        let mut repo = BillRepository::new();

        let bill = repo
            .create_bill(new_bill("Acme Traders", "10000", Some("   ")))
            .unwrap();

        assert_eq!(bill.id, "100001");
    }

    #[test]
    fn test_duplicate_requested_id_is_rejected() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        let result = repo.create_bill(new_bill("Beta Mills", "5000", Some("100001")));

        assert!(matches!(result, Err(BillingError::DuplicateBillId { .. })));
        assert_eq!(repo.bills().len(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("inv-7")))
            .unwrap();

        // Different case is a different ID
        let bill = repo
            .create_bill(new_bill("Acme Traders", "5000", Some("INV-7")))
            .unwrap();

        assert_eq!(bill.id, "INV-7");
        assert_eq!(repo.bills().len(), 2);
    }

    #[test]
    fn test_auto_ids_never_collide() {
        let mut repo = BillRepository::new();

        for _ in 0..5 {
            repo.create_bill(new_bill("Acme Traders", "1000", None))
                .unwrap();
        }

        let mut ids: Vec<String> = repo.bills().iter().map(|b| b.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_record_payment_worked_scenario() {
        // Bill 100001: principal 10000, rate 12%, due 2024-01-01
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        // Payment of 4000 on 2024-02-01: 31 days late, base 10000
        let first = repo
            .record_payment("100001", date(2024, 2, 1), dec("4000"))
            .unwrap();

        assert_eq!(first.trans_id, 1);
        assert_eq!(first.principal_for_interest, dec("10000"));
        assert_eq!(first.delayed_days, 31);
        assert_eq!(first.interest_charged.round_dp(2), dec("101.92"));
        assert_eq!(first.remaining_balance, dec("6000"));

        let bill = repo.get_bill("100001").unwrap();
        assert_eq!(bill.balance, dec("6000"));
        assert_eq!(bill.status, BillStatus::Unpaid);

        // Payment of 6000 on 2024-03-01: 60 days late, base 6000
        let second = repo
            .record_payment("100001", date(2024, 3, 1), dec("6000"))
            .unwrap();

        assert_eq!(second.trans_id, 2);
        assert_eq!(second.principal_for_interest, dec("6000"));
        assert_eq!(second.delayed_days, 60);
        assert_eq!(second.interest_charged.round_dp(2), dec("118.36"));
        assert_eq!(second.remaining_balance, Decimal::ZERO);

        let bill = repo.get_bill("100001").unwrap();
        assert_eq!(bill.balance, Decimal::ZERO);
        assert_eq!(bill.status, BillStatus::FullyPaid);
    }

    #[test]
    fn test_balance_is_non_increasing_and_never_negative() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        let mut previous = dec("10000");
        for amount in ["2500", "2500", "9000", "100"] {
            repo.record_payment("100001", date(2024, 2, 1), dec(amount))
                .unwrap();
            let balance = repo.get_bill("100001").unwrap().balance;
            assert!(balance <= previous);
            assert!(balance >= Decimal::ZERO);
            previous = balance;
        }
    }

    #[test]
    fn test_overpayment_floors_balance_at_zero() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "1000", Some("100001")))
            .unwrap();

        let transaction = repo
            .record_payment("100001", date(2024, 1, 1), dec("5000"))
            .unwrap();

        assert_eq!(transaction.remaining_balance, Decimal::ZERO);
        assert_eq!(repo.get_bill("100001").unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn test_epsilon_residual_snaps_to_fully_paid() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        // Residual of 50.00 is within the 99.99 settlement epsilon
        let transaction = repo
            .record_payment("100001", date(2024, 1, 1), dec("9950"))
            .unwrap();

        assert_eq!(transaction.remaining_balance, Decimal::ZERO);
        let bill = repo.get_bill("100001").unwrap();
        assert_eq!(bill.balance, Decimal::ZERO);
        assert_eq!(bill.status, BillStatus::FullyPaid);
    }

    #[test]
    fn test_residual_above_epsilon_stays_unpaid() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        let transaction = repo
            .record_payment("100001", date(2024, 1, 1), dec("9900"))
            .unwrap();

        assert_eq!(transaction.remaining_balance, dec("100.00"));
        let bill = repo.get_bill("100001").unwrap();
        assert_eq!(bill.balance, dec("100.00"));
        assert_eq!(bill.status, BillStatus::Unpaid);
    }

    #[test]
    fn test_status_never_reverts_to_unpaid() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "1000", Some("100001")))
            .unwrap();
        repo.record_payment("100001", date(2024, 1, 1), dec("1000"))
            .unwrap();

        // A further payment against the settled bill changes nothing
        repo.record_payment("100001", date(2024, 2, 1), dec("500"))
            .unwrap();

        let bill = repo.get_bill("100001").unwrap();
        assert_eq!(bill.status, BillStatus::FullyPaid);
        assert_eq!(bill.balance, Decimal::ZERO);
    }

    #[test]
    fn test_early_payment_charges_no_interest() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        // Paid before the due date: zero delay, zero interest
        let transaction = repo
            .record_payment("100001", date(2023, 12, 15), dec("4000"))
            .unwrap();

        assert_eq!(transaction.delayed_days, 0);
        assert_eq!(transaction.interest_charged, Decimal::ZERO);
    }

    #[test]
    fn test_record_payment_rejects_non_positive_amount() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        for amount in ["0", "-100"] {
            let result = repo.record_payment("100001", date(2024, 2, 1), dec(amount));
            assert!(matches!(result, Err(BillingError::InvalidPayment { .. })));
        }
        assert!(repo.transactions().is_empty());
    }

    #[test]
    fn test_record_payment_against_missing_bill() {
        let mut repo = BillRepository::new();

        let result = repo.record_payment("999", date(2024, 2, 1), dec("100"));

        assert!(matches!(result, Err(BillingError::BillNotFound { .. })));
        assert!(repo.transactions().is_empty());
    }

    #[test]
    fn test_trans_ids_are_monotonic_across_bills() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();
        repo.create_bill(new_bill("Beta Mills", "5000", Some("100002")))
            .unwrap();

        let t1 = repo
            .record_payment("100001", date(2024, 2, 1), dec("100"))
            .unwrap();
        let t2 = repo
            .record_payment("100002", date(2024, 2, 1), dec("100"))
            .unwrap();
        let t3 = repo
            .record_payment("100001", date(2024, 2, 2), dec("100"))
            .unwrap();

        assert_eq!((t1.trans_id, t2.trans_id, t3.trans_id), (1, 2, 3));
    }

    #[test]
    fn test_transactions_are_frozen_once_recorded() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        let first = repo
            .record_payment("100001", date(2024, 2, 1), dec("4000"))
            .unwrap();

        // A later payment changes the bill but not the recorded entry
        repo.record_payment("100001", date(2024, 3, 1), dec("6000"))
            .unwrap();

        let stored = repo.transactions_for("100001");
        assert_eq!(stored[0], &first);
        assert_eq!(stored[0].principal_for_interest, dec("10000"));
        assert_eq!(stored[0].remaining_balance, dec("6000"));
    }

    #[test]
    fn test_delete_bill_cascades_only_its_transactions() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();
        repo.create_bill(new_bill("Beta Mills", "5000", Some("100002")))
            .unwrap();
        repo.record_payment("100001", date(2024, 2, 1), dec("100"))
            .unwrap();
        repo.record_payment("100002", date(2024, 2, 1), dec("200"))
            .unwrap();
        repo.record_payment("100001", date(2024, 2, 2), dec("300"))
            .unwrap();

        repo.delete_bill("100001").unwrap();

        assert!(repo.get_bill("100001").is_none());
        assert_eq!(repo.transactions().len(), 1);
        assert_eq!(repo.transactions()[0].bill_id, "100002");
    }

    #[test]
    fn test_delete_missing_bill_fails_without_mutation() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();

        let result = repo.delete_bill("999");

        assert!(matches!(result, Err(BillingError::BillNotFound { .. })));
        assert_eq!(repo.bills().len(), 1);
    }

    #[test]
    fn test_list_bills_preserves_insertion_order() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("300")))
            .unwrap();
        repo.create_bill(new_bill("Beta Mills", "5000", Some("100")))
            .unwrap();
        repo.create_bill(new_bill("Acme Traders", "2000", Some("200")))
            .unwrap();

        let all: Vec<&str> = repo.list_bills(None).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(all, vec!["300", "100", "200"]);

        let acme: Vec<&str> = repo
            .list_bills(Some("Acme Traders"))
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(acme, vec!["300", "200"]);
    }

    #[test]
    fn test_customers_are_sorted_and_unique() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Zenith Co", "1000", None)).unwrap();
        repo.create_bill(new_bill("Acme Traders", "1000", None))
            .unwrap();
        repo.create_bill(new_bill("Zenith Co", "1000", None)).unwrap();

        assert_eq!(repo.customers(), vec!["Acme Traders", "Zenith Co"]);
    }

    #[test]
    fn test_clear_empties_both_collections() {
        let mut repo = BillRepository::new();
        repo.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();
        repo.record_payment("100001", date(2024, 2, 1), dec("100"))
            .unwrap();

        repo.clear();

        assert!(repo.bills().is_empty());
        assert!(repo.transactions().is_empty());
    }

    #[test]
    fn test_from_parts_replaces_state() {
        let mut seed = BillRepository::new();
        seed.create_bill(new_bill("Acme Traders", "10000", Some("100001")))
            .unwrap();
        seed.record_payment("100001", date(2024, 2, 1), dec("4000"))
            .unwrap();

        let repo = BillRepository::from_parts(
            seed.bills().to_vec(),
            seed.transactions().to_vec(),
            LedgerConfig::default(),
        );

        assert_eq!(repo.bills().len(), 1);
        assert_eq!(repo.transactions().len(), 1);
        // ID allocation picks up where the loaded data left off
        let mut repo = repo;
        let bill = repo.create_bill(new_bill("Beta Mills", "1000", None)).unwrap();
        assert_eq!(bill.id, "100002");
        let t = repo
            .record_payment("100002", date(2024, 3, 1), dec("500"))
            .unwrap();
        assert_eq!(t.trans_id, 2);
    }
}
