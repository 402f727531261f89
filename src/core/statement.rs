//! Renderer-neutral statement assembly
//!
//! This module turns repository state plus a statement date into the
//! structured report data for one customer: consolidated summary figures, a
//! flat annotated transaction list with historical totals, and one section
//! per bill. The structures carry values and classifications only (which
//! summary row set applies, whether a row is a pending placeholder);
//! wording, pagination, fonts, and colors belong to whichever renderer
//! consumes them.

use crate::core::ledger::{bill_figures, consolidated_summary, AgingBuckets, LedgerConfig};
use crate::core::repository::BillRepository;
use crate::types::{Bill, BillStatus, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Complete data for rendering one customer's consolidated statement
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    /// Customer the statement belongs to
    pub customer: String,

    /// The "as-of" date every live figure was computed against
    pub statement_date: NaiveDate,

    /// Tax rate all GST figures were computed with, for renderer labels
    pub gst_rate: Decimal,

    /// Consolidated summary across all the customer's bills
    pub summary: StatementSummary,

    /// Every payment across the customer's bills, in ledger order, each row
    /// annotated with its parent bill's due date and rate
    pub transactions: Vec<StatementTransactionRow>,

    /// Historical totals over the listed transactions
    pub transaction_totals: TransactionTotals,

    /// One section per bill, in listing order
    pub bills: Vec<BillSection>,
}

/// The five consolidated summary rows plus the aging breakdown
#[derive(Debug, Clone, Serialize)]
pub struct StatementSummary {
    /// Sum of outstanding principal balances
    pub outstanding_principal: Decimal,

    /// Total interest due as of the statement date (crystallized + live)
    pub interest_due: Decimal,

    /// Tax on `interest_due`
    pub gst: Decimal,

    /// `interest_due + gst`
    pub total_payable_interest: Decimal,

    /// `outstanding_principal + interest_due + gst`
    pub net_payable: Decimal,

    /// Outstanding balances grouped by days overdue
    pub aging: AgingBuckets,
}

/// One row of the consolidated transaction table
#[derive(Debug, Clone, Serialize)]
pub struct StatementTransactionRow {
    pub bill_id: String,
    pub due_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub opening_balance: Decimal,
    pub amount_paid: Decimal,
    pub delayed_days: u32,
    pub rate: Decimal,
    pub interest_charged: Decimal,
}

/// Totals over the listed transactions
///
/// Strictly historical: these sum what was actually charged at each payment
/// event, with no live extrapolation, so they diverge from
/// [`StatementSummary`] whenever the statement date extends past the last
/// payment on a bill that still carries a balance.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionTotals {
    /// Sum of `interest_charged` across the listed rows
    pub interest_charged: Decimal,

    /// Tax on that sum
    pub gst: Decimal,

    /// `interest_charged + gst`
    pub total_payable: Decimal,
}

/// Per-bill block of the statement
#[derive(Debug, Clone, Serialize)]
pub struct BillSection {
    pub bill_id: String,
    pub status: BillStatus,
    pub due_date: NaiveDate,
    pub rate: Decimal,

    /// Summary rows; the row set differs for settled vs outstanding bills
    pub summary: BillSummary,

    /// Ledger rows ordered by (date, trans_id), with a pending placeholder
    /// appended for bills that still carry a balance
    pub rows: Vec<LedgerRow>,

    /// Classification + values for the one-line status sentence
    pub closing: ClosingNote,
}

/// Bill-level summary rows
#[derive(Debug, Clone, Serialize)]
pub enum BillSummary {
    /// The bill still carries a balance
    Outstanding {
        principal_balance: Decimal,
        interest_due: Decimal,
        gst: Decimal,
        total_interest_with_gst: Decimal,
        net_payable: Decimal,
    },

    /// The bill is fully settled; principal rows are omitted
    Settled {
        total_interest_charged: Decimal,
        gst: Decimal,
        total_interest_payable: Decimal,
    },
}

/// One row of a bill's payment history
#[derive(Debug, Clone, Serialize)]
pub enum LedgerRow {
    /// A recorded payment
    Payment {
        date: NaiveDate,
        opening_balance: Decimal,
        amount_paid: Decimal,
        delayed_days: u32,
        interest_charged: Decimal,
        remaining_balance: Decimal,
    },

    /// Synthetic placeholder for the balance still outstanding as of the
    /// statement date; only present on unpaid bills
    Pending {
        since: NaiveDate,
        balance: Decimal,
        days_overdue: u32,
        live_interest: Decimal,
    },
}

/// Values behind the bill's one-line status sentence
#[derive(Debug, Clone, Serialize)]
pub enum ClosingNote {
    /// Outstanding bill: what settling it today would cost
    Outstanding { net_payable: Decimal },

    /// Settled bill: when the last payment landed (None for a bill settled
    /// without any recorded payment, which imported data can contain)
    Settled { last_payment: Option<NaiveDate> },
}

/// Assemble the consolidated statement for one customer as of one date
///
/// A customer with no bills yields an empty statement (zero summary, no
/// sections) rather than an error.
pub fn build_statement(
    repo: &BillRepository,
    customer: &str,
    statement_date: NaiveDate,
) -> Statement {
    let bills = repo.list_bills(Some(customer));
    let ledger = repo.transactions();
    let config = repo.config();

    let consolidated = consolidated_summary(&bills, ledger, statement_date, config);
    let summary = StatementSummary {
        outstanding_principal: consolidated.total_balance,
        interest_due: consolidated.total_interest,
        gst: consolidated.total_gst,
        total_payable_interest: consolidated.total_payable_interest,
        net_payable: consolidated.net_due,
        aging: consolidated.aging,
    };

    // Flat list in ledger insertion order, restricted to this customer
    let mut transactions = Vec::new();
    for entry in ledger {
        if let Some(bill) = bills.iter().find(|b| b.id == entry.bill_id) {
            transactions.push(StatementTransactionRow {
                bill_id: entry.bill_id.clone(),
                due_date: bill.due_date,
                payment_date: entry.date,
                opening_balance: entry.principal_for_interest,
                amount_paid: entry.amount_paid,
                delayed_days: entry.delayed_days,
                rate: bill.rate,
                interest_charged: entry.interest_charged,
            });
        }
    }

    let interest_charged: Decimal = transactions.iter().map(|r| r.interest_charged).sum();
    let gst = interest_charged * config.gst_rate;
    let transaction_totals = TransactionTotals {
        interest_charged,
        gst,
        total_payable: interest_charged + gst,
    };

    let sections = bills
        .iter()
        .map(|bill| build_bill_section(bill, ledger, statement_date, config))
        .collect();

    Statement {
        customer: customer.to_string(),
        statement_date,
        gst_rate: config.gst_rate,
        summary,
        transactions,
        transaction_totals,
        bills: sections,
    }
}

/// Assemble one bill's section of the statement
fn build_bill_section(
    bill: &Bill,
    ledger: &[Transaction],
    statement_date: NaiveDate,
    config: &LedgerConfig,
) -> BillSection {
    let figures = bill_figures(bill, ledger, statement_date, config);

    let mut entries: Vec<&Transaction> =
        ledger.iter().filter(|t| t.bill_id == bill.id).collect();
    entries.sort_by_key(|t| (t.date, t.trans_id));

    let mut rows: Vec<LedgerRow> = entries
        .iter()
        .map(|t| LedgerRow::Payment {
            date: t.date,
            opening_balance: t.principal_for_interest,
            amount_paid: t.amount_paid,
            delayed_days: t.delayed_days,
            interest_charged: t.interest_charged,
            remaining_balance: t.remaining_balance,
        })
        .collect();

    let (summary, closing) = match bill.status {
        BillStatus::Unpaid => {
            rows.push(LedgerRow::Pending {
                since: bill.created_date,
                balance: bill.balance,
                days_overdue: figures.days_overdue,
                live_interest: figures.live_interest,
            });
            (
                BillSummary::Outstanding {
                    principal_balance: bill.balance,
                    interest_due: figures.total_interest_due,
                    gst: figures.gst,
                    total_interest_with_gst: figures.total_interest_with_gst,
                    net_payable: figures.net_payable,
                },
                ClosingNote::Outstanding {
                    net_payable: figures.net_payable,
                },
            )
        }
        BillStatus::FullyPaid => (
            BillSummary::Settled {
                total_interest_charged: figures.total_interest_due,
                gst: figures.gst,
                total_interest_payable: figures.total_interest_with_gst,
            },
            ClosingNote::Settled {
                last_payment: entries.iter().map(|t| t.date).max(),
            },
        ),
    };

    BillSection {
        bill_id: bill.id.clone(),
        status: bill.status,
        due_date: bill.due_date,
        rate: bill.rate,
        summary,
        rows,
        closing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewBill;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_repo() -> BillRepository {
        let mut repo = BillRepository::new();
        // Acme: one bill partially paid, one fully settled
        repo.create_bill(NewBill {
            customer: "Acme Traders".to_string(),
            original_amount: dec("10000"),
            due_date: date(2024, 1, 1),
            created_date: date(2023, 12, 1),
            rate: dec("12"),
            requested_id: Some("100001".to_string()),
        })
        .unwrap();
        repo.create_bill(NewBill {
            customer: "Acme Traders".to_string(),
            original_amount: dec("2000"),
            due_date: date(2024, 1, 15),
            created_date: date(2023, 12, 15),
            rate: dec("18"),
            requested_id: Some("100002".to_string()),
        })
        .unwrap();
        // An unrelated customer whose data must never leak into the report
        repo.create_bill(NewBill {
            customer: "Beta Mills".to_string(),
            original_amount: dec("7000"),
            due_date: date(2024, 1, 1),
            created_date: date(2023, 12, 1),
            rate: dec("10"),
            requested_id: Some("200001".to_string()),
        })
        .unwrap();

        repo.record_payment("100001", date(2024, 2, 1), dec("4000"))
            .unwrap();
        repo.record_payment("200001", date(2024, 2, 1), dec("1000"))
            .unwrap();
        repo.record_payment("100002", date(2024, 2, 1), dec("2000"))
            .unwrap();
        repo
    }

    #[test]
    fn test_statement_header_and_section_count() {
        let repo = seeded_repo();

        let statement = build_statement(&repo, "Acme Traders", date(2024, 3, 1));

        assert_eq!(statement.customer, "Acme Traders");
        assert_eq!(statement.statement_date, date(2024, 3, 1));
        assert_eq!(statement.bills.len(), 2);
    }

    #[test]
    fn test_flat_list_covers_only_the_customer() {
        let repo = seeded_repo();

        let statement = build_statement(&repo, "Acme Traders", date(2024, 3, 1));

        assert_eq!(statement.transactions.len(), 2);
        assert!(statement
            .transactions
            .iter()
            .all(|r| r.bill_id.starts_with("1000")));
        // Ledger insertion order: the 100001 payment was recorded first
        assert_eq!(statement.transactions[0].bill_id, "100001");
        assert_eq!(statement.transactions[1].bill_id, "100002");
        // Rows carry their parent bill's annotations
        assert_eq!(statement.transactions[0].due_date, date(2024, 1, 1));
        assert_eq!(statement.transactions[0].rate, dec("12"));
    }

    #[test]
    fn test_historical_totals_diverge_from_live_summary() {
        let repo = seeded_repo();

        let statement = build_statement(&repo, "Acme Traders", date(2024, 3, 1));

        // Historical: exactly what the two payments crystallized
        let charged = statement.transaction_totals.interest_charged;
        let expected_charged = dec("10000") * dec("12") * dec("31") / dec("36500")
            + dec("2000") * dec("18") * dec("17") / dec("36500");
        assert_eq!(charged, expected_charged);
        assert_eq!(statement.transaction_totals.gst, charged * dec("0.18"));
        assert_eq!(
            statement.transaction_totals.total_payable,
            charged + charged * dec("0.18")
        );

        // Live summary adds the extrapolation on bill 100001's remaining
        // 6000 over its full 60-day overdue span
        let live = dec("6000") * dec("12") * dec("60") / dec("36500");
        assert_eq!(statement.summary.interest_due, charged + live);
        assert!(statement.summary.interest_due > charged);
    }

    #[test]
    fn test_summary_figures_are_consistent() {
        let repo = seeded_repo();

        let statement = build_statement(&repo, "Acme Traders", date(2024, 3, 1));
        let summary = &statement.summary;

        assert_eq!(summary.outstanding_principal, dec("6000"));
        assert_eq!(summary.gst, summary.interest_due * dec("0.18"));
        assert_eq!(
            summary.total_payable_interest,
            summary.interest_due + summary.gst
        );
        assert_eq!(
            summary.net_payable,
            summary.outstanding_principal + summary.interest_due + summary.gst
        );
        assert_eq!(summary.aging.total(), summary.outstanding_principal);
    }

    #[test]
    fn test_unpaid_section_has_pending_row_and_outstanding_summary() {
        let repo = seeded_repo();

        let statement = build_statement(&repo, "Acme Traders", date(2024, 3, 1));
        let section = &statement.bills[0];

        assert_eq!(section.bill_id, "100001");
        assert_eq!(section.status, BillStatus::Unpaid);
        assert!(matches!(section.summary, BillSummary::Outstanding { .. }));
        assert!(matches!(
            section.closing,
            ClosingNote::Outstanding { .. }
        ));

        // One payment row plus the pending placeholder, which mirrors the
        // live figures for the remaining balance
        assert_eq!(section.rows.len(), 2);
        match &section.rows[1] {
            LedgerRow::Pending {
                since,
                balance,
                days_overdue,
                live_interest,
            } => {
                assert_eq!(*since, date(2023, 12, 1));
                assert_eq!(*balance, dec("6000"));
                assert_eq!(*days_overdue, 60);
                assert_eq!(
                    *live_interest,
                    dec("6000") * dec("12") * dec("60") / dec("36500")
                );
            }
            other => panic!("expected pending row, got {:?}", other),
        }
    }

    #[test]
    fn test_settled_section_is_interest_only_without_pending_row() {
        let repo = seeded_repo();

        let statement = build_statement(&repo, "Acme Traders", date(2024, 3, 1));
        let section = &statement.bills[1];

        assert_eq!(section.bill_id, "100002");
        assert_eq!(section.status, BillStatus::FullyPaid);
        assert_eq!(section.rows.len(), 1);
        assert!(section
            .rows
            .iter()
            .all(|r| matches!(r, LedgerRow::Payment { .. })));

        match &section.summary {
            BillSummary::Settled {
                total_interest_charged,
                gst,
                total_interest_payable,
            } => {
                let expected = dec("2000") * dec("18") * dec("17") / dec("36500");
                assert_eq!(*total_interest_charged, expected);
                assert_eq!(*gst, expected * dec("0.18"));
                assert_eq!(*total_interest_payable, expected + expected * dec("0.18"));
            }
            other => panic!("expected settled summary, got {:?}", other),
        }

        assert!(matches!(
            section.closing,
            ClosingNote::Settled {
                last_payment: Some(d)
            } if d == date(2024, 2, 1)
        ));
    }

    #[test]
    fn test_section_rows_are_date_ordered() {
        let mut repo = BillRepository::new();
        repo.create_bill(NewBill {
            customer: "Acme Traders".to_string(),
            original_amount: dec("10000"),
            due_date: date(2024, 1, 1),
            created_date: date(2023, 12, 1),
            rate: dec("12"),
            requested_id: Some("100001".to_string()),
        })
        .unwrap();
        // Recorded out of chronological order
        repo.record_payment("100001", date(2024, 3, 1), dec("1000"))
            .unwrap();
        repo.record_payment("100001", date(2024, 2, 1), dec("1000"))
            .unwrap();

        let statement = build_statement(&repo, "Acme Traders", date(2024, 4, 1));
        let rows = &statement.bills[0].rows;

        match (&rows[0], &rows[1]) {
            (LedgerRow::Payment { date: first, .. }, LedgerRow::Payment { date: second, .. }) => {
                assert!(first < second);
            }
            other => panic!("expected two payment rows, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_customer_yields_empty_statement() {
        let repo = seeded_repo();

        let statement = build_statement(&repo, "Nobody", date(2024, 3, 1));

        assert!(statement.bills.is_empty());
        assert!(statement.transactions.is_empty());
        assert_eq!(statement.summary.net_payable, Decimal::ZERO);
        assert_eq!(statement.transaction_totals.total_payable, Decimal::ZERO);
    }
}
