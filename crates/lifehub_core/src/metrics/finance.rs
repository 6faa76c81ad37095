//! Financial aggregate calculator.
//!
//! # Invariants
//! - Amounts that do not parse to a finite number count as 0 and are
//!   reported back by record id; NaN never reaches a total.

use crate::model::finance::{Finance, FinanceKind};
use crate::repo::EntryId;
use log::warn;

/// Income/expense/balance totals over a finance collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinanceTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    /// Ids of records whose amount was not a finite number and was
    /// treated as 0.
    pub invalid: Vec<EntryId>,
}

/// Sums amounts per ledger side and derives the balance.
pub fn finance_totals(entries: &[Finance]) -> FinanceTotals {
    let mut totals = FinanceTotals::default();
    for entry in entries {
        let amount = match entry.amount.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => amount,
            _ => {
                warn!(
                    "event=invalid_amount module=metrics kind=finance id={}",
                    entry.id
                );
                totals.invalid.push(entry.id);
                0.0
            }
        };
        match entry.kind {
            FinanceKind::Income => totals.income += amount,
            FinanceKind::Expense => totals.expense += amount,
        }
    }
    totals.balance = totals.income - totals.expense;
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(amount: &str, kind: FinanceKind) -> Finance {
        Finance {
            id: Uuid::new_v4(),
            description: "entry".to_string(),
            amount: amount.to_string(),
            category: "general".to_string(),
            kind,
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn sums_per_side_and_balances() {
        let entries = vec![
            entry("500", FinanceKind::Income),
            entry("200", FinanceKind::Expense),
            entry("50", FinanceKind::Expense),
        ];
        let totals = finance_totals(&entries);
        assert_eq!(totals.income, 500.0);
        assert_eq!(totals.expense, 250.0);
        assert_eq!(totals.balance, 250.0);
        assert!(totals.invalid.is_empty());
    }

    #[test]
    fn unparseable_amounts_count_as_zero_and_are_flagged() {
        let broken = entry("about fifty", FinanceKind::Expense);
        let broken_id = broken.id;
        let entries = vec![entry("100", FinanceKind::Income), broken];

        let totals = finance_totals(&entries);
        assert_eq!(totals.income, 100.0);
        assert_eq!(totals.expense, 0.0);
        assert_eq!(totals.balance, 100.0);
        assert_eq!(totals.invalid, vec![broken_id]);
    }

    #[test]
    fn empty_collection_totals_to_zero() {
        assert_eq!(finance_totals(&[]), FinanceTotals::default());
    }
}
