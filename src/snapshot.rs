//! Defines [LedgerSnapshot], the immutable point-in-time view of the ledger.

use crate::transaction::Transaction;

/// An immutable view of the ledger: the transaction sequence as last fetched
/// from the remote collection plus the balance derived from it.
///
/// The balance is always computed by a full reduction over the transactions,
/// never patched incrementally, so the two fields cannot drift apart. The
/// transaction order is the arrival order from the remote store, which makes
/// no ordering promises of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    transactions: Vec<Transaction>,
    balance: f64,
}

impl LedgerSnapshot {
    /// Build a snapshot from `transactions`, deriving the balance as the sum
    /// of income amounts minus the sum of spend amounts.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let balance = transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum();

        Self {
            transactions,
            balance,
        }
    }

    /// An empty ledger with a balance of zero.
    pub fn empty() -> Self {
        Self::from_transactions(Vec::new())
    }

    /// The transactions in this snapshot, in arrival order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The signed sum over all transactions in this snapshot.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The transactions whose reason contains `query`, compared
    /// case-insensitively, in their existing order.
    ///
    /// An empty query matches every transaction.
    pub fn filter_by_reason(&self, query: &str) -> Vec<Transaction> {
        let query = query.to_lowercase();

        self.transactions
            .iter()
            .filter(|transaction| transaction.reason.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod ledger_snapshot_tests {
    use crate::transaction::{Transaction, TransactionKind};

    use super::LedgerSnapshot;

    fn transaction(id: &str, reason: &str, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: id.to_owned(),
            reason: reason.to_owned(),
            amount,
            kind,
        }
    }

    #[test]
    fn empty_snapshot_has_zero_balance() {
        let snapshot = LedgerSnapshot::empty();

        assert!(snapshot.transactions().is_empty());
        assert_eq!(snapshot.balance(), 0.0);
    }

    #[test]
    fn balance_is_income_minus_spend() {
        let snapshot = LedgerSnapshot::from_transactions(vec![
            transaction("a", "Salary", 1000.0, TransactionKind::Income),
            transaction("b", "Groceries", 150.5, TransactionKind::Spend),
            transaction("c", "Refund", 20.0, TransactionKind::Income),
        ]);

        assert_eq!(snapshot.balance(), 1000.0 - 150.5 + 20.0);
    }

    #[test]
    fn balance_is_independent_of_arrival_order() {
        let forwards = vec![
            transaction("a", "Salary", 1000.0, TransactionKind::Income),
            transaction("b", "Rent", 450.0, TransactionKind::Spend),
            transaction("c", "Power", 89.9, TransactionKind::Spend),
        ];
        let mut backwards = forwards.clone();
        backwards.reverse();

        assert_eq!(
            LedgerSnapshot::from_transactions(forwards).balance(),
            LedgerSnapshot::from_transactions(backwards).balance()
        );
    }

    #[test]
    fn filter_matches_case_insensitive_substrings() {
        let snapshot = LedgerSnapshot::from_transactions(vec![
            transaction("a", "Salary", 1000.0, TransactionKind::Income),
            transaction("b", "Groceries", 150.5, TransactionKind::Spend),
            transaction("c", "Extra salary", 200.0, TransactionKind::Income),
        ]);

        let matches = snapshot.filter_by_reason("SAL");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].reason, "Salary");
        assert_eq!(matches[1].reason, "Extra salary");
    }

    #[test]
    fn filter_with_empty_query_returns_everything_in_order() {
        let transactions = vec![
            transaction("a", "Salary", 1000.0, TransactionKind::Income),
            transaction("b", "Groceries", 150.5, TransactionKind::Spend),
        ];
        let snapshot = LedgerSnapshot::from_transactions(transactions.clone());

        assert_eq!(snapshot.filter_by_reason(""), transactions);
    }

    #[test]
    fn filter_does_not_mutate_the_snapshot() {
        let snapshot = LedgerSnapshot::from_transactions(vec![
            transaction("a", "Salary", 1000.0, TransactionKind::Income),
            transaction("b", "Groceries", 150.5, TransactionKind::Spend),
        ]);
        let before = snapshot.clone();

        snapshot.filter_by_reason("groc");

        assert_eq!(snapshot, before);
    }
}
