//! Defines the core transaction types: [Transaction], [TransactionKind] and
//! the validated [NewTransaction] input type.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Whether a transaction brings money in or takes money out.
///
/// The amount of a [Transaction] is always a positive magnitude; its sign in
/// the ledger balance comes solely from this kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money earned, counts towards the balance.
    Income,
    /// Money spent, counts against the balance.
    Spend,
}

impl TransactionKind {
    /// The canonical string for this kind, as written on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Spend => "Spend",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "Income" => Ok(TransactionKind::Income),
            "Spend" => Ok(TransactionKind::Spend),
            other => Err(ValidationError::UnknownKind(other.to_owned())),
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An event where money was either earned or spent.
///
/// Transactions are owned by the remote collection: their IDs are assigned by
/// the remote store at creation time and the local mirror never fabricates
/// one. To submit a new transaction, use [NewTransaction::build] and pass it
/// to the ledger store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The opaque ID assigned by the remote store when the transaction was
    /// created. Stable, unique, never reused.
    pub id: String,
    /// A text description of what the transaction was for.
    pub reason: String,
    /// The amount of money earned or spent. Always greater than zero.
    pub amount: f64,
    /// Whether the money came in or went out.
    pub kind: TransactionKind,
}

impl Transaction {
    /// The amount of this transaction with the sign implied by its kind:
    /// positive for income, negative for spending.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Spend => -self.amount,
        }
    }
}

/// A validated transaction that has not been persisted yet.
///
/// Construction is the validation gate: a `NewTransaction` can only exist if
/// its reason is non-empty and its amount is a finite number greater than
/// zero, so everything downstream of [NewTransaction::build] can rely on
/// those invariants without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    reason: String,
    amount: f64,
    kind: TransactionKind,
}

impl NewTransaction {
    /// Validate `reason`, `amount` and `kind` into a [NewTransaction].
    ///
    /// # Errors
    /// Returns a [ValidationError] if `reason` is empty or whitespace-only,
    /// or if `amount` is not a finite number greater than zero.
    pub fn build(
        reason: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> Result<Self, ValidationError> {
        if reason.trim().is_empty() {
            return Err(ValidationError::EmptyReason);
        }

        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount(amount));
        }

        Ok(Self {
            reason: reason.to_owned(),
            amount,
            kind,
        })
    }

    /// A text description of what the transaction is for.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The amount of money earned or spent.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Whether the money comes in or goes out.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }
}

#[cfg(test)]
mod transaction_kind_tests {
    use std::str::FromStr;

    use crate::ValidationError;

    use super::TransactionKind;

    #[test]
    fn parses_canonical_strings() {
        assert_eq!(
            TransactionKind::from_str("Income"),
            Ok(TransactionKind::Income)
        );
        assert_eq!(
            TransactionKind::from_str("Spend"),
            Ok(TransactionKind::Spend)
        );
    }

    #[test]
    fn rejects_unknown_strings() {
        for text in ["income", "SPEND", "Expense", ""] {
            assert_eq!(
                TransactionKind::from_str(text),
                Err(ValidationError::UnknownKind(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn round_trips_through_as_str() {
        for kind in [TransactionKind::Income, TransactionKind::Spend] {
            assert_eq!(TransactionKind::from_str(kind.as_str()), Ok(kind));
        }
    }
}

#[cfg(test)]
mod new_transaction_tests {
    use crate::ValidationError;

    use super::{NewTransaction, TransactionKind};

    #[test]
    fn build_succeeds_on_valid_input() {
        let new_transaction =
            NewTransaction::build("Salary", 1000.0, TransactionKind::Income).unwrap();

        assert_eq!(new_transaction.reason(), "Salary");
        assert_eq!(new_transaction.amount(), 1000.0);
        assert_eq!(new_transaction.kind(), TransactionKind::Income);
    }

    #[test]
    fn build_fails_on_empty_reason() {
        for reason in ["", "   ", "\t\n"] {
            assert_eq!(
                NewTransaction::build(reason, 10.0, TransactionKind::Spend),
                Err(ValidationError::EmptyReason),
                "want reason {reason:?} to be rejected"
            );
        }
    }

    #[test]
    fn build_fails_on_non_positive_or_non_finite_amount() {
        for amount in [0.0, -1.0, -1000.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = NewTransaction::build("Groceries", amount, TransactionKind::Spend);

            assert!(
                matches!(result, Err(ValidationError::InvalidAmount(_))),
                "want amount {amount} to be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn signed_amount_follows_kind() {
        let income = super::Transaction {
            id: "a".to_owned(),
            reason: "Salary".to_owned(),
            amount: 1000.0,
            kind: TransactionKind::Income,
        };
        let spend = super::Transaction {
            id: "b".to_owned(),
            reason: "Rent".to_owned(),
            amount: 450.0,
            kind: TransactionKind::Spend,
        };

        assert_eq!(income.signed_amount(), 1000.0);
        assert_eq!(spend.signed_amount(), -450.0);
    }
}
