//! Defines the crate level error types.

/// Errors caused by malformed caller input.
///
/// These are raised before any network access and are always recoverable by
/// the caller correcting its input; they are never a system fault.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// An empty or whitespace-only string was used as a transaction reason.
    #[error("the transaction reason must not be empty")]
    EmptyReason,

    /// The transaction amount was zero, negative, NaN or infinite.
    ///
    /// Amounts are magnitudes; direction is carried by the transaction kind,
    /// so only finite values greater than zero are accepted.
    #[error("{0} is not a valid transaction amount, expected a finite amount greater than zero")]
    InvalidAmount(f64),

    /// A string that is neither "Income" nor "Spend" was used as a
    /// transaction kind.
    #[error("\"{0}\" is not a valid transaction kind, expected \"Income\" or \"Spend\"")]
    UnknownKind(String),
}

/// The errors that may occur in the application.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The caller provided invalid input for a new transaction.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote ledger collection could not be read.
    ///
    /// Covers transport failures, non-success response statuses and malformed
    /// payloads. The inner string should only be logged for debugging; the
    /// prior snapshot, if any, is left untouched and the caller decides
    /// whether to retry.
    #[error("the remote ledger is unavailable: {0}")]
    RemoteUnavailable(String),

    /// A new transaction could not be persisted to the remote collection.
    ///
    /// The attempted transaction is not added to the local mirror and no
    /// partial state is retained.
    #[error("the transaction could not be persisted: {0}")]
    Persistence(String),
}
