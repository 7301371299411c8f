//! Defines [LedgerStore], the authoritative in-process view of the ledger.

use crate::{
    Error,
    gateway::LedgerGateway,
    snapshot::LedgerSnapshot,
    transaction::{NewTransaction, Transaction, TransactionKind},
};

/// The single authoritative in-process view of the ledger.
///
/// All mutation and read access flows through this type. It keeps a local
/// mirror of the remote collection as a [LedgerSnapshot] and guarantees the
/// mirror and its balance are always mutually consistent: the snapshot is
/// only ever replaced whole, after a successful full fetch.
///
/// The store starts out uninitialized (no snapshot, [LedgerStore::search]
/// returns nothing) and becomes ready on the first successful
/// [LedgerStore::initialize]. There is no teardown; the store lives as long
/// as the owning session.
///
/// The store holds no locking. Callers must serialize operations on one
/// instance, e.g. by disabling their add action while an add is in flight.
#[derive(Debug)]
pub struct LedgerStore<G: LedgerGateway> {
    gateway: G,
    snapshot: Option<LedgerSnapshot>,
}

impl<G: LedgerGateway> LedgerStore<G> {
    /// Create an uninitialized store that reads and writes transactions
    /// through `gateway`.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            snapshot: None,
        }
    }

    /// Fetch the full transaction set from the remote collection, recompute
    /// the balance and publish the result as the current snapshot.
    ///
    /// Safe to call again at any time to force a refresh.
    ///
    /// # Errors
    /// Returns [Error::RemoteUnavailable] if the fetch fails. The prior
    /// snapshot, if any, is left unchanged; no partial snapshot is ever
    /// published.
    pub async fn initialize(&mut self) -> Result<LedgerSnapshot, Error> {
        let transactions = self.gateway.fetch_all().await?;
        let snapshot = LedgerSnapshot::from_transactions(transactions);

        tracing::debug!(
            "refreshed ledger mirror: {} transactions, balance {:.2}",
            snapshot.transactions().len(),
            snapshot.balance()
        );

        self.snapshot = Some(snapshot.clone());

        Ok(snapshot)
    }

    /// Validate and persist a new transaction, then refresh the snapshot.
    ///
    /// After the write succeeds the store does not patch the balance locally.
    /// The remote collection may have concurrent writers and makes no
    /// transactional promises, so the store re-fetches the full set and
    /// recomputes, keeping the published balance equal to a full reduction
    /// over the authoritative remote set.
    ///
    /// # Errors
    /// - [Error::Validation] if `reason` is empty or whitespace-only, or
    ///   `amount` is not a finite number greater than zero. No network call
    ///   is made.
    /// - [Error::Persistence] if the write fails. The local snapshot is left
    ///   unchanged.
    /// - [Error::RemoteUnavailable] if the write succeeded but the subsequent
    ///   refresh failed; the prior snapshot remains in place and a later
    ///   [LedgerStore::initialize] will pick the new record up.
    pub async fn add_transaction(
        &mut self,
        reason: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> Result<LedgerSnapshot, Error> {
        let new_transaction = NewTransaction::build(reason, amount, kind)?;

        self.gateway
            .create(&new_transaction)
            .await
            .map_err(|error| match error {
                Error::RemoteUnavailable(detail) => Error::Persistence(detail),
                other => other,
            })?;

        self.initialize().await
    }

    /// The current transactions whose reason contains `query`, compared
    /// case-insensitively, in mirror order.
    ///
    /// An empty query returns the full sequence. An uninitialized store
    /// returns nothing. Operates purely on the cached snapshot and never
    /// touches the network.
    pub fn search(&self, query: &str) -> Vec<Transaction> {
        match &self.snapshot {
            Some(snapshot) => snapshot.filter_by_reason(query),
            None => Vec::new(),
        }
    }

    /// The current snapshot, or `None` if the store is uninitialized.
    pub fn snapshot(&self) -> Option<&LedgerSnapshot> {
        self.snapshot.as_ref()
    }

    /// The current balance, or `None` if the store is uninitialized.
    pub fn balance(&self) -> Option<f64> {
        self.snapshot.as_ref().map(LedgerSnapshot::balance)
    }
}
