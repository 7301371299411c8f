//! Pocketledger keeps a personal ledger of labeled income and spending,
//! persisted in a remote JSON document store.
//!
//! The library maintains a local mirror of the remote collection and a
//! running balance derived from it. [LedgerStore] owns the mirror and all
//! access to it; [LedgerGateway] (implemented over HTTP by
//! [HttpLedgerGateway]) is the only component that knows the wire format.
//! The mirror is a read-through cache: the remote collection is the source
//! of truth, and after every successful write the store re-fetches the full
//! set rather than trusting a locally patched balance.

#![warn(missing_docs)]

mod error;
mod gateway;
mod snapshot;
mod store;
mod transaction;

pub use error::{Error, ValidationError};
pub use gateway::{HttpLedgerGateway, LedgerGateway};
pub use snapshot::LedgerSnapshot;
pub use store::LedgerStore;
pub use transaction::{NewTransaction, Transaction, TransactionKind};
