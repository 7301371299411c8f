//! Defines the gateway trait for the remote ledger collection and its HTTP
//! implementation.
//!
//! The gateway is the only part of the crate that knows the wire format. The
//! remote store is a document collection reachable over plain request and
//! response calls: a `GET` of the collection returns a JSON object mapping
//! opaque IDs to record payloads (or `null` when the collection is empty),
//! and a `POST` of `{reason, amount, type}` creates a record and lets the
//! store assign a fresh ID. Note the wire field is named `type`; it maps to
//! the domain field `kind`.

use std::str::FromStr;

use serde::Serialize;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionKind},
};

/// Handles reading and writing transactions in the remote collection.
///
/// Implementations perform no retries and no caching; surfacing each failure
/// to the caller is the whole contract. The ledger store layers its
/// consistency strategy on top.
pub trait LedgerGateway {
    /// Fetch every transaction in the remote collection.
    ///
    /// The order of the returned sequence is whatever order the remote store
    /// enumerates its records in. It is not stable and not chronological, and
    /// no consumer may assume otherwise.
    ///
    /// # Errors
    /// Returns [Error::RemoteUnavailable] on transport failure, a non-success
    /// response or a malformed payload.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Transaction>, Error>>;

    /// Write a new record to the remote collection.
    ///
    /// The remote store assigns the record's ID; it is deliberately not
    /// returned here. Callers that need it must re-fetch.
    ///
    /// # Errors
    /// Returns [Error::RemoteUnavailable] on transport failure or a
    /// non-success response.
    fn create(&self, new_transaction: &NewTransaction) -> impl Future<Output = Result<(), Error>>;
}

/// A [LedgerGateway] that talks to a JSON document store over HTTP.
///
/// The collection is addressed as `{base_url}/{collection}.json`, the
/// convention used by hosted realtime document databases.
#[derive(Debug, Clone)]
pub struct HttpLedgerGateway {
    client: reqwest::Client,
    collection_url: String,
}

impl HttpLedgerGateway {
    /// Create a gateway for the collection named `collection` in the document
    /// store at `base_url`.
    pub fn new(client: reqwest::Client, base_url: &str, collection: &str) -> Self {
        let collection_url = format!("{}/{collection}.json", base_url.trim_end_matches('/'));

        Self {
            client,
            collection_url,
        }
    }
}

impl LedgerGateway for HttpLedgerGateway {
    async fn fetch_all(&self) -> Result<Vec<Transaction>, Error> {
        let response = self
            .client
            .get(&self.collection_url)
            .send()
            .await
            .map_err(|error| Error::RemoteUnavailable(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteUnavailable(format!(
                "the collection read returned status {status}"
            )));
        }

        // The store returns `null` rather than `{}` for an empty collection.
        let records: Option<serde_json::Map<String, serde_json::Value>> = response
            .json()
            .await
            .map_err(|error| Error::RemoteUnavailable(error.to_string()))?;

        records
            .unwrap_or_default()
            .into_iter()
            .map(|(id, payload)| map_wire_record(id, payload))
            .collect()
    }

    async fn create(&self, new_transaction: &NewTransaction) -> Result<(), Error> {
        let payload = WireNewRecord {
            reason: new_transaction.reason(),
            amount: new_transaction.amount(),
            kind: new_transaction.kind().as_str(),
        };

        let response = self
            .client
            .post(&self.collection_url)
            .json(&payload)
            .send()
            .await
            .map_err(|error| Error::RemoteUnavailable(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteUnavailable(format!(
                "the collection write returned status {status}"
            )));
        }

        Ok(())
    }
}

/// The payload sent when creating a record.
#[derive(Debug, Serialize)]
struct WireNewRecord<'a> {
    reason: &'a str,
    amount: f64,
    #[serde(rename = "type")]
    kind: &'a str,
}

/// Map one `(id, payload)` entry of the collection object to a [Transaction].
///
/// Every field is validated here. The store offers no schema guarantees, so a
/// record with a missing field, an empty reason, a non-numeric or
/// non-positive amount, or an unrecognised kind is treated as a malformed
/// payload and fails the whole fetch.
fn map_wire_record(id: String, payload: serde_json::Value) -> Result<Transaction, Error> {
    let serde_json::Value::Object(record) = payload else {
        return Err(Error::RemoteUnavailable(format!(
            "record {id} is not an object"
        )));
    };

    let Some(serde_json::Value::String(reason)) = record.get("reason") else {
        return Err(Error::RemoteUnavailable(format!(
            "record {id} is missing a text reason"
        )));
    };
    if reason.trim().is_empty() {
        return Err(Error::RemoteUnavailable(format!(
            "record {id} has an empty reason"
        )));
    }

    let amount = record
        .get("amount")
        .and_then(wire_amount_to_f64)
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or_else(|| {
            tracing::warn!("rejecting record {id}: bad amount {:?}", record.get("amount"));
            Error::RemoteUnavailable(format!("record {id} has an invalid amount"))
        })?;

    let Some(serde_json::Value::String(kind)) = record.get("type") else {
        return Err(Error::RemoteUnavailable(format!(
            "record {id} is missing a type"
        )));
    };
    let kind = TransactionKind::from_str(kind)
        .map_err(|error| Error::RemoteUnavailable(format!("record {id}: {error}")))?;

    Ok(Transaction {
        id,
        reason: reason.clone(),
        amount,
        kind,
    })
}

/// Coerce a wire amount to a number. The store holds amounts written by
/// several client versions, some of which sent numbers as strings, so both
/// forms are accepted.
fn wire_amount_to_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
