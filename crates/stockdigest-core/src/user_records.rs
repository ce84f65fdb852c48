//! Get-or-create and overwrite semantics for a user's preferences row.
//!
//! Each call is one stateless exchange through the [`DatabaseGateway`];
//! `fetch_or_create` adds a second (the insert) only when no row exists.
//! Failures are returned unchanged and never retried.

use serde_json::Value;
use tracing::{info, warn};

use crate::gateway::DatabaseGateway;
use crate::operation::RemoteOperation;
use crate::response::{strip_server_timestamps, Row};
use crate::{DatabaseError, Identity, UserRecord};

/// Result of inserting a default record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The store already had a row for the identity and skipped the insert.
    /// Happens when two first-time fetches race.
    AlreadyExists,
}

#[derive(Debug, Clone)]
pub struct UserRecordService {
    gateway: DatabaseGateway,
}

impl UserRecordService {
    pub fn new(gateway: DatabaseGateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &DatabaseGateway {
        &self.gateway
    }

    /// Returns the stored record for `id`, creating the default one first if
    /// none exists.
    ///
    /// The default returned after a create is synthesized, not re-read.
    /// If several rows share the identity, the first row returned wins.
    pub async fn fetch_or_create(&self, id: &Identity) -> Result<UserRecord, DatabaseError> {
        let operation = RemoteOperation::select_user(self.gateway.config(), id);
        let rows = self.gateway.send(&operation).await?.into_records()?;

        if rows.len() > 1 {
            warn!(identity = %id, matches = rows.len(), "multiple records share one identity; using the first");
        }

        match rows.into_iter().next() {
            Some(row) => decode_record(row),
            None => {
                self.create(id).await?;
                Ok(UserRecord::new_default(id.clone()))
            }
        }
    }

    /// Inserts `{id, today, []}`.
    pub async fn create(&self, id: &Identity) -> Result<CreateOutcome, DatabaseError> {
        let record = UserRecord::new_default(id.clone());
        let operation = RemoteOperation::insert(self.gateway.config(), vec![record]);
        let ack = self.gateway.send(&operation).await?.into_acknowledgement()?;

        if ack.skipped(id) {
            warn!(identity = %id, "record already existed; insert skipped");
            return Ok(CreateOutcome::AlreadyExists);
        }

        info!(identity = %id, "created default user record");
        Ok(CreateOutcome::Created)
    }

    /// Overwrites the stored row matching `record.id` with `record`.
    pub async fn save(&self, record: &UserRecord) -> Result<(), DatabaseError> {
        let operation = RemoteOperation::update(self.gateway.config(), vec![record.clone()]);
        self.gateway.send(&operation).await?.into_acknowledgement()?;
        Ok(())
    }
}

fn decode_record(mut row: Row) -> Result<UserRecord, DatabaseError> {
    strip_server_timestamps(&mut row);
    serde_json::from_value(Value::Object(row))
        .map_err(|error| DatabaseError::InvalidRecord(error.to_string()))
}
