use serde_json::Value;
use stockdigest_core::preferences::{track_symbols, untrack_symbols};
use stockdigest_core::{Identity, Symbol, UserProfile, UserRecordService};
use tracing::info;

use crate::error::CliError;

pub async fn track(
    id: &Identity,
    symbols: &[Symbol],
    service: &UserRecordService,
    email: Option<String>,
) -> Result<Value, CliError> {
    let mut record = service.fetch_or_create(id).await?;
    let added = track_symbols(&mut record, symbols);
    info!(identity = %id, added, "tracking symbols");
    if added > 0 {
        service.save(&record).await?;
    }
    Ok(serde_json::to_value(UserProfile::from_record(record, email))?)
}

pub async fn untrack(
    id: &Identity,
    symbols: &[Symbol],
    service: &UserRecordService,
    email: Option<String>,
) -> Result<Value, CliError> {
    let mut record = service.fetch_or_create(id).await?;
    let removed = untrack_symbols(&mut record, symbols);
    info!(identity = %id, removed, "untracking symbols");
    if removed > 0 {
        service.save(&record).await?;
    }
    Ok(serde_json::to_value(UserProfile::from_record(record, email))?)
}
