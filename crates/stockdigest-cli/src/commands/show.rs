use serde_json::Value;
use stockdigest_core::{Identity, UserProfile, UserRecordService};

use crate::error::CliError;

pub async fn run(
    id: &Identity,
    service: &UserRecordService,
    email: Option<String>,
) -> Result<Value, CliError> {
    let record = service.fetch_or_create(id).await?;
    Ok(serde_json::to_value(UserProfile::from_record(record, email))?)
}
