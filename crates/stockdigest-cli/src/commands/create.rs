use serde::Serialize;
use serde_json::Value;
use stockdigest_core::{CreateOutcome, Identity, UserRecordService};

use crate::error::CliError;

#[derive(Debug, Serialize)]
struct CreateResponseData<'a> {
    user: &'a Identity,
    created: bool,
}

pub async fn run(id: &Identity, service: &UserRecordService) -> Result<Value, CliError> {
    let outcome = service.create(id).await?;
    let data = CreateResponseData {
        user: id,
        created: outcome == CreateOutcome::Created,
    };
    Ok(serde_json::to_value(data)?)
}
