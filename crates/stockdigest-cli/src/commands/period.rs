use serde_json::Value;
use stockdigest_core::preferences::set_time_period;
use stockdigest_core::{Identity, TimePeriod, UserProfile, UserRecordService};

use crate::error::CliError;

pub async fn run(
    id: &Identity,
    period: TimePeriod,
    service: &UserRecordService,
    email: Option<String>,
) -> Result<Value, CliError> {
    let mut record = service.fetch_or_create(id).await?;
    if record.timeperiod != period {
        set_time_period(&mut record, period);
        service.save(&record).await?;
    }
    Ok(serde_json::to_value(UserProfile::from_record(record, email))?)
}
