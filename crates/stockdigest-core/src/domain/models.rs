use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Identity, ValidationError};

/// Reporting window for a user's digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePeriod {
    #[default]
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "the past week")]
    PastWeek,
}

impl TimePeriod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::PastWeek => "the past week",
        }
    }
}

impl Display for TimePeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = ValidationError;

    /// Accepts the stored values plus the short forms used on the command line.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "today" | "day" => Ok(Self::Today),
            "the past week" | "past week" | "past-week" | "week" => Ok(Self::PastWeek),
            _ => Err(ValidationError::UnknownTimePeriod(value.to_owned())),
        }
    }
}

/// One row of the preferences table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Identity,
    pub timeperiod: TimePeriod,
    /// Display order is kept as stored.
    pub symbols: Vec<String>,
}

impl UserRecord {
    /// The record written the first time an identity is seen.
    pub fn new_default(id: Identity) -> Self {
        Self {
            id,
            timeperiod: TimePeriod::Today,
            symbols: Vec::new(),
        }
    }
}

/// Presentation view of a signed-in user: profile fields from the identity
/// provider merged with the stored preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user: Identity,
    pub email: Option<String>,
    pub time_period: TimePeriod,
    pub symbols: Vec<String>,
}

impl UserProfile {
    pub fn from_record(record: UserRecord, email: Option<String>) -> Self {
        Self {
            user: record.id,
            email,
            time_period: record.timeperiod,
            symbols: record.symbols,
        }
    }
}
