use thiserror::Error;

use crate::http_client::HttpError;

/// Input validation failures for domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("identity must not be empty")]
    EmptyIdentity,

    #[error("identity is {len} characters long; maximum is {max}")]
    IdentityTooLong { len: usize, max: usize },

    #[error("identity contains unsupported character '{ch}' at index {index}")]
    IdentityInvalidChar { ch: char, index: usize },

    #[error("symbol must not be empty")]
    EmptySymbol,

    #[error("symbol is {len} characters long; maximum is {max}")]
    SymbolTooLong { len: usize, max: usize },

    #[error("symbol must start with a letter, found '{ch}'")]
    SymbolInvalidStart { ch: char },

    #[error("symbol contains unsupported character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("unknown time period '{0}'; expected 'today' or 'the past week'")]
    UnknownTimePeriod(String),
}

/// Failures while assembling the database configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration value '{key}'")]
    Missing { key: &'static str },

    #[error("configuration value '{key}' must be a plain identifier, got '{value}'")]
    InvalidIdentifier { key: &'static str, value: String },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failures surfaced by the request gateway and the record service.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("database rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("database reported an error: {message}")]
    Remote { message: String },

    #[error("failed to encode or decode database payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unexpected database response: expected {expected}, found {found}")]
    UnexpectedResponse {
        expected: &'static str,
        found: &'static str,
    },

    #[error("stored record is invalid: {0}")]
    InvalidRecord(String),
}

impl DatabaseError {
    /// HTTP status of a rejected request, when there was one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
