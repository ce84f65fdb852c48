use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stockdigest_core::ValidationError),

    #[error("configuration error: {0}")]
    Config(#[from] stockdigest_core::ConfigError),

    #[error(transparent)]
    Database(#[from] stockdigest_core::DatabaseError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Config(_) => 3,
            Self::Database(_) => 4,
            Self::Serialization(_) => 10,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use stockdigest_core::{ConfigError, DatabaseError, ValidationError};

    use super::*;

    #[test]
    fn exit_codes_separate_input_config_and_remote_failures() {
        assert_eq!(CliError::from(ValidationError::EmptyIdentity).exit_code(), 2);
        assert_eq!(
            CliError::from(ConfigError::Missing { key: "host" }).exit_code(),
            3
        );
        assert_eq!(
            CliError::from(DatabaseError::Rejected {
                status: 403,
                body: String::from("forbidden"),
            })
            .exit_code(),
            4
        );
    }
}
