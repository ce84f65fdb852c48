//! Database configuration, read once at startup.
//!
//! Values come from an optional TOML file with a `[database]` table, overlaid
//! by the `HARPERDB_*` environment variables:
//!
//! ```toml
//! [database]
//! host = "https://stocks-org.harperdbcloud.com"
//! token = "dXNlcjpwYXNz"
//! schema = "digest"
//! table = "users"
//! ```

use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const HOST_ENV: &str = "HARPERDB_HOST";
pub const TOKEN_ENV: &str = "HARPERDB_TOKEN";
pub const SCHEMA_ENV: &str = "HARPERDB_SCHEMA";
pub const TABLE_ENV: &str = "HARPERDB_TABLE";

/// Immutable connection settings handed to the gateway.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    host: String,
    token: String,
    schema: String,
    table: String,
}

impl DatabaseConfig {
    pub fn new(
        host: impl Into<String>,
        token: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let host = required("host", host.into())?;
        let token = required("token", token.into())?;
        let schema = identifier("schema", required("schema", schema.into())?)?;
        let table = identifier("table", required("table", table.into())?)?;

        Ok(Self {
            host,
            token,
            schema,
            table,
        })
    }

    /// Reads all four values from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        DatabaseSettings::default()
            .overlay(|key| std::env::var(key).ok())
            .into_config()
    }

    /// Reads the optional file, then lets the environment override it.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match path {
            Some(path) => DatabaseSettings::from_file(path)?,
            None => DatabaseSettings::default(),
        };
        settings
            .overlay(|key| std::env::var(key).ok())
            .into_config()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// `schema.table`, as written in SQL text.
    pub fn qualified_table(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }
}

impl Debug for DatabaseConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .field("schema", &self.schema)
            .field("table", &self.table)
            .finish()
    }
}

/// Partially filled settings, before required keys are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    pub host: Option<String>,
    pub token: Option<String>,
    pub schema: Option<String>,
    pub table: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    database: DatabaseSettings,
}

impl DatabaseSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.database)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Replaces each value for which `lookup` yields a non-empty string.
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(value) = pick(HOST_ENV) {
            self.host = Some(value);
        }
        if let Some(value) = pick(TOKEN_ENV) {
            self.token = Some(value);
        }
        if let Some(value) = pick(SCHEMA_ENV) {
            self.schema = Some(value);
        }
        if let Some(value) = pick(TABLE_ENV) {
            self.table = Some(value);
        }
        self
    }

    pub fn into_config(self) -> Result<DatabaseConfig, ConfigError> {
        DatabaseConfig::new(
            self.host.ok_or(ConfigError::Missing { key: "host" })?,
            self.token.ok_or(ConfigError::Missing { key: "token" })?,
            self.schema.ok_or(ConfigError::Missing { key: "schema" })?,
            self.table.ok_or(ConfigError::Missing { key: "table" })?,
        )
    }
}

fn required(key: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Missing { key });
    }
    Ok(trimmed.to_owned())
}

fn identifier(key: &'static str, value: String) -> Result<String, ConfigError> {
    let valid = value
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if !valid {
        return Err(ConfigError::InvalidIdentifier { key, value });
    }
    Ok(value)
}
