//! Request payloads understood by the database endpoint.
//!
//! Every payload carries an `operation` tag:
//!
//! ```json
//! {"operation": "sql", "sql": "SELECT * FROM digest.users WHERE id = 'u1'"}
//! {"operation": "insert", "schema": "digest", "table": "users", "records": [...]}
//! {"operation": "update", "schema": "digest", "table": "users", "records": [...]}
//! ```

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{DatabaseConfig, Identity, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum RemoteOperation {
    Sql {
        sql: String,
    },
    Insert {
        schema: String,
        table: String,
        records: Vec<UserRecord>,
    },
    Update {
        schema: String,
        table: String,
        records: Vec<UserRecord>,
    },
}

impl RemoteOperation {
    /// Selects every column of the configured table for one identity.
    pub fn select_user(config: &DatabaseConfig, id: &Identity) -> Self {
        Self::Sql {
            sql: format!(
                "SELECT * FROM {} WHERE id = {}",
                config.qualified_table(),
                sql_string_literal(id.as_str())
            ),
        }
    }

    pub fn insert(config: &DatabaseConfig, records: Vec<UserRecord>) -> Self {
        Self::Insert {
            schema: config.schema().to_owned(),
            table: config.table().to_owned(),
            records,
        }
    }

    pub fn update(config: &DatabaseConfig, records: Vec<UserRecord>) -> Self {
        Self::Update {
            schema: config.schema().to_owned(),
            table: config.table().to_owned(),
            records,
        }
    }

    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Sql { .. } => OperationKind::Sql,
            Self::Insert { .. } => OperationKind::Insert,
            Self::Update { .. } => OperationKind::Update,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Sql,
    Insert,
    Update,
}

impl OperationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::Insert => "insert",
            Self::Update => "update",
        }
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `value` as a single-quoted SQL literal.
///
/// Quotes are doubled and backslashes escaped so the value cannot terminate
/// the literal early.
pub fn sql_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' => literal.push_str("''"),
            '\\' => literal.push_str("\\\\"),
            _ => literal.push(ch),
        }
    }
    literal.push('\'');
    literal
}
