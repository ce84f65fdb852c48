//! Typed view of database response bodies.
//!
//! The endpoint answers a `sql` operation with an array of rows, an
//! `insert`/`update` with an acknowledgement object, and reports failures
//! as `{"error": ...}`. Anything else is rejected rather than coerced.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{DatabaseError, Identity};

/// Columns the store maintains on every row.
pub const SERVER_TIMESTAMP_FIELDS: [&str; 2] = ["__createdtime__", "__updatedtime__"];

pub type Row = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseResponse {
    Records(Vec<Row>),
    Acknowledgement(Acknowledgement),
    Error { message: String },
}

/// Write acknowledgement, e.g. `{"message": "inserted 1 of 1 records",
/// "inserted_hashes": ["u1"], "skipped_hashes": []}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
    #[serde(default)]
    pub inserted_hashes: Vec<Value>,
    #[serde(default)]
    pub update_hashes: Vec<Value>,
    #[serde(default)]
    pub skipped_hashes: Vec<Value>,
}

impl Acknowledgement {
    /// Whether the store skipped the row keyed by `id`.
    pub fn skipped(&self, id: &Identity) -> bool {
        self.skipped_hashes
            .iter()
            .any(|hash| hash.as_str() == Some(id.as_str()))
    }
}

impl DatabaseResponse {
    pub fn parse(body: &str) -> Result<Self, DatabaseError> {
        let value: Value = serde_json::from_str(body)?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(row) => Ok(row),
                    other => Err(DatabaseError::UnexpectedResponse {
                        expected: "array of records",
                        found: json_kind(&other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Records),
            Value::Object(map) if map.contains_key("error") => {
                let message = match map.get("error") {
                    Some(Value::String(message)) => message.clone(),
                    Some(other) => other.to_string(),
                    None => String::new(),
                };
                Ok(Self::Error { message })
            }
            Value::Object(map) if map.contains_key("message") => {
                let ack = serde_json::from_value(Value::Object(map))?;
                Ok(Self::Acknowledgement(ack))
            }
            other => Err(DatabaseError::UnexpectedResponse {
                expected: "records, acknowledgement or error",
                found: json_kind(&other),
            }),
        }
    }

    pub fn into_records(self) -> Result<Vec<Row>, DatabaseError> {
        match self {
            Self::Records(rows) => Ok(rows),
            other => Err(other.mismatch("array of records")),
        }
    }

    pub fn into_acknowledgement(self) -> Result<Acknowledgement, DatabaseError> {
        match self {
            Self::Acknowledgement(ack) => Ok(ack),
            other => Err(other.mismatch("acknowledgement")),
        }
    }

    const fn shape(&self) -> &'static str {
        match self {
            Self::Records(_) => "array of records",
            Self::Acknowledgement(_) => "acknowledgement",
            Self::Error { .. } => "error",
        }
    }

    fn mismatch(self, expected: &'static str) -> DatabaseError {
        match self {
            Self::Error { message } => DatabaseError::Remote { message },
            other => DatabaseError::UnexpectedResponse {
                expected,
                found: other.shape(),
            },
        }
    }
}

/// Removes the server-maintained timestamp columns, leaving every other field.
pub fn strip_server_timestamps(row: &mut Row) {
    for field in SERVER_TIMESTAMP_FIELDS {
        row.remove(field);
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn array_body_parses_as_records() {
        let response = DatabaseResponse::parse(r#"[{"id":"u2","symbols":[]}]"#).expect("parses");
        let rows = response.into_records().expect("records");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "u2");
    }

    #[test]
    fn acknowledgement_reports_skipped_identity() {
        let response = DatabaseResponse::parse(
            r#"{"message":"inserted 0 of 1 records","inserted_hashes":[],"skipped_hashes":["u1"]}"#,
        )
        .expect("parses");
        let ack = response.into_acknowledgement().expect("acknowledgement");
        assert!(ack.skipped(&Identity::parse("u1").expect("identity")));
        assert!(!ack.skipped(&Identity::parse("u2").expect("identity")));
    }

    #[test]
    fn error_body_becomes_remote_error_when_records_expected() {
        let response =
            DatabaseResponse::parse(r#"{"error":"Table 'digest.users' does not exist"}"#)
                .expect("parses");
        let error = response.into_records().expect_err("not records");
        assert!(matches!(error, DatabaseError::Remote { message } if message.contains("does not exist")));
    }

    #[test]
    fn unexpected_shapes_are_rejected() {
        for body in ["42", "\"ok\"", "{\"status\":\"fine\"}", "[1, 2]"] {
            let error = DatabaseResponse::parse(body).expect_err("shape must be rejected");
            assert!(matches!(error, DatabaseError::UnexpectedResponse { .. }), "{body}");
        }
        assert!(matches!(
            DatabaseResponse::parse("not json"),
            Err(DatabaseError::Serialization(_))
        ));
    }

    #[test]
    fn records_where_acknowledgement_expected_is_a_mismatch() {
        let error = DatabaseResponse::Records(Vec::new())
            .into_acknowledgement()
            .expect_err("records are not an acknowledgement");
        assert!(matches!(
            error,
            DatabaseError::UnexpectedResponse {
                expected: "acknowledgement",
                found: "array of records",
            }
        ));
    }

    #[test]
    fn stripping_only_removes_server_timestamps() {
        let mut row = json!({
            "id": "u2",
            "timeperiod": "the past week",
            "symbols": ["AAPL"],
            "__createdtime__": 1_650_000_000_000_u64,
            "__updatedtime__": 1_650_000_100_000_u64,
        })
        .as_object()
        .cloned()
        .expect("object");

        strip_server_timestamps(&mut row);

        assert_eq!(
            Value::Object(row),
            json!({ "id": "u2", "timeperiod": "the past week", "symbols": ["AAPL"] })
        );
    }
}
