use std::sync::Arc;

use tracing::debug;

use crate::http_client::{HttpAuth, HttpClient, HttpRequest};
use crate::operation::RemoteOperation;
use crate::response::DatabaseResponse;
use crate::{DatabaseConfig, DatabaseError};

/// Performs one POST exchange with the configured database endpoint per call.
#[derive(Clone)]
pub struct DatabaseGateway {
    http_client: Arc<dyn HttpClient>,
    config: DatabaseConfig,
    timeout_ms: Option<u64>,
}

impl DatabaseGateway {
    pub fn new(http_client: Arc<dyn HttpClient>, config: DatabaseConfig) -> Self {
        Self {
            http_client,
            config,
            timeout_ms: None,
        }
    }

    /// Bounds every exchange; without it the transport default applies.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Sends `operation` and classifies the outcome.
    ///
    /// A non-2xx status fails with [`DatabaseError::Rejected`] carrying the raw
    /// status and body. A 2xx body shaped `{"error": ...}` fails with
    /// [`DatabaseError::Remote`]. Nothing is retried.
    pub async fn send(&self, operation: &RemoteOperation) -> Result<DatabaseResponse, DatabaseError> {
        let kind = operation.kind();
        let body = serde_json::to_string(operation)?;
        let request = HttpRequest::post(self.config.host())
            .with_header("Content-Type", "application/json")
            .with_auth(&HttpAuth::Basic(self.config.token().to_owned()))
            .with_body(body)
            .with_timeout_ms(self.timeout_ms);

        debug!(operation = %kind, "sending database operation");
        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                debug!(operation = %kind, transport = ?error.kind(), "database exchange failed");
                return Err(error.into());
            }
        };
        debug!(operation = %kind, status = response.status, "database responded");

        if !response.is_success() {
            return Err(DatabaseError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        match DatabaseResponse::parse(&response.body)? {
            DatabaseResponse::Error { message } => Err(DatabaseError::Remote { message }),
            parsed => Ok(parsed),
        }
    }
}

impl std::fmt::Debug for DatabaseGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseGateway")
            .field("config", &self.config)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}
