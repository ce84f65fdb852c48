//! # Stock Digest Core
//!
//! Data access for Stock Digest user preferences: which ticker symbols a user
//! tracks and the period their digest covers.
//!
//! ## Overview
//!
//! Preferences live in one table of a remote database service reached through
//! a single HTTP POST endpoint. This crate provides:
//!
//! - **Domain types** for identities, time periods and stored records
//! - **Configuration** read once at startup from a file and the environment
//! - **HTTP transport** behind a trait, with a reqwest implementation
//! - **Request gateway** that sends one operation and types the response
//! - **User record service** with fetch-or-create and save
//! - **Preference edits** applied to a record before it is saved
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Database configuration |
//! | [`domain`] | Identity, TimePeriod, UserRecord, UserProfile, Symbol |
//! | [`error`] | Validation, configuration and database errors |
//! | [`gateway`] | One exchange with the database endpoint |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`operation`] | `sql` / `insert` / `update` payloads |
//! | [`preferences`] | Period and symbol edits |
//! | [`response`] | Typed response bodies |
//! | [`user_records`] | Get-or-create and save |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use stockdigest_core::{
//!     DatabaseConfig, DatabaseGateway, Identity, ReqwestHttpClient, UserRecordService,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let gateway = DatabaseGateway::new(Arc::new(ReqwestHttpClient::new()), config);
//!     let service = UserRecordService::new(gateway);
//!
//!     let record = service.fetch_or_create(&Identity::parse("auth0|5f7c1e")?).await?;
//!     println!("{} tracks {:?}", record.id, record.symbols);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  CLI / caller       │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐     ┌──────────────────┐
//! │ UserRecordService   │────▶│ Preference edits │
//! └──────────┬──────────┘     └──────────────────┘
//!            │ RemoteOperation
//!            ▼
//! ┌─────────────────────┐     ┌──────────────────┐
//! │ DatabaseGateway     │────▶│ HttpClient       │
//! │                     │     │ (reqwest/script) │
//! └──────────┬──────────┘     └──────────────────┘
//!            │ DatabaseResponse
//!            ▼
//! ┌─────────────────────┐
//! │ UserRecord          │
//! └─────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Gateway failures reach the caller unchanged:
//!
//! ```rust
//! use stockdigest_core::DatabaseError;
//!
//! fn describe(error: &DatabaseError) -> &'static str {
//!     match error {
//!         DatabaseError::Transport(_) => "endpoint unreachable",
//!         DatabaseError::Rejected { .. } => "request rejected",
//!         DatabaseError::Remote { .. } => "database reported an error",
//!         _ => "unexpected response",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The access token is never logged and is redacted from `Debug` output
//! - Identities are opaque keys, rendered as escaped SQL string literals
//! - Schema and table names must be plain identifiers

pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod http_client;
pub mod operation;
pub mod preferences;
pub mod response;
pub mod user_records;

// Configuration
pub use config::{DatabaseConfig, DatabaseSettings};

// Domain models
pub use domain::{Identity, Symbol, TimePeriod, UserProfile, UserRecord};

// Error types
pub use error::{ConfigError, DatabaseError, ValidationError};

// Gateway
pub use gateway::DatabaseGateway;

// HTTP client types
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse,
    ReqwestHttpClient, ScriptedHttpClient,
};

// Wire payloads
pub use operation::{OperationKind, RemoteOperation};
pub use response::{Acknowledgement, DatabaseResponse};

// Record service
pub use user_records::{CreateOutcome, UserRecordService};
