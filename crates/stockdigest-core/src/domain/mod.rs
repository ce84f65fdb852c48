//! # Domain Models
//!
//! Types describing a user's stored digest preferences.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Identity`] | Validated record key (identity provider subject) |
//! | [`TimePeriod`] | Reporting window, `today` or `the past week` |
//! | [`UserRecord`] | Stored row: identity, period, tracked symbols |
//! | [`UserProfile`] | Record merged with identity provider profile fields |
//! | [`Symbol`] | Validated ticker used when editing the tracked list |
//!
//! Validated types reject bad input at construction, and deserialization goes
//! through the same checks:
//!
//! ```rust
//! use stockdigest_core::{Identity, ValidationError};
//!
//! assert!(Identity::parse("samlp|corp|a/b=").is_ok());
//! assert_eq!(Identity::parse(""), Err(ValidationError::EmptyIdentity));
//! assert!(matches!(
//!     Identity::parse("u1\0"),
//!     Err(ValidationError::IdentityInvalidChar { ch: '\0', .. })
//! ));
//! ```

mod identity;
mod models;
mod symbol;

pub use identity::Identity;
pub use models::{TimePeriod, UserProfile, UserRecord};
pub use symbol::Symbol;
