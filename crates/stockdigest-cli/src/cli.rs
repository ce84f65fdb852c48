//! CLI argument definitions for Stock Digest.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `show` | Print a user's preferences, creating the default record if needed |
//! | `create` | Insert the default record for a user |
//! | `period` | Set the reporting period |
//! | `track` | Add symbols to the tracked list |
//! | `untrack` | Remove symbols from the tracked list |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--config` | none | TOML file with a `[database]` table |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | transport default | Per-request timeout in ms |
//! | `--email` | none | Email shown in the printed profile |
//!
//! # Examples
//!
//! ```bash
//! stockdigest show 'auth0|5f7c1e'
//! stockdigest track 'auth0|5f7c1e' AAPL MSFT --pretty
//! stockdigest period 'auth0|5f7c1e' week
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Stock Digest - manage the stocks tracked in your daily digest email.
///
/// Database settings come from `--config` and the HARPERDB_HOST,
/// HARPERDB_TOKEN, HARPERDB_SCHEMA and HARPERDB_TABLE environment variables.
#[derive(Debug, Parser)]
#[command(name = "stockdigest", author, version, about = "Stock Digest preferences CLI")]
pub struct Cli {
    /// TOML file with a [database] table; environment variables override it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Email address from the identity provider, included in the output.
    #[arg(long, global = true)]
    pub email: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a user's preferences, creating the default record on first use.
    Show(UserArgs),

    /// Insert the default record (today, no symbols) for a user.
    Create(UserArgs),

    /// Set the period the digest covers.
    ///
    ///   stockdigest period 'auth0|5f7c1e' week
    Period(PeriodArgs),

    /// Add symbols to the tracked list.
    ///
    ///   stockdigest track 'auth0|5f7c1e' AAPL MSFT
    Track(SymbolsArgs),

    /// Remove symbols from the tracked list.
    Untrack(SymbolsArgs),
}

#[derive(Debug, Args)]
pub struct UserArgs {
    /// User identity (identity provider subject).
    pub user: String,
}

#[derive(Debug, Args)]
pub struct PeriodArgs {
    /// User identity (identity provider subject).
    pub user: String,

    /// `today` or `week` (`the past week`).
    pub period: String,
}

#[derive(Debug, Args)]
pub struct SymbolsArgs {
    /// User identity (identity provider subject).
    pub user: String,

    /// One or more ticker symbols.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}
