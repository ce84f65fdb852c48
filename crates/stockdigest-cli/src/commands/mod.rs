mod create;
mod period;
mod show;
mod symbols;

use serde_json::Value;
use stockdigest_core::{Identity, Symbol, TimePeriod, UserRecordService};

use crate::cli::Command;
use crate::error::CliError;

/// A command whose arguments have been validated.
///
/// Built before any configuration is read, so bad input fails fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Show(Identity),
    Create(Identity),
    Period(Identity, TimePeriod),
    Track(Identity, Vec<Symbol>),
    Untrack(Identity, Vec<Symbol>),
}

impl Action {
    pub fn from_command(command: &Command) -> Result<Self, CliError> {
        let action = match command {
            Command::Show(args) => Self::Show(Identity::parse(&args.user)?),
            Command::Create(args) => Self::Create(Identity::parse(&args.user)?),
            Command::Period(args) => {
                Self::Period(Identity::parse(&args.user)?, args.period.parse()?)
            }
            Command::Track(args) => {
                Self::Track(Identity::parse(&args.user)?, parse_symbols(&args.symbols)?)
            }
            Command::Untrack(args) => {
                Self::Untrack(Identity::parse(&args.user)?, parse_symbols(&args.symbols)?)
            }
        };
        Ok(action)
    }
}

pub async fn run(
    action: Action,
    service: &UserRecordService,
    email: Option<String>,
) -> Result<Value, CliError> {
    match action {
        Action::Show(id) => show::run(&id, service, email).await,
        Action::Create(id) => create::run(&id, service).await,
        Action::Period(id, period) => period::run(&id, period, service, email).await,
        Action::Track(id, symbols) => symbols::track(&id, &symbols, service, email).await,
        Action::Untrack(id, symbols) => symbols::untrack(&id, &symbols, service, email).await,
    }
}

fn parse_symbols(raw: &[String]) -> Result<Vec<Symbol>, CliError> {
    raw.iter()
        .map(|value| Symbol::parse(value).map_err(CliError::from))
        .collect()
}
