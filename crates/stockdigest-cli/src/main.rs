mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use stockdigest_core::{DatabaseConfig, DatabaseGateway, ReqwestHttpClient, UserRecordService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::Action;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let action = Action::from_command(&cli.command)?;

    let config = DatabaseConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded database configuration");

    let mut gateway = DatabaseGateway::new(Arc::new(ReqwestHttpClient::new()), config);
    if let Some(timeout_ms) = cli.timeout_ms {
        gateway = gateway.with_timeout_ms(timeout_ms);
    }
    let service = UserRecordService::new(gateway);

    let data = commands::run(action, &service, cli.email).await?;
    output::render(&data, cli.pretty)
}
