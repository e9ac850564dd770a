mod actions;
mod check;
mod config;
mod error;
mod event;
mod github_client;
mod normalizer;
mod webhook_payloads;

use std::process::ExitCode;

use clap::Parser;
use config::{Cli, Config};
use error::{DcoError, Result};
use github_client::GithubClient;
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // stdout is reserved for workflow commands
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config: Config = Cli::parse().into();
    tracing::debug!("{config:?}");

    let payload = config
        .event_path
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path)
                .map_err(|e| DcoError::EventFile(path.display().to_string(), e))
        })
        .transpose()?;

    let client = GithubClient::new(config.github_token.clone())?;

    let span = tracing::info_span!("dco", event = config.event_name.as_deref());
    let outcome = check::run(&config, payload.as_deref(), &client)
        .instrument(span)
        .await?;

    Ok(actions::report(&outcome))
}
