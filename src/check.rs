use dco_core::{check_gpg_verification, check_sign_off, Outcome};

use crate::config::Config;
use crate::error::Result;
use crate::event::Event;
use crate::github_client::CommitSource;
use crate::normalizer::normalize;

/// Validates every commit of the triggering event.
///
/// A missing event, unknown events and payloads that don't fit their event
/// shape end the run as [`Outcome::Unsupported`] without validating anything.
/// API errors are returned as errors.
pub async fn run<S: CommitSource>(
    config: &Config,
    payload: Option<&str>,
    source: &S,
) -> Result<Outcome> {
    let (Some(event_name), Some(payload)) = (config.event_name.as_deref(), payload) else {
        tracing::warn!("No triggering event, GITHUB_EVENT_NAME and GITHUB_EVENT_PATH must be set");
        return Ok(Outcome::Unsupported);
    };

    let event = match Event::parse(event_name, payload) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("{e}");
            return Ok(Outcome::Unsupported);
        }
    };

    let commits = normalize(&event, source).await?;
    tracing::info!(
        "Validating {} commits from {} event on {}",
        commits.len(),
        event.name(),
        event.repository().unwrap_or("unknown repository")
    );

    let not_signed_off = check_sign_off(&commits, &config.authors_to_skip);

    let not_gpg_verified = if config.validate_gpg && event.is_pull_request() {
        check_gpg_verification(&commits, &config.authors_to_skip)
    } else {
        if config.validate_gpg {
            tracing::debug!("Skipping GPG verification for {} event", event.name());
        }
        vec![]
    };

    Ok(Outcome::from_failures(not_signed_off, not_gpg_verified))
}
