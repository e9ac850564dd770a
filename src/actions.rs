use std::process::ExitCode;

use dco_core::Outcome;

/// Escapes a message for use as workflow command data.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// The line written to stdout for an outcome. Failures become `::error::`
/// workflow commands so GitHub shows them as annotations.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success => outcome.message(),
        Outcome::Failure(_) | Outcome::Unsupported => {
            format!("::error::{}", escape_data(&outcome.message()))
        }
    }
}

pub fn report(outcome: &Outcome) -> ExitCode {
    println!("{}", render(outcome));

    if outcome.is_success() {
        tracing::info!("All commits passed");
        ExitCode::SUCCESS
    } else {
        tracing::error!("DCO check failed");
        ExitCode::FAILURE
    }
}
