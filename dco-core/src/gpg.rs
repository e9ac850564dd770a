use crate::{AuthorsToSkip, Commit};

/// Returns the shas of commits without a verified signature, in input order.
/// Skipped authors are exempt; merge commits are not.
pub fn check_gpg_verification(commits: &[Commit], authors_to_skip: &AuthorsToSkip) -> Vec<String> {
    commits
        .iter()
        .filter(|commit| !authors_to_skip.contains(&commit.author().name))
        .filter(|commit| !commit.is_verified())
        .inspect(|commit| {
            let reason = commit
                .verification()
                .and_then(|v| v.reason.as_deref())
                .unwrap_or("missing");
            tracing::debug!("Commit {} is not verified ({reason})", commit.sha());
        })
        .map(|commit| commit.sha().to_string())
        .collect()
}
