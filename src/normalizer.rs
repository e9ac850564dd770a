use dco_core::Commit;

use crate::error::Result;
use crate::event::Event;
use crate::github_client::CommitSource;

/// Flattens an event into the commits to validate, in event order.
pub async fn normalize<S: CommitSource>(event: &Event, source: &S) -> Result<Vec<Commit>> {
    match event {
        Event::PullRequest(payload) => {
            let pull_request = &payload.pull_request;
            tracing::info!(
                "Listing commits of pull request #{} ({})",
                pull_request.number,
                payload.action.as_deref().unwrap_or("unknown action")
            );

            let commits = source
                .list_pull_request_commits(&pull_request.commits_url)
                .await?;

            if let Some(expected) = pull_request.commits {
                if expected != commits.len() as u64 {
                    tracing::warn!(
                        "Pull request #{} has {expected} commits, listed {}",
                        pull_request.number,
                        commits.len()
                    );
                }
            }

            Ok(commits.into_iter().map(Commit::from).collect())
        }
        Event::Push(payload) => {
            tracing::info!(
                "Push to {} at {}",
                payload.reference.as_deref().unwrap_or("unknown ref"),
                payload.after.as_deref().unwrap_or("unknown commit")
            );

            Ok(payload.commits.iter().cloned().map(Commit::from).collect())
        }
    }
}
