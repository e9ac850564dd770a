use crate::error::DcoError;
use crate::webhook_payloads::github::{GithubPullRequestWebhookPayload, GithubPushWebhookPayload};

pub const PULL_REQUEST: &str = "pull_request";
pub const PUSH: &str = "push";

/// A triggering event this action knows how to validate.
#[derive(Debug, Clone)]
pub enum Event {
    PullRequest(GithubPullRequestWebhookPayload),
    Push(GithubPushWebhookPayload),
}

impl Event {
    pub fn parse(event_name: &str, payload: &str) -> Result<Self, DcoError> {
        let malformed = |e| DcoError::MalformedPayload(event_name.to_string(), e);

        match event_name {
            PULL_REQUEST => serde_json::from_str(payload)
                .map(Event::PullRequest)
                .map_err(malformed),
            PUSH => serde_json::from_str(payload)
                .map(Event::Push)
                .map_err(malformed),
            other => Err(DcoError::UnsupportedEvent(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::PullRequest(_) => PULL_REQUEST,
            Event::Push(_) => PUSH,
        }
    }

    pub fn repository(&self) -> Option<&str> {
        let repository = match self {
            Event::PullRequest(payload) => payload.repository.as_ref(),
            Event::Push(payload) => payload.repository.as_ref(),
        };

        repository.map(|r| r.full_name.as_str())
    }

    /// Only pull request commits carry GPG verification data.
    pub fn is_pull_request(&self) -> bool {
        matches!(self, Event::PullRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_push() {
        let payload = json!({
            "ref": "refs/heads/main",
            "after": "b2",
            "commits": [{
                "id": "b2",
                "message": "fix\n\nSigned-off-by: Jane Doe <jane@example.com>",
                "author": { "name": "Jane Doe", "email": "jane@example.com", "username": "jane" },
                "distinct": true
            }],
            "repository": { "name": "repo", "full_name": "org/repo" }
        })
        .to_string();

        let event = Event::parse("push", &payload).unwrap();
        assert_eq!(event.name(), PUSH);
        assert_eq!(event.repository(), Some("org/repo"));
        assert!(!event.is_pull_request());
        match event {
            Event::Push(payload) => {
                assert_eq!(payload.commits.len(), 1);
                assert_eq!(payload.reference.as_deref(), Some("refs/heads/main"));
            }
            Event::PullRequest(_) => panic!("expected push event"),
        }
    }

    #[test]
    fn parse_pull_request() {
        let payload = json!({
            "action": "opened",
            "number": 7,
            "pull_request": {
                "number": 7,
                "commits": 2,
                "commits_url": "https://api.github.com/repos/org/repo/pulls/7/commits"
            }
        })
        .to_string();

        let event = Event::parse("pull_request", &payload).unwrap();
        assert!(event.is_pull_request());
        assert_eq!(event.repository(), None);
        match event {
            Event::PullRequest(payload) => {
                assert_eq!(payload.pull_request.number, 7);
                assert_eq!(
                    payload.pull_request.commits_url,
                    "https://api.github.com/repos/org/repo/pulls/7/commits"
                );
            }
            Event::Push(_) => panic!("expected pull request event"),
        }
    }

    #[test]
    fn unsupported_event() {
        let err = Event::parse("release", "{}").unwrap_err();
        assert!(matches!(err, DcoError::UnsupportedEvent(ref name) if name == "release"));
    }

    #[test]
    fn malformed_payload() {
        let err = Event::parse("push", r#"{"ref": "refs/heads/main"}"#).unwrap_err();
        assert!(matches!(err, DcoError::MalformedPayload(ref name, _) if name == "push"));

        let err = Event::parse("pull_request", "not json").unwrap_err();
        assert!(matches!(err, DcoError::MalformedPayload(..)));
    }
}
