use super::{GithubCommit, GithubPullRequest, GithubRepository};

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubPushWebhookPayload {
    #[serde(default)]
    pub after: Option<String>,
    pub commits: Vec<GithubCommit>,
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub repository: Option<GithubRepository>,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubPullRequestWebhookPayload {
    #[serde(default)]
    pub action: Option<String>,
    pub pull_request: GithubPullRequest,
    #[serde(default)]
    pub repository: Option<GithubRepository>,
}
