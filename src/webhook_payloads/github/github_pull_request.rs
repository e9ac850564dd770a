#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubPullRequest {
    pub number: u64,
    pub commits_url: String,
    /// Number of commits, when GitHub includes it.
    #[serde(default)]
    pub commits: Option<u64>,
}
