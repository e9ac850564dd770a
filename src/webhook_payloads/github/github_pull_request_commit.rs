use dco_core::{Commit, Verification};

use super::GithubUser;

/// Entry of `GET /repos/{owner}/{repo}/pulls/{number}/commits`.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubPullRequestCommit {
    pub sha: String,
    pub commit: GithubCommitDetail,
    #[serde(default)]
    pub parents: Vec<GithubCommitParent>,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubCommitDetail {
    pub author: GithubUser,
    pub message: String,
    #[serde(default)]
    pub verification: Option<Verification>,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubCommitParent {
    pub sha: String,
}

impl From<GithubPullRequestCommit> for Commit {
    fn from(val: GithubPullRequestCommit) -> Self {
        let parents = val.parents.into_iter().map(|parent| parent.sha).collect();

        Commit::new(
            val.sha,
            val.commit.author.into(),
            val.commit.message,
            parents,
            val.commit.verification,
        )
    }
}
