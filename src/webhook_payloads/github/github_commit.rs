use dco_core::Commit;

use super::GithubUser;

/// Commit entry of a push payload.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubCommit {
    pub id: String,
    pub message: String,
    pub author: GithubUser,
}

// Push payloads carry no parent data, so push commits are never merges.
impl From<GithubCommit> for Commit {
    fn from(val: GithubCommit) -> Self {
        Commit::new(val.id, val.author.into(), val.message, vec![], None)
    }
}
