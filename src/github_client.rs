use reqwest::header::ACCEPT;

use crate::error::{DcoError, Result};
use crate::webhook_payloads::github::GithubPullRequestCommit;

const PER_PAGE: usize = 100;
// The pull request commits endpoint never lists more than 250 commits.
const MAX_COMMITS: usize = 250;
const USER_AGENT: &str = concat!("dco-validator/", env!("CARGO_PKG_VERSION"));

/// Where pull request commits come from.
pub trait CommitSource {
    async fn list_pull_request_commits(
        &self,
        commits_url: &str,
    ) -> Result<Vec<GithubPullRequestCommit>>;
}

pub struct GithubClient {
    http: reqwest::Client,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { http, token })
    }

    async fn fetch_page(&self, url: &str, page: usize) -> Result<Vec<GithubPullRequestCommit>> {
        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .query(&[("per_page", PER_PAGE), ("page", page)]);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(DcoError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            }
            .into());
        }

        Ok(response.json().await?)
    }
}

impl CommitSource for GithubClient {
    async fn list_pull_request_commits(
        &self,
        commits_url: &str,
    ) -> Result<Vec<GithubPullRequestCommit>> {
        let mut commits = vec![];
        let mut page = 1;

        loop {
            let batch = self.fetch_page(commits_url, page).await?;
            let last_page = batch.len() < PER_PAGE;
            tracing::debug!("Fetched {} commits from page {page}", batch.len());

            commits.extend(batch);

            if commits.len() >= MAX_COMMITS {
                commits.truncate(MAX_COMMITS);
                tracing::warn!(
                    "Listed {MAX_COMMITS} commits, the GitHub limit; later commits are not validated"
                );
                return Ok(commits);
            }

            if last_page {
                return Ok(commits);
            }

            page += 1;
        }
    }
}
