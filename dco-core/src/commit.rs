use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Signature verification as attested by the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub verified: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A commit normalized from a pull request or push event.
///
/// Fields are read-only once built; validators only ever borrow commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    sha: String,
    author: Author,
    message: String,
    parents: Vec<String>,
    verification: Option<Verification>,
}

impl Commit {
    pub fn new(
        sha: impl Into<String>,
        author: Author,
        message: impl Into<String>,
        parents: Vec<String>,
        verification: Option<Verification>,
    ) -> Self {
        Self {
            sha: sha.into(),
            author,
            message: message.into(),
            parents,
            verification,
        }
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }

    /// Two parents. Push commits carry no parents and are never merges.
    pub fn is_merge(&self) -> bool {
        self.parents.len() == 2
    }

    /// A missing verification record counts as unverified.
    pub fn is_verified(&self) -> bool {
        self.verification.as_ref().is_some_and(|v| v.verified)
    }
}
