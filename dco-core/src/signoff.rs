use std::sync::LazyLock;

use regex::Regex;

use crate::{AuthorsToSkip, Commit};

// Any character except a line terminator (`\n`, `\r`, U+2028, U+2029).
const LINE: &str = r"[^\n\r\x{2028}\x{2029}]";

static SIGN_OFF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"Signed-off-by:\s*({LINE}+)<({LINE}+@{LINE}+)>")).unwrap()
});

/// A `Signed-off-by: Name <email>` trailer found in a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignOff<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

impl<'a> SignOff<'a> {
    /// First trailer anywhere in the message. The name is trimmed, the email
    /// is taken verbatim from between the angle brackets.
    pub fn find(message: &'a str) -> Option<Self> {
        let captures = SIGN_OFF_REGEX.captures(message)?;
        let name = captures.get(1)?.as_str().trim();
        let email = captures.get(2)?.as_str();

        Some(Self { name, email })
    }

    pub fn matches(&self, commit: &Commit) -> bool {
        let author = commit.author();
        self.name == author.name && self.email == author.email
    }
}

/// Returns the shas of commits that are not correctly signed off, in input
/// order. Skipped authors and merge commits are exempt.
pub fn check_sign_off(commits: &[Commit], authors_to_skip: &AuthorsToSkip) -> Vec<String> {
    commits
        .iter()
        .filter(|commit| !authors_to_skip.contains(&commit.author().name))
        .filter(|commit| !commit.is_merge())
        .filter(|commit| match SignOff::find(commit.message()) {
            Some(sign_off) if sign_off.matches(commit) => false,
            Some(sign_off) => {
                tracing::debug!(
                    "Commit {} signed off by {} <{}>, authored by {} <{}>",
                    commit.sha(),
                    sign_off.name,
                    sign_off.email,
                    commit.author().name,
                    commit.author().email
                );
                true
            }
            None => {
                tracing::debug!("Commit {} has no sign-off trailer", commit.sha());
                true
            }
        })
        .map(|commit| commit.sha().to_string())
        .collect()
}
