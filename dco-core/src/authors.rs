use std::collections::HashSet;

/// Author names exempt from sign-off and GPG checks.
///
/// Built from a comma-separated list. Entries are compared exactly, with no
/// trimming, so `"bot, other"` exempts `"bot"` and `" other"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorsToSkip(HashSet<String>);

impl AuthorsToSkip {
    pub fn parse(value: &str) -> Self {
        Self(
            value
                .split(',')
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_skips_nobody() {
        let skip = AuthorsToSkip::parse("");
        assert_eq!(skip, AuthorsToSkip::default());
        assert!(!skip.contains(""));
    }

    #[test]
    fn splits_on_commas() {
        let skip = AuthorsToSkip::parse("dependabot[bot],renovate[bot]");
        assert!(skip.contains("dependabot[bot]"));
        assert!(skip.contains("renovate[bot]"));
        assert!(!skip.contains("Jane Doe"));
    }

    #[test]
    fn membership_is_exact() {
        let skip = AuthorsToSkip::parse("bot, other");
        assert!(skip.contains("bot"));
        assert!(skip.contains(" other"));
        assert!(!skip.contains("other"));
        assert!(!skip.contains("Bot"));
    }

    #[test]
    fn drops_empty_entries() {
        let skip = AuthorsToSkip::parse(",bot,,");
        assert_eq!(skip, AuthorsToSkip::parse("bot"));
        assert!(!skip.contains(""));
    }
}
