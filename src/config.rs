use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use dco_core::AuthorsToSkip;

/// Check that every commit of a pull request or push is signed off.
#[derive(Debug, Parser)]
#[command(name = "dco-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Token for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Comma-separated author names exempt from every check
    #[arg(long, env = "SKIP_AUTHORS", default_value = "")]
    pub skip_authors: String,

    /// Also require verified GPG signatures on pull requests ("true" to enable)
    #[arg(long, env = "VALIDATE_GPG", default_value = "false")]
    pub validate_gpg: String,

    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Path to the JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,
}

/// Settings for one run, built once in `main`.
#[derive(Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub authors_to_skip: AuthorsToSkip,
    pub validate_gpg: bool,
    /// Unset outside of a workflow run; the check then reports a
    /// configuration error instead of validating.
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("authors_to_skip", &self.authors_to_skip)
            .field("validate_gpg", &self.validate_gpg)
            .field("event_name", &self.event_name)
            .field("event_path", &self.event_path)
            .finish()
    }
}

impl From<Cli> for Config {
    fn from(val: Cli) -> Self {
        Config {
            github_token: val.github_token.filter(|token| !token.is_empty()),
            authors_to_skip: AuthorsToSkip::parse(&val.skip_authors),
            validate_gpg: val.validate_gpg == "true",
            event_name: val.event_name.filter(|name| !name.is_empty()),
            event_path: val.event_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cli(validate_gpg: &str) -> Cli {
        Cli {
            github_token: Some("ghs_secret".to_string()),
            skip_authors: "dependabot[bot],Jane Doe".to_string(),
            validate_gpg: validate_gpg.to_string(),
            event_name: Some("pull_request".to_string()),
            event_path: Some(PathBuf::from("/github/workflow/event.json")),
        }
    }

    #[test]
    fn validate_gpg_only_on_literal_true() {
        assert!(Config::from(make_cli("true")).validate_gpg);
        assert!(!Config::from(make_cli("false")).validate_gpg);
        assert!(!Config::from(make_cli("TRUE")).validate_gpg);
        assert!(!Config::from(make_cli("1")).validate_gpg);
        assert!(!Config::from(make_cli("")).validate_gpg);
    }

    #[test]
    fn parses_skip_authors() {
        let config = Config::from(make_cli("false"));
        assert!(config.authors_to_skip.contains("dependabot[bot]"));
        assert!(config.authors_to_skip.contains("Jane Doe"));
    }

    #[test]
    fn empty_token_is_none() {
        let mut cli = make_cli("false");
        cli.github_token = Some(String::new());
        assert_eq!(Config::from(cli).github_token, None);
    }

    #[test]
    fn debug_redacts_token() {
        let debug = format!("{:?}", Config::from(make_cli("true")));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("ghs_secret"));
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "dco-validator",
            "--github-token",
            "t0k3n",
            "--skip-authors",
            "bot",
            "--validate-gpg",
            "true",
            "--event-name",
            "push",
            "--event-path",
            "/tmp/event.json",
        ])
        .unwrap();

        let config = Config::from(cli);
        assert_eq!(config.github_token.as_deref(), Some("t0k3n"));
        assert!(config.authors_to_skip.contains("bot"));
        assert!(config.validate_gpg);
        assert_eq!(config.event_name.as_deref(), Some("push"));
        assert_eq!(config.event_path, Some(PathBuf::from("/tmp/event.json")));
    }

    #[test]
    fn event_may_be_unset() {
        let mut cli = make_cli("false");
        cli.event_name = None;
        cli.event_path = None;

        let config = Config::from(cli);
        assert_eq!(config.event_name, None);
        assert_eq!(config.event_path, None);
    }

    #[test]
    fn empty_event_name_is_none() {
        let mut cli = make_cli("false");
        cli.event_name = Some(String::new());
        assert_eq!(Config::from(cli).event_name, None);
    }
}
