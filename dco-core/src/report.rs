use std::fmt;

pub const SUCCESS_MESSAGE: &str = "Congratulations!!! All your commits are signed";

pub const UNSUPPORTED_MESSAGE: &str = "Validation error. Please, make sure you are using the correct configuration for this action. https://github.com/ZupIT/zup-dco-validator";

/// Offending commit shas, grouped by the check they failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureReport {
    pub not_signed_off: Vec<String>,
    pub not_gpg_verified: Vec<String>,
}

impl FailureReport {
    pub fn is_empty(&self) -> bool {
        self.not_signed_off.is_empty() && self.not_gpg_verified.is_empty()
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [
            ("Some commits are incorrectly signed off :", &self.not_signed_off),
            (
                "GPG Verification not found for some commits :",
                &self.not_gpg_verified,
            ),
        ];

        let mut first = true;
        for (title, shas) in sections {
            if shas.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;

            write!(f, "{title}")?;
            for sha in shas {
                write!(f, "\n {sha}")?;
            }
        }

        Ok(())
    }
}

/// The single result a run reports back to CI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(FailureReport),
    Unsupported,
}

impl Outcome {
    pub fn from_failures(not_signed_off: Vec<String>, not_gpg_verified: Vec<String>) -> Self {
        let report = FailureReport {
            not_signed_off,
            not_gpg_verified,
        };

        if report.is_empty() {
            Outcome::Success
        } else {
            Outcome::Failure(report)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Success => SUCCESS_MESSAGE.to_string(),
            Outcome::Failure(report) => report.to_string(),
            Outcome::Unsupported => UNSUPPORTED_MESSAGE.to_string(),
        }
    }
}
