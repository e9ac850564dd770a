//! Commit model and DCO rules.
//!
//! - [`Commit`]: a commit normalized from any supported event
//! - [`AuthorsToSkip`]: author names exempt from every check
//! - [`check_sign_off`] and [`check_gpg_verification`]: the two validators
//! - [`Outcome`]: what a run reports back to CI

pub mod authors;
pub mod commit;
pub mod gpg;
pub mod report;
pub mod signoff;

pub use authors::AuthorsToSkip;
pub use commit::{Author, Commit, Verification};
pub use gpg::check_gpg_verification;
pub use report::{FailureReport, Outcome};
pub use signoff::{check_sign_off, SignOff};
