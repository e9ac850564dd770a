use thiserror::Error;

pub type Result<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum DcoError {
    #[error("Event {0} is not supported")]
    UnsupportedEvent(String),
    #[error("Could not parse {0} payload, got {1}")]
    MalformedPayload(String, serde_json::Error),
    #[error("Could not read event payload {0}, got {1}")]
    EventFile(String, std::io::Error),
    #[error("GitHub API returned {status} for {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },
}
