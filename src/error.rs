use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("env file not found: {}", .0.display())]
    EnvFileNotFound(PathBuf),
    #[error("API key `{0}` not found in env file")]
    ApiKeyMissing(String),
    #[error("voices request returned status {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("voices request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed voices response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
