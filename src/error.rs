use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing credential: {0} must be set")]
    MissingCredential(&'static str),

    #[error("Token request rejected with status {0}: {1}")]
    TokenRejected(StatusCode, String),

    #[error("Spotify request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot load environment file: {0}")]
    Env(#[from] dotenv::Error),
}
