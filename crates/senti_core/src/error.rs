use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
