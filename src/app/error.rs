use thiserror::Error;

#[derive(Error, Debug)]
pub enum LadleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The backend answered with an explicit `error` field.
    #[error("{0}")]
    ServerReported(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LadleError {
    /// Network, status and decoding failures. These get a generic message
    /// in the UI instead of the raw error text.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LadleError::Http(_)
                | LadleError::InvalidUrl(_)
                | LadleError::Io(_)
                | LadleError::Json(_)
                | LadleError::UnexpectedStatus(_)
                | LadleError::MalformedResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LadleError>;
