use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredCheckError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
