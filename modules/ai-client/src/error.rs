use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API quota exceeded")]
    Quota,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Model returned no candidates")]
    EmptyResponse,
}
