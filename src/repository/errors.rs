use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(feature = "server")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return RepositoryError::Decode(err.to_string());
        }

        match err.status() {
            Some(status) => RepositoryError::Server {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None if err.is_connect() || err.is_timeout() || err.is_request() => {
                RepositoryError::Transport(err.to_string())
            }
            None if err.is_builder() => {
                RepositoryError::ValidationError(format!("Request builder error: {err}"))
            }
            None => RepositoryError::Unexpected(format!("Unexpected http error: {err}")),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}
