use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid user agent {value:?}: {reason}")]
    InvalidUserAgent { value: String, reason: &'static str },

    #[error("Invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Http client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
