/// Failure of a remote OCR or translation call
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

impl CloudError {
    /// Map a non-success HTTP status to an error, `None` on success
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Option<Self> {
        match status.as_u16() {
            429 => Some(CloudError::RateLimitExceeded),
            401 | 403 => Some(CloudError::AuthenticationError),
            _ if !status.is_success() => Some(CloudError::ApiError(format!("HTTP {status}"))),
            _ => None,
        }
    }
}
