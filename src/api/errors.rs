use thiserror::Error;

/// Failure taxonomy for calls against the remote API.
///
/// The client only classifies; it never recovers or retries. `Http` keeps
/// the response body unparsed so the services layer can attempt to decode a
/// structured validation problem out of it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failed before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The configured deadline elapsed and the request was aborted.
    #[error("request timed out")]
    Timeout,

    /// A response arrived with a status outside 2xx.
    #[error("unexpected HTTP status {status}")]
    Http { status: u16, body: String },

    /// A 2xx response carried a body that failed JSON decoding.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
