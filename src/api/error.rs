use thiserror::Error;

/// Failure of a single request against the NotifyPipe API.
///
/// Stored as strings so results can travel through UI events, which are `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, broken body stream.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },
    /// The body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

const MAX_MESSAGE_CHARS: usize = 200;

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }

    /// Builds a status error, preferring the backend's `{"error": "..."}` message.
    pub fn status(code: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"].as_str().map(str::to_string))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "no response body".to_string()
                } else {
                    trimmed.chars().take(MAX_MESSAGE_CHARS).collect()
                }
            });
        ApiError::Status { code, message }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
