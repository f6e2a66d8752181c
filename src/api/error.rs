//! API Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the body could not be read
    #[error("request failed: {0}")]
    Transport(String),
    /// Body was not the JSON we expected
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Non-OK status, or an `error` field in the body
    #[error("server rejected request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// The `error` string the server sent, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message: Some(msg), .. } if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }

    /// Server-provided message, or `fallback` for every other failure
    pub fn server_message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }

    /// Whether the server answered at all
    pub fn is_server(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
