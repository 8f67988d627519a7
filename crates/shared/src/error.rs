use thiserror::Error;

/// Message shown in place of the movie list for every gateway failure.
pub const USER_FACING_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response status {status}")]
    BadResponse { status: u16 },
    #[error("malformed payload: {0}")]
    Parse(String),
}

impl GatewayError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// All variants collapse to the same message for the view; the
    /// detailed `Display` form is for logs.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_FAILURE
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
