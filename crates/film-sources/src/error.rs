use thiserror::Error;

/// Every way a film fetch can fail.
///
/// The `Display` text of each variant is the message shown to the user, so the
/// wording is part of the contract. Variants are listed in the order the
/// loader classifies them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The configured endpoint is not an absolute http(s) URL. No I/O was attempted.
    #[error("Invalid endpoint URL \"{endpoint}\" (configuration error): {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// No network path to the server (connection could not be established).
    #[error("No connection. Please try again.")]
    Offline,

    /// Any other failure before a response was obtained.
    #[error("Network error: {0}")]
    Transport(String),

    /// A reply arrived but carried no HTTP status.
    #[error("No HTTP response from server.")]
    NoResponse,

    #[error("Request failed with status: {0}. Please try again.")]
    BadStatus(u16),

    /// Successful status, but the body did not match the film contract.
    #[error("Unexpected error: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Short machine-friendly name, used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidEndpoint { .. } => "invalid_endpoint",
            FetchError::Offline => "offline",
            FetchError::Transport(_) => "transport",
            FetchError::NoResponse => "no_response",
            FetchError::BadStatus(_) => "bad_status",
            FetchError::Decode(_) => "decode",
            FetchError::Unexpected(_) => "unexpected",
        }
    }
}
