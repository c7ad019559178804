use thiserror::Error;

/// Reasons a form submission did not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No response within {0} ms")]
    Timeout(u32),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("The form has already been submitted")]
    AlreadySubmitted,

    #[error("Failed to encode request: {0}")]
    Encode(String),
}
