use thiserror::Error;

/// Failure kinds of the travel query path.
///
/// The HTTP surface collapses all of these into one generic user-visible
/// message; the distinct kinds stay available for logging and alerting.
#[derive(Debug, Error)]
pub enum TravelError {
    /// Missing or rejected credential / provider configuration. Only
    /// surfaces when a remote call is actually attempted.
    #[error("Provider configuration failed: {0}")]
    Configuration(String),

    /// The generation endpoint could not be reached or rejected the call.
    #[error("Travel data service unreachable: {0}")]
    Transport(String),

    /// The remote call succeeded but carried no textual payload.
    #[error("No data returned by the generation service")]
    EmptyResponse,

    /// The payload was not valid JSON or did not satisfy the declared
    /// response schema.
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, TravelError>;

impl TravelError {
    /// Short stable token for log fields and alert routing.
    pub fn kind(&self) -> &'static str {
        match self {
            TravelError::Configuration(_) => "configuration",
            TravelError::Transport(_) => "transport",
            TravelError::EmptyResponse => "empty_response",
            TravelError::MalformedResponse(_) => "malformed_response",
        }
    }
}
