use thiserror::Error;

/// Failure of a single backend call.
///
/// The orchestrator never shows these to the user: every variant collapses to the
/// feature's fallback text. They exist for logging and for tests.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Short category label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Http(_) => "transport",
            ClientError::Status { .. } => "status",
            ClientError::Malformed(_) => "malformed",
            ClientError::Rejected(_) => "rejected",
        }
    }
}
