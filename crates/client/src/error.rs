//! Error types for the LogPoint client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during LogPoint client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the service.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request payload could not be JSON-encoded.
    #[error("Failed to encode request payload: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The service reported failure on a non-terminal result page or a
    /// submission, carrying its own diagnostic message.
    #[error("Rejected by server: {message}")]
    Rejected { message: String },

    /// The poll budget ran out before the service reported a terminal page.
    /// Accumulated rows are discarded; the caller gets no partial result.
    #[error("Result polling exhausted after {attempts} attempts without completion")]
    PollExhausted { attempts: usize },

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client was built without a credential pair.
    #[error("Credentials are required")]
    MissingCredentials,

    /// The operation was cancelled via a [`crate::CancellationToken`].
    #[error("Operation cancelled")]
    Cancelled,
}

impl ClientError {
    /// Check if this error came from the transport layer (network, HTTP
    /// status, encoding/decoding) rather than from service semantics.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::ApiError { .. } | Self::InvalidResponse(_) | Self::Encoding(_)
        )
    }

    /// Check if the remote service explicitly rejected the operation.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
