use stockroom_core::ItemId;
use thiserror::Error;

/// Uniform failure of a remote item call.
///
/// The `Display` text is what the dashboard shows to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// A delete was answered with neither a success nor a no-content status.
    #[error("Failed to delete item {id}")]
    Delete { id: ItemId, status: u16 },

    /// The request never got a response (unreachable host, connection reset).
    #[error("{0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status } | RequestError::Delete { status, .. } => Some(*status),
            RequestError::Transport(_) | RequestError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else {
            RequestError::Transport(err.to_string())
        }
    }
}
