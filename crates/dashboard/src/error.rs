//! Failures surfaced to the dashboard user.

use stockroom_client::RequestError;
use stockroom_core::{DomainError, ItemId};
use thiserror::Error;

pub const FETCH_FAILED: &str = "Failed to fetch items";
pub const SAVE_FAILED: &str = "Failed to save item";
pub const DELETE_FAILED: &str = "Failed to delete item";

/// A failed dashboard operation.
///
/// `Display` yields the single message the dashboard shows: the underlying
/// request error's text when it has one, otherwise a fallback naming the
/// operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// The draft was rejected locally; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("{}", describe(.0, FETCH_FAILED))]
    Fetch(RequestError),

    #[error("{}", describe(.0, SAVE_FAILED))]
    Save(RequestError),

    #[error("{}", describe(.error, DELETE_FAILED))]
    Delete { id: ItemId, error: RequestError },
}

impl DashboardError {
    /// The request error behind a remote failure, if any.
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            DashboardError::Invalid(_) => None,
            DashboardError::Fetch(err) | DashboardError::Save(err) => Some(err),
            DashboardError::Delete { error, .. } => Some(error),
        }
    }
}

fn describe(err: &RequestError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
