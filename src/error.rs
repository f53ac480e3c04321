//! User-facing error taxonomy of a submission cycle.
//!
//! Every variant renders as the exact message shown to the user, so
//! `to_string()` is what lands in [`SubmissionState::Failed`].
//!
//! [`SubmissionState::Failed`]: crate::domain::entities::SubmissionState::Failed

use crate::domain::ports::{ClipboardError, GatewayError};
use crate::domain::validation::ValidationError;

/// Message used when the service rejects a request without explaining why.
pub const GENERIC_REMOTE_ERROR: &str = "Error in shortening the URL";

/// Message shown when the clipboard cannot be written.
pub const CLIPBOARD_FALLBACK: &str =
    "Could not copy automatically, select and copy the link manually";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// Input was blank or not a usable address. No request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("{0}")]
    RemoteRejected(String),

    /// The service could not be reached or its answer could not be read.
    #[error("{0}")]
    TransportFailure(String),

    /// The short address could not be placed on the clipboard.
    #[error("{}", CLIPBOARD_FALLBACK)]
    ClipboardFailure { reason: String },

    /// A submission is already in flight; nothing was sent.
    #[error("A request is already in progress")]
    AlreadyPending,

    /// Copy was requested without a successful result.
    #[error("Nothing to copy yet")]
    NothingToCopy,
}

impl From<GatewayError> for ControllerError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { message, .. } => Self::RemoteRejected(
                message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_REMOTE_ERROR.to_string()),
            ),
            GatewayError::Transport(message) => Self::TransportFailure(message),
        }
    }
}

impl From<ClipboardError> for ControllerError {
    fn from(err: ClipboardError) -> Self {
        Self::ClipboardFailure { reason: err.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_with_message_is_verbatim() {
        let err: ControllerError = GatewayError::Rejected {
            status: 500,
            message: Some("rate limited".to_string()),
        }
        .into();
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        let err: ControllerError = GatewayError::Rejected {
            status: 500,
            message: None,
        }
        .into();
        assert_eq!(err.to_string(), GENERIC_REMOTE_ERROR);
    }

    #[test]
    fn test_rejected_with_empty_message_uses_fallback() {
        let err: ControllerError = GatewayError::Rejected {
            status: 400,
            message: Some(String::new()),
        }
        .into();
        assert_eq!(err.to_string(), GENERIC_REMOTE_ERROR);
    }

    #[test]
    fn test_transport_message_passes_through() {
        let err: ControllerError = GatewayError::Transport("connection refused".to_string()).into();
        assert_eq!(err, ControllerError::TransportFailure("connection refused".to_string()));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_validation_messages() {
        let err: ControllerError = ValidationError::InvalidAddress.into();
        assert_eq!(err.to_string(), "Invalid website address");
    }

    #[test]
    fn test_clipboard_failure_shows_fallback() {
        let err: ControllerError = ClipboardError("xclip not found".to_string()).into();
        assert_eq!(err.to_string(), CLIPBOARD_FALLBACK);
    }
}
