//! Lifecycle of a single shorten request.

use super::ShortenedUrl;

/// Where the current submission cycle stands.
///
/// Validation happens synchronously inside a submit call, so it has no
/// variant of its own.
///
/// ```text
/// Idle --submit(invalid)--> Failed
/// Idle --submit(valid)--> Pending
/// Pending --success--> Succeeded
/// Pending --http-error / transport-error--> Failed
/// any --reset--> Idle
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(ShortenedUrl),
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Short address, if the last cycle succeeded.
    pub fn short_url(&self) -> Option<&str> {
        match self {
            Self::Succeeded(shortened) => Some(&shortened.short_url),
            _ => None,
        }
    }

    /// User-facing error message, if the last cycle failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_accessors() {
        let ok = SubmissionState::Succeeded(ShortenedUrl::new("https://short.ly/abc", None));
        assert_eq!(ok.short_url(), Some("https://short.ly/abc"));
        assert_eq!(ok.error(), None);
        assert!(!ok.is_pending());

        let failed = SubmissionState::Failed("rate limited".to_string());
        assert_eq!(failed.error(), Some("rate limited"));
        assert_eq!(failed.short_url(), None);

        assert!(SubmissionState::Pending.is_pending());
    }
}
