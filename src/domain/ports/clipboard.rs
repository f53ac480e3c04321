//! Port to the system clipboard.

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Destination for copied short addresses.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::CommandClipboard`] - platform clipboard utilities
/// - [`crate::infrastructure::clipboard::MemoryClipboard`] - in-process buffer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the platform refuses the write.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
