//! # URL Shortener Client
//!
//! Client for a URL shortening service: takes whatever the user typed,
//! turns it into an absolute address, submits it, and presents the short
//! address with copy-to-clipboard support.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Submission state, validation rules, ports
//! - **Application Layer** ([`application`]) - [`SubmissionController`] and its view model
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP gateway and clipboards
//!
//! ## Request Lifecycle
//!
//! 1. The user edits the input ([`SubmissionController::set_input`])
//! 2. [`SubmissionController::submit`] normalizes and validates it
//! 3. Valid input is sent to `POST {API_BASE_URL}/api/shorten/`
//! 4. The controller settles in `Succeeded` or `Failed`
//! 5. The user copies the result or resets the form
//!
//! ## Configuration
//!
//! The service address and thresholds are loaded from environment variables
//! via [`config::Config`] and injected at construction.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::SubmissionController;
pub use error::ControllerError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{SubmissionController, ViewModel};
    pub use crate::config::Config;
    pub use crate::domain::entities::{ShortenedUrl, SubmissionState};
    pub use crate::domain::ports::{Clipboard, ClipboardError, GatewayError, ShortenerGateway};
    pub use crate::domain::validation::{UrlValidator, ValidationError, normalize_and_validate};
    pub use crate::error::ControllerError;
    pub use crate::infrastructure::clipboard::{CommandClipboard, MemoryClipboard};
    pub use crate::infrastructure::http::HttpShortenerGateway;
}
