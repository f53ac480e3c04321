//! Input normalization and validation for user-supplied addresses.
//!
//! Turns free text typed by the user into an absolute web address before
//! anything is sent to the shortening service.
//!
//! # Normalization Rules
//!
//! 1. **Whitespace**: Leading and trailing whitespace is trimmed
//! 2. **Scheme**: `https://` is prepended unless the text already starts with
//!    `http://` or `https://` (case-sensitive)
//! 3. **Host**: The result must parse as a URL with a host of at least
//!    [`UrlValidator::min_host_length`] characters
//! 4. **Length**: The result must not exceed [`UrlValidator::max_url_length`] characters
//!
//! The normalized value is the scheme-prefixed text itself, not the parser's
//! re-serialization, so validating a normalized value again yields the same value.

use url::Url;

/// Default minimum host length accepted by [`UrlValidator`].
pub const DEFAULT_MIN_HOST_LENGTH: usize = 3;

/// Default maximum length of a normalized address.
pub const DEFAULT_MAX_URL_LENGTH: usize = 2048;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Reasons a user-supplied address is rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter the URL")]
    EmptyInput,

    #[error("Invalid website address")]
    InvalidAddress,

    #[error("URL is too long")]
    TooLong,
}

/// Outcome of [`UrlValidator::normalize_and_validate`].
///
/// `Ok` carries the normalized address, `Err` the user-facing reason.
pub type ValidationResult = Result<String, ValidationError>;

/// Normalizes and validates addresses with configurable thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlValidator {
    min_host_length: usize,
    max_url_length: usize,
}

impl UrlValidator {
    /// Creates a validator with explicit thresholds.
    pub fn new(min_host_length: usize, max_url_length: usize) -> Self {
        Self {
            min_host_length,
            max_url_length,
        }
    }

    /// Shortest host accepted, in characters.
    pub fn min_host_length(&self) -> usize {
        self.min_host_length
    }

    /// Longest normalized address accepted, in characters.
    pub fn max_url_length(&self) -> usize {
        self.max_url_length
    }

    /// Normalizes raw user input into an absolute address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyInput`] if the input is blank.
    /// Returns [`ValidationError::TooLong`] if the normalized address is longer
    /// than the configured maximum.
    /// Returns [`ValidationError::InvalidAddress`] if the address does not parse
    /// or its host is missing or too short.
    ///
    /// # Examples
    ///
    /// ```
    /// use shortener_client::domain::validation::UrlValidator;
    ///
    /// let validator = UrlValidator::default();
    /// assert_eq!(
    ///     validator.normalize_and_validate("  example.com ").unwrap(),
    ///     "https://example.com"
    /// );
    /// assert!(validator.normalize_and_validate("ab").is_err());
    /// ```
    pub fn normalize_and_validate(&self, input: &str) -> ValidationResult {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
        };

        if candidate.chars().count() > self.max_url_length {
            return Err(ValidationError::TooLong);
        }

        let parsed = Url::parse(&candidate).map_err(|_| ValidationError::InvalidAddress)?;

        match parsed.host_str() {
            Some(host) if host.chars().count() >= self.min_host_length => Ok(candidate),
            _ => Err(ValidationError::InvalidAddress),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_HOST_LENGTH, DEFAULT_MAX_URL_LENGTH)
    }
}

/// Validates `input` with the default thresholds.
pub fn normalize_and_validate(input: &str) -> ValidationResult {
    UrlValidator::default().normalize_and_validate(input)
}
