//! Read-only projection of controller state used by front ends.

/// Everything a front end needs to render the shortening form.
///
/// Obtained from [`SubmissionController::snapshot`]. Changing it has no
/// effect on the controller.
///
/// [`SubmissionController::snapshot`]: crate::application::SubmissionController::snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub input: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub short_url: Option<String>,
    pub copied: bool,
}

impl ViewModel {
    /// Submit is offered only with some input and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.input.is_empty()
    }

    /// The inline clear action is shown only when there is something to clear.
    pub fn can_clear(&self) -> bool {
        !self.is_loading && !self.input.is_empty()
    }

    pub fn can_copy(&self) -> bool {
        self.short_url.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            "Shortening..."
        } else {
            "Shorten URL"
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copied { "Copied!" } else { "Copy" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_disabled_without_input() {
        let view = ViewModel::default();
        assert!(!view.can_submit());
        assert!(!view.can_clear());
        assert_eq!(view.submit_label(), "Shorten URL");
    }

    #[test]
    fn test_submit_disabled_while_loading() {
        let view = ViewModel {
            input: "example.com".to_string(),
            is_loading: true,
            ..Default::default()
        };
        assert!(!view.can_submit());
        assert!(!view.can_clear());
        assert_eq!(view.submit_label(), "Shortening...");
    }

    #[test]
    fn test_whitespace_input_still_submittable() {
        // Blank input is caught by validation, not by the button state.
        let view = ViewModel {
            input: "  ".to_string(),
            ..Default::default()
        };
        assert!(view.can_submit());
    }

    #[test]
    fn test_copy_label() {
        let mut view = ViewModel {
            short_url: Some("https://short.ly/abc".to_string()),
            ..Default::default()
        };
        assert!(view.can_copy());
        assert_eq!(view.copy_label(), "Copy");

        view.copied = true;
        assert_eq!(view.copy_label(), "Copied!");
    }
}
