//! Core client-side data structures.

mod shortened_url;
mod submission_state;

pub use shortened_url::ShortenedUrl;
pub use submission_state::SubmissionState;
