//! Application layer: the submission controller and its view projection.
//!
//! [`SubmissionController`] coordinates validation, the shortening gateway and
//! the clipboard. Front ends read [`ViewModel`] snapshots and call the
//! controller's actions; they never mutate state directly.

mod controller;
mod view;

pub use controller::SubmissionController;
pub use view::ViewModel;
