//! Submission controller: one shorten-request cycle from raw input to result.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::application::view::ViewModel;
use crate::config::Config;
use crate::domain::entities::{ShortenedUrl, SubmissionState};
use crate::domain::ports::{Clipboard, ShortenerGateway};
use crate::domain::validation::UrlValidator;
use crate::error::ControllerError;

#[derive(Default)]
struct Inner {
    input: String,
    state: SubmissionState,
    /// Bumped by every submit and reset. A response is applied only if the
    /// cycle that issued it is still current.
    cycle: u64,
    /// Cycle of the request still awaiting the service, if any. Survives
    /// `reset`, so a new submission cannot start until the old one settles.
    in_flight: Option<u64>,
    copied: bool,
    /// Bumped by every copy and reset. A revert task only clears the
    /// acknowledgement it was scheduled for.
    copy_epoch: u64,
    revert_task: Option<JoinHandle<()>>,
}

impl Inner {
    fn clear_copy_ack(&mut self) {
        self.copied = false;
        self.copy_epoch += 1;
        if let Some(task) = self.revert_task.take() {
            task.abort();
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases the in-flight slot of its cycle and returns the controller to
/// `Idle` if the cycle is dropped while still `Pending`.
struct PendingGuard<'a> {
    inner: &'a Mutex<Inner>,
    cycle: u64,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut inner = lock(self.inner);
        if inner.in_flight == Some(self.cycle) {
            inner.in_flight = None;
        }
        if inner.cycle == self.cycle && inner.state.is_pending() {
            debug!(cycle = self.cycle, "Submission abandoned, leaving pending state");
            inner.state = SubmissionState::Idle;
        }
    }
}

/// Owns the state of the shortening form and runs the
/// normalize → validate → submit → present pipeline.
///
/// The controller is `Send + Sync` and is meant to be shared through an
/// [`Arc`]. At most one submission is in flight at any time: a submit issued
/// while another is `Pending` is refused without contacting the service.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use shortener_client::prelude::*;
///
/// # async fn run() -> anyhow::Result<()> {
/// let config = Config::default();
/// let gateway = Arc::new(HttpShortenerGateway::new(&config)?);
/// let clipboard = Arc::new(MemoryClipboard::new());
/// let controller = SubmissionController::new(gateway, clipboard, &config);
///
/// controller.set_input("example.com")?;
/// let shortened = controller.submit().await?;
/// println!("{}", shortened.short_url);
/// # Ok(())
/// # }
/// ```
pub struct SubmissionController {
    gateway: Arc<dyn ShortenerGateway>,
    clipboard: Arc<dyn Clipboard>,
    validator: UrlValidator,
    copy_ack_window: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl SubmissionController {
    /// Creates a controller using the thresholds from `config`.
    pub fn new(
        gateway: Arc<dyn ShortenerGateway>,
        clipboard: Arc<dyn Clipboard>,
        config: &Config,
    ) -> Self {
        Self::with_settings(
            gateway,
            clipboard,
            config.validator(),
            config.copy_ack_window(),
        )
    }

    /// Creates a controller with explicit validation thresholds and copy
    /// acknowledgement window.
    pub fn with_settings(
        gateway: Arc<dyn ShortenerGateway>,
        clipboard: Arc<dyn Clipboard>,
        validator: UrlValidator,
        copy_ack_window: Duration,
    ) -> Self {
        Self {
            gateway,
            clipboard,
            validator,
            copy_ack_window,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Replaces the raw input.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::AlreadyPending`] while a submission is in
    /// flight; the input is locked until it settles.
    pub fn set_input(&self, text: impl Into<String>) -> Result<(), ControllerError> {
        let mut inner = lock(&self.inner);
        if inner.state.is_pending() {
            return Err(ControllerError::AlreadyPending);
        }
        inner.input = text.into();
        Ok(())
    }

    pub fn input(&self) -> String {
        lock(&self.inner).input.clone()
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.inner).state.clone()
    }

    pub fn is_copied(&self) -> bool {
        lock(&self.inner).copied
    }

    /// Read-only projection of the current state for rendering.
    pub fn snapshot(&self) -> ViewModel {
        let inner = lock(&self.inner);
        ViewModel {
            input: inner.input.clone(),
            is_loading: inner.state.is_pending() || inner.in_flight.is_some(),
            error: inner.state.error().map(str::to_owned),
            short_url: inner.state.short_url().map(str::to_owned),
            copied: inner.copied,
        }
    }

    /// Runs one submission cycle on the current input.
    ///
    /// Clears any previous result, error and copy acknowledgement, validates
    /// the input and, if it is valid, sends it to the shortening service. The
    /// controller is `Pending` for the duration of the request and settles in
    /// `Succeeded` or `Failed`. If the returned future is dropped before the
    /// service answers, the controller returns to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::AlreadyPending`] without touching the state
    /// if another submission is in flight, including one whose cycle was
    /// reset but whose request has not settled yet. Every other error is also
    /// recorded as [`SubmissionState::Failed`] with the error's message.
    pub async fn submit(&self) -> Result<ShortenedUrl, ControllerError> {
        let (cycle, normalized) = {
            let mut inner = lock(&self.inner);
            if inner.state.is_pending() || inner.in_flight.is_some() {
                debug!("Submission refused, another request is pending");
                return Err(ControllerError::AlreadyPending);
            }

            inner.cycle += 1;
            inner.state = SubmissionState::Idle;
            inner.clear_copy_ack();

            match self.validator.normalize_and_validate(&inner.input) {
                Ok(normalized) => {
                    inner.state = SubmissionState::Pending;
                    inner.in_flight = Some(inner.cycle);
                    (inner.cycle, normalized)
                }
                Err(e) => {
                    debug!(error = %e, "Input rejected before submission");
                    let err = ControllerError::from(e);
                    inner.state = SubmissionState::Failed(err.to_string());
                    return Err(err);
                }
            }
        };

        let _pending = PendingGuard {
            inner: &self.inner,
            cycle,
        };

        debug!(cycle, url = %normalized, "Submitting URL");
        let result = self
            .gateway
            .shorten(&normalized)
            .await
            .map_err(ControllerError::from);

        let mut inner = lock(&self.inner);
        inner.in_flight = None;
        if inner.cycle != cycle {
            debug!(cycle, "Discarding response of a reset submission");
            return result;
        }

        match &result {
            Ok(shortened) => {
                info!(short_url = %shortened.short_url, "URL shortened");
                inner.state = SubmissionState::Succeeded(shortened.clone());
            }
            Err(e) => {
                warn!(error = %e, "Shortening failed");
                inner.state = SubmissionState::Failed(e.to_string());
            }
        }

        result
    }

    /// Clears input, result, error and copy acknowledgement.
    ///
    /// Works in every state. A request still in flight runs to completion but
    /// its response is discarded, and no new submission starts before it
    /// settles.
    pub fn reset(&self) {
        let mut inner = lock(&self.inner);
        inner.cycle += 1;
        inner.input.clear();
        inner.state = SubmissionState::Idle;
        inner.clear_copy_ack();
        debug!("Controller reset");
    }

    /// Copies the short address to the clipboard.
    ///
    /// On success the copy acknowledgement is set and reverts after the
    /// configured window. A new copy replaces any pending revert.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::NothingToCopy`] unless the last submission
    /// succeeded, and [`ControllerError::ClipboardFailure`] if the clipboard
    /// refuses the write. A failed write withdraws any earlier
    /// acknowledgement. Neither changes the submission state.
    pub async fn copy_result(&self) -> Result<(), ControllerError> {
        let (cycle, short_url) = {
            let inner = lock(&self.inner);
            let short_url = inner
                .state
                .short_url()
                .map(str::to_owned)
                .ok_or(ControllerError::NothingToCopy)?;
            (inner.cycle, short_url)
        };

        if let Err(e) = self.clipboard.write_text(&short_url).await {
            warn!(error = %e, "Clipboard write failed");
            lock(&self.inner).clear_copy_ack();
            return Err(e.into());
        }

        let mut inner = lock(&self.inner);
        if inner.cycle != cycle {
            debug!("Result changed during copy, not acknowledging");
            return Ok(());
        }

        inner.clear_copy_ack();
        inner.copied = true;

        let epoch = inner.copy_epoch;
        let window = self.copy_ack_window;
        let shared = Arc::clone(&self.inner);
        inner.revert_task = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let mut inner = lock(&shared);
            if inner.copy_epoch == epoch {
                inner.copied = false;
            }
        }));

        debug!(short_url = %short_url, "Short URL copied");
        Ok(())
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.inner).revert_task.take() {
            task.abort();
        }
    }
}
