//! Live progress stream: a producer thread feeds lines to a render loop
//! running on its own thread.

mod bridge;
mod dialog;
mod line;

pub use bridge::{Bridge, BridgedEvents, Received};
pub use dialog::ProgressDialog;
pub use line::{ProgressLine, ProgressLineKind, ProgressMessage};

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::error::{DialogError, Result};
use crate::ui::runner::DialogRunner;
use crate::ui::session::Session;
use crate::ui::terminal::{CrosstermEvents, EventSource};

#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub title: String,
    /// Queued lines before `add_*` calls block.
    pub capacity: usize,
}

impl ProgressConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            capacity: 100,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// What the render loop had when it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Every line received, in the order the producer sent them.
    pub lines: Vec<ProgressLine>,
    /// Whether the completion signal arrived before the loop exited.
    pub completed: bool,
}

/// Producer-side handle to a running progress stream.
///
/// Dropping an unfinished view dismisses it.
pub struct ProgressView {
    bridge: Arc<Bridge>,
    handle: Option<JoinHandle<Result<ProgressSummary>>>,
}

impl ProgressView {
    /// Starts a stream that reads keys from the terminal.
    pub fn start(session: &Session, config: ProgressConfig) -> Result<Self> {
        Self::spawn(session, config, CrosstermEvents::new()?)
    }

    /// Starts a stream whose render loop reads input from `events`.
    pub fn spawn<S>(session: &Session, config: ProgressConfig, events: S) -> Result<Self>
    where
        S: EventSource + Send + 'static,
    {
        let bridge = Arc::new(Bridge::new(config.capacity));
        let session = session.clone();
        let loop_bridge = Arc::clone(&bridge);

        let handle = thread::Builder::new()
            .name("progress-view".to_string())
            .spawn(move || {
                let dialog = ProgressDialog::new(config.title, session.theme().clone());
                let events = BridgedEvents::new(events, Arc::clone(&loop_bridge));
                let result = DialogRunner::new(&session, dialog, events).run();
                loop_bridge.close();
                debug!(ok = result.is_ok(), "Progress render loop exited");
                result
            })?;

        Ok(Self {
            bridge,
            handle: Some(handle),
        })
    }

    pub fn add_line(&self, kind: ProgressLineKind, message: impl Into<String>) -> Result<()> {
        self.bridge
            .send(ProgressMessage::Line(ProgressLine::new(kind, message)))
    }

    pub fn add_text(&self, message: impl Into<String>) -> Result<()> {
        self.add_line(ProgressLineKind::Text, message)
    }

    pub fn add_info(&self, message: impl Into<String>) -> Result<()> {
        self.add_line(ProgressLineKind::Info, message)
    }

    pub fn add_status(&self, message: impl Into<String>) -> Result<()> {
        self.add_line(ProgressLineKind::Status, message)
    }

    pub fn add_success(&self, message: impl Into<String>) -> Result<()> {
        self.add_line(ProgressLineKind::Success, message)
    }

    pub fn add_warning(&self, message: impl Into<String>) -> Result<()> {
        self.add_line(ProgressLineKind::Warning, message)
    }

    pub fn add_error(&self, message: impl Into<String>) -> Result<()> {
        self.add_line(ProgressLineKind::Error, message)
    }

    /// Signals completion, then waits for the user to dismiss the view.
    pub fn done(mut self) -> Result<ProgressSummary> {
        if let Err(e) = self.bridge.send(ProgressMessage::Done) {
            debug!("Completion not delivered: {}", e);
        }
        self.join()
    }

    /// Stops the render loop without waiting for the user.
    pub fn dismiss(mut self) -> Result<ProgressSummary> {
        self.bridge.request_dismiss();
        self.join()
    }

    fn join(&mut self) -> Result<ProgressSummary> {
        let handle = self.handle.take().ok_or(DialogError::AlreadyFinished)?;
        handle.join().map_err(|_| DialogError::RenderLoopPanicked)?
    }
}

impl Drop for ProgressView {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.bridge.request_dismiss();
            if let Err(e) = self.join() {
                warn!("Progress view ended with error: {}", e);
            }
        }
    }
}
