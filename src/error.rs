//! Error types shared by every dialog.

use thiserror::Error;

/// Errors surfaced by a dialog's run entry point or by the progress bridge.
#[derive(Debug, Error)]
pub enum DialogError {
    /// Writing to or reading from the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal size could not be determined before the first render.
    #[error("failed to read terminal size: {0}")]
    TerminalSize(#[source] std::io::Error),

    /// The event source ran dry before the dialog reached a terminal state.
    #[error("input event stream closed")]
    InputClosed,

    /// A key name did not match the input vocabulary.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// `run` was called on a runner whose dialog already produced its outcome.
    #[error("dialog already finished")]
    AlreadyFinished,

    /// The progress render loop exited; no more lines can be delivered.
    #[error("progress stream closed")]
    StreamClosed,

    /// The progress render thread panicked instead of returning an outcome.
    #[error("progress render loop panicked")]
    RenderLoopPanicked,
}

/// Result type alias using [`DialogError`].
pub type Result<T> = std::result::Result<T, DialogError>;
