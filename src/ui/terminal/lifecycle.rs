use std::io::stdout;
use std::time::Duration;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{self},
};
use tracing::debug;

use super::EventSource;
use crate::error::{DialogError, Result};
use crate::ui::event::DialogEvent;

/// Reads key, paste and resize events from the controlling terminal.
///
/// Raw mode and bracketed paste are enabled for the lifetime of the value.
pub struct CrosstermEvents {
    _private: (),
}

impl CrosstermEvents {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
            debug!("Bracketed paste unavailable: {}", e);
        }
        Ok(Self { _private: () })
    }

    pub fn cleanup(&mut self) -> Result<()> {
        let _ = execute!(stdout(), DisableBracketedPaste);
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for CrosstermEvents {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

impl EventSource for CrosstermEvents {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().map_err(DialogError::TerminalSize)
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<DialogEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let translated = match event::read()? {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                Some(DialogEvent::Key(key_event.into()))
            }
            Event::Paste(text) => Some(DialogEvent::Paste(text)),
            Event::Resize(width, height) => Some(DialogEvent::Resize(width, height)),
            _ => None,
        };
        Ok(translated)
    }
}
