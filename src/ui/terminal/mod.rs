//! Host runtime adapters that feed decoded events into the render loop.
mod lifecycle;
mod scripted;

pub use lifecycle::CrosstermEvents;
pub use scripted::ScriptedEvents;

use std::time::Duration;

use crate::error::Result;
use crate::ui::event::DialogEvent;

/// Slice used by [`EventSource::next_event`] while waiting for input.
pub const POLL_SLICE: Duration = Duration::from_millis(50);

/// A source of decoded terminal events.
pub trait EventSource {
    /// Current terminal size as `(width, height)` in cells.
    fn size(&self) -> Result<(u16, u16)>;

    /// Waits up to `timeout` for the next event.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<DialogEvent>>;

    /// Blocks until the next event arrives.
    fn next_event(&mut self) -> Result<DialogEvent> {
        loop {
            if let Some(event) = self.poll_event(POLL_SLICE)? {
                return Ok(event);
            }
        }
    }
}
