use std::collections::VecDeque;
use std::time::Duration;

use super::EventSource;
use crate::error::{DialogError, Result};
use crate::ui::event::{DialogEvent, Key};

/// Replays a fixed sequence of events against a fixed terminal size.
///
/// Used to drive dialogs without a terminal, e.g. in tests or recordings.
/// Once the script is exhausted, [`EventSource::next_event`] fails with
/// [`DialogError::InputClosed`] and polling returns nothing.
#[derive(Debug, Clone)]
pub struct ScriptedEvents {
    size: (u16, u16),
    events: VecDeque<DialogEvent>,
}

impl ScriptedEvents {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: (width, height),
            events: VecDeque::new(),
        }
    }

    /// Script made of key names as accepted by `Key::from_str`.
    pub fn keys(width: u16, height: u16, names: &[&str]) -> Result<Self> {
        let mut script = Self::new(width, height);
        for name in names {
            script.push_key(name.parse::<Key>()?);
        }
        Ok(script)
    }

    pub fn push(&mut self, event: DialogEvent) -> &mut Self {
        self.events.push_back(event);
        self
    }

    pub fn push_key(&mut self, key: Key) -> &mut Self {
        self.push(DialogEvent::Key(key))
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(self.size)
    }

    fn poll_event(&mut self, _timeout: Duration) -> Result<Option<DialogEvent>> {
        Ok(self.events.pop_front())
    }

    fn next_event(&mut self) -> Result<DialogEvent> {
        self.events.pop_front().ok_or(DialogError::InputClosed)
    }
}
