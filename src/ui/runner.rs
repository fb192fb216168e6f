//! The single-threaded event loop every dialog runs on.

use tracing::{debug, trace, warn};

use crate::error::{DialogError, Result};
use crate::ui::event::DialogEvent;
use crate::ui::layout::{self, DialogView};
use crate::ui::session::Session;
use crate::ui::terminal::EventSource;
use crate::ui::theme::Theme;

/// Result of feeding one event to a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<O> {
    Continue,
    Done(O),
}

/// A dialog state machine: events in, one outcome out.
pub trait Dialog {
    type Outcome;

    /// Applies one event. Resize events arrive before the first render.
    fn update(&mut self, event: DialogEvent) -> Step<Self::Outcome>;

    fn view(&self, theme: &Theme) -> DialogView;

    /// Whether a failed frame draw may be dropped instead of ending the run.
    fn best_effort_render(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Ready,
    Running,
    Done,
}

/// Drives one dialog from `Ready` to `Done` against an event source.
pub struct DialogRunner<'s, D, S> {
    session: &'s Session,
    dialog: D,
    events: S,
    state: RunState,
    size: (u16, u16),
}

impl<'s, D, S> DialogRunner<'s, D, S>
where
    D: Dialog,
    S: EventSource,
{
    pub fn new(session: &'s Session, dialog: D, events: S) -> Self {
        Self {
            session,
            dialog,
            events,
            state: RunState::Ready,
            size: (0, 0),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn into_events(self) -> S {
        self.events
    }

    /// Runs the loop until the dialog produces its outcome.
    ///
    /// On error the dialog's state is left as it was; the runner must not be
    /// reused after it returned an outcome.
    pub fn run(&mut self) -> Result<D::Outcome> {
        if self.state == RunState::Done {
            return Err(DialogError::AlreadyFinished);
        }

        let (width, height) = self.events.size()?;
        let session = self.session;
        let _scope = session.dialog_scope()?;
        self.state = RunState::Running;
        debug!(width, height, "Dialog started");

        if let Step::Done(outcome) = self.apply(DialogEvent::Resize(width, height)) {
            return Ok(self.finish(outcome));
        }
        self.render()?;

        loop {
            let event = self.events.next_event()?;
            trace!(?event, "Dialog event");
            if let Step::Done(outcome) = self.apply(event) {
                return Ok(self.finish(outcome));
            }
            self.render()?;
        }
    }

    fn apply(&mut self, event: DialogEvent) -> Step<D::Outcome> {
        if let DialogEvent::Resize(width, height) = event {
            self.size = (width, height);
        }
        self.dialog.update(event)
    }

    fn finish(&mut self, outcome: D::Outcome) -> D::Outcome {
        self.state = RunState::Done;
        debug!("Dialog finished");
        outcome
    }

    fn render(&self) -> Result<()> {
        let (width, height) = self.size;
        let config = self.session.config();
        let view = self.dialog.view(&config.theme);
        let frame = layout::compose(&view, width, height, &config.theme, config.app_info.as_ref());

        match self.session.draw(&frame) {
            Ok(()) => Ok(()),
            Err(e) if self.dialog.best_effort_render() => {
                warn!("Dropped frame: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogConfig;
    use crate::ui::event::Key;
    use crate::ui::terminal::ScriptedEvents;
    use crate::ui::text::StyledLine;

    /// Counts keys until enter.
    struct Counter {
        keys: usize,
        resized: Option<(u16, u16)>,
    }

    impl Dialog for Counter {
        type Outcome = usize;

        fn update(&mut self, event: DialogEvent) -> Step<usize> {
            match event {
                DialogEvent::Key(Key::Enter) => Step::Done(self.keys),
                DialogEvent::Key(_) => {
                    self.keys += 1;
                    Step::Continue
                }
                DialogEvent::Resize(w, h) => {
                    self.resized = Some((w, h));
                    Step::Continue
                }
                _ => Step::Continue,
            }
        }

        fn view(&self, _theme: &Theme) -> DialogView {
            DialogView::new(vec![StyledLine::plain(self.keys.to_string())])
        }
    }

    fn session() -> Session {
        Session::with_writer(DialogConfig::default(), Box::new(std::io::sink()))
    }

    #[test]
    fn runs_until_done_and_refuses_rerun() {
        let session = session();
        let events = ScriptedEvents::keys(80, 24, &["a", "b", "enter"]).unwrap();
        let dialog = Counter {
            keys: 0,
            resized: None,
        };
        let mut runner = DialogRunner::new(&session, dialog, events);
        assert_eq!(runner.state(), RunState::Ready);
        assert_eq!(runner.run().unwrap(), 2);
        assert_eq!(runner.state(), RunState::Done);
        assert_eq!(runner.dialog().resized, Some((80, 24)));
        assert!(matches!(runner.run(), Err(DialogError::AlreadyFinished)));
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let session = session();
        let events = ScriptedEvents::keys(80, 24, &["a"]).unwrap();
        let dialog = Counter {
            keys: 0,
            resized: None,
        };
        let mut runner = DialogRunner::new(&session, dialog, events);
        assert!(matches!(runner.run(), Err(DialogError::InputClosed)));
        assert_eq!(runner.state(), RunState::Running);
    }
}
