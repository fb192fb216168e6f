//! Alternate-screen session management and the single output gate.
//!
//! Invariant: every byte the dialogs write to the terminal goes through the
//! session's mutex-guarded writer, including rendered frames.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use tracing::debug;

use crate::config::{DialogConfig, Layout};
use crate::error::Result;
use crate::ui::text::StyledLine;
use crate::ui::theme::Theme;

struct SessionState {
    active: bool,
    out: Box<dyn Write + Send>,
}

struct SessionInner {
    state: Mutex<SessionState>,
    config: DialogConfig,
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        let state = match self.state.get_mut() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        if state.active {
            state.active = false;
            let _ = execute!(state.out, cursor::Show, terminal::LeaveAlternateScreen);
        }
    }
}

/// Handle to the terminal session shared by a chain of dialogs.
///
/// Cloning is cheap; all clones control the same alternate-screen state.
/// Dropping the last clone of an active session ends it.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    /// Session writing to the process's stdout.
    pub fn new(config: DialogConfig) -> Self {
        Self::with_writer(config, Box::new(io::stdout()))
    }

    /// Session writing to an arbitrary sink.
    pub fn with_writer(config: DialogConfig, out: Box<dyn Write + Send>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(SessionState { active: false, out }),
                config,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        match self.inner.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn config(&self) -> &DialogConfig {
        &self.inner.config
    }

    pub fn theme(&self) -> &Theme {
        &self.inner.config.theme
    }

    pub fn layout(&self) -> Layout {
        self.inner.config.layout
    }

    /// Enters the alternate screen once; repeated calls are no-ops.
    pub fn begin(&self) -> Result<()> {
        let mut state = self.lock();
        if state.active {
            return Ok(());
        }
        execute!(
            state.out,
            terminal::EnterAlternateScreen,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        state.active = true;
        debug!("Session started");
        Ok(())
    }

    /// Restores the cursor and leaves the alternate screen, only if active.
    pub fn end(&self) -> Result<()> {
        let mut state = self.lock();
        if !state.active {
            return Ok(());
        }
        state.active = false;
        execute!(state.out, cursor::Show, terminal::LeaveAlternateScreen)?;
        debug!("Session ended");
        Ok(())
    }

    pub fn in_session(&self) -> bool {
        self.lock().active
    }

    /// Prepares the screen for one dialog.
    ///
    /// Inside a session the screen is cleared and the dialog runs inline.
    /// Outside, the dialog gets its own alternate screen, left again when the
    /// returned scope drops.
    pub fn dialog_scope(&self) -> Result<DialogScope<'_>> {
        let mut state = self.lock();
        let owns_screen = !state.active;
        if owns_screen {
            execute!(
                state.out,
                terminal::EnterAlternateScreen,
                Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                cursor::Hide
            )?;
        } else {
            execute!(
                state.out,
                Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                cursor::Hide
            )?;
        }
        Ok(DialogScope {
            session: self,
            owns_screen,
        })
    }

    /// Writes a full frame, one row per line.
    ///
    /// Rows are overwritten in place; only the tail of each row and the rows
    /// below the frame are cleared.
    pub(crate) fn draw(&self, frame: &[StyledLine]) -> Result<()> {
        let mut state = self.lock();
        let out = &mut state.out;
        for (row, line) in frame.iter().enumerate() {
            queue!(
                out,
                cursor::MoveTo(0, row as u16),
                Print(line),
                Clear(ClearType::UntilNewLine)
            )?;
        }
        queue!(
            out,
            cursor::MoveTo(0, frame.len() as u16),
            Clear(ClearType::FromCursorDown)
        )?;
        out.flush()?;
        Ok(())
    }
}

/// Screen ownership for the lifetime of one dialog run.
pub struct DialogScope<'a> {
    session: &'a Session,
    owns_screen: bool,
}

impl DialogScope<'_> {
    /// Whether this dialog entered its own alternate screen.
    pub fn owns_screen(&self) -> bool {
        self.owns_screen
    }
}

impl Drop for DialogScope<'_> {
    fn drop(&mut self) {
        if self.owns_screen {
            let mut state = self.session.lock();
            let _ = execute!(state.out, cursor::Show, terminal::LeaveAlternateScreen);
        }
    }
}
