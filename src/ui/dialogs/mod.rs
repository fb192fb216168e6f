//! The built-in dialogs and their one-call entry points.
//!
//! Every entry point reads keys from the controlling terminal. To drive a
//! dialog from another source, build it and hand it to [`run_dialog_with`].

mod info;
mod input;
mod list;
mod menu;

pub use info::{InfoConfig, InfoDialog, InfoRow, InfoSection};
pub use input::{InputConfig, InputDialog, InputOutcome, TextBuffer};
pub use list::{ListConfig, ListDialog};
pub use menu::{ConfirmConfig, ConfirmDialog, MenuConfig, MenuDialog, MenuOption, MessageKind};

use crate::error::Result;
use crate::ui::event::Key;
use crate::ui::runner::{Dialog, DialogRunner};
use crate::ui::session::Session;
use crate::ui::terminal::{CrosstermEvents, EventSource};
use crate::ui::viewport::ScrollWindow;

/// Runs `dialog` against the terminal.
pub fn run_dialog<D: Dialog>(session: &Session, dialog: D) -> Result<D::Outcome> {
    run_dialog_with(session, dialog, CrosstermEvents::new()?)
}

/// Runs `dialog` against any event source.
pub fn run_dialog_with<D, S>(session: &Session, dialog: D, events: S) -> Result<D::Outcome>
where
    D: Dialog,
    S: EventSource,
{
    DialogRunner::new(session, dialog, events).run()
}

/// Selected value, or `None` if the user backed out.
pub fn run_menu(session: &Session, config: MenuConfig) -> Result<Option<String>> {
    run_dialog(session, MenuDialog::new(config).with_layout(session.layout()))
}

pub fn run_menu_simple(session: &Session, title: &str, labels: &[&str]) -> Result<Option<String>> {
    run_menu(session, MenuConfig::simple(title, labels))
}

/// `true` only when the affirmative option was committed.
pub fn run_confirm(session: &Session, config: ConfirmConfig) -> Result<bool> {
    run_dialog(session, ConfirmDialog::new(config).with_layout(session.layout()))
}

pub fn show_message(session: &Session, kind: MessageKind, text: &str) -> Result<()> {
    run_menu(session, MenuConfig::message(kind, text))?;
    Ok(())
}

pub fn run_input(session: &Session, config: InputConfig) -> Result<InputOutcome> {
    run_dialog(session, InputDialog::new(config))
}

pub fn show_list(session: &Session, config: ListConfig) -> Result<()> {
    run_dialog(session, ListDialog::new(config).with_layout(session.layout()))
}

pub fn show_info(session: &Session, config: InfoConfig) -> Result<()> {
    run_dialog(session, InfoDialog::new(config).with_layout(session.layout()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PagerKey {
    Handled,
    Dismiss,
}

/// Key handling shared by the read-only dialogs.
pub(crate) fn pager_key(window: &mut ScrollWindow, key: Key, page: usize) -> PagerKey {
    match key {
        Key::Enter | Key::Esc | Key::CtrlC | Key::Char(' ') | Key::Char('q') => {
            return PagerKey::Dismiss
        }
        Key::Up | Key::Char('k') => window.up(1),
        Key::Down | Key::Char('j') => window.down(1),
        Key::PageUp => window.up(page),
        Key::PageDown => window.down(page),
        Key::Home => window.top(),
        Key::End => window.bottom(),
        _ => {}
    }
    PagerKey::Handled
}

pub(crate) fn pager_help(scrollable: bool) -> &'static str {
    if scrollable {
        "↑/↓: scroll • enter/q/esc: close"
    } else {
        "enter/q/esc: close"
    }
}
