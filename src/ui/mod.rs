//! Full-screen dialogs and the machinery they run on.
pub mod dialogs;
pub mod event;
pub mod layout;
pub mod print;
pub mod progress;
pub mod runner;
pub mod session;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod viewport;

pub use dialogs::{
    run_confirm, run_dialog, run_dialog_with, run_input, run_menu, run_menu_simple, show_info,
    show_list, show_message, ConfirmConfig, InfoConfig, InfoRow, InfoSection, InputConfig,
    InputOutcome, ListConfig, MenuConfig, MenuOption, MessageKind,
};
pub use event::{DialogEvent, Key};
pub use progress::{ProgressConfig, ProgressLine, ProgressLineKind, ProgressSummary, ProgressView};
pub use runner::{Dialog, DialogRunner, RunState, Step};
pub use session::Session;
pub use terminal::{CrosstermEvents, EventSource, ScriptedEvents};
pub use theme::Theme;
