//! Full-screen modal terminal dialogs: selection menus, text input,
//! scrollable lists and info panes, and live progress streams, chained
//! inside one alternate-screen session.
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use config::{AppInfo, DialogConfig, EnvConfig, Layout};
pub use error::{DialogError, Result};
pub use ui::Session;
