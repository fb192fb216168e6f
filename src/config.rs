//! Environment and presentation configuration.

use std::env;

use crate::ui::theme::Theme;

/// Settings read from the process environment.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// `NO_COLOR` is set to a non-empty value.
    pub no_color: bool,
    /// `TERMDIALOG_LOG` filter directive.
    pub log_filter: Option<String>,
    /// `TERMDIALOG_LOG_FILE` destination for diagnostics.
    pub log_file: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            no_color: env_string_opt("NO_COLOR").is_some(),
            log_filter: env_string_opt("TERMDIALOG_LOG"),
            log_file: env_string_opt("TERMDIALOG_LOG_FILE"),
        }
    }
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

/// Row budget shared by the scrolling dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Rows taken by the title, description, help line, box border and footer.
    pub chrome_reserve: u16,
    /// Lower bound on visible rows, however small the terminal.
    pub min_visible: usize,
    /// Rows moved by page up / page down in list and info dialogs.
    pub page_size: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            chrome_reserve: 15,
            min_visible: 5,
            page_size: 10,
        }
    }
}

impl Layout {
    /// Number of content rows that fit in a terminal `height` rows tall.
    pub fn visible_rows(&self, height: u16) -> usize {
        (height.saturating_sub(self.chrome_reserve) as usize).max(self.min_visible)
    }
}

/// Application name and version rendered in the footer of every dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub build: String,
}

impl AppInfo {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        build: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            build: build.into(),
        }
    }

    /// Footer text; the build stamp is omitted when empty or `unknown`.
    pub fn footer(&self) -> String {
        if self.build.is_empty() || self.build == "unknown" {
            format!("{} {}", self.name, self.version)
        } else {
            format!("{} {} ({})", self.name, self.version, self.build)
        }
    }
}

/// Everything a session hands to the dialogs it runs.
#[derive(Debug, Clone, Default)]
pub struct DialogConfig {
    pub theme: Theme,
    pub layout: Layout,
    pub app_info: Option<AppInfo>,
}

impl DialogConfig {
    pub fn from_env(env: &EnvConfig) -> Self {
        let theme = if env.no_color {
            Theme::plain()
        } else {
            Theme::default()
        };
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn with_app_info(mut self, app_info: AppInfo) -> Self {
        self.app_info = Some(app_info);
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}
