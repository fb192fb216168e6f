use crossterm::style::ContentStyle;

use crate::config::Layout;
use crate::ui::event::{DialogEvent, Key};
use crate::ui::layout::{self, BodyBuilder, DialogView};
use crate::ui::runner::{Dialog, Step};
use crate::ui::text::StyledLine;
use crate::ui::theme::Theme;

const MENU_HELP: &str = "↑/↓: navigate • enter: select • q/esc: back";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub value: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Tone of a message title; picks the title colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    Info,
}

impl MessageKind {
    fn style(self, theme: &Theme) -> ContentStyle {
        let color = match self {
            MessageKind::Success => theme.success,
            MessageKind::Error => theme.error,
            MessageKind::Warning => theme.warning,
            MessageKind::Info => theme.info,
        };
        theme.bold(color)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuConfig {
    /// Text drawn above the box, outside the border.
    pub header: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub options: Vec<MenuOption>,
    /// Initial cursor; out-of-range values fall back to the first option.
    pub selected: usize,
    /// Colours the title as a message instead of a heading.
    pub tone: Option<MessageKind>,
}

impl MenuConfig {
    pub fn new(title: impl Into<String>, options: Vec<MenuOption>) -> Self {
        Self {
            title: title.into(),
            options,
            ..Self::default()
        }
    }

    /// Options whose label doubles as their value.
    pub fn simple(title: impl Into<String>, labels: &[&str]) -> Self {
        let options = labels
            .iter()
            .map(|label| MenuOption::new(*label, *label))
            .collect();
        Self::new(title, options)
    }

    /// Single `OK` option under a message styled by `kind`.
    pub fn message(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            tone: Some(kind),
            ..Self::new(text, vec![MenuOption::new("OK", "ok")])
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }
}

/// Two-option question. The options carry the values `yes` and `no`
/// whatever their labels say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmConfig {
    pub title: String,
    pub description: Option<String>,
    pub affirmative: String,
    pub negative: String,
    /// Start on the affirmative option.
    pub default_yes: bool,
}

impl ConfirmConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            affirmative: "Yes".to_string(),
            negative: "No".to_string(),
            default_yes: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the button labels; empty labels keep the defaults.
    pub fn with_labels(
        mut self,
        affirmative: impl Into<String>,
        negative: impl Into<String>,
    ) -> Self {
        let (affirmative, negative) = (affirmative.into(), negative.into());
        if !affirmative.is_empty() {
            self.affirmative = affirmative;
        }
        if !negative.is_empty() {
            self.negative = negative;
        }
        self
    }

    pub fn with_default(mut self, default_yes: bool) -> Self {
        self.default_yes = default_yes;
        self
    }
}

impl From<ConfirmConfig> for MenuConfig {
    fn from(config: ConfirmConfig) -> Self {
        Self {
            description: config.description,
            selected: if config.default_yes { 0 } else { 1 },
            ..Self::new(
                config.title,
                vec![
                    MenuOption::new(config.affirmative, "yes"),
                    MenuOption::new(config.negative, "no"),
                ],
            )
        }
    }
}

/// Selection menu with a wrapping cursor.
///
/// Outcome is the value of the committed option, or `None` when cancelled.
#[derive(Debug, Clone)]
pub struct MenuDialog {
    config: MenuConfig,
    layout: Layout,
    cursor: usize,
    width: u16,
    height: u16,
}

impl MenuDialog {
    pub fn new(config: MenuConfig) -> Self {
        let cursor = if config.selected < config.options.len() {
            config.selected
        } else {
            0
        };
        Self {
            config,
            layout: Layout::default(),
            cursor,
            width: 0,
            height: 0,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn move_up(&mut self) {
        let len = self.config.options.len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    fn move_down(&mut self) {
        let len = self.config.options.len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
    }

    fn commit(&self) -> Option<String> {
        self.config
            .options
            .get(self.cursor)
            .map(|option| option.value.clone())
    }

    /// First and one-past-last option shown, keeping the cursor centered
    /// where possible.
    fn window(&self) -> (usize, usize) {
        let len = self.config.options.len();
        let visible = self.layout.visible_rows(self.height).max(1).min(len);
        if len <= visible {
            return (0, len);
        }
        let start = self.cursor.saturating_sub(visible / 2).min(len - visible);
        (start, start + visible)
    }
}

impl Dialog for MenuDialog {
    type Outcome = Option<String>;

    fn update(&mut self, event: DialogEvent) -> Step<Self::Outcome> {
        match event {
            DialogEvent::Key(key) => match key {
                Key::Up | Key::Char('k') => self.move_up(),
                Key::Down | Key::Char('j') => self.move_down(),
                Key::Home => self.cursor = 0,
                Key::End => self.cursor = self.config.options.len().saturating_sub(1),
                Key::Enter | Key::Char(' ') => return Step::Done(self.commit()),
                Key::Esc | Key::Char('q') | Key::CtrlC => return Step::Done(None),
                _ => {}
            },
            DialogEvent::Resize(width, height) => {
                self.width = width;
                self.height = height;
            }
            DialogEvent::Interrupt => return Step::Done(None),
            DialogEvent::Paste(_) | DialogEvent::Progress(_) => {}
        }
        Step::Continue
    }

    fn view(&self, theme: &Theme) -> DialogView {
        let width = layout::content_width(self.width);
        let title_style = match self.config.tone {
            Some(kind) => kind.style(theme),
            None => theme.title(),
        };

        let mut body = BodyBuilder::new();
        if !self.config.title.is_empty() {
            body = body.rows(
                crate::ui::viewport::wrap_words(&self.config.title, width)
                    .into_iter()
                    .map(|line| StyledLine::styled(line, title_style)),
            );
            body = body.blank();
        }
        body = body.description(self.config.description.as_deref(), width, theme);

        let (start, end) = self.window();
        for (index, option) in self.config.options[start..end].iter().enumerate() {
            let index = start + index;
            let line = if index == self.cursor {
                let mut line = StyledLine::styled("> ", theme.fg(theme.primary));
                line.push(option.label.as_str(), theme.bold(theme.primary));
                line
            } else {
                let mut line = StyledLine::plain("  ");
                line.push(option.label.as_str(), theme.body());
                line
            };
            body = body.row(line);
        }
        if start > 0 || end < self.config.options.len() {
            body = body.row(StyledLine::styled(
                format!("  ({}/{})", self.cursor + 1, self.config.options.len()),
                theme.description(),
            ));
        }

        DialogView::new(body.help(MENU_HELP, theme).build())
            .with_header(self.config.header.clone())
    }
}

/// Confirmation menu; `true` only when the affirmative option is committed.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    menu: MenuDialog,
}

impl ConfirmDialog {
    pub fn new(config: ConfirmConfig) -> Self {
        Self {
            menu: MenuDialog::new(config.into()),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.menu = self.menu.with_layout(layout);
        self
    }
}

impl Dialog for ConfirmDialog {
    type Outcome = bool;

    fn update(&mut self, event: DialogEvent) -> Step<bool> {
        match self.menu.update(event) {
            Step::Done(choice) => Step::Done(choice.as_deref() == Some("yes")),
            Step::Continue => Step::Continue,
        }
    }

    fn view(&self, theme: &Theme) -> DialogView {
        self.menu.view(theme)
    }
}
