use crossterm::style::{Attribute, ContentStyle};
use unicode_width::UnicodeWidthChar;

use crate::ui::event::{DialogEvent, Key};
use crate::ui::layout::{self, BodyBuilder, DialogView};
use crate::ui::runner::{Dialog, Step};
use crate::ui::text::StyledLine;
use crate::ui::theme::Theme;

const INPUT_HELP: &str = "enter: confirm • esc: cancel";
const FIELD_WIDTH: usize = 50;
const CURSOR_GLYPH: &str = "█";

/// A string with a cursor counted in chars, never in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    cursor: usize,
}

impl TextBuffer {
    /// Buffer holding `value` with the cursor at its end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_value(self) -> String {
        self.value
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Backspace. Returns whether a char was removed.
    pub fn remove_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor - 1);
        self.value.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete. Returns whether a char was removed.
    pub fn remove_at(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor);
        self.value.remove(byte_pos);
        true
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }
}

#[derive(Debug, Clone)]
pub struct InputConfig {
    pub title: String,
    pub description: Option<String>,
    /// Shown in place of an empty value.
    pub placeholder: String,
    /// Initial value.
    pub value: String,
    /// Render every char as `mask`.
    pub password: bool,
    pub mask: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            placeholder: String::new(),
            value: String::new(),
            password: false,
            mask: '•',
        }
    }
}

impl InputConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    pub value: String,
    pub confirmed: bool,
}

impl InputOutcome {
    fn cancelled() -> Self {
        Self {
            value: String::new(),
            confirmed: false,
        }
    }
}

/// Single-line text entry.
#[derive(Debug, Clone)]
pub struct InputDialog {
    config: InputConfig,
    buffer: TextBuffer,
    width: u16,
}

impl InputDialog {
    pub fn new(config: InputConfig) -> Self {
        let buffer = TextBuffer::new(config.value.clone());
        Self {
            config,
            buffer,
            width: 0,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Chars as drawn: the mask in password mode, the value otherwise.
    fn display_chars(&self) -> Vec<char> {
        if self.config.password {
            vec![self.config.mask; self.buffer.len()]
        } else {
            self.buffer.value().chars().collect()
        }
    }

    /// Field text scrolled so the cursor stays inside `width` cells.
    fn field_line(&self, width: usize, theme: &Theme) -> StyledLine {
        if self.buffer.is_empty() && !self.config.placeholder.is_empty() {
            let mut line = StyledLine::styled(CURSOR_GLYPH, theme.fg(theme.primary));
            line.push(self.config.placeholder.as_str(), theme.description());
            return line.truncate(width);
        }

        let chars = self.display_chars();
        let cursor = self.buffer.cursor();
        let cell = |c: &char| UnicodeWidthChar::width(*c).unwrap_or(0);

        // the cursor cell itself needs one column
        let mut start = cursor;
        let mut used = chars.get(cursor).map(cell).unwrap_or(1);
        while start > 0 {
            let w = cell(&chars[start - 1]);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }

        let mut line = StyledLine::new();
        let before: String = chars[start..cursor].iter().collect();
        line.push(before, theme.body());
        match chars.get(cursor) {
            Some(c) => {
                let mut style = ContentStyle::new();
                style.attributes.set(Attribute::Reverse);
                line.push(c.to_string(), style);
                let after: String = chars[cursor + 1..].iter().collect();
                line.push(after, theme.body());
            }
            None => {
                line.push(CURSOR_GLYPH, theme.fg(theme.primary));
            }
        }
        line.truncate(width)
    }
}

impl Dialog for InputDialog {
    type Outcome = InputOutcome;

    fn update(&mut self, event: DialogEvent) -> Step<Self::Outcome> {
        match event {
            DialogEvent::Key(key) => match key {
                Key::Enter => {
                    return Step::Done(InputOutcome {
                        value: self.buffer.value().to_string(),
                        confirmed: true,
                    })
                }
                Key::Esc | Key::CtrlC => return Step::Done(InputOutcome::cancelled()),
                Key::Backspace => {
                    self.buffer.remove_before();
                }
                Key::Delete => {
                    self.buffer.remove_at();
                }
                Key::Left => self.buffer.left(),
                Key::Right => self.buffer.right(),
                Key::Home | Key::CtrlA => self.buffer.home(),
                Key::End | Key::CtrlE => self.buffer.end(),
                other => {
                    if let Some(c) = other.printable() {
                        self.buffer.insert(c);
                    }
                }
            },
            DialogEvent::Paste(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    self.buffer.insert(c);
                }
            }
            DialogEvent::Resize(width, _) => self.width = width,
            DialogEvent::Interrupt => return Step::Done(InputOutcome::cancelled()),
            DialogEvent::Progress(_) => {}
        }
        Step::Continue
    }

    fn view(&self, theme: &Theme) -> DialogView {
        let width = layout::content_width(self.width);
        // field border plus one column of padding per side
        let field_outer = FIELD_WIDTH.min(width);
        let field_text = field_outer.saturating_sub(4).max(1);

        let border = theme.fg(theme.primary);
        let rule = "─".repeat(field_outer.saturating_sub(2));
        let mut middle = StyledLine::styled("│ ", border);
        middle.append(self.field_line(field_text, theme).pad_to(field_text));
        middle.push(" │", border);

        let body = BodyBuilder::new()
            .title(&self.config.title, theme)
            .description(self.config.description.as_deref(), width, theme)
            .row(StyledLine::styled(format!("╭{rule}╮"), border))
            .row(middle)
            .row(StyledLine::styled(format!("╰{rule}╯"), border))
            .help(INPUT_HELP, theme)
            .build();
        DialogView::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(dialog: &mut InputDialog, keys: &[Key]) {
        for key in keys {
            dialog.update(DialogEvent::Key(*key));
        }
    }

    fn field_text(dialog: &InputDialog) -> String {
        dialog.view(&Theme::plain()).body[3].text()
    }

    #[test]
    fn buffer_edits_by_char() {
        let mut buffer = TextBuffer::new("héllo");
        assert_eq!(buffer.cursor(), 5);
        buffer.left();
        buffer.left();
        assert!(buffer.remove_before());
        assert_eq!(buffer.value(), "hélo");
        buffer.home();
        assert!(!buffer.remove_before());
        buffer.right();
        assert!(buffer.remove_at());
        assert_eq!(buffer.value(), "hlo");
        buffer.end();
        assert!(!buffer.remove_at());
        buffer.insert('!');
        assert_eq!(buffer.value(), "hlo!");
    }

    #[test]
    fn cursor_is_clamped() {
        let mut buffer = TextBuffer::new("ab");
        for _ in 0..5 {
            buffer.right();
        }
        assert_eq!(buffer.cursor(), 2);
        for _ in 0..5 {
            buffer.left();
        }
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn enter_confirms_and_esc_cancels() {
        let mut dialog = InputDialog::new(InputConfig::new("Name").with_value("Bob"));
        assert_eq!(
            dialog.update(DialogEvent::Key(Key::Enter)),
            Step::Done(InputOutcome {
                value: "Bob".into(),
                confirmed: true
            })
        );
        let mut dialog = InputDialog::new(InputConfig::new("Name").with_value("Bob"));
        assert_eq!(
            dialog.update(DialogEvent::Key(Key::Esc)),
            Step::Done(InputOutcome {
                value: String::new(),
                confirmed: false
            })
        );
    }

    #[test]
    fn editing_keys_move_within_value() {
        let mut dialog = InputDialog::new(InputConfig::new("Name").with_value("ac"));
        typed(&mut dialog, &[Key::Left, Key::Char('b'), Key::CtrlA, Key::Char('>')]);
        typed(&mut dialog, &[Key::CtrlE, Key::Backspace, Key::Home, Key::Delete]);
        assert_eq!(dialog.buffer().value(), "ab");
        // ctrl chords other than a/e never insert
        typed(&mut dialog, &[Key::Unknown, Key::Char('\u{1b}')]);
        assert_eq!(dialog.buffer().value(), "ab");
    }

    #[test]
    fn password_mode_masks_every_char() {
        let mut dialog = InputDialog::new(InputConfig::new("Secret").password());
        dialog.update(DialogEvent::Resize(80, 24));
        dialog.update(DialogEvent::Paste("pä55".into()));
        assert_eq!(dialog.buffer().value(), "pä55");
        let field = field_text(&dialog);
        assert!(field.contains("••••█"));
        assert!(!field.contains("pä55"));
    }

    #[test]
    fn placeholder_only_when_empty() {
        let mut dialog = InputDialog::new(InputConfig::new("Name").with_placeholder("name"));
        dialog.update(DialogEvent::Resize(80, 24));
        assert!(field_text(&dialog).contains("█name"));
        dialog.update(DialogEvent::Key(Key::Char('A')));
        let field = field_text(&dialog);
        assert!(field.contains("A█"));
        assert!(!field.contains("name"));
    }

    #[test]
    fn long_values_scroll_to_keep_cursor_visible() {
        let long = "x".repeat(80) + "END";
        let mut dialog = InputDialog::new(InputConfig::new("Path").with_value(long));
        dialog.update(DialogEvent::Resize(80, 24));
        let field = field_text(&dialog);
        assert!(field.contains("END█"));

        dialog.update(DialogEvent::Key(Key::Home));
        let field = field_text(&dialog);
        assert!(!field.contains("END"));
    }
}
