use crossterm::style::ContentStyle;

use crate::ui::text::StyledLine;
use crate::ui::theme::Theme;
use crate::ui::viewport::wrap_words;

/// Icon plus the space after it.
const ICON_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressLineKind {
    Text,
    Info,
    Status,
    Success,
    Warning,
    Error,
}

impl ProgressLineKind {
    pub fn icon(self) -> Option<&'static str> {
        match self {
            ProgressLineKind::Text => None,
            ProgressLineKind::Info => Some("ℹ"),
            ProgressLineKind::Status | ProgressLineKind::Success => Some("✓"),
            ProgressLineKind::Warning => Some("⚠"),
            ProgressLineKind::Error => Some("✗"),
        }
    }

    fn style(self, theme: &Theme) -> ContentStyle {
        match self {
            ProgressLineKind::Text => theme.body(),
            ProgressLineKind::Info => theme.fg(theme.info),
            ProgressLineKind::Status => theme.fg(theme.success),
            ProgressLineKind::Success => theme.bold(theme.success),
            ProgressLineKind::Warning => theme.fg(theme.warning),
            ProgressLineKind::Error => theme.fg(theme.error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressLine {
    pub kind: ProgressLineKind,
    pub message: String,
}

impl ProgressLine {
    pub fn new(kind: ProgressLineKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Wrapped rows for a viewport `width` cells wide. Continuation rows of
    /// an iconned line are indented under the message.
    pub fn render(&self, width: usize, theme: &Theme) -> Vec<StyledLine> {
        let style = self.kind.style(theme);
        let Some(icon) = self.kind.icon() else {
            return wrap_words(&self.message, width)
                .into_iter()
                .map(|row| StyledLine::styled(row, style))
                .collect();
        };

        if width <= ICON_WIDTH {
            return vec![StyledLine::styled(format!("{icon} {}", self.message), style)];
        }
        wrap_words(&self.message, width - ICON_WIDTH)
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                if index == 0 {
                    StyledLine::styled(format!("{icon} {row}"), style)
                } else {
                    StyledLine::styled(format!("  {row}"), style)
                }
            })
            .collect()
    }
}

/// What the producer sends through the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressMessage {
    Line(ProgressLine),
    /// Completion sentinel; nothing follows it.
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(line: &ProgressLine, width: usize) -> Vec<String> {
        line.render(width, &Theme::plain())
            .iter()
            .map(StyledLine::text)
            .collect()
    }

    #[test]
    fn icons_prefix_first_row_and_indent_the_rest() {
        let line = ProgressLine::new(ProgressLineKind::Warning, "disk almost full on root");
        assert_eq!(rows(&line, 12), vec!["⚠ disk", "  almost", "  full on", "  root"]);
    }

    #[test]
    fn text_lines_have_no_icon() {
        let line = ProgressLine::new(ProgressLineKind::Text, "plain output");
        assert_eq!(rows(&line, 40), vec!["plain output"]);
        let empty = ProgressLine::new(ProgressLineKind::Text, "");
        assert_eq!(rows(&empty, 40), vec![""]);
    }

    #[test]
    fn each_kind_has_its_icon() {
        let icons: Vec<_> = [
            ProgressLineKind::Info,
            ProgressLineKind::Status,
            ProgressLineKind::Success,
            ProgressLineKind::Warning,
            ProgressLineKind::Error,
        ]
        .iter()
        .map(|kind| kind.icon().unwrap())
        .collect();
        assert_eq!(icons, vec!["ℹ", "✓", "✓", "⚠", "✗"]);
    }
}
