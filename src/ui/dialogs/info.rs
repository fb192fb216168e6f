use crate::config::Layout;
use crate::ui::event::DialogEvent;
use crate::ui::layout::{self, BodyBuilder, DialogView};
use crate::ui::runner::{Dialog, Step};
use crate::ui::text::{display_width, StyledLine};
use crate::ui::theme::Theme;
use crate::ui::viewport::ScrollWindow;

use super::{pager_help, pager_key, PagerKey};

/// One row of an info section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoRow {
    /// Rendered as `key: value`.
    KeyValue { key: String, value: String },
    /// Value without a key, e.g. a list entry.
    Value(String),
    /// Cells aligned across the section; every column but the last is padded.
    Columns(Vec<String>),
}

impl InfoRow {
    pub fn kv(key: impl Into<String>, value: impl Into<String>) -> Self {
        InfoRow::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        InfoRow::Value(value.into())
    }

    pub fn columns<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InfoRow::Columns(cells.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoSection {
    pub title: Option<String>,
    pub rows: Vec<InfoRow>,
}

impl InfoSection {
    pub fn new(title: impl Into<String>, rows: Vec<InfoRow>) -> Self {
        Self {
            title: Some(title.into()),
            rows,
        }
    }

    pub fn untitled(rows: Vec<InfoRow>) -> Self {
        Self { title: None, rows }
    }

    fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Widest cell per column index over this section's column rows.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            if let InfoRow::Columns(cells) = row {
                for (index, cell) in cells.iter().enumerate() {
                    let width = display_width(cell);
                    match widths.get_mut(index) {
                        Some(w) => *w = (*w).max(width),
                        None => widths.push(width),
                    }
                }
            }
        }
        widths
    }
}

#[derive(Debug, Clone, Default)]
pub struct InfoConfig {
    pub title: String,
    pub description: Option<String>,
    pub sections: Vec<InfoSection>,
}

impl InfoConfig {
    pub fn new(title: impl Into<String>, sections: Vec<InfoSection>) -> Self {
        Self {
            title: title.into(),
            description: None,
            sections,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Section titles, rows and one blank line between sections.
    pub fn total_lines(&self) -> usize {
        let count = self.sections.len();
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                usize::from(section.has_title())
                    + section.rows.len()
                    + usize::from(index + 1 < count)
            })
            .sum()
    }

    fn render_lines(&self, theme: &Theme) -> Vec<StyledLine> {
        let key_style = theme.description();
        let value_style = theme.fg(theme.primary);
        let mut lines = Vec::with_capacity(self.total_lines());

        for (index, section) in self.sections.iter().enumerate() {
            if let Some(title) = section.title.as_deref().filter(|t| !t.is_empty()) {
                lines.push(StyledLine::styled(title, theme.bold(theme.warning)));
            }

            let widths = section.column_widths();
            for row in &section.rows {
                let line = match row {
                    InfoRow::KeyValue { key, value } => {
                        let mut line = StyledLine::styled(format!("{key}: "), key_style);
                        line.push(value.as_str(), value_style);
                        line
                    }
                    InfoRow::Value(value) => StyledLine::styled(value.as_str(), value_style),
                    InfoRow::Columns(cells) => {
                        let mut line = StyledLine::new();
                        for (column, cell) in cells.iter().enumerate() {
                            if column > 0 {
                                line.push("  ", Default::default());
                            }
                            let cell = StyledLine::styled(cell.as_str(), value_style);
                            if column + 1 == cells.len() {
                                line.append(cell);
                            } else {
                                line.append(cell.pad_to(widths[column]));
                            }
                        }
                        line
                    }
                };
                lines.push(line);
            }

            if index + 1 < self.sections.len() {
                lines.push(StyledLine::new());
            }
        }
        lines
    }
}

/// Read-only scrollable pane of titled sections.
#[derive(Debug, Clone)]
pub struct InfoDialog {
    config: InfoConfig,
    layout: Layout,
    window: ScrollWindow,
    width: u16,
}

impl InfoDialog {
    pub fn new(config: InfoConfig) -> Self {
        let layout = Layout::default();
        let window = ScrollWindow::new(config.total_lines(), layout.min_visible);
        Self {
            config,
            layout,
            window,
            width: 0,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self.window.set_visible(layout.min_visible);
        self
    }

    pub fn window(&self) -> &ScrollWindow {
        &self.window
    }
}

impl Dialog for InfoDialog {
    type Outcome = ();

    fn update(&mut self, event: DialogEvent) -> Step<()> {
        match event {
            DialogEvent::Key(key) => {
                if pager_key(&mut self.window, key, self.layout.page_size) == PagerKey::Dismiss {
                    return Step::Done(());
                }
            }
            DialogEvent::Resize(width, height) => {
                self.width = width;
                self.window.set_visible(self.layout.visible_rows(height));
            }
            DialogEvent::Interrupt => return Step::Done(()),
            DialogEvent::Paste(_) | DialogEvent::Progress(_) => {}
        }
        Step::Continue
    }

    fn view(&self, theme: &Theme) -> DialogView {
        let width = layout::content_width(self.width);
        let mut body = BodyBuilder::new()
            .title(&self.config.title, theme)
            .description(self.config.description.as_deref(), width, theme);

        let lines = self.config.render_lines(theme);
        if self.window.has_more_above() {
            body = body.row(StyledLine::styled("↑ more above", theme.description()));
        }
        body = body.rows(lines[self.window.range()].iter().cloned());
        if self.window.has_more_below() {
            body = body.row(StyledLine::styled("↓ more below", theme.description()));
        }

        let help = pager_help(self.window.total() > self.window.visible());
        DialogView::new(body.help(help, theme).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::event::Key;

    fn sample() -> InfoConfig {
        InfoConfig::new(
            "System",
            vec![
                InfoSection::new(
                    "Host",
                    vec![InfoRow::kv("OS", "Debian 12"), InfoRow::kv("Arch", "x86_64")],
                ),
                InfoSection::untitled(vec![
                    InfoRow::columns(["curl", "8.5", "installed"]),
                    InfoRow::columns(["ca-certificates", "2024", "missing"]),
                    InfoRow::value("and 3 more"),
                ]),
            ],
        )
    }

    #[test]
    fn total_counts_titles_rows_and_separators() {
        // title + 2 rows + separator + 3 rows
        assert_eq!(sample().total_lines(), 7);
        let single = InfoConfig::new("x", vec![InfoSection::untitled(vec![InfoRow::value("a")])]);
        assert_eq!(single.total_lines(), 1);
    }

    #[test]
    fn renders_sections_with_aligned_columns() {
        let lines: Vec<String> = sample()
            .render_lines(&Theme::plain())
            .iter()
            .map(StyledLine::text)
            .collect();
        assert_eq!(
            lines,
            vec![
                "Host",
                "OS: Debian 12",
                "Arch: x86_64",
                "",
                "curl             8.5   installed",
                "ca-certificates  2024  missing",
                "and 3 more",
            ]
        );
    }

    #[test]
    fn column_widths_use_display_width() {
        let section = InfoSection::untitled(vec![
            InfoRow::columns(["日本", "x"]),
            InfoRow::columns(["abc", "y"]),
        ]);
        assert_eq!(section.column_widths(), vec![4, 1]);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let layout = Layout {
            chrome_reserve: 100,
            min_visible: 3,
            page_size: 10,
        };
        let mut dialog = InfoDialog::new(sample()).with_layout(layout);
        dialog.update(DialogEvent::Resize(80, 24));
        dialog.update(DialogEvent::Key(Key::PageDown));
        assert_eq!(dialog.window().offset(), 4);
        dialog.update(DialogEvent::Key(Key::Up));
        assert_eq!(dialog.window().offset(), 3);
        dialog.update(DialogEvent::Key(Key::PageUp));
        assert_eq!(dialog.window().offset(), 0);
        assert_eq!(dialog.update(DialogEvent::Key(Key::Char('q'))), Step::Done(()));
    }

    #[test]
    fn long_values_wrap_inside_the_frame() {
        let value = "/usr/local/share/termdialog/themes /home/user/.config/termdialog/themes LAST";
        let config = InfoConfig::new(
            "Paths",
            vec![InfoSection::untitled(vec![InfoRow::kv("Search path", value)])],
        );
        let mut dialog = InfoDialog::new(config);
        dialog.update(DialogEvent::Resize(80, 30));
        let frame = layout::compose(&dialog.view(&Theme::plain()), 80, 30, &Theme::plain(), None);
        let all: String = frame.iter().map(StyledLine::text).collect();
        assert!(all.contains("Search path: /usr/local/share/termdialog/themes"));
        assert!(all.contains("/home/user/.config/termdialog/themes LAST"));
    }
}
