use crate::config::Layout;
use crate::ui::event::DialogEvent;
use crate::ui::layout::{self, BodyBuilder, DialogView};
use crate::ui::runner::{Dialog, Step};
use crate::ui::text::StyledLine;
use crate::ui::theme::Theme;
use crate::ui::viewport::ScrollWindow;

use super::{pager_help, pager_key, PagerKey};

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<String>,
    /// Shown instead of the items when there are none.
    pub empty_text: String,
}

impl ListConfig {
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            items,
            empty_text: "No items to display.".to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_empty_text(mut self, empty_text: impl Into<String>) -> Self {
        self.empty_text = empty_text.into();
        self
    }
}

/// Read-only scrollable bullet list. Dismissal is the only outcome.
#[derive(Debug, Clone)]
pub struct ListDialog {
    config: ListConfig,
    layout: Layout,
    window: ScrollWindow,
    width: u16,
}

impl ListDialog {
    pub fn new(config: ListConfig) -> Self {
        let layout = Layout::default();
        let window = ScrollWindow::new(config.items.len(), layout.min_visible);
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

impl Dialog for ListDialog {
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

        if self.config.items.is_empty() {
            body = body.row(StyledLine::styled(
                self.config.empty_text.as_str(),
                theme.italic(theme.muted),
            ));
        } else {
            if self.window.has_more_above() {
                body = body.row(StyledLine::styled("  ↑ more above", theme.description()));
            }
            for item in &self.config.items[self.window.range()] {
                let mut line = StyledLine::plain("  • ");
                line.push(item.as_str(), theme.body());
                body = body.row(line);
            }
            if self.window.has_more_below() {
                body = body.row(StyledLine::styled("  ↓ more below", theme.description()));
            }
        }

        let help = pager_help(self.window.total() > self.window.visible());
        DialogView::new(body.help(help, theme).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::event::Key;

    fn list(count: usize, height: u16) -> ListDialog {
        let items = (0..count).map(|i| format!("item {i}")).collect();
        let mut dialog = ListDialog::new(ListConfig::new("Packages", items));
        dialog.update(DialogEvent::Resize(80, height));
        dialog
    }

    fn text(dialog: &ListDialog) -> Vec<String> {
        dialog
            .view(&Theme::plain())
            .body
            .iter()
            .map(StyledLine::text)
            .collect()
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut dialog = ListDialog::new(ListConfig::new("Packages", vec![]));
        dialog.update(DialogEvent::Resize(80, 24));
        assert!(text(&dialog).contains(&"No items to display.".to_string()));
        assert_eq!(dialog.update(DialogEvent::Key(Key::Enter)), Step::Done(()));
    }

    #[test]
    fn offset_stays_in_bounds_under_any_keys() {
        // 30 rows leave 15 visible of 40
        let mut dialog = list(40, 30);
        let keys = [
            Key::PageDown,
            Key::PageDown,
            Key::Down,
            Key::Char('j'),
            Key::End,
            Key::Down,
            Key::PageUp,
            Key::Up,
            Key::Char('k'),
            Key::Home,
            Key::Up,
            Key::PageUp,
        ];
        for key in keys {
            dialog.update(DialogEvent::Key(key));
            let window = dialog.window();
            assert!(window.offset() <= 40 - 15);
        }
        assert_eq!(dialog.window().offset(), 0);
    }

    #[test]
    fn page_moves_ten_rows() {
        let mut dialog = list(40, 30);
        dialog.update(DialogEvent::Key(Key::PageDown));
        assert_eq!(dialog.window().offset(), 10);
        dialog.update(DialogEvent::Key(Key::PageDown));
        assert_eq!(dialog.window().offset(), 20);
        dialog.update(DialogEvent::Key(Key::PageDown));
        assert_eq!(dialog.window().offset(), 25);
    }

    #[test]
    fn every_dismiss_key_ends_the_dialog() {
        for key in [Key::Enter, Key::Char(' '), Key::Char('q'), Key::Esc] {
            let mut dialog = list(3, 24);
            assert_eq!(dialog.update(DialogEvent::Key(key)), Step::Done(()));
        }
    }

    #[test]
    fn indicators_follow_scroll_position() {
        let mut dialog = list(40, 30);
        let rows = text(&dialog);
        assert!(!rows.iter().any(|r| r.contains("more above")));
        assert!(rows.iter().any(|r| r.contains("↓ more below")));
        assert!(rows.iter().any(|r| r.contains("↑/↓: scroll")));

        dialog.update(DialogEvent::Key(Key::End));
        let rows = text(&dialog);
        assert!(rows.iter().any(|r| r.contains("↑ more above")));
        assert!(!rows.iter().any(|r| r.contains("more below")));
        assert!(rows.contains(&"  • item 39".to_string()));
    }

    #[test]
    fn long_items_wrap_inside_the_frame() {
        let item = "a-very-long-package-name-with-a-descriptive-suffix and-a-tail-END";
        let mut dialog = ListDialog::new(ListConfig::new("Packages", vec![item.to_string()]));
        dialog.update(DialogEvent::Resize(80, 30));
        let frame = layout::compose(&dialog.view(&Theme::plain()), 80, 30, &Theme::plain(), None);
        let rows: Vec<String> = frame.iter().map(StyledLine::text).collect();
        assert!(rows.iter().any(|row| row.contains("and-a-tail-END")));
        assert!(rows.iter().all(|row| row.trim_end().chars().count() <= 80));
    }
}
