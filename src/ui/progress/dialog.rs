use crate::ui::dialogs::pager_help;
use crate::ui::event::{DialogEvent, Key};
use crate::ui::layout::{self, BodyBuilder, DialogView};
use crate::ui::runner::{Dialog, Step};
use crate::ui::theme::Theme;
use crate::ui::viewport::Viewport;

use super::line::{ProgressLine, ProgressMessage};
use super::ProgressSummary;

/// Viewport height before the first resize.
const DEFAULT_HEIGHT: usize = 15;
/// Rows around the viewport: title, help, box border and footer.
const CHROME_ROWS: u16 = 16;
const MIN_HEIGHT: usize = 5;
const MAX_HEIGHT: usize = 25;
/// Box padding, border and the scrollbar column with its gap.
const CHROME_COLUMNS: usize = 10;

/// Live log of producer lines.
///
/// The dialog owns the line buffer; lines arrive only as bridge messages.
#[derive(Debug, Clone)]
pub struct ProgressDialog {
    title: String,
    lines: Vec<ProgressLine>,
    viewport: Viewport,
    theme: Theme,
    done: bool,
    auto_scroll: bool,
    ready: bool,
}

impl ProgressDialog {
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            viewport: Viewport::new(0, DEFAULT_HEIGHT),
            theme,
            done: false,
            auto_scroll: true,
            ready: false,
        }
    }

    pub fn lines(&self) -> &[ProgressLine] {
        &self.lines
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            lines: self.lines.clone(),
            completed: self.done,
        }
    }

    fn rewrap(&mut self) {
        let width = self.viewport.width();
        let rows = self
            .lines
            .iter()
            .flat_map(|line| line.render(width, &self.theme))
            .collect();
        self.viewport.set_content(rows);
        if self.auto_scroll {
            self.viewport.goto_bottom();
        }
    }

    fn push_line(&mut self, line: ProgressLine) {
        if self.ready {
            let rows = line.render(self.viewport.width(), &self.theme);
            self.viewport.append(rows);
            if self.auto_scroll {
                self.viewport.goto_bottom();
            }
        }
        self.lines.push(line);
    }

    fn resize(&mut self, width: u16, height: u16) {
        let rows = if height > 0 {
            (height.saturating_sub(CHROME_ROWS) as usize).clamp(MIN_HEIGHT, MAX_HEIGHT)
        } else {
            DEFAULT_HEIGHT
        };
        let columns = layout::calc_box_width(width).saturating_sub(CHROME_COLUMNS);
        self.viewport.set_size(columns, rows);
        self.ready = true;
        self.rewrap();
    }

    fn key(&mut self, key: Key) -> Step<ProgressSummary> {
        match key {
            Key::Enter | Key::Esc | Key::CtrlC | Key::Char(' ') | Key::Char('q') => {
                if self.done {
                    return Step::Done(self.summary());
                }
            }
            Key::Up | Key::Char('k') => {
                self.auto_scroll = false;
                self.viewport.line_up(1);
            }
            Key::PageUp => {
                self.auto_scroll = false;
                self.viewport.page_up();
            }
            Key::Home | Key::Char('g') => {
                self.auto_scroll = false;
                self.viewport.goto_top();
            }
            Key::Down | Key::Char('j') => {
                self.viewport.line_down(1);
                self.auto_scroll |= self.viewport.at_bottom();
            }
            Key::PageDown => {
                self.viewport.page_down();
                self.auto_scroll |= self.viewport.at_bottom();
            }
            Key::End | Key::Char('G') => {
                self.viewport.goto_bottom();
                self.auto_scroll = true;
            }
            _ => {}
        }
        Step::Continue
    }
}

impl Dialog for ProgressDialog {
    type Outcome = ProgressSummary;

    fn update(&mut self, event: DialogEvent) -> Step<ProgressSummary> {
        match event {
            DialogEvent::Key(key) => return self.key(key),
            DialogEvent::Progress(ProgressMessage::Line(line)) => self.push_line(line),
            DialogEvent::Progress(ProgressMessage::Done) => self.done = true,
            DialogEvent::Resize(width, height) => self.resize(width, height),
            DialogEvent::Interrupt => return Step::Done(self.summary()),
            DialogEvent::Paste(_) => {}
        }
        Step::Continue
    }

    fn view(&self, theme: &Theme) -> DialogView {
        let mut body = BodyBuilder::new().title(&self.title, theme);

        if self.ready {
            let rows = self.viewport.visible_lines();
            if self.viewport.needs_scrollbar() {
                let bar = self.viewport.scrollbar(theme);
                body = body.rows(rows.into_iter().zip(bar).map(|(mut row, glyph)| {
                    row.push("  ", Default::default());
                    row.append(glyph);
                    row
                }));
            } else {
                body = body.rows(rows);
            }
        }

        let help = if self.done {
            pager_help(self.viewport.needs_scrollbar())
        } else {
            "..."
        };
        DialogView::new(body.help(help, theme).build())
    }

    fn best_effort_render(&self) -> bool {
        true
    }
}
