//! Word wrapping, scroll windows and the scrollable viewport.

use unicode_width::UnicodeWidthChar;

use crate::ui::text::{display_width, StyledLine};
use crate::ui::theme::Theme;

/// Wraps `text` at word boundaries so no line exceeds `width` cells.
///
/// Words wider than `width` are split. Embedded newlines start new lines.
/// The result is deterministic for a given text and width; a zero width
/// returns the text unwrapped.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
            let word_width = display_width(word);

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + ch_width > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }
    lines
}

/// A window of `visible` rows over `total` rows.
///
/// Invariant: `offset <= max_offset()` after every operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollWindow {
    offset: usize,
    total: usize,
    visible: usize,
}

impl ScrollWindow {
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            offset: 0,
            total,
            visible,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.clamp();
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset());
    }

    pub fn top(&mut self) {
        self.offset = 0;
    }

    pub fn bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    pub fn has_more_above(&self) -> bool {
        self.offset > 0
    }

    pub fn has_more_below(&self) -> bool {
        self.offset + self.visible < self.total
    }

    /// Index range of the rows currently shown.
    pub fn range(&self) -> std::ops::Range<usize> {
        let end = (self.offset + self.visible).min(self.total);
        self.offset.min(end)..end
    }

    /// Scroll position in `[0.0, 1.0]`; content that fits reports 1.0.
    pub fn percent(&self) -> f64 {
        if self.visible >= self.total {
            return 1.0;
        }
        let percent = self.offset as f64 / (self.total - self.visible) as f64;
        percent.clamp(0.0, 1.0)
    }
}

/// Thumb `(size, position)` for a scrollbar `height` rows tall.
pub fn thumb_geometry(height: usize, total: usize, visible: usize, percent: f64) -> (usize, usize) {
    if height == 0 || total == 0 {
        return (0, 0);
    }
    let size = (height * visible / total).clamp(1, height);
    let position = ((height - size) as f64 * percent.clamp(0.0, 1.0)).round() as usize;
    (size, position)
}

/// Scrollbar column: a thumb over a track, one glyph per row.
pub fn scrollbar(
    height: usize,
    total: usize,
    visible: usize,
    percent: f64,
    theme: &Theme,
) -> Vec<StyledLine> {
    let (size, position) = thumb_geometry(height, total, visible, percent);
    (0..height)
        .map(|row| {
            if row >= position && row < position + size {
                StyledLine::styled("█", theme.fg(theme.primary))
            } else {
                StyledLine::styled("│", theme.fg(theme.scroll_track))
            }
        })
        .collect()
}

/// A fixed-size window over pre-wrapped lines.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: usize,
    lines: Vec<StyledLine>,
    window: ScrollWindow,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            window: ScrollWindow::new(0, height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.window.visible()
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.window.set_visible(height);
    }

    pub fn set_content(&mut self, lines: Vec<StyledLine>) {
        self.lines = lines;
        self.window.set_total(self.lines.len());
    }

    pub fn append(&mut self, lines: impl IntoIterator<Item = StyledLine>) {
        self.lines.extend(lines);
        self.window.set_total(self.lines.len());
    }

    pub fn total_line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn offset(&self) -> usize {
        self.window.offset()
    }

    pub fn at_top(&self) -> bool {
        self.window.at_top()
    }

    pub fn at_bottom(&self) -> bool {
        self.window.at_bottom()
    }

    pub fn scroll_percent(&self) -> f64 {
        self.window.percent()
    }

    pub fn line_up(&mut self, rows: usize) {
        self.window.up(rows);
    }

    pub fn line_down(&mut self, rows: usize) {
        self.window.down(rows);
    }

    pub fn page_up(&mut self) {
        self.window.up(self.height().max(1));
    }

    pub fn page_down(&mut self) {
        self.window.down(self.height().max(1));
    }

    pub fn goto_top(&mut self) {
        self.window.top();
    }

    pub fn goto_bottom(&mut self) {
        self.window.bottom();
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total_line_count() > self.height()
    }

    /// Exactly `height` rows, each padded to the viewport width.
    pub fn visible_lines(&self) -> Vec<StyledLine> {
        let mut rows: Vec<StyledLine> = self.lines[self.window.range()]
            .iter()
            .map(|line| line.clone().truncate(self.width).pad_to(self.width))
            .collect();
        while rows.len() < self.height() {
            rows.push(StyledLine::new().pad_to(self.width));
        }
        rows
    }

    pub fn scrollbar(&self, theme: &Theme) -> Vec<StyledLine> {
        scrollbar(
            self.height(),
            self.total_line_count(),
            self.height(),
            self.scroll_percent(),
            theme,
        )
    }
}
