//! Styled, width-aware lines of dialog text.

use std::fmt;

use crossterm::style::{ContentStyle, StyledContent};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal cells.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// One rendered row made of styled spans.
#[derive(Debug, Clone, Default)]
pub struct StyledLine {
    spans: Vec<StyledContent<String>>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, ContentStyle::new())
    }

    pub fn styled(text: impl Into<String>, style: ContentStyle) -> Self {
        let mut line = Self::new();
        line.push(text, style);
        line
    }

    pub fn push(&mut self, text: impl Into<String>, style: ContentStyle) -> &mut Self {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(StyledContent::new(style, text));
        }
        self
    }

    pub fn append(&mut self, other: StyledLine) -> &mut Self {
        self.spans.extend(other.spans);
        self
    }

    /// Concatenated text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.content().as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans
            .iter()
            .map(|span| display_width(span.content()))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Cuts the line so it spans at most `max_width` cells.
    pub fn truncate(mut self, max_width: usize) -> Self {
        if self.width() <= max_width {
            return self;
        }

        let mut remaining = max_width;
        let mut kept = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if remaining == 0 {
                break;
            }
            let style = *span.style();
            let mut text = String::new();
            for ch in span.content().chars() {
                let w = UnicodeWidthChar::width(ch).unwrap_or(0);
                if w > remaining {
                    remaining = 0;
                    break;
                }
                remaining -= w;
                text.push(ch);
            }
            if !text.is_empty() {
                kept.push(StyledContent::new(style, text));
            }
        }
        self.spans = kept;
        self
    }

    /// Breaks the line at spaces into rows at most `max_width` cells wide.
    ///
    /// Continuation rows repeat the line's leading indentation, words wider
    /// than a row are split, and every span keeps its style.
    pub fn wrap(&self, max_width: usize) -> Vec<StyledLine> {
        if max_width == 0 || self.width() <= max_width {
            return vec![self.clone()];
        }

        let cells: Vec<(char, ContentStyle)> = self
            .spans
            .iter()
            .flat_map(|span| {
                let style = *span.style();
                span.content().chars().map(move |ch| (ch, style))
            })
            .collect();
        let hang = cells.iter().take_while(|(ch, _)| *ch == ' ').count();
        let hang = if hang * 2 > max_width { 0 } else { hang };

        let mut rows = Vec::new();
        let mut row = RowBuilder::new(0);
        let mut start = 0;
        while start < cells.len() {
            let is_space = cells[start].0 == ' ';
            let end = cells[start..]
                .iter()
                .position(|(ch, _)| (*ch == ' ') != is_space)
                .map_or(cells.len(), |n| start + n);
            let token = &cells[start..end];
            start = end;
            let token_width: usize = token.iter().map(|(ch, _)| char_width(*ch)).sum();

            if is_space {
                if row.width + token_width <= max_width && (row.has_text || rows.is_empty()) {
                    row.extend(token);
                } else if row.has_text {
                    rows.push(row.finish());
                    row = RowBuilder::new(hang);
                }
                continue;
            }

            if row.has_text && row.width + token_width > max_width {
                rows.push(row.finish());
                row = RowBuilder::new(hang);
            }
            for &(ch, style) in token {
                if row.has_text && row.width + char_width(ch) > max_width {
                    rows.push(row.finish());
                    row = RowBuilder::new(hang);
                }
                row.push(ch, style);
            }
        }
        if row.has_text || rows.is_empty() {
            rows.push(row.finish());
        }
        rows
    }

    /// Pads with unstyled spaces up to `width` cells.
    pub fn pad_to(mut self, width: usize) -> Self {
        let current = self.width();
        if current < width {
            self.push(" ".repeat(width - current), ContentStyle::new());
        }
        self
    }

    /// Prefixes the line with `columns` unstyled spaces.
    pub fn indent(self, columns: usize) -> Self {
        if columns == 0 {
            return self;
        }
        let mut line = StyledLine::plain(" ".repeat(columns));
        line.append(self);
        line
    }
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Accumulates cells into a line, merging runs that share a style.
struct RowBuilder {
    line: StyledLine,
    run: String,
    run_style: ContentStyle,
    width: usize,
    has_text: bool,
}

impl RowBuilder {
    fn new(indent: usize) -> Self {
        Self {
            line: StyledLine::new(),
            run: " ".repeat(indent),
            run_style: ContentStyle::new(),
            width: indent,
            has_text: false,
        }
    }

    fn push(&mut self, ch: char, style: ContentStyle) {
        if style != self.run_style {
            let run = std::mem::take(&mut self.run);
            self.line.push(run, self.run_style);
            self.run_style = style;
        }
        self.run.push(ch);
        self.width += char_width(ch);
        self.has_text |= ch != ' ';
    }

    fn extend(&mut self, cells: &[(char, ContentStyle)]) {
        for &(ch, style) in cells {
            self.push(ch, style);
        }
    }

    fn finish(mut self) -> StyledLine {
        self.line.push(self.run, self.run_style);
        self.line
    }
}

impl fmt::Display for StyledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            write!(f, "{span}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    #[test]
    fn width_counts_wide_glyphs() {
        let mut line = StyledLine::plain("ab");
        line.push("日本", ContentStyle::new());
        assert_eq!(line.width(), 6);
        assert_eq!(line.text(), "ab日本");
    }

    #[test]
    fn truncate_stops_before_overflowing_wide_glyph() {
        let line = StyledLine::plain("a日本").truncate(4);
        assert_eq!(line.text(), "a日");
        assert_eq!(line.width(), 3);
    }

    #[test]
    fn pad_and_indent() {
        let line = StyledLine::plain("x").pad_to(3).indent(2);
        assert_eq!(line.text(), "  x  ");
    }

    #[test]
    fn wrap_breaks_at_spaces_and_keeps_indent() {
        let mut line = StyledLine::plain("  • ");
        let red = ContentStyle {
            foreground_color: Some(Color::Red),
            ..ContentStyle::new()
        };
        line.push("alpha beta gamma", red);
        let rows: Vec<String> = line.wrap(12).iter().map(StyledLine::text).collect();
        assert_eq!(rows, vec!["  • alpha ", "  beta gamma"]);
        assert!(line.wrap(12).iter().all(|row| row.width() <= 12));
    }

    #[test]
    fn wrap_splits_words_wider_than_a_row() {
        let rows: Vec<String> = StyledLine::plain("abcdefghij")
            .wrap(4)
            .iter()
            .map(StyledLine::text)
            .collect();
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn short_lines_are_not_wrapped() {
        let rows = StyledLine::plain("fits").wrap(10);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(), "fits");
    }

    #[test]
    fn empty_spans_are_skipped() {
        let mut line = StyledLine::new();
        line.push("", ContentStyle::new());
        assert!(line.is_empty());
    }
}
