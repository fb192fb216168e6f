//! Fixed dialog frame: rounded box, header, centering and footer.

use crate::config::AppInfo;
use crate::ui::text::StyledLine;
use crate::ui::theme::Theme;

/// Horizontal padding inside the box border on each side.
const PADDING_X: usize = 2;

/// Box width for a terminal `term_width` cells wide, excluding the border.
pub fn calc_box_width(term_width: u16) -> usize {
    match term_width {
        0 => 60,
        w if w < 80 => (w as usize).saturating_sub(10),
        _ => 70,
    }
}

/// Columns available for text inside the box.
pub fn content_width(term_width: u16) -> usize {
    calc_box_width(term_width).saturating_sub(PADDING_X * 2).max(1)
}

/// What a dialog wants drawn: an optional header above the box and the
/// rows inside it.
#[derive(Debug, Clone, Default)]
pub struct DialogView {
    pub header: Option<String>,
    pub body: Vec<StyledLine>,
}

impl DialogView {
    pub fn new(body: Vec<StyledLine>) -> Self {
        Self { header: None, body }
    }

    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header.filter(|h| !h.is_empty());
        self
    }
}

/// Body builder shared by the dialogs: title and description blocks,
/// content rows, then the help line.
#[derive(Debug, Default)]
pub struct BodyBuilder {
    rows: Vec<StyledLine>,
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold title followed by a blank row; skipped when empty.
    pub fn title(mut self, title: &str, theme: &Theme) -> Self {
        if !title.is_empty() {
            self.rows.push(StyledLine::styled(title, theme.title()));
            self.rows.push(StyledLine::new());
        }
        self
    }

    /// Muted description, wrapped to `width`, followed by a blank row.
    pub fn description(mut self, text: Option<&str>, width: usize, theme: &Theme) -> Self {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            for line in crate::ui::viewport::wrap_words(text, width) {
                self.rows.push(StyledLine::styled(line, theme.description()));
            }
            self.rows.push(StyledLine::new());
        }
        self
    }

    pub fn row(mut self, line: StyledLine) -> Self {
        self.rows.push(line);
        self
    }

    pub fn rows(mut self, lines: impl IntoIterator<Item = StyledLine>) -> Self {
        self.rows.extend(lines);
        self
    }

    pub fn blank(self) -> Self {
        self.row(StyledLine::new())
    }

    pub fn help(mut self, text: &str, theme: &Theme) -> Self {
        self.rows.push(StyledLine::new());
        self.rows.push(StyledLine::styled(text, theme.help()));
        self
    }

    pub fn build(self) -> Vec<StyledLine> {
        self.rows
    }
}

/// Wraps `body` in a rounded, padded box `box_width` cells wide (plus border).
///
/// Rows wider than the box are word-wrapped onto extra rows.
pub fn render_box(body: &[StyledLine], box_width: usize, theme: &Theme) -> Vec<StyledLine> {
    let border = theme.border();
    let inner = box_width.saturating_sub(PADDING_X * 2);
    let rule = "─".repeat(box_width);
    let blank = " ".repeat(box_width);
    let pad = " ".repeat(PADDING_X);

    let mut rows = Vec::with_capacity(body.len() + 4);
    rows.push(StyledLine::styled(format!("╭{rule}╮"), border));
    rows.push(side_row(StyledLine::plain(blank.clone()), theme));
    for line in body.iter().flat_map(|line| line.wrap(inner)) {
        let mut content = StyledLine::plain(pad.clone());
        content.append(line.truncate(inner).pad_to(inner));
        content.push(pad.clone(), Default::default());
        rows.push(side_row(content, theme));
    }
    rows.push(side_row(StyledLine::plain(blank), theme));
    rows.push(StyledLine::styled(format!("╰{rule}╯"), border));
    rows
}

fn side_row(content: StyledLine, theme: &Theme) -> StyledLine {
    let mut row = StyledLine::styled("│", theme.border());
    row.append(content);
    row.push("│", theme.border());
    row
}

/// Lays the dialog out for a `width` x `height` terminal.
///
/// The header sits above the box separated by a blank row; the block is
/// centered in the rows left over by the footer, which occupies the last
/// row when app info is configured. A zero-sized terminal gets the block
/// without placement.
pub fn compose(
    view: &DialogView,
    width: u16,
    height: u16,
    theme: &Theme,
    app_info: Option<&AppInfo>,
) -> Vec<StyledLine> {
    let mut block = Vec::new();
    if let Some(header) = &view.header {
        for line in header.lines() {
            block.push(StyledLine::styled(line, theme.description()));
        }
        block.push(StyledLine::new());
    }
    block.extend(render_box(&view.body, calc_box_width(width), theme));

    if width == 0 || height == 0 {
        return block;
    }

    let width = width as usize;
    let height = height as usize;
    let footer = app_info.map(|info| StyledLine::styled(info.footer(), theme.description()));
    let area = if footer.is_some() {
        height.saturating_sub(2)
    } else {
        height
    };

    let top = area.saturating_sub(block.len()) / 2;
    let mut frame = vec![StyledLine::new(); top];
    frame.extend(block.into_iter().map(|line| center(line, width)));
    frame.truncate(area);

    if let Some(footer) = footer {
        frame.resize(height.saturating_sub(1), StyledLine::new());
        frame.push(center(footer, width));
    }
    frame.truncate(height);
    frame
}

fn center(line: StyledLine, width: usize) -> StyledLine {
    let line = line.truncate(width);
    let left = width.saturating_sub(line.width()) / 2;
    line.indent(left)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines.iter().map(StyledLine::text).collect()
    }

    #[test]
    fn box_width_tracks_terminal() {
        assert_eq!(calc_box_width(0), 60);
        assert_eq!(calc_box_width(50), 40);
        assert_eq!(calc_box_width(79), 69);
        assert_eq!(calc_box_width(80), 70);
        assert_eq!(calc_box_width(200), 70);
        assert_eq!(content_width(120), 66);
    }

    #[test]
    fn box_has_rounded_border_and_padding() {
        let rows = render_box(&[StyledLine::plain("hi")], 8, &Theme::plain());
        assert_eq!(
            texts(&rows),
            vec![
                "╭────────╮",
                "│        │",
                "│  hi    │",
                "│        │",
                "╰────────╯",
            ]
        );
    }

    #[test]
    fn long_rows_wrap_inside_the_box() {
        let rows = render_box(&[StyledLine::plain("ab cdefgh")], 8, &Theme::plain());
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[2].text(), "│  ab    │");
        assert_eq!(rows[3].text(), "│  cdef  │");
        assert_eq!(rows[4].text(), "│  gh    │");
    }

    #[test]
    fn compose_centers_and_places_footer() {
        let view = DialogView::new(vec![StyledLine::plain("x")]);
        let info = AppInfo::new("tool", "1.0", "");
        let frame = compose(&view, 50, 20, &Theme::plain(), Some(&info));
        assert_eq!(frame.len(), 20);
        assert_eq!(frame[19].text().trim(), "tool 1.0");

        let first_box_row = frame.iter().position(|l| l.text().contains('╭')).unwrap();
        // 5 box rows centered in 18 rows
        assert_eq!(first_box_row, 6);
        // box is 42 wide in a 50 wide terminal
        assert!(frame[first_box_row].text().starts_with("    ╭"));
    }

    #[test]
    fn header_sits_above_box() {
        let view = DialogView::new(vec![]).with_header(Some("Banner".into()));
        let frame = compose(&view, 0, 0, &Theme::plain(), None);
        assert_eq!(frame[0].text(), "Banner");
        assert_eq!(frame[1].text(), "");
        assert!(frame[2].text().starts_with('╭'));
    }

    #[test]
    fn tiny_terminal_clips_frame() {
        let body = (0..30).map(|i| StyledLine::plain(i.to_string())).collect();
        let frame = compose(&DialogView::new(body), 40, 10, &Theme::plain(), None);
        assert_eq!(frame.len(), 10);
    }

    #[test]
    fn body_builder_orders_sections() {
        let theme = Theme::plain();
        let rows = BodyBuilder::new()
            .title("Pick", &theme)
            .description(Some("one of these"), 40, &theme)
            .row(StyledLine::plain("a"))
            .help("enter: select", &theme)
            .build();
        assert_eq!(
            texts(&rows),
            vec!["Pick", "", "one of these", "", "a", "", "enter: select"]
        );
    }
}
