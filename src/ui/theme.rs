//! Colour scheme shared by all dialogs.

use crossterm::style::{Attribute, Color, ContentStyle};

/// ANSI palette used by the dialogs. A plain theme renders every style empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub muted: Color,
    pub text: Color,
    pub scroll_track: Color,
    plain: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::AnsiValue(6),
            secondary: Color::AnsiValue(5),
            success: Color::AnsiValue(2),
            error: Color::AnsiValue(1),
            warning: Color::AnsiValue(3),
            info: Color::AnsiValue(4),
            muted: Color::AnsiValue(8),
            text: Color::AnsiValue(252),
            scroll_track: Color::AnsiValue(238),
            plain: false,
        }
    }
}

impl Theme {
    /// Theme for `NO_COLOR` terminals.
    pub fn plain() -> Self {
        Self {
            plain: true,
            ..Self::default()
        }
    }

    pub fn is_plain(&self) -> bool {
        self.plain
    }

    pub fn fg(&self, color: Color) -> ContentStyle {
        if self.plain {
            return ContentStyle::new();
        }
        ContentStyle {
            foreground_color: Some(color),
            ..ContentStyle::new()
        }
    }

    pub fn bold(&self, color: Color) -> ContentStyle {
        self.with_attribute(color, Attribute::Bold)
    }

    pub fn italic(&self, color: Color) -> ContentStyle {
        self.with_attribute(color, Attribute::Italic)
    }

    fn with_attribute(&self, color: Color, attribute: Attribute) -> ContentStyle {
        let mut style = self.fg(color);
        if !self.plain {
            style.attributes.set(attribute);
        }
        style
    }

    pub fn title(&self) -> ContentStyle {
        self.bold(self.primary)
    }

    pub fn description(&self) -> ContentStyle {
        self.fg(self.muted)
    }

    pub fn help(&self) -> ContentStyle {
        self.fg(self.muted)
    }

    pub fn border(&self) -> ContentStyle {
        self.fg(self.muted)
    }

    pub fn body(&self) -> ContentStyle {
        self.fg(self.text)
    }
}
