//! Printable lines.

use std::fmt;

/// A line of literal text, printed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLine {
    text: String,
}

impl TextLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A unit of page content.
///
/// New kinds of lines are added as variants here; `Page::render` matches on
/// every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(TextLine),
}

impl Line {
    /// Printable text of this line, without a terminator.
    pub fn render(&self) -> &str {
        match self {
            Line::Text(line) => line.text(),
        }
    }
}

impl From<TextLine> for Line {
    fn from(line: TextLine) -> Self {
        Line::Text(line)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::Text(TextLine::new(text))
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::Text(TextLine::new(text))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}
