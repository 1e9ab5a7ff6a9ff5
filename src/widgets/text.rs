//! Text widget: a static, word-wrapped label.
//!
//! Content comes from the text-editing collaborator; setting new content
//! replaces the buffer directly. Ignores all events.

use crate::editor::{EditBuffer, Editor};
use crate::style::{Style, Theme};
use crate::widget::{Sink, Widget};

/// A word-wrapped label rendered with a fixed style.
pub struct Text {
    buffer: EditBuffer,
    style: Style,
}

impl Text {
    /// Create a label with the given content and the default theme's text
    /// style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            buffer: EditBuffer::with_text(&content.into()),
            style: Theme::default().text,
        }
    }

    /// Override the style (builder).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the content.
    pub fn set_text(&mut self, content: &str) {
        self.buffer.set_text(content);
    }

    /// The current content.
    pub fn text(&self) -> String {
        self.buffer.text()
    }
}

impl Widget for Text {
    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        if width == 0 {
            return 0;
        }
        self.buffer.set_width(width);
        let style = self.style;
        self.buffer
            .render(&mut |row, col, ch| sink.cell(row, col, style, ch), None)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
