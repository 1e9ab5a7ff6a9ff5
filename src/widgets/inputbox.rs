//! Inputbox widget: editable text backed by the text-editing collaborator.
//!
//! Shares the Text widget's rendering path but forwards key events to the
//! editor and, while focused, paints the cursor cell in the cursor style.

use crate::editor::{EditBuffer, Editor};
use crate::event::{InputEvent, Key};
use crate::style::Theme;
use crate::widget::{Sink, Widget};

/// An editable, word-wrapped text field.
pub struct Inputbox {
    editor: Box<dyn Editor>,
    focused: bool,
    theme: Theme,
}

impl Inputbox {
    /// Create an empty field backed by the built-in editor.
    pub fn new() -> Self {
        Self::with_editor(Box::new(EditBuffer::new()))
    }

    /// Create a field backed by a caller-supplied editor.
    pub fn with_editor(editor: Box<dyn Editor>) -> Self {
        Self {
            editor,
            focused: false,
            theme: Theme::default(),
        }
    }

    /// Set the initial content (builder).
    pub fn with_text(mut self, text: &str) -> Self {
        self.editor.set_text(text);
        self
    }

    /// Override the theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The current content.
    pub fn text(&self) -> String {
        self.editor.text()
    }

    /// Whether the field currently holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Default for Inputbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Inputbox {
    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        if width == 0 {
            return 0;
        }
        self.editor.set_width(width);

        if !self.focused {
            let text = self.theme.text;
            return self
                .editor
                .render(&mut |row, col, ch| sink.cell(row, col, text, ch), None);
        }

        // Focused: find the cursor cell first, then paint it in the cursor
        // style. The cursor may sit one column past the last glyph of its
        // row, in which case it gets a styled space.
        let mut cursor_at = (0u16, 0u16);
        self.editor.render(
            &mut |_, _, _| {},
            Some(&mut |row, col| cursor_at = (row, col)),
        );

        let text = self.theme.text;
        let cursor = self.theme.cursor;
        let mut cursor_drawn = false;
        let height = self.editor.render(
            &mut |row, col, ch| {
                if (row, col) == cursor_at {
                    cursor_drawn = true;
                    sink.cell(row, col, cursor, ch);
                } else {
                    sink.cell(row, col, text, ch);
                }
            },
            None,
        );
        if !cursor_drawn {
            sink.cell(cursor_at.0, cursor_at.1, cursor, ' ');
        }
        height
    }

    fn on_event(&mut self, event: &InputEvent) {
        // Keys arrive by broadcast from stacking containers; only the
        // focused field reacts.
        if !self.focused {
            return;
        }
        match event {
            InputEvent::Key(k) => match k.code {
                Key::Char(ch) => self.editor.insert(ch),
                Key::Enter => self.editor.insert('\n'),
                Key::Backspace => self.editor.backspace(),
                Key::Delete => self.editor.delete(),
                Key::Up => self.editor.move_up(),
                Key::Down => self.editor.move_down(),
                Key::Left => self.editor.move_left(),
                Key::Right => self.editor.move_right(),
                _ => {}
            },
            InputEvent::Paste(text) => {
                for ch in text.chars() {
                    self.editor.insert(ch);
                }
            }
            _ => {}
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
