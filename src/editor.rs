//! The text-editing collaborator used by the text leaf widgets.
//!
//! [`Editor`] is the contract the Text and Inputbox widgets consume: cursor
//! navigation, insertion/deletion, wrapping to a given width, and rendering as
//! a sequence of positioned glyphs plus an optional cursor position.
//! [`EditBuffer`] is the built-in implementation: a greedy word-wrapper that
//! keeps every character assigned to exactly one line, so cursor positions
//! stay index-exact across wraps.

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

/// Contract for the text-editing collaborator.
///
/// Rendering is read-only and restartable: it walks the current wrap layout
/// and reports each glyph's `(row, col)` through the callback, then the
/// cursor position through the optional second callback. The returned value
/// is the number of wrapped rows.
pub trait Editor: Send {
    /// Set the wrap width. Width 0 makes `render` emit nothing and return 0.
    fn set_width(&mut self, width: u16);

    /// Insert a character at the cursor and advance it.
    fn insert(&mut self, ch: char);

    /// Remove the character before the cursor.
    fn backspace(&mut self);

    /// Remove the character after the cursor.
    fn delete(&mut self);

    /// Move the cursor up one wrapped row, preserving the column where the
    /// target row allows.
    fn move_up(&mut self);

    /// Move the cursor down one wrapped row.
    fn move_down(&mut self);

    /// Move the cursor left one character.
    fn move_left(&mut self);

    /// Move the cursor right one character.
    fn move_right(&mut self);

    /// Replace the whole buffer, placing the cursor at the end.
    fn set_text(&mut self, text: &str);

    /// The current buffer contents.
    fn text(&self) -> String;

    /// Emit every glyph's wrapped position, then the cursor position if a
    /// cursor callback was supplied. Returns the wrapped row count.
    fn render(
        &self,
        glyph: &mut dyn FnMut(u16, u16, char),
        cursor: Option<&mut dyn FnMut(u16, u16)>,
    ) -> u16;
}

// ---------------------------------------------------------------------------
// EditBuffer
// ---------------------------------------------------------------------------

/// The built-in word-wrapping editor.
///
/// The buffer is a flat sequence of characters with a cursor index into it.
/// Wrapping assigns each character to exactly one line: lines break after the
/// last space that fits, at `'\n'`, or mid-word when a word is wider than the
/// wrap width.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    chars: Vec<char>,
    cursor: usize,
    width: u16,
}

impl EditBuffer {
    /// An empty buffer with wrap width 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer initialized from `text`, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self {
            chars,
            cursor,
            width: 0,
        }
    }

    /// The cursor as a character index into the buffer.
    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    /// Wrap the buffer into line ranges `(start, end)` over character
    /// indices. A line ending in `'\n'` excludes it; the next line starts
    /// after it. Returns no lines for width 0, and one empty line for an
    /// empty buffer.
    fn wrap(&self) -> Vec<(usize, usize)> {
        let w = self.width as usize;
        if w == 0 {
            return Vec::new();
        }

        let mut lines = Vec::new();
        let mut start = 0;
        let mut i = 0;
        while i < self.chars.len() {
            if self.chars[i] == '\n' {
                lines.push((start, i));
                start = i + 1;
                i += 1;
                continue;
            }
            if i - start == w {
                // The line is full; break after the last space if there is
                // one, otherwise hard-break the word.
                match (start..i).rev().find(|&j| self.chars[j] == ' ') {
                    Some(sp) => {
                        lines.push((start, sp + 1));
                        start = sp + 1;
                    }
                    None => {
                        lines.push((start, i));
                        start = i;
                    }
                }
                continue;
            }
            i += 1;
        }
        lines.push((start, self.chars.len()));
        lines
    }

    /// The cursor's `(row, col)` in the current wrap layout.
    ///
    /// A cursor sitting exactly on a wrap boundary displays at the start of
    /// the following line.
    fn cursor_pos(&self) -> (usize, usize) {
        let lines = self.wrap();
        if lines.is_empty() {
            return (0, 0);
        }
        for (row, &(line_start, _)) in lines.iter().enumerate() {
            let bound = lines.get(row + 1).map(|l| l.0).unwrap_or(usize::MAX);
            if self.cursor < bound {
                return (row, self.cursor.saturating_sub(line_start));
            }
        }
        let last = lines.len() - 1;
        (last, lines[last].1 - lines[last].0)
    }

    /// Move the cursor to `(row, col)` in the wrap layout, clamping the
    /// column to the target line's length.
    fn seek(&mut self, row: usize, col: usize) {
        let lines = self.wrap();
        if let Some(&(start, end)) = lines.get(row) {
            self.cursor = start + col.min(end - start);
        }
    }
}

impl Editor for EditBuffer {
    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    fn move_up(&mut self) {
        let (row, col) = self.cursor_pos();
        if row > 0 {
            self.seek(row - 1, col);
        }
    }

    fn move_down(&mut self) {
        let (row, col) = self.cursor_pos();
        self.seek(row + 1, col);
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn render(
        &self,
        glyph: &mut dyn FnMut(u16, u16, char),
        cursor: Option<&mut dyn FnMut(u16, u16)>,
    ) -> u16 {
        let lines = self.wrap();
        for (row, &(start, end)) in lines.iter().enumerate() {
            for j in start..end {
                glyph(row as u16, (j - start) as u16, self.chars[j]);
            }
        }
        if let Some(draw_cursor) = cursor {
            let (row, col) = self.cursor_pos();
            draw_cursor(row as u16, col as u16);
        }
        lines.len().min(u16::MAX as usize) as u16
    }
}

// ===========================================================================
// Tests
// ===========================================================================
