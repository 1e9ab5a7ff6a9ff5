//! Canvas: a cell grid that captures rendered output.
//!
//! Implements [`Sink`] and the [`Backend`] contract, so it stands in for a
//! terminal both when rendering a single widget and when driving a full
//! render pass through [`App::render_once`](crate::app::App::render_once).

use std::io;

use crate::backend::Backend;
use crate::style::Style;
use crate::widget::Sink;

/// A `width` x `height` grid of styled characters.
///
/// Cells written outside the grid are dropped, mirroring the silent-clipping
/// policy of the real backend.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    glyphs: Vec<char>,
    styles: Vec<Style>,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            glyphs: vec![' '; len],
            styles: vec![Style::default(); len],
        }
    }

    /// Canvas width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The glyph at `(row, col)`, or `None` outside the grid.
    pub fn glyph(&self, row: u16, col: u16) -> Option<char> {
        self.slot(row, col).map(|i| self.glyphs[i])
    }

    /// The style at `(row, col)`, or `None` outside the grid.
    pub fn style(&self, row: u16, col: u16) -> Option<Style> {
        self.slot(row, col).map(|i| self.styles[i])
    }

    /// Reset every cell to a blank space with the default style.
    pub fn reset(&mut self) {
        self.glyphs.fill(' ');
        self.styles.fill(Style::default());
    }

    /// Row `row` as a string with trailing spaces trimmed.
    pub fn row_text(&self, row: u16) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = row as usize * self.width as usize;
        let line: String = self.glyphs[start..start + self.width as usize]
            .iter()
            .collect();
        line.trim_end().to_owned()
    }

    /// The whole grid as text: one line per row, trailing spaces trimmed,
    /// rows joined with `'\n'`.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn slot(&self, row: u16, col: u16) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }
}

impl Sink for Canvas {
    fn cell(&mut self, row: u16, col: u16, style: Style, glyph: char) {
        if let Some(i) = self.slot(row, col) {
            self.glyphs[i] = glyph;
            self.styles[i] = style;
        }
    }
}

impl Backend for Canvas {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, col: u16, row: u16, style: Style, glyph: char) {
        self.cell(row, col, style, glyph);
    }

    fn clear(&mut self) -> io::Result<()> {
        self.reset();
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn sync(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
