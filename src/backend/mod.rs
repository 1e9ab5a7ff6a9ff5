//! Terminal backends.
//!
//! [`Backend`] is the cell-grid abstraction the runtime renders into;
//! [`TermBackend`] is the crossterm implementation. The test canvas in
//! [`crate::testing`] implements the same contract for headless rendering.

pub mod term;

use std::io;

use crate::style::Style;

pub use term::TermBackend;

/// The cell-grid surface the runtime draws on.
///
/// Cell writes take backend order `(col, row)`; out-of-range writes are
/// dropped silently.
pub trait Backend {
    /// Current surface size as `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Write one styled glyph at `(col, row)`.
    fn set_cell(&mut self, col: u16, row: u16, style: Style, glyph: char);

    /// Blank the surface.
    fn clear(&mut self) -> io::Result<()>;

    /// Make everything written since the last `show` visible.
    fn show(&mut self) -> io::Result<()>;

    /// Resynchronize with the underlying surface after a resize, forcing a
    /// full repaint.
    fn sync(&mut self) -> io::Result<()>;
}
