//! Crossterm-backed terminal surface.
//!
//! Owns the real terminal for its lifetime: raw mode, the alternate screen,
//! mouse capture, and bracketed paste are enabled on construction and torn
//! down exactly once, either explicitly via [`TermBackend::fini`] or on drop.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::style::{Attribute, Attributes, ContentStyle, PrintStyledContent, StyledContent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};

use crate::backend::Backend;
use crate::error::Error;
use crate::style::{Color, Style};

fn convert_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as Ct;
    match color {
        Color::Black => Ct::Black,
        Color::Red => Ct::Red,
        Color::Green => Ct::Green,
        Color::Yellow => Ct::Yellow,
        Color::Blue => Ct::Blue,
        Color::Magenta => Ct::Magenta,
        Color::Cyan => Ct::Cyan,
        Color::White => Ct::White,
        Color::DarkRed => Ct::DarkRed,
        Color::DarkGreen => Ct::DarkGreen,
        Color::DarkYellow => Ct::DarkYellow,
        Color::DarkBlue => Ct::DarkBlue,
        Color::DarkMagenta => Ct::DarkMagenta,
        Color::DarkCyan => Ct::DarkCyan,
        Color::DarkGrey => Ct::DarkGrey,
        Color::Grey => Ct::Grey,
        Color::Rgb(r, g, b) => Ct::Rgb { r, g, b },
    }
}

fn convert_style(style: Style) -> ContentStyle {
    let mut attributes = Attributes::default();
    if style.bold {
        attributes.set(Attribute::Bold);
    }
    if style.underline {
        attributes.set(Attribute::Underlined);
    }
    if style.reverse {
        attributes.set(Attribute::Reverse);
    }
    ContentStyle {
        foreground_color: style.fg.map(convert_color),
        background_color: style.bg.map(convert_color),
        underline_color: None,
        attributes,
    }
}

/// The real-terminal backend.
pub struct TermBackend {
    out: BufWriter<Stdout>,
    width: u16,
    height: u16,
    finished: bool,
}

impl TermBackend {
    /// Take over the terminal.
    ///
    /// Fails if raw mode or the alternate screen cannot be entered; nothing
    /// is left half-initialized on failure.
    pub fn new() -> Result<Self, Error> {
        enable_raw_mode().map_err(Error::Runtime)?;
        let mut out = BufWriter::new(io::stdout());
        if let Err(e) = execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste,
            cursor::Hide,
        ) {
            let _ = disable_raw_mode();
            return Err(Error::Runtime(e));
        }
        let (width, height) = crossterm::terminal::size().map_err(Error::Runtime)?;
        Ok(Self {
            out,
            width,
            height,
            finished: false,
        })
    }

    /// Restore the terminal. Safe to call more than once; later calls are
    /// no-ops.
    pub fn fini(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        let _ = execute!(
            self.out,
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show,
        );
        let _ = disable_raw_mode();
    }
}

impl Backend for TermBackend {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, col: u16, row: u16, style: Style, glyph: char) {
        if col >= self.width || row >= self.height {
            return;
        }
        let styled = StyledContent::new(convert_style(style), glyph);
        // Writes land in the buffer; errors surface when `show` flushes.
        let _ = queue!(
            self.out,
            cursor::MoveTo(col, row),
            PrintStyledContent(styled)
        );
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn show(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn sync(&mut self) -> io::Result<()> {
        let (width, height) = crossterm::terminal::size()?;
        self.width = width;
        self.height = height;
        queue!(self.out, Clear(ClearType::All))?;
        self.out.flush()
    }
}

impl Drop for TermBackend {
    fn drop(&mut self) {
        self.fini();
    }
}
