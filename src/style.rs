//! Colors, per-glyph styles, and the construction-time theme.
//!
//! A [`Style`] is the opaque token attached to every emitted glyph. Containers
//! carry styles through untouched; only the terminal backend interprets them.
//! The [`Theme`] bundles the styles leaf widgets need and is attached at
//! construction time, so there is no process-wide mutable style state.

use std::str::FromStr;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A terminal color.
///
/// Parseable from named colors (`"red"`, `"dark_grey"`, ...) and hex strings
/// (`"#rrggbb"` or `"#rgb"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    DarkGrey,
    Grey,
    Rgb(u8, u8, u8),
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or(ParseColorError);
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            "dark_red" | "darkred" => Ok(Color::DarkRed),
            "dark_green" | "darkgreen" => Ok(Color::DarkGreen),
            "dark_yellow" | "darkyellow" => Ok(Color::DarkYellow),
            "dark_blue" | "darkblue" => Ok(Color::DarkBlue),
            "dark_magenta" | "darkmagenta" => Ok(Color::DarkMagenta),
            "dark_cyan" | "darkcyan" => Ok(Color::DarkCyan),
            "dark_grey" | "dark_gray" | "darkgrey" | "darkgray" => Ok(Color::DarkGrey),
            "grey" | "gray" => Ok(Color::Grey),
            _ => Err(ParseColorError),
        }
    }
}

/// Parse a hex color body (without the leading `#`): `rrggbb` or `rgb`.
fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            // Expand: 0xA -> 0xAA
            Some(Color::Rgb(r * 16 + r, g * 16 + g, b * 16 + b))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Carried, never interpreted, by containers. The backend maps it to terminal
/// attributes when a cell is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Style {
    /// A style with all attributes unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color (builder).
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color (builder).
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enable bold (builder).
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enable underline (builder).
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Enable reverse video (builder).
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// The styles leaf widgets draw with, attached at construction time.
///
/// A widget holds the theme it was built with; overriding a single entry is a
/// builder call, and children constructed from the same theme inherit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Plain text and labels.
    pub text: Style,
    /// Borders of unfocused widgets.
    pub border: Style,
    /// Borders of the focused widget.
    pub focused: Style,
    /// Screen background fill.
    pub background: Style,
    /// The cursor glyph in editable text.
    pub cursor: Style,
    /// Selection markers: checkbox brackets, radio buttons.
    pub marker: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Style::new().fg(Color::White),
            border: Style::new().fg(Color::Grey),
            focused: Style::new().fg(Color::Yellow).bold(),
            background: Style::new().bg(Color::Black),
            cursor: Style::new().reverse(),
            marker: Style::new().fg(Color::Cyan),
        }
    }
}

impl Theme {
    /// Override the text style (builder).
    pub fn with_text(mut self, style: Style) -> Self {
        self.text = style;
        self
    }

    /// Override the unfocused border style (builder).
    pub fn with_border(mut self, style: Style) -> Self {
        self.border = style;
        self
    }

    /// Override the focused border style (builder).
    pub fn with_focused(mut self, style: Style) -> Self {
        self.focused = style;
        self
    }

    /// Override the background style (builder).
    pub fn with_background(mut self, style: Style) -> Self {
        self.background = style;
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Color — hex parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parse_hex_6digit() {
        assert_eq!("#ff0000".parse(), Ok(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn parse_hex_mixed_case() {
        assert_eq!("#FF8800".parse(), Ok(Color::Rgb(255, 136, 0)));
    }

    #[test]
    fn parse_hex_3digit_expands() {
        // #abc -> #aabbcc
        assert_eq!("#abc".parse(), Ok(Color::Rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn parse_hex_invalid_length() {
        assert_eq!("#ff00".parse::<Color>(), Err(ParseColorError));
        assert_eq!("#ff00000".parse::<Color>(), Err(ParseColorError));
    }

    #[test]
    fn parse_hex_invalid_chars() {
        assert_eq!("#gghhii".parse::<Color>(), Err(ParseColorError));
    }

    // -----------------------------------------------------------------------
    // Color — named parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parse_named_colors() {
        assert_eq!("red".parse(), Ok(Color::Red));
        assert_eq!("white".parse(), Ok(Color::White));
        assert_eq!("cyan".parse(), Ok(Color::Cyan));
    }

    #[test]
    fn parse_named_case_insensitive() {
        assert_eq!("RED".parse(), Ok(Color::Red));
        assert_eq!("rEd".parse(), Ok(Color::Red));
    }

    #[test]
    fn parse_named_dark_and_grey_variants() {
        assert_eq!("dark_red".parse(), Ok(Color::DarkRed));
        assert_eq!("darkgray".parse(), Ok(Color::DarkGrey));
        assert_eq!("grey".parse(), Ok(Color::Grey));
        assert_eq!("gray".parse(), Ok(Color::Grey));
    }

    #[test]
    fn parse_unknown_color() {
        assert_eq!("rainbow".parse::<Color>(), Err(ParseColorError));
        assert_eq!("".parse::<Color>(), Err(ParseColorError));
    }

    #[test]
    fn parse_color_with_whitespace() {
        assert_eq!("  red  ".parse(), Ok(Color::Red));
        assert_eq!(" #ff0000 ".parse(), Ok(Color::Rgb(255, 0, 0)));
    }

    // -----------------------------------------------------------------------
    // Style
    // -----------------------------------------------------------------------

    #[test]
    fn style_default_is_empty() {
        let s = Style::default();
        assert!(s.fg.is_none());
        assert!(s.bg.is_none());
        assert!(!s.bold);
        assert!(!s.underline);
        assert!(!s.reverse);
    }

    #[test]
    fn style_builder_chain() {
        let s = Style::new().fg(Color::Red).bg(Color::Black).bold().reverse();
        assert_eq!(s.fg, Some(Color::Red));
        assert_eq!(s.bg, Some(Color::Black));
        assert!(s.bold);
        assert!(s.reverse);
        assert!(!s.underline);
    }

    // -----------------------------------------------------------------------
    // Theme
    // -----------------------------------------------------------------------

    #[test]
    fn theme_default_distinguishes_focus() {
        let theme = Theme::default();
        assert_ne!(theme.border, theme.focused);
    }

    #[test]
    fn theme_overrides() {
        let theme = Theme::default()
            .with_text(Style::new().fg(Color::Green))
            .with_focused(Style::new().fg(Color::Red));
        assert_eq!(theme.text.fg, Some(Color::Green));
        assert_eq!(theme.focused.fg, Some(Color::Red));
        // Untouched entries keep their defaults.
        assert_eq!(theme.border, Theme::default().border);
    }
}
