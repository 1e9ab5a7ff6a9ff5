//! CheckBox widget: a toggleable `[x]` marker with a label.

use crate::event::InputEvent;
use crate::style::Theme;
use crate::widget::{Sink, Widget};

/// A single-row toggle. Clicking its row flips the checked state.
pub struct CheckBox {
    label: String,
    checked: bool,
    theme: Theme,
}

impl CheckBox {
    /// Create an unchecked box with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
            theme: Theme::default(),
        }
    }

    /// Set the initial checked state (builder).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Override the theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Whether the box is currently checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for CheckBox {
    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        if width == 0 {
            return 0;
        }
        let marker = self.theme.marker;
        let text = self.theme.text;
        let mark = if self.checked { 'x' } else { ' ' };

        let prefix = ['[', mark, ']', ' '];
        let label = self.label.chars();
        for (col, ch) in prefix.into_iter().chain(label).enumerate() {
            let col = col as u16;
            if col >= width {
                break;
            }
            let style = if col < 3 { marker } else { text };
            sink.cell(0, col, style, ch);
        }
        1
    }

    fn on_event(&mut self, event: &InputEvent) {
        if let InputEvent::Pointer(p) = event {
            if p.is_click() && p.row == 0 {
                self.toggle();
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;
    use crate::testing::{click, key, render_to_string, wheel_up};

    #[test]
    fn renders_unchecked() {
        let mut cb = CheckBox::new("verbose");
        assert_eq!(render_to_string(&mut cb, 20, 1), "[ ] verbose");
    }

    #[test]
    fn renders_checked() {
        let mut cb = CheckBox::new("verbose").checked(true);
        assert_eq!(render_to_string(&mut cb, 20, 1), "[x] verbose");
    }

    #[test]
    fn truncates_to_width() {
        let mut cb = CheckBox::new("verbose");
        assert_eq!(render_to_string(&mut cb, 6, 1), "[ ] ve");
    }

    #[test]
    fn render_zero_width() {
        let mut cb = CheckBox::new("verbose");
        let mut sink = |_: u16, _: u16, _: crate::style::Style, _: char| {
            panic!("no cells expected")
        };
        assert_eq!(cb.render(0, &mut sink), 0);
    }

    #[test]
    fn click_on_row_toggles() {
        let mut cb = CheckBox::new("verbose");
        cb.on_event(&click(1, 0));
        assert!(cb.is_checked());
        cb.on_event(&click(1, 0));
        assert!(!cb.is_checked());
    }

    #[test]
    fn click_off_row_ignored() {
        let mut cb = CheckBox::new("verbose");
        cb.on_event(&click(1, 1));
        assert!(!cb.is_checked());
    }

    #[test]
    fn wheel_and_keys_ignored() {
        let mut cb = CheckBox::new("verbose");
        cb.on_event(&wheel_up(1, 0));
        cb.on_event(&key(Key::Enter));
        assert!(!cb.is_checked());
    }
}
