//! RadioGroup widget: a mutually exclusive option set.

use crate::event::InputEvent;
use crate::style::Theme;
use crate::widget::{Sink, Widget};

/// One row per option, marked `(*)` when selected and `( )` otherwise.
///
/// No option starts selected; a click on row `r` selects option `r` and
/// clears every other one, so once a selection exists exactly one option
/// holds it.
pub struct RadioGroup {
    options: Vec<String>,
    selected: Option<usize>,
    theme: Theme,
}

impl RadioGroup {
    /// Create a group with no selection.
    pub fn new(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
            theme: Theme::default(),
        }
    }

    /// Override the theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Index of the selected option, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select option `index`, clearing any previous selection. Out-of-range
    /// indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
    }

    /// The option labels.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Widget for RadioGroup {
    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        if width == 0 {
            return 0;
        }
        let marker = self.theme.marker;
        let text = self.theme.text;

        for (row, label) in self.options.iter().enumerate() {
            let mark = if self.selected == Some(row) { '*' } else { ' ' };
            let prefix = ['(', mark, ')', ' '];
            for (col, ch) in prefix.into_iter().chain(label.chars()).enumerate() {
                let col = col as u16;
                if col >= width {
                    break;
                }
                let style = if col < 3 { marker } else { text };
                sink.cell(row as u16, col, style, ch);
            }
        }
        self.options.len() as u16
    }

    fn on_event(&mut self, event: &InputEvent) {
        if let InputEvent::Pointer(p) = event {
            if p.is_click() {
                self.select(p.row as usize);
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
    use crate::testing::{click, render_to_string, wheel_down};

    fn group() -> RadioGroup {
        RadioGroup::new(["one", "two", "three"])
    }

    #[test]
    fn starts_unselected() {
        let mut g = group();
        assert_eq!(g.selected(), None);
        assert_eq!(render_to_string(&mut g, 20, 3), "( ) one\n( ) two\n( ) three");
    }

    #[test]
    fn height_is_option_count() {
        let mut g = group();
        let mut sink = |_: u16, _: u16, _: crate::style::Style, _: char| {};
        assert_eq!(g.render(20, &mut sink), 3);
    }

    #[test]
    fn render_zero_width() {
        let mut g = group();
        let mut sink = |_: u16, _: u16, _: crate::style::Style, _: char| {
            panic!("no cells expected")
        };
        assert_eq!(g.render(0, &mut sink), 0);
    }

    #[test]
    fn click_selects_row() {
        let mut g = group();
        g.on_event(&click(1, 1));
        assert_eq!(g.selected(), Some(1));
        assert_eq!(render_to_string(&mut g, 20, 3), "( ) one\n(*) two\n( ) three");
    }

    #[test]
    fn selection_is_exclusive() {
        let mut g = group();
        g.on_event(&click(0, 0));
        g.on_event(&click(0, 2));
        assert_eq!(g.selected(), Some(2));
        let out = render_to_string(&mut g, 20, 3);
        assert_eq!(out.matches('*').count(), 1);
    }

    #[test]
    fn out_of_range_click_keeps_selection() {
        let mut g = group();
        g.on_event(&click(0, 1));
        g.on_event(&click(0, 9));
        assert_eq!(g.selected(), Some(1));
    }

    #[test]
    fn wheel_ignored() {
        let mut g = group();
        g.on_event(&wheel_down(0, 1));
        assert_eq!(g.selected(), None);
    }
}
