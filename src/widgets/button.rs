//! Button widget: a bordered, clickable box.
//!
//! Renders its label inside a box of rule and corner glyphs. The border style
//! switches while focused; a click while focused fires the callback and then
//! clears focus as one-shot visual feedback.

use crate::event::InputEvent;
use crate::style::Theme;
use crate::widget::{Sink, Widget};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// A bordered box around a one-line label, with an optional click callback.
///
/// The rendered height is cached after each render; a pointer click whose row
/// lies within `[0, cached height]` invokes the callback.
pub struct Button {
    label: String,
    on_click: Option<Box<dyn FnMut() + Send>>,
    focused: bool,
    height: u16,
    theme: Theme,
}

impl Button {
    /// Create a button with the given label and no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            focused: false,
            height: 0,
            theme: Theme::default(),
        }
    }

    /// Set the click callback (builder).
    pub fn on_click(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Override the theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button currently holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Widget for Button {
    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        if width == 0 {
            self.height = 0;
            return 0;
        }

        let border = if self.focused {
            self.theme.focused
        } else {
            self.theme.border
        };
        let text = self.theme.text;
        let right = width - 1;

        // Top and bottom rules.
        for col in 1..right {
            sink.cell(0, col, border, HORIZONTAL);
            sink.cell(2, col, border, HORIZONTAL);
        }
        sink.cell(0, 0, border, TOP_LEFT);
        sink.cell(2, 0, border, BOTTOM_LEFT);
        if right > 0 {
            sink.cell(0, right, border, TOP_RIGHT);
            sink.cell(2, right, border, BOTTOM_RIGHT);
        }

        // Middle row: vertical rules and the label, truncated to the interior.
        sink.cell(1, 0, border, VERTICAL);
        if right > 0 {
            sink.cell(1, right, border, VERTICAL);
        }
        let interior = width.saturating_sub(2) as usize;
        for (i, ch) in self.label.chars().take(interior).enumerate() {
            sink.cell(1, 1 + i as u16, text, ch);
        }

        self.height = 3;
        self.height
    }

    fn on_event(&mut self, event: &InputEvent) {
        let InputEvent::Pointer(p) = event else {
            return;
        };
        if !p.is_click() || p.row > self.height {
            return;
        }
        if let Some(callback) = &mut self.on_click {
            callback();
        }
        // One-shot feedback: a focused click releases focus.
        if self.focused {
            self.focused = false;
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::style::Style;
    use crate::testing::{click, key, render_to_string, wheel_down, Canvas};
    use crate::event::Key;

    fn counting_button() -> (Button, Arc<AtomicUsize>) {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let button = Button::new("OK").on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (button, clicks)
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn renders_bordered_box() {
        let mut button = Button::new("OK");
        let out = render_to_string(&mut button, 6, 3);
        assert_eq!(out, "┌────┐\n│OK  │\n└────┘");
    }

    #[test]
    fn render_returns_three_rows() {
        let mut button = Button::new("OK");
        let mut canvas = Canvas::new(10, 5);
        assert_eq!(button.render(10, &mut canvas), 3);
    }

    #[test]
    fn render_zero_width() {
        let mut button = Button::new("OK");
        let mut sink = |_: u16, _: u16, _: Style, _: char| panic!("no cells expected");
        assert_eq!(button.render(0, &mut sink), 0);
    }

    #[test]
    fn label_truncates_to_interior() {
        let mut button = Button::new("A very long label");
        let out = render_to_string(&mut button, 6, 3);
        assert_eq!(out, "┌────┐\n│A ve│\n└────┘");
    }

    #[test]
    fn focused_border_uses_focused_style() {
        let mut button = Button::new("OK");
        button.set_focus(true);
        let mut canvas = Canvas::new(6, 3);
        button.render(6, &mut canvas);
        assert_eq!(canvas.style(0, 0), Some(Theme::default().focused));
    }

    #[test]
    fn unfocused_border_uses_border_style() {
        let mut button = Button::new("OK");
        let mut canvas = Canvas::new(6, 3);
        button.render(6, &mut canvas);
        assert_eq!(canvas.style(0, 0), Some(Theme::default().border));
    }

    #[test]
    fn render_is_idempotent() {
        let mut button = Button::new("OK");
        let first = render_to_string(&mut button, 8, 3);
        let second = render_to_string(&mut button, 8, 3);
        assert_eq!(first, second);
    }

    // ── Clicks ───────────────────────────────────────────────────────

    #[test]
    fn click_inside_fires_once() {
        let (mut button, clicks) = counting_button();
        button.render(10, &mut Canvas::new(10, 3));
        button.on_event(&click(2, 1));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn click_below_cached_height_ignored() {
        let (mut button, clicks) = counting_button();
        button.render(10, &mut Canvas::new(10, 3));
        button.on_event(&click(2, 7));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_click_pointer_ignored() {
        let (mut button, clicks) = counting_button();
        button.render(10, &mut Canvas::new(10, 3));
        button.on_event(&wheel_down(2, 1));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn key_events_ignored() {
        let (mut button, clicks) = counting_button();
        button.render(10, &mut Canvas::new(10, 3));
        button.on_event(&key(Key::Enter));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn click_without_callback_is_harmless() {
        let mut button = Button::new("OK");
        button.render(10, &mut Canvas::new(10, 3));
        button.on_event(&click(2, 1));
    }

    #[test]
    fn focused_click_releases_focus() {
        let (mut button, _clicks) = counting_button();
        button.render(10, &mut Canvas::new(10, 3));
        button.set_focus(true);
        button.on_event(&click(2, 1));
        assert!(!button.is_focused());
    }

    #[test]
    fn unfocused_click_still_fires() {
        let (mut button, clicks) = counting_button();
        button.render(10, &mut Canvas::new(10, 3));
        button.on_event(&click(2, 1));
        assert!(!button.is_focused());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }
}
