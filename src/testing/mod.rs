//! Headless rendering and event helpers for tests.
//!
//! The [`Canvas`] captures a widget's emitted cells into a plain grid; the
//! free functions build the input events tests feed through `on_event`.

pub mod canvas;

use crate::event::{InputEvent, Key, KeyEvent, Modifiers, PointerAction, PointerEvent};
use crate::widget::Widget;

pub use canvas::Canvas;

/// Render a widget into a `width` x `height` canvas and return it as text.
///
/// Each row becomes one line with trailing spaces trimmed; lines are joined
/// with `'\n'` and the final line has no trailing newline.
pub fn render_to_string(widget: &mut dyn Widget, width: u16, height: u16) -> String {
    let mut canvas = Canvas::new(width, height);
    widget.render(width, &mut canvas);
    canvas.to_text()
}

/// A left-button press at `(col, row)`.
pub fn click(col: u16, row: u16) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(
        PointerAction::Down(crate::event::PointerBtn::Left),
        col,
        row,
    ))
}

/// A wheel-up event at `(col, row)`.
pub fn wheel_up(col: u16, row: u16) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(PointerAction::WheelUp, col, row))
}

/// A wheel-down event at `(col, row)`.
pub fn wheel_down(col: u16, row: u16) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(PointerAction::WheelDown, col, row))
}

/// A key press with no modifiers.
pub fn key(code: Key) -> InputEvent {
    InputEvent::Key(KeyEvent::plain(code))
}

/// A key press with modifiers.
pub fn key_with(code: Key, modifiers: Modifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, modifiers))
}

/// A character key press.
pub fn type_char(ch: char) -> InputEvent {
    key(Key::Char(ch))
}
