//! Input events and key bindings.

pub mod binding;
pub mod input;

pub use binding::QuitKeys;
pub use input::{InputEvent, Key, KeyEvent, Modifiers, PointerAction, PointerBtn, PointerEvent};
