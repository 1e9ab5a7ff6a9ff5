//! Input event types wrapping crossterm for decoupling.
//!
//! Defines [`InputEvent`], [`KeyEvent`], [`PointerEvent`] and supporting
//! types. Crossterm events are converted via `From` impls so the widget tree
//! never depends on crossterm directly. Pointer events carry grid coordinates
//! that containers translate as they forward events down the tree.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key event with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

// ---------------------------------------------------------------------------
// PointerBtn / PointerAction / PointerEvent
// ---------------------------------------------------------------------------

/// Pointer (mouse) button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerBtn {
    Left,
    Right,
    Middle,
}

/// Pointer action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    Down(PointerBtn),
    Up(PointerBtn),
    Drag(PointerBtn),
    Moved,
    WheelUp,
    WheelDown,
}

/// A pointer event at a grid position.
///
/// The `col`/`row` are relative to the receiving widget's origin: every
/// container that forwards a pointer event to a child translates the
/// coordinates first, so leaves always see their own local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    pub kind: PointerAction,
    pub col: u16,
    pub row: u16,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a pointer event at `(col, row)`.
    pub fn new(kind: PointerAction, col: u16, row: u16) -> Self {
        Self {
            kind,
            col,
            row,
            modifiers: Modifiers::NONE,
        }
    }

    /// The same event with its row replaced, for vertical remapping.
    pub fn with_row(self, row: u16) -> Self {
        Self { row, ..self }
    }

    /// The same event with its column replaced, for horizontal remapping.
    pub fn with_col(self, col: u16) -> Self {
        Self { col, ..self }
    }

    /// Whether this is a left-button press, the click gesture widgets act on.
    pub fn is_click(&self) -> bool {
        self.kind == PointerAction::Down(PointerBtn::Left)
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Pointer(PointerEvent),
    Resize { width: u16, height: u16 },
    Paste(String),
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

/// Convert crossterm key modifiers to our `Modifiers`.
fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.contains(crossterm::event::KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(crossterm::event::KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(crossterm::event::KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        let code = match ct.code {
            crossterm::event::KeyCode::Char(c) => Key::Char(c),
            crossterm::event::KeyCode::Enter => Key::Enter,
            crossterm::event::KeyCode::Esc => Key::Escape,
            crossterm::event::KeyCode::Tab => Key::Tab,
            crossterm::event::KeyCode::BackTab => Key::BackTab,
            crossterm::event::KeyCode::Backspace => Key::Backspace,
            crossterm::event::KeyCode::Delete => Key::Delete,
            crossterm::event::KeyCode::Left => Key::Left,
            crossterm::event::KeyCode::Right => Key::Right,
            crossterm::event::KeyCode::Up => Key::Up,
            crossterm::event::KeyCode::Down => Key::Down,
            crossterm::event::KeyCode::Home => Key::Home,
            crossterm::event::KeyCode::End => Key::End,
            crossterm::event::KeyCode::PageUp => Key::PageUp,
            crossterm::event::KeyCode::PageDown => Key::PageDown,
            crossterm::event::KeyCode::F(n) => Key::F(n),
            // Map unsupported key codes to Escape as a fallback.
            _ => Key::Escape,
        };
        KeyEvent {
            code,
            modifiers: convert_modifiers(ct.modifiers),
        }
    }
}

fn convert_button(b: crossterm::event::MouseButton) -> PointerBtn {
    match b {
        crossterm::event::MouseButton::Left => PointerBtn::Left,
        crossterm::event::MouseButton::Right => PointerBtn::Right,
        crossterm::event::MouseButton::Middle => PointerBtn::Middle,
    }
}

/// Convert a crossterm `Event` into an `InputEvent`.
///
/// Returns `None` for event variants the engine ignores (terminal focus
/// gained/lost notifications).
pub fn from_crossterm(ct: crossterm::event::Event) -> Option<InputEvent> {
    match ct {
        crossterm::event::Event::Key(ke) => Some(InputEvent::Key(KeyEvent::from(ke))),
        crossterm::event::Event::Mouse(me) => {
            let kind = match me.kind {
                crossterm::event::MouseEventKind::Down(b) => PointerAction::Down(convert_button(b)),
                crossterm::event::MouseEventKind::Up(b) => PointerAction::Up(convert_button(b)),
                crossterm::event::MouseEventKind::Drag(b) => PointerAction::Drag(convert_button(b)),
                crossterm::event::MouseEventKind::Moved => PointerAction::Moved,
                crossterm::event::MouseEventKind::ScrollUp => PointerAction::WheelUp,
                crossterm::event::MouseEventKind::ScrollDown => PointerAction::WheelDown,
                // Horizontal scroll folds into the vertical wheel.
                crossterm::event::MouseEventKind::ScrollLeft => PointerAction::WheelUp,
                crossterm::event::MouseEventKind::ScrollRight => PointerAction::WheelDown,
            };
            Some(InputEvent::Pointer(PointerEvent {
                kind,
                col: me.column,
                row: me.row,
                modifiers: convert_modifiers(me.modifiers),
            }))
        }
        crossterm::event::Event::Resize(w, h) => Some(InputEvent::Resize {
            width: w,
            height: h,
        }),
        crossterm::event::Event::Paste(s) => Some(InputEvent::Paste(s)),
        crossterm::event::Event::FocusGained | crossterm::event::Event::FocusLost => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
