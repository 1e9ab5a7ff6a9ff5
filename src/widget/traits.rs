//! Widget trait: focus, render, event.
//!
//! The `Widget` trait is the polymorphic capability every node in the tree
//! implements. Rendering emits `(row, col, style, glyph)` cells through a
//! [`Sink`] and reports the number of rows consumed; events arrive already
//! translated into the widget's local coordinate frame by its ancestors.
//! [`Remap`] is the sink adapter containers wrap around their children to
//! perform that translation on the way out.

use crate::event::InputEvent;
use crate::style::Style;

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

/// The callback through which a render call emits styled glyphs.
///
/// Implemented for any `FnMut(row, col, style, glyph)` closure, so callers can
/// pass a plain closure where a sink is expected.
pub trait Sink {
    /// Emit one glyph at `(row, col)` in the caller's coordinate frame.
    fn cell(&mut self, row: u16, col: u16, style: Style, glyph: char);
}

impl<F: FnMut(u16, u16, Style, char)> Sink for F {
    fn cell(&mut self, row: u16, col: u16, style: Style, glyph: char) {
        self(row, col, style, glyph)
    }
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every node in the widget tree.
///
/// Widget is object-safe and `Send` so a tree can be shared with the runtime's
/// input-polling task behind a single lock.
pub trait Widget: Send {
    /// Set or clear this widget's focus flag.
    ///
    /// Containers propagate focus-clearing to all children before asserting
    /// focus on the one selected by a pointer hit. Leaf widgets with no
    /// sub-focus may leave this as the default no-op.
    fn set_focus(&mut self, _focused: bool) {}

    /// Render into `width` columns, emitting cells through `sink`, and return
    /// the number of rows consumed.
    ///
    /// Rendering with width 0 must emit nothing and return 0. Identical
    /// widget state and width always produce identical output.
    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16;

    /// Apply a pointer or key event.
    ///
    /// Pointer coordinates are local to this widget; events outside the drawn
    /// rectangle must be ignored without side effects. Unrecognized keys are
    /// ignored. The default ignores everything.
    fn on_event(&mut self, _event: &InputEvent) {}
}

impl Widget for Box<dyn Widget> {
    fn set_focus(&mut self, focused: bool) {
        (**self).set_focus(focused)
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        (**self).render(width, sink)
    }

    fn on_event(&mut self, event: &InputEvent) {
        (**self).on_event(event)
    }
}

// ---------------------------------------------------------------------------
// Remap
// ---------------------------------------------------------------------------

/// A sink adapter that translates child coordinates into the parent frame.
///
/// Adds a fixed row/column offset to every emitted cell and drops cells whose
/// column falls outside the width granted to the child. Containers stack these
/// as the render recursion descends, so a leaf's `(0, 0)` lands wherever its
/// ancestors placed it.
pub struct Remap<'a> {
    inner: &'a mut dyn Sink,
    row_offset: u16,
    col_offset: u16,
    width: u16,
}

impl<'a> Remap<'a> {
    /// Translate rows down by `row_offset`, clipping columns at `width`.
    pub fn rows(inner: &'a mut dyn Sink, row_offset: u16, width: u16) -> Self {
        Self {
            inner,
            row_offset,
            col_offset: 0,
            width,
        }
    }

    /// Translate columns right by `col_offset`, clipping columns at `width`.
    ///
    /// `width` is the child's own width, before translation.
    pub fn cols(inner: &'a mut dyn Sink, col_offset: u16, width: u16) -> Self {
        Self {
            inner,
            row_offset: 0,
            col_offset,
            width,
        }
    }
}

impl Sink for Remap<'_> {
    fn cell(&mut self, row: u16, col: u16, style: Style, glyph: char) {
        if col >= self.width {
            return;
        }
        self.inner.cell(
            row.saturating_add(self.row_offset),
            col.saturating_add(self.col_offset),
            style,
            glyph,
        );
    }
}

// ===========================================================================
// Tests
// ===========================================================================
