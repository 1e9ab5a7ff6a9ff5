//! HorizontalBox widget: a two-pane split at a fixed column.

use crate::event::InputEvent;
use crate::widget::{Remap, Sink, Widget};

/// Splits the available width at the `border` column.
///
/// The left pane renders into `border` columns at offset 0; the right pane
/// renders into the remainder, shifted right by `border`. Pointer events
/// route by column; key events are not routed by this container.
pub struct HorizontalBox {
    border: u16,
    left: Option<Box<dyn Widget>>,
    right: Option<Box<dyn Widget>>,
}

impl HorizontalBox {
    /// An empty split at the given border column.
    pub fn new(border: u16) -> Self {
        Self {
            border,
            left: None,
            right: None,
        }
    }

    /// Set the left pane (builder).
    pub fn left(mut self, child: impl Widget + 'static) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Set the right pane (builder).
    pub fn right(mut self, child: impl Widget + 'static) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// The border column.
    pub fn border(&self) -> u16 {
        self.border
    }
}

impl Widget for HorizontalBox {
    fn set_focus(&mut self, focused: bool) {
        if !focused {
            if let Some(left) = &mut self.left {
                left.set_focus(false);
            }
            if let Some(right) = &mut self.right {
                right.set_focus(false);
            }
        }
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        if width == 0 {
            return 0;
        }
        let mut height = 0;
        if self.border > 0 {
            if let Some(left) = &mut self.left {
                let left_width = self.border.min(width);
                let mut remap = Remap::cols(sink, 0, left_width);
                height = height.max(left.render(left_width, &mut remap));
            }
        }
        if self.border < width {
            if let Some(right) = &mut self.right {
                let right_width = width - self.border;
                let mut remap = Remap::cols(sink, self.border, right_width);
                height = height.max(right.render(right_width, &mut remap));
            }
        }
        height
    }

    fn on_event(&mut self, event: &InputEvent) {
        // Key events deliberately stop here; only pointer events are routed
        // by column.
        let InputEvent::Pointer(p) = event else {
            return;
        };
        if p.col >= self.border {
            if let Some(right) = &mut self.right {
                let local = p.with_col(p.col - self.border);
                right.on_event(&InputEvent::Pointer(local));
            }
        } else if let Some(left) = &mut self.left {
            left.on_event(event);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
