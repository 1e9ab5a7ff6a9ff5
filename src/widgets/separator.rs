//! Separator widget: one blank row of vertical spacing.

use crate::widget::{Sink, Widget};

/// Consumes a single row without emitting any cells. Ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct Separator;

impl Separator {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Separator {
    fn render(&mut self, width: u16, _sink: &mut dyn Sink) -> u16 {
        if width == 0 {
            0
        } else {
            1
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
