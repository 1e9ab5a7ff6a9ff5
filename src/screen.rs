//! Screen: the root adapter with a fixed logical size.
//!
//! Fills its area with the background style, renders the shared root widget
//! into it, and hard-clips anything falling outside the declared bounds. The
//! root is held behind the same lock the runtime uses, so a screen can sit
//! inside a larger tree while the runtime drives the tree it wraps.

use std::sync::{Arc, Mutex, PoisonError};

use crate::event::InputEvent;
use crate::style::{Style, Theme};
use crate::widget::{Sink, Widget};

/// A widget shared between the render tick and the input task.
pub type SharedWidget = Arc<Mutex<dyn Widget + Send>>;

/// Box a widget into a [`SharedWidget`].
pub fn shared(widget: impl Widget + 'static) -> SharedWidget {
    Arc::new(Mutex::new(widget))
}

/// A fixed-size viewport over a shared root widget.
pub struct Screen {
    width: u16,
    height: u16,
    root: Option<SharedWidget>,
    background: Style,
}

impl Screen {
    /// An empty screen of the given logical size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            root: None,
            background: Theme::default().background,
        }
    }

    /// Set the root widget (builder).
    pub fn root(mut self, root: SharedWidget) -> Self {
        self.root = Some(root);
        self
    }

    /// Override the background style (builder).
    pub fn with_background(mut self, style: Style) -> Self {
        self.background = style;
        self
    }

    /// The declared logical size.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Widget for Screen {
    fn set_focus(&mut self, focused: bool) {
        if let Some(root) = &self.root {
            let mut root = root.lock().unwrap_or_else(PoisonError::into_inner);
            root.set_focus(focused);
        }
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        if width == 0 {
            return 0;
        }
        let clip_width = self.width.min(width);
        let clip_height = self.height;

        let background = self.background;
        for row in 0..clip_height {
            for col in 0..clip_width {
                sink.cell(row, col, background, ' ');
            }
        }

        if let Some(root) = &self.root {
            let mut clipped = |row: u16, col: u16, style: Style, glyph: char| {
                if row < clip_height && col < clip_width {
                    sink.cell(row, col, style, glyph);
                }
            };
            let mut root = root.lock().unwrap_or_else(PoisonError::into_inner);
            root.render(clip_width, &mut clipped);
        }

        // The screen's height is declared, not derived from content.
        self.height
    }

    fn on_event(&mut self, event: &InputEvent) {
        if let Some(root) = &self.root {
            let mut root = root.lock().unwrap_or_else(PoisonError::into_inner);
            root.on_event(event);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
