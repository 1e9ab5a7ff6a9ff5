//! Frame widget: an optional header stacked above a body.

use crate::event::InputEvent;
use crate::widget::{Remap, Sink, StackIndex, Widget};

/// A two-slot vertical composition: header first, body beneath.
///
/// Height is the sum of the two. Pointer routing reuses the same
/// cumulative-height logic as a stack of two; keys broadcast to both.
pub struct Frame {
    header: Option<Box<dyn Widget>>,
    root: Box<dyn Widget>,
    index: StackIndex,
}

impl Frame {
    /// Frame a body with no header.
    pub fn new(root: impl Widget + 'static) -> Self {
        Self {
            header: None,
            root: Box::new(root),
            index: StackIndex::new(),
        }
    }

    /// Set the header (builder).
    pub fn header(mut self, header: impl Widget + 'static) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    fn clear_focus(&mut self) {
        if let Some(header) = &mut self.header {
            header.set_focus(false);
        }
        self.root.set_focus(false);
    }
}

impl Widget for Frame {
    fn set_focus(&mut self, focused: bool) {
        if !focused {
            self.clear_focus();
        }
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        self.index.clear();
        if width == 0 {
            self.index.push(0);
            self.index.push(0);
            return 0;
        }
        let header_height = match &mut self.header {
            Some(header) => header.render(width, &mut Remap::rows(sink, 0, width)),
            None => 0,
        };
        self.index.push(header_height);
        let mut remap = Remap::rows(sink, header_height, width);
        let body_height = self.root.render(width, &mut remap);
        self.index.push(body_height);
        self.index.total()
    }

    fn on_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pointer(p) => {
                self.clear_focus();
                let Some((slot, local_row)) = self.index.locate(p.row) else {
                    return;
                };
                let local = InputEvent::Pointer(p.with_row(local_row));
                match slot {
                    0 => {
                        if let Some(header) = &mut self.header {
                            header.set_focus(true);
                            header.on_event(&local);
                        }
                    }
                    _ => {
                        self.root.set_focus(true);
                        self.root.on_event(&local);
                    }
                }
            }
            InputEvent::Key(_) | InputEvent::Paste(_) => {
                if let Some(header) = &mut self.header {
                    header.on_event(event);
                }
                self.root.on_event(event);
            }
            InputEvent::Resize { .. } => {}
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
    use crate::testing::{click, render_to_string, type_char, Canvas};
    use crate::widgets::{Button, Inputbox, Text};

    #[test]
    fn header_stacks_above_body() {
        let mut frame = Frame::new(Text::new("body")).header(Text::new("head"));
        assert_eq!(render_to_string(&mut frame, 10, 2), "head\nbody");
    }

    #[test]
    fn no_header_renders_body_at_top() {
        let mut frame = Frame::new(Text::new("body"));
        assert_eq!(render_to_string(&mut frame, 10, 1), "body");
    }

    #[test]
    fn height_is_sum() {
        let mut frame = Frame::new(Text::new("one two")).header(Text::new("head"));
        let mut sink = |_: u16, _: u16, _: Style, _: char| {};
        // Body wraps into 2 rows at width 4.
        assert_eq!(frame.render(4, &mut sink), 3);
    }

    #[test]
    fn render_zero_width() {
        let mut frame = Frame::new(Text::new("body")).header(Text::new("head"));
        let mut sink =
            |_: u16, _: u16, _: Style, _: char| panic!("no cells expected");
        assert_eq!(frame.render(0, &mut sink), 0);
    }

    #[test]
    fn click_routes_past_header_into_body() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let body = Button::new("OK").on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut frame = Frame::new(body).header(Text::new("head"));
        frame.render(10, &mut Canvas::new(10, 4));

        // Row 0 is the header; row 1 is the button's first row.
        frame.on_event(&click(2, 0));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
        frame.on_event(&click(2, 1));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pointer_moves_focus_between_slots() {
        let mut frame = Frame::new(Inputbox::new()).header(Button::new("hdr"));
        let mut canvas = Canvas::new(10, 4);
        frame.render(10, &mut canvas);

        // Header button spans rows 0..3; the editor sits at row 3.
        frame.on_event(&click(0, 3));
        frame.on_event(&type_char('a'));
        frame.on_event(&click(1, 1));
        frame.on_event(&type_char('b'));

        // Hitting the header cleared the editor's focus, so 'b' was dropped.
        canvas.reset();
        frame.render(10, &mut canvas);
        assert_eq!(canvas.row_text(3), "a");
    }

    #[test]
    fn click_beyond_total_drops() {
        let mut frame = Frame::new(Text::new("body")).header(Text::new("head"));
        frame.render(10, &mut Canvas::new(10, 2));
        frame.on_event(&click(0, 9));
    }
}
