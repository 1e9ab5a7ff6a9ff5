//! Scroll widget: a vertical clipping window over one child.

use crate::event::{InputEvent, PointerAction};
use crate::style::Style;
use crate::widget::{Sink, Widget};

/// Rows a scrolled view always keeps reachable; the offset clamp is
/// `total - MIN_VIEW_LINES`.
const MIN_VIEW_LINES: u16 = 2;

/// A vertical window into a taller child.
///
/// Child rows above the offset are dropped; the rest shift up by the offset.
/// `render` reports the child's unclipped total height, not the visible
/// height. Wheel events move the offset; other pointer events are forwarded
/// with the offset added back onto the row.
pub struct Scroll {
    root: Box<dyn Widget>,
    offset: u16,
    width: u16,
    total: u16,
}

impl Scroll {
    /// Wrap a child at offset 0.
    pub fn new(root: impl Widget + 'static) -> Self {
        Self {
            root: Box::new(root),
            offset: 0,
            width: 0,
            total: 0,
        }
    }

    /// The current scroll offset.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    fn max_offset(&self) -> u16 {
        self.total.saturating_sub(MIN_VIEW_LINES)
    }
}

impl Widget for Scroll {
    fn set_focus(&mut self, focused: bool) {
        self.root.set_focus(focused);
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        self.width = width;
        if width == 0 {
            self.total = 0;
            return 0;
        }
        let offset = self.offset;
        let mut clipped = |row: u16, col: u16, style: Style, glyph: char| {
            if row >= offset && col < width {
                sink.cell(row - offset, col, style, glyph);
            }
        };
        self.total = self.root.render(width, &mut clipped);
        self.total
    }

    fn on_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pointer(p) => {
                if p.col >= self.width {
                    return;
                }
                match p.kind {
                    PointerAction::WheelUp => {
                        self.offset = self.offset.saturating_sub(1);
                    }
                    PointerAction::WheelDown => {
                        self.offset = self.offset.saturating_add(1).min(self.max_offset());
                    }
                    _ => {
                        let unclipped = p.row.saturating_add(self.offset);
                        self.root
                            .on_event(&InputEvent::Pointer(p.with_row(unclipped)));
                    }
                }
            }
            InputEvent::Key(_) | InputEvent::Paste(_) => self.root.on_event(event),
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

    use crate::testing::{click, render_to_string, wheel_down, wheel_up, Canvas};
    use crate::widgets::{Button, List, Text};

    /// A widget with a fixed height, counting clicks by row.
    struct Tall {
        height: u16,
        rows: Arc<std::sync::Mutex<Vec<u16>>>,
    }

    impl Widget for Tall {
        fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
            if width == 0 {
                return 0;
            }
            for row in 0..self.height {
                let digit = char::from_digit(u32::from(row) % 10, 10).unwrap();
                sink.cell(row, 0, Style::default(), digit);
            }
            self.height
        }

        fn on_event(&mut self, event: &InputEvent) {
            if let InputEvent::Pointer(p) = event {
                self.rows.lock().unwrap().push(p.row);
            }
        }
    }

    fn tall(height: u16) -> (Tall, Arc<std::sync::Mutex<Vec<u16>>>) {
        let rows = Arc::new(std::sync::Mutex::new(Vec::new()));
        (
            Tall {
                height,
                rows: Arc::clone(&rows),
            },
            rows,
        )
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn offset_zero_is_passthrough() {
        let (child, _) = tall(4);
        let mut scroll = Scroll::new(child);
        assert_eq!(render_to_string(&mut scroll, 5, 4), "0\n1\n2\n3");
    }

    #[test]
    fn offset_drops_leading_rows() {
        let (child, _) = tall(4);
        let mut scroll = Scroll::new(child);
        scroll.render(5, &mut Canvas::new(5, 4));
        scroll.on_event(&wheel_down(0, 0));
        scroll.on_event(&wheel_down(0, 0));
        assert_eq!(render_to_string(&mut scroll, 5, 2), "2\n3");
    }

    #[test]
    fn reports_unclipped_height() {
        let (child, _) = tall(10);
        let mut scroll = Scroll::new(child);
        let mut canvas = Canvas::new(5, 4);
        scroll.render(5, &mut canvas);
        scroll.on_event(&wheel_down(0, 0));
        // Visible rows shrink but the reported height stays at the total.
        assert_eq!(scroll.render(5, &mut canvas), 10);
    }

    #[test]
    fn render_zero_width() {
        let (child, _) = tall(4);
        let mut scroll = Scroll::new(child);
        let mut sink =
            |_: u16, _: u16, _: Style, _: char| panic!("no cells expected");
        assert_eq!(scroll.render(0, &mut sink), 0);
    }

    // ── Wheel bounds ─────────────────────────────────────────────────

    #[test]
    fn wheel_up_floors_at_zero() {
        let (child, _) = tall(10);
        let mut scroll = Scroll::new(child);
        scroll.render(5, &mut Canvas::new(5, 4));
        scroll.on_event(&wheel_up(0, 0));
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn wheel_down_clamps_to_total_minus_two() {
        let (child, _) = tall(10);
        let mut scroll = Scroll::new(child);
        scroll.render(5, &mut Canvas::new(5, 4));

        for _ in 0..6 {
            scroll.on_event(&wheel_down(0, 0));
        }
        assert_eq!(scroll.offset(), 6);

        scroll.on_event(&wheel_down(0, 0));
        scroll.on_event(&wheel_down(0, 0));
        assert_eq!(scroll.offset(), 8);

        scroll.on_event(&wheel_down(0, 0));
        assert_eq!(scroll.offset(), 8);
    }

    #[test]
    fn short_content_never_scrolls() {
        let (child, _) = tall(2);
        let mut scroll = Scroll::new(child);
        scroll.render(5, &mut Canvas::new(5, 4));
        scroll.on_event(&wheel_down(0, 0));
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn offset_stays_bounded_under_any_sequence() {
        let (child, _) = tall(10);
        let mut scroll = Scroll::new(child);
        scroll.render(5, &mut Canvas::new(5, 4));
        let events = [
            wheel_down(0, 0),
            wheel_down(0, 0),
            wheel_up(0, 0),
            wheel_down(0, 0),
            wheel_up(0, 0),
            wheel_up(0, 0),
            wheel_up(0, 0),
        ];
        for ev in &events {
            scroll.on_event(ev);
            assert!(scroll.offset() <= 8);
        }
        assert_eq!(scroll.offset(), 0);
    }

    // ── Pointer forwarding ───────────────────────────────────────────

    #[test]
    fn click_row_translates_by_offset() {
        let (child, rows) = tall(10);
        let mut scroll = Scroll::new(child);
        scroll.render(5, &mut Canvas::new(5, 4));
        scroll.on_event(&wheel_down(0, 0));
        scroll.on_event(&wheel_down(0, 0));
        scroll.on_event(&click(0, 1));
        assert_eq!(*rows.lock().unwrap(), vec![3]);
    }

    #[test]
    fn click_outside_cached_width_drops() {
        let (child, rows) = tall(10);
        let mut scroll = Scroll::new(child);
        scroll.render(5, &mut Canvas::new(5, 4));
        scroll.on_event(&click(5, 1));
        assert!(rows.lock().unwrap().is_empty());
    }

    #[test]
    fn keys_forward_to_child() {
        let mut field = crate::widgets::Inputbox::new();
        field.set_focus(true);
        let mut scroll = Scroll::new(field);
        scroll.render(10, &mut Canvas::new(10, 1));
        scroll.on_event(&crate::testing::type_char('z'));
        assert_eq!(render_to_string(&mut scroll, 10, 1), "z");
    }

    #[test]
    fn click_routes_through_nested_list() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let mut list = List::new();
        list.push(Button::new("OK").on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        list.push(Text::new("below"));
        let mut scroll = Scroll::new(list);
        scroll.render(10, &mut Canvas::new(10, 4));
        scroll.on_event(&click(1, 1));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }
}
