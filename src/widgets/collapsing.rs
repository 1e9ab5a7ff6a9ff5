//! CollapsingHeader widget: a button that shows or hides nested children.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::event::InputEvent;
use crate::widget::{Remap, Sink, StackIndex, Widget};
use crate::widgets::Button;

/// A clickable header above an ordered set of children.
///
/// The header always renders. While the section is closed the children
/// contribute nothing and the reported height is the header's alone.
/// Clicking the header toggles the open flag.
pub struct CollapsingHeader {
    header: Button,
    open: Arc<AtomicBool>,
    children: Vec<Box<dyn Widget>>,
    index: StackIndex,
}

impl CollapsingHeader {
    /// A closed section with the given header label.
    pub fn new(label: impl Into<String>) -> Self {
        let open = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&open);
        let header = Button::new(label).on_click(move || {
            flag.fetch_xor(true, Ordering::SeqCst);
        });
        Self {
            header,
            open,
            children: Vec::new(),
            index: StackIndex::new(),
        }
    }

    /// Append a child (builder).
    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    /// Whether the section is currently open.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Open or close the section directly.
    pub fn set_open(&mut self, open: bool) {
        self.open.store(open, Ordering::SeqCst);
    }

    fn clear_focus(&mut self) {
        self.header.set_focus(false);
        for child in &mut self.children {
            child.set_focus(false);
        }
    }
}

impl Widget for CollapsingHeader {
    fn set_focus(&mut self, focused: bool) {
        if !focused {
            self.clear_focus();
        }
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        self.index.clear();
        if width == 0 {
            return 0;
        }
        let header_height = self.header.render(width, &mut Remap::rows(sink, 0, width));
        self.index.push(header_height);
        if self.is_open() {
            for child in &mut self.children {
                let offset = self.index.total();
                let mut remap = Remap::rows(sink, offset, width);
                let height = child.render(width, &mut remap);
                self.index.push(height);
            }
        }
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
                if slot == 0 {
                    self.header.set_focus(true);
                    self.header.on_event(&local);
                } else if let Some(child) = self.children.get_mut(slot - 1) {
                    child.set_focus(true);
                    child.on_event(&local);
                }
            }
            InputEvent::Key(_) | InputEvent::Paste(_) => {
                if self.is_open() {
                    for child in &mut self.children {
                        child.on_event(event);
                    }
                }
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
    use std::sync::atomic::AtomicUsize;

    use crate::style::Style;
    use crate::testing::{click, render_to_string, Canvas};
    use crate::widgets::Text;

    fn section() -> CollapsingHeader {
        CollapsingHeader::new("More")
            .child(Text::new("alpha"))
            .child(Text::new("beta"))
    }

    #[test]
    fn closed_renders_header_only() {
        let mut section = section();
        let mut sink = |_: u16, _: u16, _: Style, _: char| {};
        assert_eq!(section.render(10, &mut sink), 3);
        assert!(!section.is_open());
    }

    #[test]
    fn open_renders_children_below() {
        let mut section = section();
        section.set_open(true);
        assert_eq!(
            render_to_string(&mut section, 8, 5),
            "┌──────┐\n│More  │\n└──────┘\nalpha\nbeta"
        );
    }

    #[test]
    fn open_height_includes_children() {
        let mut section = section();
        section.set_open(true);
        let mut sink = |_: u16, _: u16, _: Style, _: char| {};
        assert_eq!(section.render(10, &mut sink), 5);
    }

    #[test]
    fn render_zero_width() {
        let mut section = section();
        section.set_open(true);
        let mut sink =
            |_: u16, _: u16, _: Style, _: char| panic!("no cells expected");
        assert_eq!(section.render(0, &mut sink), 0);
    }

    #[test]
    fn header_click_toggles_open() {
        let mut section = section();
        section.render(10, &mut Canvas::new(10, 3));
        section.on_event(&click(1, 1));
        assert!(section.is_open());
        section.render(10, &mut Canvas::new(10, 5));
        section.on_event(&click(1, 1));
        assert!(!section.is_open());
    }

    #[test]
    fn closed_children_receive_nothing() {
        let probe_hits = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&probe_hits);

        struct Probe(Arc<AtomicUsize>);
        impl Widget for Probe {
            fn render(&mut self, _width: u16, _sink: &mut dyn Sink) -> u16 {
                1
            }
            fn on_event(&mut self, _event: &InputEvent) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let mut section = CollapsingHeader::new("More").child(Probe(hits));
        section.render(10, &mut Canvas::new(10, 3));
        // Closed: the child owns no rows and gets no broadcasts.
        section.on_event(&click(1, 5));
        section.on_event(&crate::testing::type_char('x'));
        assert_eq!(probe_hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn open_routes_clicks_to_children() {
        let probe_rows = Arc::new(std::sync::Mutex::new(Vec::new()));
        let rows = Arc::clone(&probe_rows);

        struct Probe(Arc<std::sync::Mutex<Vec<u16>>>);
        impl Widget for Probe {
            fn render(&mut self, _width: u16, _sink: &mut dyn Sink) -> u16 {
                2
            }
            fn on_event(&mut self, event: &InputEvent) {
                if let InputEvent::Pointer(p) = event {
                    self.0.lock().unwrap().push(p.row);
                }
            }
        }

        let mut section = CollapsingHeader::new("More").child(Probe(rows));
        section.set_open(true);
        section.render(10, &mut Canvas::new(10, 5));
        // Header is rows 0..3; the child owns rows 3..5.
        section.on_event(&click(0, 4));
        assert_eq!(*probe_rows.lock().unwrap(), vec![1]);
    }
}
