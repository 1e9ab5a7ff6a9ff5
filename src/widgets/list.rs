//! List widget: a vertical stack of heterogeneous children.
//!
//! Children stack top to bottom with no gap. Empty slots are first-class:
//! they contribute zero height and keep the cumulative-height index
//! well-defined, so a slot can be filled or vacated without disturbing the
//! routing of its neighbours.

use crate::event::InputEvent;
use crate::widget::{Remap, Sink, StackIndex, Widget};

/// A vertical stack of optional children.
///
/// Pointer events route to the child whose row range contains the event row,
/// after clearing focus across the whole stack. Key and paste events are
/// broadcast to every occupied slot; the previously focused child decides
/// whether to react via its own focus flag.
pub struct List {
    children: Vec<Option<Box<dyn Widget>>>,
    index: StackIndex,
    width: u16,
    focused: bool,
}

impl List {
    /// An empty list.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            index: StackIndex::new(),
            width: 0,
            focused: false,
        }
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Widget + 'static) {
        self.children.push(Some(Box::new(child)));
    }

    /// Append an already-boxed child.
    pub fn push_boxed(&mut self, child: Box<dyn Widget>) {
        self.children.push(Some(child));
    }

    /// Append a zero-height empty slot.
    pub fn push_empty(&mut self) {
        self.children.push(None);
    }

    /// Replace slot `i`. Out-of-range indices are ignored.
    pub fn set(&mut self, i: usize, child: Option<Box<dyn Widget>>) {
        if let Some(slot) = self.children.get_mut(i) {
            *slot = child;
        }
    }

    /// Number of slots, occupied or not.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the list has no slots.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the list currently holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn clear_focus(&mut self) {
        self.focused = false;
        for child in self.children.iter_mut().flatten() {
            child.set_focus(false);
        }
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for List {
    fn set_focus(&mut self, focused: bool) {
        if focused {
            self.focused = true;
        } else {
            self.clear_focus();
        }
    }

    fn render(&mut self, width: u16, sink: &mut dyn Sink) -> u16 {
        self.index.clear();
        self.width = width;
        if width == 0 {
            for _ in &self.children {
                self.index.push(0);
            }
            return 0;
        }
        for child in &mut self.children {
            match child {
                Some(child) => {
                    let offset = self.index.total();
                    let mut remap = Remap::rows(sink, offset, width);
                    let height = child.render(width, &mut remap);
                    self.index.push(height);
                }
                None => self.index.push(0),
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
                let Some(Some(child)) = self.children.get_mut(slot) else {
                    return;
                };
                self.focused = true;
                child.set_focus(true);
                child.on_event(&InputEvent::Pointer(p.with_row(local_row)));
            }
            InputEvent::Key(_) | InputEvent::Paste(_) => {
                for child in self.children.iter_mut().flatten() {
                    child.on_event(event);
                }
            }
            InputEvent::Resize { .. } => {}
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
