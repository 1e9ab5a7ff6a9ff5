//! The quit-key table.
//!
//! [`QuitKeys`] holds the set of key+modifier combinations that stop the run
//! loop. The `with_defaults()` constructor installs the standard set
//! (Escape and Ctrl+C).

use std::collections::HashSet;

use super::input::{Key, KeyEvent, Modifiers};

/// The set of keys that request application shutdown.
#[derive(Debug, Clone, Default)]
pub struct QuitKeys {
    keys: HashSet<(Key, Modifiers)>,
}

impl QuitKeys {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the standard quit keys.
    ///
    /// Defaults:
    /// - `Esc`
    /// - `Ctrl+C`
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.bind(Key::Escape, Modifiers::NONE);
        table.bind(Key::Char('c'), Modifiers::CTRL);
        table
    }

    /// Register a quit key. Re-binding an existing entry is a no-op.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers) {
        self.keys.insert((key, modifiers));
    }

    /// Remove a quit key. Returns `true` if it was bound.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> bool {
        self.keys.remove(&(key, modifiers))
    }

    /// Whether the given key event requests shutdown.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.contains(&(event.code, event.modifiers))
    }

    /// Number of bound quit keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
