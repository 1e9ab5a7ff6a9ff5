//! # weft-tui
//!
//! A retained-mode widget composition engine for character-cell terminals.
//!
//! weft-tui composes a tree of widgets that render into a rectangular grid of
//! styled glyphs and receive routed pointer and key events. Containers perform
//! layout by stacking, splitting, and clipping; each one remaps the coordinates
//! of its children's draw calls and of incoming events, so arbitrarily deep
//! trees stay transparent to their leaves.
//!
//! ## Core Systems
//!
//! - **[`widget`]** — the `Widget` contract, the cell `Sink`, coordinate
//!   remapping, and the cumulative-height index containers route with
//! - **[`widgets`]** — built-in leaves (Text, Button, CheckBox, RadioGroup,
//!   Separator, Inputbox) and containers (List, HorizontalBox, Scroll, Frame,
//!   CollapsingHeader)
//! - **[`event`]** — input events decoupled from the terminal backend, plus
//!   the quit-key table
//! - **[`editor`]** — the text-editing collaborator contract and a
//!   word-wrapping buffer implementation
//! - **[`style`]** — colors, per-glyph styles, and the construction-time theme
//! - **[`backend`]** — the terminal backend contract and the crossterm driver
//! - **[`screen`]** — the root adapter that fixes output bounds and clips
//! - **[`app`]** — the application runtime: render tick, input polling, quit
//! - **[`testing`]** — headless rendering and event helpers for tests

// Foundation
pub mod error;
pub mod style;

// Widget system
pub mod widget;
pub mod widgets;

// Events and text editing
pub mod editor;
pub mod event;

// Terminal backend
pub mod backend;

// Application
pub mod app;
pub mod screen;

// Test support
pub mod testing;

pub use error::Error;
