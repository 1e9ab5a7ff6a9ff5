//! Application runtime: render tick, input polling, shutdown.
//!
//! The runtime owns the backend and a single lock over the widget tree. A
//! dedicated thread blocks on the terminal's event source and feeds a channel;
//! the async loop multiplexes that channel against a fixed-interval render
//! tick and an optional external quit signal. Every widget mutation happens
//! under the lock, so the tick and the input stream never observe a
//! half-applied event.

use std::sync::PoisonError;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;

use crate::backend::{Backend, TermBackend};
use crate::error::Error;
use crate::event::input::from_crossterm;
use crate::event::{InputEvent, QuitKeys};
use crate::screen::SharedWidget;
use crate::style::Style;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    tick: Duration,
    quit_keys: QuitKeys,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render tick interval (builder). Default is 50ms.
    pub fn tick_interval(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Replace the quit-key table (builder). Default is Escape and Ctrl+C.
    pub fn quit_keys(mut self, keys: QuitKeys) -> Self {
        self.quit_keys = keys;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            quit_keys: QuitKeys::with_defaults(),
        }
    }
}

/// The application: a root widget plus the loop that drives it.
pub struct App {
    root: Option<SharedWidget>,
    config: AppConfig,
    quit_rx: Option<watch::Receiver<bool>>,
}

impl App {
    /// An app with the default configuration and no root.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// An app with an explicit configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            root: None,
            config,
            quit_rx: None,
        }
    }

    /// Set the root widget (builder).
    pub fn root(mut self, root: SharedWidget) -> Self {
        self.root = Some(root);
        self
    }

    /// Attach an external quit signal (builder). Writing `true` into the
    /// paired sender stops the run loop at the next multiplex point.
    pub fn quit_signal(mut self, rx: watch::Receiver<bool>) -> Self {
        self.quit_rx = Some(rx);
        self
    }

    /// Run one full render pass: clear, render the root into the backend's
    /// current width, flip.
    ///
    /// The rightmost column is left unused; drawing into the terminal's last
    /// column triggers auto-wrap artifacts on some emulators.
    pub fn render_once(&self, backend: &mut dyn Backend) -> Result<(), Error> {
        let root = self.root.as_ref().ok_or(Error::NoRoot)?;
        backend.clear()?;
        let (width, _) = backend.size();
        let width = width.saturating_sub(1);
        if width > 0 {
            let mut guard = root.lock().unwrap_or_else(PoisonError::into_inner);
            let mut sink = |row: u16, col: u16, style: Style, glyph: char| {
                backend.set_cell(col, row, style, glyph);
            };
            guard.render(width, &mut sink);
        }
        backend.show()?;
        Ok(())
    }

    /// Apply one input event to the tree under the lock.
    fn apply_event(&self, event: &InputEvent) {
        if let Some(root) = &self.root {
            let mut guard = root.lock().unwrap_or_else(PoisonError::into_inner);
            guard.on_event(event);
        }
    }

    /// Take over the terminal and block until a quit key, the external quit
    /// signal, or a render failure.
    ///
    /// Only backend initialization errors are returned; once the loop is
    /// running, failures are logged and end the loop gracefully.
    pub fn run(self) -> Result<(), Error> {
        if self.root.is_none() {
            return Err(Error::NoRoot);
        }
        let mut backend = TermBackend::new()?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(Error::Runtime)?;

        let (tx, rx) = mpsc::unbounded_channel();
        // The reader thread blocks in crossterm's event source; it exits when
        // the receiver side is dropped after the loop ends.
        std::thread::spawn(move || loop {
            match crossterm::event::read() {
                Ok(raw) => {
                    let Some(event) = from_crossterm(raw) else {
                        continue;
                    };
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    log::error!("input polling failed: {err}");
                    break;
                }
            }
        });

        runtime.block_on(self.run_loop(&mut backend, rx));
        backend.fini();
        Ok(())
    }

    async fn run_loop(
        &self,
        backend: &mut TermBackend,
        mut events: mpsc::UnboundedReceiver<InputEvent>,
    ) {
        let mut ticker = tokio::time::interval(self.config.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut quit_rx = self.quit_rx.clone();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(err) = self.render_once(backend) {
                        log::error!("render pass failed: {err}");
                        return;
                    }
                }
                event = events.recv() => {
                    let Some(event) = event else {
                        log::debug!("input channel closed");
                        return;
                    };
                    match &event {
                        InputEvent::Key(key) if self.config.quit_keys.matches(key) => {
                            log::debug!("quit key received");
                            return;
                        }
                        InputEvent::Resize { width, height } => {
                            log::debug!("resize to {width}x{height}");
                            if let Err(err) = backend.sync() {
                                log::error!("resync failed: {err}");
                                return;
                            }
                            self.apply_event(&event);
                        }
                        _ => self.apply_event(&event),
                    }
                }
                _ = wait_for_quit(&mut quit_rx) => {
                    log::debug!("external quit signal");
                    return;
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve when the external quit signal fires; never, if there is none.
async fn wait_for_quit(rx: &mut Option<watch::Receiver<bool>>) {
    match rx {
        Some(rx) => loop {
            if *rx.borrow() {
                return;
            }
            if rx.changed().await.is_err() {
                // Sender dropped without signalling: stay pending forever.
                std::future::pending::<()>().await;
            }
        },
        None => std::future::pending().await,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
