//! Crate error type.
//!
//! Only the fatal/startup class of failures is represented here: backend
//! construction, terminal initialization, and runtime setup. Bounds violations
//! during render or event handling are never errors — they are absorbed by
//! silent clipping in the widget tree.

use std::io;

use thiserror::Error;

/// Errors surfaced to the caller of [`App::run`](crate::app::App::run).
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal backend construction or initialization failed.
    #[error("terminal backend error: {0}")]
    Backend(#[from] io::Error),

    /// The async runtime for the tick/input loop could not be built.
    #[error("runtime initialization failed: {0}")]
    Runtime(io::Error),

    /// The run loop was started without a root widget.
    #[error("no root widget configured")]
    NoRoot,
}
