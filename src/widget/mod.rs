//! The widget contract and the container layout machinery.

pub mod stack;
pub mod traits;

pub use stack::StackIndex;
pub use traits::{Remap, Sink, Widget};
