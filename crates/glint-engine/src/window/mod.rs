//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GL layer.

mod close;
mod runtime;

pub use close::CloseFlag;
pub use runtime::{Runtime, RuntimeConfig};
