//! Glint engine crate.
//!
//! Owns the platform + OpenGL runtime pieces used by the demo binary.

pub mod core;
pub mod gl;
pub mod input;
pub mod time;
pub mod window;

pub mod logging;
