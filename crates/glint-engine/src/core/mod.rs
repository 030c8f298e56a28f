//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime
//! (platform loop) and the application layer. The runtime owns the
//! window, the GL context, and the close flag; the application owns
//! its GPU objects and per-frame drawing.

mod app;

pub use app::{App, AppControl};
