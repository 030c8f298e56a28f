//! Pulsing-quad demo binary.
//!
//! Opens a fixed 640x480 window, renders a quad whose green channel
//! oscillates with time, and exits on Escape or window close.

mod app;
mod color;
mod geometry;
mod shaders;

use glint_engine::logging;
use glint_engine::window::{Runtime, RuntimeConfig};

use crate::app::PulseQuad;

fn main() {
    logging::init_logging(log::LevelFilter::Info);

    let config = RuntimeConfig {
        title: "glint".to_string(),
        ..RuntimeConfig::default()
    };

    // Fatal initialization failures (windowing refusal, shader compile
    // or link errors) propagate here; print the diagnostic and exit
    // non-zero. There is no graceful-degradation path.
    if let Err(err) = Runtime::run(config, PulseQuad::default()) {
        log::error!("fatal: {err:#}");
        std::process::exit(1);
    }
}
