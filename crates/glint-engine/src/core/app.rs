use anyhow::Result;

use crate::input::KeyEvent;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo binary.
pub trait App {
    /// Called once, after the GL context is made current on the main
    /// thread. Build shader programs and upload geometry here.
    /// An error is fatal and propagates to the entry point.
    fn init(&mut self, gl: &glow::Context) -> Result<()>;

    /// Called for key transitions. Return [`AppControl::Exit`] to set
    /// the runtime's close-requested flag; the loop stops on its next
    /// iteration check.
    fn on_key(&mut self, event: KeyEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame with time elapsed since runtime
    /// startup. Per-frame GL operations are assumed infallible.
    fn frame(&mut self, gl: &glow::Context, elapsed_secs: f64);

    /// Called exactly once after the loop exits, before the context is
    /// destroyed. Delete GPU objects here; teardown is not error-checked.
    fn teardown(&mut self, gl: &glow::Context);
}
