use anyhow::{Context as _, Result};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl};
use crate::gl::GlContext;
use crate::input::{Key, KeyEvent, KeyState};
use crate::time::RunClock;

use super::close::CloseFlag;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub logical_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            logical_size: LogicalSize::new(640.0, 480.0),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` inside the render loop until a close is requested.
    ///
    /// Initialization failures (windowing layer, window, GL context,
    /// application init) surface here as errors for the caller to print
    /// and terminate on; there is no recovery path. Per-frame
    /// operations are assumed infallible.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to initialize windowing layer")?;

        let mut state = RunState::new(config, app);
        event_loop
            .run_app(&mut state)
            .context("event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct RunState<A> {
    config: RuntimeConfig,
    app: A,
    clock: RunClock,
    close: CloseFlag,
    window: Option<Window>,
    gl: Option<GlContext>,
    fatal: Option<anyhow::Error>,
    torn_down: bool,
}

impl<A: App> RunState<A> {
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            // Elapsed time is measured from windowing-layer startup,
            // not from first frame.
            clock: RunClock::start(),
            close: CloseFlag::default(),
            window: None,
            gl: None,
            fatal: None,
            torn_down: false,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.logical_size)
            .with_resizable(self.config.resizable);

        let (window, gl) = GlContext::create(event_loop, attrs)?;

        center_on_primary_monitor(event_loop, &window);

        gl.apply_viewport(window.inner_size());

        self.app
            .init(gl.gl())
            .context("application initialization failed")?;

        let size = window.inner_size();
        log::info!(
            "window and GL context ready ({}x{} physical)",
            size.width,
            size.height
        );

        self.window = Some(window);
        self.gl = Some(gl);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.close.request();
        event_loop.exit();
    }

    fn render_frame(&mut self) {
        let Some(gl) = &self.gl else { return };

        self.app.frame(gl.gl(), self.clock.elapsed_secs());

        if let Err(err) = gl.swap_buffers() {
            // Per-frame operations carry no recovery path; report and
            // keep looping.
            log::error!("{err:#}");
        }
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        if let Some(gl) = &self.gl {
            self.app.teardown(gl.gl());
        }

        // Surface and context go before the window they target; the
        // event loop itself winds down after this handler returns.
        self.gl = None;
        self.window = None;

        log::debug!("teardown complete");
    }
}

impl<A: App + 'static> ApplicationHandler for RunState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init_window(event_loop) {
            self.fail(event_loop, err);
            return;
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(Window::id) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.close.request(),

            WindowEvent::KeyboardInput { event, .. } => {
                let key_event = translate_key_event(&event);
                if self.app.on_key(key_event) == AppControl::Exit {
                    self.close.request();
                }
            }

            WindowEvent::Resized(new_size) => {
                if let Some(gl) = &self.gl {
                    gl.apply_viewport(new_size);
                }
            }

            WindowEvent::RedrawRequested => {
                // Check-then-act: a close requested earlier in this
                // iteration suppresses the draw.
                if !self.close.is_requested() {
                    self.render_frame();
                }
            }

            _ => {}
        }

        if self.close.is_requested() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.close.is_requested() {
            event_loop.exit();
            return;
        }

        // Continuous redraw; the loop runs as fast as presentation
        // allows. No frame pacing beyond the swap itself.
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

/// Centers the window on the primary display using its reported
/// resolution. Some window managers report no primary monitor; placement
/// is left to them in that case.
fn center_on_primary_monitor(event_loop: &ActiveEventLoop, window: &Window) {
    let Some(monitor) = event_loop.primary_monitor() else {
        log::warn!("no primary monitor reported; leaving window placement to the WM");
        return;
    };

    let screen = monitor.size();
    let origin = monitor.position();
    let outer = window.outer_size();

    let x = origin.x + (screen.width.saturating_sub(outer.width) / 2) as i32;
    let y = origin.y + (screen.height.saturating_sub(outer.height) / 2) as i32;
    window.set_outer_position(PhysicalPosition::new(x, y));
}

/// Translates a winit keyboard event into an engine `KeyEvent`.
fn translate_key_event(event: &winit::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        key: map_key(event.physical_key),
        state: map_key_state(event.state),
        repeat: event.repeat,
    }
}

fn map_key(physical: PhysicalKey) -> Key {
    match physical {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::Enter) => Key::Enter,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        _ => Key::Unknown,
    }
}

fn map_key_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── key mapping ───────────────────────────────────────────────────────

    #[test]
    fn escape_maps_to_escape() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn unhandled_keys_collapse_to_unknown() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::Unknown);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::F12)), Key::Unknown);
    }

    #[test]
    fn element_state_maps_to_key_state() {
        assert_eq!(map_key_state(ElementState::Pressed), KeyState::Pressed);
        assert_eq!(map_key_state(ElementState::Released), KeyState::Released);
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn default_config_is_fixed_640x480() {
        let config = RuntimeConfig::default();
        assert_eq!(config.logical_size, LogicalSize::new(640.0, 480.0));
        assert!(!config.resizable);
    }
}
