use anyhow::{Context as _, Result, anyhow};
use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

/// Owns the GL surface, context, and loaded function table for one window.
///
/// The context is made current on the creating thread during
/// construction and stays current for the process lifetime; all GL
/// calls must come from that thread.
pub struct GlContext {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    gl: glow::Context,
}

impl GlContext {
    /// Creates the window and a current GL context for it.
    ///
    /// Requests an OpenGL 3.3 core-profile context. Window and context
    /// creation failures are fatal to the caller; common causes
    /// (unsupported context version, missing driver) surface in the
    /// error chain.
    pub fn create(event_loop: &ActiveEventLoop, attrs: WindowAttributes) -> Result<(Window, Self)> {
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, |mut configs| {
                // Any config matching the default template will do; the
                // program needs no multisampling or transparency.
                configs.next().expect("no matching GL framebuffer config")
            })
            .map_err(|e| anyhow!("failed to create GL display: {e}"))?;

        let window = window.context("display builder returned no window")?;

        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));

        let display = gl_config.display();

        let not_current = unsafe { display.create_context(&gl_config, &context_attrs) }
            .context("failed to create OpenGL 3.3 core context")?;

        let surface_attrs = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .context("failed to build surface attributes")?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };

        Ok((window, Self { surface, context, gl }))
    }

    /// Returns the loaded GL function table.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Sets the viewport to the framebuffer's actual pixel size.
    ///
    /// The framebuffer may be larger than the logical window size on
    /// high-density displays; the viewport always follows the
    /// framebuffer.
    pub fn apply_viewport(&self, framebuffer: PhysicalSize<u32>) {
        let (x, y, w, h) = viewport_rect(framebuffer);
        unsafe { self.gl.viewport(x, y, w, h) };
    }

    /// Presents the frame by swapping front and back buffers.
    ///
    /// Blocking behavior follows the display's vertical-sync default;
    /// no swap interval is configured.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("buffer swap failed")
    }
}

/// Viewport rectangle covering a framebuffer of the given pixel size.
pub fn viewport_rect(framebuffer: PhysicalSize<u32>) -> (i32, i32, i32, i32) {
    (0, 0, framebuffer.width as i32, framebuffer.height as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_matches_framebuffer_exactly() {
        assert_eq!(viewport_rect(PhysicalSize::new(640, 480)), (0, 0, 640, 480));
    }

    #[test]
    fn viewport_follows_scaled_framebuffer() {
        // 2x device pixel ratio on a 640x480 logical window.
        assert_eq!(
            viewport_rect(PhysicalSize::new(1280, 960)),
            (0, 0, 1280, 960)
        );
    }

    #[test]
    fn viewport_origin_is_zero() {
        let (x, y, _, _) = viewport_rect(PhysicalSize::new(1, 1));
        assert_eq!((x, y), (0, 0));
    }
}
