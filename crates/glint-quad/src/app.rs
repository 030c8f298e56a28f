use anyhow::Result;
use glow::HasContext;

use glint_engine::core::{App, AppControl};
use glint_engine::gl::{IndexedMesh, link_program};
use glint_engine::input::{Key, KeyEvent, KeyState};

use crate::color::{CLEAR_COLOR, pulse_green};
use crate::geometry::{QUAD_INDICES, QUAD_VERTICES};
use crate::shaders::{COLOR_UNIFORM, FRAGMENT_SRC, POSITION_ATTRIBUTE, VERTEX_SRC};

/// The pulsing-quad application: one program, one mesh, one uniform.
///
/// All GPU objects are created in `init` and deleted exactly once in
/// `teardown`; the frame loop only updates the uniform's value.
#[derive(Default)]
pub struct PulseQuad {
    program: Option<glow::NativeProgram>,
    mesh: Option<IndexedMesh>,
}

impl App for PulseQuad {
    fn init(&mut self, gl: &glow::Context) -> Result<()> {
        let program = link_program(gl, VERTEX_SRC, FRAGMENT_SRC)?;
        let mesh = IndexedMesh::upload(gl, program, POSITION_ATTRIBUTE, &QUAD_VERTICES, &QUAD_INDICES)?;

        self.program = Some(program);
        self.mesh = Some(mesh);
        Ok(())
    }

    fn on_key(&mut self, event: KeyEvent) -> AppControl {
        // A fresh Escape press requests close; repeats and releases do not.
        if event.key == Key::Escape && event.state == KeyState::Pressed && !event.repeat {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn frame(&mut self, gl: &glow::Context, elapsed_secs: f64) {
        let (Some(program), Some(mesh)) = (self.program, self.mesh.as_ref()) else {
            return;
        };

        unsafe {
            let [r, g, b, a] = CLEAR_COLOR;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.use_program(Some(program));

            // The uniform location is looked up fresh every frame, not
            // cached across frames.
            let green = pulse_green(elapsed_secs);
            let location = gl.get_uniform_location(program, COLOR_UNIFORM);
            gl.uniform_4_f32(location.as_ref(), 0.0, green, 0.0, 1.0);
        }

        mesh.draw(gl);
    }

    fn teardown(&mut self, gl: &glow::Context) {
        // Mesh objects first, then the program; the runtime destroys
        // the context and window after this returns.
        if let Some(mesh) = self.mesh.take() {
            mesh.delete(gl);
        }
        if let Some(program) = self.program.take() {
            unsafe { gl.delete_program(program) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_press_requests_exit() {
        let mut app = PulseQuad::default();
        let event = KeyEvent {
            key: Key::Escape,
            state: KeyState::Pressed,
            repeat: false,
        };
        assert_eq!(app.on_key(event), AppControl::Exit);
    }

    #[test]
    fn escape_release_does_not_exit() {
        let mut app = PulseQuad::default();
        let event = KeyEvent {
            key: Key::Escape,
            state: KeyState::Released,
            repeat: false,
        };
        assert_eq!(app.on_key(event), AppControl::Continue);
    }

    #[test]
    fn escape_repeat_does_not_exit() {
        let mut app = PulseQuad::default();
        let event = KeyEvent {
            key: Key::Escape,
            state: KeyState::Pressed,
            repeat: true,
        };
        assert_eq!(app.on_key(event), AppControl::Continue);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = PulseQuad::default();
        let event = KeyEvent {
            key: Key::Space,
            state: KeyState::Pressed,
            repeat: false,
        };
        assert_eq!(app.on_key(event), AppControl::Continue);
    }
}
