use std::fmt;

use glow::HasContext;

/// Shader stage kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// A shader build failure carrying the driver's diagnostic log verbatim.
///
/// Both variants are fatal to the caller; there is no retry path.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { stage, log } => {
                write!(f, "{} shader compilation failed:\n{}", stage.name(), log)
            }
            ShaderError::Link { log } => {
                write!(f, "shader program link failed:\n{}", log)
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// Compiles a single shader stage.
///
/// The compile-status flag is read back after compilation; on failure
/// the shader object is deleted and the compiler's log is returned.
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::NativeShader, ShaderError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_kind())
            .map_err(|log| ShaderError::Compile { stage, log })?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }

        Ok(shader)
    }
}

/// Compiles both stages and links them into a program.
///
/// A stage that fails to compile never reaches the linker. The two
/// shader objects are deleted right after a successful link; their
/// compiled code lives on inside the program object.
pub fn link_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::NativeProgram, ShaderError> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
    let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
        Ok(shader) => shader,
        Err(err) => {
            unsafe { gl.delete_shader(vertex) };
            return Err(err);
        }
    };

    unsafe {
        let program = gl
            .create_program()
            .map_err(|log| ShaderError::Link { log })?;
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            return Err(ShaderError::Link { log });
        }

        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_carries_driver_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:3(1): error: syntax error, unexpected NEW_IDENTIFIER".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fragment shader compilation failed"));
        assert!(text.contains("syntax error"));
    }

    #[test]
    fn compile_error_names_the_stage() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: "bad".to_string(),
        };
        assert!(err.to_string().starts_with("vertex shader"));
    }

    #[test]
    fn link_error_carries_linker_log() {
        let err = ShaderError::Link {
            log: "error: unresolved varying".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("link failed"));
        assert!(text.contains("unresolved varying"));
    }
}
