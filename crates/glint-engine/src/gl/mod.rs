//! OpenGL context + object management.
//!
//! This module is responsible for:
//! - creating the glutin display/context/surface for a window
//! - compiling and linking shader programs with status checks
//! - uploading static vertex/index data behind a vertex array object

mod context;
mod mesh;
mod shader;

pub use context::{GlContext, viewport_rect};
pub use mesh::IndexedMesh;
pub use shader::{ShaderError, ShaderStage, compile_shader, link_program};
