use anyhow::{Context as _, Result, anyhow};
use glow::HasContext;

/// A static, indexed triangle mesh with one tightly-packed float3
/// attribute.
///
/// Vertex and index data are uploaded once with a static usage hint and
/// never mutated afterwards; only the containing objects are deleted at
/// teardown.
pub struct IndexedMesh {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    ebo: glow::NativeBuffer,
    index_count: i32,
}

impl IndexedMesh {
    /// Uploads vertex and index data and records the attribute layout in
    /// a vertex array object.
    ///
    /// `attribute` is looked up on `program` by name and bound as three
    /// contiguous floats per vertex, stride `3 * size_of::<f32>()`,
    /// offset 0, no normalization. Buffer bindings are cleared before
    /// returning so later code cannot mutate through a stale binding;
    /// the element binding stays recorded in the VAO.
    pub fn upload(
        gl: &glow::Context,
        program: glow::NativeProgram,
        attribute: &str,
        vertices: &[f32],
        indices: &[u32],
    ) -> Result<Self> {
        debug_assert!(vertices.len() % 3 == 0);

        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("failed to create vertex array: {e}"))?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to create vertex buffer: {e}"))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            let ebo = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to create index buffer: {e}"))?;
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            let location = gl
                .get_attrib_location(program, attribute)
                .with_context(|| format!("shader has no attribute named {attribute:?}"))?;
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_pointer_f32(
                location,
                3,
                glow::FLOAT,
                false,
                3 * size_of::<f32>() as i32,
                0,
            );

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                ebo,
                index_count: indices.len() as i32,
            })
        }
    }

    /// Binds the vertex array, draws all indices as triangles, unbinds.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            gl.bind_vertex_array(None);
        }
    }

    /// Deletes the vertex array, then the vertex buffer, then the index
    /// buffer. Teardown is not error-checked.
    pub fn delete(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            gl.delete_buffer(self.ebo);
        }
    }
}
