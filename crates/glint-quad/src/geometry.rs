//! The unit quad: four shared vertices, two triangles.

/// Vertex positions on the z = 0 plane.
pub const QUAD_VERTICES: [f32; 12] = [
    0.5, 0.5, 0.0, // top right
    0.5, -0.5, 0.0, // bottom right
    -0.5, -0.5, 0.0, // bottom left
    -0.5, 0.5, 0.0, // top left
];

/// Index sequence for two triangles sharing the top-left/bottom-right
/// diagonal. Winding is irrelevant here because face culling is never
/// enabled.
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

/// Decodes the index list into its two triangles.
pub fn triangles() -> [[u32; 3]; 2] {
    [
        [QUAD_INDICES[0], QUAD_INDICES[1], QUAD_INDICES[2]],
        [QUAD_INDICES[3], QUAD_INDICES[4], QUAD_INDICES[5]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_has_four_vertices() {
        assert_eq!(QUAD_VERTICES.len() / 3, 4);
    }

    #[test]
    fn quad_has_six_indices_forming_two_triangles() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert_eq!(triangles().len(), 2);
    }

    #[test]
    fn triangles_share_the_diagonal() {
        assert_eq!(triangles(), [[0, 1, 3], [1, 2, 3]]);
    }

    #[test]
    fn every_index_references_a_vertex() {
        let vertex_count = (QUAD_VERTICES.len() / 3) as u32;
        assert!(QUAD_INDICES.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn vertices_lie_on_the_z0_plane() {
        for v in QUAD_VERTICES.chunks_exact(3) {
            assert_eq!(v[2], 0.0);
        }
    }
}
