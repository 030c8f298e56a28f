//! The fixed shader pair: a vec3 passthrough and a uniform-color fill.

/// Name of the vertex position attribute.
pub const POSITION_ATTRIBUTE: &str = "position";

/// Name of the fragment color uniform, looked up fresh every frame.
pub const COLOR_UNIFORM: &str = "u_color";

pub const VERTEX_SRC: &str = "\
#version 330 core
in vec3 position;

void main() {
    gl_Position = vec4(position, 1.0);
}
";

pub const FRAGMENT_SRC: &str = "\
#version 330 core
out vec4 frag_color;

uniform vec4 u_color;

void main() {
    frag_color = u_color;
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_declare_the_named_bindings() {
        assert!(VERTEX_SRC.contains(&format!("in vec3 {POSITION_ATTRIBUTE}")));
        assert!(FRAGMENT_SRC.contains(&format!("uniform vec4 {COLOR_UNIFORM}")));
    }
}
