/// Vertex shader for the two-color fresnel material.
///
/// The reflection factor is computed per vertex from the angle between the
/// view ray and the world-space normal, then interpolated.
pub const FRESNEL_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform vec3 u_camera_pos;
uniform float u_fresnel_bias;
uniform float u_fresnel_scale;
uniform float u_fresnel_power;

out float v_reflection_factor;

void main() {
    vec4 world_pos = u_model * vec4(a_position, 1.0);
    vec3 world_normal = normalize(mat3(u_model) * a_normal);

    vec3 incident = world_pos.xyz - u_camera_pos;

    v_reflection_factor = u_fresnel_bias
        + u_fresnel_scale * pow(1.0 + dot(normalize(incident), world_normal), u_fresnel_power);

    gl_Position = u_projection * u_view * world_pos;
}
"#;

/// Fragment shader: mix base color toward edge color by the fresnel factor
pub const FRESNEL_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

uniform vec3 u_color_edge;
uniform vec3 u_color_base;
uniform float u_alpha;

in float v_reflection_factor;

out vec4 fragColor;

void main() {
    float factor = clamp(v_reflection_factor, 0.0, 1.0);
    fragColor = vec4(mix(u_color_base, u_color_edge, factor), u_alpha);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shaders_not_empty() {
        assert!(!FRESNEL_VERTEX_SHADER.is_empty());
        assert!(!FRESNEL_FRAGMENT_SHADER.is_empty());
    }

    #[test]
    fn test_shader_version() {
        assert!(FRESNEL_VERTEX_SHADER.starts_with("#version 300 es"));
        assert!(FRESNEL_FRAGMENT_SHADER.starts_with("#version 300 es"));
    }

    #[test]
    fn test_attribute_layout_matches_vertex() {
        // Vertex layout is position(3) + normal(3); both attributes must exist
        assert!(FRESNEL_VERTEX_SHADER.contains("layout(location = 0) in vec3 a_position"));
        assert!(FRESNEL_VERTEX_SHADER.contains("layout(location = 1) in vec3 a_normal"));
    }
}
