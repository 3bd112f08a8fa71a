use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation,
    WebGlVertexArrayObject,
};
use crate::config::{CameraConfig, MaterialsConfig};
use crate::math::{Mat4, Vec3};
use crate::mesh::Mesh;
use crate::strand::StrandInstance;
use super::webgl::WebGLContext;
use super::shaders::*;

/// Cached uniform locations for the fresnel shader
struct FresnelUniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    camera_pos: Option<WebGlUniformLocation>,
    color_edge: Option<WebGlUniformLocation>,
    color_base: Option<WebGlUniformLocation>,
    alpha: Option<WebGlUniformLocation>,
    fresnel_bias: Option<WebGlUniformLocation>,
    fresnel_scale: Option<WebGlUniformLocation>,
    fresnel_power: Option<WebGlUniformLocation>,
}

/// One uploaded rung half template
struct TemplateMesh {
    vao: WebGlVertexArrayObject,
    // Buffers are kept alive alongside the VAO that references them
    _vertex_buffer: WebGlBuffer,
    _index_buffer: WebGlBuffer,
    index_count: i32,
}

/// Forward render pipeline: one fresnel pass over every visible rung
pub struct RenderPipeline {
    ctx: WebGLContext,

    program: WebGlProgram,
    uniforms: FresnelUniforms,

    upper_template: Option<TemplateMesh>,
    lower_template: Option<TemplateMesh>,

    width: i32,
    height: i32,
}

impl RenderPipeline {
    pub fn new(gl: WebGl2RenderingContext, width: i32, height: i32) -> Result<Self, String> {
        let ctx = WebGLContext::new(gl);

        let program = ctx.create_program(FRESNEL_VERTEX_SHADER, FRESNEL_FRAGMENT_SHADER)?;

        let uniforms = FresnelUniforms {
            model: ctx.get_uniform_location(&program, "u_model"),
            view: ctx.get_uniform_location(&program, "u_view"),
            projection: ctx.get_uniform_location(&program, "u_projection"),
            camera_pos: ctx.get_uniform_location(&program, "u_camera_pos"),
            color_edge: ctx.get_uniform_location(&program, "u_color_edge"),
            color_base: ctx.get_uniform_location(&program, "u_color_base"),
            alpha: ctx.get_uniform_location(&program, "u_alpha"),
            fresnel_bias: ctx.get_uniform_location(&program, "u_fresnel_bias"),
            fresnel_scale: ctx.get_uniform_location(&program, "u_fresnel_scale"),
            fresnel_power: ctx.get_uniform_location(&program, "u_fresnel_power"),
        };

        Ok(Self {
            ctx,
            program,
            uniforms,
            upper_template: None,
            lower_template: None,
            width,
            height,
        })
    }

    /// Upload the two rung half templates to the GPU
    pub fn upload_rung_templates(&mut self, upper: &Mesh, lower: &Mesh) -> Result<(), String> {
        self.upper_template = Some(self.upload_mesh(upper)?);
        self.lower_template = Some(self.upload_mesh(lower)?);
        Ok(())
    }

    fn upload_mesh(&self, mesh: &Mesh) -> Result<TemplateMesh, String> {
        let gl = &self.ctx.gl;

        let vao = self.ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));

        let vertex_data = mesh.vertex_data();
        let vertex_buffer =
            self.ctx.create_buffer_f32(&vertex_data, WebGl2RenderingContext::STATIC_DRAW)?;

        let index_data = mesh.index_data();
        let index_buffer =
            self.ctx.create_index_buffer(index_data, WebGl2RenderingContext::STATIC_DRAW)?;

        // Layout: position(3) + normal(3) = 6 floats
        let stride = 6 * 4;

        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&vertex_buffer));
        gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));

        // Position (location 0)
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, WebGl2RenderingContext::FLOAT, false, stride, 0);

        // Normal (location 1)
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 3, WebGl2RenderingContext::FLOAT, false, stride, 12);

        gl.bind_vertex_array(None);

        Ok(TemplateMesh {
            vao,
            _vertex_buffer: vertex_buffer,
            _index_buffer: index_buffer,
            index_count: index_data.len() as i32,
        })
    }

    /// Render a frame: every visible strand, both rung halves
    pub fn render(
        &self,
        instances: &[StrandInstance],
        materials: &MaterialsConfig,
        camera: &CameraConfig,
        eye: Vec3,
        target: Vec3,
    ) {
        let gl = &self.ctx.gl;

        let aspect = self.width as f32 / self.height as f32;
        let projection =
            Mat4::perspective(camera.fov_degrees.to_radians(), aspect, camera.near, camera.far);
        let view = Mat4::look_at(eye, target, Vec3::UP);

        self.ctx.viewport(0, 0, self.width, self.height);
        self.ctx.clear(1.0, 1.0, 1.0, 1.0);
        self.ctx.enable_depth_test();
        self.ctx.enable_blending();

        gl.use_program(Some(&self.program));

        self.ctx.uniform_matrix4fv(self.uniforms.view.as_ref(), view.as_slice());
        self.ctx.uniform_matrix4fv(self.uniforms.projection.as_ref(), projection.as_slice());
        self.ctx.uniform_3f(self.uniforms.camera_pos.as_ref(), eye.x, eye.y, eye.z);

        let fresnel = &materials.fresnel;
        self.ctx.uniform_1f(self.uniforms.fresnel_bias.as_ref(), fresnel.bias);
        self.ctx.uniform_1f(self.uniforms.fresnel_scale.as_ref(), fresnel.scale);
        self.ctx.uniform_1f(self.uniforms.fresnel_power.as_ref(), fresnel.power);
        self.ctx.uniform_1f(self.uniforms.alpha.as_ref(), fresnel.alpha);

        let halves = [
            (&self.upper_template, &materials.upper),
            (&self.lower_template, &materials.lower),
        ];

        for (template, material) in halves {
            let Some(template) = template else { continue };

            let edge = material.edge_color();
            let base = material.base_color();
            self.ctx.uniform_3f(self.uniforms.color_edge.as_ref(), edge.x, edge.y, edge.z);
            self.ctx.uniform_3f(self.uniforms.color_base.as_ref(), base.x, base.y, base.z);

            gl.bind_vertex_array(Some(&template.vao));

            for instance in instances.iter().filter(|i| i.visible) {
                for model in instance.strand.model_matrices() {
                    self.ctx.uniform_matrix4fv(self.uniforms.model.as_ref(), model.as_slice());
                    gl.draw_elements_with_i32(
                        WebGl2RenderingContext::TRIANGLES,
                        template.index_count,
                        WebGl2RenderingContext::UNSIGNED_INT,
                        0,
                    );
                }
            }
        }

        gl.bind_vertex_array(None);
    }

    /// Resize the drawing surface
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}
