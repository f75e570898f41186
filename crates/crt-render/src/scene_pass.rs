use glow::HasContext;

use crt_scene::camera::Camera;
use crt_scene::mesh::MeshData;
use crt_scene::node::ObjectGroup;

use crate::fbo::RenderTarget;
use crate::program::compile_program;
use crate::quad::as_bytes;
use crate::shaders;

/// Warm key light and cool fill light framing the object, flattened for
/// direct `uniform_3_f32_slice` upload.
const LIGHT_POSITIONS: [f32; 6] = [1.0, 1.0, -1.0, -1.0, -1.0, -1.0];
const LIGHT_COLORS: [f32; 6] = [
    1.0, 0.976, 0.949, // #fff9f2
    0.949, 1.0, 1.0, // #f2ffff
];
const LIGHT_INTENSITY: f32 = 8.0;

/// A mesh uploaded to the GPU: interleaved position + normal vertices.
pub struct GpuMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    index_count: i32,
}

impl GpuMesh {
    pub fn upload(gl: &glow::Context, mesh: &MeshData) -> Self {
        let mut vertices = Vec::with_capacity(mesh.positions.len() * 6);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            vertices.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z]);
        }

        unsafe {
            let vao = gl.create_vertex_array().expect("create mesh vao");
            let vbo = gl.create_buffer().expect("create mesh vbo");
            let ebo = gl.create_buffer().expect("create mesh ebo");

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(&vertices), glow::STATIC_DRAW);

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            let index_bytes = std::slice::from_raw_parts(
                mesh.indices.as_ptr() as *const u8,
                mesh.indices.len() * std::mem::size_of::<u32>(),
            );
            gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, index_bytes, glow::STATIC_DRAW);

            let stride = 6 * std::mem::size_of::<f32>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                3,
                glow::FLOAT,
                false,
                stride,
                3 * std::mem::size_of::<f32>() as i32,
            );

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Self {
                vao,
                vbo,
                ebo,
                index_count: mesh.indices.len() as i32,
            }
        }
    }

    fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            gl.bind_vertex_array(None);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            gl.delete_buffer(self.ebo);
        }
    }
}

/// Renders the visible object into the scene target with a white backdrop.
pub struct ScenePass {
    program: glow::Program,
    loc_mvp: glow::UniformLocation,
    loc_model: glow::UniformLocation,
    loc_light_pos: glow::UniformLocation,
    loc_light_color: glow::UniformLocation,
    loc_light_intensity: glow::UniformLocation,
    meshes: Vec<GpuMesh>,
}

impl ScenePass {
    pub fn new(gl: &glow::Context) -> Self {
        let program = compile_program(gl, shaders::MESH_VERTEX, shaders::MESH_FRAGMENT);

        unsafe {
            let loc = |name: &str| gl.get_uniform_location(program, name).expect(name);
            Self {
                program,
                loc_mvp: loc("u_mvp"),
                loc_model: loc("u_model"),
                loc_light_pos: loc("u_light_pos[0]"),
                loc_light_color: loc("u_light_color[0]"),
                loc_light_intensity: loc("u_light_intensity"),
                meshes: Vec::new(),
            }
        }
    }

    /// Upload one GPU mesh per group node, in node order.
    pub fn upload_meshes(&mut self, gl: &glow::Context, group: &ObjectGroup) {
        for mesh in &mut self.meshes {
            mesh.destroy(gl);
        }
        self.meshes = group
            .nodes()
            .iter()
            .map(|node| GpuMesh::upload(gl, &node.mesh))
            .collect();
    }

    /// Draw all visible nodes into `target`.
    pub fn render(
        &self,
        gl: &glow::Context,
        group: &ObjectGroup,
        camera: &Camera,
        target: &RenderTarget,
    ) {
        let aspect = target.width as f32 / target.height as f32;
        let view_projection = camera.view_projection(aspect);

        unsafe {
            target.bind(gl);
            gl.enable(glow::DEPTH_TEST);
            gl.disable(glow::BLEND);
            gl.clear_color(1.0, 1.0, 1.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.use_program(Some(self.program));

            gl.uniform_3_f32_slice(Some(&self.loc_light_pos), &LIGHT_POSITIONS);
            gl.uniform_3_f32_slice(Some(&self.loc_light_color), &LIGHT_COLORS);
            gl.uniform_1_f32(Some(&self.loc_light_intensity), LIGHT_INTENSITY);

            for (node, mesh) in group.nodes().iter().zip(&self.meshes) {
                if !node.visible {
                    continue;
                }
                let model = group.model_matrix(node);
                let mvp = view_projection * model;
                gl.uniform_matrix_4_f32_slice(Some(&self.loc_mvp), false, &mvp.to_cols_array());
                gl.uniform_matrix_4_f32_slice(
                    Some(&self.loc_model),
                    false,
                    &model.to_cols_array(),
                );
                mesh.draw(gl);
            }

            gl.disable(glow::DEPTH_TEST);
            gl.use_program(None);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
        for mesh in &self.meshes {
            mesh.destroy(gl);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_constants_cover_two_lights() {
        // One vec3 per light, flattened; the shader declares two of each.
        assert_eq!(LIGHT_POSITIONS.len(), 6);
        assert_eq!(LIGHT_COLORS.len(), 6);
    }

    #[test]
    fn test_light_colors_match_hex_values() {
        // #fff9f2 and #f2ffff at 8-bit precision.
        let expected = [0xff, 0xf9, 0xf2, 0xf2, 0xff, 0xff];
        for (c, e) in LIGHT_COLORS.iter().zip(expected) {
            assert!((c - e as f32 / 255.0).abs() < 2e-3, "channel {c} vs {e:#x}");
        }
    }
}
