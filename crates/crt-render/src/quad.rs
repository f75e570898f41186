use glow::HasContext;

/// Fullscreen triangle for post-processing passes.
///
/// A single clip-space triangle covering the screen; the UVs extrapolate to
/// [0,1] over the visible region, saving the diagonal seam of a two-triangle
/// quad.
pub struct FullscreenTriangle {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
}

impl FullscreenTriangle {
    pub fn new(gl: &glow::Context) -> Self {
        #[rustfmt::skip]
        let vertices: [f32; 12] = [
            // pos        uv
            -1.0, -1.0,   0.0, 0.0,
             3.0, -1.0,   2.0, 0.0,
            -1.0,  3.0,   0.0, 2.0,
        ];

        unsafe {
            let vao = gl.create_vertex_array().expect("create vao");
            let vbo = gl.create_buffer().expect("create vbo");

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(&vertices), glow::STATIC_DRAW);

            let stride = 4 * std::mem::size_of::<f32>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                2,
                glow::FLOAT,
                false,
                stride,
                2 * std::mem::size_of::<f32>() as i32,
            );

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Self { vao, vbo }
        }
    }

    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, 3);
            gl.bind_vertex_array(None);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
    }
}

/// Cast a slice of f32 to u8 without pulling in bytemuck.
pub(crate) fn as_bytes(data: &[f32]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            data.as_ptr() as *const u8,
            data.len() * std::mem::size_of::<f32>(),
        )
    }
}
