use glow::HasContext;

use crate::program::compile_program;
use crate::quad::FullscreenTriangle;
use crate::shaders;

/// Final pass: sRGB-encode the post-effect image onto the display surface.
pub struct OutputPass {
    program: glow::Program,
    loc_image: glow::UniformLocation,
}

impl OutputPass {
    pub fn new(gl: &glow::Context) -> Self {
        let program = compile_program(gl, shaders::FULLSCREEN_VERTEX, shaders::OUTPUT_FRAGMENT);
        let loc_image = unsafe { gl.get_uniform_location(program, "u_image").expect("u_image") };
        Self { program, loc_image }
    }

    /// Blit `input` to the default framebuffer at the given pixel size.
    pub fn render(
        &self,
        gl: &glow::Context,
        input: glow::Texture,
        width: u32,
        height: u32,
        triangle: &FullscreenTriangle,
    ) {
        unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
            gl.viewport(0, 0, width as i32, height as i32);

            gl.use_program(Some(self.program));
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::BLEND);

            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(input));
            gl.uniform_1_i32(Some(&self.loc_image), 0);

            triangle.draw(gl);

            gl.use_program(None);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
    }
}
