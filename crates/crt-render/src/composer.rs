use std::sync::Arc;

use crt_core::params::ScreenParams;
use crt_scene::camera::Camera;
use crt_scene::node::ObjectGroup;

use crate::fbo::RenderTarget;
use crate::output_pass::OutputPass;
use crate::quad::FullscreenTriangle;
use crate::scene_pass::ScenePass;
use crate::screen_pass::ScreenPass;

/// Orchestrates the full frame: scene pass → screen pass → output pass.
///
/// The pipeline is built for a fixed surface size; the two intermediate
/// targets and the screen pass viewport share it.
pub struct Composer {
    scene_target: RenderTarget,
    fx_target: RenderTarget,
    scene_pass: ScenePass,
    pub screen_pass: ScreenPass,
    output_pass: OutputPass,
    triangle: FullscreenTriangle,
    width: u32,
    height: u32,
}

impl Composer {
    pub fn new(gl: &glow::Context, params: Arc<ScreenParams>, width: u32, height: u32) -> Self {
        Self {
            scene_target: RenderTarget::new(gl, width, height, true),
            fx_target: RenderTarget::new(gl, width, height, false),
            scene_pass: ScenePass::new(gl),
            screen_pass: ScreenPass::new(gl, params, width, height),
            output_pass: OutputPass::new(gl),
            triangle: FullscreenTriangle::new(gl),
            width,
            height,
        }
    }

    /// Upload GPU meshes for the current group contents.
    pub fn upload_meshes(&mut self, gl: &glow::Context, group: &ObjectGroup) {
        self.scene_pass.upload_meshes(gl, group);
    }

    /// Render one frame to the display surface.
    pub fn render(&mut self, gl: &glow::Context, group: &ObjectGroup, camera: &Camera) {
        self.scene_pass.render(gl, group, camera, &self.scene_target);
        self.screen_pass.render(
            gl,
            self.scene_target.texture,
            Some(&self.fx_target),
            false,
            &self.triangle,
        );
        self.output_pass.render(
            gl,
            self.fx_target.texture,
            self.width,
            self.height,
            &self.triangle,
        );
    }

    /// Release all GPU resources. Call exactly once.
    pub fn destroy(&self, gl: &glow::Context) {
        self.scene_pass.destroy(gl);
        self.screen_pass.destroy(gl);
        self.output_pass.destroy(gl);
        self.triangle.destroy(gl);
        self.scene_target.destroy(gl);
        self.fx_target.destroy(gl);
    }
}
