use std::sync::Arc;

use glow::HasContext;

use crt_core::params::ScreenParams;

use crate::fbo::RenderTarget;
use crate::program::compile_program;
use crate::quad::FullscreenTriangle;
use crate::shaders;

/// Registration table: screen parameter fields exposed as float uniforms.
///
/// Built once at pass creation; every render pushes each field by value, so
/// the shader interface is decoupled from the record's shape.
pub const PARAM_UNIFORMS: &[(&str, fn(&ScreenParams) -> f32)] = &[
    ("u_resolution_ratio", |p| p.resolution_ratio),
    ("u_scanlines_intensity", |p| p.scanlines_intensity),
    ("u_static_noise_intensity", |p| p.static_noise_intensity),
    ("u_static_noise_frequency", |p| p.static_noise_frequency),
    ("u_brightness_noise_intensity", |p| p.brightness_noise_intensity),
    ("u_brightness_noise_frequency", |p| p.brightness_noise_frequency),
    ("u_horizontal_tearing_intensity", |p| p.horizontal_tearing_intensity),
    ("u_horizontal_tearing_frequency", |p| p.horizontal_tearing_frequency),
    ("u_rolling_band_duration", |p| p.rolling_band_duration),
    ("u_rolling_band_height", |p| p.rolling_band_height),
    ("u_rolling_band_static_noise", |p| p.rolling_band_static_noise),
    ("u_rolling_band_brightness_noise", |p| p.rolling_band_brightness_noise),
    ("u_rolling_band_horizontal_tearing", |p| p.rolling_band_horizontal_tearing),
    ("u_rolling_band_chromatic_aberration", |p| p.rolling_band_chromatic_aberration),
    ("u_chromatic_aberration_intensity", |p| p.chromatic_aberration_intensity),
    ("u_curvature_intensity", |p| p.curvature_intensity),
    ("u_vignette_intensity", |p| p.vignette_intensity),
    ("u_vignette_falloff", |p| p.vignette_falloff),
];

/// Parameter snapshot holder with identity-based change detection.
///
/// Swapping in a new `Arc` always counts as a change, even when the values
/// are equal; handing back the same `Arc` is a no-op. Kept GL-free so the
/// semantics are unit-testable.
pub struct ParamSlot {
    params: Arc<ScreenParams>,
    generation: u64,
}

impl ParamSlot {
    pub fn new(params: Arc<ScreenParams>) -> Self {
        Self {
            params,
            generation: 0,
        }
    }

    pub fn params(&self) -> &Arc<ScreenParams> {
        &self.params
    }

    /// Number of accepted snapshot swaps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the snapshot. Returns whether the swap was accepted.
    pub fn replace(&mut self, params: Arc<ScreenParams>) -> bool {
        if Arc::ptr_eq(&self.params, &params) {
            return false;
        }
        self.params = params;
        self.generation += 1;
        true
    }
}

/// Post-processing pass that degrades the rendered scene into an old CRT
/// image.
///
/// Owns the screen shader program and its uniform locations; the fullscreen
/// triangle is shared across passes and passed into `render`.
pub struct ScreenPass {
    program: glow::Program,
    loc_image: glow::UniformLocation,
    loc_time: glow::UniformLocation,
    loc_viewport: glow::UniformLocation,
    loc_rolling_band_enabled: glow::UniformLocation,
    /// Locations matching `PARAM_UNIFORMS`, resolved once.
    param_locs: Vec<glow::UniformLocation>,
    slot: ParamSlot,
    /// Accumulated elapsed time, monotonic, never reset.
    time: f32,
    /// Captured at creation; live resizes are not propagated.
    /// TODO: refresh from the surface in render once resize policy lands.
    viewport: [f32; 2],
}

impl ScreenPass {
    pub fn new(
        gl: &glow::Context,
        params: Arc<ScreenParams>,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Self {
        let program = compile_program(gl, shaders::FULLSCREEN_VERTEX, &shaders::screen_fragment());

        unsafe {
            let loc = |name: &str| gl.get_uniform_location(program, name).expect(name);

            let param_locs = PARAM_UNIFORMS.iter().map(|(name, _)| loc(name)).collect();

            Self {
                program,
                loc_image: loc("u_image"),
                loc_time: loc("u_time"),
                loc_viewport: loc("u_viewport"),
                loc_rolling_band_enabled: loc("u_rolling_band_enabled"),
                param_locs,
                slot: ParamSlot::new(params),
                time: 0.0,
                viewport: [viewport_width as f32, viewport_height as f32],
            }
        }
    }

    /// Advance the internal clock. `dt` must be non-negative.
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn params(&self) -> &Arc<ScreenParams> {
        self.slot.params()
    }

    /// Swap in a new parameter snapshot; takes effect on the next render.
    pub fn set_params(&mut self, params: Arc<ScreenParams>) {
        self.slot.replace(params);
    }

    /// Draw the degraded image.
    ///
    /// When `target` is `None` this is the final pass and the draw goes to
    /// the default framebuffer using the stored viewport; otherwise the
    /// offscreen target is bound (optionally cleared first).
    pub fn render(
        &mut self,
        gl: &glow::Context,
        input: glow::Texture,
        target: Option<&RenderTarget>,
        clear: bool,
        triangle: &FullscreenTriangle,
    ) {
        unsafe {
            match target {
                Some(target) => {
                    target.bind(gl);
                    if clear {
                        gl.clear_color(0.0, 0.0, 0.0, 1.0);
                        gl.clear(glow::COLOR_BUFFER_BIT);
                    }
                }
                None => {
                    gl.bind_framebuffer(glow::FRAMEBUFFER, None);
                    gl.viewport(0, 0, self.viewport[0] as i32, self.viewport[1] as i32);
                }
            }

            gl.use_program(Some(self.program));
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::BLEND);

            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(input));
            gl.uniform_1_i32(Some(&self.loc_image), 0);

            gl.uniform_1_f32(Some(&self.loc_time), self.time);
            gl.uniform_2_f32(Some(&self.loc_viewport), self.viewport[0], self.viewport[1]);

            let params: &ScreenParams = self.slot.params();
            gl.uniform_1_i32(
                Some(&self.loc_rolling_band_enabled),
                params.rolling_band_enabled as i32,
            );
            for ((_, get), loc) in PARAM_UNIFORMS.iter().zip(&self.param_locs) {
                gl.uniform_1_f32(Some(loc), get(params));
            }

            triangle.draw(gl);

            gl.use_program(None);
        }
    }

    /// Release the shader program. Rendering after this is a contract
    /// violation.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
    }
}
