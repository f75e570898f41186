use std::path::Path;
use std::sync::Arc;

use glow::HasContext;

use crt_core::clock::FrameClock;
use crt_core::params::{SceneConfig, ScreenParams};
use crt_core::transition::TransitionEvent;
use crt_scene::assets::AssetLoader;
use crt_scene::camera::Camera;
use crt_scene::controller::SceneController;
use crt_scene::node::{showcase_objects, ObjectNode, ObjectSpec};

use crate::composer::Composer;

/// The showcase frame driver: one `tick` per displayed frame.
///
/// Owns the composer, the scene controller and the in-flight asset load.
/// The host's frame callback calls `tick` until it returns an error or
/// `stop` is called, then deregisters the callback and calls `destroy`.
pub struct Showcase {
    composer: Composer,
    controller: SceneController,
    camera: Camera,
    clock: FrameClock,
    scene_config: SceneConfig,
    specs: Vec<ObjectSpec>,
    loader: Option<AssetLoader>,
    active: bool,
}

impl Showcase {
    /// Build the pipeline for a fixed surface size and start loading the
    /// showcase objects from `asset_dir` (`<name>.obj` per object).
    pub fn new(gl: &glow::Context, asset_dir: &Path, width: u32, height: u32) -> Self {
        let params = Arc::new(ScreenParams::default());
        let scene_config = SceneConfig::default();
        let specs = showcase_objects();

        let requests = specs
            .iter()
            .map(|spec| (spec.name.to_string(), asset_dir.join(format!("{}.obj", spec.name))))
            .collect();

        Self {
            composer: Composer::new(gl, params, width, height),
            controller: SceneController::new(&scene_config),
            camera: Camera::default(),
            clock: FrameClock::new(),
            scene_config,
            specs,
            loader: Some(AssetLoader::spawn(requests)),
            active: true,
        }
    }

    /// Whether the frame callback should stay registered.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deregister the loop: no further ticks render.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Swap in an externally edited screen parameter snapshot.
    pub fn set_screen_params(&mut self, params: Arc<ScreenParams>) {
        self.composer.screen_pass.set_params(params);
    }

    pub fn screen_params(&self) -> &Arc<ScreenParams> {
        self.composer.screen_pass.params()
    }

    pub fn set_scene_config(&mut self, config: SceneConfig) {
        self.scene_config = config;
    }

    pub fn controller(&self) -> &SceneController {
        &self.controller
    }

    /// Advance and render one frame.
    ///
    /// A GL error from the surface is fatal: the loop deactivates and no
    /// further draws are submitted.
    pub fn tick(&mut self, gl: &glow::Context) -> Result<(), String> {
        if !self.active {
            return Ok(());
        }

        let dt = self.clock.delta();

        self.poll_assets(gl);

        match self.controller.tick(dt, &self.scene_config) {
            Some(TransitionEvent::EnteredNoise) => {
                let takeover = self.composer.screen_pass.params().with_static_noise(1.0);
                self.composer.screen_pass.set_params(Arc::new(takeover));
            }
            Some(TransitionEvent::EnteredObject) => {
                let cleared = self.composer.screen_pass.params().with_static_noise(0.0);
                self.composer.screen_pass.set_params(Arc::new(cleared));
            }
            None => {}
        }

        self.composer.screen_pass.advance(dt);
        self.composer.render(gl, &self.controller.group, &self.camera);

        let error = unsafe { gl.get_error() };
        if error != glow::NO_ERROR {
            self.active = false;
            log::error!("GL error 0x{error:X}, stopping the frame loop");
            return Err(format!("render surface failure: GL error 0x{error:X}"));
        }

        Ok(())
    }

    /// Populate the scene once the background load resolves. A failed load
    /// leaves the scene empty for good; the effect keeps running over it.
    fn poll_assets(&mut self, gl: &glow::Context) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        let Some(result) = loader.try_poll() else {
            return;
        };
        self.loader = None;

        match result {
            Ok(meshes) => {
                for (spec, (name, mesh)) in self.specs.iter().zip(meshes) {
                    debug_assert_eq!(spec.name, name);
                    self.controller.group.push(ObjectNode::new(spec, mesh));
                }
                self.composer.upload_meshes(gl, &self.controller.group);
                log::info!("Loaded {} showcase objects", self.controller.group.nodes().len());
            }
            Err(e) => {
                log::error!("{e}");
            }
        }
    }

    /// Release GPU resources. Call exactly once, after the loop stops.
    pub fn destroy(&self, gl: &glow::Context) {
        self.composer.destroy(gl);
    }
}
